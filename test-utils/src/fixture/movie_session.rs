//! Movie session fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::movie_session;

/// Creates a movie session entity model showing movie `1` in hall `1`.
///
/// # Default Values
/// - id: `1`
/// - show_time: `2026-06-15 19:30:00`
/// - movie_id: `1`
/// - cinema_hall_id: `1`
pub fn entity() -> movie_session::Model {
    movie_session::Model {
        id: 1,
        show_time: NaiveDate::from_ymd_opt(2026, 6, 15)
            .and_then(|d| d.and_hms_opt(19, 30, 0))
            .unwrap_or_default(),
        movie_id: 1,
        cinema_hall_id: 1,
    }
}
