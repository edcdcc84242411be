//! Movie fixtures for creating in-memory test data.

use entity::movie;

/// Default test movie title.
pub const DEFAULT_TITLE: &str = "The Matrix";

/// Default running time in minutes.
pub const DEFAULT_DURATION: i32 = 136;

/// Creates a movie entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"The Matrix"`
/// - description: `"A hacker learns the truth about reality."`
/// - duration: `136`
pub fn entity() -> movie::Model {
    movie::Model {
        id: 1,
        title: DEFAULT_TITLE.to_string(),
        description: "A hacker learns the truth about reality.".to_string(),
        duration: DEFAULT_DURATION,
    }
}
