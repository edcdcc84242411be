//! Genre fixtures for creating in-memory test data.

use entity::genre;

/// Creates a genre entity model with the given id and name.
pub fn entity(id: i32, name: &str) -> genre::Model {
    genre::Model {
        id,
        name: name.to_string(),
    }
}
