//! Authenticated user domain model.

/// A user known to the service.
///
/// Users are created by the external authentication component; this service only
/// resolves them from the session identity.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
        }
    }
}
