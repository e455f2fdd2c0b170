//! User entity <-> model mapper

use reanvue_core::entities::{Role, User};
use reanvue_core::DomainError;

use crate::models::UserModel;

/// Convert UserModel to User entity.
///
/// Fallible: the role column is TEXT, and a value outside the closed role
/// set means the row is corrupt.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role: Role = model
            .role
            .parse()
            .map_err(|e: reanvue_core::RoleParseError| DomainError::DatabaseError(e.to_string()))?;

        Ok(User {
            id: model.id,
            username: model.username,
            email: model.email,
            display_name: model.display_name,
            avatar: model.avatar,
            description: model.description,
            status: model.status,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
