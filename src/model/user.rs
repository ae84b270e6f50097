use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::petlodge_user::Model> for UserDto {
    fn from(user: entity::petlodge_user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

/// Request body for creating a new account
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterUserDto {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Request body for logging in with an existing account
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginUserDto {
    pub email: String,
    pub password: String,
}

/// Request body for updating the current user's profile
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateProfileDto {
    pub name: String,
}
