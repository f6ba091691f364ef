//! Request and response payloads for the users API

use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// Body for POST /users and PUT /users/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct UserRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
}

/// User representation returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    pub created_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            name: user.name().map(str::to_string),
            age: user.age(),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}
