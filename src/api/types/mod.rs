mod error;
mod user;

pub use error::ApiError;
pub use user::{UserRequest, UserResponse};
