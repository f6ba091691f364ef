//! User domain: entity, write payload, and collaborator contracts

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{User, UserId, UserInput};
pub use repository::{UserCache, UserRepository};
pub use validation::{validate_age, validate_user_id, UserValidationError};
