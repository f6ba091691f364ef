//! Domain layer - Core entities and collaborator contracts

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{User, UserCache, UserId, UserInput, UserRepository};
