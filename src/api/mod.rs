//! HTTP API layer

mod health;
mod router;
mod state;
mod types;
mod users;

pub use router::create_router_with_state;
pub use state::AppState;
pub use types::{ApiError, UserRequest, UserResponse};
