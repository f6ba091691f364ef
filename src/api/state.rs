use std::sync::Arc;

use crate::infrastructure::user::CachedUserRepository;

/// Shared state for API handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub users: Arc<CachedUserRepository>,
}

impl AppState {
    pub fn new(users: Arc<CachedUserRepository>) -> Self {
        Self { users }
    }
}
