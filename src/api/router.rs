use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::users;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::live))
        // Users API
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::repository::mock::{MockUserCache, MockUserRepository};
    use crate::infrastructure::user::CachedUserRepository;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_router_builds() {
        let users = Arc::new(CachedUserRepository::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockUserCache::new()),
        ));

        let _router = create_router_with_state(AppState::new(users));
    }
}
