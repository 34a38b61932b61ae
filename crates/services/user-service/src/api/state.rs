//! Application state shared by every handler.

use std::sync::Arc;

use crate::infra::HealthCheck;
use crate::service::UserService;

/// Application state containing the injected services.
#[derive(Clone)]
pub struct AppState {
    /// User business logic
    pub user_service: Arc<dyn UserService>,
    /// Storage connectivity check for `/health`
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserService>, health: Arc<dyn HealthCheck>) -> Self {
        Self {
            user_service,
            health,
        }
    }
}
