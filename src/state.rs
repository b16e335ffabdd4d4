//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;

/// Handler state. Cloned per request; clones share the same service.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
