use std::sync::Arc;

use portal_core::NavigationService;
use portal_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub navigation: Arc<NavigationService>,
    pub config: AppConfig,
}
