//! Menu source trait (port)

use async_trait::async_trait;

use crate::domain::{MenuEnvelope, MenuLocation};
use crate::error::NavigationError;

/// Supplier of raw menu envelopes for a placement slot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_menus(&self, location: MenuLocation, locale: &str) -> Result<Vec<MenuEnvelope>, NavigationError>;
}
