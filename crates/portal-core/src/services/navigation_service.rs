// ============================================================================
// Portal Core - Navigation Service
// File: crates/portal-core/src/services/navigation_service.rs
// ============================================================================
//! Navigation facade: fetch menus, build the tree, fall back on any failure.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{MenuLocation, NavigationItem};
use crate::error::NavigationError;
use crate::navigation::{build_navigation, header_fallback};
use crate::repositories::MenuSource;

/// Where a resolved navigation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationOrigin {
    Remote,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct ResolvedNavigation {
    pub items: Vec<NavigationItem>,
    pub origin: NavigationOrigin,
}

/// Single entry point for callers that need a menu.
///
/// Never returns an error: source failures, undecodable payloads and empty
/// results all resolve to the fallback registered for the location.
pub struct NavigationService {
    source: Arc<dyn MenuSource>,
    fallbacks: HashMap<MenuLocation, Arc<[NavigationItem]>>,
}

impl NavigationService {
    /// Service with the built-in header fallback.
    pub fn new(source: Arc<dyn MenuSource>) -> Self {
        Self {
            source,
            fallbacks: HashMap::new(),
        }
        .with_fallback(MenuLocation::Header, header_fallback())
    }

    /// Replace the fallback served for `location`.
    pub fn with_fallback(mut self, location: MenuLocation, items: Vec<NavigationItem>) -> Self {
        self.fallbacks.insert(location, items.into());
        self
    }

    pub fn fallback_for(&self, location: MenuLocation) -> Vec<NavigationItem> {
        self.fallbacks
            .get(&location)
            .map(|items| items.to_vec())
            .unwrap_or_default()
    }

    /// Header menu for `locale`, real or fallback.
    pub async fn get_header_navigation(&self, locale: &str) -> Vec<NavigationItem> {
        self.resolve(MenuLocation::Header, locale).await.items
    }

    pub async fn resolve(&self, location: MenuLocation, locale: &str) -> ResolvedNavigation {
        match self.try_resolve(location, locale).await {
            Ok(items) => {
                info!(
                    location = %location,
                    locale = locale,
                    roots = items.len(),
                    "Navigation resolved from menu source"
                );
                ResolvedNavigation {
                    items,
                    origin: NavigationOrigin::Remote,
                }
            }
            Err(e) => {
                warn!(location = %location, locale = locale, "Serving fallback navigation: {}", e);
                ResolvedNavigation {
                    items: self.fallback_for(location),
                    origin: NavigationOrigin::Fallback,
                }
            }
        }
    }

    async fn try_resolve(&self, location: MenuLocation, locale: &str) -> Result<Vec<NavigationItem>, NavigationError> {
        let envelopes = self.source.fetch_menus(location, locale).await?;
        let items = build_navigation(&envelopes);

        if items.is_empty() {
            return Err(NavigationError::EmptyResult { location });
        }
        Ok(items)
    }
}
