// ============================================================================
// Portal Core - Menu Location
// File: crates/portal-core/src/domain/menu_location.rs
// Description: Placement slot used to request a set of menus
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MenuLocation {
    Header,
    Footer,
    Sidebar,
}

impl MenuLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuLocation::Header => "HEADER",
            MenuLocation::Footer => "FOOTER",
            MenuLocation::Sidebar => "SIDEBAR",
        }
    }
}

impl fmt::Display for MenuLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuLocation {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HEADER" => Ok(MenuLocation::Header),
            "FOOTER" => Ok(MenuLocation::Footer),
            "SIDEBAR" => Ok(MenuLocation::Sidebar),
            _ => Err(NavigationError::InvalidLocation(s.to_string())),
        }
    }
}
