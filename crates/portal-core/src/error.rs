//! Navigation errors

use thiserror::Error;

use crate::domain::MenuLocation;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigationError {
    #[error("Menu source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Malformed menu response: {0}")]
    MalformedResponse(String),

    #[error("No active menu items for location {location}")]
    EmptyResult { location: MenuLocation },

    #[error("Invalid menu location: {0}")]
    InvalidLocation(String),
}
