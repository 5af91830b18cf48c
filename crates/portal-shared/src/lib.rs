//! # Portal Shared
//! 
//! Shared configuration, telemetry, constants and helpers for the portal.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use error::AppError;
