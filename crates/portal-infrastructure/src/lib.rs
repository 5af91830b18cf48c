//! # Portal Infrastructure
//! 
//! Menu source adapters.

pub mod http;

pub use http::HttpMenuSource;
