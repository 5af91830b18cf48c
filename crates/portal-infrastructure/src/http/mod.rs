//! HTTP adapters for the CMS menu API

pub mod menu_source_impl;

pub use menu_source_impl::HttpMenuSource;
