//! Application-wide constants

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_SUPPORTED_LOCALES: &[&str] = &["en", "ne"];
pub const DEFAULT_MENUS_PATH: &str = "/menus";
pub const DEFAULT_SOURCE_TIMEOUT_SECONDS: u64 = 5;
pub const HOME_HREF: &str = "/";
pub const DEFAULT_LINK_SCHEME: &str = "https://";
