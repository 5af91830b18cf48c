//! Utility functions

/// Reduce a requested locale tag to a supported language code.
///
/// `"EN-us"` becomes `"en"`; anything unsupported or blank falls back to `default_locale`.
pub fn normalize_locale(requested: Option<&str>, supported: &[String], default_locale: &str) -> String {
    let Some(raw) = requested.map(str::trim).filter(|s| !s.is_empty()) else {
        return default_locale.to_string();
    };

    let language = raw
        .split(['-', '_'])
        .next()
        .unwrap_or(raw)
        .to_ascii_lowercase();

    if supported.iter().any(|s| s.eq_ignore_ascii_case(&language)) {
        language
    } else {
        default_locale.to_string()
    }
}
