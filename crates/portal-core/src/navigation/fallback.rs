// ============================================================================
// Portal Core - Fallback Navigation
// File: crates/portal-core/src/navigation/fallback.rs
// Description: Hand-authored header menu served when the CMS cannot be used
// ============================================================================

use crate::domain::{LocalizedText, NavigationItem};

fn title(en: &str, ne: &str) -> LocalizedText {
    LocalizedText::new().with("en", en).with("ne", ne)
}

fn link(id: &str, href: &str, order: i64, en: &str, ne: &str) -> NavigationItem {
    NavigationItem::link(id, href, order, title(en, ne))
}

/// Header navigation used when the menu source is down or returns nothing usable.
pub fn header_fallback() -> Vec<NavigationItem> {
    vec![
        link("home", "/", 1, "Home", "गृहपृष्ठ"),
        link("downloads", "/downloads", 2, "Downloads", "डाउनलोड"),
        link("gallery", "/gallery", 3, "Gallery", "ग्यालेरी").with_submenu(vec![
            link("photo-gallery", "/gallery/photos", 1, "Photo Gallery", "फोटो ग्यालेरी"),
            link("video-gallery", "/gallery/videos", 2, "Video Gallery", "भिडियो ग्यालेरी"),
        ]),
        link("policies", "/content/policies", 4, "Policies", "नीतिहरू").with_submenu(vec![
            link("acts", "/content/acts", 1, "Acts", "ऐन"),
            link("regulations", "/content/regulations", 2, "Regulations", "नियमावली"),
            link("guidelines", "/content/guidelines", 3, "Guidelines", "निर्देशिका"),
        ]),
        link("plans", "/content/plans", 5, "Plans", "योजनाहरू"),
        link("news", "/content/news", 6, "News", "समाचार").with_submenu(vec![
            link("notice-board", "/content/notice-board", 1, "Notices", "सूचना"),
            link("press-releases", "/content/press-releases", 2, "Press Releases", "प्रेस विज्ञप्ति"),
        ]),
        link("contact", "/contact", 7, "Contact", "सम्पर्क"),
    ]
}
