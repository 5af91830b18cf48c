// ============================================================================
// Portal Infrastructure - HTTP Menu Source
// File: crates/portal-infrastructure/src/http/menu_source_impl.rs
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use portal_core::domain::{MenuEnvelope, MenuLocation};
use portal_core::error::NavigationError;
use portal_core::repositories::MenuSource;
use portal_shared::config::MenuSourceSettings;

/// Reads menu envelopes from the CMS menu endpoint. One request per call, no retry.
pub struct HttpMenuSource {
    client: Client,
    endpoint: String,
}

/// The CMS answers with either a bare array or `{ "data": [...] }`.
/// Entries are decoded one by one so a single bad menu does not sink the rest.
#[derive(Deserialize)]
#[serde(untagged)]
enum MenusPayload {
    List(Vec<Value>),
    Wrapped { data: Vec<Value> },
}

impl MenusPayload {
    fn into_menus(self) -> Vec<MenuEnvelope> {
        match self {
            MenusPayload::List(values) | MenusPayload::Wrapped { data: values } => MenuEnvelope::decode_all(values),
        }
    }
}

impl HttpMenuSource {
    pub fn new(settings: &MenuSourceSettings) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(settings.timeout_seconds))
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint: format!(
                "{}/{}",
                settings.base_url.trim_end_matches('/'),
                settings.menus_path.trim_start_matches('/')
            ),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_url(&self, location: MenuLocation, locale: &str) -> Result<Url, NavigationError> {
        Url::parse_with_params(&self.endpoint, &[("location", location.as_str()), ("locale", locale)])
            .map_err(|e| NavigationError::SourceUnavailable(format!("invalid menu endpoint {}: {}", self.endpoint, e)))
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    async fn fetch_menus(&self, location: MenuLocation, locale: &str) -> Result<Vec<MenuEnvelope>, NavigationError> {
        let url = self.request_url(location, locale)?;
        debug!("Fetching {} menus from {}", location, url);

        let response = self.client.get(url).send().await.map_err(|e| {
            error!("Menu source request failed: {}", e);
            NavigationError::SourceUnavailable(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Menu source returned status {} for location {}", status, location);
            return Err(NavigationError::SourceUnavailable(format!("HTTP {}", status)));
        }

        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read menu source body: {}", e);
            NavigationError::SourceUnavailable(e.to_string())
        })?;

        let payload: MenusPayload = serde_json::from_slice(&body).map_err(|e| {
            error!("Menu source body could not be decoded: {}", e);
            NavigationError::MalformedResponse(e.to_string())
        })?;

        let menus = payload.into_menus();
        debug!("Received {} {} menus", menus.len(), location);
        Ok(menus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(base_url: &str) -> MenuSourceSettings {
        MenuSourceSettings {
            base_url: base_url.to_string(),
            menus_path: "/menus".to_string(),
            timeout_seconds: 2,
        }
    }

    fn header_menu() -> serde_json::Value {
        json!({
            "id": 1,
            "name": {"en": "Main", "ne": "मुख्य"},
            "resolvedUrl": "/",
            "order": 1,
            "isActive": true,
            "isPublished": true,
            "menuItems": [
                {"id": 10, "title": {"en": "News"}, "url": "/content/news", "order": 2,
                 "isActive": true, "isPublished": true, "parentId": null},
                {"id": 11, "title": {"en": "Notices"}, "resolvedUrl": "/content/notice-board",
                 "isActive": true, "isPublished": true, "parentId": 10}
            ]
        })
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let source = HttpMenuSource::new(&settings("http://cms.local/api/"));
        assert_eq!(source.endpoint(), "http://cms.local/api/menus");

        let url = source.request_url(MenuLocation::Footer, "ne").unwrap();
        assert_eq!(url.as_str(), "http://cms.local/api/menus?location=FOOTER&locale=ne");
    }

    #[tokio::test]
    async fn test_fetch_bare_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/menus"))
            .and(query_param("location", "HEADER"))
            .and(query_param("locale", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([header_menu()])))
            .expect(1)
            .mount(&server)
            .await;

        let source = HttpMenuSource::new(&settings(&server.uri()));
        let menus = source.fetch_menus(MenuLocation::Header, "en").await.unwrap();

        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].id, "1");
        assert_eq!(menus[0].menu_items.len(), 2);
        assert_eq!(menus[0].menu_items[1].parent_id.as_deref(), Some("10"));
    }

    #[tokio::test]
    async fn test_fetch_wrapped_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/menus"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [header_menu()]
            })))
            .mount(&server)
            .await;

        let source = HttpMenuSource::new(&settings(&server.uri()));
        let menus = source.fetch_menus(MenuLocation::Header, "en").await.unwrap();
        assert_eq!(menus.len(), 1);
    }

    #[tokio::test]
    async fn test_bad_entries_do_not_sink_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/menus"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 2,
                    "name": 42,
                    "isActive": true,
                    "isPublished": true,
                    "menuItems": [
                        {"id": "good", "title": {"en": "Good"}, "isActive": true, "isPublished": true},
                        {"id": "bad", "title": 42, "isActive": true, "isPublished": true}
                    ]
                },
                "not-a-menu",
                header_menu()
            ])))
            .mount(&server)
            .await;

        let source = HttpMenuSource::new(&settings(&server.uri()));
        let menus = source.fetch_menus(MenuLocation::Header, "en").await.unwrap();

        assert_eq!(menus.len(), 2);
        assert!(menus[0].name.is_empty());
        assert_eq!(menus[0].menu_items.len(), 2);
        assert_eq!(menus[0].menu_items[0].title.get("en"), Some("Good"));
        assert!(menus[0].menu_items[1].title.is_empty());
        assert_eq!(menus[1].id, "1");
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = HttpMenuSource::new(&settings(&server.uri()));
        let err = source.fetch_menus(MenuLocation::Header, "en").await.unwrap_err();
        assert!(matches!(err, NavigationError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"menus": "nope"})))
            .mount(&server)
            .await;

        let source = HttpMenuSource::new(&settings(&server.uri()));
        let err = source.fetch_menus(MenuLocation::Header, "en").await.unwrap_err();
        assert!(matches!(err, NavigationError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_unavailable() {
        let source = HttpMenuSource::new(&settings("http://127.0.0.1:9"));
        let err = source.fetch_menus(MenuLocation::Header, "en").await.unwrap_err();
        assert!(matches!(err, NavigationError::SourceUnavailable(_)));
    }
}
