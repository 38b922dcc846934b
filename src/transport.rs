//! Persistence transport: how payloads reach the remote API.
//!
//! The core does not know about HTTP details beyond this thin client; errors
//! are surfaced to the caller unmodified and never retried here, so a failed
//! save leaves the editor's in-memory state untouched.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::wire::WirePayload;

/// Opaque save/load capability for one entity collection.
#[async_trait]
pub trait ContentTransport: Send + Sync {
    /// Persist the payload; returns the server's echo (with assigned id and
    /// timestamps).
    async fn save(&self, payload: &WirePayload) -> Result<WirePayload, TransportError>;

    /// Fetch one entity by id.
    async fn load(&self, id: &str) -> Result<WirePayload, TransportError>;
}

/// REST client for one collection endpoint of the admin API
/// (e.g. `https://api.example.com/api/articles`).
pub struct RestTransport {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl RestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: None,
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn parse(response: reqwest::Response) -> Result<WirePayload, TransportError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TransportError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ContentTransport for RestTransport {
    async fn save(&self, payload: &WirePayload) -> Result<WirePayload, TransportError> {
        // Create on first save, update once the server has assigned an id.
        let builder = match &payload.id {
            Some(id) => self.client.put(format!("{}/{}", self.base_url, id)),
            None => self.client.post(&self.base_url),
        };
        let response = self.request(builder).json(payload).send().await?;
        Self::parse(response).await
    }

    async fn load(&self, id: &str) -> Result<WirePayload, TransportError> {
        let response = self
            .request(self.client.get(format!("{}/{}", self.base_url, id)))
            .send()
            .await?;
        Self::parse(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn article_payload() -> serde_json::Value {
        json!({
            "id": "42",
            "title": "你好",
            "content": "正文",
            "summary": "",
            "translations": [
                { "language": "en", "title": "Hello", "content": "", "summary": "" }
            ]
        })
    }

    #[tokio::test]
    async fn test_save_new_entity_posts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/articles"))
            .and(body_partial_json(json!({ "title": "你好" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(article_payload()))
            .mount(&mock_server)
            .await;

        let transport = RestTransport::new(format!("{}/api/articles", mock_server.uri()));

        let payload: WirePayload = serde_json::from_value(json!({ "title": "你好" })).unwrap();
        let echoed = transport.save(&payload).await.expect("save");

        assert_eq!(echoed.id.as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_save_existing_entity_puts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/articles/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(article_payload()))
            .mount(&mock_server)
            .await;

        let transport = RestTransport::new(format!("{}/api/articles", mock_server.uri()));

        let payload: WirePayload =
            serde_json::from_value(json!({ "id": "42", "title": "你好" })).unwrap();
        transport.save(&payload).await.expect("save");
    }

    #[tokio::test]
    async fn test_load_parses_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/articles/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(article_payload()))
            .mount(&mock_server)
            .await;

        let transport = RestTransport::new(format!("{}/api/articles", mock_server.uri()));
        let payload = transport.load("42").await.expect("load");

        assert_eq!(payload.id.as_deref(), Some("42"));
        assert_eq!(payload.translations.len(), 1);
        assert_eq!(payload.translations[0].language, "en");
    }

    #[tokio::test]
    async fn test_api_token_header_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/articles/42"))
            .and(header("Authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(article_payload()))
            .mount(&mock_server)
            .await;

        let transport = RestTransport::new(format!("{}/api/articles", mock_server.uri()))
            .with_api_token("secret-token");

        transport.load("42").await.expect("load with token");
    }

    #[tokio::test]
    async fn test_api_error_surfaced_with_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/articles/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&mock_server)
            .await;

        let transport = RestTransport::new(format!("{}/api/articles", mock_server.uri()));
        let err = transport.load("missing").await.unwrap_err();

        match err {
            TransportError::Api { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let transport = RestTransport::new("https://api.example.com/api/articles/");
        assert_eq!(transport.base_url, "https://api.example.com/api/articles");
    }
}
