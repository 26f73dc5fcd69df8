//! Single-shot HTTP dispatcher.

use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestSpec;
use crate::response::Response;

/// HTTP client for Jamf Pro. One network call per request, never retried.
#[derive(Debug, Clone)]
pub struct JamfHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl JamfHttpClient {
    /// Create a new HTTP client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // The call deadline is enforced per request in `execute_within`.
        let builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed);

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Configuration(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a request under the configured default deadline.
    pub async fn execute(&self, request: &RequestSpec) -> Result<Response> {
        self.execute_within(request, self.config.timeout).await
    }

    /// Execute a request; the send and the full body read must finish
    /// within `deadline`.
    #[instrument(
        skip(self, request),
        fields(method = ?request.method(), url = %request.url(), generation = %request.generation())
    )]
    pub async fn execute_within(&self, request: &RequestSpec, deadline: Duration) -> Result<Response> {
        match tokio::time::timeout(deadline, self.execute_once(request, deadline)).await {
            Ok(result) => result,
            Err(_) => {
                info!(deadline_ms = deadline.as_millis() as u64, "Request deadline exceeded");
                Err(Error::new(ErrorKind::Timeout(deadline)))
            }
        }
    }

    async fn execute_once(&self, request: &RequestSpec, deadline: Duration) -> Result<Response> {
        let mut req = self
            .inner
            .request(request.method().to_reqwest(), request.url().clone())
            .header(reqwest::header::ACCEPT, request.accept())
            .header(
                reqwest::header::AUTHORIZATION,
                request.authorization().header_value(),
            );

        if let Some(body) = request.body() {
            req = req
                .header(reqwest::header::CONTENT_TYPE, body.content_type)
                .body(body.bytes.clone());
        }

        if self.config.enable_tracing {
            debug!(
                scheme = request.authorization().scheme(),
                body_len = request.body().map(|b| b.bytes.len()),
                "Sending request"
            );
        }

        let response = req
            .send()
            .await
            .map_err(|e| transport_error(e, deadline))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, deadline))?;

        if !(200..300).contains(&status) {
            if self.config.enable_tracing {
                info!(status, content_length = body.len(), "Non-success response");
            }
            return Err(Error::new(ErrorKind::RequestFailed {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            }));
        }

        if self.config.enable_tracing {
            debug!(status, content_length = body.len(), "Response received");
        }

        Ok(Response::new(status, headers, body))
    }
}

fn transport_error(err: reqwest::Error, deadline: Duration) -> Error {
    if err.is_timeout() {
        Error::with_source(ErrorKind::Timeout(deadline), err)
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::ApiGeneration;
    use crate::request::{Authorization, RequestBuilder, RequestMethod};
    use serde::Deserialize;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct Item {
        id: String,
    }

    fn get(uri: &str, segment: &str) -> RequestSpec {
        RequestBuilder::new(ApiGeneration::V1, RequestMethod::Get)
            .segment(segment)
            .authorization(Authorization::Bearer("test-token".to_string()))
            .build(uri)
            .unwrap()
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = JamfHttpClient::default_client().unwrap();
        assert!(client.config().accept_compressed);
    }

    #[tokio::test]
    async fn test_successful_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/uapi/v1/items"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "7"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = JamfHttpClient::default_client().unwrap();
        let response = client
            .execute(&get(&mock_server.uri(), "items"))
            .await
            .unwrap();

        assert!(response.is_success());
        let item: Item = response.decode(ApiGeneration::V1).unwrap();
        assert_eq!(item.id, "7");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_request_failed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/uapi/v1/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such item"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = JamfHttpClient::default_client().unwrap();
        let err = client
            .execute(&get(&mock_server.uri(), "missing"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.response_body(), Some("no such item"));
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/uapi/v1/flaky"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = JamfHttpClient::default_client().unwrap();
        let err = client
            .execute(&get(&mock_server.uri(), "flaky"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_protocol_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/uapi/v1/items"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&mock_server)
            .await;

        let client = JamfHttpClient::default_client().unwrap();
        let response = client
            .execute(&get(&mock_server.uri(), "items"))
            .await
            .unwrap();

        let err = response.decode::<Item>(ApiGeneration::V1).unwrap_err();
        assert!(err.is_protocol_error());
    }

    #[tokio::test]
    async fn test_deadline_exceeded() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/uapi/v1/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&mock_server)
            .await;

        let client = JamfHttpClient::default_client().unwrap();
        let err = client
            .execute_within(&get(&mock_server.uri(), "slow"), Duration::from_millis(100))
            .await
            .unwrap_err();

        assert!(err.is_timeout());
        assert!(matches!(err.kind, ErrorKind::Timeout(d) if d == Duration::from_millis(100)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Nothing listens on port 9 of localhost in the test environment.
        let client = JamfHttpClient::default_client().unwrap();
        let err = client
            .execute(&get("http://127.0.0.1:9", "items"))
            .await
            .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Connection(_)));
    }
}
