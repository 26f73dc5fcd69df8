//! Bearer token bootstrap and refresh.

use std::sync::Arc;
use std::time::Duration;

use jamf_pro_client::{
    ApiGeneration, Authorization, BearerToken, ClientConfig, Error, ErrorKind, JamfClient,
    JamfHttpClient, RequestBuilder, RequestMethod, Result, Session,
};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::credentials::{ClassicCredential, JamfCredentials};

/// Path of the token endpoint under the v1 mount (no version segment).
pub const TOKEN_PATH: [&str; 2] = ["auth", "tokens"];

/// Body returned by the token endpoint.
///
/// The token is redacted in Debug output.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    /// Expiry instant in epoch milliseconds.
    pub expires: i64,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token", &"[REDACTED]")
            .field("expires", &self.expires)
            .finish()
    }
}

impl TokenResponse {
    /// Convert into a [`BearerToken`].
    pub fn into_bearer_token(self) -> Result<BearerToken> {
        if self.token.is_empty() {
            return Err(Error::new(ErrorKind::Protocol(
                "Token endpoint returned an empty token".to_string(),
            )));
        }
        BearerToken::from_epoch_millis(self.token, self.expires)
    }
}

/// Exchange a classic credential for a v1 bearer token.
///
/// Sends exactly one `POST <base>/uapi/auth/tokens` with Basic auth. A
/// non-2xx answer becomes an authentication error carrying the original
/// failure as its source.
pub async fn acquire_bearer_token(
    http: &JamfHttpClient,
    base_url: &str,
    classic: &ClassicCredential,
) -> Result<BearerToken> {
    acquire_bearer_token_within(http, base_url, classic, http.config().timeout).await
}

/// [`acquire_bearer_token`] with the bootstrap call bounded by `deadline`.
#[instrument(skip(http, classic))]
pub async fn acquire_bearer_token_within(
    http: &JamfHttpClient,
    base_url: &str,
    classic: &ClassicCredential,
    deadline: Duration,
) -> Result<BearerToken> {
    let request = RequestBuilder::new(ApiGeneration::V1, RequestMethod::Post)
        .unversioned()
        .segments(TOKEN_PATH)
        .authorization(Authorization::Basic(classic.encoded().to_string()))
        .build(base_url)?;

    let response = match http.execute_within(&request, deadline).await {
        Ok(response) => response,
        Err(err) => {
            return Err(match err.status() {
                Some(status) => {
                    warn!(status, "Token request rejected");
                    Error::with_source(
                        ErrorKind::Authentication(format!(
                            "Token request rejected with HTTP {}",
                            status
                        )),
                        err,
                    )
                }
                None => err,
            })
        }
    };

    let token: TokenResponse = response.decode(ApiGeneration::V1)?;
    let token = token.into_bearer_token()?;
    info!(expires_at = %token.expires_at(), "Bearer token acquired");
    Ok(token)
}

/// Refresh the client's bearer token if it is missing or about to expire.
///
/// Concurrent callers share one bootstrap call. With a valid token no call
/// is made. The bootstrap runs under the client's deadline.
pub async fn refresh_if_expired(client: &JamfClient) -> Result<Arc<BearerToken>> {
    let session = client.session();
    let classic = session
        .classic_credential()
        .ok_or_else(|| Error::configuration("Session has no classic credential to refresh with"))
        .and_then(|encoded| ClassicCredential::from_encoded(encoded))?;

    let http = client.http();
    let base_url = session.base_url();
    let classic = &classic;
    let deadline = client.deadline();
    session
        .ensure_bearer_token(move || {
            acquire_bearer_token_within(http, base_url, classic, deadline)
        })
        .await
}

/// Build a ready client: classic credential, session and first bearer token.
#[instrument(skip(credentials, config), fields(base_url = %credentials.base_url()))]
pub async fn connect(credentials: &JamfCredentials, config: ClientConfig) -> Result<JamfClient> {
    let classic = credentials.classic_credential()?;
    let session = Session::new(credentials.base_url())?.with_classic_credential(classic.encoded());
    let http = JamfHttpClient::new(config)?;

    let token = acquire_bearer_token(&http, session.base_url(), &classic).await?;
    let session = session.with_bearer_token(token);

    Ok(JamfClient::from_parts(http, Arc::new(session)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::acquire_classic_credential;
    use chrono::{TimeDelta, Utc};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BASIC: &str = "Basic dXNlcjpwYXNz";

    fn classic() -> ClassicCredential {
        acquire_classic_credential("user", "pass").unwrap()
    }

    fn expires_in_minutes(minutes: i64) -> i64 {
        (Utc::now() + TimeDelta::minutes(minutes)).timestamp_millis()
    }

    async fn mount_token_endpoint(server: &MockServer, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/uapi/auth/tokens"))
            .and(header("Authorization", BASIC))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "fresh-token",
                "expires": expires_in_minutes(30)
            })))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[test]
    fn test_token_response_debug_redacts_token() {
        let response = TokenResponse {
            token: "very-secret".to_string(),
            expires: 0,
        };
        assert!(!format!("{:?}", response).contains("very-secret"));
    }

    #[tokio::test]
    async fn test_acquire_bearer_token() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 1).await;

        let http = JamfHttpClient::default_client().unwrap();
        let token = acquire_bearer_token(&http, &server.uri(), &classic())
            .await
            .unwrap();

        assert_eq!(token.token(), "fresh-token");
        assert!(!token.is_expired());
    }

    #[tokio::test]
    async fn test_rejected_bootstrap_is_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/uapi/auth/tokens"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .expect(1)
            .mount(&server)
            .await;

        let http = JamfHttpClient::default_client().unwrap();
        let err = acquire_bearer_token(&http, &server.uri(), &classic())
            .await
            .unwrap_err();

        assert!(err.is_auth_error());
        assert!(err.to_string().contains("401"));
        assert!(err.source.is_some());
    }

    #[tokio::test]
    async fn test_bad_token_body_is_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/uapi/auth/tokens"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "t",
                "expires": "2024-01-01T00:00:00Z"
            })))
            .mount(&server)
            .await;

        let http = JamfHttpClient::default_client().unwrap();
        let err = acquire_bearer_token(&http, &server.uri(), &classic())
            .await
            .unwrap_err();

        assert!(err.is_protocol_error());
    }

    #[tokio::test]
    async fn test_bootstrap_deadline_is_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/uapi/auth/tokens"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({
                        "token": "late-token",
                        "expires": expires_in_minutes(30)
                    }))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let http = JamfHttpClient::default_client().unwrap();
        let err = acquire_bearer_token_within(
            &http,
            &server.uri(),
            &classic(),
            Duration::from_millis(200),
        )
        .await
        .unwrap_err();

        assert!(err.is_timeout());
        assert!(!err.is_auth_error());
    }

    #[tokio::test]
    async fn test_refresh_uses_client_deadline() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/uapi/auth/tokens"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({
                        "token": "late-token",
                        "expires": expires_in_minutes(30)
                    }))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = client_with_token(
            &server.uri(),
            BearerToken::new("stale", Utc::now() - TimeDelta::minutes(1)),
        )
        .with_deadline(Duration::from_millis(200));

        let err = refresh_if_expired(&client).await.unwrap_err();
        assert!(err.is_timeout());

        let kept = client.session().bearer_token().await.unwrap();
        assert_eq!(kept.token(), "stale");
    }

    #[tokio::test]
    async fn test_connect_bootstraps_once() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 1).await;

        let creds = JamfCredentials::new(server.uri(), "user", "pass");
        let client = connect(&creds, ClientConfig::default()).await.unwrap();

        let token = client.session().bearer_token().await.unwrap();
        assert_eq!(token.token(), "fresh-token");
        assert_eq!(client.session().classic_credential(), Some("dXNlcjpwYXNz"));
    }

    #[tokio::test]
    async fn test_connect_rejects_empty_password_without_network() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 0).await;

        let creds = JamfCredentials::new(server.uri(), "user", "");
        let err = connect(&creds, ClientConfig::default()).await.unwrap_err();
        assert!(err.is_configuration_error());
    }

    fn client_with_token(uri: &str, token: BearerToken) -> JamfClient {
        let session = Session::new(uri)
            .unwrap()
            .with_classic_credential(classic().encoded())
            .with_bearer_token(token);
        JamfClient::new(session).unwrap()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_valid_token_is_not_refreshed() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 0).await;

        let client = client_with_token(
            &server.uri(),
            BearerToken::new("current", Utc::now() + TimeDelta::minutes(10)),
        );

        let results = futures::future::join_all((0..8).map(|_| refresh_if_expired(&client))).await;
        for result in results {
            assert_eq!(result.unwrap().token(), "current");
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_expired_token_refreshes_exactly_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/uapi/auth/tokens"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({
                        "token": "fresh-token",
                        "expires": expires_in_minutes(30)
                    }))
                    .set_delay(std::time::Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_with_token(
            &server.uri(),
            BearerToken::new("stale", Utc::now() - TimeDelta::minutes(1)),
        );

        let tasks = (0..8).map(|_| {
            let client = client.clone();
            tokio::spawn(async move { refresh_if_expired(&client).await })
        });

        for result in futures::future::join_all(tasks).await {
            assert_eq!(result.unwrap().unwrap().token(), "fresh-token");
        }
    }
}
