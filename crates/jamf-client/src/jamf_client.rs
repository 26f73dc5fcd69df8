//! Session-bound Jamf Pro client with typed HTTP methods.
//!
//! `JamfClient` pairs a [`Session`] with a [`JamfHttpClient`]. Every call
//! picks its auth scheme, URL prefix and body format from the
//! [`ApiGeneration`] it targets.
//!
//! ## Security
//!
//! - Credentials are redacted in Debug output
//! - Request bodies and credentials are skipped in tracing spans

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::client::JamfHttpClient;
use crate::config::ClientConfig;
use crate::encoding::{ApiGeneration, Payload};
use crate::error::Result;
use crate::query::QueryParameters;
use crate::request::{RequestBuilder, RequestMethod, RequestSpec};
use crate::response::Response;
use crate::session::Session;

/// High-level Jamf Pro API client.
///
/// Cheap to clone; clones share the session and connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use jamf_pro_client::{ApiGeneration, JamfClient, QueryParameters};
///
/// let page: ScriptsPage = client
///     .get(ApiGeneration::V1, &["scripts"], Some(&QueryParameters::new().page_size(10)))
///     .await?;
/// ```
#[derive(Clone)]
pub struct JamfClient {
    http: JamfHttpClient,
    session: Arc<Session>,
    deadline: Option<Duration>,
}

impl std::fmt::Debug for JamfClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JamfClient")
            .field("session", &self.session)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

impl JamfClient {
    /// Create a client with default HTTP configuration.
    pub fn new(session: Session) -> Result<Self> {
        Self::with_config(session, ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(session: Session, config: ClientConfig) -> Result<Self> {
        Ok(Self::from_parts(JamfHttpClient::new(config)?, Arc::new(session)))
    }

    /// Assemble a client from an existing dispatcher and shared session.
    pub fn from_parts(http: JamfHttpClient, session: Arc<Session>) -> Self {
        Self {
            http,
            session,
            deadline: None,
        }
    }

    /// A handle on the same session whose calls each finish within
    /// `deadline` instead of the configured timeout.
    ///
    /// ```rust,ignore
    /// let quick = client.with_deadline(Duration::from_secs(2));
    /// let page: ScriptsPage = quick.get(ApiGeneration::V1, &["scripts"], None).await?;
    /// ```
    pub fn with_deadline(&self, deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
            ..self.clone()
        }
    }

    /// Deadline applied to each call made through this handle.
    pub fn deadline(&self) -> Duration {
        self.deadline.unwrap_or(self.http.config().timeout)
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn http(&self) -> &JamfHttpClient {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        self.session.base_url()
    }

    /// Builder pre-loaded with the session credential for `generation`.
    pub async fn request(
        &self,
        generation: ApiGeneration,
        method: RequestMethod,
    ) -> Result<RequestBuilder> {
        let authorization = self.session.authorization(generation).await?;
        Ok(RequestBuilder::new(generation, method).authorization(authorization))
    }

    /// Compose a request from its parts without sending it.
    pub async fn build_request<P: Payload>(
        &self,
        generation: ApiGeneration,
        method: RequestMethod,
        segments: &[&str],
        query: Option<&QueryParameters>,
        body: Option<&P>,
    ) -> Result<RequestSpec> {
        let mut builder = self
            .request(generation, method)
            .await?
            .segments(segments.iter().copied());
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.body(body)?;
        }
        builder.build(self.base_url())
    }

    /// Dispatch a built request under this handle's deadline.
    pub async fn execute(&self, request: &RequestSpec) -> Result<Response> {
        self.http.execute_within(request, self.deadline()).await
    }

    /// Dispatch a built request under a caller deadline.
    pub async fn execute_within(&self, request: &RequestSpec, deadline: Duration) -> Result<Response> {
        self.http.execute_within(request, deadline).await
    }

    // =========================================================================
    // Typed Methods
    // =========================================================================

    /// GET and decode the response body.
    #[instrument(skip(self, query))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        generation: ApiGeneration,
        segments: &[&str],
        query: Option<&QueryParameters>,
    ) -> Result<T> {
        let mut builder = self
            .request(generation, RequestMethod::Get)
            .await?
            .segments(segments.iter().copied());
        if let Some(query) = query {
            builder = builder.query(query);
        }
        let request = builder.build(self.base_url())?;
        self.execute(&request).await?.decode(generation)
    }

    /// POST a payload and decode the response body.
    #[instrument(skip(self, body))]
    pub async fn post<P: Payload, T: DeserializeOwned>(
        &self,
        generation: ApiGeneration,
        segments: &[&str],
        body: &P,
    ) -> Result<T> {
        self.send_with_body(generation, RequestMethod::Post, segments, body)
            .await
    }

    /// PUT a payload and decode the response body.
    #[instrument(skip(self, body))]
    pub async fn put<P: Payload, T: DeserializeOwned>(
        &self,
        generation: ApiGeneration,
        segments: &[&str],
        body: &P,
    ) -> Result<T> {
        self.send_with_body(generation, RequestMethod::Put, segments, body)
            .await
    }

    /// DELETE; a blank or well-formed response body counts as success.
    #[instrument(skip(self))]
    pub async fn delete(&self, generation: ApiGeneration, segments: &[&str]) -> Result<()> {
        let request = self
            .request(generation, RequestMethod::Delete)
            .await?
            .segments(segments.iter().copied())
            .build(self.base_url())?;
        self.execute(&request).await?.discard(generation)
    }

    async fn send_with_body<P: Payload, T: DeserializeOwned>(
        &self,
        generation: ApiGeneration,
        method: RequestMethod,
        segments: &[&str],
        body: &P,
    ) -> Result<T> {
        let request = self
            .build_request(generation, method, segments, None, Some(body))
            .await?;
        self.execute(&request).await?.decode(generation)
    }
}
