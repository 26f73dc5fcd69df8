//! Credential store for one Jamf Pro server.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::encoding::ApiGeneration;
use crate::error::{Error, ErrorKind, Result};
use crate::request::Authorization;

/// Tokens this many seconds from expiry are treated as already expired.
pub const TOKEN_EXPIRY_MARGIN_SECS: i64 = 30;

/// A v1 API bearer token and its expiry instant.
///
/// Replaced as a whole on refresh; never mutated.
#[derive(Clone)]
pub struct BearerToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl BearerToken {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Build from the token endpoint's epoch-millisecond expiry.
    pub fn from_epoch_millis(token: impl Into<String>, expires: i64) -> Result<Self> {
        let expires_at = DateTime::from_timestamp_millis(expires).ok_or_else(|| {
            Error::new(ErrorKind::Protocol(format!(
                "Token expiry {} is not a valid epoch-millisecond timestamp",
                expires
            )))
        })?;
        Ok(Self::new(token, expires_at))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Check expiry against the current time, including the safety margin.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now + TimeDelta::seconds(TOKEN_EXPIRY_MARGIN_SECS) >= self.expires_at
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerToken")
            .field("token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Everything needed to authenticate calls against one server.
///
/// The base URL and classic credential are fixed at construction. The bearer
/// token is swapped atomically and refreshed by one task at a time.
pub struct Session {
    base_url: String,
    classic_credential: Option<String>,
    bearer: RwLock<Option<Arc<BearerToken>>>,
    refresh_gate: Mutex<()>,
}

impl Session {
    /// Create a session for `base_url` with no credentials yet.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::configuration("Base URL is empty"));
        }
        url::Url::parse(trimmed)?;

        Ok(Self {
            base_url: trimmed.to_string(),
            classic_credential: None,
            bearer: RwLock::new(None),
            refresh_gate: Mutex::new(()),
        })
    }

    /// Attach the base64 `username:password` used for Classic calls.
    pub fn with_classic_credential(mut self, encoded: impl Into<String>) -> Self {
        self.classic_credential = Some(encoded.into());
        self
    }

    /// Seed the session with an already acquired bearer token.
    pub fn with_bearer_token(mut self, token: BearerToken) -> Self {
        self.bearer = RwLock::new(Some(Arc::new(token)));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn classic_credential(&self) -> Option<&str> {
        self.classic_credential.as_deref()
    }

    /// Current bearer token, expired or not.
    pub async fn bearer_token(&self) -> Option<Arc<BearerToken>> {
        self.bearer.read().await.clone()
    }

    /// Swap in a new bearer token.
    pub async fn replace_bearer_token(&self, token: BearerToken) -> Arc<BearerToken> {
        let token = Arc::new(token);
        *self.bearer.write().await = Some(Arc::clone(&token));
        token
    }

    /// Return a valid bearer token, calling `fetch` if there is none.
    ///
    /// Concurrent callers that find the token expired queue on one gate; the
    /// first runs `fetch` and the rest reuse its result. `fetch` is not
    /// called at all while the held token is valid.
    pub async fn ensure_bearer_token<F, Fut>(&self, fetch: F) -> Result<Arc<BearerToken>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<BearerToken>>,
    {
        if let Some(token) = self.valid_bearer_token().await {
            return Ok(token);
        }

        let _gate = self.refresh_gate.lock().await;

        // Another task may have refreshed while we waited.
        if let Some(token) = self.valid_bearer_token().await {
            debug!("Bearer token refreshed by another task");
            return Ok(token);
        }

        let fresh = fetch().await?;
        debug!(expires_at = %fresh.expires_at(), "Bearer token refreshed");
        Ok(self.replace_bearer_token(fresh).await)
    }

    async fn valid_bearer_token(&self) -> Option<Arc<BearerToken>> {
        self.bearer
            .read()
            .await
            .as_ref()
            .filter(|token| !token.is_expired())
            .cloned()
    }

    /// Credential for a call to the given generation.
    ///
    /// Expired bearer tokens are still returned; refreshing is up to the
    /// caller.
    pub async fn authorization(&self, generation: ApiGeneration) -> Result<Authorization> {
        match generation {
            ApiGeneration::Classic => self
                .classic_credential
                .clone()
                .map(Authorization::Basic)
                .ok_or_else(|| Error::configuration("Session has no classic credential")),
            ApiGeneration::V1 => self
                .bearer_token()
                .await
                .map(|token| Authorization::Bearer(token.token().to_string()))
                .ok_or_else(|| Error::configuration("Session has no bearer token")),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field(
                "classic_credential",
                &self.classic_credential.as_ref().map(|_| "[REDACTED]"),
            )
            .finish_non_exhaustive()
    }
}
