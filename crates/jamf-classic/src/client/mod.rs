//! Jamf Pro Classic API client.
//!
//! Wraps `JamfClient` from `jamf-client`. Every call targets
//! `JSSResource/...` with the session's Basic credential and XML bodies.

use std::time::Duration;

use jamf_pro_client::{ApiGeneration, Error, ErrorKind, JamfClient, Result};

mod policies;

/// Jamf Pro Classic API client.
///
/// # Example
///
/// ```rust,ignore
/// use jamf_pro_classic::{ClassicClient, Policy, PolicyGeneral};
///
/// let classic = ClassicClient::new(client);
///
/// let list = classic.list_policies().await?;
/// let created = classic.create_policy(&policy).await?;
/// classic.delete_policy(&created.id.to_string()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ClassicClient {
    client: JamfClient,
}

impl ClassicClient {
    const GENERATION: ApiGeneration = ApiGeneration::Classic;

    pub fn new(client: JamfClient) -> Self {
        Self { client }
    }

    /// A client whose calls each finish within `deadline`.
    pub fn with_deadline(&self, deadline: Duration) -> Self {
        Self {
            client: self.client.with_deadline(deadline),
        }
    }

    /// Get the underlying JamfClient.
    pub fn inner(&self) -> &JamfClient {
        &self.client
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Classic ids are numeric; anything else would address a different resource.
fn require_numeric_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::configuration("Resource ID is empty"));
    }
    id.parse::<i64>().map(|_| ()).map_err(|e| {
        Error::with_source(
            ErrorKind::Configuration(format!("Resource ID is not numeric: {}", id)),
            e,
        )
    })
}
