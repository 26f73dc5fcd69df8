//! Jamf Pro v1 API client.
//!
//! This client wraps `JamfClient` from `jamf-client`. Every call targets
//! `uapi/v1/...` with the session's bearer token and JSON bodies.

use std::time::Duration;

use jamf_pro_client::{ApiGeneration, Error, JamfClient, Result};

mod scripts;

/// Jamf Pro v1 API client.
///
/// The bearer token is not refreshed here; call
/// `jamf_pro_auth::refresh_if_expired` before long batches.
///
/// # Example
///
/// ```rust,ignore
/// use jamf_pro_v1::{V1Client, Script};
/// use jamf_pro_client::QueryParameters;
///
/// let v1 = V1Client::new(client);
///
/// let page = v1.list_scripts(&QueryParameters::new().page_size(10)).await?;
/// let created = v1.create_script(&Script::named("cleanup.sh")).await?;
/// v1.delete_script(&created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct V1Client {
    client: JamfClient,
}

impl V1Client {
    const GENERATION: ApiGeneration = ApiGeneration::V1;

    /// Create a v1 client from a connected `JamfClient`.
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

    /// Get the server base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

fn require_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::configuration("Resource ID is empty"));
    }
    Ok(())
}
