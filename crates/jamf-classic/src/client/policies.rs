use jamf_pro_client::Result;
use tracing::instrument;

use super::require_numeric_id;
use crate::policies::{Policy, PolicyId, PolicyList};

const POLICIES: &str = "policies";
const BY_ID: &str = "id";
// Classic creates address the placeholder id 0.
const NEW_ID: &str = "0";

impl super::ClassicClient {
    /// List all policies (id and name only).
    #[instrument(skip(self))]
    pub async fn list_policies(&self) -> Result<PolicyList> {
        self.client.get(Self::GENERATION, &[POLICIES], None).await
    }

    /// Get a policy by ID.
    #[instrument(skip(self))]
    pub async fn get_policy(&self, id: &str) -> Result<Policy> {
        require_numeric_id(id)?;
        self.client
            .get(Self::GENERATION, &[POLICIES, BY_ID, id], None)
            .await
    }

    /// Create a policy and return its new ID.
    #[instrument(skip(self, policy))]
    pub async fn create_policy(&self, policy: &Policy) -> Result<PolicyId> {
        self.client
            .post(Self::GENERATION, &[POLICIES, BY_ID, NEW_ID], policy)
            .await
    }

    /// Update a policy. Sections left as `None` keep their server value.
    #[instrument(skip(self, policy))]
    pub async fn update_policy(&self, id: &str, policy: &Policy) -> Result<PolicyId> {
        require_numeric_id(id)?;
        self.client
            .put(Self::GENERATION, &[POLICIES, BY_ID, id], policy)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_policy(&self, id: &str) -> Result<()> {
        require_numeric_id(id)?;
        self.client
            .delete(Self::GENERATION, &[POLICIES, BY_ID, id])
            .await
    }
}
