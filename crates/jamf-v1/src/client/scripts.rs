use jamf_pro_client::{QueryParameters, Result};
use tracing::instrument;

use super::require_id;
use crate::scripts::{CreatedResource, Script, ScriptsPage};

const SCRIPTS: &str = "scripts";

impl super::V1Client {
    /// List scripts, one page at a time.
    #[instrument(skip(self))]
    pub async fn list_scripts(&self, query: &QueryParameters) -> Result<ScriptsPage> {
        self.client
            .get(Self::GENERATION, &[SCRIPTS], Some(query))
            .await
    }

    /// Get a script by ID.
    #[instrument(skip(self))]
    pub async fn get_script(&self, id: &str) -> Result<Script> {
        require_id(id)?;
        self.client.get(Self::GENERATION, &[SCRIPTS, id], None).await
    }

    /// Create a script.
    #[instrument(skip(self, script), fields(name = ?script.name))]
    pub async fn create_script(&self, script: &Script) -> Result<CreatedResource> {
        self.client.post(Self::GENERATION, &[SCRIPTS], script).await
    }

    /// Replace a script and return the stored version.
    #[instrument(skip(self, script))]
    pub async fn update_script(&self, id: &str, script: &Script) -> Result<Script> {
        require_id(id)?;
        self.client
            .put(Self::GENERATION, &[SCRIPTS, id], script)
            .await
    }

    /// Delete a script.
    #[instrument(skip(self))]
    pub async fn delete_script(&self, id: &str) -> Result<()> {
        require_id(id)?;
        self.client.delete(Self::GENERATION, &[SCRIPTS, id]).await
    }
}
