//! Script resources of the v1 API.

use jamf_pro_client::{ApiGeneration, Payload};
use serde::{Deserialize, Serialize};

/// When a script runs relative to the other actions of a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScriptPriority {
    Before,
    After,
    AtReboot,
    /// A value this client does not know. Read-only: sending it back fails
    /// to encode rather than overwriting the server value.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// A script stored on the Jamf Pro server.
///
/// Used for reads, creates and updates; absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Shown to the administrator when the script runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<ScriptPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    // Labels for the positional script parameters $4..$11.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter7: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter8: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter9: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter10: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter11: Option<String>,
    /// e.g. `"10.15.x"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_requirements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_contents: Option<String>,
}

impl Script {
    /// Start a script with only its name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl Payload for Script {
    const GENERATION: ApiGeneration = ApiGeneration::V1;
}

/// One page of `GET v1/scripts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptsPage {
    /// Matches across all pages.
    pub total_count: u32,
    #[serde(default)]
    pub results: Vec<Script>,
}

/// Reference to a newly created resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResource {
    pub id: String,
    #[serde(default)]
    pub href: String,
}
