//! # jamf-client
//!
//! Core request dispatch for the Jamf Pro Classic and v1 APIs.
//!
//! Jamf Pro exposes two API generations side by side:
//! - **Classic** (`JSSResource/...`): Basic auth, XML bodies
//! - **v1** (`uapi/v1/...`): Bearer token auth, JSON bodies
//!
//! This crate picks the auth scheme, URL prefix and body format for each
//! call from its [`ApiGeneration`], sends exactly one request, and maps the
//! outcome into a typed [`Error`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (jamf-v1, jamf-classic)                                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       JamfClient                            │
//! │  - Holds the shared Session (credential store)              │
//! │  - Builds requests per generation                           │
//! │  - Typed get/post/put/delete                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     JamfHttpClient                          │
//! │  - One network call per request, bounded by a deadline      │
//! │  - Status mapping, fully buffered responses                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use jamf_pro_client::{ApiGeneration, JamfClient, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jamf_pro_client::Error> {
//!     let session = Session::new("https://example.jamfcloud.com")?
//!         .with_classic_credential(encoded);
//!     let client = JamfClient::new(session)?;
//!
//!     let policies: PolicyList = client
//!         .get(ApiGeneration::Classic, &["policies"], None)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod encoding;
mod error;
mod jamf_client;
mod query;
mod request;
mod response;
mod session;

pub use client::JamfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use encoding::{
    select_format, ApiGeneration, FormatSelection, Payload, WireFormat, CLASSIC_MOUNT,
    JSON_CONTENT_TYPE, V1_MOUNT, V1_VERSION, XML_CONTENT_TYPE,
};
pub use error::{Error, ErrorKind, Result};
pub use jamf_client::JamfClient;
pub use query::{QueryParameters, SortDirection};
pub use request::{Authorization, RequestBody, RequestBuilder, RequestMethod, RequestSpec};
pub use response::Response;
pub use session::{BearerToken, Session, TOKEN_EXPIRY_MARGIN_SECS};

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("jamf-pro-api/", env!("CARGO_PKG_VERSION"));
