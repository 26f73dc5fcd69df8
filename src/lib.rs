//! # jamf-pro-api
//!
//! A Jamf Pro API client library for Rust.
//!
//! Jamf Pro serves two API generations side by side. The Classic API
//! (`JSSResource/...`) takes Basic auth and XML; the v1 API (`uapi/v1/...`)
//! takes a bearer token and JSON. One session holds both credentials and
//! every call picks the scheme and encoding of its generation.
//!
//! ## Security
//!
//! - Credentials and tokens are redacted in Debug output
//! - Tracing skips credential parameters
//!
//! ## Crates
//!
//! - **jamf-pro-client** - Request dispatch: sessions, encoding selection, request building, errors
//! - **jamf-pro-auth** - Classic credentials, bearer token bootstrap and refresh
//! - **jamf-pro-classic** - Classic API: policies
//! - **jamf-pro-v1** - v1 API: scripts
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jamf_pro_api::{connect, ClientConfig, JamfCredentials, QueryParameters, V1Client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jamf_pro_api::Error> {
//!     let credentials = JamfCredentials::from_env()?;
//!     let client = connect(&credentials, ClientConfig::default()).await?;
//!
//!     let scripts = V1Client::new(client)
//!         .list_scripts(&QueryParameters::new().page_size(10))
//!         .await?;
//!     for script in scripts.results {
//!         println!("{:?}", script.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use jamf_pro_auth as auth;
#[cfg(feature = "classic")]
pub use jamf_pro_classic as classic;
#[cfg(feature = "client")]
pub use jamf_pro_client as client;
#[cfg(feature = "v1")]
pub use jamf_pro_v1 as v1;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use jamf_pro_auth::{connect, refresh_if_expired, JamfCredentials};
#[cfg(feature = "classic")]
pub use jamf_pro_classic::ClassicClient;
#[cfg(feature = "client")]
pub use jamf_pro_client::{
    ApiGeneration, ClientConfig, Error, ErrorKind, JamfClient, QueryParameters, Result, Session,
    SortDirection,
};
#[cfg(feature = "v1")]
pub use jamf_pro_v1::V1Client;
