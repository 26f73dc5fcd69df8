//! # jamf-auth
//!
//! Authentication for the Jamf Pro Classic and v1 APIs.
//!
//! ## Security
//!
//! - Credentials and tokens are redacted in Debug output
//! - Tracing spans skip credential parameters
//!
//! ## Authentication Methods
//!
//! - **Classic API** - Basic auth with base64 `username:password`
//! - **v1 API** - Bearer token obtained from `uapi/auth/tokens` with the
//!   classic credential, refreshed on demand
//!
//! ## Example
//!
//! ```rust,ignore
//! use jamf_pro_auth::{connect, refresh_if_expired, JamfCredentials};
//! use jamf_pro_client::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jamf_pro_client::Error> {
//!     let creds = JamfCredentials::from_env()?;
//!     let client = connect(&creds, ClientConfig::default()).await?;
//!
//!     // Before a long batch of v1 calls
//!     refresh_if_expired(&client).await?;
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod token;

pub use credentials::{
    acquire_classic_credential, ClassicCredential, JamfCredentials, ENV_BASE_URL, ENV_PASSWORD,
    ENV_USER,
};
pub use token::{
    acquire_bearer_token, acquire_bearer_token_within, connect, refresh_if_expired, TokenResponse,
    TOKEN_PATH,
};

pub use jamf_pro_client::{Error, ErrorKind, Result};
