//! # jamf-v1
//!
//! Jamf Pro v1 API client (`uapi/v1/...`, bearer token, JSON).
//!
//! ## Features
//!
//! - **Scripts** - List with paging, sorting and RSQL filters; get, create,
//!   update and delete
//!
//! ## Example
//!
//! ```rust,ignore
//! use jamf_pro_auth::{connect, JamfCredentials};
//! use jamf_pro_client::{ClientConfig, QueryParameters, SortDirection};
//! use jamf_pro_v1::V1Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jamf_pro_client::Error> {
//!     let client = connect(&JamfCredentials::from_env()?, ClientConfig::default()).await?;
//!     let v1 = V1Client::new(client);
//!
//!     let query = QueryParameters::new()
//!         .page_size(10)
//!         .sort("categoryName", SortDirection::Desc)
//!         .filter("categoryName==\"cat_1\"");
//!     for script in v1.list_scripts(&query).await?.results {
//!         println!("{:?} {:?}", script.id, script.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod scripts;

pub use client::V1Client;
pub use scripts::{CreatedResource, Script, ScriptPriority, ScriptsPage};
