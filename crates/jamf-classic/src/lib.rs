//! # jamf-classic
//!
//! Jamf Pro Classic API client (`JSSResource/...`, Basic auth, XML).
//!
//! ## Features
//!
//! - **Policies** - List, get, create, update and delete
//!
//! ## Example
//!
//! ```rust,ignore
//! use jamf_pro_auth::{connect, JamfCredentials};
//! use jamf_pro_classic::{ClassicClient, Policy, PolicyGeneral};
//! use jamf_pro_client::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jamf_pro_client::Error> {
//!     let client = connect(&JamfCredentials::from_env()?, ClientConfig::default()).await?;
//!     let classic = ClassicClient::new(client);
//!
//!     let policy = Policy {
//!         general: Some(PolicyGeneral {
//!             name: Some("Update Inventory".to_string()),
//!             enabled: Some(true),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     };
//!     let created = classic.create_policy(&policy).await?;
//!     println!("created policy {}", created.id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod policies;

pub use client::ClassicClient;
pub use policies::{
    AccountMaintenance, BuildingList, ComputerGroupList, ComputerList, DateTimeLimitations,
    DepartmentList, DirectoryBindings, DiskEncryption, DockItem, DockItems, FilesProcesses,
    IbeaconList, LimitToUsers, LocalAccount, LocalAccounts, Maintenance, ManagementAccount,
    NetworkLimitations, NetworkSegmentList, ObjectReference, OpenFirmwareEfiPassword,
    OverrideDefaultSettings, PackageConfiguration, Policy, PolicyGeneral, PolicyId, PolicyList,
    PolicyPackage, PolicyPackages, PolicyPrinter, PolicyPrinters, PolicyScope, PolicyScript,
    PolicyScripts, ScopeComputer, ScopeExclusions, ScopeLimitations, SelfService,
    SelfServiceCategories, SelfServiceCategory, SelfServiceIcon, UserGroupList, UserGroupNames,
    UserInteraction, UserList,
};
