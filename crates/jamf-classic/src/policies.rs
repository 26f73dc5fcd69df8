//! Policy resources of the Classic API.
//!
//! Element names follow the Classic XML schema. Every field is optional so
//! the same types serve reads, creates and partial updates; absent fields
//! are not written.

use jamf_pro_client::{ApiGeneration, Payload};
use serde::{Deserialize, Serialize};

/// A computer policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "policy")]
pub struct Policy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<PolicyGeneral>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<PolicyScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service: Option<SelfService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_configuration: Option<PackageConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<PolicyScripts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printers: Option<PolicyPrinters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dock_items: Option<DockItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_maintenance: Option<AccountMaintenance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<Maintenance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_processes: Option<FilesProcesses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_interaction: Option<UserInteraction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_encryption: Option<DiskEncryption>,
}

impl Payload for Policy {
    const GENERATION: ApiGeneration = ApiGeneration::Classic;
}

/// `id` + `name` pair used for categories, sites and scope targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ObjectReference {
    pub fn id(id: i64) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

// =============================================================================
// General
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyGeneral {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_checkin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_enrollment_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_login: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_logout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_network_state_changed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_startup: Option<bool>,
    /// Custom event name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_other: Option<String>,
    /// e.g. `Once per computer`, `Ongoing`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_attempts: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_each_failed_retry: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_user_only: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_drive: Option<String>,
    /// Id -1 means no category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ObjectReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time_limitations: Option<DateTimeLimitations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_limitations: Option<NetworkLimitations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_default_settings: Option<OverrideDefaultSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_requirements: Option<String>,
    /// Id -1 means no site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<ObjectReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateTimeLimitations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_date_epoch: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_date_utc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_epoch: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_utc: Option<String>,
    /// Day names, `Sun` through `Sat`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_execute_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_execute_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_execute_end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkLimitations {
    /// `No Minimum` or `Ethernet`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_network_connection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_ip_address: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideDefaultSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_drive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_afp_smb: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netboot_server: Option<String>,
}

// =============================================================================
// Scope
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyScope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_computers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computers: Option<ComputerList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_groups: Option<ComputerGroupList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildings: Option<BuildingList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments: Option<DepartmentList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_to_users: Option<LimitToUsers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limitations: Option<ScopeLimitations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<ScopeExclusions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeComputer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub computer: Vec<ScopeComputer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerGroupList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub computer_group: Vec<ObjectReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub building: Vec<ObjectReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub department: Vec<ObjectReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user: Vec<ObjectReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroupList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_group: Vec<ObjectReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSegmentList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_segment: Vec<ObjectReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbeaconList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ibeacon: Vec<ObjectReference>,
}

/// Restrict the policy to members of directory user groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitToUsers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_groups: Option<UserGroupNames>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroupNames {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_group: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeLimitations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<UserList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_groups: Option<UserGroupList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_segments: Option<NetworkSegmentList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ibeacons: Option<IbeaconList>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeExclusions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computers: Option<ComputerList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_groups: Option<ComputerGroupList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildings: Option<BuildingList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments: Option<DepartmentList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<UserList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_groups: Option<UserGroupList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_segments: Option<NetworkSegmentList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ibeacons: Option<IbeaconList>,
}

// =============================================================================
// Self Service
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_for_self_service: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reinstall_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_users_to_view_description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service_icon: Option<SelfServiceIcon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_on_main_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_service_categories: Option<SelfServiceCategories>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfServiceIcon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfServiceCategories {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<SelfServiceCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfServiceCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_in: Option<bool>,
}

// =============================================================================
// Packages, scripts, printers, dock items
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<PolicyPackages>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyPackages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub package: Vec<PolicyPackage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyPackage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// e.g. `Install`, `Cache`, `Install Cached`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Fill user templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fut: Option<bool>,
    /// Fill existing users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feu: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_autorun: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyScripts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub script: Vec<PolicyScript>,
}

/// A script run by a policy, with its positional parameter values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyScript {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `Before` or `After`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter7: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter8: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter9: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter10: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter11: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyPrinters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_existing_default: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub printer: Vec<PolicyPrinter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyPrinter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `install` or `uninstall`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DockItems {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dock_item: Vec<DockItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DockItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `Add To Beginning`, `Add To End` or `Remove`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

// =============================================================================
// Account maintenance
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountMaintenance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<LocalAccounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_bindings: Option<DirectoryBindings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_account: Option<ManagementAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_firmware_efi_password: Option<OpenFirmwareEfiPassword>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalAccounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub account: Vec<LocalAccount>,
}

/// A local account change. The password is redacted in Debug output.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalAccount {
    /// `Create`, `Reset`, `Delete` or `DisableFileVault`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_home_directory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_home_directory_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filevault_enabled: Option<bool>,
}

impl std::fmt::Debug for LocalAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalAccount")
            .field("action", &self.action)
            .field("user_name", &self.user_name)
            .field("real_name", &self.real_name)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("admin", &self.admin)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryBindings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub binding: Vec<ObjectReference>,
}

/// Management account password change. The password is redacted in Debug
/// output.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementAccount {
    /// `specified`, `random`, `reset`, `fileVaultEnable` or `fileVaultDisable`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_password: Option<String>,
    /// Only used with the `random` action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_password_length: Option<u32>,
}

impl std::fmt::Debug for ManagementAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagementAccount")
            .field("action", &self.action)
            .field(
                "managed_password",
                &self.managed_password.as_ref().map(|_| "[REDACTED]"),
            )
            .field("managed_password_length", &self.managed_password_length)
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenFirmwareEfiPassword {
    /// `command` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub of_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub of_password: Option<String>,
}

impl std::fmt::Debug for OpenFirmwareEfiPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenFirmwareEfiPassword")
            .field("of_mode", &self.of_mode)
            .field("of_password", &self.of_password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// =============================================================================
// Maintenance, files and processes, user interaction, disk encryption
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintenance {
    /// Update inventory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_all_cached_packages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prebindings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byhost: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesProcesses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_by_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_file: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locate_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_locate_database: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotlight_search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_for_process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_process: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_command: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInteraction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_users_to_defer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_deferral_until_utc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_deferral_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_finish: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskEncryption {
    /// `apply` or `remediate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_encryption_configuration_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_restart: Option<bool>,
    /// `Individual`, `Institutional` or `Individual And Institutional`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediate_key_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediate_disk_encryption_configuration_id: Option<i64>,
}

// =============================================================================
// Collection and create results
// =============================================================================

/// Result of `GET policies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "policies")]
pub struct PolicyList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(rename = "policy", default, skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<ObjectReference>,
}

/// Body returned by Classic create, update and delete calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "policy")]
pub struct PolicyId {
    pub id: i64,
}
