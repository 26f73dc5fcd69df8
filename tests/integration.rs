//! Integration test suite.
//!
//! `dispatch` runs against local mock servers. `live` needs a real Jamf Pro
//! server and is ignored by default:
//!   JAMF_BASE_URL=... JAMF_USER=... JAMF_USER_PASSWORD=... \
//!     cargo test --test integration -- --ignored --nocapture

#[path = "integration/common.rs"]
mod common;
#[path = "integration/dispatch.rs"]
mod dispatch;
#[path = "integration/live.rs"]
mod live;
