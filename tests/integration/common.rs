use std::sync::Once;

use jamf_pro_api::JamfCredentials;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test subscriber once. Filter with `RUST_LOG`, e.g.
/// `RUST_LOG=jamf_pro_client=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Credentials for tests against a real server.
///
/// Panics with a hint when the environment is incomplete; live tests must
/// fail rather than skip.
pub fn get_credentials() -> JamfCredentials {
    init_tracing();
    match JamfCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => panic!(
            "\n\nLive integration tests need a Jamf Pro server.\n\
             Set JAMF_BASE_URL, JAMF_USER and JAMF_USER_PASSWORD.\n\
             Error: {}\n\n",
            e
        ),
    }
}

/// Epoch milliseconds `minutes` from now, as the token endpoint reports expiry.
pub fn expiry_in_minutes(minutes: i64) -> i64 {
    (chrono::Utc::now() + chrono::TimeDelta::minutes(minutes)).timestamp_millis()
}
