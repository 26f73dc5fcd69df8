//! Classic credentials and server connection settings.
//!
//! All credential types implement custom Debug to redact sensitive data.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use jamf_pro_client::{Error, Result};

/// Environment variable holding the server base URL.
pub const ENV_BASE_URL: &str = "JAMF_BASE_URL";
/// Environment variable holding the API user name.
pub const ENV_USER: &str = "JAMF_USER";
/// Environment variable holding the API user password.
pub const ENV_PASSWORD: &str = "JAMF_USER_PASSWORD";

/// Base64 `username:password`, as sent in a Basic `Authorization` header.
///
/// The encoding is deterministic and [`decode`](Self::decode) returns the
/// original pair.
#[derive(Clone, PartialEq, Eq)]
pub struct ClassicCredential {
    encoded: String,
}

impl std::fmt::Debug for ClassicCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassicCredential")
            .field("encoded", &"[REDACTED]")
            .finish()
    }
}

/// Encode a username and password for Classic API calls.
pub fn acquire_classic_credential(username: &str, password: &str) -> Result<ClassicCredential> {
    if username.is_empty() {
        return Err(Error::configuration("Username is empty"));
    }
    if password.is_empty() {
        return Err(Error::configuration("Password is empty"));
    }
    if username.contains(':') {
        return Err(Error::configuration("Username must not contain ':'"));
    }

    Ok(ClassicCredential {
        encoded: STANDARD.encode(format!("{}:{}", username, password)),
    })
}

impl ClassicCredential {
    /// Wrap an already encoded credential after checking it decodes to a
    /// `username:password` pair.
    pub fn from_encoded(encoded: impl Into<String>) -> Result<Self> {
        let credential = Self {
            encoded: encoded.into(),
        };
        credential.decode()?;
        Ok(credential)
    }

    /// The base64 text.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Recover `(username, password)`.
    pub fn decode(&self) -> Result<(String, String)> {
        let bytes = STANDARD
            .decode(&self.encoded)
            .map_err(|e| Error::configuration(format!("Classic credential is not base64: {}", e)))?;
        let text = String::from_utf8(bytes)
            .map_err(|_| Error::configuration("Classic credential is not UTF-8"))?;

        match text.split_once(':') {
            Some((user, pass)) if !user.is_empty() && !pass.is_empty() => {
                Ok((user.to_string(), pass.to_string()))
            }
            _ => Err(Error::configuration(
                "Classic credential is not a username:password pair",
            )),
        }
    }
}

/// Connection settings for one Jamf Pro server.
///
/// The password is redacted in Debug output.
#[derive(Clone)]
pub struct JamfCredentials {
    base_url: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for JamfCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JamfCredentials")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl JamfCredentials {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Required environment variables:
    /// - `JAMF_BASE_URL`
    /// - `JAMF_USER`
    /// - `JAMF_USER_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    Error::configuration(format!("Environment variable {} is not set", name))
                })
        };

        Ok(Self::new(
            require(ENV_BASE_URL)?,
            require(ENV_USER)?,
            require(ENV_PASSWORD)?,
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Encode the user and password for Classic calls.
    pub fn classic_credential(&self) -> Result<ClassicCredential> {
        acquire_classic_credential(&self.username, &self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_classic_credential_is_deterministic() {
        let a = acquire_classic_credential("apiuser", "s3cret").unwrap();
        let b = acquire_classic_credential("apiuser", "s3cret").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.encoded(), "YXBpdXNlcjpzM2NyZXQ=");
    }

    #[test]
    fn test_classic_credential_is_reversible() {
        let credential = acquire_classic_credential("apiuser", "pa:ss word").unwrap();
        assert_eq!(
            credential.decode().unwrap(),
            ("apiuser".to_string(), "pa:ss word".to_string())
        );

        let reloaded = ClassicCredential::from_encoded(credential.encoded()).unwrap();
        assert_eq!(reloaded, credential);
    }

    #[test]
    fn test_classic_credential_rejects_bad_input() {
        assert!(acquire_classic_credential("", "pw")
            .unwrap_err()
            .is_configuration_error());
        assert!(acquire_classic_credential("user", "")
            .unwrap_err()
            .is_configuration_error());
        assert!(acquire_classic_credential("us:er", "pw")
            .unwrap_err()
            .is_configuration_error());

        assert!(ClassicCredential::from_encoded("%%%").is_err());
        // "nocolon"
        assert!(ClassicCredential::from_encoded("bm9jb2xvbg==").is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credential = acquire_classic_credential("apiuser", "s3cret").unwrap();
        let debug_output = format!("{:?}", credential);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains(credential.encoded()));

        let creds = JamfCredentials::new("https://example.jamfcloud.com", "apiuser", "s3cret");
        let debug_output = format!("{:?}", creds);
        assert!(!debug_output.contains("s3cret"));
        assert!(debug_output.contains("example.jamfcloud.com"));
        assert!(debug_output.contains("apiuser"));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_BASE_URL, "https://example.jamfcloud.com"),
            (ENV_USER, "apiuser"),
            (ENV_PASSWORD, "s3cret"),
        ]
        .into_iter()
        .collect();

        let creds =
            JamfCredentials::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(creds.base_url(), "https://example.jamfcloud.com");
        assert_eq!(creds.username(), "apiuser");
        assert!(creds.classic_credential().is_ok());
    }

    #[test]
    fn test_from_lookup_names_missing_variable() {
        let err = JamfCredentials::from_lookup(|name| match name {
            ENV_BASE_URL => Some("https://example.jamfcloud.com".to_string()),
            ENV_USER => Some("   ".to_string()),
            _ => None,
        })
        .unwrap_err();

        assert!(err.is_configuration_error());
        assert!(err.to_string().contains(ENV_USER));
    }
}
