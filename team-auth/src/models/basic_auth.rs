//! Basic-auth variant and the credential protector invoked before storage.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AuthConfigError;
use crate::utils::password::{hash_password, Password};

/// Static username/password configuration for a team.
///
/// A pair with either field empty is treated as unset: the protector
/// encodes it as `null` rather than hashing empty strings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    #[serde(rename = "basic_auth_username")]
    pub username: String,
    #[serde(rename = "basic_auth_password")]
    pub password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check whether both fields are non-empty.
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// Encode this credential for storage. See [`protect_credentials`].
    pub fn protected_json(&self) -> Result<String, AuthConfigError> {
        protect_credentials(Some(self))
    }
}

// The password field may hold plaintext before protection, so it stays out
// of Debug output.
impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Produce the stored form of an optional basic-auth credential.
///
/// Absent credentials, or a pair with an empty username or password, encode
/// to JSON `null`. Otherwise the result is an object carrying the username
/// unchanged and the salted Argon2 hash of the password — never the
/// plaintext. The input is never mutated.
#[tracing::instrument(skip_all)]
pub fn protect_credentials(auth: Option<&BasicAuth>) -> Result<String, AuthConfigError> {
    let protected = match auth {
        Some(auth) if auth.is_configured() => {
            let hashed = hash_password(&Password::new(auth.password.clone()))?;
            Some(BasicAuth {
                username: auth.username.clone(),
                password: hashed.into_string(),
            })
        }
        _ => {
            tracing::debug!("no basic auth credential configured, encoding null");
            None
        }
    };

    let encoded = serde_json::to_string(&protected)?;
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password::{verify_password, PasswordHashString};
    use serde_json::Value;

    #[test]
    fn test_protect_hashes_password_and_keeps_username() {
        let auth = BasicAuth::new("alice", "hunter2");
        let encoded = protect_credentials(Some(&auth)).unwrap();

        let value: Value = serde_json::from_str(&encoded).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["basic_auth_username"], "alice");

        let stored = object["basic_auth_password"].as_str().unwrap();
        assert_ne!(stored, "hunter2");
        assert!(verify_password(
            &Password::new("hunter2".to_string()),
            &PasswordHashString::new(stored.to_string()),
        ));
    }

    #[test]
    fn test_protect_absent_credential_encodes_null() {
        assert_eq!(protect_credentials(None).unwrap(), "null");
    }

    #[test]
    fn test_protect_empty_username_encodes_null() {
        let auth = BasicAuth::new("", "secret");
        assert_eq!(protect_credentials(Some(&auth)).unwrap(), "null");
    }

    #[test]
    fn test_protect_empty_password_encodes_null() {
        let auth = BasicAuth::new("alice", "");
        assert_eq!(protect_credentials(Some(&auth)).unwrap(), "null");
    }

    #[test]
    fn test_protect_same_password_twice_differs_but_verifies() {
        let auth = BasicAuth::new("alice", "hunter2");
        let first = protect_credentials(Some(&auth)).unwrap();
        let second = protect_credentials(Some(&auth)).unwrap();

        assert_ne!(first, second);

        for encoded in [first, second] {
            let value: Value = serde_json::from_str(&encoded).unwrap();
            let stored = value["basic_auth_password"].as_str().unwrap();
            assert!(verify_password(
                &Password::new("hunter2".to_string()),
                &PasswordHashString::new(stored.to_string()),
            ));
        }
    }

    #[test]
    fn test_protect_does_not_mutate_input() {
        let auth = BasicAuth::new("alice", "hunter2");
        let _ = auth.protected_json().unwrap();

        assert_eq!(auth.password, "hunter2");
        assert_eq!(auth.username, "alice");
    }

    #[test]
    fn test_debug_redacts_password() {
        let auth = BasicAuth::new("alice", "hunter2");
        let rendered = format!("{:?}", auth);

        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }
}
