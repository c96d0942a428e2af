//! Provider registry - which authentication mechanisms a team enables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mechanism class codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    Basic,
    OAuth,
}

impl AuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::Basic => "basic",
            AuthType::OAuth => "oauth",
        }
    }
}

/// Provider tag codes. The wire values form a closed set:
/// `basic`, `github`, `uaa`, `generic-oauth`. Adding a provider means
/// extending this enum and the variant set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Basic,
    GitHub,
    Uaa,
    #[serde(rename = "generic-oauth")]
    GenericOAuth,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Basic => "basic",
            AuthProvider::GitHub => "github",
            AuthProvider::Uaa => "uaa",
            AuthProvider::GenericOAuth => "generic-oauth",
        }
    }

    /// Mechanism class this provider belongs to.
    pub fn auth_type(&self) -> AuthType {
        match self {
            AuthProvider::Basic => AuthType::Basic,
            AuthProvider::GitHub => AuthType::OAuth,
            AuthProvider::Uaa => AuthType::OAuth,
            AuthProvider::GenericOAuth => AuthType::OAuth,
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(AuthProvider::Basic),
            "github" => Ok(AuthProvider::GitHub),
            "uaa" => Ok(AuthProvider::Uaa),
            "generic-oauth" => Ok(AuthProvider::GenericOAuth),
            _ => Err(format!("Invalid auth provider: {}", s)),
        }
    }
}

/// Ordered registry of the providers enabled for a team.
///
/// Construction performs no deduplication or validation; cross-checking a
/// tag against the team's configured variants happens at the boundary that
/// consumes the registry. Encodes transparently as an array of tag strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthWrapper {
    providers: Vec<AuthProvider>,
}

impl AuthWrapper {
    pub fn new(providers: Vec<AuthProvider>) -> Self {
        Self { providers }
    }

    /// Enabled providers in priority/display order.
    pub fn providers(&self) -> &[AuthProvider] {
        &self.providers
    }

    pub fn contains(&self, provider: AuthProvider) -> bool {
        self.providers.contains(&provider)
    }

    /// An empty registry means the team has no usable login path.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
