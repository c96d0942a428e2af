//! Team model - per-team authentication configuration aggregate.

use serde::{Deserialize, Serialize};

use crate::models::{AuthProvider, AuthWrapper, BasicAuth, GenericOAuth, GitHubAuth, UAAAuth};

/// Per-team authentication configuration.
///
/// Each variant field is independently optional: `None` means the mechanism
/// is not configured for this team, never "configured with empty values".
/// Values are composed at construction and replaced whole; there is no
/// partial-mutation API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub admin: bool,
    #[serde(default)]
    pub auth_wrapper: AuthWrapper,
    pub basic_auth: Option<BasicAuth>,
    pub github_auth: Option<GitHubAuth>,
    pub uaa_auth: Option<UAAAuth>,
    #[serde(rename = "genericoauth_auth")]
    pub generic_oauth: Option<GenericOAuth>,
}

impl Team {
    /// Create a team with no providers enabled and no variants configured.
    pub fn new(name: impl Into<String>, admin: bool) -> Self {
        Self {
            name: name.into(),
            admin,
            ..Self::default()
        }
    }

    /// Check whether the given provider's configuration variant is attached.
    pub fn has_variant(&self, provider: AuthProvider) -> bool {
        match provider {
            AuthProvider::Basic => self.basic_auth.is_some(),
            AuthProvider::GitHub => self.github_auth.is_some(),
            AuthProvider::Uaa => self.uaa_auth.is_some(),
            AuthProvider::GenericOAuth => self.generic_oauth.is_some(),
        }
    }

    /// A provider is active when it is named in the registry and its variant
    /// is configured. A configured variant not named in the registry stays
    /// disabled.
    pub fn is_provider_active(&self, provider: AuthProvider) -> bool {
        self.auth_wrapper.contains(provider) && self.has_variant(provider)
    }
}

/// A team after the persistence layer has assigned its identity.
///
/// The id is assigned once on creation and never changed by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTeam {
    id: i64,
    #[serde(flatten)]
    pub team: Team,
}

impl SavedTeam {
    pub fn new(id: i64, team: Team) -> Self {
        Self { id, team }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Registry of enabled providers, in priority order.
    pub fn auth_wrapper(&self) -> &AuthWrapper {
        &self.team.auth_wrapper
    }
}
