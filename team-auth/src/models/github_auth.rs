//! GitHub OAuth variant.

use serde::{Deserialize, Serialize};

/// GitHub OAuth configuration for a team.
///
/// Access is granted when the authenticating user matches any of the
/// organization, team, or user allow-lists. Empty endpoint URLs mean the
/// provider defaults apply, resolved by the authenticator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubAuth {
    pub client_id: String,
    pub client_secret: String,
    pub organizations: Vec<String>,
    pub teams: Vec<GitHubTeam>,
    pub users: Vec<String>,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

/// Organization + team pair in the GitHub allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubTeam {
    pub organization_name: String,
    pub team_name: String,
}
