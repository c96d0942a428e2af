//! Per-team authentication configuration core.
//!
//! Models which authentication mechanisms are enabled for each team in a
//! multi-tenant control plane: static username/password plus OAuth-style
//! external identity providers (GitHub, UAA, generic OAuth). Basic-auth
//! credentials are protected before they reach storage — passwords are
//! salted and hashed, absent credentials encode to JSON `null`, and the
//! stored form never contains plaintext.

pub mod error;
pub mod models;
pub mod utils;

pub use error::AuthConfigError;
pub use models::{
    protect_credentials, AuthProvider, AuthType, AuthWrapper, BasicAuth, GenericOAuth, GitHubAuth,
    GitHubTeam, SavedTeam, Team, UAAAuth,
};
