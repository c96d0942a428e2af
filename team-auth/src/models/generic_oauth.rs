//! Provider-agnostic OAuth variant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Generic OAuth configuration for a team.
///
/// `auth_url_params` is an ordered map so the encoded form is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericOAuth {
    pub auth_url: String,
    pub auth_url_params: BTreeMap<String, String>,
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub display_name: String,
    pub scope: String,
}
