//! CloudFoundry UAA variant.

use serde::{Deserialize, Serialize};

/// UAA OAuth configuration for a team, scoped to CloudFoundry spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UAAAuth {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
    pub cf_spaces: Vec<String>,
    pub cf_url: String,
    pub cf_ca_cert: String,
}
