//! Request types for the Foreman API

use serde::{Deserialize, Serialize};

/// Body of a PUT to a host's power sub-resource.
///
/// Valid actions are (on/start), (off/stop), (soft/reboot), (cycle/reset)
/// and (state/status). The server owns the equivalences; the client passes
/// the string through unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerRequest {
    pub power_action: String,
}

impl PowerRequest {
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            power_action: action.into(),
        }
    }
}
