//! Permission grants reflected by `wallet_getPermissions`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A capability granted to the application by the wallet.
///
/// The connector contract derives the granted set from connection state:
/// `[Accounts]` while connected, empty otherwise. Permissions are never
/// stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Access to the wallet's accounts.
    Accounts,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::Accounts => write!(f, "accounts"),
        }
    }
}
