//! The discriminated request message and its result shapes.
//!
//! Every wallet operation funnels through a single `{ type, params? }`
//! message. The reference dispatcher matches on the variant directly; a real
//! transport serializes the same message onto its channel, which is why the
//! wire shape is implemented by hand here rather than left to a derive.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::permission::Permission;
use crate::types::Address;

const REQUEST_CHAIN_ID: &str = "wallet_requestChainId";
const GET_PERMISSIONS: &str = "wallet_getPermissions";
const REQUEST_ACCOUNTS: &str = "wallet_requestAccounts";

/// A request message addressed to a wallet backend.
///
/// The first three variants form the minimum set every conforming backend
/// honors. Anything else travels as [`WalletCall::Extension`]; backends that
/// do not recognize the method reject it.
#[derive(Debug, Clone, PartialEq)]
pub enum WalletCall {
    /// Ask for the active chain id, independent of connection state.
    RequestChainId,
    /// Ask for the currently granted permission set.
    GetPermissions,
    /// Ask for the active accounts, optionally without prompting the user.
    RequestAccounts(AccountRequestParams),
    /// An application-specific message outside the required set.
    Extension {
        /// Wire name of the message type.
        method: String,
        /// Raw parameter payload, if any.
        params: Option<Value>,
    },
}

impl WalletCall {
    /// Returns the wire name of this message type.
    pub fn method(&self) -> &str {
        match self {
            WalletCall::RequestChainId => REQUEST_CHAIN_ID,
            WalletCall::GetPermissions => GET_PERMISSIONS,
            WalletCall::RequestAccounts(_) => REQUEST_ACCOUNTS,
            WalletCall::Extension { method, .. } => method,
        }
    }
}

/// Parameters for [`WalletCall::RequestAccounts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountRequestParams {
    /// When set, the backend must not raise a user-facing prompt.
    #[serde(default)]
    pub silent_mode: bool,
}

/// On-the-wire representation shared by serialize and deserialize.
#[derive(Serialize, Deserialize)]
struct RawCall {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
}

impl Serialize for WalletCall {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let params = match self {
            WalletCall::RequestAccounts(params) => {
                Some(serde_json::to_value(params).map_err(S::Error::custom)?)
            }
            WalletCall::Extension { params, .. } => params.clone(),
            _ => None,
        };
        RawCall {
            kind: self.method().to_string(),
            params,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WalletCall {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawCall::deserialize(deserializer)?;
        let call = match raw.kind.as_str() {
            REQUEST_CHAIN_ID => WalletCall::RequestChainId,
            GET_PERMISSIONS => WalletCall::GetPermissions,
            REQUEST_ACCOUNTS => {
                let params = match raw.params {
                    Some(value) => serde_json::from_value(value).map_err(D::Error::custom)?,
                    None => AccountRequestParams::default(),
                };
                WalletCall::RequestAccounts(params)
            }
            _ => WalletCall::Extension {
                method: raw.kind,
                params: raw.params,
            },
        };
        Ok(call)
    }
}

/// A type-specific result returned by the dispatcher.
///
/// Untagged: each variant's wire shape is distinct enough to resolve on
/// deserialization (a permission list only ever contains known permission
/// names, so it is tried before the generic address list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WalletResponse {
    /// Granted permissions, from `wallet_getPermissions`.
    Permissions(Vec<Permission>),
    /// Account addresses, from `wallet_requestAccounts`.
    Accounts(Vec<Address>),
    /// Active chain id as a decimal string, from `wallet_requestChainId`.
    ChainId(String),
}

impl WalletResponse {
    /// Returns the decimal chain-id string, if this is a chain-id response.
    pub fn as_chain_id(&self) -> Option<&str> {
        match self {
            WalletResponse::ChainId(raw) => Some(raw),
            _ => None,
        }
    }

    /// Returns the permission list, if this is a permissions response.
    pub fn as_permissions(&self) -> Option<&[Permission]> {
        match self {
            WalletResponse::Permissions(permissions) => Some(permissions),
            _ => None,
        }
    }

    /// Returns the address list, if this is an accounts response.
    pub fn as_accounts(&self) -> Option<&[Address]> {
        match self {
            WalletResponse::Accounts(accounts) => Some(accounts),
            _ => None,
        }
    }
}
