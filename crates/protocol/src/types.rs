//! Primitive identifiers used across the wire.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Chain identifier.
///
/// Rendered as a decimal string by `wallet_requestChainId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(ChainId)
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        ChainId(value)
    }
}

/// Well-known chain ids.
pub mod chains {
    use super::ChainId;

    /// The production chain.
    pub const MAINNET: ChainId = ChainId(1);
    /// The public test chain.
    pub const TESTNET: ChainId = ChainId(2);
    /// Local development chain; the reference connector starts here.
    pub const DEVNET: ChainId = ChainId(1337);
}

/// Account-bucket grouping for a chain.
///
/// Exactly two classes exist: the production chain, and everything else.
/// Every code path that needs an account bucket derives it through
/// [`ChainClass::of`] so the branching cannot diverge between call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainClass {
    /// The production chain.
    Mainnet,
    /// Any chain that is not the production chain.
    Testnet,
}

impl ChainClass {
    /// Classifies a chain id. Total: any id other than [`chains::MAINNET`]
    /// belongs to the testnet class.
    pub fn of(chain_id: ChainId) -> Self {
        if chain_id == chains::MAINNET {
            ChainClass::Mainnet
        } else {
            ChainClass::Testnet
        }
    }
}

impl fmt::Display for ChainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainClass::Mainnet => write!(f, "mainnet"),
            ChainClass::Testnet => write!(f, "testnet"),
        }
    }
}

/// Opaque account address.
///
/// The connector never interprets the contents; addresses flow through from
/// the account set to event payloads and `wallet_requestAccounts` results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Creates an address from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Address(value.into())
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Address(value.to_string())
    }
}

impl From<String> for Address {
    fn from(value: String) -> Self {
        Address(value)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
