//! Account handles and the per-chain-class account buckets.

use wconnect_protocol::{Address, ChainClass};

use crate::error::{Error, Result};

/// An opaque handle to a signer/account usable on the active chain.
///
/// The core never signs, builds transactions, or derives addresses; a handle
/// is the unit the surrounding application hands to its provider layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountHandle {
    address: Address,
}

impl AccountHandle {
    /// Creates a handle for the given address.
    pub fn new(address: impl Into<Address>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// The account's address.
    pub fn address(&self) -> &Address {
        &self.address
    }
}

/// Ordered account buckets keyed by chain class, supplied at construction.
///
/// Both buckets must be non-empty. The invariant is enforced here, behind
/// private fields, so every holder can index position 0 of either bucket
/// without checking. The set is immutable for the connector's lifetime.
#[derive(Debug, Clone)]
pub struct AccountSet {
    mainnet: Vec<AccountHandle>,
    testnet: Vec<AccountHandle>,
}

impl AccountSet {
    /// Builds an account set from per-class buckets.
    ///
    /// Fails with [`Error::InvalidConfiguration`] if either bucket is empty.
    pub fn new(mainnet: Vec<AccountHandle>, testnet: Vec<AccountHandle>) -> Result<Self> {
        if mainnet.is_empty() || testnet.is_empty() {
            return Err(Error::InvalidConfiguration(
                "account buckets must not be empty".to_string(),
            ));
        }
        Ok(Self { mainnet, testnet })
    }

    /// The bucket for a chain class.
    pub fn bucket(&self, class: ChainClass) -> &[AccountHandle] {
        match class {
            ChainClass::Mainnet => &self.mainnet,
            ChainClass::Testnet => &self.testnet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buckets_are_a_fatal_configuration_error() {
        let err = AccountSet::new(vec![], vec![AccountHandle::new("0xb1")]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let err = AccountSet::new(vec![AccountHandle::new("0xa1")], vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn buckets_select_by_chain_class() {
        let set = AccountSet::new(
            vec![AccountHandle::new("0xa1")],
            vec![AccountHandle::new("0xb1"), AccountHandle::new("0xb2")],
        )
        .unwrap();

        assert_eq!(set.bucket(ChainClass::Mainnet).len(), 1);
        assert_eq!(set.bucket(ChainClass::Testnet).len(), 2);
        assert_eq!(
            set.bucket(ChainClass::Mainnet)[0].address().as_str(),
            "0xa1"
        );
    }
}
