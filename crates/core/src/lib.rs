//! wconnect: a uniform interface over heterogeneous wallet backends.
//!
//! Applications talk to every wallet - browser extension, mobile signer, or
//! the in-memory test double shipped here - through one contract: the
//! [`Connector`] trait. A connector tracks connection status, active chain,
//! and active account, funnels every wallet operation through a single typed
//! [`request`](Connector::request) dispatcher, and notifies subscribers when
//! its state changes.
//!
//! # Examples
//!
//! ```ignore
//! use wconnect::{
//!     AccountHandle, AccountSet, Connector, MockConnector, MockOptions, chains,
//! };
//!
//! #[tokio::main]
//! async fn main() -> wconnect::Result<()> {
//!     let accounts = AccountSet::new(
//!         vec![AccountHandle::new("0xa1")],
//!         vec![AccountHandle::new("0xb1"), AccountHandle::new("0xb2")],
//!     )?;
//!     let connector = MockConnector::new(accounts, MockOptions::new("mock", "Mock Wallet"));
//!
//!     let mut events = connector.subscribe();
//!     let data = connector.connect().await?;
//!     assert_eq!(data.chain_id, chains::DEVNET);
//!
//!     connector.switch_chain(chains::MAINNET).await?;
//!     // First the chain change, then the account reset.
//!     while let Some(event) = events.try_recv() {
//!         println!("{event:?}");
//!     }
//!
//!     connector.disconnect().await?;
//!     Ok(())
//! }
//! ```

pub mod account;
pub mod connector;
pub mod error;
pub mod events;
pub mod icons;
pub mod mock;

pub use account::{AccountHandle, AccountSet};
pub use connector::{Connector, ConnectorData, ProviderOptions};
pub use error::{Error, Result};
pub use events::{ConnectorEvent, EventBus, EventStream, Subscription};
pub use icons::{ConnectorIcons, KnownIdentity, icons_for};
pub use mock::{MockConnector, MockOptions};

// Re-export the protocol crate and its types for convenience.
pub use wconnect_protocol;
pub use wconnect_protocol::{
    AccountRequestParams, Address, ChainClass, ChainId, Permission, WalletCall, WalletResponse,
    chains,
};
