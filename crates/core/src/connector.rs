//! The connector contract every wallet backend satisfies.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wconnect_protocol::{Address, ChainId, WalletCall, WalletResponse};

use crate::account::AccountHandle;
use crate::error::Result;
use crate::events::{ConnectorEvent, EventStream, Subscription};
use crate::icons::ConnectorIcons;

/// Data returned by a successful [`Connector::connect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorData {
    /// Address of the account the session starts with.
    pub account: Address,
    /// Chain the session starts on.
    pub chain_id: ChainId,
}

/// Options forwarded through [`Connector::account`] to the provider layer.
///
/// The connector itself never dials a node; these travel untouched to
/// whatever provider the resolved account is bound to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOptions {
    /// RPC endpoint override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_url: Option<String>,
}

/// The capability set every wallet backend implements, independent of
/// transport.
///
/// A connector tracks a mutable triple - connection status, active chain,
/// active account index - and keeps it consistent while emitting change
/// notifications. One connector instance is driven by one application
/// session; concurrent mutating calls on the same instance race and the last
/// write wins.
///
/// All lifecycle and request operations are async: a transport-backed
/// implementation may suspend for backend round-trips, and there is no
/// built-in cancellation or timeout - callers that lose interest simply drop
/// the future's result.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Stable identifier of the backend.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Icon pair for light and dark UIs.
    fn icon(&self) -> ConnectorIcons;

    /// Whether this connector can be used at all (e.g. the wallet extension
    /// is installed). Checked before every state-mutating or request
    /// operation.
    fn available(&self) -> bool;

    /// Subscribes to state-change notifications.
    ///
    /// Events are emitted after the state transition they describe, so a
    /// listener that queries the connector from an event observes the new
    /// state.
    fn subscribe(&self) -> EventStream<ConnectorEvent>;

    /// Establishes a session with the backend and returns the starting
    /// account and chain.
    ///
    /// Fails with [`Error::UserRejected`] when the backend declines, and
    /// with [`Error::NotFound`] when the backend is unavailable; neither
    /// failure leaves any state behind.
    ///
    /// [`Error::UserRejected`]: crate::Error::UserRejected
    /// [`Error::NotFound`]: crate::Error::NotFound
    async fn connect(&self) -> Result<ConnectorData>;

    /// Ends the session and emits [`ConnectorEvent::Disconnect`].
    ///
    /// Idempotent: disconnecting while already disconnected is a no-op
    /// success.
    async fn disconnect(&self) -> Result<()>;

    /// True iff the `accounts` permission is currently held.
    ///
    /// Used for silent reconnection checks without prompting the user.
    async fn ready(&self) -> Result<bool>;

    /// The active chain id, queried through the request-dispatch protocol.
    async fn chain_id(&self) -> Result<ChainId>;

    /// Switches the active chain and resets the account index to 0.
    async fn switch_chain(&self, chain_id: ChainId) -> Result<()>;

    /// Switches the active account index.
    async fn switch_account(&self, index: usize) -> Result<()>;

    /// Dispatches a typed request to the backend.
    ///
    /// Unavailable connectors reject every request with
    /// [`Error::NotFound`], regardless of message type.
    ///
    /// [`Error::NotFound`]: crate::Error::NotFound
    async fn request(&self, call: WalletCall) -> Result<WalletResponse>;

    /// Resolves the active account.
    ///
    /// Fails with [`Error::NotFound`] when unavailable and
    /// [`Error::NotConnected`] when no session is active or the account
    /// index has no corresponding account on the current chain.
    ///
    /// [`Error::NotFound`]: crate::Error::NotFound
    /// [`Error::NotConnected`]: crate::Error::NotConnected
    async fn account(&self, provider: &ProviderOptions) -> Result<AccountHandle>;

    /// Registers a callback invoked for every emitted event.
    ///
    /// Spawns a handler task on the current Tokio runtime; the task is
    /// cancelled when the returned [`Subscription`] is dropped.
    fn on_event(
        &self,
        handler: Box<dyn Fn(ConnectorEvent) + Send + Sync + 'static>,
    ) -> Subscription {
        let mut stream = self.subscribe();
        let (cancel_tx, mut cancel_rx) = tokio::sync::oneshot::channel();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut cancel_rx => break,
                    event = stream.recv() => match event {
                        Some(event) => handler(event),
                        None => break,
                    },
                }
            }
        });
        Subscription::new(cancel_tx)
    }
}
