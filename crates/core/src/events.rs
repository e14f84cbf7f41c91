//! Event system for connector state notifications.
//!
//! Connectors emit events synchronously with the state mutation that
//! triggers them: a listener always observes the post-transition state.
//! Delivery is fire-and-continue - emitting never blocks on listeners.
//!
//! Two consumption patterns are supported:
//!
//! 1. **Streams**: [`Connector::subscribe`] returns an [`EventStream`] to
//!    poll for events
//! 2. **Callbacks**: [`Connector::on_event`] spawns a background handler
//!    task, managed by an RAII [`Subscription`]
//!
//! [`Connector::subscribe`]: crate::Connector::subscribe
//! [`Connector::on_event`]: crate::Connector::on_event

use tokio::sync::{broadcast, oneshot};
use wconnect_protocol::{Address, ChainId};

/// A state-change notification emitted by a connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorEvent {
    /// The active chain and/or account changed.
    ///
    /// A chain switch carries `chain_id` (and, for connectors configured to
    /// unify the two, the resolved account); an account switch carries only
    /// `account`.
    Change {
        /// New active chain id, when the chain changed.
        chain_id: Option<ChainId>,
        /// Address of the new active account, when it resolved.
        account: Option<Address>,
    },
    /// The session ended.
    Disconnect,
}

/// Broadcast-backed event dispatcher held by a connector implementation.
///
/// [`emit`](Self::emit) completes without waiting on any receiver, which
/// keeps event delivery from blocking the operation that triggered it.
/// Exposed so transport-backed connectors can reuse the same delivery
/// semantics as the reference implementation.
pub struct EventBus<E: Clone + Send + 'static> {
    tx: broadcast::Sender<E>,
}

impl<E: Clone + Send + 'static> EventBus<E> {
    /// Creates an [`EventBus`] with the given broadcast capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emits an event to all current subscribers.
    ///
    /// Events emitted while nobody is subscribed are dropped.
    pub fn emit(&self, event: E) {
        let _ = self.tx.send(event);
    }

    /// Subscribes to all future events.
    pub fn subscribe(&self) -> EventStream<E> {
        EventStream::new(self.tx.subscribe())
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<E: Clone + Send + 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Receiver half of an [`EventBus`] subscription.
///
/// Wraps [`broadcast::Receiver`] and handles lag by logging and continuing,
/// so a slow consumer sees a gap in events rather than an error.
///
/// [`broadcast::Receiver`]: tokio::sync::broadcast::Receiver
pub struct EventStream<E: Clone + Send + 'static> {
    rx: broadcast::Receiver<E>,
}

impl<E: Clone + Send + 'static> EventStream<E> {
    pub(crate) fn new(rx: broadcast::Receiver<E>) -> Self {
        Self { rx }
    }

    /// Receives the next event, waiting until one is available.
    ///
    /// Returns `None` when the emitting connector is dropped.
    pub async fn recv(&mut self) -> Option<E> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(dropped = n, "event stream lagged, dropped events");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Attempts to receive an event without waiting.
    pub fn try_recv(&mut self) -> Option<E> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    tracing::warn!(dropped = n, "event stream lagged, dropped events");
                }
                Err(
                    broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed,
                ) => return None,
            }
        }
    }
}

/// RAII handle for a callback-style event handler.
///
/// Returned by [`Connector::on_event`]. The background task that invokes the
/// callback is cancelled when this handle is dropped or
/// [`unsubscribe`](Self::unsubscribe) is called.
///
/// [`Connector::on_event`]: crate::Connector::on_event
pub struct Subscription {
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl Subscription {
    pub(crate) fn new(cancel_tx: oneshot::Sender<()>) -> Self {
        Self {
            cancel_tx: Some(cancel_tx),
        }
    }

    /// Explicitly cancels the handler, equivalent to dropping the handle.
    pub fn unsubscribe(mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel_tx.is_some())
            .finish()
    }
}
