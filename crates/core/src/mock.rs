//! The reference connector: an in-memory backend with deterministic
//! behavior.
//!
//! Serves as a test double for applications and as the canonical
//! illustration of the connector state machine. Every knob a real backend
//! exercises implicitly - availability, connection refusal, event shaping -
//! is a construction-time option here.

use std::fmt;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;
use wconnect_protocol::{
    AccountRequestParams, ChainClass, ChainId, Permission, WalletCall, WalletResponse, chains,
};

use crate::account::{AccountHandle, AccountSet};
use crate::connector::{Connector, ConnectorData, ProviderOptions};
use crate::error::{Error, Result};
use crate::events::{ConnectorEvent, EventBus, EventStream};
use crate::icons::{self, ConnectorIcons};

/// Construction options for [`MockConnector`].
#[derive(Debug, Clone)]
pub struct MockOptions {
    id: String,
    name: String,
    icon: Option<ConnectorIcons>,
    available: bool,
    fail_connect: bool,
    unified_switch_account_and_chain: bool,
    emit_change_account_on_chain_switch: bool,
}

impl MockOptions {
    /// Options with the default policy: available, connects successfully,
    /// two-event chain switches.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            available: true,
            fail_connect: false,
            unified_switch_account_and_chain: false,
            emit_change_account_on_chain_switch: true,
        }
    }

    /// Supplies an explicit icon pair instead of the registry lookup.
    pub fn icon(mut self, icon: ConnectorIcons) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Marks the backend as installed or not.
    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Makes `connect` behave as if the user declined the wallet prompt.
    pub fn fail_connect(mut self, fail: bool) -> Self {
        self.fail_connect = fail;
        self
    }

    /// Includes the resolved account address in the chain-change event.
    pub fn unified_switch_account_and_chain(mut self, unified: bool) -> Self {
        self.unified_switch_account_and_chain = unified;
        self
    }

    /// Controls the separate account-change event after a chain switch.
    ///
    /// On by default so consumers that only listen for account changes still
    /// get notified after a chain switch.
    pub fn emit_change_account_on_chain_switch(mut self, emit: bool) -> Self {
        self.emit_change_account_on_chain_switch = emit;
        self
    }
}

/// The mutable triple. Held in one lock so concurrent mutating calls stay
/// last-write-wins over the whole triple rather than interleaving per field.
#[derive(Debug)]
struct State {
    connected: bool,
    chain_id: ChainId,
    account_index: usize,
}

/// A connector backed by in-memory account buckets.
///
/// Starts disconnected on the devnet chain with account index 0. Permission
/// state is never stored: it is recomputed from `connected` on every
/// `wallet_getPermissions` dispatch.
pub struct MockConnector {
    accounts: AccountSet,
    options: MockOptions,
    state: Mutex<State>,
    events: EventBus<ConnectorEvent>,
}

impl MockConnector {
    /// Creates a connector over the given account set.
    pub fn new(accounts: AccountSet, options: MockOptions) -> Self {
        Self {
            accounts,
            options,
            state: Mutex::new(State {
                connected: false,
                chain_id: chains::DEVNET,
                account_index: 0,
            }),
            events: EventBus::default(),
        }
    }

    /// Resolves the active account from the current chain and index.
    ///
    /// The single derivation shared by `request`, `account`, and the switch
    /// event payloads. An index past the end of the bucket is a
    /// not-connected failure, surfaced wherever the account is actually
    /// dereferenced.
    fn resolve_active(&self) -> Result<AccountHandle> {
        let (chain_id, index) = {
            let state = self.state.lock();
            (state.chain_id, state.account_index)
        };
        self.accounts
            .bucket(ChainClass::of(chain_id))
            .get(index)
            .cloned()
            .ok_or(Error::NotConnected)
    }
}

impl fmt::Debug for MockConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("MockConnector")
            .field("id", &self.options.id)
            .field("connected", &state.connected)
            .field("chain_id", &state.chain_id)
            .field("account_index", &state.account_index)
            .finish()
    }
}

#[async_trait]
impl Connector for MockConnector {
    fn id(&self) -> &str {
        &self.options.id
    }

    fn name(&self) -> &str {
        &self.options.name
    }

    fn icon(&self) -> ConnectorIcons {
        self.options
            .icon
            .clone()
            .unwrap_or_else(|| icons::icons_for(&self.options.id))
    }

    fn available(&self) -> bool {
        self.options.available
    }

    fn subscribe(&self) -> EventStream<ConnectorEvent> {
        self.events.subscribe()
    }

    async fn connect(&self) -> Result<ConnectorData> {
        if !self.available() {
            return Err(Error::NotFound);
        }
        if self.options.fail_connect {
            debug!(id = %self.options.id, "backend declined connection");
            return Err(Error::UserRejected);
        }

        // The session flag flips only after both backend round-trips
        // succeed; a failed connect leaves no state behind.
        let response = self
            .request(WalletCall::RequestAccounts(AccountRequestParams {
                silent_mode: true,
            }))
            .await?;
        let account = response
            .as_accounts()
            .and_then(|accounts| accounts.first().cloned())
            .ok_or_else(|| {
                Error::UnexpectedResponse("account request returned no accounts".to_string())
            })?;
        let chain_id = self.chain_id().await?;

        self.state.lock().connected = true;

        debug!(id = %self.options.id, %chain_id, account = %account, "connected");
        Ok(ConnectorData { account, chain_id })
    }

    async fn disconnect(&self) -> Result<()> {
        self.state.lock().connected = false;
        debug!(id = %self.options.id, "disconnected");
        self.events.emit(ConnectorEvent::Disconnect);
        Ok(())
    }

    async fn ready(&self) -> Result<bool> {
        let response = self.request(WalletCall::GetPermissions).await?;
        let permissions = response.as_permissions().ok_or_else(|| {
            Error::UnexpectedResponse("permission request returned a non-list result".to_string())
        })?;
        Ok(permissions.contains(&Permission::Accounts))
    }

    async fn chain_id(&self) -> Result<ChainId> {
        let response = self.request(WalletCall::RequestChainId).await?;
        let raw = response.as_chain_id().ok_or_else(|| {
            Error::UnexpectedResponse("chain id request returned a non-string result".to_string())
        })?;
        raw.parse()
            .map_err(|_| Error::UnexpectedResponse(format!("invalid chain id string: {raw}")))
    }

    async fn switch_chain(&self, chain_id: ChainId) -> Result<()> {
        {
            let mut state = self.state.lock();
            state.chain_id = chain_id;
            state.account_index = 0;
        }
        let account = if self.options.unified_switch_account_and_chain {
            self.resolve_active()
                .ok()
                .map(|account| account.address().clone())
        } else {
            None
        };

        debug!(id = %self.options.id, %chain_id, "switched chain");
        self.events.emit(ConnectorEvent::Change {
            chain_id: Some(chain_id),
            account,
        });

        if self.options.emit_change_account_on_chain_switch {
            self.switch_account(0).await?;
        }
        Ok(())
    }

    async fn switch_account(&self, index: usize) -> Result<()> {
        self.state.lock().account_index = index;
        debug!(id = %self.options.id, index, "switched account");

        // An out-of-range index is stored as-is and carries no change
        // payload; resolution fails lazily at the next dereference.
        if let Ok(account) = self.resolve_active() {
            self.events.emit(ConnectorEvent::Change {
                chain_id: None,
                account: Some(account.address().clone()),
            });
        }
        Ok(())
    }

    async fn request(&self, call: WalletCall) -> Result<WalletResponse> {
        if !self.available() {
            return Err(Error::NotFound);
        }
        debug!(id = %self.options.id, method = call.method(), "dispatching request");

        match call {
            WalletCall::RequestChainId => Ok(WalletResponse::ChainId(
                self.state.lock().chain_id.to_string(),
            )),
            WalletCall::GetPermissions => {
                let permissions = if self.state.lock().connected {
                    vec![Permission::Accounts]
                } else {
                    Vec::new()
                };
                Ok(WalletResponse::Permissions(permissions))
            }
            // silent_mode is transport behavior; the in-memory backend never
            // prompts either way.
            WalletCall::RequestAccounts(_) => {
                let account = self.resolve_active()?;
                Ok(WalletResponse::Accounts(vec![account.address().clone()]))
            }
            WalletCall::Extension { method, .. } => Err(Error::UnknownRequestType(method)),
        }
    }

    async fn account(&self, _provider: &ProviderOptions) -> Result<AccountHandle> {
        if !self.available() {
            return Err(Error::NotFound);
        }
        if !self.state.lock().connected {
            return Err(Error::NotConnected);
        }
        self.resolve_active()
    }
}
