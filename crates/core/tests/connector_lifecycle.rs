//! End-to-end exercises of the connector state machine through the public
//! contract, driving the reference backend the way an application would.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use wconnect::{
    AccountHandle, AccountRequestParams, AccountSet, Address, Connector, ConnectorEvent, Error,
    MockConnector, MockOptions, Permission, WalletCall, chains,
};

/// The standard fixture: one mainnet account, two testnet accounts.
fn accounts() -> AccountSet {
    AccountSet::new(
        vec![AccountHandle::new("0xa1")],
        vec![AccountHandle::new("0xb1"), AccountHandle::new("0xb2")],
    )
    .unwrap()
}

fn connector() -> MockConnector {
    MockConnector::new(accounts(), MockOptions::new("mock", "Mock Wallet"))
}

fn provider() -> wconnect::ProviderOptions {
    wconnect::ProviderOptions::default()
}

#[tokio::test]
async fn connect_returns_first_account_of_the_active_bucket() -> anyhow::Result<()> {
    let connector = connector();

    let data = connector.connect().await?;

    // The initial chain is devnet, so the testnet bucket applies.
    assert_eq!(data.chain_id, chains::DEVNET);
    assert_eq!(data.account, Address::from("0xb1"));

    let account = connector.account(&provider()).await?;
    assert_eq!(account.address(), &Address::from("0xb1"));
    Ok(())
}

#[tokio::test]
async fn switch_chain_resets_the_account_index() -> anyhow::Result<()> {
    let connector = connector();
    connector.connect().await?;

    connector.switch_account(1).await?;
    assert_eq!(
        connector.account(&provider()).await?.address(),
        &Address::from("0xb2")
    );

    connector.switch_chain(chains::MAINNET).await?;

    assert_eq!(connector.chain_id().await?, chains::MAINNET);
    assert_eq!(
        connector.account(&provider()).await?.address(),
        &Address::from("0xa1")
    );
    Ok(())
}

#[tokio::test]
async fn switch_chain_emits_the_chain_change_then_the_account_reset() -> anyhow::Result<()> {
    let connector = connector();
    connector.connect().await?;
    let mut events = connector.subscribe();

    connector.switch_chain(chains::MAINNET).await?;

    assert_eq!(
        events.try_recv(),
        Some(ConnectorEvent::Change {
            chain_id: Some(chains::MAINNET),
            account: None,
        })
    );
    assert_eq!(
        events.try_recv(),
        Some(ConnectorEvent::Change {
            chain_id: None,
            account: Some(Address::from("0xa1")),
        })
    );
    assert_eq!(events.try_recv(), None);
    Ok(())
}

#[tokio::test]
async fn unified_switch_collapses_to_a_single_event() -> anyhow::Result<()> {
    let options = MockOptions::new("mock", "Mock Wallet")
        .unified_switch_account_and_chain(true)
        .emit_change_account_on_chain_switch(false);
    let connector = MockConnector::new(accounts(), options);
    connector.connect().await?;
    let mut events = connector.subscribe();

    connector.switch_chain(chains::MAINNET).await?;

    assert_eq!(
        events.try_recv(),
        Some(ConnectorEvent::Change {
            chain_id: Some(chains::MAINNET),
            account: Some(Address::from("0xa1")),
        })
    );
    assert_eq!(events.try_recv(), None);
    Ok(())
}

#[tokio::test]
async fn switch_account_carries_the_resolved_address() -> anyhow::Result<()> {
    let connector = connector();
    connector.connect().await?;
    let mut events = connector.subscribe();

    connector.switch_account(1).await?;

    assert_eq!(
        events.try_recv(),
        Some(ConnectorEvent::Change {
            chain_id: None,
            account: Some(Address::from("0xb2")),
        })
    );
    Ok(())
}

#[tokio::test]
async fn out_of_bounds_switch_account_fails_lazily() -> anyhow::Result<()> {
    let connector = connector();
    connector.connect().await?;
    let mut events = connector.subscribe();

    // The switch itself succeeds; there is nothing resolvable to announce.
    connector.switch_account(5).await?;
    assert_eq!(events.try_recv(), None);

    let err = connector.account(&provider()).await.unwrap_err();
    assert!(err.is_not_connected());

    // The same lazy failure surfaces through the dispatcher.
    let err = connector
        .request(WalletCall::RequestAccounts(AccountRequestParams::default()))
        .await
        .unwrap_err();
    assert!(err.is_not_connected());

    // A chain switch resets the index and recovers resolution.
    connector.switch_chain(chains::TESTNET).await?;
    assert_eq!(
        connector.account(&provider()).await?.address(),
        &Address::from("0xb1")
    );
    Ok(())
}

#[tokio::test]
async fn disconnect_is_idempotent() -> anyhow::Result<()> {
    let connector = connector();
    connector.connect().await?;
    assert!(connector.ready().await?);

    connector.disconnect().await?;
    assert!(!connector.ready().await?);

    // Disconnecting again is a no-op success.
    connector.disconnect().await?;
    assert!(!connector.ready().await?);
    Ok(())
}

#[tokio::test]
async fn disconnect_emits_the_disconnect_event() -> anyhow::Result<()> {
    let connector = connector();
    connector.connect().await?;
    let mut events = connector.subscribe();

    connector.disconnect().await?;
    assert_eq!(events.try_recv(), Some(ConnectorEvent::Disconnect));
    Ok(())
}

#[tokio::test]
async fn unavailable_connector_rejects_everything_with_not_found() {
    let options = MockOptions::new("mock", "Mock Wallet").available(false);
    let connector = MockConnector::new(accounts(), options);

    assert!(!connector.available());

    // Every message type, including well-formed ones.
    for call in [
        WalletCall::RequestChainId,
        WalletCall::GetPermissions,
        WalletCall::RequestAccounts(AccountRequestParams::default()),
        WalletCall::Extension {
            method: "wallet_whatever".to_string(),
            params: None,
        },
    ] {
        let err = connector.request(call).await.unwrap_err();
        assert!(err.is_unavailable());
    }

    let err = connector.connect().await.unwrap_err();
    assert!(err.is_unavailable());

    let err = connector.account(&provider()).await.unwrap_err();
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn declined_connection_leaves_no_state_behind() {
    let options = MockOptions::new("mock", "Mock Wallet").fail_connect(true);
    let connector = MockConnector::new(accounts(), options);

    let err = connector.connect().await.unwrap_err();
    assert!(matches!(err, Error::UserRejected));

    assert!(!connector.ready().await.unwrap());
    let err = connector.account(&provider()).await.unwrap_err();
    assert!(err.is_not_connected());
}

#[tokio::test]
async fn failed_connect_leaves_no_partial_state() -> anyhow::Result<()> {
    let connector = connector();

    // Park the index past the testnet bucket before connecting; the internal
    // account request then fails and the session must not be established.
    connector.switch_account(5).await?;
    let err = connector.connect().await.unwrap_err();
    assert!(err.is_not_connected());
    assert!(!connector.ready().await?);

    // Restoring a resolvable index lets the next connect succeed.
    connector.switch_account(0).await?;
    let data = connector.connect().await?;
    assert_eq!(data.account, Address::from("0xb1"));
    assert!(connector.ready().await?);
    Ok(())
}

#[tokio::test]
async fn permissions_are_a_pure_function_of_connection_state() -> anyhow::Result<()> {
    let connector = connector();

    let response = connector.request(WalletCall::GetPermissions).await?;
    assert_eq!(response.as_permissions(), Some(&[][..]));

    connector.connect().await?;
    let response = connector.request(WalletCall::GetPermissions).await?;
    assert_eq!(response.as_permissions(), Some(&[Permission::Accounts][..]));

    connector.disconnect().await?;
    let response = connector.request(WalletCall::GetPermissions).await?;
    assert_eq!(response.as_permissions(), Some(&[][..]));
    Ok(())
}

#[tokio::test]
async fn chain_id_resolves_without_a_session() -> anyhow::Result<()> {
    let connector = connector();

    assert_eq!(connector.chain_id().await?, chains::DEVNET);

    connector.switch_chain(chains::MAINNET).await?;
    assert_eq!(connector.chain_id().await?, chains::MAINNET);
    Ok(())
}

#[tokio::test]
async fn unknown_request_types_are_rejected_by_name() {
    let connector = connector();
    connector.connect().await.unwrap();

    let err = connector
        .request(WalletCall::Extension {
            method: "wallet_addDeclareTransaction".to_string(),
            params: None,
        })
        .await
        .unwrap_err();

    match err {
        Error::UnknownRequestType(method) => {
            assert_eq!(method, "wallet_addDeclareTransaction")
        }
        other => panic!("expected unknown request type, got {other:?}"),
    }
}

#[tokio::test]
async fn callback_subscriptions_observe_events_until_dropped() -> anyhow::Result<()> {
    let connector = connector();
    let seen: Arc<Mutex<Vec<ConnectorEvent>>> = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let subscription = connector.on_event(Box::new(move |event| {
        sink.lock().push(event);
    }));

    connector.connect().await?;
    connector.disconnect().await?;
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(seen.lock().as_slice(), &[ConnectorEvent::Disconnect]);

    subscription.unsubscribe();
    tokio::time::sleep(Duration::from_millis(20)).await;

    connector.disconnect().await?;
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(seen.lock().len(), 1);
    Ok(())
}

#[tokio::test]
async fn connectors_dispatch_through_the_trait_object() -> anyhow::Result<()> {
    // Heterogeneous backends are held behind the contract.
    let connector: Arc<dyn Connector> = Arc::new(connector());

    let data = connector.connect().await?;
    assert_eq!(data.chain_id, chains::DEVNET);
    assert_eq!(connector.id(), "mock");
    assert_eq!(connector.name(), "Mock Wallet");
    assert!(connector.ready().await?);
    Ok(())
}
