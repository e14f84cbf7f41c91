//! Wire types for the wallet connector protocol.
//!
//! This crate contains the serde-serializable types exchanged with a wallet
//! backend: the discriminated request message, its result shapes, and the
//! primitive identifiers they carry. These types represent the "protocol
//! layer" - the shapes of data as they appear on the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization/deserialization
//! - **1:1 with the protocol**: Match the `{ type, params? }` message shape
//! - **Transport-agnostic**: The same types serve the in-memory reference
//!   dispatcher and a real message-channel transport
//!
//! Higher-level connector APIs are built on top of these types in
//! `wconnect-rs`.

pub mod call;
pub mod permission;
pub mod types;

pub use call::*;
pub use permission::*;
pub use types::*;
