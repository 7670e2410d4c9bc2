//! # Gateway Bridge
//!
//! Bidirectional bridge between the semtech gateway-forwarder wire format
//! (RXPK/TXPK records) and a protocol-neutral internal packet carrying a
//! decoded PHY frame plus radio metadata.
//!
//! ## Components
//! - **wire**: the forwarder's flat `Rxpk`/`Txpk` records (serde)
//! - **phy**: structural codec for the LoRaWAN PHY payload
//! - **convert**: the uplink and downlink conversions and the internal
//!   `Packet`/`Metadata` representation
//! - **utils::base64**: padding normalization for the forwarder's
//!   unpadded base64 convention
//!
//! ## Guarantees
//! - Both conversions are pure and stateless: safe to call concurrently,
//!   no ordering constraints, no partial results.
//! - Round-trip fidelity: a packet received from a gateway and converted
//!   back for retransmission reproduces every shared radio parameter and
//!   the payload bytes exactly.
//! - Errors distinguish structural preconditions (drop the packet) from
//!   upstream codec failures (propagated verbatim for diagnostics).
//!
//! ## Example
//! ```rust
//! use gateway_bridge::convert::{downlink, uplink};
//! use gateway_bridge::wire::Rxpk;
//!
//! # fn main() -> gateway_bridge::error::Result<()> {
//! let rxpk = Rxpk {
//!     tmst: Some(3_512_348_611),
//!     freq: Some(868.1),
//!     datr: Some("SF7BW125".to_string()),
//!     // UnconfirmedDataUp frame, unpadded base64
//!     data: Some("QHhWNBIAKgAB3q0KCwwN".to_string()),
//!     ..Rxpk::default()
//! };
//!
//! let packet = uplink::from_rxpk(&rxpk)?;
//! let txpk = downlink::to_txpk(&packet)?;
//! assert_eq!(txpk.tmst, rxpk.tmst);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod phy;
pub mod utils;
pub mod wire;

pub use convert::{Converter, Metadata, Packet};
pub use error::{BridgeError, Result};
pub use phy::{FrameDirection, PhyPayload};
pub use wire::{Rxpk, Txpk};
