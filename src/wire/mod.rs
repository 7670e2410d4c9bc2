//! # Gateway Wire Records
//!
//! The semtech packet-forwarder's flat radio-packet records.
//!
//! ## Components
//! - **Rxpk**: uplink record, one received radio packet with its metadata
//! - **Txpk**: downlink record, one packet scheduled for transmission
//!
//! The outer UDP/JSON envelope (`{"rxpk": [...]}` and friends) is owned by
//! the transport layer; the bridge only ever sees the flat records. Every
//! field is optional because forwarder implementations disagree on which
//! metadata they populate: Kerlink gateways omit `chan`, some omit
//! `time`, and so on. The payload text in `data` is unpadded base64, per
//! the forwarder convention.

pub mod rxpk;
pub mod txpk;

pub use rxpk::Rxpk;
pub use txpk::Txpk;
