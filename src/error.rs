//! # Error Types
//!
//! Error handling for the gateway packet bridge.
//!
//! The bridge distinguishes two failure families, and callers are expected
//! to treat them differently:
//!
//! - **Structural preconditions** ([`BridgeError::MissingPayload`],
//!   [`BridgeError::UnencodableFrame`]): the input packet can never be
//!   converted, regardless of retries. Drop it and report.
//! - **Upstream codec failures** ([`BridgeError::Base64`],
//!   [`BridgeError::Phy`]): the payload bytes themselves were malformed.
//!   These are propagated from the underlying decoder unchanged so the
//!   original diagnostic survives to the caller.
//!
//! Nothing is wrapped twice and nothing is swallowed: every conversion
//! either fully succeeds or returns exactly one of these variants.
//!
//! ## Example Usage
//! ```rust
//! use gateway_bridge::error::BridgeError;
//! use gateway_bridge::wire::Rxpk;
//! use gateway_bridge::convert::uplink;
//!
//! let rxpk = Rxpk::default(); // no data field
//! match uplink::from_rxpk(&rxpk) {
//!     Err(BridgeError::MissingPayload) => {} // unconvertible, drop it
//!     other => panic!("expected MissingPayload, got {other:?}"),
//! }
//! ```

use crate::phy::PhyError;
use thiserror::Error;

/// Primary error type for all bridge conversions.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The uplink wire packet carries no payload field. There is nothing
    /// to convert; this is a precondition failure, not a codec fault.
    #[error("no payload to convert")]
    MissingPayload,

    /// The internal packet's PHY frame is structurally incomplete and
    /// cannot be serialized for downlink.
    #[error("frame cannot be encoded for downlink")]
    UnencodableFrame(#[source] PhyError),

    /// The payload text was not valid base64 after padding normalization.
    /// Propagated verbatim from the base64 decoder.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes did not form a structurally valid PHY frame.
    /// Propagated verbatim from the PHY codec.
    #[error("PHY frame error: {0}")]
    Phy(#[from] PhyError),

    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using BridgeError
pub type Result<T> = std::result::Result<T, BridgeError>;
