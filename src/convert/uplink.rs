//! Uplink conversion: received wire record → internal packet.

use crate::config::CodecConfig;
use crate::convert::{Metadata, Packet};
use crate::error::{BridgeError, Result};
use crate::phy::{FrameDirection, PhyPayload};
use crate::utils::base64;
use tracing::trace;

/// Convert a received `Rxpk` into an internal [`Packet`] under the
/// default codec limits.
///
/// Decodes the payload text (restoring base64 padding), parses it as an
/// uplink PHY frame, and copies the shared radio metadata.
///
/// # Errors
/// - [`BridgeError::MissingPayload`]: the record carries no `data` field.
/// - [`BridgeError::Base64`]: the payload text is not valid base64; the
///   decoder's error is surfaced verbatim.
/// - [`BridgeError::Phy`]: the decoded bytes are not a structurally valid
///   uplink frame; the codec's error is surfaced verbatim.
pub fn from_rxpk(rxpk: &crate::wire::Rxpk) -> Result<Packet> {
    convert(rxpk, &CodecConfig::default())
}

pub(crate) fn convert(rxpk: &crate::wire::Rxpk, config: &CodecConfig) -> Result<Packet> {
    let data = rxpk.data.as_deref().ok_or(BridgeError::MissingPayload)?;

    let raw = base64::decode(data)?;
    let payload = PhyPayload::decode_with(&raw, FrameDirection::Uplink, config)?;

    trace!(
        mtype = ?payload.mhdr.mtype,
        size = raw.len(),
        tmst = rxpk.tmst,
        "decoded uplink frame"
    );

    Ok(Packet::with_metadata(payload, Metadata::from_rxpk(rxpk)))
}
