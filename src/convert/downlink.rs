//! Downlink conversion: internal packet → transmittable wire record.

use crate::config::CodecConfig;
use crate::convert::Packet;
use crate::error::{BridgeError, Result};
use crate::utils::base64;
use crate::wire::Txpk;
use tracing::trace;

/// Convert an internal [`Packet`] into a `Txpk` under the default codec
/// limits.
///
/// Serializes the PHY frame, base64-encodes it with padding stripped per
/// the wire convention, and copies the shared radio metadata. A packet
/// without metadata still converts successfully; the resulting record
/// carries only the payload text.
///
/// # Errors
/// - [`BridgeError::UnencodableFrame`]: the frame is structurally
///   incomplete and the PHY codec refused to serialize it.
pub fn to_txpk(packet: &Packet) -> Result<Txpk> {
    convert(packet, &CodecConfig::default())
}

pub(crate) fn convert(packet: &Packet, config: &CodecConfig) -> Result<Txpk> {
    let raw = packet
        .payload
        .encode_with(config)
        .map_err(BridgeError::UnencodableFrame)?;

    trace!(
        mtype = ?packet.payload.mhdr.mtype,
        size = raw.len(),
        has_metadata = packet.metadata.is_some(),
        "encoded downlink frame"
    );

    let mut txpk = Txpk {
        data: Some(base64::encode_trimmed(&raw)),
        ..Txpk::default()
    };

    if let Some(metadata) = &packet.metadata {
        metadata.apply_to_txpk(&mut txpk);
    }

    Ok(txpk)
}
