//! The protocol-neutral internal packet.

use crate::convert::Metadata;
use crate::phy::PhyPayload;

/// An in-process radio packet: the decoded PHY frame plus whatever radio
/// metadata the gateway reported.
///
/// A `Packet` exclusively owns both halves. It is created fresh by each
/// conversion and never mutated afterwards; downlink packets built by the
/// application may leave `metadata` as `None`, in which case only the
/// payload reaches the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    /// The decoded link-layer frame.
    pub payload: PhyPayload,

    /// Radio parameters, when known.
    pub metadata: Option<Metadata>,
}

impl Packet {
    /// Packet with a payload and no metadata.
    pub fn new(payload: PhyPayload) -> Self {
        Self {
            payload,
            metadata: None,
        }
    }

    /// Packet with a payload and metadata.
    pub fn with_metadata(payload: PhyPayload, metadata: Metadata) -> Self {
        Self {
            payload,
            metadata: Some(metadata),
        }
    }
}
