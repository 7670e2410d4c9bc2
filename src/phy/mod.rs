//! # PHY Frame Codec
//!
//! Structural codec for the LoRaWAN PHY payload carried inside the
//! forwarder's base64 text.
//!
//! ## Wire Format
//! ```text
//! [MHDR(1)] [MACPayload(N)] [MIC(4)]
//! ```
//!
//! The codec is *structural*: it validates framing (length, header, frame
//! direction) and splits the byte layout, but treats the MACPayload as
//! opaque. MAC-command parsing, payload decryption, and MIC verification
//! belong to the MAC layer and are deliberately not performed here; the
//! bridge only needs a byte-faithful encode/decode pair.
//!
//! Decoding is direction-aware: a gateway receive path only ever carries
//! uplink message types, and a transmit path only downlink types. Frames
//! whose MHDR disagrees with the configured [`FrameDirection`] are
//! rejected rather than silently accepted.

use crate::config::{CodecConfig, MIN_DATA_FRAME_SIZE, MIN_PHY_PAYLOAD_SIZE};
use bytes::{BufMut, BytesMut};
use thiserror::Error;

/// Number of trailing MIC bytes in every PHY payload.
pub const MIC_LEN: usize = 4;

/// Smallest MACPayload of a data frame: DevAddr(4) + FCtrl(1) + FCnt(2).
const MIN_FHDR_LEN: usize = 7;

/// Errors produced by the structural PHY codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhyError {
    #[error("frame too short: {len} bytes (minimum {min})")]
    TooShort { len: usize, min: usize },

    #[error("frame too long: {len} bytes (maximum {max})")]
    TooLong { len: usize, max: usize },

    #[error("unsupported LoRaWAN major version in MHDR {mhdr:#04x}")]
    UnsupportedMajor { mhdr: u8 },

    #[error("{mtype:?} frame not valid for {direction:?} framing")]
    WrongDirection {
        mtype: MType,
        direction: FrameDirection,
    },

    #[error("proprietary frames not accepted")]
    Proprietary,

    #[error("incomplete frame: {0}")]
    IncompleteFrame(&'static str),
}

/// Which parsing rules apply: gateway receive path or transmit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDirection {
    Uplink,
    Downlink,
}

/// LoRaWAN message type, bits 7..5 of the MHDR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MType {
    JoinRequest,
    JoinAccept,
    UnconfirmedDataUp,
    UnconfirmedDataDown,
    ConfirmedDataUp,
    ConfirmedDataDown,
    RejoinRequest,
    Proprietary,
}

impl MType {
    fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => MType::JoinRequest,
            1 => MType::JoinAccept,
            2 => MType::UnconfirmedDataUp,
            3 => MType::UnconfirmedDataDown,
            4 => MType::ConfirmedDataUp,
            5 => MType::ConfirmedDataDown,
            6 => MType::RejoinRequest,
            _ => MType::Proprietary,
        }
    }

    fn bits(self) -> u8 {
        match self {
            MType::JoinRequest => 0,
            MType::JoinAccept => 1,
            MType::UnconfirmedDataUp => 2,
            MType::UnconfirmedDataDown => 3,
            MType::ConfirmedDataUp => 4,
            MType::ConfirmedDataDown => 5,
            MType::RejoinRequest => 6,
            MType::Proprietary => 7,
        }
    }

    /// Whether this message type travels device-to-network.
    pub fn is_uplink(self) -> bool {
        matches!(
            self,
            MType::JoinRequest
                | MType::UnconfirmedDataUp
                | MType::ConfirmedDataUp
                | MType::RejoinRequest
                | MType::Proprietary
        )
    }

    /// Whether this message type travels network-to-device.
    pub fn is_downlink(self) -> bool {
        matches!(
            self,
            MType::JoinAccept
                | MType::UnconfirmedDataDown
                | MType::ConfirmedDataDown
                | MType::Proprietary
        )
    }

    /// Whether this is a data frame (carries an FHDR).
    pub fn is_data(self) -> bool {
        matches!(
            self,
            MType::UnconfirmedDataUp
                | MType::UnconfirmedDataDown
                | MType::ConfirmedDataUp
                | MType::ConfirmedDataDown
        )
    }

    fn valid_for(self, direction: FrameDirection) -> bool {
        match direction {
            FrameDirection::Uplink => self.is_uplink(),
            FrameDirection::Downlink => self.is_downlink(),
        }
    }
}

/// LoRaWAN major version, bits 1..0 of the MHDR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Major {
    LorawanR1,
}

/// MAC header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mhdr {
    pub mtype: MType,
    pub major: Major,
}

impl Mhdr {
    fn from_byte(byte: u8) -> Result<Self, PhyError> {
        if byte & 0x03 != 0 {
            return Err(PhyError::UnsupportedMajor { mhdr: byte });
        }
        Ok(Self {
            mtype: MType::from_bits(byte >> 5),
            major: Major::LorawanR1,
        })
    }

    fn to_byte(self) -> u8 {
        self.mtype.bits() << 5
    }
}

/// A decoded PHY payload: header, opaque MACPayload, and integrity tag.
///
/// This is the Frame half of the internal packet. Both halves of a decoded
/// frame are owned; nothing borrows from the wire record it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhyPayload {
    pub mhdr: Mhdr,
    pub mac_payload: Vec<u8>,
    pub mic: [u8; MIC_LEN],
}

impl PhyPayload {
    /// Build a data frame from its parts. The MACPayload is taken as-is.
    pub fn new(mtype: MType, mac_payload: Vec<u8>, mic: [u8; MIC_LEN]) -> Self {
        Self {
            mhdr: Mhdr {
                mtype,
                major: Major::LorawanR1,
            },
            mac_payload,
            mic,
        }
    }

    /// Decode raw bytes under the default codec limits.
    ///
    /// # Errors
    /// See [`decode_with`](Self::decode_with).
    pub fn decode(raw: &[u8], direction: FrameDirection) -> Result<Self, PhyError> {
        Self::decode_with(raw, direction, &CodecConfig::default())
    }

    /// Decode raw bytes into a structurally validated frame.
    ///
    /// # Errors
    /// - [`PhyError::TooShort`] / [`PhyError::TooLong`]: framing length
    ///   outside the configured bounds.
    /// - [`PhyError::UnsupportedMajor`]: MHDR major bits are not LoRaWAN R1.
    /// - [`PhyError::WrongDirection`]: message type disagrees with the
    ///   requested framing direction.
    /// - [`PhyError::Proprietary`]: proprietary frame with
    ///   `allow_proprietary` disabled.
    pub fn decode_with(
        raw: &[u8],
        direction: FrameDirection,
        config: &CodecConfig,
    ) -> Result<Self, PhyError> {
        let len = raw.len();
        if len < MIN_PHY_PAYLOAD_SIZE {
            return Err(PhyError::TooShort {
                len,
                min: MIN_PHY_PAYLOAD_SIZE,
            });
        }
        if len > config.max_phy_payload_size {
            return Err(PhyError::TooLong {
                len,
                max: config.max_phy_payload_size,
            });
        }

        let mhdr = Mhdr::from_byte(raw[0])?;
        if mhdr.mtype == MType::Proprietary && !config.allow_proprietary {
            return Err(PhyError::Proprietary);
        }
        if !mhdr.mtype.valid_for(direction) {
            return Err(PhyError::WrongDirection {
                mtype: mhdr.mtype,
                direction,
            });
        }
        if mhdr.mtype.is_data() && len < MIN_DATA_FRAME_SIZE {
            return Err(PhyError::TooShort {
                len,
                min: MIN_DATA_FRAME_SIZE,
            });
        }

        let mic_at = len - MIC_LEN;
        let mut mic = [0u8; MIC_LEN];
        mic.copy_from_slice(&raw[mic_at..]);

        Ok(Self {
            mhdr,
            mac_payload: raw[1..mic_at].to_vec(),
            mic,
        })
    }

    /// Encode the frame back to raw bytes under the default codec limits.
    ///
    /// # Errors
    /// See [`encode_with`](Self::encode_with).
    pub fn encode(&self) -> Result<Vec<u8>, PhyError> {
        self.encode_with(&CodecConfig::default())
    }

    /// Encode the frame back to raw bytes.
    ///
    /// # Errors
    /// - [`PhyError::IncompleteFrame`]: the MACPayload is too small for
    ///   the message type to be transmittable.
    /// - [`PhyError::TooLong`]: the serialized frame would exceed the
    ///   configured ceiling.
    pub fn encode_with(&self, config: &CodecConfig) -> Result<Vec<u8>, PhyError> {
        if self.mhdr.mtype.is_data() && self.mac_payload.len() < MIN_FHDR_LEN {
            return Err(PhyError::IncompleteFrame(
                "data frame MACPayload shorter than the frame header",
            ));
        }
        if !self.mhdr.mtype.is_data() && self.mac_payload.is_empty() {
            return Err(PhyError::IncompleteFrame("empty MACPayload"));
        }

        let len = 1 + self.mac_payload.len() + MIC_LEN;
        if len > config.max_phy_payload_size {
            return Err(PhyError::TooLong {
                len,
                max: config.max_phy_payload_size,
            });
        }

        let mut buf = BytesMut::with_capacity(len);
        buf.put_u8(self.mhdr.to_byte());
        buf.put_slice(&self.mac_payload);
        buf.put_slice(&self.mic);
        Ok(buf.to_vec())
    }
}
