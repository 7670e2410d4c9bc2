//! Downlink wire record: one packet handed to the forwarder for transmission.

use serde::{Deserialize, Serialize};

/// A packet scheduled for transmission, as carried in the forwarder's
/// `txpk` object.
///
/// Write-oriented counterpart of [`Rxpk`](crate::wire::Rxpk). The
/// downlink encoder always populates `data` (padding stripped); all other
/// fields come from the internal metadata when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Txpk {
    /// Send immediately, ignoring `tmst`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imme: Option<bool>,

    /// Concentrator counter value at which to send, microseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmst: Option<u32>,

    /// UTC time at which to send, ISO 8601 compact form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// TX center frequency in MHz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq: Option<f64>,

    /// Concentrator RF chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfch: Option<u32>,

    /// TX output power in dBm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powe: Option<u32>,

    /// Modulation identifier, "LORA" or "FSK".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modu: Option<String>,

    /// Datarate identifier, e.g. "SF7BW125".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datr: Option<String>,

    /// ECC coding rate, e.g. "4/5".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codr: Option<String>,

    /// FSK frequency deviation in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fdev: Option<u32>,

    /// Invert LoRa modulation polarity (downlink convention).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipol: Option<bool>,

    /// Preamble size in symbols.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prea: Option<u32>,

    /// Payload size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Disable the physical-layer CRC on transmission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncrc: Option<bool>,

    /// PHY payload, unpadded base64.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}
