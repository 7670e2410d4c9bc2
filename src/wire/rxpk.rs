//! Uplink wire record: one radio packet as reported by the forwarder.

use serde::{Deserialize, Serialize};

/// A received radio packet, as carried in the forwarder's `rxpk` array.
///
/// Field names follow the semtech protocol document verbatim. All fields
/// are optional; an `Rxpk` with no `data` is observable in the wild (CRC
/// failures with payload reporting disabled) and is rejected only when a
/// conversion actually needs the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rxpk {
    /// UTC time of reception, ISO 8601 compact form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Internal concentrator counter at reception, microseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmst: Option<u32>,

    /// Concentrator IF channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chan: Option<u32>,

    /// Concentrator RF chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfch: Option<u32>,

    /// RX center frequency in MHz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq: Option<f64>,

    /// CRC status: 1 = OK, -1 = fail, 0 = no CRC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat: Option<i32>,

    /// Modulation identifier, "LORA" or "FSK".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modu: Option<String>,

    /// Datarate identifier, e.g. "SF7BW125".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datr: Option<String>,

    /// ECC coding rate, e.g. "4/5".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codr: Option<String>,

    /// RSSI in dBm, rounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,

    /// SNR in dB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lsnr: Option<f64>,

    /// Payload size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// PHY payload, unpadded base64.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}
