//! The internal metadata record and its wire-schema mappings.
//!
//! [`Metadata`] is the union of the `Rxpk` and `Txpk` radio-parameter
//! schemas (everything except the payload text). The two mapping
//! functions below enumerate every shared field once, by hand. The
//! predecessor of this code matched fields by name with runtime
//! reflection; spelling the copy out instead means the compiler verifies
//! that no field is silently dropped, and a field without a counterpart
//! in the destination schema simply does not appear in the mapping. The
//! tolerant union-of-schemas behavior is preserved, but by construction
//! rather than at runtime.
//!
//! When a wire schema grows a field, add it here and to the struct; the
//! `PartialEq`-based round-trip tests catch a mapping that forgets one
//! side.

use crate::wire::{Rxpk, Txpk};
use serde::{Deserialize, Serialize};

/// Named bag of radio parameters attached to an internal packet.
///
/// Every field is optional: an uplink never carries downlink-only TX
/// parameters such as `powe`, and sparse forwarders omit fields freely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// UTC time of reception or scheduled transmission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Concentrator counter, microseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmst: Option<u32>,

    /// Concentrator IF channel (uplink only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chan: Option<u32>,

    /// Concentrator RF chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfch: Option<u32>,

    /// Center frequency in MHz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq: Option<f64>,

    /// CRC status (uplink only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat: Option<i32>,

    /// Modulation identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modu: Option<String>,

    /// Datarate identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datr: Option<String>,

    /// ECC coding rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codr: Option<String>,

    /// RSSI in dBm (uplink only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,

    /// SNR in dB (uplink only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lsnr: Option<f64>,

    /// Payload size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Send immediately (downlink only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imme: Option<bool>,

    /// TX output power in dBm (downlink only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powe: Option<u32>,

    /// FSK frequency deviation in Hz (downlink only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fdev: Option<u32>,

    /// Invert modulation polarity (downlink only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipol: Option<bool>,

    /// Preamble size in symbols (downlink only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prea: Option<u32>,

    /// Disable physical-layer CRC (downlink only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncrc: Option<bool>,
}

impl Metadata {
    /// Copy every field shared between the uplink wire schema and this
    /// record. Downlink-only fields stay `None`.
    pub fn from_rxpk(rxpk: &Rxpk) -> Self {
        Self {
            time: rxpk.time.clone(),
            tmst: rxpk.tmst,
            chan: rxpk.chan,
            rfch: rxpk.rfch,
            freq: rxpk.freq,
            stat: rxpk.stat,
            modu: rxpk.modu.clone(),
            datr: rxpk.datr.clone(),
            codr: rxpk.codr.clone(),
            rssi: rxpk.rssi,
            lsnr: rxpk.lsnr,
            size: rxpk.size,
            ..Self::default()
        }
    }

    /// Copy every field shared between this record and the downlink wire
    /// schema onto `txpk`. The payload text is owned by the encoder and
    /// never touched here; uplink-only fields (`chan`, `stat`, `rssi`,
    /// `lsnr`) have no downlink counterpart and are dropped.
    pub fn apply_to_txpk(&self, txpk: &mut Txpk) {
        txpk.imme = self.imme;
        txpk.tmst = self.tmst;
        txpk.time = self.time.clone();
        txpk.freq = self.freq;
        txpk.rfch = self.rfch;
        txpk.powe = self.powe;
        txpk.modu = self.modu.clone();
        txpk.datr = self.datr.clone();
        txpk.codr = self.codr.clone();
        txpk.fdev = self.fdev;
        txpk.ipol = self.ipol;
        txpk.prea = self.prea;
        txpk.size = self.size;
        txpk.ncrc = self.ncrc;
    }
}
