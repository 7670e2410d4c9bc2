//! # Packet Conversions
//!
//! The two directional bridges between the forwarder wire records and the
//! internal packet representation.
//!
//! ## Components
//! - **Packet / Metadata**: the protocol-neutral internal representation
//! - **Uplink**: [`Rxpk`](crate::wire::Rxpk) → [`Packet`]
//! - **Downlink**: [`Packet`] → [`Txpk`](crate::wire::Txpk)
//! - **Metadata mapping**: explicit same-named-field copy between the two
//!   wire schemas and the internal metadata record
//!
//! Both conversions are pure functions over their input: no shared state,
//! no I/O, no ordering constraints between calls. A failure is terminal
//! for that single packet and surfaces as a [`BridgeError`] to the caller.

pub mod downlink;
pub mod metadata;
pub mod packet;
pub mod uplink;

pub use metadata::Metadata;
pub use packet::Packet;

use crate::config::CodecConfig;
use crate::error::Result;
use crate::wire::{Rxpk, Txpk};

/// Conversion pair bound to one codec configuration.
///
/// For the default limits, the free functions
/// [`uplink::from_rxpk`] and [`downlink::to_txpk`] are equivalent and
/// involve no setup.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: CodecConfig,
}

impl Converter {
    /// Build a converter after validating the configuration.
    ///
    /// # Errors
    /// Returns [`crate::error::BridgeError::ConfigError`] when the
    /// configuration fails validation.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate_strict()?;
        Ok(Self { config })
    }

    /// Convert a received wire record into an internal packet.
    pub fn uplink(&self, rxpk: &Rxpk) -> Result<Packet> {
        uplink::convert(rxpk, &self.config)
    }

    /// Convert an internal packet into a transmittable wire record.
    pub fn downlink(&self, packet: &Packet) -> Result<Txpk> {
        downlink::convert(packet, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;

    #[test]
    fn test_converter_rejects_invalid_config() {
        let config = CodecConfig {
            max_phy_payload_size: 1,
            allow_proprietary: false,
        };
        assert!(matches!(
            Converter::new(config),
            Err(BridgeError::ConfigError(_))
        ));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_converter_accepts_default_config() {
        let converter = Converter::new(CodecConfig::default()).unwrap();
        assert!(matches!(
            converter.uplink(&Rxpk::default()),
            Err(BridgeError::MissingPayload)
        ));
    }
}
