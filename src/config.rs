//! # Configuration Management
//!
//! Codec limits and policy knobs for the bridge.
//!
//! The conversions themselves are pure functions; configuration only
//! bounds what they will accept. Defaults match the semtech forwarder
//! conventions and the LoRa PHY, so most embedders never construct a
//! [`CodecConfig`] by hand.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()` / `from_toml()`
//! - Direct instantiation with defaults

use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum PHY payload size the LoRa physical layer can carry, in bytes.
pub const MAX_PHY_PAYLOAD_SIZE: usize = 255;

/// Smallest transmittable PHY payload: MHDR(1) + MACPayload(1) + MIC(4).
/// A frame with an empty MACPayload is rejected by both codec directions.
pub const MIN_PHY_PAYLOAD_SIZE: usize = 6;

/// Smallest possible data frame: MHDR(1) + FHDR(7) + MIC(4).
pub const MIN_DATA_FRAME_SIZE: usize = 12;

/// Modulation identifier used by the forwarder for LoRa packets.
pub const MODU_LORA: &str = "LORA";

/// Codec configuration shared by both conversion directions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Maximum accepted PHY payload size in bytes.
    pub max_phy_payload_size: usize,

    /// Whether proprietary frames (MType 0b111) are accepted.
    #[serde(default)]
    pub allow_proprietary: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_phy_payload_size: MAX_PHY_PAYLOAD_SIZE,
            allow_proprietary: false,
        }
    }
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BridgeError::ConfigError(format!("Failed to read config file: {e}")))?;
        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| BridgeError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Validate the configuration for common misconfigurations.
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_phy_payload_size < MIN_PHY_PAYLOAD_SIZE {
            errors.push(format!(
                "Max PHY payload size too small: {} bytes (minimum: {})",
                self.max_phy_payload_size, MIN_PHY_PAYLOAD_SIZE
            ));
        } else if self.max_phy_payload_size > MAX_PHY_PAYLOAD_SIZE {
            errors.push(format!(
                "Max PHY payload size too large: {} bytes (LoRa maximum: {})",
                self.max_phy_payload_size, MAX_PHY_PAYLOAD_SIZE
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(BridgeError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}
