//! # Utility Modules
//!
//! Supporting utilities shared by both conversion directions.
//!
//! ## Components
//! - **Base64**: padding normalization for the forwarder's unpadded base64 convention

pub mod base64;
