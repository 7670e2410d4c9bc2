//! Padding normalization for the forwarder's base64 convention.
//!
//! The semtech forwarder emits base64 with trailing `=` padding omitted,
//! and tolerates the same on input. The standard decoder requires full
//! padding, so the bridge restores it before decoding and strips it again
//! before emitting payload text on the wire.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use std::borrow::Cow;

/// Standard-alphabet engine that tolerates non-canonical trailing bits.
/// Gateways in the field emit fragments whose final symbol carries stray
/// bits; the forwarder convention is to accept them.
const WIRE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Restore standard `=` padding on a wire base64 fragment.
///
/// A remainder of 1 is not valid base64 under any padding; it is left
/// untouched so the downstream decoder reports it rather than this helper
/// guessing at a repair.
pub fn pad(fragment: &str) -> Cow<'_, str> {
    match fragment.len() % 4 {
        2 => Cow::Owned(format!("{fragment}==")),
        3 => Cow::Owned(format!("{fragment}=")),
        _ => Cow::Borrowed(fragment),
    }
}

/// Decode a wire base64 fragment after restoring padding.
///
/// # Errors
/// Propagates the decoder's [`base64::DecodeError`] unchanged when the
/// fragment is not valid base64.
pub fn decode(fragment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    WIRE.decode(pad(fragment).as_ref())
}

/// Encode bytes with the standard alphabet and strip trailing padding,
/// per the wire convention.
pub fn encode_trimmed(raw: &[u8]) -> String {
    let mut encoded = WIRE.encode(raw);
    while encoded.ends_with('=') {
        encoded.pop();
    }
    encoded
}
