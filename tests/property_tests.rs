//! Property-based tests using proptest
//!
//! These validate the bridge invariants across randomly generated
//! payloads and metadata: round-trip fidelity, padding arithmetic, and
//! structural rejection of malformed fragments.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use gateway_bridge::config::MODU_LORA;
use gateway_bridge::convert::{downlink, uplink, Packet};
use gateway_bridge::phy::{FrameDirection, MType, PhyPayload};
use gateway_bridge::utils::base64;
use gateway_bridge::wire::Rxpk;
use proptest::prelude::*;

// Property: encode_trimmed never emits padding and always decodes back
proptest! {
    #[test]
    fn prop_base64_trim_roundtrip(raw in prop::collection::vec(any::<u8>(), 0..512)) {
        let wire = base64::encode_trimmed(&raw);
        prop_assert!(!wire.contains('='));
        prop_assert_ne!(wire.len() % 4, 1);

        let decoded = base64::decode(&wire).expect("decode should not fail");
        prop_assert_eq!(decoded, raw);
    }
}

// Property: pad appends exactly (4 - n%4) % 4 characters
proptest! {
    #[test]
    fn prop_pad_arithmetic(raw in prop::collection::vec(any::<u8>(), 0..512)) {
        let wire = base64::encode_trimmed(&raw);
        let padded = base64::pad(&wire);

        let expected = (4 - wire.len() % 4) % 4;
        prop_assert_eq!(padded.len() - wire.len(), expected);
        prop_assert_eq!(padded.len() % 4, 0);
        prop_assert!(padded.ends_with(&"=".repeat(expected)));
    }
}

// Property: PHY encode/decode is a byte-identical roundtrip
proptest! {
    #[test]
    fn prop_phy_frame_roundtrip(
        mac in prop::collection::vec(any::<u8>(), 7..200),
        mic in any::<[u8; 4]>(),
    ) {
        let frame = PhyPayload::new(MType::UnconfirmedDataUp, mac, mic);
        let raw = frame.encode().expect("encode should not fail");
        let decoded = PhyPayload::decode(&raw, FrameDirection::Uplink)
            .expect("decode should not fail");
        prop_assert_eq!(decoded, frame);
    }
}

// Property: uplink then downlink preserves shared metadata and payload
proptest! {
    #[test]
    fn prop_conversion_roundtrip(
        frm in prop::collection::vec(any::<u8>(), 0..64),
        tmst in any::<u32>(),
        freq in 863.0f64..870.0,
        rssi in -130i32..0,
    ) {
        let mut raw = vec![0x40]; // UnconfirmedDataUp
        raw.extend_from_slice(&[0x78, 0x56, 0x34, 0x12, 0x00, 0x01, 0x00]);
        raw.push(0x01);
        raw.extend_from_slice(&frm);
        raw.extend_from_slice(&[0xCA, 0xFE, 0xBA, 0xBE]);

        let rxpk = Rxpk {
            tmst: Some(tmst),
            freq: Some(freq),
            rssi: Some(rssi),
            modu: Some(MODU_LORA.to_string()),
            datr: Some("SF7BW125".to_string()),
            codr: Some("4/5".to_string()),
            data: Some(base64::encode_trimmed(&raw)),
            ..Rxpk::default()
        };

        let packet = uplink::from_rxpk(&rxpk).expect("uplink");
        let txpk = downlink::to_txpk(&packet).expect("downlink");

        prop_assert_eq!(txpk.tmst, Some(tmst));
        prop_assert_eq!(txpk.freq, Some(freq));
        prop_assert_eq!(txpk.modu.as_deref(), Some(MODU_LORA));
        prop_assert_eq!(txpk.datr.as_deref(), Some("SF7BW125"));
        prop_assert_eq!(txpk.data, rxpk.data);
    }
}

// Property: a decoded internal packet re-encodes to the original bytes
proptest! {
    #[test]
    fn prop_internal_payload_byte_identity(frm in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut raw = vec![0x80]; // ConfirmedDataUp
        raw.extend_from_slice(&[0xEF, 0xBE, 0xAD, 0xDE, 0x00, 0x09, 0x00]);
        raw.push(0x07);
        raw.extend_from_slice(&frm);
        raw.extend_from_slice(&[0x00, 0x11, 0x22, 0x33]);

        let rxpk = Rxpk {
            data: Some(base64::encode_trimmed(&raw)),
            ..Rxpk::default()
        };
        let packet = uplink::from_rxpk(&rxpk).expect("uplink");
        prop_assert_eq!(packet.payload.encode().expect("encode"), raw);
    }
}

// Property: random non-base64-sized garbage never panics, only errors
proptest! {
    #[test]
    fn prop_malformed_payload_text_never_panics(text in "[A-Za-z0-9+/=]{0,64}") {
        let rxpk = Rxpk {
            data: Some(text),
            ..Rxpk::default()
        };
        let _ = uplink::from_rxpk(&rxpk);
    }
}

// Property: conversions are pure, repeated calls agree
proptest! {
    #[test]
    fn prop_conversion_deterministic(frm in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut raw = vec![0x40];
        raw.extend_from_slice(&[1, 2, 3, 4, 0, 0, 0, 1]);
        raw.extend_from_slice(&frm);
        raw.extend_from_slice(&[9, 9, 9, 9]);

        let rxpk = Rxpk {
            data: Some(base64::encode_trimmed(&raw)),
            ..Rxpk::default()
        };
        let a = uplink::from_rxpk(&rxpk).expect("first");
        let b = uplink::from_rxpk(&rxpk).expect("second");
        prop_assert_eq!(&a, &b);

        let ta = downlink::to_txpk(&a).expect("downlink a");
        let tb = downlink::to_txpk(&b).expect("downlink b");
        prop_assert_eq!(ta, tb);
    }
}

// Property: packets without metadata always encode to a payload-only Txpk
proptest! {
    #[test]
    fn prop_metadata_optional_path(mac in prop::collection::vec(any::<u8>(), 8..64)) {
        let frame = PhyPayload::new(MType::UnconfirmedDataDown, mac, [0; 4]);
        let txpk = downlink::to_txpk(&Packet::new(frame)).expect("downlink");
        prop_assert!(txpk.data.is_some());
        prop_assert_eq!(txpk.tmst, None);
        prop_assert_eq!(txpk.freq, None);
        prop_assert_eq!(txpk.datr, None);
    }
}
