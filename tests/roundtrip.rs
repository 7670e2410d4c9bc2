//! Round-trip fidelity tests for the two conversions
//!
//! A packet received from a gateway and later retransmitted must reproduce
//! bit-identical radio parameters and payload bytes. These tests drive the
//! full uplink → internal → downlink chain.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use gateway_bridge::config::MODU_LORA;
use gateway_bridge::convert::{downlink, uplink, Packet};
use gateway_bridge::phy::{FrameDirection, MType, PhyPayload};
use gateway_bridge::utils::base64;
use gateway_bridge::wire::Rxpk;

fn uplink_frame_bytes() -> Vec<u8> {
    let mut raw = vec![0x40]; // UnconfirmedDataUp
    raw.extend_from_slice(&[0x78, 0x56, 0x34, 0x12]); // DevAddr
    raw.push(0x00); // FCtrl
    raw.extend_from_slice(&[0x2A, 0x00]); // FCnt
    raw.push(0x01); // FPort
    raw.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]); // FRMPayload
    raw.extend_from_slice(&[0x0A, 0x0B, 0x0C, 0x0D]); // MIC
    raw
}

fn full_rxpk() -> Rxpk {
    Rxpk {
        time: Some("2024-03-01T12:43:56.821Z".to_string()),
        tmst: Some(3_512_348_611),
        chan: Some(2),
        rfch: Some(0),
        freq: Some(866.349812),
        stat: Some(1),
        modu: Some(MODU_LORA.to_string()),
        datr: Some("SF7BW125".to_string()),
        codr: Some("4/6".to_string()),
        rssi: Some(-35),
        lsnr: Some(5.1),
        size: Some(17),
        data: Some(base64::encode_trimmed(&uplink_frame_bytes())),
    }
}

#[test]
fn test_metadata_roundtrip_preserves_shared_fields() {
    let rxpk = full_rxpk();
    let packet = uplink::from_rxpk(&rxpk).expect("uplink conversion");
    let txpk = downlink::to_txpk(&packet).expect("downlink conversion");

    // Every field present in both wire schemas must come back verbatim.
    assert_eq!(txpk.time, rxpk.time);
    assert_eq!(txpk.tmst, rxpk.tmst);
    assert_eq!(txpk.rfch, rxpk.rfch);
    assert_eq!(txpk.freq, rxpk.freq);
    assert_eq!(txpk.modu, rxpk.modu);
    assert_eq!(txpk.datr, rxpk.datr);
    assert_eq!(txpk.codr, rxpk.codr);
    assert_eq!(txpk.size, rxpk.size);
}

#[test]
fn test_payload_roundtrip_is_byte_identical() {
    let rxpk = full_rxpk();
    let packet = uplink::from_rxpk(&rxpk).expect("uplink conversion");
    let txpk = downlink::to_txpk(&packet).expect("downlink conversion");

    // The wire text itself round-trips because both sides strip padding.
    assert_eq!(txpk.data, rxpk.data);

    let raw = base64::decode(txpk.data.as_deref().unwrap()).expect("valid base64");
    assert_eq!(raw, uplink_frame_bytes());
}

#[test]
fn test_internal_packet_roundtrip() {
    // encode(p) then decode yields a byte-equal frame
    let mut mac = vec![0x78, 0x56, 0x34, 0x12, 0x80, 0x07, 0x00];
    mac.push(0x0A);
    mac.extend_from_slice(b"ping");
    let frame = PhyPayload::new(MType::ConfirmedDataDown, mac, [1, 2, 3, 4]);
    let packet = Packet::new(frame.clone());

    let txpk = downlink::to_txpk(&packet).expect("downlink conversion");
    let raw = base64::decode(txpk.data.as_deref().unwrap()).expect("valid base64");
    let decoded = PhyPayload::decode(&raw, FrameDirection::Downlink).expect("re-decode");

    assert_eq!(decoded, frame);
}

#[test]
fn test_downlink_only_metadata_fields_survive_through_internal() {
    use gateway_bridge::convert::Metadata;

    let metadata = Metadata {
        imme: Some(true),
        powe: Some(14),
        ipol: Some(true),
        prea: Some(8),
        ncrc: Some(true),
        fdev: Some(25_000),
        ..Metadata::default()
    };
    let mut mac = vec![0u8; 7];
    mac.push(0x01);
    let frame = PhyPayload::new(MType::UnconfirmedDataDown, mac, [0; 4]);
    let txpk = downlink::to_txpk(&Packet::with_metadata(frame, metadata)).expect("conversion");

    assert_eq!(txpk.imme, Some(true));
    assert_eq!(txpk.powe, Some(14));
    assert_eq!(txpk.ipol, Some(true));
    assert_eq!(txpk.prea, Some(8));
    assert_eq!(txpk.ncrc, Some(true));
    assert_eq!(txpk.fdev, Some(25_000));
}
