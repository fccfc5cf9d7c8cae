//! Property-based round-trip coverage for the wire codecs.

use proptest::prelude::*;

use ptp_engine::codec::container::{Command, Event, Response};
use ptp_engine::registry::codes::operations;
use ptp_engine::transport::framing::{Frame, FrameAssembler};
use ptp_engine::{Codec, Endian, PtpValue};

fn endians() -> impl Strategy<Value = Endian> {
    prop_oneof![
        Just(Endian::Little),
        Just(Endian::Big),
        Just(Endian::Native),
    ]
}

fn ptp_string() -> impl Strategy<Value = String> {
    // Up to 80 characters; NUL cannot appear inside a PTP string (it is
    // the terminator), and 80 chars stay under the 255 code unit limit.
    proptest::collection::vec(any::<char>().prop_filter("no NUL", |c| *c != '\0'), 0..80)
        .prop_map(|chars| chars.into_iter().collect())
}

fn ptp_value() -> impl Strategy<Value = PtpValue> {
    prop_oneof![
        any::<i8>().prop_map(PtpValue::Int8),
        any::<u8>().prop_map(PtpValue::UInt8),
        any::<i16>().prop_map(PtpValue::Int16),
        any::<u16>().prop_map(PtpValue::UInt16),
        any::<i32>().prop_map(PtpValue::Int32),
        any::<u32>().prop_map(PtpValue::UInt32),
        any::<i64>().prop_map(PtpValue::Int64),
        any::<u64>().prop_map(PtpValue::UInt64),
        any::<i128>().prop_map(PtpValue::Int128),
        any::<u128>().prop_map(PtpValue::UInt128),
        proptest::collection::vec(any::<i8>(), 0..32).prop_map(PtpValue::Int8Array),
        proptest::collection::vec(any::<u8>(), 0..32).prop_map(PtpValue::UInt8Array),
        proptest::collection::vec(any::<u16>(), 0..32).prop_map(PtpValue::UInt16Array),
        proptest::collection::vec(any::<i32>(), 0..32).prop_map(PtpValue::Int32Array),
        proptest::collection::vec(any::<u64>(), 0..32).prop_map(PtpValue::UInt64Array),
        proptest::collection::vec(any::<u128>(), 0..8).prop_map(PtpValue::UInt128Array),
        ptp_string().prop_map(PtpValue::String),
    ]
}

/// Trailing zero parameters are conceptually absent; this is the
/// identity the wire preserves.
fn trim_params(params: &[u32]) -> Vec<u32> {
    let used = params.iter().rposition(|&p| p != 0).map_or(0, |i| i + 1);
    params[..used].to_vec()
}

proptest! {
    #[test]
    fn value_round_trips(value in ptp_value(), endian in endians()) {
        let codec = Codec::new(endian);
        let mut w = codec.writer();
        value.encode(&mut w).unwrap();
        let bytes = w.into_bytes();
        let mut r = codec.reader(&bytes);
        let decoded = PtpValue::decode(&mut r, value.data_type()).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert!(r.is_empty());
    }

    #[test]
    fn command_body_round_trips(
        code in any::<u16>(),
        txid in any::<u32>(),
        params in proptest::collection::vec(any::<u32>(), 0..=5),
        endian in endians(),
    ) {
        let codec = Codec::new(endian);
        let cmd = Command::new(code.into(), 0, txid, params.clone());
        let body = cmd.encode_body(&codec).unwrap();
        let decoded = Command::decode_body(&codec, &body).unwrap();
        prop_assert_eq!(decoded.code, cmd.code);
        prop_assert_eq!(decoded.transaction_id, txid);
        prop_assert_eq!(decoded.params, trim_params(&params));
    }

    #[test]
    fn response_body_round_trips(
        code in any::<u16>(),
        txid in any::<u32>(),
        params in proptest::collection::vec(any::<u32>(), 0..=5),
        endian in endians(),
    ) {
        let codec = Codec::new(endian);
        let rsp = Response::new(code.into(), 0, txid, params.clone());
        let body = rsp.encode_body(&codec).unwrap();
        let decoded = Response::decode_body(&codec, &body).unwrap();
        prop_assert_eq!(decoded.code, rsp.code);
        prop_assert_eq!(decoded.params, trim_params(&params));
    }

    #[test]
    fn event_body_round_trips(
        code in any::<u16>(),
        txid in any::<u32>(),
        params in proptest::collection::vec(any::<u32>(), 0..=3),
        endian in endians(),
    ) {
        let codec = Codec::new(endian);
        let evt = Event::new(code.into(), 0, txid, params.clone());
        let body = evt.encode_body(&codec).unwrap();
        let decoded = Event::decode_body(&codec, &body).unwrap();
        prop_assert_eq!(decoded.code, evt.code);
        prop_assert_eq!(decoded.params, trim_params(&params));
    }

    #[test]
    fn frames_survive_arbitrary_fragmentation(
        payload in proptest::collection::vec(any::<u8>(), 0..512),
        txid in any::<u32>(),
        chunk in 1usize..97,
    ) {
        let codec = Codec::new(Endian::Little);
        let data = ptp_engine::DataPacket::new(
            operations::GET_OBJECT,
            1,
            txid,
            bytes::Bytes::from(payload.clone()),
        );
        let wire = Frame::from_data(&data).encode(&codec);

        let mut asm = FrameAssembler::new(codec);
        let mut out = None;
        for piece in wire.chunks(chunk) {
            asm.feed(piece);
            if let Some(frame) = asm.next_frame().unwrap() {
                out = Some(frame);
            }
        }
        let frame = out.unwrap();
        prop_assert_eq!(frame.transaction_id, txid);
        prop_assert_eq!(&frame.payload[..], &payload[..]);
    }

    #[test]
    fn truncated_input_never_panics(
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
        endian in endians(),
    ) {
        let codec = Codec::new(endian);
        // Whatever the bytes, decoding returns a value or an error,
        // never a panic or an over-read.
        let _ = Response::decode_body(&codec, &bytes);
        let _ = ptp_engine::DeviceInfo::decode(&mut codec.reader(&bytes));
        let _ = ptp_engine::DevicePropDesc::decode(&mut codec.reader(&bytes));
    }
}
