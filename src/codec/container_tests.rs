use bytes::Bytes;

use super::container::{Command, ContainerKind, DataPacket, Event, Response};
use super::{Codec, CodecError, Endian};
use crate::registry::codes::{events, operations, responses};

#[test]
fn test_command_wire_layout() {
    let codec = Codec::new(Endian::Little);
    let cmd = Command::new(operations::OPEN_SESSION, 0, 0, vec![1]);
    let body = cmd.encode_body(&codec).unwrap();
    // 0x1002 LE, txid 0, one parameter.
    assert_eq!(
        &body[..],
        &[0x02, 0x10, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]
    );
}

#[test]
fn test_trailing_zero_params_omitted() {
    let codec = Codec::new(Endian::Little);
    let cmd = Command::new(operations::GET_OBJECT_HANDLES, 1, 7, vec![5, 0, 0, 0, 0]);
    let body = cmd.encode_body(&codec).unwrap();
    // code(2) + txid(4) + one surviving parameter(4)
    assert_eq!(body.len(), 10);

    // Interior zeros survive.
    let cmd = Command::new(operations::GET_OBJECT_HANDLES, 1, 7, vec![5, 0, 9]);
    assert_eq!(cmd.encode_body(&codec).unwrap().len(), 18);
}

#[test]
fn test_command_round_trip() {
    for endian in [Endian::Little, Endian::Big] {
        let codec = Codec::new(endian);
        let cmd = Command::new(operations::GET_DEVICE_INFO, 0, 3, vec![1, 2, 3]);
        let body = cmd.encode_body(&codec).unwrap();
        let decoded = Command::decode_body(&codec, &body).unwrap();
        assert_eq!(decoded.code, cmd.code);
        assert_eq!(decoded.transaction_id, 3);
        assert_eq!(decoded.params, vec![1, 2, 3]);
    }
}

#[test]
fn test_response_round_trip_and_helpers() {
    let codec = Codec::default();
    let rsp = Response::new(responses::OK, 1, 9, vec![42]);
    let body = rsp.encode_body(&codec).unwrap();
    let decoded = Response::decode_body(&codec, &body).unwrap();
    assert!(decoded.is_ok());
    assert_eq!(decoded.param(0), 42);
    assert_eq!(decoded.param(4), 0);

    let busy = Response::new(responses::DEVICE_BUSY, 1, 9, vec![]);
    assert!(!busy.is_ok());
}

#[test]
fn test_event_param_limit() {
    let codec = Codec::default();
    let evt = Event::new(events::OBJECT_ADDED, 1, 4, vec![1, 2, 3, 4]);
    assert_eq!(
        evt.encode_body(&codec).unwrap_err(),
        CodecError::TooManyParameters { count: 4, max: 3 }
    );

    let evt = Event::new(events::OBJECT_ADDED, 1, 4, vec![0x10, 0, 0]);
    let body = evt.encode_body(&codec).unwrap();
    let decoded = Event::decode_body(&codec, &body).unwrap();
    assert_eq!(decoded.code, events::OBJECT_ADDED);
    assert_eq!(decoded.params, vec![0x10]);
}

#[test]
fn test_command_param_limit() {
    let codec = Codec::default();
    let cmd = Command::new(operations::GET_DEVICE_INFO, 0, 1, vec![1; 6]);
    assert!(matches!(
        cmd.encode_body(&codec),
        Err(CodecError::TooManyParameters { count: 6, max: 5 })
    ));

    // Over-long wire payloads are rejected on decode too.
    let mut over = vec![0x01, 0x10, 0x01, 0x00, 0x00, 0x00];
    over.extend_from_slice(&[0u8; 24]); // six parameters
    assert!(matches!(
        Command::decode_body(&codec, &over),
        Err(CodecError::TooManyParameters { count: 6, max: 5 })
    ));
}

#[test]
fn test_data_packet_round_trip() {
    let codec = Codec::default();
    let data = DataPacket::new(
        operations::GET_OBJECT,
        2,
        11,
        Bytes::from_static(b"payload bytes"),
    );
    let body = data.encode_body(&codec);
    let decoded = DataPacket::decode_body(&codec, &body).unwrap();
    assert_eq!(decoded.transaction_id, 11);
    assert_eq!(&decoded.payload[..], b"payload bytes");
}

#[test]
fn test_container_kind_wire_values() {
    assert_eq!(ContainerKind::from_wire(1).unwrap(), ContainerKind::Command);
    assert_eq!(ContainerKind::from_wire(2).unwrap(), ContainerKind::Data);
    assert_eq!(
        ContainerKind::from_wire(3).unwrap(),
        ContainerKind::Response
    );
    assert_eq!(ContainerKind::from_wire(4).unwrap(), ContainerKind::Event);
    assert!(matches!(
        ContainerKind::from_wire(9),
        Err(CodecError::UnknownContainerType(9))
    ));
}

#[test]
fn test_truncated_body_is_a_fault() {
    let codec = Codec::default();
    assert!(matches!(
        Response::decode_body(&codec, &[0x01, 0x20, 0x05]),
        Err(CodecError::Truncated { .. })
    ));
}
