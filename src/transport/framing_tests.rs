use bytes::Bytes;
use hex_literal::hex;

use super::framing::{Frame, FrameAssembler};
use crate::codec::container::{Command, ContainerKind, DataPacket};
use crate::codec::{Codec, CodecError, Endian};
use crate::registry::codes::operations;

#[test]
fn test_command_frame_wire_bytes() {
    let codec = Codec::new(Endian::Little);
    let cmd = Command::new(operations::OPEN_SESSION, 0, 0, vec![1]);
    let frame = Frame::from_command(&cmd, &codec).unwrap();
    let bytes = frame.encode(&codec);
    // Length 16, Type 1 (Command), Code 0x1002, TxID 0, Parameter 1.
    assert_eq!(bytes[..], hex!("10000000 0100 0210 00000000 01000000"));
}

#[test]
fn test_frame_round_trip_through_assembler() {
    let codec = Codec::new(Endian::Little);
    let cmd = Command::new(operations::GET_OBJECT, 1, 42, vec![0xAA55, 7]);
    let frame = Frame::from_command(&cmd, &codec).unwrap();
    let bytes = frame.encode(&codec);

    let mut asm = FrameAssembler::new(codec);
    asm.feed(&bytes);
    let out = asm.next_frame().unwrap().unwrap();
    assert_eq!(out, frame);
    assert_eq!(asm.pending(), 0);

    let back = out.to_command(&codec, 1).unwrap();
    assert_eq!(back.code, cmd.code);
    assert_eq!(back.transaction_id, 42);
    assert_eq!(back.params, vec![0xAA55, 7]);
}

#[test]
fn test_fragmented_data_phase_reassembly() {
    let codec = Codec::new(Endian::Little);
    let payload: Vec<u8> = (0u16..600).map(|i| (i % 251) as u8).collect();
    let data = DataPacket::new(
        operations::GET_OBJECT,
        1,
        7,
        Bytes::copy_from_slice(&payload),
    );
    let bytes = Frame::from_data(&data).encode(&codec);

    // Deliver in small uneven chunks, as a bulk endpoint would.
    let mut asm = FrameAssembler::new(codec);
    let mut frame = None;
    for chunk in bytes.chunks(64) {
        assert!(frame.is_none());
        asm.feed(chunk);
        frame = asm.next_frame().unwrap();
    }
    let frame = frame.expect("frame completes with the final chunk");
    assert_eq!(frame.kind, ContainerKind::Data);
    assert_eq!(frame.transaction_id, 7);
    assert_eq!(&frame.payload[..], &payload[..]);
}

#[test]
fn test_back_to_back_frames() {
    let codec = Codec::new(Endian::Little);
    let a = Frame::from_command(&Command::new(operations::GET_DEVICE_INFO, 0, 1, vec![]), &codec)
        .unwrap();
    let b = Frame::from_command(&Command::new(operations::CLOSE_SESSION, 1, 2, vec![]), &codec)
        .unwrap();

    let mut asm = FrameAssembler::new(codec);
    let mut wire = a.encode(&codec).to_vec();
    wire.extend_from_slice(&b.encode(&codec));
    asm.feed(&wire);

    assert_eq!(asm.next_frame().unwrap().unwrap(), a);
    assert_eq!(asm.next_frame().unwrap().unwrap(), b);
    assert!(asm.next_frame().unwrap().is_none());
}

#[test]
fn test_bad_length_rejected() {
    let codec = Codec::new(Endian::Little);
    let mut asm = FrameAssembler::new(codec);
    // Length 4 is shorter than the header itself.
    asm.feed(&hex!("04000000 0100 0110 00000000"));
    assert!(matches!(
        asm.next_frame(),
        Err(CodecError::BadFrameLength(4))
    ));
}

#[test]
fn test_unknown_container_type_rejected() {
    let codec = Codec::new(Endian::Little);
    let mut asm = FrameAssembler::new(codec);
    asm.feed(&hex!("0C000000 0900 0110 00000000"));
    assert!(matches!(
        asm.next_frame(),
        Err(CodecError::UnknownContainerType(9))
    ));
}

#[test]
fn test_big_endian_framing() {
    let codec = Codec::new(Endian::Big);
    let cmd = Command::new(operations::OPEN_SESSION, 0, 0, vec![1]);
    let bytes = Frame::from_command(&cmd, &codec).unwrap().encode(&codec);
    assert_eq!(bytes[..], hex!("00000010 0001 1002 00000000 00000001"));

    let mut asm = FrameAssembler::new(codec);
    asm.feed(&bytes);
    let frame = asm.next_frame().unwrap().unwrap();
    assert_eq!(frame.code, 0x1002);
}
