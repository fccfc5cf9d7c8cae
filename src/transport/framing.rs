//! The generic bulk container framing shared by USB-class transports:
//! `Length(u32) · Type(u16) · Code(u16) · TransactionID(u32) · payload`.
//!
//! `Length` covers the whole frame including the 12-byte header. A data
//! phase may arrive fragmented across several reads; [`FrameAssembler`]
//! buffers until the declared length is satisfied, so the engine above
//! only ever sees whole containers.

use bytes::{Bytes, BytesMut};

use crate::codec::container::{
    Command, ContainerKind, DataPacket, Event, Response, decode_params, encode_params,
    MAX_COMMAND_PARAMS, MAX_EVENT_PARAMS,
};
use crate::codec::{Codec, CodecError};
use crate::types::{EventCode, OperationCode, ResponseCode};

/// One whole wire frame, header fields split out, payload raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Container discriminant from the Type field
    pub kind: ContainerKind,
    /// Operation, response, or event code depending on `kind`
    pub code: u16,
    /// Transaction the frame belongs to
    pub transaction_id: u32,
    /// Frame payload: parameters, or raw bytes for a data frame
    pub payload: Bytes,
}

impl Frame {
    /// Header size in bytes.
    pub const HEADER_LEN: usize = 12;

    /// Frame a command: payload is its encoded parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the command has too many parameters.
    pub fn from_command(command: &Command, codec: &Codec) -> Result<Self, CodecError> {
        Ok(Self {
            kind: ContainerKind::Command,
            code: command.code.raw(),
            transaction_id: command.transaction_id,
            payload: encode_params(codec, &command.params, MAX_COMMAND_PARAMS)?,
        })
    }

    /// Frame a response: payload is its encoded parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the response has too many parameters.
    pub fn from_response(response: &Response, codec: &Codec) -> Result<Self, CodecError> {
        Ok(Self {
            kind: ContainerKind::Response,
            code: response.code.raw(),
            transaction_id: response.transaction_id,
            payload: encode_params(codec, &response.params, MAX_COMMAND_PARAMS)?,
        })
    }

    /// Frame an event: payload is its encoded parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the event has too many parameters.
    pub fn from_event(event: &Event, codec: &Codec) -> Result<Self, CodecError> {
        Ok(Self {
            kind: ContainerKind::Event,
            code: event.code.raw(),
            transaction_id: event.transaction_id,
            payload: encode_params(codec, &event.params, MAX_EVENT_PARAMS)?,
        })
    }

    /// Frame a data phase: the operation code rides in the header.
    #[must_use]
    pub fn from_data(data: &DataPacket) -> Self {
        Self {
            kind: ContainerKind::Data,
            code: data.code.raw(),
            transaction_id: data.transaction_id,
            payload: data.payload.clone(),
        }
    }

    /// Interpret this frame as a response, stamping `session_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the payload is not a parameter list.
    pub fn to_response(&self, codec: &Codec, session_id: u32) -> Result<Response, CodecError> {
        Ok(Response {
            code: ResponseCode(self.code),
            session_id,
            transaction_id: self.transaction_id,
            params: decode_params(codec, &self.payload, MAX_COMMAND_PARAMS)?,
        })
    }

    /// Interpret this frame as a command, stamping `session_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the payload is not a parameter list.
    pub fn to_command(&self, codec: &Codec, session_id: u32) -> Result<Command, CodecError> {
        Ok(Command {
            code: OperationCode(self.code),
            session_id,
            transaction_id: self.transaction_id,
            params: decode_params(codec, &self.payload, MAX_COMMAND_PARAMS)?,
        })
    }

    /// Interpret this frame as an event, stamping `session_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the payload is not a parameter list.
    pub fn to_event(&self, codec: &Codec, session_id: u32) -> Result<Event, CodecError> {
        Ok(Event {
            code: EventCode(self.code),
            session_id,
            transaction_id: self.transaction_id,
            params: decode_params(codec, &self.payload, MAX_EVENT_PARAMS)?,
        })
    }

    /// Interpret this frame as a data phase, stamping `session_id`.
    #[must_use]
    pub fn to_data(&self, session_id: u32) -> DataPacket {
        DataPacket {
            code: OperationCode(self.code),
            session_id,
            transaction_id: self.transaction_id,
            payload: self.payload.clone(),
        }
    }

    /// Encode the frame, computing the Length field.
    #[must_use]
    pub fn encode(&self, codec: &Codec) -> Bytes {
        let mut w = codec.writer();
        #[allow(clippy::cast_possible_truncation)]
        w.put_u32((Self::HEADER_LEN + self.payload.len()) as u32);
        w.put_u16(self.kind as u16);
        w.put_u16(self.code);
        w.put_u32(self.transaction_id);
        w.put_slice(&self.payload);
        w.into_bytes()
    }
}

/// Incremental reassembly of frames from arbitrarily fragmented reads.
///
/// Feed chunks as they arrive with [`FrameAssembler::feed`], then drain
/// whole frames with [`FrameAssembler::next_frame`].
#[derive(Debug)]
pub struct FrameAssembler {
    codec: Codec,
    buf: BytesMut,
}

impl FrameAssembler {
    /// Create an assembler decoding headers with `codec`.
    #[must_use]
    pub fn new(codec: Codec) -> Self {
        Self {
            codec,
            buf: BytesMut::with_capacity(4096),
        }
    }

    /// Append raw bytes read from the wire.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Bytes buffered but not yet consumed by a complete frame.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Try to take one complete frame off the buffer.
    ///
    /// Returns `Ok(None)` until a declared frame length is satisfied.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] for an impossible length or unknown
    /// container type; the connection should be dropped after either.
    pub fn next_frame(&mut self) -> Result<Option<Frame>, CodecError> {
        if self.buf.len() < Frame::HEADER_LEN {
            return Ok(None);
        }
        let mut r = self.codec.reader(&self.buf);
        let length = r.read_u32()?;
        let kind = ContainerKind::from_wire(r.read_u16()?)?;
        let code = r.read_u16()?;
        let transaction_id = r.read_u32()?;

        let length = length as usize;
        if length < Frame::HEADER_LEN {
            #[allow(clippy::cast_possible_truncation)]
            return Err(CodecError::BadFrameLength(length as u32));
        }
        if self.buf.len() < length {
            return Ok(None);
        }

        let frame_bytes = self.buf.split_to(length);
        let payload = Bytes::copy_from_slice(&frame_bytes[Frame::HEADER_LEN..]);
        Ok(Some(Frame {
            kind,
            code,
            transaction_id,
            payload,
        }))
    }
}
