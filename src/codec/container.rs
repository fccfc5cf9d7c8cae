//! Protocol containers and their transport-independent body codecs.
//!
//! A container body is what remains after transport framing is stripped:
//! `code(u16) · TransactionID(u32) · parameters`, or for the data phase
//! `TransactionID(u32) · raw payload`. The SessionID is not transmitted on
//! most transports but is always logically present; transports stamp it
//! onto containers they decode.

use bytes::Bytes;

use super::{Codec, CodecError};
use crate::registry::codes::responses;
use crate::types::{EventCode, OperationCode, ResponseCode};

/// Discriminant for one protocol message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ContainerKind {
    /// Operation request, initiator to responder.
    Command = 0x0001,
    /// Bulk payload leg of a transaction.
    Data = 0x0002,
    /// Operation result, responder to initiator.
    Response = 0x0003,
    /// Asynchronous device-originated notification.
    Event = 0x0004,
}

impl ContainerKind {
    /// Parse from the wire value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownContainerType`] for anything else.
    pub fn from_wire(value: u16) -> Result<Self, CodecError> {
        match value {
            0x0001 => Ok(Self::Command),
            0x0002 => Ok(Self::Data),
            0x0003 => Ok(Self::Response),
            0x0004 => Ok(Self::Event),
            other => Err(CodecError::UnknownContainerType(other)),
        }
    }
}

/// Maximum parameters on a command or response container.
pub const MAX_COMMAND_PARAMS: usize = 5;
/// Maximum parameters on an event container.
pub const MAX_EVENT_PARAMS: usize = 3;

pub(crate) fn encode_params(codec: &Codec, params: &[u32], max: usize) -> Result<Bytes, CodecError> {
    if params.len() > max {
        return Err(CodecError::TooManyParameters {
            count: params.len(),
            max,
        });
    }
    // Unused trailing parameters are conceptually zero; don't send them.
    let used = params
        .iter()
        .rposition(|&p| p != 0)
        .map_or(0, |last| last + 1);
    let mut w = codec.writer();
    for &param in &params[..used] {
        w.put_u32(param);
    }
    Ok(w.into_bytes())
}

pub(crate) fn decode_params(codec: &Codec, payload: &[u8], max: usize) -> Result<Vec<u32>, CodecError> {
    let mut r = codec.reader(payload);
    let count = payload.len() / 4;
    if count > max {
        return Err(CodecError::TooManyParameters { count, max });
    }
    let mut params = Vec::with_capacity(count);
    for _ in 0..count {
        params.push(r.read_u32()?);
    }
    Ok(params)
}

/// An operation request: code, transaction, and up to five parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The operation being requested
    pub code: OperationCode,
    /// Session the request belongs to (0 outside a session)
    pub session_id: u32,
    /// Transaction number stamped by the initiator
    pub transaction_id: u32,
    /// Operation parameters, at most five
    pub params: Vec<u32>,
}

impl Command {
    /// Create a command container.
    #[must_use]
    pub fn new(code: OperationCode, session_id: u32, transaction_id: u32, params: Vec<u32>) -> Self {
        Self {
            code,
            session_id,
            transaction_id,
            params,
        }
    }

    /// Encode `code · TransactionID · parameters` (trailing zeros omitted).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TooManyParameters`] for more than five.
    pub fn encode_body(&self, codec: &Codec) -> Result<Bytes, CodecError> {
        let mut w = codec.writer();
        w.put_u16(self.code.raw());
        w.put_u32(self.transaction_id);
        w.put_slice(&encode_params(codec, &self.params, MAX_COMMAND_PARAMS)?);
        Ok(w.into_bytes())
    }

    /// Decode a command body. The SessionID is stamped by the caller.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] on truncated or over-long input.
    pub fn decode_body(codec: &Codec, body: &[u8]) -> Result<Self, CodecError> {
        let mut r = codec.reader(body);
        let code = OperationCode(r.read_u16()?);
        let transaction_id = r.read_u32()?;
        let params = decode_params(codec, r.rest(), MAX_COMMAND_PARAMS)?;
        Ok(Self {
            code,
            session_id: 0,
            transaction_id,
            params,
        })
    }
}

/// An operation result: code, transaction, and up to five parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The result reported by the device
    pub code: ResponseCode,
    /// Session stamped by the transport (implicit on the wire)
    pub session_id: u32,
    /// Transaction this response answers
    pub transaction_id: u32,
    /// Response parameters, at most five
    pub params: Vec<u32>,
}

impl Response {
    /// Create a response container.
    #[must_use]
    pub fn new(code: ResponseCode, session_id: u32, transaction_id: u32, params: Vec<u32>) -> Self {
        Self {
            code,
            session_id,
            transaction_id,
            params,
        }
    }

    /// Whether the device reported success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == responses::OK
    }

    /// Parameter `i`, or 0 if the device omitted it.
    #[must_use]
    pub fn param(&self, i: usize) -> u32 {
        self.params.get(i).copied().unwrap_or(0)
    }

    /// Encode `code · TransactionID · parameters` (trailing zeros omitted).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TooManyParameters`] for more than five.
    pub fn encode_body(&self, codec: &Codec) -> Result<Bytes, CodecError> {
        let mut w = codec.writer();
        w.put_u16(self.code.raw());
        w.put_u32(self.transaction_id);
        w.put_slice(&encode_params(codec, &self.params, MAX_COMMAND_PARAMS)?);
        Ok(w.into_bytes())
    }

    /// Decode a response body. The SessionID is stamped by the caller.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] on truncated or over-long input.
    pub fn decode_body(codec: &Codec, body: &[u8]) -> Result<Self, CodecError> {
        let mut r = codec.reader(body);
        let code = ResponseCode(r.read_u16()?);
        let transaction_id = r.read_u32()?;
        let params = decode_params(codec, r.rest(), MAX_COMMAND_PARAMS)?;
        Ok(Self {
            code,
            session_id: 0,
            transaction_id,
            params,
        })
    }
}

/// A device-originated notification: code, transaction, three parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// What happened
    pub code: EventCode,
    /// Session stamped by the transport (implicit on the wire)
    pub session_id: u32,
    /// Transaction the event relates to, or 0xFFFFFFFF for none
    pub transaction_id: u32,
    /// Event parameters, at most three
    pub params: Vec<u32>,
}

impl Event {
    /// Create an event container.
    #[must_use]
    pub fn new(code: EventCode, session_id: u32, transaction_id: u32, params: Vec<u32>) -> Self {
        Self {
            code,
            session_id,
            transaction_id,
            params,
        }
    }

    /// Encode `code · TransactionID · parameters` (trailing zeros omitted).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TooManyParameters`] for more than three.
    pub fn encode_body(&self, codec: &Codec) -> Result<Bytes, CodecError> {
        let mut w = codec.writer();
        w.put_u16(self.code.raw());
        w.put_u32(self.transaction_id);
        w.put_slice(&encode_params(codec, &self.params, MAX_EVENT_PARAMS)?);
        Ok(w.into_bytes())
    }

    /// Decode an event body. The SessionID is stamped by the caller.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] on truncated or over-long input.
    pub fn decode_body(codec: &Codec, body: &[u8]) -> Result<Self, CodecError> {
        let mut r = codec.reader(body);
        let code = EventCode(r.read_u16()?);
        let transaction_id = r.read_u32()?;
        let params = decode_params(codec, r.rest(), MAX_EVENT_PARAMS)?;
        Ok(Self {
            code,
            session_id: 0,
            transaction_id,
            params,
        })
    }
}

/// The bulk payload leg of a transaction.
///
/// On the wire this is `TransactionID · raw bytes`; the operation code is
/// carried by transport framing and kept here so the engine can verify
/// phase identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPacket {
    /// Operation this payload belongs to
    pub code: OperationCode,
    /// Session stamped by the transport
    pub session_id: u32,
    /// Transaction this payload belongs to
    pub transaction_id: u32,
    /// The payload bytes
    pub payload: Bytes,
}

impl DataPacket {
    /// Create a data container.
    #[must_use]
    pub fn new(code: OperationCode, session_id: u32, transaction_id: u32, payload: Bytes) -> Self {
        Self {
            code,
            session_id,
            transaction_id,
            payload,
        }
    }

    /// Encode `TransactionID · payload`.
    #[must_use]
    pub fn encode_body(&self, codec: &Codec) -> Bytes {
        let mut w = codec.writer();
        w.put_u32(self.transaction_id);
        w.put_slice(&self.payload);
        w.into_bytes()
    }

    /// Decode a data body. Code and SessionID are stamped by the caller.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] on truncated input.
    pub fn decode_body(codec: &Codec, body: &[u8]) -> Result<Self, CodecError> {
        let mut r = codec.reader(body);
        let transaction_id = r.read_u32()?;
        let payload = Bytes::copy_from_slice(r.rest());
        Ok(Self {
            code: OperationCode(0),
            session_id: 0,
            transaction_id,
            payload,
        })
    }
}
