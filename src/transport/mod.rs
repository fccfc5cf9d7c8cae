//! The transport contract the protocol engine consumes.
//!
//! A transport owns the physical channel (USB endpoints, a TCP socket)
//! and its wire framing, but delegates all container and dataset byte
//! work to the [`crate::codec`] layer, parameterized with the endianness
//! the transport requires. It also stamps the implicit SessionID onto
//! containers it decodes - no standard transport actually carries it.
//!
//! Physical endpoint I/O and device discovery live outside this crate;
//! the in-memory [`crate::testing::MockTransport`] is the reference
//! implementation of this contract.

use async_trait::async_trait;
use bytes::Bytes;

use crate::codec::container::{Command, Event, Response};
use crate::error::PtpError;
use crate::types::OperationCode;

pub mod framing;

#[cfg(test)]
mod framing_tests;

/// The reassembled data phase of an incoming transfer, with the identity
/// fields the engine verifies against the command and response legs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLeg {
    /// Operation code echoed on the data frames
    pub code: OperationCode,
    /// Session stamped by the transport
    pub session_id: u32,
    /// Transaction echoed on the data frames
    pub transaction_id: u32,
    /// Fully reassembled payload
    pub payload: Bytes,
}

/// What one incoming exchange produced: the response, plus the data leg
/// if the device sent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Received {
    /// The response container closing the transaction
    pub response: Response,
    /// The data phase, if the operation carried one
    pub data: Option<DataLeg>,
}

/// The four primitive operations a transport provides.
///
/// Each primitive performs the full wire round-trips for its shape and
/// blocks until they complete; timeout policy is the transport's.
/// Failures surface as [`PtpError::Transport`] and are never interpreted
/// by the engine.
#[async_trait]
pub trait PtpTransport: Send + Sync {
    /// Operation with no dataphase: send the command, read the response.
    async fn mesg(&self, command: &Command) -> Result<Response, PtpError>;

    /// Operation with outgoing dataphase: send the command, send the
    /// payload, read the response.
    async fn send(&self, command: &Command, payload: Bytes) -> Result<Response, PtpError>;

    /// Operation with incoming dataphase: send the command, reassemble
    /// the data phase if the device produces one, read the response.
    async fn recv(&self, command: &Command) -> Result<Received, PtpError>;

    /// Poll the event queue: non-blocking when `wait` is false, blocking
    /// until an event arrives when true.
    async fn event(&self, wait: bool) -> Result<Option<Event>, PtpError>;
}
