use thiserror::Error;

use crate::codec::CodecError;
use crate::registry::CodeSpace;

/// Errors that can occur during PTP operations.
///
/// A `ResponseCode` other than `OK` reported by the device is *not* an
/// error: operations return it inside [`crate::Reply`] so the caller can
/// decide policy (a busy camera is expected, not exceptional).
#[derive(Debug, Error)]
pub enum PtpError {
    // ===== Decode faults =====
    /// Malformed or truncated bytes where a well-formed field was expected.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    // ===== Protocol-integrity faults =====
    /// A dataphase leg did not match the command it belongs to.
    ///
    /// The connection should be treated as suspect after this.
    #[error("dataphase mismatch on {leg} {field}: expected {expected:#x}, got {actual:#x}")]
    PhaseMismatch {
        /// Which leg disagreed (`"data"` or `"response"`)
        leg: &'static str,
        /// The field that disagreed (`"SessionID"`, `"TransactionID"`, `"OperationCode"`)
        field: &'static str,
        /// Value stamped on the command
        expected: u32,
        /// Value observed on the offending leg
        actual: u32,
    },

    // ===== Usage faults =====
    /// A symbolic name was not found in the composed code tables.
    ///
    /// Unknown *integers* always pass through; only unknown names fail.
    #[error("unknown {space:?} name `{name}`; try the numeric code")]
    UnknownName {
        /// Code space the lookup ran against
        space: CodeSpace,
        /// The name that failed to resolve
        name: String,
    },

    /// Invalid caller input, reported before anything is sent to the device.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the problem
        message: String,
    },

    /// The transaction counter may only be reset as part of opening a session.
    #[error("transaction counter can only be reset to 1, not set to {value}")]
    TransactionReset {
        /// The rejected value
        value: u32,
    },

    // ===== Transport faults =====
    /// Propagated opaquely from the transport collaborator.
    #[error("transport error: {message}")]
    Transport {
        /// Description of the failure
        message: String,
        /// The underlying source of the error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PtpError {
    /// Build a transport fault from any error type.
    pub fn transport<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        PtpError::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Build a transport fault carrying only a message.
    pub fn transport_msg(message: impl Into<String>) -> Self {
        PtpError::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Whether this fault means the connection itself is suspect.
    #[must_use]
    pub fn is_fatal_to_connection(&self) -> bool {
        matches!(
            self,
            PtpError::PhaseMismatch { .. } | PtpError::Transport { .. }
        )
    }
}
