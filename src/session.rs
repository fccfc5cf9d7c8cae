//! Session identity and transaction numbering.
//!
//! One `SessionState` is owned by the engine instance bound to one device
//! connection. It is never shared across devices, and the engine
//! serializes all access to it behind the transaction lock.

use crate::error::PtpError;

/// Highest transaction number ever emitted; the counter wraps back to 1
/// past this, never re-emitting 0 (the "no session" sentinel) or
/// 0xFFFFFFFF (reserved).
const TRANSACTION_MAX: u32 = 0xFFFF_FFFE;

/// The session/transaction state machine: `Closed` until an `OpenSession`
/// exchange succeeds, `Open` until `CloseSession`, device reset, or
/// power-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    session_id: u32,
    open: bool,
    transaction_id: u32,
}

impl SessionState {
    /// A fresh, closed session with no identity assigned yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_id: 0,
            open: false,
            transaction_id: 1,
        }
    }

    /// The current session identifier (0 before the first open).
    #[must_use]
    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    /// Whether a session is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The identifier the next `OpenSession` will propose.
    ///
    /// Session IDs are assigned by the initiator and increment on each
    /// successful open, so re-opening after a close gets a fresh ID.
    #[must_use]
    pub fn next_session_id(&self) -> u32 {
        self.session_id + 1
    }

    /// Take the transaction number for one operation.
    ///
    /// While the session is closed this returns the sentinel 0 (legal only
    /// for operations allowed outside a session). While open it advances
    /// the counter exactly once per call, whether or not the operation
    /// that consumes it ultimately succeeds, wrapping from
    /// 0xFFFFFFFE back to 1.
    pub fn next_transaction(&mut self) -> u32 {
        if !self.open {
            return 0;
        }
        let current = self.transaction_id;
        self.transaction_id += 1;
        if self.transaction_id > TRANSACTION_MAX {
            self.transaction_id = 1;
        }
        current
    }

    /// Commit a successful `OpenSession`: adopt `session_id` and restart
    /// the transaction sequence at 1.
    pub fn mark_open(&mut self, session_id: u32) {
        self.session_id = session_id;
        self.open = true;
        self.transaction_id = 1;
    }

    /// Record that the session ended (close, device reset, power-down).
    pub fn mark_closed(&mut self) {
        self.open = false;
    }

    /// Reset the transaction counter.
    ///
    /// Only the value 1 is accepted, and only the open path has a reason
    /// to call this; anything else is a usage fault.
    ///
    /// # Errors
    ///
    /// Returns [`PtpError::TransactionReset`] for any value other than 1.
    pub fn reset_transaction(&mut self, value: u32) -> Result<(), PtpError> {
        if value != 1 {
            return Err(PtpError::TransactionReset { value });
        }
        self.transaction_id = 1;
        Ok(())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
