//! The dataphase protocol engine.
//!
//! One [`PtpEngine`] is bound to one device connection. It owns the
//! session/transaction state, the composed code registry, and the
//! property knowledge cache, and it drives the three canonical request
//! shapes over the transport primitives.
//!
//! Command/response traffic is serialized: the session lock is held for
//! the whole of each exchange, so two transactions can never interleave
//! on the command channel. Event consumption does not take that lock and
//! runs freely alongside.

use std::future::Future;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::Mutex;

use crate::codec::container::{Command, Event, Response};
use crate::codec::{Codec, Endian};
use crate::error::PtpError;
use crate::registry::{CodeOverlay, CodeRegistry, CodeRegistryBuilder};
use crate::session::SessionState;
use crate::transport::{PtpTransport, Received};
use crate::types::OperationCode;

mod knowledge;
mod ops;


pub use knowledge::Knowledge;
pub use ops::ObjectQuery;

/// The outcome of one completed exchange.
///
/// The device's response is always present, even when it reports a
/// failure - a non-OK `ResponseCode` is data for the caller to inspect,
/// not an error. `data` holds the decoded payload when the operation
/// carried one and the device produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<D> {
    /// The response container closing the transaction
    pub response: Response,
    /// Decoded dataphase payload, if any
    pub data: Option<D>,
}

impl<D> Reply<D> {
    /// Whether the device reported success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.response.is_ok()
    }

    /// The decoded payload, discarding the response.
    #[must_use]
    pub fn into_data(self) -> Option<D> {
        self.data
    }
}

/// Lifecycle notifications for vendor behavior extensions.
///
/// Hooks run at well-defined points of the session lifecycle instead of
/// overriding engine methods: after a successful `OpenSession` and before
/// `CloseSession` is sent. An error from a hook aborts the operation that
/// triggered it.
#[async_trait]
pub trait SessionHook: Send + Sync {
    /// Called after a session opened successfully.
    async fn post_open(&self, session_id: u32) -> Result<(), PtpError> {
        let _ = session_id;
        Ok(())
    }

    /// Called before `CloseSession` is sent.
    async fn pre_close(&self, session_id: u32) -> Result<(), PtpError> {
        let _ = session_id;
        Ok(())
    }
}

/// Builds a [`PtpEngine`]: endianness, vendor overlays, and session hooks
/// are fixed here, before first use, and immutable afterwards.
pub struct EngineBuilder<T> {
    transport: T,
    endian: Endian,
    registry: CodeRegistryBuilder,
    hooks: Vec<Box<dyn SessionHook>>,
}

impl<T: PtpTransport> EngineBuilder<T> {
    fn new(transport: T) -> Self {
        Self {
            transport,
            endian: Endian::Little,
            registry: CodeRegistry::builder(),
            hooks: Vec::new(),
        }
    }

    /// Select the wire endianness (little unless the transport says
    /// otherwise).
    #[must_use]
    pub fn endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    /// Apply a vendor code overlay. Order matters: later overlays win
    /// integer collisions.
    #[must_use]
    pub fn overlay(mut self, overlay: &dyn CodeOverlay) -> Self {
        self.registry = self.registry.overlay(overlay);
        self
    }

    /// Register a session lifecycle hook.
    #[must_use]
    pub fn hook(mut self, hook: impl SessionHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Finish construction.
    #[must_use]
    pub fn build(self) -> PtpEngine<T> {
        PtpEngine {
            transport: self.transport,
            codec: Codec::new(self.endian),
            registry: self.registry.build(),
            session: Mutex::new(SessionState::new()),
            knowledge: Mutex::new(Knowledge::new()),
            hooks: self.hooks,
        }
    }
}

/// The protocol engine bound to one device connection.
pub struct PtpEngine<T: PtpTransport> {
    transport: T,
    codec: Codec,
    registry: CodeRegistry,
    /// Transaction lock: held across every command/response exchange.
    session: Mutex<SessionState>,
    /// Dedicated cache lock, independent of command traffic.
    knowledge: Mutex<Knowledge>,
    hooks: Vec<Box<dyn SessionHook>>,
}

impl<T: PtpTransport> PtpEngine<T> {
    /// Start building an engine over `transport`.
    #[must_use]
    pub fn builder(transport: T) -> EngineBuilder<T> {
        EngineBuilder::new(transport)
    }

    /// The composed code registry.
    #[must_use]
    pub fn registry(&self) -> &CodeRegistry {
        &self.registry
    }

    /// The transport this engine drives.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The codec configuration.
    #[must_use]
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// The current session identifier (0 before the first open).
    pub async fn session_id(&self) -> u32 {
        self.session.lock().await.session_id()
    }

    /// Whether a session is currently open.
    pub async fn is_session_open(&self) -> bool {
        self.session.lock().await.is_open()
    }

    /// Take the oldest queued device event.
    ///
    /// Non-blocking when `wait` is false (`None` on an empty queue),
    /// blocking until an event arrives when true. Runs independently of
    /// command traffic.
    ///
    /// # Errors
    ///
    /// Returns [`PtpError::Transport`] if the event channel failed.
    pub async fn event(&self, wait: bool) -> Result<Option<Event>, PtpError> {
        self.transport.event(wait).await
    }

    /// Run `body` inside an open session.
    ///
    /// Opens a session first if none is open, and in that case closes it
    /// again on the way out - after a normal return *and* after an error
    /// from `body`. An already-open outer session is reused and left
    /// open.
    ///
    /// # Errors
    ///
    /// Propagates errors from `body`, from opening, and (only when `body`
    /// succeeded) from closing.
    pub async fn with_session<R>(
        &self,
        body: impl Future<Output = Result<R, PtpError>>,
    ) -> Result<R, PtpError> {
        let opened_here = if self.is_session_open().await {
            tracing::debug!("using outer session");
            false
        } else {
            tracing::debug!("opening scoped session");
            self.open_session().await?;
            true
        };

        let result = body.await;

        if opened_here && self.is_session_open().await {
            tracing::debug!("closing scoped session");
            match (self.close_session().await, &result) {
                (Err(close_err), Ok(_)) => return Err(close_err),
                (Err(close_err), Err(_)) => {
                    // The body error is the interesting one.
                    tracing::debug!(error = %close_err, "close failed during unwind");
                }
                (Ok(_), _) => {}
            }
        }
        result
    }

    // --- the three dataphase shapes ---

    /// Build a command under the session lock, consuming one transaction
    /// number whether or not the exchange succeeds.
    fn build_command(
        session: &mut SessionState,
        code: OperationCode,
        params: Vec<u32>,
    ) -> Command {
        let transaction_id = session.next_transaction();
        Command::new(code, session.session_id(), transaction_id, params)
    }

    /// No-dataphase shape: one command, one response.
    pub(crate) async fn run_mesg(
        &self,
        code: OperationCode,
        params: Vec<u32>,
    ) -> Result<Response, PtpError> {
        let mut session = self.session.lock().await;
        let command = Self::build_command(&mut session, code, params);
        tracing::trace!(code = %command.code, txn = command.transaction_id, "mesg");
        self.transport.mesg(&command).await
    }

    /// Outgoing-dataphase shape, with the single automatic retry: when
    /// the first attempt's response reports failure, the full send-data
    /// step runs once more; a second failure is final.
    pub(crate) async fn run_send(
        &self,
        code: OperationCode,
        params: Vec<u32>,
        payload: Bytes,
    ) -> Result<Response, PtpError> {
        let mut session = self.session.lock().await;
        let command = Self::build_command(&mut session, code, params);
        tracing::trace!(
            code = %command.code,
            txn = command.transaction_id,
            bytes = payload.len(),
            "send"
        );
        let response = self.transport.send(&command, payload.clone()).await?;
        if response.is_ok() {
            return Ok(response);
        }
        tracing::debug!(
            code = %command.code,
            response = %response.code,
            "outgoing dataphase failed, retrying once"
        );
        self.transport.send(&command, payload).await
    }

    /// Incoming-dataphase shape: command, optional reassembled data leg,
    /// response - with the cross-phase identity check.
    pub(crate) async fn run_recv(
        &self,
        code: OperationCode,
        params: Vec<u32>,
    ) -> Result<(Response, Option<Bytes>), PtpError> {
        let mut session = self.session.lock().await;
        let command = Self::build_command(&mut session, code, params);
        tracing::trace!(code = %command.code, txn = command.transaction_id, "recv");
        let received = self.transport.recv(&command).await?;
        drop(session);
        Self::verify_phases(&command, &received)?;
        let Received { response, data } = received;
        Ok((response, data.map(|leg| leg.payload)))
    }

    /// SessionID, TransactionID, and OperationCode must be identical
    /// across the command, data, and response legs; any disagreement
    /// aborts the exchange instead of returning a parsed result.
    fn verify_phases(command: &Command, received: &Received) -> Result<(), PtpError> {
        fn check(
            leg: &'static str,
            field: &'static str,
            expected: u32,
            actual: u32,
        ) -> Result<(), PtpError> {
            if expected == actual {
                Ok(())
            } else {
                Err(PtpError::PhaseMismatch {
                    leg,
                    field,
                    expected,
                    actual,
                })
            }
        }

        if let Some(data) = &received.data {
            check(
                "data",
                "OperationCode",
                u32::from(command.code.raw()),
                u32::from(data.code.raw()),
            )?;
            check("data", "TransactionID", command.transaction_id, data.transaction_id)?;
            check("data", "SessionID", command.session_id, data.session_id)?;
            check(
                "response",
                "TransactionID",
                data.transaction_id,
                received.response.transaction_id,
            )?;
            check(
                "response",
                "SessionID",
                data.session_id,
                received.response.session_id,
            )?;
        }
        Ok(())
    }
}
