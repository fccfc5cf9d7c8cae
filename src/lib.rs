//! # ptp-engine
//!
//! A pure Rust protocol engine for controlling imaging devices over the
//! Picture Transfer Protocol (PTP, ISO 15740).
//!
//! ## Features
//!
//! - Byte-exact container and dataset codecs under configurable endianness
//! - Extensible code registry with ordered vendor overlays
//! - Session/transaction state machine with scoped session usage
//! - The three dataphase shapes (no-data, send-data, receive-data) with
//!   cross-phase identity checks
//! - Device property knowledge cache for typed property values
//! - Asynchronous event delivery decoupled from command traffic
//!
//! ## Example
//!
//! ```rust,no_run
//! use ptp_engine::prelude::*;
//! use ptp_engine::testing::MockTransport;
//!
//! # async fn example() -> Result<(), ptp_engine::PtpError> {
//! let engine = PtpEngine::builder(MockTransport::new()).build();
//!
//! // GetDeviceInfo is legal outside a session.
//! let info = engine.get_device_info().await?;
//!
//! engine.open_session().await?;
//! let desc = engine.get_device_prop_desc("BatteryLevel").await?;
//! println!("{:?}", desc.data);
//! engine.close_session().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The crate is organized into layers:
//!
//! - **High-level**: [`PtpEngine`] - session management and the full
//!   operation surface
//! - **Mid-level**: [`registry`], [`session`], [`event`] - the pieces the
//!   engine is assembled from
//! - **Low-level**: [`codec`], [`transport`] - wire formats and the
//!   transport contract

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Public modules
/// Error types
pub mod error;
/// Core protocol types
pub mod types;

/// Testing utilities
pub mod testing;

// Internal modules
pub mod codec;
pub mod engine;
pub mod event;
pub mod registry;
pub mod session;
pub mod transport;
pub mod vendor;

#[cfg(test)]
mod error_tests;

// Re-exports
pub use codec::container::{Command, DataPacket, Event, Response};
pub use codec::dataset::{DeviceInfo, DevicePropDesc, ObjectInfo, StorageInfo};
pub use codec::{Codec, CodecError, Endian, PtpValue};
pub use engine::{EngineBuilder, PtpEngine, Reply, SessionHook};
pub use error::PtpError;
pub use event::{EventQueue, EventSender, event_queue};
pub use registry::{CodeOverlay, CodeRef, CodeRegistry, CodeSpace};
pub use transport::PtpTransport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
///
/// Convenient re-exports
pub mod prelude {
    pub use crate::registry::codes;
    pub use crate::{
        CodeRef, CodeRegistry, Codec, Command, DeviceInfo, DevicePropDesc, Endian, Event,
        PtpEngine, PtpError, PtpTransport, PtpValue, Reply, Response,
    };
}
