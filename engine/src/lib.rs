//! Session state machine and orchestration for Polycalc.
//!
//! This crate owns the mutable session state: the operand staging list, the
//! persisted transcript store, and the controller that wires staging to the
//! remote computation client. Everything here is single-actor; the only
//! suspension point is the outbound network call inside
//! [`Session::run_operation`].

mod config;
mod session;
mod staging;
mod store;

pub use config::{ConfigError, PolycalcConfig};
pub use session::{Session, SessionError};
pub use staging::OperandStaging;
pub use store::TranscriptStore;

pub use polycalc_client::ServiceConfig;
