//! The session controller.
//!
//! Owns the staging list and the transcript store exclusively, and wires
//! them to the remote computation client. One invocation at a time:
//! [`Session::run_operation`] takes `&mut self`, so a second concurrent
//! invocation is unrepresentable; the busy flag is still exposed as
//! controller state so a presentation layer can disable its run affordance
//! while a call is pending.

use std::path::PathBuf;

use thiserror::Error;

use polycalc_client::{ComputeError, ServiceConfig, compute};
use polycalc_types::{Operand, Operation, Transcript, TranscriptEntry, parse_explanation};

use crate::staging::OperandStaging;
use crate::store::TranscriptStore;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Fewer than 2 operands staged when an operation was requested.
    /// Synchronous, no side effect, no transcript entry.
    #[error("at least 2 operands are required, {staged} staged")]
    InsufficientOperands { staged: usize },

    /// The remote call failed or its response was malformed. The Request
    /// entry appended before the call remains in the transcript without a
    /// matching Result, and the staging list has been cleared.
    #[error("remote computation failed: {0}")]
    RemoteComputationFailed(#[from] ComputeError),
}

#[derive(Debug)]
pub struct Session {
    staging: OperandStaging,
    store: TranscriptStore,
    service: ServiceConfig,
    busy: bool,
}

impl Session {
    #[must_use]
    pub fn new(service: ServiceConfig, transcript_path: PathBuf) -> Self {
        Self {
            staging: OperandStaging::new(),
            store: TranscriptStore::new(transcript_path),
            service,
            busy: false,
        }
    }

    /// Restore the persisted transcript. Call once at session start.
    /// Returns how many entries were restored.
    pub fn restore(&mut self) -> usize {
        self.store.restore()
    }

    /// Stage a new operand; empty/whitespace text is a no-op.
    pub fn stage_operand(&mut self, text: &str) -> bool {
        self.staging.add(text)
    }

    /// Remove the staged operand at `index`; false when out of range.
    pub fn unstage_operand(&mut self, index: usize) -> bool {
        self.staging.remove_at(index)
    }

    #[must_use]
    pub fn staged(&self) -> &[Operand] {
        self.staging.operands()
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        self.store.transcript()
    }

    /// Whether an invocation's network call is pending.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn clear_transcript(&mut self) {
        self.store.clear();
    }

    /// Run one operation over the staged operands.
    ///
    /// The Request entry is appended (and persisted) before the network call
    /// is awaited, so it is observable even while the response is pending.
    /// On success the Result entry is appended; on failure the Request stays
    /// orphaned. Either way the staging list is cleared before returning,
    /// matching the observed behavior of the source system.
    pub async fn run_operation(&mut self, operation: Operation) -> Result<(), SessionError> {
        if self.staging.len() < 2 {
            return Err(SessionError::InsufficientOperands {
                staged: self.staging.len(),
            });
        }

        let operands = self.staging.operands().to_vec();
        self.store
            .append(TranscriptEntry::request(operation, operands.clone()));

        self.busy = true;
        let outcome = compute(&self.service, operation, &operands).await;
        self.busy = false;
        self.staging.clear();

        match outcome {
            Ok(computation) => {
                let steps = parse_explanation(&computation.explanation);
                self.store.append(TranscriptEntry::result(
                    operation,
                    computation.result_expression,
                    steps,
                    operands,
                ));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(operation = operation.wire_name(), "Computation failed: {e}");
                Err(SessionError::RemoteComputationFailed(e))
            }
        }
    }
}
