//! Core domain types for Polycalc.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application: the operand proof type, the operation enum, the explanation
//! step parser, and the transcript entry sum type.

mod operation;
mod steps;
mod transcript;

pub use operation::{Operation, OperationParseError};
pub use steps::{Step, StepKind, parse_explanation};
pub use transcript::{RequestEntry, ResultEntry, Transcript, TranscriptEntry};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user-entered polynomial expression.
///
/// Opaque to the whole system: never parsed or validated locally, only
/// guaranteed trimmed and non-empty. Construction is the single place where
/// whitespace-only input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Operand(String);

#[derive(Debug, Error)]
#[error("operand must not be empty")]
pub struct EmptyOperandError;

impl Operand {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyOperandError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(EmptyOperandError)
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Operand {
    type Error = EmptyOperandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Operand {
    type Error = EmptyOperandError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Operand> for String {
    fn from(value: Operand) -> Self {
        value.0
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position label for an operand at `index` in a staged or echoed list.
///
/// Positions are 1-based: the first operand is `P1`.
#[must_use]
pub fn position_label(index: usize) -> String {
    format!("P{}", index + 1)
}
