//! The transcript: an append-only log of request echoes and results.
//!
//! Entries form a real sum type decided at construction time, not a role tag
//! with sometimes-meaningful fields. Every `Result` entry is preceded by the
//! `Request` entry of the same invocation; the pair is appended in that
//! order with nothing interleaved, because only one invocation is ever in
//! flight.

use serde::{Deserialize, Serialize};

use crate::{Operand, Operation, Step};

/// Echo of what the user submitted: the operation and the operands in the
/// order they were staged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEntry {
    operation: Operation,
    operands: Vec<Operand>,
}

impl RequestEntry {
    #[must_use]
    pub fn new(operation: Operation, operands: Vec<Operand>) -> Self {
        Self {
            operation,
            operands,
        }
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    /// One-line echo in the original's input-message format:
    /// `SUMA: 2x+1, 3x-2`.
    #[must_use]
    pub fn echo_line(&self) -> String {
        let joined = self
            .operands
            .iter()
            .map(Operand::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {joined}", self.operation.wire_name().to_uppercase())
    }
}

/// A completed computation: the service's result expression plus its
/// explanation parsed into steps, with the operand snapshot it answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    operation: Operation,
    result_expression: String,
    steps: Vec<Step>,
    operands: Vec<Operand>,
}

impl ResultEntry {
    #[must_use]
    pub fn new(
        operation: Operation,
        result_expression: impl Into<String>,
        steps: Vec<Step>,
        operands: Vec<Operand>,
    ) -> Self {
        Self {
            operation,
            result_expression: result_expression.into(),
            steps,
            operands,
        }
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn result_expression(&self) -> &str {
        &self.result_expression
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranscriptEntry {
    Request(RequestEntry),
    Result(ResultEntry),
}

impl TranscriptEntry {
    #[must_use]
    pub fn request(operation: Operation, operands: Vec<Operand>) -> Self {
        Self::Request(RequestEntry::new(operation, operands))
    }

    #[must_use]
    pub fn result(
        operation: Operation,
        result_expression: impl Into<String>,
        steps: Vec<Step>,
        operands: Vec<Operand>,
    ) -> Self {
        Self::Result(ResultEntry::new(operation, result_expression, steps, operands))
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            TranscriptEntry::Request(entry) => entry.operation(),
            TranscriptEntry::Result(entry) => entry.operation(),
        }
    }
}

/// The full ordered log. Mutated only by append and full clear; entries are
/// never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
