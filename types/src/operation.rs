//! The four operations the remote computation service understands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which remote transformation to apply to the staged operands.
///
/// The wire names are the Spanish path segments the service routes on;
/// they are also the persisted spelling, so serde uses them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "suma")]
    Suma,
    #[serde(rename = "resta")]
    Resta,
    #[serde(rename = "multiplicacion")]
    Multiplicacion,
    #[serde(rename = "division")]
    Division,
}

#[derive(Debug, Error)]
#[error("unknown operation: {0:?}")]
pub struct OperationParseError(pub String);

impl Operation {
    /// Path segment used in the service URL and in the persisted record.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Operation::Suma => "suma",
            Operation::Resta => "resta",
            Operation::Multiplicacion => "multiplicacion",
            Operation::Division => "division",
        }
    }

    /// Capitalized label for display, matching the original button captions.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Operation::Suma => "Suma",
            Operation::Resta => "Resta",
            Operation::Multiplicacion => "Multiplicacion",
            Operation::Division => "Division",
        }
    }

    #[must_use]
    pub const fn all() -> [Operation; 4] {
        [
            Operation::Suma,
            Operation::Resta,
            Operation::Multiplicacion,
            Operation::Division,
        ]
    }

    /// Parse a user-entered operation name, case-insensitively.
    ///
    /// Accepts the wire names plus English aliases so the shell is usable
    /// in either language.
    pub fn parse(input: &str) -> Result<Self, OperationParseError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "suma" | "sum" | "add" => Ok(Operation::Suma),
            "resta" | "difference" | "subtract" | "sub" => Ok(Operation::Resta),
            "multiplicacion" | "product" | "multiply" | "mul" => Ok(Operation::Multiplicacion),
            "division" | "divide" | "div" => Ok(Operation::Division),
            _ => Err(OperationParseError(input.to_owned())),
        }
    }
}

// Display writes the wire name; callers uppercase or capitalize at the
// point of rendering.
impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}
