//! The operand staging list: operands entered but not yet submitted.

use polycalc_types::Operand;

/// Ordered operands awaiting submission. Insertion order is significant: it
/// maps to the P1, P2, … positions in requests and result echoes.
#[derive(Debug, Default, Clone)]
pub struct OperandStaging {
    operands: Vec<Operand>,
}

impl OperandStaging {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the trimmed text as a new operand.
    ///
    /// Empty or whitespace-only text is a no-op; duplicates are allowed.
    /// Returns whether an operand was added.
    pub fn add(&mut self, text: &str) -> bool {
        match Operand::new(text) {
            Ok(operand) => {
                self.operands.push(operand);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove the operand at `index`, preserving the relative order of the
    /// rest. Returns false when `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index < self.operands.len() {
            self.operands.remove(index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.operands.clear();
    }

    #[must_use]
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }
}
