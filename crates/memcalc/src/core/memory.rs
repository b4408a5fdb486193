//! Memory register
//!
//! A single numeric slot that survives the transient clear. The value is
//! kept as display text so recall puts exactly what the user saw back into
//! an operand buffer.

use serde::{Deserialize, Serialize};

use crate::core::{arithmetic, CalcResult};

/// The M+/M-/MR/MC register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryRegister {
    value: String,
}

impl Default for MemoryRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRegister {
    /// Value held after construction and after [`MemoryRegister::clear`]
    pub const ZERO: &'static str = "0";

    /// Creates a register holding zero
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Self::ZERO.to_string(),
        }
    }

    /// Returns the stored value as text
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true while the register holds zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == Self::ZERO
    }

    /// Adds `amount` to the register.
    ///
    /// On failure the register keeps its previous value.
    pub fn add(&mut self, amount: &str) -> CalcResult<()> {
        self.value = arithmetic::add(&self.value, amount)?;
        Ok(())
    }

    /// Subtracts `amount` from the register.
    ///
    /// On failure the register keeps its previous value.
    pub fn subtract(&mut self, amount: &str) -> CalcResult<()> {
        self.value = arithmetic::subtract(&self.value, amount)?;
        Ok(())
    }

    /// Resets the register to zero
    pub fn clear(&mut self) {
        self.value = Self::ZERO.to_string();
    }
}
