//! Fixed parameters of the RSA-setup circuit

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RsaSetupError};
use crate::gadgets::{AndFold, RemainderPolicy};

/// Narrowest supported operand width
pub const MIN_BIT_LENGTH: usize = 2;
/// Widest supported operand width; keeps `p·q` inside a `u64`
pub const MAX_BIT_LENGTH: usize = 32;
/// Widest operand width for which the prime table covers `sqrt(max_value)`
pub const EXACT_BIT_LENGTH: usize = 16;

/// Everything the circuit shape depends on
///
/// Two circuits built from equal params are identical, constraint for
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsaSetupParams {
    /// Operands lie in `[2^(bit_length-1), 2^bit_length - 1]`
    pub bit_length: usize,
    pub remainder_policy: RemainderPolicy,
    pub and_fold: AndFold,
}

impl Default for RsaSetupParams {
    fn default() -> Self {
        Self {
            bit_length: EXACT_BIT_LENGTH,
            remainder_policy: RemainderPolicy::default(),
            and_fold: AndFold::default(),
        }
    }
}

impl RsaSetupParams {
    pub fn new(bit_length: usize) -> Self {
        Self {
            bit_length,
            ..Self::default()
        }
    }

    pub fn with_remainder_policy(mut self, policy: RemainderPolicy) -> Self {
        self.remainder_policy = policy;
        self
    }

    pub fn with_and_fold(mut self, fold: AndFold) -> Self {
        self.and_fold = fold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_BIT_LENGTH..=MAX_BIT_LENGTH).contains(&self.bit_length) {
            return Err(RsaSetupError::InvalidParameter(format!(
                "bit_length must be in [{MIN_BIT_LENGTH}, {MAX_BIT_LENGTH}], got {}",
                self.bit_length
            )));
        }
        Ok(())
    }

    /// Whether trial division by the prime table is exact primality over
    /// the whole operand range
    pub fn is_exact(&self) -> bool {
        self.bit_length <= EXACT_BIT_LENGTH
    }

    /// `2^(bit_length-1)`, saturating for widths `validate` rejects
    pub fn min_value(&self) -> u64 {
        match self.bit_length.checked_sub(1) {
            Some(shift) => pow2(shift).unwrap_or(u64::MAX),
            None => 0,
        }
    }

    /// `2^bit_length - 1`, saturating for widths `validate` rejects
    pub fn max_value(&self) -> u64 {
        pow2(self.bit_length).map_or(u64::MAX, |pow| pow - 1)
    }
}

fn pow2(exp: usize) -> Option<u64> {
    u32::try_from(exp).ok().and_then(|exp| 1u64.checked_shl(exp))
}
