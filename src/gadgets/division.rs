//! Non-divisibility by a fixed constant
//!
//! `value = quotient·modulus + remainder`, with the result flag set when the
//! remainder is non-zero. The linear identity alone does not make the pair
//! canonical: any `(quotient - k, remainder + k·modulus)` satisfies it too.
//! [`RemainderPolicy`] decides whether that freedom is closed.

use serde::{Deserialize, Serialize};

use super::{IsZero, LessThan, Not, Num2Bits};
use crate::field::CircuitField;
use crate::r1cs::{ConstraintSystem, LinearCombination, Variable};
use crate::traits::Gadget;
use crate::witness::Hint;

/// Whether the hinted `(quotient, remainder)` pair is range-checked
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum RemainderPolicy {
    /// Only the linear identity is enforced. A prover may pick a
    /// non-canonical remainder and pass a divisible value off as indivisible.
    Unconstrained,
    /// Adds `quotient < 2^width`, `remainder < 2^k` and `remainder < modulus`
    /// where `k` is the bit length of the modulus. With `value < 2^width` the
    /// pair is then unique.
    #[default]
    RangeChecked,
}

/// `out = 1` iff `modulus` does not divide `value`
///
/// `width` bounds the value (and therefore the quotient); it is only used by
/// [`RemainderPolicy::RangeChecked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonDivisibility {
    modulus: u64,
    width: usize,
    policy: RemainderPolicy,
}

impl NonDivisibility {
    pub fn new(modulus: u64, width: usize, policy: RemainderPolicy) -> Self {
        assert!(modulus >= 2, "modulus must be at least 2");
        Self {
            modulus,
            width,
            policy,
        }
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Bits needed to hold `modulus`, and so any canonical remainder
    pub fn remainder_width(&self) -> usize {
        (u64::BITS - self.modulus.leading_zeros()) as usize
    }
}

impl<F: CircuitField> Gadget<F> for NonDivisibility {
    type Input = LinearCombination<F>;
    type Output = Variable;

    fn synthesize(&self, cs: &mut ConstraintSystem<F>, value: Self::Input) -> Variable {
        let quotient = cs.alloc(
            "quotient",
            Hint::Quotient {
                dividend: value.clone(),
                divisor: self.modulus,
            },
        );
        let remainder = cs.alloc(
            "remainder",
            Hint::Remainder {
                dividend: value.clone(),
                divisor: self.modulus,
            },
        );
        cs.enforce(
            "division",
            quotient.into(),
            LinearCombination::constant(F::from(self.modulus)),
            value - remainder,
        );

        if self.policy == RemainderPolicy::RangeChecked {
            // quotient·modulus + remainder must not wrap around the field.
            assert!(
                self.width + 64 < F::MODULUS_BIT_SIZE as usize,
                "value width {} too large for a range-checked division",
                self.width
            );
            let k = self.remainder_width();
            Num2Bits::new(self.width).instantiate(cs, "quotient_range", quotient.into());
            Num2Bits::new(k).instantiate(cs, "remainder_range", remainder.into());
            let below = LessThan::new(k).instantiate(
                cs,
                "remainder_lt",
                (
                    remainder.into(),
                    LinearCombination::constant(F::from(self.modulus)),
                ),
            );
            cs.enforce_equal("remainder_below_modulus", below.into(), LinearCombination::one());
        }

        let divisible = IsZero.instantiate(cs, "is_zero", remainder.into());
        Not.synthesize(cs, divisible)
    }
}
