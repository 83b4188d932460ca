//! Bit decomposition, the range-proof primitive
//!
//! A field has no ordering; the only way to learn that `x < 2^n` is to exhibit
//! `n` boolean signals whose weighted sum is `x`. Every comparator in this
//! crate reduces to this gadget.

use crate::field::CircuitField;
use crate::r1cs::{ConstraintSystem, LinearCombination, Variable};
use crate::traits::Gadget;
use crate::witness::Hint;

/// Decompose `x` into `width` little-endian bits, proving `0 <= x < 2^width`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Num2Bits {
    width: usize,
}

impl Num2Bits {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl<F: CircuitField> Gadget<F> for Num2Bits {
    type Input = LinearCombination<F>;
    type Output = Vec<Variable>;

    fn synthesize(&self, cs: &mut ConstraintSystem<F>, x: Self::Input) -> Vec<Variable> {
        // With width >= the modulus size the sum can wrap and stops being a range check.
        assert!(
            self.width < F::MODULUS_BIT_SIZE as usize,
            "Num2Bits width {} does not fit below the field modulus",
            self.width
        );

        let bits: Vec<Variable> = (0..self.width)
            .map(|index| {
                let name = format!("bits[{index}]");
                let bit = cs.alloc(
                    &name,
                    Hint::Bit {
                        source: x.clone(),
                        index,
                    },
                );
                cs.enforce_boolean(&name, bit);
                bit
            })
            .collect();

        cs.enforce_equal("reconstruct", bits_to_num(&bits), x);
        bits
    }
}

/// Σ bits[i]·2^i
pub fn bits_to_num<F: CircuitField>(bits: &[Variable]) -> LinearCombination<F> {
    let mut lc = LinearCombination::zero();
    let mut weight = F::one();
    for bit in bits {
        lc.push(*bit, weight);
        weight = weight + weight;
    }
    lc
}
