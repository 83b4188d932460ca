//! Comparators built on bit decomposition
//!
//! All three assume both operands are already known to be below `2^width`.
//! They do not check it themselves; callers that cannot guarantee the range
//! must run [`Num2Bits`] on the operands first.

use super::{Not, Num2Bits};
use crate::field::CircuitField;
use crate::r1cs::{ConstraintSystem, LinearCombination, Variable};
use crate::traits::Gadget;
use crate::witness::Hint;

/// `out = 1` iff `a < b`
///
/// Decomposes `a + 2^width - b` into `width + 1` bits. The top bit is set
/// exactly when `a >= b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessThan {
    width: usize,
}

impl LessThan {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl<F: CircuitField> Gadget<F> for LessThan {
    type Input = (LinearCombination<F>, LinearCombination<F>);
    type Output = Variable;

    fn synthesize(&self, cs: &mut ConstraintSystem<F>, (a, b): Self::Input) -> Variable {
        let shifted = a + LinearCombination::constant(F::power_of_two(self.width)) - b;
        let bits = Num2Bits::new(self.width + 1).instantiate(cs, "n2b", shifted);

        let lt = LinearCombination::one() - bits[self.width];
        let out = cs.alloc("out", Hint::Linear(lt.clone()));
        cs.enforce_equal("out", lt, out.into());
        out
    }
}

/// `out = 1` iff `a >= b`, i.e. `1 - LessThan(a, b)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreaterEqThan {
    width: usize,
}

impl GreaterEqThan {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl<F: CircuitField> Gadget<F> for GreaterEqThan {
    type Input = (LinearCombination<F>, LinearCombination<F>);
    type Output = Variable;

    fn synthesize(&self, cs: &mut ConstraintSystem<F>, (a, b): Self::Input) -> Variable {
        let lt = LessThan::new(self.width).instantiate(cs, "lt", (a, b));
        Not.synthesize(cs, lt)
    }
}

/// `out = 1` iff `a <= b`, i.e. `1 - LessThan(b, a)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessEqThan {
    width: usize,
}

impl LessEqThan {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl<F: CircuitField> Gadget<F> for LessEqThan {
    type Input = (LinearCombination<F>, LinearCombination<F>);
    type Output = Variable;

    fn synthesize(&self, cs: &mut ConstraintSystem<F>, (a, b): Self::Input) -> Variable {
        let lt = LessThan::new(self.width).instantiate(cs, "lt", (b, a));
        Not.synthesize(cs, lt)
    }
}
