//! Zero test and equality

use crate::field::CircuitField;
use crate::r1cs::{ConstraintSystem, LinearCombination, Variable};
use crate::traits::Gadget;
use crate::witness::Hint;

/// `out = 1` iff `x = 0`
///
/// With helper `inv` (`1/x`, or `0` for `x = 0`):
/// `x·inv = 1 - out` and `x·out = 0`. A non-zero `x` forces `out = 0` through
/// the second constraint; `x = 0` forces `out = 1` through the first whatever
/// `inv` is.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsZero;

impl<F: CircuitField> Gadget<F> for IsZero {
    type Input = LinearCombination<F>;
    type Output = Variable;

    fn synthesize(&self, cs: &mut ConstraintSystem<F>, x: Self::Input) -> Variable {
        let inv = cs.alloc("inv", Hint::InverseOrZero(x.clone()));
        let out = cs.alloc("out", Hint::IsZero(x.clone()));
        cs.enforce(
            "x_times_inv",
            x.clone(),
            inv.into(),
            LinearCombination::one() - out,
        );
        cs.enforce("x_times_out", x, out.into(), LinearCombination::zero());
        out
    }
}

/// `out = 1` iff `a = b`, as [`IsZero`] of `a - b`
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEqual;

impl<F: CircuitField> Gadget<F> for IsEqual {
    type Input = (LinearCombination<F>, LinearCombination<F>);
    type Output = Variable;

    fn synthesize(&self, cs: &mut ConstraintSystem<F>, (a, b): Self::Input) -> Variable {
        IsZero.instantiate(cs, "is_zero", a - b)
    }
}
