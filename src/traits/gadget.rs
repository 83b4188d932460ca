//! Reusable sub-circuit interface

use crate::field::CircuitField;
use crate::r1cs::ConstraintSystem;

/// A sub-circuit with a fixed input/output signal interface
///
/// `synthesize` only adds signals, hints and constraints to `cs`; it must not
/// look at witness values, so the same circuit shape is produced for every
/// proof request. Gadgets compose by passing one gadget's output signals as
/// another's input and never share mutable state.
pub trait Gadget<F: CircuitField> {
    type Input;
    type Output;

    fn synthesize(&self, cs: &mut ConstraintSystem<F>, input: Self::Input) -> Self::Output;

    /// Synthesize inside namespace `name`
    fn instantiate(&self, cs: &mut ConstraintSystem<F>, name: &str, input: Self::Input) -> Self::Output {
        cs.namespace(name, |cs| self.synthesize(cs, input))
    }
}
