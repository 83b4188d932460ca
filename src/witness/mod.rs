//! Witness computation
//!
//! Hints (`<--` style unconstrained assignments) are recorded as data while a
//! circuit is built and replayed by [`WitnessProgram`], keeping witness
//! generation independent from constraint checking.

mod hint;
mod inputs;
mod program;

pub use hint::Hint;
pub use inputs::CircuitInputs;
pub use program::WitnessProgram;
