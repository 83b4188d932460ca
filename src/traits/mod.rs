//! Trait abstractions
//!
//! - [`Gadget`]: composable sub-circuits over a [`ConstraintSystem`](crate::r1cs::ConstraintSystem)
//! - [`ProofBackend`]: the proving system that consumes a finished circuit
//!
//! Swapping the backend never touches circuit code, and tests can drive the
//! circuit without any backend at all.

pub mod backend;
pub mod gadget;

pub use backend::ProofBackend;
pub use gadget::Gadget;
