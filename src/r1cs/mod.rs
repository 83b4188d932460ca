//! R1CS (Rank-1 Constraint System) representations and verification
//!
//! (A · z) ◦ (B · z) = (C · z) where z = (1, io, w)
//!
//! Circuits are written against [`ConstraintSystem`], which tracks named
//! signals and their witness hints, and frozen into a [`CircuitDescription`]
//! whose matrices are checked by [`R1CSInstance`].

mod constraint_system;
mod description;
mod instance;
mod linear_combination;
mod sparse_matrix;
mod witness;

pub use constraint_system::{Constraint, ConstraintSystem, SignalInfo, SignalKind};
pub use description::CircuitDescription;
pub use instance::R1CSInstance;
pub use linear_combination::{LinearCombination, Variable};
pub use sparse_matrix::SparseMatrix;
pub use witness::Witness;
