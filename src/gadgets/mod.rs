//! Gadget library
//!
//! Every gadget is a [`Gadget`](crate::traits::Gadget) over a
//! [`ConstraintSystem`](crate::r1cs::ConstraintSystem). Outputs are `{0,1}`
//! flags unless stated otherwise.

mod bits;
mod comparators;
mod division;
mod logic;
mod primality;
mod zero;

pub use bits::{bits_to_num, Num2Bits};
pub use comparators::{GreaterEqThan, LessEqThan, LessThan};
pub use division::{NonDivisibility, RemainderPolicy};
pub use logic::{AndFold, Conjunction, Not};
pub use primality::{
    is_prime, passes_trial_division, smallest_table_factor, TrialDivisionPrimality, SMALL_PRIMES,
};
pub use zero::{IsEqual, IsZero};
