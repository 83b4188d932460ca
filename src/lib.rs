//! # zk-rsa-setup: proving an RSA modulus was set up honestly
//!
//! An R1CS circuit and gadget library over a prime field. It proves, without
//! revealing `p` and `q`, that both lie in a fixed bit range, both pass trial
//! division by the primes up to 251, `p ≠ q`, and the public `n = p·q`.
//!
//! ## Structure
//!
//! - `field`: `CircuitField` over arkworks prime fields (BN254, BLS12-381)
//! - `r1cs`: signals, linear combinations, the constraint-system builder and
//!   the satisfaction checker
//! - `witness`: hints and the witness program
//! - `gadgets`: zero test, equality, bit decomposition, comparators, trial
//!   division, primality, boolean folds
//! - `circuit`: the composite RSA-setup circuit and input pre-validation
//! - `export`: iden3 `.r1cs`/`.wtns`, `.sym` and snarkjs JSON files
//! - `backend`: Groth16 in process, or through snarkjs
//! - `service`: setup, proof generation and verification
//! - `traits`: `Gadget` and `ProofBackend`
//!
//! ## Example
//!
//! ```ignore
//! let circuit = RsaSetupCircuit::<Fr>::new(RsaSetupParams::default())?;
//! let witness = circuit.witness(32771, 32779)?;
//! assert_eq!(RsaSetupCircuit::public_output(&witness), Some(Fr::from(1_074_200_609u64)));
//! ```

pub mod backend;
pub mod circuit;
pub mod config;
pub mod errors;
pub mod export;
pub mod field;
pub mod gadgets;
pub mod r1cs;
pub mod service;
pub mod traits;
pub mod witness;

// Re-exports
pub use backend::{Groth16Backend, SnarkjsBackend};
pub use circuit::{validate_inputs, RsaSetupCircuit, RsaSetupParams};
pub use config::RsaSetupConfig;
pub use errors::{InputViolation, Result, RsaSetupError};
pub use field::{CircuitField, Fr};
pub use gadgets::{AndFold, RemainderPolicy};
pub use r1cs::{CircuitDescription, Witness};
pub use service::{ProofArtifact, RsaSetupService};
pub use traits::{Gadget, ProofBackend};
