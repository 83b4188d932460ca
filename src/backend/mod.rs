//! Proof backends
//!
//! - [`Groth16Backend`]: arkworks Groth16, in process
//! - [`SnarkjsBackend`]: the circom/snarkjs toolchain, driven through files

mod groth16;
mod snarkjs;

pub use groth16::Groth16Backend;
pub use snarkjs::SnarkjsBackend;
