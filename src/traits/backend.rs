//! Proof system abstraction
//!
//! The circuit code stops at "constraint system + satisfying witness". Turning
//! those into keys and proofs is the job of a backend, either in-process
//! (`Groth16Backend`) or an external toolchain (`SnarkjsBackend`).

use ark_std::rand::{CryptoRng, RngCore};

use crate::errors::Result;
use crate::field::CircuitField;
use crate::r1cs::{CircuitDescription, Witness};

pub trait ProofBackend {
    type Field: CircuitField;
    type ProvingKey;
    type VerifyingKey;
    type Proof;

    /// Backend name for logs
    fn name(&self) -> &'static str;

    /// Circuit-specific key generation
    fn setup<R: RngCore + CryptoRng>(
        &self,
        circuit: &CircuitDescription<Self::Field>,
        rng: &mut R,
    ) -> Result<(Self::ProvingKey, Self::VerifyingKey)>;

    /// Prove that `witness` satisfies `circuit`
    fn prove<R: RngCore + CryptoRng>(
        &self,
        proving_key: &Self::ProvingKey,
        circuit: &CircuitDescription<Self::Field>,
        witness: &Witness<Self::Field>,
        rng: &mut R,
    ) -> Result<Self::Proof>;

    /// Check `proof` against the public-input vector
    fn verify(
        &self,
        verifying_key: &Self::VerifyingKey,
        public_inputs: &[Self::Field],
        proof: &Self::Proof,
    ) -> Result<bool>;

    /// Text encoding used in proof artifacts
    fn encode_proof(&self, proof: &Self::Proof) -> Result<String>;

    fn decode_proof(&self, encoded: &str) -> Result<Self::Proof>;
}
