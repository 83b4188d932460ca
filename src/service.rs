//! Proof orchestration
//!
//! Builds the circuit and keys once, then serves proof requests: validate
//! the secret inputs, compute and check the witness, prove, and package the
//! result. Secret inputs never leave this module.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use ark_std::rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::circuit::RsaSetupCircuit;
use crate::config::RsaSetupConfig;
use crate::errors::{Result, RsaSetupError};
use crate::export::circuit_digest;
use crate::field::CircuitField;
use crate::gadgets::{is_prime, passes_trial_division};
use crate::traits::ProofBackend;

/// What a prover hands to a verifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofArtifact {
    /// Backend that produced `proof`
    pub backend: String,
    /// Hex SHA3-256 of the `.r1cs` image the proof is for
    pub circuit_digest: String,
    /// Backend-specific proof encoding
    pub proof: String,
    /// Public signals as decimal strings, `[n]`
    pub public: Vec<String>,
}

impl ProofArtifact {
    /// Save as `proof_<unix-seconds>.json` under `dir`, never overwriting
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| RsaSetupError::io(dir, e))?;
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let mut path = dir.join(format!("proof_{secs}.json"));
        let mut suffix = 1;
        while path.exists() {
            path = dir.join(format!("proof_{secs}_{suffix}.json"));
            suffix += 1;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).map_err(|e| RsaSetupError::io(&path, e))?;
        Ok(path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| RsaSetupError::io(path, e))?;
        Ok(serde_json::from_str(&text)?)
    }
}

pub struct RsaSetupService<B: ProofBackend, R> {
    config: RsaSetupConfig,
    circuit: RsaSetupCircuit<B::Field>,
    digest: String,
    backend: B,
    proving_key: B::ProvingKey,
    verifying_key: B::VerifyingKey,
    rng: R,
}

impl<B, R> RsaSetupService<B, R>
where
    B: ProofBackend,
    R: RngCore + CryptoRng,
{
    /// Build the circuit for `config` and run key generation
    #[tracing::instrument(skip_all, name = "RsaSetupService::new", fields(backend = backend.name()))]
    pub fn new(config: RsaSetupConfig, backend: B, mut rng: R) -> Result<Self> {
        let circuit = RsaSetupCircuit::new(config.params())?;
        let digest = hex::encode(circuit_digest(circuit.description())?);
        let (proving_key, verifying_key) = backend.setup(circuit.description(), &mut rng)?;
        info!(
            constraints = circuit.description().num_constraints(),
            digest = %digest,
            "trusted setup complete"
        );
        Ok(Self {
            config,
            circuit,
            digest,
            backend,
            proving_key,
            verifying_key,
            rng,
        })
    }

    pub fn config(&self) -> &RsaSetupConfig {
        &self.config
    }

    pub fn circuit(&self) -> &RsaSetupCircuit<B::Field> {
        &self.circuit
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Hex digest of the circuit the keys were generated for
    pub fn circuit_digest(&self) -> &str {
        &self.digest
    }

    /// Prove knowledge of `(p, q)` behind `n = p·q`
    ///
    /// Inputs failing validation come back as
    /// [`RsaSetupError::RejectedInput`] without any proving work.
    #[tracing::instrument(skip_all, name = "RsaSetupService::generate_proof")]
    pub fn generate_proof(&mut self, p: u64, q: u64) -> Result<ProofArtifact> {
        let witness = self.circuit.witness(p, q)?;
        let proof = self.backend.prove(
            &self.proving_key,
            self.circuit.description(),
            &witness,
            &mut self.rng,
        )?;

        let artifact = ProofArtifact {
            backend: self.backend.name().to_string(),
            circuit_digest: self.digest.clone(),
            proof: self.backend.encode_proof(&proof)?,
            public: witness.public_inputs.iter().map(|v| v.to_decimal()).collect(),
        };
        info!(n = %artifact.public.join(","), "proof generated");

        if let Some(dir) = &self.config.proof_dir {
            let path = artifact.save(dir)?;
            info!(path = %path.display(), "proof saved");
        }
        Ok(artifact)
    }

    /// Check `artifact` against a claimed modulus `n`
    #[tracing::instrument(skip_all, name = "RsaSetupService::verify_proof", fields(n = n))]
    pub fn verify_proof(&self, artifact: &ProofArtifact, n: u64) -> Result<bool> {
        self.verify_against(artifact, &RsaSetupCircuit::<B::Field>::public_inputs(n))
    }

    /// Check `artifact` against the public signals it carries
    pub fn verify_artifact(&self, artifact: &ProofArtifact) -> Result<bool> {
        let public = artifact
            .public
            .iter()
            .map(|v| {
                <B::Field as CircuitField>::from_decimal(v)
                    .ok_or_else(|| RsaSetupError::Serialization(format!("bad public signal {v:?}")))
            })
            .collect::<Result<Vec<_>>>()?;
        self.verify_against(artifact, &public)
    }

    fn verify_against(&self, artifact: &ProofArtifact, public: &[B::Field]) -> Result<bool> {
        if artifact.backend != self.backend.name() || artifact.circuit_digest != self.digest {
            warn!(
                backend = %artifact.backend,
                digest = %artifact.circuit_digest,
                "proof was produced for a different circuit or backend"
            );
            return Ok(false);
        }
        let proof = self.backend.decode_proof(&artifact.proof)?;
        let valid = self.backend.verify(&self.verifying_key, public, &proof)?;
        info!(valid, "verification finished");
        Ok(valid)
    }

    /// First `count` primes in the operand range that the circuit accepts
    pub fn find_primes(&self, count: usize) -> Vec<u64> {
        find_primes(self.circuit.params().min_value(), self.circuit.params().max_value(), count)
    }
}

/// First `count` primes in `[min, max]` with no factor in the small-prime table
pub fn find_primes(min: u64, max: u64, count: usize) -> Vec<u64> {
    (min..=max)
        .filter(|&n| is_prime(n) && passes_trial_division(n))
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Groth16Backend;
    use crate::errors::InputViolation;
    use crate::field::Fr;
    use ark_bn254::Bn254;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(bit_length: usize) -> RsaSetupConfig {
        RsaSetupConfig {
            bit_length,
            proof_dir: None,
            ..RsaSetupConfig::default()
        }
    }

    #[test]
    fn test_find_primes() {
        assert_eq!(find_primes(32768, 65535, 3), vec![32771, 32779, 32783]);
        // every prime in [128, 255] is a table prime
        assert!(find_primes(128, 255, 1).is_empty());
        assert_eq!(find_primes(512, 1023, 2), vec![521, 523]);
    }

    #[test]
    fn test_prove_verify_and_reject() {
        let mut service =
            RsaSetupService::new(config(10), Groth16Backend::<Bn254>::new(), StdRng::seed_from_u64(0)).unwrap();
        let primes = service.find_primes(2);
        assert_eq!(primes, vec![521, 523]);

        let artifact = service.generate_proof(521, 523).unwrap();
        assert_eq!(artifact.public, vec!["272483".to_string()]);
        assert!(service.verify_proof(&artifact, 272_483).unwrap());
        assert!(!service.verify_proof(&artifact, 272_484).unwrap());
        assert!(service.verify_artifact(&artifact).unwrap());

        let err = service.generate_proof(522, 523).unwrap_err();
        assert!(matches!(
            err,
            RsaSetupError::RejectedInput(InputViolation::NotPrime { divisor: 2, .. })
        ));
        assert!(service.generate_proof(521, 521).unwrap_err().is_rejected_input());
    }

    #[test]
    fn test_artifact_for_other_circuit_is_rejected() {
        let mut service =
            RsaSetupService::new(config(10), Groth16Backend::<Bn254>::new(), StdRng::seed_from_u64(0)).unwrap();
        let mut artifact = service.generate_proof(521, 523).unwrap();
        artifact.circuit_digest = hex::encode([0u8; 32]);
        assert!(!service.verify_proof(&artifact, 272_483).unwrap());
    }

    #[test]
    fn test_artifact_save_and_load() {
        let dir = std::env::temp_dir().join(format!("zk-rsa-setup-proofs-{}", std::process::id()));
        let artifact = ProofArtifact {
            backend: "groth16".into(),
            circuit_digest: "00".into(),
            proof: "abcd".into(),
            public: vec![Fr::from(272_483u64).to_decimal()],
        };
        let first = artifact.save(&dir).unwrap();
        let second = artifact.save(&dir).unwrap();
        assert_ne!(first, second);
        assert!(first.file_name().unwrap().to_string_lossy().starts_with("proof_"));
        assert_eq!(ProofArtifact::load(&first).unwrap(), artifact);

        let text = std::fs::read_to_string(&first).unwrap();
        assert!(!text.contains("\"p\""));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
