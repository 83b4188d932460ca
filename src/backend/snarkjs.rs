//! Groth16 through the external snarkjs CLI
//!
//! Every call runs with an explicit working directory and reads or writes
//! only files inside it. The powers-of-tau file must already exist; this
//! backend never downloads one.

use std::path::{Path, PathBuf};
use std::process::Command;

use ark_std::rand::{CryptoRng, RngCore};
use tracing::{debug, info};

use crate::errors::{Result, RsaSetupError};
use crate::export::{export_circuit, export_witness, write_public_json};
use crate::field::Fr;
use crate::r1cs::{CircuitDescription, Witness};
use crate::traits::ProofBackend;

const CIRCUIT_STEM: &str = "rsa_verifier";

#[derive(Debug, Clone)]
pub struct SnarkjsBackend {
    working_dir: PathBuf,
    ptau: PathBuf,
    snarkjs: PathBuf,
}

/// Captured result of one tool invocation
#[derive(Debug)]
struct ToolOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

impl SnarkjsBackend {
    /// `ptau` is resolved to an absolute path so the working directory does
    /// not affect it.
    pub fn new(working_dir: impl Into<PathBuf>, ptau: impl AsRef<Path>) -> Result<Self> {
        let working_dir = working_dir.into();
        std::fs::create_dir_all(&working_dir).map_err(|e| RsaSetupError::io(&working_dir, e))?;
        let ptau = ptau
            .as_ref()
            .canonicalize()
            .map_err(|e| RsaSetupError::io(ptau.as_ref(), e))?;
        Ok(Self {
            working_dir,
            ptau,
            snarkjs: PathBuf::from("snarkjs"),
        })
    }

    /// Use a specific snarkjs executable instead of the one on `PATH`
    pub fn with_snarkjs(mut self, snarkjs: impl Into<PathBuf>) -> Self {
        self.snarkjs = snarkjs.into();
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.working_dir.join(file)
    }

    #[tracing::instrument(skip(self), name = "snarkjs")]
    fn run(&self, args: &[&str]) -> Result<ToolOutput> {
        let output = Command::new(&self.snarkjs)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| RsaSetupError::ExternalTool {
                tool: self.snarkjs.display().to_string(),
                status: "not started".to_string(),
                stderr: e.to_string(),
            })?;
        debug!(status = %output.status, "snarkjs finished");
        Ok(ToolOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Run and treat a non-zero exit as fatal
    fn run_checked(&self, args: &[&str]) -> Result<ToolOutput> {
        let output = self.run(args)?;
        if !output.success {
            return Err(RsaSetupError::ExternalTool {
                tool: format!("snarkjs {}", args[..2.min(args.len())].join(" ")),
                status: "failed".to_string(),
                stderr: if output.stderr.is_empty() {
                    output.stdout
                } else {
                    output.stderr
                },
            });
        }
        Ok(output)
    }

    fn read_json(&self, file: &str) -> Result<serde_json::Value> {
        let path = self.path(file);
        let text = std::fs::read_to_string(&path).map_err(|e| RsaSetupError::io(&path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write_json(&self, file: &str, value: &serde_json::Value) -> Result<()> {
        let path = self.path(file);
        let text = serde_json::to_string(value)?;
        std::fs::write(&path, text).map_err(|e| RsaSetupError::io(&path, e))
    }
}

impl ProofBackend for SnarkjsBackend {
    type Field = Fr;
    /// `.zkey` inside the working directory
    type ProvingKey = PathBuf;
    /// `verification_key.json` inside the working directory
    type VerifyingKey = PathBuf;
    /// Contents of snarkjs' `proof.json`
    type Proof = serde_json::Value;

    fn name(&self) -> &'static str {
        "snarkjs"
    }

    /// snarkjs draws its own randomness; `rng` is unused.
    fn setup<R: RngCore + CryptoRng>(
        &self,
        circuit: &CircuitDescription<Fr>,
        _rng: &mut R,
    ) -> Result<(PathBuf, PathBuf)> {
        let files = export_circuit(circuit, &self.working_dir, CIRCUIT_STEM)?;
        let r1cs = files.r1cs.display().to_string();
        let ptau = self.ptau.display().to_string();
        let zkey = self.path("circuit_0000.zkey");
        let vkey = self.path("verification_key.json");

        info!(working_dir = %self.working_dir.display(), "running snarkjs trusted setup");
        self.run_checked(&["groth16", "setup", &r1cs, &ptau, &zkey.display().to_string()])?;
        self.run_checked(&[
            "zkey",
            "export",
            "verificationkey",
            &zkey.display().to_string(),
            &vkey.display().to_string(),
        ])?;
        Ok((zkey, vkey))
    }

    fn prove<R: RngCore + CryptoRng>(
        &self,
        proving_key: &PathBuf,
        circuit: &CircuitDescription<Fr>,
        witness: &Witness<Fr>,
        _rng: &mut R,
    ) -> Result<serde_json::Value> {
        circuit.check(witness)?;
        let wtns = self.path("witness.wtns");
        export_witness(witness, &wtns)?;
        self.run_checked(&[
            "groth16",
            "prove",
            &proving_key.display().to_string(),
            &wtns.display().to_string(),
            "proof.json",
            "public.json",
        ])?;
        self.read_json("proof.json")
    }

    fn verify(&self, verifying_key: &PathBuf, public_inputs: &[Fr], proof: &serde_json::Value) -> Result<bool> {
        write_public_json(public_inputs, &self.path("public_to_verify.json"))?;
        self.write_json("proof_to_verify.json", proof)?;
        let output = self.run(&[
            "groth16",
            "verify",
            &verifying_key.display().to_string(),
            "public_to_verify.json",
            "proof_to_verify.json",
        ])?;

        if output.stdout.contains("OK!") {
            return Ok(true);
        }
        let rejected = output.stdout.contains("Invalid proof") || output.stderr.contains("Invalid proof");
        if output.success || rejected {
            return Ok(false);
        }
        Err(RsaSetupError::ExternalTool {
            tool: "snarkjs groth16 verify".to_string(),
            status: "failed".to_string(),
            stderr: output.stderr,
        })
    }

    fn encode_proof(&self, proof: &serde_json::Value) -> Result<String> {
        Ok(serde_json::to_string(proof)?)
    }

    fn decode_proof(&self, encoded: &str) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(encoded)?)
    }
}
