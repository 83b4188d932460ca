//! Runtime configuration
//!
//! Loaded from JSON; every field has a default so a partial file works.
//! Command-line flags override individual fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::circuit::RsaSetupParams;
use crate::errors::{Result, RsaSetupError};
use crate::gadgets::{AndFold, RemainderPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsaSetupConfig {
    pub bit_length: usize,
    pub remainder_policy: RemainderPolicy,
    pub and_fold: AndFold,
    /// Scratch directory for exported circuits and external tool runs
    pub working_dir: PathBuf,
    /// Where proof artifacts are saved; `None` keeps them in memory only
    pub proof_dir: Option<PathBuf>,
    /// Powers-of-tau file for the snarkjs backend
    pub ptau: PathBuf,
    /// snarkjs executable
    pub snarkjs: PathBuf,
}

impl Default for RsaSetupConfig {
    fn default() -> Self {
        let params = RsaSetupParams::default();
        Self {
            bit_length: params.bit_length,
            remainder_policy: params.remainder_policy,
            and_fold: params.and_fold,
            working_dir: PathBuf::from("build"),
            proof_dir: Some(PathBuf::from("proofs")),
            ptau: PathBuf::from("build/pot14_final.ptau"),
            snarkjs: PathBuf::from("snarkjs"),
        }
    }
}

impl RsaSetupConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| RsaSetupError::io(path, e))?;
        Self::from_json(&text)
    }

    pub fn params(&self) -> RsaSetupParams {
        RsaSetupParams {
            bit_length: self.bit_length,
            remainder_policy: self.remainder_policy,
            and_fold: self.and_fold,
        }
    }
}
