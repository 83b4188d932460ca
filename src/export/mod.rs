//! Files consumed by external circom/snarkjs tooling
//!
//! The circuit is written as `<stem>.r1cs` plus `<stem>.sym`; a witness as
//! `.wtns`; prover inputs as `input.json` and the public vector as
//! `public.json`.

mod r1cs_file;
mod sym_file;
mod wtns_file;

pub use r1cs_file::{r1cs_bytes, write_r1cs};
pub use sym_file::write_sym;
pub use wtns_file::write_wtns;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use sha3::{Digest, Sha3_256};
use tracing::debug;

use crate::errors::{Result, RsaSetupError};
use crate::field::CircuitField;
use crate::r1cs::{CircuitDescription, Witness};
use crate::witness::CircuitInputs;

/// Paths written by [`export_circuit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitFiles {
    pub r1cs: PathBuf,
    pub sym: PathBuf,
}

/// Binds proofs to one exact constraint system
pub fn circuit_digest<F: CircuitField>(circuit: &CircuitDescription<F>) -> Result<[u8; 32]> {
    let image = r1cs_bytes(circuit).map_err(|e| RsaSetupError::Serialization(e.to_string()))?;
    let mut hasher = Sha3_256::new();
    hasher.update(image);
    Ok(hasher.finalize().into())
}

fn write_file(path: &Path, write: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>) -> Result<()> {
    let file = File::create(path).map_err(|e| RsaSetupError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| RsaSetupError::io(path, e))?;
    debug!(path = %path.display(), "wrote file");
    Ok(())
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| RsaSetupError::io(dir, e))
}

#[tracing::instrument(skip_all, name = "export_circuit", fields(dir = %dir.display(), stem = stem))]
pub fn export_circuit<F: CircuitField>(circuit: &CircuitDescription<F>, dir: &Path, stem: &str) -> Result<CircuitFiles> {
    create_dir(dir)?;
    let files = CircuitFiles {
        r1cs: dir.join(format!("{stem}.r1cs")),
        sym: dir.join(format!("{stem}.sym")),
    };
    write_file(&files.r1cs, |out| write_r1cs(circuit, out))?;
    write_file(&files.sym, |out| write_sym(circuit, out))?;
    Ok(files)
}

pub fn export_witness<F: CircuitField>(witness: &Witness<F>, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        create_dir(dir)?;
    }
    write_file(path, |out| write_wtns(witness, out))
}

/// `{"p": "<dec>", "q": "<dec>"}`
pub fn write_input_json(inputs: &CircuitInputs, path: &Path) -> Result<()> {
    let json = inputs.to_json()?;
    write_file(path, |out| out.write_all(json.as_bytes()))
}

/// Public signals as decimal strings, e.g. `["1074200609"]`
pub fn public_json<F: CircuitField>(public_inputs: &[F]) -> Result<String> {
    let values: Vec<String> = public_inputs.iter().map(|v| v.to_decimal()).collect();
    Ok(serde_json::to_string(&values)?)
}

pub fn write_public_json<F: CircuitField>(public_inputs: &[F], path: &Path) -> Result<()> {
    let json = public_json(public_inputs)?;
    write_file(path, |out| out.write_all(json.as_bytes()))
}

/// Parse a `public.json` array back into field elements
pub fn parse_public_json<F: CircuitField>(json: &str) -> Result<Vec<F>> {
    let values: Vec<String> = serde_json::from_str(json)?;
    values
        .iter()
        .map(|v| {
            F::from_decimal(v).ok_or_else(|| RsaSetupError::Serialization(format!("bad public signal {v:?}")))
        })
        .collect()
}
