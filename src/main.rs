use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zk_rsa_setup::export::{export_circuit, export_witness, write_input_json, write_public_json};
use zk_rsa_setup::service::find_primes;
use zk_rsa_setup::{
    AndFold, Fr, Groth16Backend, ProofBackend, RemainderPolicy, RsaSetupCircuit, RsaSetupConfig,
    RsaSetupService, SnarkjsBackend,
};

#[derive(Parser)]
#[command(version, about = "Zero-knowledge proof of an honest RSA setup", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Operand width in bits
    #[arg(long, global = true)]
    bit_length: Option<usize>,

    #[arg(long, global = true, value_enum)]
    remainder_policy: Option<RemainderPolicy>,

    #[arg(long, global = true, value_enum)]
    and_fold: Option<AndFold>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prove and verify a valid setup in process, then show the rejections
    Demo,

    /// List primes the circuit accepts
    Primes {
        #[arg(long, default_value_t = 10)]
        count: usize,
    },

    /// Write the circuit as `.r1cs` and `.sym`
    Export {
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Compute a witness and write `input.json`, `witness.wtns`, `public.json`
    Witness {
        #[arg(long)]
        p: u64,
        #[arg(long)]
        q: u64,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Run setup, prove and verify through snarkjs
    Snarkjs {
        #[arg(long)]
        p: u64,
        #[arg(long)]
        q: u64,
    },
}

impl Cli {
    fn config(&self) -> Result<RsaSetupConfig> {
        let mut config = match &self.config {
            Some(path) => RsaSetupConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => RsaSetupConfig::default(),
        };
        if let Some(bit_length) = self.bit_length {
            config.bit_length = bit_length;
        }
        if let Some(policy) = self.remainder_policy {
            config.remainder_policy = policy;
        }
        if let Some(fold) = self.and_fold {
            config.and_fold = fold;
        }
        Ok(config)
    }
}

/// Valid proof, wrong modulus, composite input, equal inputs
fn run_demo<B: ProofBackend>(service: &mut RsaSetupService<B, StdRng>) -> Result<()> {
    let primes = service.find_primes(10);
    let &[p, q, ..] = primes.as_slice() else {
        bail!("fewer than two usable primes at this bit length");
    };
    info!(?primes, "found primes");

    let artifact = service.generate_proof(p, q).context("generating proof")?;
    let n = p * q;
    let valid = service.verify_proof(&artifact, n)?;
    info!(n, valid, "verified against the true modulus");

    let wrong = service.verify_proof(&artifact, n + 1)?;
    info!(n = n + 1, valid = wrong, "verified against a wrong modulus");
    if !valid || wrong {
        bail!("verification did not behave as expected");
    }

    // even, so it fails trial division by 2
    let composite = p - 1;
    for (p, q) in [(composite, q), (p, p)] {
        match service.generate_proof(p, q) {
            Err(err) if err.is_rejected_input() => info!("correctly rejected: {err}"),
            Err(err) => return Err(err.into()),
            Ok(_) => bail!("accepted invalid inputs p = {p}, q = {q}"),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;
    let params = config.params();

    match cli.command {
        Command::Demo => {
            let mut service =
                RsaSetupService::new(config, Groth16Backend::<ark_bn254::Bn254>::new(), StdRng::from_entropy())?;
            run_demo(&mut service)?;
        }
        Command::Primes { count } => {
            params.validate()?;
            let primes = find_primes(params.min_value(), params.max_value(), count);
            println!("{}", serde_json::to_string(&primes)?);
        }
        Command::Export { out_dir } => {
            let circuit = RsaSetupCircuit::<Fr>::new(params)?;
            let dir = out_dir.unwrap_or(config.working_dir);
            let files = export_circuit(circuit.description(), &dir, "rsa_verifier")?;
            info!(
                r1cs = %files.r1cs.display(),
                sym = %files.sym.display(),
                constraints = circuit.description().num_constraints(),
                "circuit exported"
            );
        }
        Command::Witness { p, q, out_dir } => {
            let circuit = RsaSetupCircuit::<Fr>::new(params)?;
            let witness = circuit.witness(p, q)?;
            let dir = out_dir.unwrap_or(config.working_dir);
            write_input_json(&RsaSetupCircuit::<Fr>::inputs(p, q), &dir.join("input.json"))?;
            export_witness(&witness, &dir.join("witness.wtns"))?;
            write_public_json(&witness.public_inputs, &dir.join("public.json"))?;
            info!(dir = %dir.display(), "witness written");
        }
        Command::Snarkjs { p, q } => {
            let backend = SnarkjsBackend::new(&config.working_dir, &config.ptau)
                .context("preparing snarkjs working directory")?
                .with_snarkjs(&config.snarkjs);
            let mut service = RsaSetupService::new(config, backend, StdRng::from_entropy())?;
            let artifact = service.generate_proof(p, q)?;
            let valid = service.verify_artifact(&artifact)?;
            info!(valid, public = ?artifact.public, "snarkjs round trip finished");
        }
    }
    Ok(())
}
