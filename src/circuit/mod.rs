//! The RSA-setup circuit: `n = p·q` with `p, q` distinct, in range and
//! passing trial division

mod params;
mod rsa_setup;
mod validation;

pub use params::{RsaSetupParams, EXACT_BIT_LENGTH, MAX_BIT_LENGTH, MIN_BIT_LENGTH};
pub use rsa_setup::RsaSetupCircuit;
pub use validation::validate_inputs;
