//! The composite RSA-setup circuit
//!
//! Private `p, q`, public `n`:
//!
//! ```text
//! n      = p·q
//! valid  = range_p · range_q · different · prime_p · prime_q
//! valid  = 1
//! ```
//!
//! All five terms are always computed; a bad input has no satisfying
//! witness rather than an early exit.

use tracing::{debug, warn};

use super::{validate_inputs, RsaSetupParams};
use crate::errors::Result;
use crate::field::{CircuitField, Fr};
use crate::gadgets::{
    Conjunction, GreaterEqThan, IsEqual, LessEqThan, Not, Num2Bits, TrialDivisionPrimality,
};
use crate::r1cs::{CircuitDescription, ConstraintSystem, LinearCombination, Variable, Witness};
use crate::traits::Gadget;
use crate::witness::{CircuitInputs, Hint};

#[derive(Debug, Clone)]
pub struct RsaSetupCircuit<F: CircuitField = Fr> {
    params: RsaSetupParams,
    description: CircuitDescription<F>,
}

/// `min_value <= x <= max_value`, with `x` first proven to fit `bit_length` bits
fn range_check<F: CircuitField>(
    cs: &mut ConstraintSystem<F>,
    params: &RsaSetupParams,
    x: Variable,
) -> Variable {
    let width = params.bit_length;
    Num2Bits::new(width).instantiate(cs, "bits", x.into());
    let min = LinearCombination::constant(F::from(params.min_value()));
    let max = LinearCombination::constant(F::from(params.max_value()));
    let above = GreaterEqThan::new(width).instantiate(cs, "ge_min", (x.into(), min));
    let below = LessEqThan::new(width).instantiate(cs, "le_max", (x.into(), max));
    Conjunction::new(params.and_fold).instantiate(cs, "both", vec![above, below])
}

impl<F: CircuitField> RsaSetupCircuit<F> {
    #[tracing::instrument(skip_all, name = "RsaSetupCircuit::new", fields(bit_length = params.bit_length, field = F::field_name()))]
    pub fn new(params: RsaSetupParams) -> Result<Self> {
        params.validate()?;
        if !params.is_exact() {
            warn!(
                bit_length = params.bit_length,
                "prime table stops at 251; composites with larger factors will pass"
            );
        }

        let mut cs = ConstraintSystem::<F>::new();
        let p = cs.alloc_private_input("p");
        let q = cs.alloc_private_input("q");

        let n = cs.alloc_output("n", Hint::Product(p.into(), q.into()));
        cs.enforce("n", p.into(), q.into(), n.into());

        let range_p = cs.namespace("range_p", |cs| range_check(cs, &params, p));
        let range_q = cs.namespace("range_q", |cs| range_check(cs, &params, q));

        let equal = IsEqual.instantiate(&mut cs, "equal", (p.into(), q.into()));
        let different = Not.instantiate(&mut cs, "different", equal);

        let primality =
            TrialDivisionPrimality::new(params.bit_length, params.remainder_policy, params.and_fold);
        let prime_p = primality.instantiate(&mut cs, "prime_p", p.into());
        let prime_q = primality.instantiate(&mut cs, "prime_q", q.into());

        let valid = Conjunction::new(params.and_fold).instantiate(
            &mut cs,
            "valid",
            vec![range_p, range_q, different, prime_p, prime_q],
        );
        cs.enforce_equal("valid", valid.into(), LinearCombination::one());

        let description = cs.finalize();
        debug!(
            constraints = description.num_constraints(),
            signals = description.num_vars(),
            "built RSA-setup circuit"
        );

        Ok(Self {
            params,
            description,
        })
    }

    pub fn params(&self) -> &RsaSetupParams {
        &self.params
    }

    pub fn description(&self) -> &CircuitDescription<F> {
        &self.description
    }

    /// Named inputs in the form the witness program expects
    pub fn inputs(p: u64, q: u64) -> CircuitInputs {
        CircuitInputs::from_pairs([("p", p), ("q", q)])
    }

    /// Validate `(p, q)`, compute the witness and check it against every
    /// constraint
    #[tracing::instrument(skip_all, name = "RsaSetupCircuit::witness")]
    pub fn witness(&self, p: u64, q: u64) -> Result<Witness<F>> {
        validate_inputs(&self.params, p, q)?;
        let witness = self.description.program().generate(&Self::inputs(p, q))?;
        self.description.check(&witness)?;
        Ok(witness)
    }

    /// Public-input vector a verifier checks a proof against
    pub fn public_inputs(n: u64) -> Vec<F> {
        vec![F::from(n)]
    }

    /// The exposed `n` of a witness
    pub fn public_output(witness: &Witness<F>) -> Option<F> {
        witness.public_inputs.first().copied()
    }
}
