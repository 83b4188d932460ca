//! In-process Groth16 over arkworks
//!
//! A [`CircuitDescription`] is replayed into an `ark_relations` constraint
//! system: public signals become instance variables (in canonical order, so
//! the instance vector is exactly `[n]`), everything else a witness variable.

use std::marker::PhantomData;

use ark_bn254::Bn254;
use ark_ec::pairing::Pairing;
use ark_ff::Field;
use ark_groth16::{Groth16, Proof, ProvingKey, VerifyingKey};
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystemRef, LinearCombination as ArkLinearCombination,
    SynthesisError, Variable as ArkVariable,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_snark::{CircuitSpecificSetupSNARK, SNARK};
use ark_std::rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::errors::{Result, RsaSetupError};
use crate::field::CircuitField;
use crate::r1cs::{CircuitDescription, LinearCombination, Witness};
use crate::traits::ProofBackend;

/// Adapter feeding a frozen circuit to arkworks
///
/// `witness` is `None` during key generation, where arkworks never asks for
/// values.
struct Synthesizer<'a, F: Field> {
    circuit: &'a CircuitDescription<F>,
    witness: Option<&'a Witness<F>>,
}

fn to_ark<F: Field>(lc: &LinearCombination<F>, vars: &[ArkVariable]) -> ArkLinearCombination<F> {
    ArkLinearCombination(
        lc.terms()
            .iter()
            .map(|(var, coeff)| (*coeff, vars[var.index()]))
            .collect(),
    )
}

impl<F: CircuitField> ConstraintSynthesizer<F> for Synthesizer<'_, F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> std::result::Result<(), SynthesisError> {
        let value = |index: usize| {
            self.witness
                .and_then(|w| w.value(index))
                .ok_or(SynthesisError::AssignmentMissing)
        };

        let mut vars = Vec::with_capacity(self.circuit.num_vars());
        vars.push(ArkVariable::One);
        for (index, signal) in self.circuit.signals().iter().enumerate().skip(1) {
            let var = if signal.kind.is_public() {
                cs.new_input_variable(|| value(index))?
            } else {
                cs.new_witness_variable(|| value(index))?
            };
            vars.push(var);
        }

        for constraint in self.circuit.constraints() {
            cs.enforce_constraint(
                to_ark(&constraint.a, &vars),
                to_ark(&constraint.b, &vars),
                to_ark(&constraint.c, &vars),
            )?;
        }
        Ok(())
    }
}

/// Groth16 on pairing `E`, BN254 by default
#[derive(Debug, Clone, Copy)]
pub struct Groth16Backend<E: Pairing = Bn254> {
    _pairing: PhantomData<E>,
}

impl<E: Pairing> Default for Groth16Backend<E> {
    fn default() -> Self {
        Self {
            _pairing: PhantomData,
        }
    }
}

impl<E: Pairing> Groth16Backend<E> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Pairing> ProofBackend for Groth16Backend<E>
where
    E::ScalarField: CircuitField,
{
    type Field = E::ScalarField;
    type ProvingKey = ProvingKey<E>;
    type VerifyingKey = VerifyingKey<E>;
    type Proof = Proof<E>;

    fn name(&self) -> &'static str {
        "groth16"
    }

    #[tracing::instrument(skip_all, name = "Groth16Backend::setup", fields(constraints = circuit.num_constraints()))]
    fn setup<R: RngCore + CryptoRng>(
        &self,
        circuit: &CircuitDescription<E::ScalarField>,
        rng: &mut R,
    ) -> Result<(ProvingKey<E>, VerifyingKey<E>)> {
        let keys = Groth16::<E>::circuit_specific_setup(
            Synthesizer {
                circuit,
                witness: None,
            },
            rng,
        )?;
        debug!("generated Groth16 keys");
        Ok(keys)
    }

    #[tracing::instrument(skip_all, name = "Groth16Backend::prove")]
    fn prove<R: RngCore + CryptoRng>(
        &self,
        proving_key: &ProvingKey<E>,
        circuit: &CircuitDescription<E::ScalarField>,
        witness: &Witness<E::ScalarField>,
        rng: &mut R,
    ) -> Result<Proof<E>> {
        // Groth16 would happily prove garbage that then fails to verify.
        circuit.check(witness)?;
        let proof = Groth16::<E>::prove(
            proving_key,
            Synthesizer {
                circuit,
                witness: Some(witness),
            },
            rng,
        )?;
        Ok(proof)
    }

    #[tracing::instrument(skip_all, name = "Groth16Backend::verify")]
    fn verify(
        &self,
        verifying_key: &VerifyingKey<E>,
        public_inputs: &[E::ScalarField],
        proof: &Proof<E>,
    ) -> Result<bool> {
        if public_inputs.len() + 1 != verifying_key.gamma_abc_g1.len() {
            return Err(RsaSetupError::R1CSVerificationFailed(format!(
                "expected {} public inputs, got {}",
                verifying_key.gamma_abc_g1.len() - 1,
                public_inputs.len()
            )));
        }
        Ok(Groth16::<E>::verify(verifying_key, public_inputs, proof)?)
    }

    fn encode_proof(&self, proof: &Proof<E>) -> Result<String> {
        let mut bytes = Vec::new();
        proof.serialize_compressed(&mut bytes)?;
        Ok(hex::encode(bytes))
    }

    fn decode_proof(&self, encoded: &str) -> Result<Proof<E>> {
        let bytes = hex::decode(encoded).map_err(|e| RsaSetupError::Serialization(e.to_string()))?;
        Ok(Proof::<E>::deserialize_compressed(bytes.as_slice())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Fr;
    use crate::r1cs::ConstraintSystem;
    use crate::witness::{CircuitInputs, Hint};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// y = x³ + x + 5, with y public
    fn cubic() -> CircuitDescription<Fr> {
        let mut cs = ConstraintSystem::<Fr>::new();
        let x = cs.alloc_private_input("x");
        let x2 = cs.alloc("x2", Hint::Product(x.into(), x.into()));
        let x3 = cs.alloc("x3", Hint::Product(x2.into(), x.into()));
        let rhs = LinearCombination::from(x3) + x + LinearCombination::constant(Fr::from(5u64));
        let y = cs.alloc_output("y", Hint::Linear(rhs.clone()));
        cs.enforce("x2", x.into(), x.into(), x2.into());
        cs.enforce("x3", x2.into(), x.into(), x3.into());
        cs.enforce_equal("y", rhs, y.into());
        cs.finalize()
    }

    #[test]
    fn test_prove_and_verify() {
        let mut rng = StdRng::seed_from_u64(0);
        let circuit = cubic();
        let backend = Groth16Backend::<Bn254>::new();
        let (pk, vk) = backend.setup(&circuit, &mut rng).unwrap();

        let witness = circuit
            .program()
            .generate(&CircuitInputs::from_pairs([("x", 3u64)]))
            .unwrap();
        assert_eq!(witness.public_inputs, vec![Fr::from(35u64)]);
        let proof = backend.prove(&pk, &circuit, &witness, &mut rng).unwrap();

        assert!(backend.verify(&vk, &[Fr::from(35u64)], &proof).unwrap());
        assert!(!backend.verify(&vk, &[Fr::from(36u64)], &proof).unwrap());
        assert!(backend.verify(&vk, &[], &proof).is_err());

        let decoded = backend.decode_proof(&backend.encode_proof(&proof).unwrap()).unwrap();
        assert_eq!(decoded, proof);
        assert!(backend.decode_proof("zz").is_err());
    }

    #[test]
    fn test_refuses_to_prove_unsatisfied_witness() {
        let mut rng = StdRng::seed_from_u64(0);
        let circuit = cubic();
        let backend = Groth16Backend::<Bn254>::new();
        let (pk, _) = backend.setup(&circuit, &mut rng).unwrap();
        let mut witness = circuit
            .program()
            .generate(&CircuitInputs::from_pairs([("x", 3u64)]))
            .unwrap();
        witness.public_inputs[0] = Fr::from(36u64);
        assert!(matches!(
            backend.prove(&pk, &circuit, &witness, &mut rng),
            Err(RsaSetupError::Unsatisfiable { .. })
        ));
    }
}
