//! Frozen circuit: constraints, signal table and witness program
//!
//! This is what an external circuit compiler would hand to the prover: a
//! constraint system plus the program that computes a satisfying assignment.

use std::collections::HashMap;

use ark_ff::Field;

use super::{Constraint, R1CSInstance, SignalInfo, SignalKind, SparseMatrix, Variable, Witness};
use crate::errors::{Result, RsaSetupError};
use crate::witness::{Hint, WitnessProgram};

#[derive(Debug, Clone)]
pub struct CircuitDescription<F: Field> {
    signals: Vec<SignalInfo>,
    constraints: Vec<Constraint<F>>,
    program: WitnessProgram<F>,
    instance: R1CSInstance<F>,
    by_name: HashMap<String, Variable>,
}

impl<F: Field> CircuitDescription<F> {
    pub(crate) fn new(
        signals: Vec<SignalInfo>,
        constraints: Vec<Constraint<F>>,
        steps: Vec<(Variable, Hint<F>)>,
    ) -> Self {
        let num_vars = signals.len();
        let num_public = signals.iter().filter(|s| s.kind.is_public()).count();

        let a = SparseMatrix::from_rows(constraints.iter().map(|c| &c.a), num_vars);
        let b = SparseMatrix::from_rows(constraints.iter().map(|c| &c.b), num_vars);
        let c = SparseMatrix::from_rows(constraints.iter().map(|c| &c.c), num_vars);
        let instance = R1CSInstance::new(a, b, c, constraints.len(), num_vars, num_public);

        let inputs = signals
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind.is_input())
            .map(|(i, s)| (s.name.clone(), Variable::new(i)))
            .collect();
        let program = WitnessProgram::new(inputs, steps, num_vars, num_public);

        let by_name = signals
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.clone(), Variable::new(i)))
            .collect();

        Self {
            signals,
            constraints,
            program,
            instance,
            by_name,
        }
    }

    /// Signal table in canonical order, index 0 is the constant one
    pub fn signals(&self) -> &[SignalInfo] {
        &self.signals
    }

    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    pub fn program(&self) -> &WitnessProgram<F> {
        &self.program
    }

    pub fn instance(&self) -> &R1CSInstance<F> {
        &self.instance
    }

    pub fn signal(&self, name: &str) -> Option<Variable> {
        self.by_name.get(name).copied()
    }

    pub fn num_vars(&self) -> usize {
        self.signals.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Public outputs plus public inputs
    pub fn num_public(&self) -> usize {
        self.instance.num_inputs
    }

    pub fn count(&self, kind: SignalKind) -> usize {
        self.signals.iter().filter(|s| s.kind == kind).count()
    }

    /// Check every constraint; on failure name the first violated one
    pub fn check(&self, witness: &Witness<F>) -> Result<()> {
        match self.instance.first_unsatisfied(witness)? {
            None => Ok(()),
            Some(index) => Err(RsaSetupError::Unsatisfiable {
                index,
                label: self.constraints[index].label.clone(),
            }),
        }
    }

    /// The public-input vector handed to a verifier
    pub fn public_values(&self, witness: &Witness<F>) -> Vec<F> {
        witness.public_inputs.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Fr;
    use crate::r1cs::{ConstraintSystem, LinearCombination};
    use crate::witness::CircuitInputs;

    fn square_circuit() -> CircuitDescription<Fr> {
        let mut cs = ConstraintSystem::<Fr>::new();
        let x = cs.alloc_private_input("x");
        let y = cs.alloc_output("y", Hint::Product(x.into(), x.into()));
        cs.enforce("square", x.into(), x.into(), LinearCombination::from(y));
        cs.finalize()
    }

    #[test]
    fn test_counts() {
        let desc = square_circuit();
        assert_eq!(desc.num_vars(), 3);
        assert_eq!(desc.num_constraints(), 1);
        assert_eq!(desc.num_public(), 1);
        assert_eq!(desc.count(SignalKind::PrivateInput), 1);
        assert_eq!(desc.instance().num_vars, 3);
    }

    #[test]
    fn test_check_names_violated_constraint() {
        let desc = square_circuit();
        let inputs = CircuitInputs::from_pairs([("x", "7")]);
        let mut witness = desc.program().generate(&inputs).unwrap();
        assert!(desc.check(&witness).is_ok());
        assert_eq!(desc.public_values(&witness), vec![Fr::from(49u64)]);

        witness.public_inputs[0] = Fr::from(50u64);
        match desc.check(&witness) {
            Err(RsaSetupError::Unsatisfiable { index, label }) => {
                assert_eq!(index, 0);
                assert_eq!(label, "square");
            }
            other => panic!("expected unsatisfiable, got {other:?}"),
        }
    }
}
