//! Witness-computation program
//!
//! The ordered hint list recorded while a circuit is built. Running it is a
//! pure function from named inputs to a full assignment; whether that
//! assignment satisfies the constraints is checked separately.

use std::collections::{HashMap, HashSet};

use ark_ff::Field;
use tracing::trace;

use super::{CircuitInputs, Hint};
use crate::errors::{Result, RsaSetupError};
use crate::field::CircuitField;
use crate::r1cs::{Variable, Witness};

#[derive(Debug, Clone)]
pub struct WitnessProgram<F: Field> {
    inputs: Vec<(String, Variable)>,
    steps: Vec<(Variable, Hint<F>)>,
    num_vars: usize,
    num_public: usize,
}

impl<F: Field> WitnessProgram<F> {
    pub(crate) fn new(
        inputs: Vec<(String, Variable)>,
        steps: Vec<(Variable, Hint<F>)>,
        num_vars: usize,
        num_public: usize,
    ) -> Self {
        Self {
            inputs,
            steps,
            num_vars,
            num_public,
        }
    }

    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|(name, _)| name.as_str())
    }

    pub fn steps(&self) -> &[(Variable, Hint<F>)] {
        &self.steps
    }
}

impl<F: CircuitField> WitnessProgram<F> {
    pub fn generate(&self, inputs: &CircuitInputs) -> Result<Witness<F>> {
        self.generate_with_overrides(inputs, &HashMap::new())
    }

    /// Run the program, replacing the hinted value of each overridden signal.
    ///
    /// Signals downstream of an override are recomputed from it, which is how
    /// a dishonest prover would build an alternative assignment.
    #[tracing::instrument(skip_all, name = "WitnessProgram::generate", fields(steps = self.steps.len(), overrides = overrides.len()))]
    pub fn generate_with_overrides(
        &self,
        inputs: &CircuitInputs,
        overrides: &HashMap<Variable, F>,
    ) -> Result<Witness<F>> {
        let known: HashSet<&str> = self.input_names().collect();
        if let Some(unknown) = inputs.names().find(|name| !known.contains(name)) {
            return Err(RsaSetupError::UnknownInput(unknown.to_string()));
        }

        let mut z = vec![F::zero(); self.num_vars];
        z[0] = F::one();

        for (name, var) in &self.inputs {
            let raw = inputs
                .get(name)
                .ok_or_else(|| RsaSetupError::MissingInput(name.clone()))?;
            z[var.index()] = F::from_decimal(raw).ok_or_else(|| RsaSetupError::InvalidInput {
                signal: name.clone(),
                value: raw.to_string(),
            })?;
        }

        for (var, hint) in &self.steps {
            z[var.index()] = match overrides.get(var) {
                Some(value) => *value,
                None => hint.evaluate(&z),
            };
        }
        trace!(num_vars = self.num_vars, "witness computed");

        Ok(Witness::from_z(&z, self.num_public))
    }
}
