//! Witness and public input representation for R1CS

use ark_ff::Field;

/// Full assignment to a circuit's signals
///
/// `public_inputs` holds the public outputs followed by the public inputs,
/// `assignments` the private inputs followed by internal signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness<F: Field> {
    pub public_inputs: Vec<F>,
    pub assignments: Vec<F>,
}

impl<F: Field> Witness<F> {
    /// Split a canonical `z = (1, io, w)` vector
    pub fn from_z(z: &[F], num_public: usize) -> Self {
        Self {
            public_inputs: z[1..=num_public].to_vec(),
            assignments: z[num_public + 1..].to_vec(),
        }
    }

    /// Build the z vector = (1, io, w)
    pub fn build_z(&self) -> Vec<F> {
        let mut z = Vec::with_capacity(1 + self.public_inputs.len() + self.assignments.len());
        z.push(F::one());
        z.extend_from_slice(&self.public_inputs);
        z.extend_from_slice(&self.assignments);
        z
    }

    pub fn num_inputs(&self) -> usize {
        self.public_inputs.len()
    }

    pub fn num_witness(&self) -> usize {
        self.assignments.len()
    }

    /// Value of canonical variable `index`
    pub fn value(&self, index: usize) -> Option<F> {
        match index {
            0 => Some(F::one()),
            i if i <= self.public_inputs.len() => Some(self.public_inputs[i - 1]),
            i => self.assignments.get(i - 1 - self.public_inputs.len()).copied(),
        }
    }
}
