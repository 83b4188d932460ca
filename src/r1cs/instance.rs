//! R1CS instance and verifier
//!
//! Checks: (A·z) ◦ (B·z) = (C·z) where z = (1, io, w)

use super::SparseMatrix;
use super::Witness;
use crate::errors::{Result, RsaSetupError};
use ark_ff::Field;
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct R1CSInstance<F: Field> {
    pub a: SparseMatrix<F>,
    pub b: SparseMatrix<F>,
    pub c: SparseMatrix<F>,
    pub num_constraints: usize,
    pub num_vars: usize,   // total vars including 1 + io + witness
    pub num_inputs: usize, // |io|
}

impl<F: Field> R1CSInstance<F> {
    pub fn new(
        a: SparseMatrix<F>,
        b: SparseMatrix<F>,
        c: SparseMatrix<F>,
        num_constraints: usize,
        num_vars: usize,
        num_inputs: usize,
    ) -> Self {
        Self {
            a,
            b,
            c,
            num_constraints,
            num_vars,
            num_inputs,
        }
    }

    /// Verify R1CS satisfaction for given witness/public inputs
    pub fn is_satisfied(&self, witness: &Witness<F>) -> Result<bool> {
        Ok(self.first_unsatisfied(witness)?.is_none())
    }

    /// Index of the first violated row, if any
    pub fn first_unsatisfied(&self, witness: &Witness<F>) -> Result<Option<usize>> {
        if witness.num_inputs() != self.num_inputs {
            return Err(RsaSetupError::InvalidParameter(format!(
                "public inputs mismatch: expected {}, got {}",
                self.num_inputs,
                witness.num_inputs()
            )));
        }

        let total_vars = 1 + self.num_inputs + witness.num_witness();
        if total_vars != self.num_vars {
            return Err(RsaSetupError::InvalidParameter(format!(
                "variable count mismatch: expected {}, got {}",
                self.num_vars, total_vars
            )));
        }

        let z = witness.build_z();

        let az = self.a.mul_vector(&z);
        let bz = self.b.mul_vector(&z);
        let cz = self.c.mul_vector(&z);

        if az.len() != self.num_constraints
            || bz.len() != self.num_constraints
            || cz.len() != self.num_constraints
        {
            return Err(RsaSetupError::R1CSVerificationFailed(
                "matrix row count mismatch with num_constraints".to_string(),
            ));
        }

        // Check Hadamard equality
        Ok((0..self.num_constraints)
            .into_par_iter()
            .find_first(|&i| az[i] * bz[i] != cz[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Bls12381Fr as Fr;
    use ark_ff::One;

    fn instance_mul_gate() -> (R1CSInstance<Fr>, Witness<Fr>) {
        // Constraint: x * y = z
        // z = (1, x, y, z)
        let num_inputs = 0;
        let num_vars = 4;
        let num_constraints = 1;

        let mut a = SparseMatrix::new(num_constraints, num_vars);
        a.add_entry(0, 1, Fr::one());

        let mut b = SparseMatrix::new(num_constraints, num_vars);
        b.add_entry(0, 2, Fr::one());

        let mut c = SparseMatrix::new(num_constraints, num_vars);
        c.add_entry(0, 3, Fr::one());

        let instance = R1CSInstance::new(a, b, c, num_constraints, num_vars, num_inputs);

        let wit = Witness {
            public_inputs: vec![],
            assignments: vec![Fr::from(3u64), Fr::from(4u64), Fr::from(12u64)],
        };
        (instance, wit)
    }

    fn instance_public_output() -> (R1CSInstance<Fr>, Witness<Fr>) {
        // Constraint: (x + y) * 1 = out, with out public
        // z = (1, out, x, y)
        let num_vars = 4;

        let mut a = SparseMatrix::new(1, num_vars);
        a.add_entry(0, 2, Fr::one());
        a.add_entry(0, 3, Fr::one());

        let mut b = SparseMatrix::new(1, num_vars);
        b.add_entry(0, 0, Fr::one());

        let mut c = SparseMatrix::new(1, num_vars);
        c.add_entry(0, 1, Fr::one());

        let instance = R1CSInstance::new(a, b, c, 1, num_vars, 1);
        let wit = Witness {
            public_inputs: vec![Fr::from(12u64)],
            assignments: vec![Fr::from(5u64), Fr::from(7u64)],
        };
        (instance, wit)
    }

    #[test]
    fn test_mul_gate_satisfied() {
        let (inst, wit) = instance_mul_gate();
        assert!(inst.is_satisfied(&wit).unwrap());
    }

    #[test]
    fn test_mul_gate_unsatisfied() {
        let (inst, mut wit) = instance_mul_gate();
        wit.assignments[2] = Fr::from(15u64);
        assert!(!inst.is_satisfied(&wit).unwrap());
        assert_eq!(inst.first_unsatisfied(&wit).unwrap(), Some(0));
    }

    #[test]
    fn test_public_output_satisfied() {
        let (inst, wit) = instance_public_output();
        assert!(inst.is_satisfied(&wit).unwrap());
    }

    #[test]
    fn test_public_output_tampered() {
        let (inst, mut wit) = instance_public_output();
        wit.public_inputs[0] = Fr::from(13u64);
        assert!(!inst.is_satisfied(&wit).unwrap());
    }

    #[test]
    fn test_size_mismatch_inputs() {
        let (inst, mut wit) = instance_mul_gate();
        wit.public_inputs = vec![Fr::one()];
        assert!(inst.is_satisfied(&wit).is_err());
    }

    #[test]
    fn test_size_mismatch_vars() {
        let (mut inst, wit) = instance_mul_gate();
        inst.num_vars = 5;
        assert!(inst.is_satisfied(&wit).is_err());
    }
}
