//! Sparse matrix representation and basic operations
//!
//! Stored as a list of (row, col, value) triples in row-major form.

use ark_ff::Field;
use rayon::prelude::*;
use std::collections::HashMap;

use super::LinearCombination;

#[derive(Debug, Clone)]
pub struct SparseMatrix<F: Field> {
    pub num_rows: usize,
    pub num_cols: usize,
    pub entries: Vec<(usize, usize, F)>,
}

impl<F: Field> SparseMatrix<F> {
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            entries: Vec::new(),
        }
    }

    /// One row per linear combination, columns indexed by variable
    pub fn from_rows<'a>(
        rows: impl ExactSizeIterator<Item = &'a LinearCombination<F>>,
        num_cols: usize,
    ) -> Self
    where
        F: 'a,
    {
        let mut matrix = Self::new(rows.len(), num_cols);
        for (row, lc) in rows.enumerate() {
            for (var, coeff) in lc.sorted_terms() {
                matrix.add_entry(row, var.index(), coeff);
            }
        }
        matrix
    }

    /// Add an entry (row, col, value). Panics if out of bounds.
    pub fn add_entry(&mut self, row: usize, col: usize, value: F) {
        assert!(row < self.num_rows, "row out of bounds");
        assert!(col < self.num_cols, "col out of bounds");
        self.entries.push((row, col, value));
    }

    /// Matrix-vector product: returns a vector of length num_rows
    /// Uses parallel evaluation for large matrices
    pub fn mul_vector(&self, vector: &[F]) -> Vec<F> {
        assert_eq!(vector.len(), self.num_cols, "vector length mismatch");

        const PARALLEL_THRESHOLD: usize = 1000;

        if self.entries.len() >= PARALLEL_THRESHOLD {
            self.mul_vector_parallel(vector)
        } else {
            self.mul_vector_sequential(vector)
        }
    }

    fn mul_vector_sequential(&self, vector: &[F]) -> Vec<F> {
        let mut result = vec![F::zero(); self.num_rows];
        for &(r, c, ref v) in &self.entries {
            result[r] += *v * vector[c];
        }
        result
    }

    /// Groups entries by row and processes rows in parallel
    fn mul_vector_parallel(&self, vector: &[F]) -> Vec<F> {
        let mut rows_map: HashMap<usize, Vec<(usize, F)>> = HashMap::new();
        for &(r, c, ref v) in &self.entries {
            rows_map.entry(r).or_default().push((c, *v));
        }

        let mut result = vec![F::zero(); self.num_rows];
        result.par_iter_mut().enumerate().for_each(|(row_idx, result_val)| {
            if let Some(row_entries) = rows_map.get(&row_idx) {
                *result_val = row_entries
                    .iter()
                    .map(|(c, v)| *v * vector[*c])
                    .fold(F::zero(), |acc, x| acc + x);
            }
        });

        result
    }

    /// Number of non-zero entries in each row
    pub fn row_weights(&self) -> Vec<usize> {
        let mut weights = vec![0usize; self.num_rows];
        for &(r, _, _) in &self.entries {
            weights[r] += 1;
        }
        weights
    }
}
