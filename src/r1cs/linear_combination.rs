//! Signals and linear combinations over them

use std::collections::BTreeMap;
use std::ops::{Add, Mul, Neg, Sub};

use ark_ff::Field;

/// Index of a signal in the assignment vector `z`
///
/// Index 0 is always the constant one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(usize);

impl Variable {
    pub const ONE: Variable = Variable(0);

    pub(crate) fn new(index: usize) -> Self {
        Variable(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Σ coeff_i · z[var_i]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCombination<F: Field> {
    terms: Vec<(Variable, F)>,
}

impl<F: Field> LinearCombination<F> {
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn one() -> Self {
        Self::constant(F::one())
    }

    pub fn constant(value: F) -> Self {
        Self::term(Variable::ONE, value)
    }

    pub fn term(var: Variable, coeff: F) -> Self {
        let mut lc = Self::zero();
        lc.push(var, coeff);
        lc
    }

    pub fn terms(&self) -> &[(Variable, F)] {
        &self.terms
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Add `coeff · var`, merging with an existing term for `var`
    pub fn push(&mut self, var: Variable, coeff: F) {
        if coeff.is_zero() {
            return;
        }
        match self.terms.iter().position(|(v, _)| *v == var) {
            Some(pos) => {
                self.terms[pos].1 += coeff;
                if self.terms[pos].1.is_zero() {
                    self.terms.remove(pos);
                }
            }
            None => self.terms.push((var, coeff)),
        }
    }

    pub fn evaluate(&self, z: &[F]) -> F {
        self.terms
            .iter()
            .fold(F::zero(), |acc, (var, coeff)| acc + *coeff * z[var.index()])
    }

    /// Rewrite variable indices through `map` (old index -> new index)
    pub fn remap(&self, map: &[usize]) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(var, coeff)| (Variable(map[var.index()]), *coeff))
                .collect(),
        }
    }

    /// Terms ordered by variable index
    pub fn sorted_terms(&self) -> Vec<(Variable, F)> {
        let merged: BTreeMap<Variable, F> = self.terms.iter().copied().collect();
        merged.into_iter().collect()
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.terms.iter().map(|(var, _)| *var)
    }
}

impl<F: Field> From<Variable> for LinearCombination<F> {
    fn from(var: Variable) -> Self {
        Self::term(var, F::one())
    }
}

impl<F: Field> Add for LinearCombination<F> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (var, coeff) in rhs.terms {
            self.push(var, coeff);
        }
        self
    }
}

impl<F: Field> Add<Variable> for LinearCombination<F> {
    type Output = Self;

    fn add(mut self, rhs: Variable) -> Self {
        self.push(rhs, F::one());
        self
    }
}

impl<F: Field> Sub for LinearCombination<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<F: Field> Sub<Variable> for LinearCombination<F> {
    type Output = Self;

    fn sub(mut self, rhs: Variable) -> Self {
        self.push(rhs, -F::one());
        self
    }
}

impl<F: Field> Neg for LinearCombination<F> {
    type Output = Self;

    fn neg(self) -> Self {
        self * -F::one()
    }
}

impl<F: Field> Mul<F> for LinearCombination<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self {
        if rhs.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .into_iter()
                .map(|(var, coeff)| (var, coeff * rhs))
                .collect(),
        }
    }
}
