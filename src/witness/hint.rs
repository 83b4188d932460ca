//! Unconstrained assignment rules
//!
//! A hint says how to compute one signal from signals computed before it.
//! Hints are never trusted: every value they produce is pinned down (or
//! deliberately left loose) by the constraints emitted next to them.

use ark_ff::Field;

use crate::field::CircuitField;
use crate::r1cs::{LinearCombination, Variable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint<F: Field> {
    /// Value of a linear combination
    Linear(LinearCombination<F>),
    /// Product of two linear combinations
    Product(LinearCombination<F>, LinearCombination<F>),
    /// `1/x`, or `0` when `x = 0`
    InverseOrZero(LinearCombination<F>),
    /// `1` when `x = 0`, else `0`
    IsZero(LinearCombination<F>),
    /// Bit `index` of the canonical integer representative of `source`
    Bit {
        source: LinearCombination<F>,
        index: usize,
    },
    /// Integer quotient of the canonical representative
    Quotient {
        dividend: LinearCombination<F>,
        divisor: u64,
    },
    /// Integer remainder of the canonical representative
    Remainder {
        dividend: LinearCombination<F>,
        divisor: u64,
    },
}

impl<F: Field> Hint<F> {
    fn sources(&self) -> Vec<&LinearCombination<F>> {
        match self {
            Hint::Linear(lc) | Hint::InverseOrZero(lc) | Hint::IsZero(lc) => vec![lc],
            Hint::Product(a, b) => vec![a, b],
            Hint::Bit { source, .. } => vec![source],
            Hint::Quotient { dividend, .. } | Hint::Remainder { dividend, .. } => vec![dividend],
        }
    }

    /// Signals read by this hint
    pub fn dependencies(&self) -> impl Iterator<Item = Variable> + '_ {
        self.sources().into_iter().flat_map(|lc| lc.variables())
    }

    pub fn remap(&self, map: &[usize]) -> Self {
        match self {
            Hint::Linear(lc) => Hint::Linear(lc.remap(map)),
            Hint::Product(a, b) => Hint::Product(a.remap(map), b.remap(map)),
            Hint::InverseOrZero(lc) => Hint::InverseOrZero(lc.remap(map)),
            Hint::IsZero(lc) => Hint::IsZero(lc.remap(map)),
            Hint::Bit { source, index } => Hint::Bit {
                source: source.remap(map),
                index: *index,
            },
            Hint::Quotient { dividend, divisor } => Hint::Quotient {
                dividend: dividend.remap(map),
                divisor: *divisor,
            },
            Hint::Remainder { dividend, divisor } => Hint::Remainder {
                dividend: dividend.remap(map),
                divisor: *divisor,
            },
        }
    }
}

impl<F: CircuitField> Hint<F> {
    pub fn evaluate(&self, z: &[F]) -> F {
        match self {
            Hint::Linear(lc) => lc.evaluate(z),
            Hint::Product(a, b) => a.evaluate(z) * b.evaluate(z),
            Hint::InverseOrZero(lc) => lc.evaluate(z).inverse().unwrap_or_else(F::zero),
            Hint::IsZero(lc) => {
                if lc.evaluate(z).is_zero() {
                    F::one()
                } else {
                    F::zero()
                }
            }
            Hint::Bit { source, index } => {
                if source.evaluate(z).bit(*index) {
                    F::one()
                } else {
                    F::zero()
                }
            }
            Hint::Quotient { dividend, divisor } => {
                F::from(dividend.evaluate(z).to_biguint() / *divisor)
            }
            Hint::Remainder { dividend, divisor } => {
                F::from(dividend.evaluate(z).to_biguint() % *divisor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Fr;
    use ark_ff::{One, Zero};

    fn z() -> Vec<Fr> {
        vec![Fr::one(), Fr::from(32770u64), Fr::zero()]
    }

    fn x() -> LinearCombination<Fr> {
        Variable::new(1).into()
    }

    #[test]
    fn test_division_hints_match_integer_division() {
        for divisor in [2u64, 3, 7, 113, 251] {
            let q = Hint::Quotient { dividend: x(), divisor }.evaluate(&z());
            let r = Hint::Remainder { dividend: x(), divisor }.evaluate(&z());
            assert_eq!(q, Fr::from(32770 / divisor));
            assert_eq!(r, Fr::from(32770 % divisor));
        }
    }

    #[test]
    fn test_division_of_negative_uses_canonical_representative() {
        // -1 is modulus - 1, an even number for an odd prime modulus
        let minus_one = LinearCombination::constant(-Fr::one());
        let r = Hint::Remainder { dividend: minus_one, divisor: 2 }.evaluate(&z());
        assert_eq!(r, Fr::zero());
    }

    #[test]
    fn test_inverse_or_zero() {
        let inv = Hint::InverseOrZero(x()).evaluate(&z());
        assert_eq!(inv * Fr::from(32770u64), Fr::one());
        let zero: LinearCombination<Fr> = Variable::new(2).into();
        assert_eq!(Hint::InverseOrZero(zero.clone()).evaluate(&z()), Fr::zero());
        assert_eq!(Hint::IsZero(zero).evaluate(&z()), Fr::one());
        assert_eq!(Hint::IsZero(x()).evaluate(&z()), Fr::zero());
    }

    #[test]
    fn test_bits() {
        // 32770 = 0b1000_0000_0000_0010
        let bits: Vec<Fr> = (0..17)
            .map(|index| Hint::Bit { source: x(), index }.evaluate(&z()))
            .collect();
        assert_eq!(bits[1], Fr::one());
        assert_eq!(bits[15], Fr::one());
        assert_eq!(bits.iter().filter(|b| b.is_one()).count(), 2);
    }

    #[test]
    fn test_dependencies_and_remap() {
        let hint = Hint::Product(x(), LinearCombination::from(Variable::new(2)));
        let deps: Vec<usize> = hint.dependencies().map(Variable::index).collect();
        assert_eq!(deps, vec![1, 2]);
        let remapped = hint.remap(&[0, 2, 1]);
        let deps: Vec<usize> = remapped.dependencies().map(Variable::index).collect();
        assert_eq!(deps, vec![2, 1]);
    }
}
