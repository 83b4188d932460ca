//! Primality by trial division against a fixed table
//!
//! A necessary condition only: the gadget accepts anything with no factor in
//! [`SMALL_PRIMES`]. For candidates below `257^2` that is exact primality,
//! except that the table primes themselves are rejected (each divides
//! itself). Wider candidates can be composite and still pass.

use super::{AndFold, Conjunction, NonDivisibility, RemainderPolicy};
use crate::field::CircuitField;
use crate::r1cs::{ConstraintSystem, LinearCombination, Variable};
use crate::traits::Gadget;

/// The first 54 primes, 2 through 251
pub const SMALL_PRIMES: [u64; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// First table prime dividing `value`, in table order
pub fn smallest_table_factor(value: u64) -> Option<u64> {
    SMALL_PRIMES.iter().copied().find(|m| value % m == 0)
}

/// What the primality gadget computes, on plain integers
pub fn passes_trial_division(value: u64) -> bool {
    smallest_table_factor(value).is_none()
}

/// Exact primality by trial division up to `sqrt(value)`
pub fn is_prime(value: u64) -> bool {
    if value < 2 {
        return false;
    }
    let mut d = 2u64;
    while d.saturating_mul(d) <= value {
        if value % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// `out = 1` iff no entry of [`SMALL_PRIMES`] divides the candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialDivisionPrimality {
    width: usize,
    policy: RemainderPolicy,
    fold: AndFold,
}

impl TrialDivisionPrimality {
    /// `width` is the bit width the candidate is known to fit in
    pub fn new(width: usize, policy: RemainderPolicy, fold: AndFold) -> Self {
        Self {
            width,
            policy,
            fold,
        }
    }
}

impl<F: CircuitField> Gadget<F> for TrialDivisionPrimality {
    type Input = LinearCombination<F>;
    type Output = Variable;

    fn synthesize(&self, cs: &mut ConstraintSystem<F>, candidate: Self::Input) -> Variable {
        let flags: [Variable; SMALL_PRIMES.len()] = std::array::from_fn(|i| {
            NonDivisibility::new(SMALL_PRIMES[i], self.width, self.policy).instantiate(
                cs,
                &format!("div[{i}]"),
                candidate.clone(),
            )
        });
        Conjunction::new(self.fold).instantiate(cs, "acc", flags.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Fr;
    use crate::r1cs::CircuitDescription;
    use crate::witness::{CircuitInputs, Hint};
    use ark_ff::{One, Zero};

    fn circuit(policy: RemainderPolicy, fold: AndFold) -> CircuitDescription<Fr> {
        let mut cs = ConstraintSystem::<Fr>::new();
        let x = cs.alloc_private_input("x");
        let prime = TrialDivisionPrimality::new(16, policy, fold).instantiate(&mut cs, "prime", x.into());
        let out = cs.alloc_output("out", Hint::Linear(prime.into()));
        cs.enforce_equal("expose", prime.into(), out.into());
        cs.finalize()
    }

    fn run(desc: &CircuitDescription<Fr>, x: u64) -> bool {
        let w = desc
            .program()
            .generate(&CircuitInputs::from_pairs([("x", x)]))
            .unwrap();
        desc.check(&w).unwrap();
        assert!(w.public_inputs[0].is_zero() || w.public_inputs[0].is_one());
        w.public_inputs[0].is_one()
    }

    #[test]
    fn test_table() {
        assert!(SMALL_PRIMES.iter().all(|&p| is_prime(p)));
        assert!(SMALL_PRIMES.windows(2).all(|w| w[0] < w[1]));
        assert_eq!((2..=251).filter(|&n| is_prime(n)).count(), SMALL_PRIMES.len());
    }

    /// Below 257^2 the table test is exact for everything above the table
    #[test]
    fn test_trial_division_is_exact_on_sixteen_bits() {
        for value in 252..=65535u64 {
            assert_eq!(passes_trial_division(value), is_prime(value), "{value}");
        }
    }

    #[test]
    fn test_smallest_table_factor() {
        assert_eq!(smallest_table_factor(32770), Some(2));
        assert_eq!(smallest_table_factor(3 * 251), Some(3));
        assert_eq!(smallest_table_factor(251 * 251), Some(251));
        assert_eq!(smallest_table_factor(32771), None);
        // 257·263 has no table factor but is composite
        assert_eq!(smallest_table_factor(257 * 263), None);
        assert!(!is_prime(257 * 263));
    }

    #[test]
    fn test_gadget_matches_integer_test() {
        let desc = circuit(RemainderPolicy::RangeChecked, AndFold::Sequential);
        for x in [257u64, 263, 32771, 32779, 65521, 32770, 32773, 63001, 65535, 7, 251, 1] {
            assert_eq!(run(&desc, x), passes_trial_division(x), "x={x}");
        }
    }

    #[test]
    fn test_policies_and_folds_agree_on_honest_witnesses() {
        let shapes = [
            (RemainderPolicy::Unconstrained, AndFold::Sequential),
            (RemainderPolicy::Unconstrained, AndFold::BalancedTree),
            (RemainderPolicy::RangeChecked, AndFold::BalancedTree),
        ];
        for (policy, fold) in shapes {
            let desc = circuit(policy, fold);
            for x in [32771u64, 32770, 49999, 50021] {
                assert_eq!(run(&desc, x), passes_trial_division(x), "x={x} {policy:?} {fold:?}");
            }
        }
    }

    #[test]
    fn test_one_division_per_table_prime() {
        let desc = circuit(RemainderPolicy::Unconstrained, AndFold::Sequential);
        let divisions = desc
            .constraints()
            .iter()
            .filter(|c| c.label.ends_with(".division"))
            .count();
        assert_eq!(divisions, SMALL_PRIMES.len());
        assert!(desc.signal("prime.div[53].remainder").is_some());
    }
}
