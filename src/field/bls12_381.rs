//! BLS12-381 scalar field implementation
//!
//! Wrapper around ark-bls12-381 scalar field (Fr)

use super::CircuitField;
pub use ark_bls12_381::Fr;

impl CircuitField for Fr {
    fn field_name() -> &'static str {
        "BLS12-381 Scalar Field (Fr)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{Field, One, PrimeField, UniformRand, Zero};
    use ark_std::test_rng;

    /// Multiplicative inverse - a * a^(-1) = 1 (for a != 0)
    #[test]
    fn test_multiplicative_inverse() {
        let mut rng = test_rng();
        for _ in 0..100 {
            let a = Fr::rand(&mut rng);
            if a != Fr::zero() {
                let a_inv = a.inverse().expect("Inverse should exist for non-zero element");
                assert_eq!(a * a_inv, Fr::one(), "Multiplicative inverse failed: a * a^(-1) != 1");
            }
        }
    }

    /// Zero has no multiplicative inverse
    #[test]
    fn test_zero_no_inverse() {
        assert!(Fr::zero().inverse().is_none(), "Zero should not have multiplicative inverse");
    }

    #[test]
    fn test_biguint_round_trip() {
        let mut rng = test_rng();
        for _ in 0..100 {
            let a = Fr::rand(&mut rng);
            assert_eq!(Fr::from_biguint(&a.to_biguint()), Some(a));
        }
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(Fr::byte_len(), 32);
        assert_eq!(Fr::MODULUS_BIT_SIZE, 255);
    }

    /// The top representable bit is reachable, the one above it is not
    #[test]
    fn test_bit_bounds() {
        let minus_one = -Fr::one();
        assert!(minus_one.bit(254));
        assert!(!minus_one.bit(255));
    }
}
