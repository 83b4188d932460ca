//! BN254 scalar field
//!
//! The circom/snarkjs toolchain works over this field (it calls the curve
//! bn128), so exported `.r1cs`/`.wtns` files default to it.

use super::CircuitField;
pub use ark_bn254::Fr;

impl CircuitField for Fr {
    fn field_name() -> &'static str {
        "BN254 Scalar Field (Fr)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{Field, One, UniformRand, Zero};
    use ark_std::test_rng;
    use num_bigint::BigUint;

    #[test]
    fn test_modulus_matches_snarkjs_prime() {
        let expected = BigUint::parse_bytes(
            b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
            10,
        )
        .unwrap();
        assert_eq!(Fr::modulus_biguint(), expected);
        assert_eq!(Fr::byte_len(), 32);
    }

    #[test]
    fn test_decimal_round_trip() {
        let mut rng = test_rng();
        for _ in 0..50 {
            let a = Fr::rand(&mut rng);
            assert_eq!(Fr::from_decimal(&a.to_decimal()), Some(a));
        }
        assert_eq!(Fr::from_decimal("1074200609"), Some(Fr::from(1074200609u64)));
    }

    #[test]
    fn test_decimal_rejects_garbage_and_overflow() {
        assert_eq!(Fr::from_decimal("12a"), None);
        assert_eq!(Fr::from_decimal(""), None);
        let modulus = Fr::modulus_biguint().to_string();
        assert_eq!(Fr::from_decimal(&modulus), None);
    }

    #[test]
    fn test_minus_one_is_modulus_minus_one() {
        let minus_one = -Fr::one();
        assert_eq!(minus_one.to_biguint(), Fr::modulus_biguint() - 1u32);
    }

    #[test]
    fn test_bits_of_small_value() {
        let x = Fr::from(0b1011u64);
        let bits: Vec<bool> = (0..5).map(|i| x.bit(i)).collect();
        assert_eq!(bits, vec![true, true, false, true, false]);
        assert!(!x.bit(10_000));
    }

    #[test]
    fn test_bytes_le_padded() {
        let bytes = Fr::from(0x0102u64).to_bytes_le_padded();
        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[..3], &[0x02, 0x01, 0x00]);
        assert!(Fr::zero().to_bytes_le_padded().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_power_of_two() {
        assert_eq!(Fr::power_of_two(0), Fr::one());
        assert_eq!(Fr::power_of_two(16), Fr::from(65536u64));
        let big = Fr::power_of_two(200);
        assert_eq!(big * Fr::from(2u64).inverse().unwrap(), Fr::power_of_two(199));
    }
}
