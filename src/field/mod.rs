//! Finite field arithmetic module
//!
//! Every signal value lives in a large prime field. Circuits are generic over
//! [`CircuitField`]; BN254 is the default because the bn128 powers-of-tau
//! consumed by snarkjs is defined over it. BLS12-381 is kept as a second
//! instantiation so nothing silently depends on one modulus.

pub mod bls12_381;
pub mod bn254;

pub use ark_ff::{BigInteger, Field as ArkField, PrimeField};
pub use ark_bls12_381::Fr as Bls12381Fr;
pub use ark_bn254::Fr as Bn254Fr;

use num_bigint::BigUint;

/// Default scalar field for exported circuits
pub type Fr = Bn254Fr;

/// Prime field suitable for carrying circuit signals
///
/// Besides the arithmetic inherited from [`PrimeField`], witness hints need to
/// look at the canonical integer representative of an element (bits, integer
/// quotient and remainder), and the exporters need a fixed-width byte encoding.
pub trait CircuitField: PrimeField {
    /// Field name for debugging
    fn field_name() -> &'static str;

    /// Canonical integer representative in `[0, modulus)`
    fn to_biguint(&self) -> BigUint {
        (*self).into()
    }

    /// Embed an integer, rejecting anything `>= modulus`
    fn from_biguint(value: &BigUint) -> Option<Self> {
        if *value >= Self::modulus_biguint() {
            None
        } else {
            Some(Self::from(value.clone()))
        }
    }

    fn modulus_biguint() -> BigUint {
        Self::MODULUS.into()
    }

    /// Byte width of a little-endian element encoding (iden3 `n8`)
    fn byte_len() -> usize {
        (Self::MODULUS_BIT_SIZE as usize).div_ceil(64) * 8
    }

    /// Canonical little-endian encoding padded to [`CircuitField::byte_len`]
    fn to_bytes_le_padded(&self) -> Vec<u8> {
        let mut bytes = self.into_bigint().to_bytes_le();
        bytes.resize(Self::byte_len(), 0);
        bytes
    }

    /// The modulus, encoded like an element
    fn modulus_bytes_le() -> Vec<u8> {
        let mut bytes = Self::MODULUS.to_bytes_le();
        bytes.resize(Self::byte_len(), 0);
        bytes
    }

    /// Bit `index` of the canonical representative
    fn bit(&self, index: usize) -> bool {
        index < Self::MODULUS_BIT_SIZE as usize && self.into_bigint().get_bit(index)
    }

    fn to_decimal(&self) -> String {
        self.to_biguint().to_string()
    }

    /// Parse a base-10 string; `None` if malformed or not below the modulus
    fn from_decimal(s: &str) -> Option<Self> {
        let value = BigUint::parse_bytes(s.trim().as_bytes(), 10)?;
        Self::from_biguint(&value)
    }

    /// `2^exp` as a field element
    fn power_of_two(exp: usize) -> Self {
        Self::from(2u64).pow([exp as u64])
    }
}
