//! iden3 `.wtns` binary format, version 2
//!
//! ```text
//! "wtns" | version u32 | n_sections u32
//!   1 header: n8 u32 | prime [n8] | n_values u32
//!   2 values: n_values × [n8]
//! ```

use std::io::{self, Write};

use super::r1cs_file::{to_u32, write_section};
use crate::field::CircuitField;
use crate::r1cs::Witness;

const MAGIC: &[u8; 4] = b"wtns";
const VERSION: u32 = 2;

/// Serialize the full assignment `z = (1, io, w)`
pub fn write_wtns<F: CircuitField, W: Write>(witness: &Witness<F>, out: &mut W) -> io::Result<()> {
    let z = witness.build_z();

    out.write_all(MAGIC)?;
    out.write_all(&VERSION.to_le_bytes())?;
    out.write_all(&2u32.to_le_bytes())?;

    let mut header = Vec::with_capacity(8 + F::byte_len());
    header.extend_from_slice(&to_u32(F::byte_len())?.to_le_bytes());
    header.extend_from_slice(&F::modulus_bytes_le());
    header.extend_from_slice(&to_u32(z.len())?.to_le_bytes());
    write_section(out, 1, &header)?;

    let values: Vec<u8> = z.iter().flat_map(|v| v.to_bytes_le_padded()).collect();
    write_section(out, 2, &values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Fr;
    use ark_ff::One;

    #[test]
    fn test_layout() {
        let witness = Witness::<Fr> {
            public_inputs: vec![Fr::from(1_074_200_609u64)],
            assignments: vec![Fr::from(32771u64), Fr::from(32779u64)],
        };
        let mut bytes = Vec::new();
        write_wtns(&witness, &mut bytes).unwrap();

        assert_eq!(&bytes[0..4], b"wtns");
        assert_eq!(bytes[4], 2);
        assert_eq!(bytes[8], 2);
        // header section: type, size, n8, prime, count
        assert_eq!(bytes[12], 1);
        assert_eq!(bytes[16], 4 + 32 + 4);
        assert_eq!(bytes[24], 32);
        assert_eq!(&bytes[28..60], Fr::modulus_bytes_le().as_slice());
        assert_eq!(bytes[60], 4);
        // values section
        assert_eq!(bytes[64], 2);
        assert_eq!(u64::from_le_bytes(bytes[68..76].try_into().unwrap()), 4 * 32);
        let values = &bytes[76..];
        assert_eq!(&values[0..32], Fr::one().to_bytes_le_padded().as_slice());
        assert_eq!(&values[32..64], Fr::from(1_074_200_609u64).to_bytes_le_padded().as_slice());
        assert_eq!(values.len(), 4 * 32);
    }
}
