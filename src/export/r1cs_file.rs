//! iden3 `.r1cs` binary format, version 1
//!
//! ```text
//! "r1cs" | version u32 | n_sections u32
//! section: type u32 | size u64 | payload
//!   1 header:      n8 u32 | prime [n8] | n_wires u32 | n_pub_out u32 |
//!                  n_pub_in u32 | n_prv_in u32 | n_labels u64 | n_constraints u32
//!   2 constraints: per constraint A, B, C as n u32, then n × (wire u32, coeff [n8])
//!   3 wire2label:  per wire label u64
//! ```
//!
//! All integers little-endian. Wire order is already canonical, so wire `i`
//! is variable `i` and label `i`.

use std::io::{self, Write};

use crate::field::CircuitField;
use crate::r1cs::{CircuitDescription, LinearCombination, SignalKind};

const MAGIC: &[u8; 4] = b"r1cs";
const VERSION: u32 = 1;

const HEADER: u32 = 1;
const CONSTRAINTS: u32 = 2;
const WIRE_TO_LABEL: u32 = 3;

pub(crate) fn write_section<W: Write>(out: &mut W, kind: u32, payload: &[u8]) -> io::Result<()> {
    out.write_all(&kind.to_le_bytes())?;
    out.write_all(&(payload.len() as u64).to_le_bytes())?;
    out.write_all(payload)
}

/// Counts and wire indices are stored as `u32`
pub(crate) fn to_u32(value: usize) -> io::Result<u32> {
    u32::try_from(value).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{value} does not fit in a u32 field"),
        )
    })
}

fn push_u32(buf: &mut Vec<u8>, value: usize) -> io::Result<()> {
    buf.extend_from_slice(&to_u32(value)?.to_le_bytes());
    Ok(())
}

fn header<F: CircuitField>(circuit: &CircuitDescription<F>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    push_u32(&mut buf, F::byte_len())?;
    buf.extend_from_slice(&F::modulus_bytes_le());
    push_u32(&mut buf, circuit.num_vars())?;
    push_u32(&mut buf, circuit.count(SignalKind::PublicOutput))?;
    push_u32(&mut buf, circuit.count(SignalKind::PublicInput))?;
    push_u32(&mut buf, circuit.count(SignalKind::PrivateInput))?;
    buf.extend_from_slice(&(circuit.num_vars() as u64).to_le_bytes());
    push_u32(&mut buf, circuit.num_constraints())?;
    Ok(buf)
}

fn push_lc<F: CircuitField>(buf: &mut Vec<u8>, lc: &LinearCombination<F>) -> io::Result<()> {
    let terms = lc.sorted_terms();
    push_u32(buf, terms.len())?;
    for (var, coeff) in terms {
        push_u32(buf, var.index())?;
        buf.extend_from_slice(&coeff.to_bytes_le_padded());
    }
    Ok(())
}

/// Serialize `circuit` to `out`
pub fn write_r1cs<F: CircuitField, W: Write>(circuit: &CircuitDescription<F>, out: &mut W) -> io::Result<()> {
    out.write_all(MAGIC)?;
    out.write_all(&VERSION.to_le_bytes())?;
    out.write_all(&3u32.to_le_bytes())?;

    write_section(out, HEADER, &header(circuit)?)?;

    let mut constraints = Vec::new();
    for constraint in circuit.constraints() {
        push_lc(&mut constraints, &constraint.a)?;
        push_lc(&mut constraints, &constraint.b)?;
        push_lc(&mut constraints, &constraint.c)?;
    }
    write_section(out, CONSTRAINTS, &constraints)?;

    let labels: Vec<u8> = (0..circuit.num_vars() as u64)
        .flat_map(u64::to_le_bytes)
        .collect();
    write_section(out, WIRE_TO_LABEL, &labels)
}

/// In-memory `.r1cs` image
pub fn r1cs_bytes<F: CircuitField>(circuit: &CircuitDescription<F>) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_r1cs(circuit, &mut bytes)?;
    Ok(bytes)
}
