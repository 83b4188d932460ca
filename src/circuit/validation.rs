//! Input pre-checks
//!
//! Mirrors the circuit on plain integers so a bad `(p, q)` is reported with
//! the violated condition before any witness is computed. For inputs that
//! pass, the honest witness satisfies every constraint.

use super::RsaSetupParams;
use crate::errors::{InputViolation, Result};
use crate::gadgets::smallest_table_factor;

/// Check primality of `p`, then of `q`, then `p != q`, then the ranges
///
/// Fails with `InvalidParameter` before looking at the operands when
/// `params` is out of bounds.
pub fn validate_inputs(params: &RsaSetupParams, p: u64, q: u64) -> Result<()> {
    params.validate()?;
    check_operands(params, p, q)?;
    Ok(())
}

fn check_operands(params: &RsaSetupParams, p: u64, q: u64) -> std::result::Result<(), InputViolation> {
    for (signal, value) in [("p", p), ("q", q)] {
        if let Some(divisor) = smallest_table_factor(value) {
            return Err(InputViolation::NotPrime {
                signal,
                value,
                divisor,
            });
        }
    }

    if p == q {
        return Err(InputViolation::NotDistinct { value: p });
    }

    let (min, max) = (params.min_value(), params.max_value());
    for (signal, value) in [("p", p), ("q", q)] {
        if !(min..=max).contains(&value) {
            return Err(InputViolation::OutOfRange {
                signal,
                value,
                min,
                max,
            });
        }
    }

    Ok(())
}
