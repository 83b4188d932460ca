//! Error types for circuit construction, witness computation and proving

use std::path::PathBuf;

use thiserror::Error;

/// Which condition a rejected private input violated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputViolation {
    /// `value` has a factor in the small-prime table
    #[error("{signal} = {value} must be prime (divisible by {divisor})")]
    NotPrime {
        signal: &'static str,
        value: u64,
        divisor: u64,
    },
    /// `p == q`
    #[error("p and q must be different (both are {value})")]
    NotDistinct { value: u64 },
    /// `value` is outside `[min, max]`
    #[error("{signal} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        signal: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

#[derive(Error, Debug)]
pub enum RsaSetupError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Rejected input: {0}")]
    RejectedInput(#[from] InputViolation),

    #[error("Missing input signal: {0}")]
    MissingInput(String),

    #[error("Unknown input signal: {0}")]
    UnknownInput(String),

    #[error("Invalid value for input signal {signal}: {value:?}")]
    InvalidInput { signal: String, value: String },

    #[error("Witness does not satisfy constraint #{index} ({label})")]
    Unsatisfiable { index: usize, label: String },

    #[error("R1CS verification failed: {0}")]
    R1CSVerificationFailed(String),

    #[error("Constraint synthesis failed: {0}")]
    Synthesis(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("{tool} failed (status {status}): {stderr}")]
    ExternalTool {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RsaSetupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RsaSetupError::Io {
            path: path.into(),
            source,
        }
    }

    /// Input-validation failures are reported to the caller; everything else
    /// aborts the current request.
    pub fn is_rejected_input(&self) -> bool {
        matches!(self, RsaSetupError::RejectedInput(_))
    }
}

impl From<ark_relations::r1cs::SynthesisError> for RsaSetupError {
    fn from(err: ark_relations::r1cs::SynthesisError) -> Self {
        RsaSetupError::Synthesis(err.to_string())
    }
}

impl From<ark_serialize::SerializationError> for RsaSetupError {
    fn from(err: ark_serialize::SerializationError) -> Self {
        RsaSetupError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for RsaSetupError {
    fn from(err: serde_json::Error) -> Self {
        RsaSetupError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RsaSetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages_name_the_condition() {
        let err: RsaSetupError = InputViolation::NotPrime {
            signal: "p",
            value: 32770,
            divisor: 2,
        }
        .into();
        assert!(err.is_rejected_input());
        assert_eq!(
            err.to_string(),
            "Rejected input: p = 32770 must be prime (divisible by 2)"
        );

        let err = RsaSetupError::from(InputViolation::NotDistinct { value: 32771 });
        assert!(err.to_string().contains("must be different"));
    }

    #[test]
    fn test_violation_is_the_error_source() {
        use std::error::Error as _;

        let violation = InputViolation::OutOfRange {
            signal: "q",
            value: 257,
            min: 32768,
            max: 65535,
        };
        assert_eq!(
            violation.to_string(),
            "q = 257 is outside the allowed range [32768, 65535]"
        );
        let err = RsaSetupError::from(violation.clone());
        let source = err.source().map(ToString::to_string);
        assert_eq!(source, Some(violation.to_string()));
    }

    #[test]
    fn test_other_errors_are_not_rejections() {
        let err = RsaSetupError::Unsatisfiable {
            index: 3,
            label: "valid".into(),
        };
        assert!(!err.is_rejected_input());
        assert_eq!(
            err.to_string(),
            "Witness does not satisfy constraint #3 (valid)"
        );
    }
}
