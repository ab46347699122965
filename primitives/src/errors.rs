use thiserror::Error;

/// Errors related to KZG operations.
///
/// Decoding failures, arithmetic failures and setup inconsistencies all
/// surface through this one enum. A proof that simply does not verify is not
/// an error: verification returns `Ok(false)`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KzgError {
    /// Input byte string had the wrong length.
    #[error("expected {expected} bytes, got {got}")]
    DecodeLengthMismatch { expected: usize, got: usize },

    /// A 32-byte scalar encoded a value greater than or equal to the field modulus.
    #[error("non-canonical field element: {0}")]
    NonCanonicalValue(String),

    /// Point bytes were malformed, off the curve or outside the prime-order subgroup.
    #[error("invalid point encoding: {0}")]
    InvalidPointEncoding(String),

    #[error("division by zero")]
    DivisionByZero,

    /// Sequences that must be paired element-wise had different lengths.
    #[error("length mismatch: {0}")]
    LengthMismatch(String),

    /// Setup data (domain, commit key, opening key) failed validation.
    #[error("corrupt configuration: {0}")]
    ConfigurationCorrupt(String),

    /// Error related to serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// The trusted setup could not be read or parsed.
    #[error("trusted setup load error: {0}")]
    SetupLoadError(String),
}
