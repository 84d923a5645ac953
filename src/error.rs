use thiserror::Error;

/// Every way a public operation in this crate can fail.
///
/// All arithmetic here is pure: no variant carries a wrapped source error,
/// since every failure is detected by this crate's own range/shape checks
/// rather than by delegating to something external.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Division or inversion of the zero element, in `B` or `X`.
    #[error("cannot invert the zero element")]
    InverseOfZero,

    /// The requested order has no entry in the primitive-root-of-unity table.
    #[error("no primitive root of unity of the requested order")]
    NoRootOfUnity,

    /// An NTT sequence length was not a power of two, or exceeded 2^32.
    #[error("sequence length must be a power of two and at most 2^32")]
    InvalidLength,

    /// A raw byte/u16 decoder saw a value `>= p`.
    #[error("value is not in canonical range [0, p)")]
    NotCanonical,

    /// Converting `B` to a narrow integer type would truncate its range.
    #[error("canonical value is out of range for the target integer type")]
    OutOfRange,

    /// A decimal text parse saw a non-digit character.
    #[error("invalid decimal digit")]
    InvalidDigit,

    /// A hex text parse saw a non-hex-digit character.
    #[error("invalid hexadecimal digit")]
    InvalidHexChar,

    /// A parsed magnitude exceeded the parser's precision bound.
    #[error("parsed value overflows the supported precision")]
    ParseOverflow,

    /// `X::unlift` was called on an element with non-zero c1 or c2.
    #[error("extension element has non-zero higher coefficients and cannot be unlifted")]
    InvalidUnlift,
}

pub type Result<T> = core::result::Result<T, Error>;
