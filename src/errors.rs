//! Error types.

/// Alias for [`core::result::Result`] with the `rsa4096` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[non_exhaustive]
pub enum Error {
    /// Ciphertext or padded block is not exactly the modulus size.
    InvalidLength,

    /// Ciphertext representative is not smaller than the modulus.
    CiphertextOutOfRange,

    /// Modulus is not a 4096-bit odd integer.
    InvalidModulus,

    /// Private exponent is zero or not smaller than the modulus.
    InvalidExponent,

    /// Key material is not valid URL-safe base64.
    InvalidEncoding,

    /// OAEP padding did not verify.
    Padding,

    /// Integer does not fit in the requested number of bytes.
    ValueTooLarge,

    /// Requested MGF1 mask length exceeds `hLen * 2^32`.
    MaskTooLong,

    /// Hardware-backed decryption is not available.
    HardwareUnavailable,

    /// The random source failed or never produced a usable blinding factor.
    RandomnessExhausted,

    /// The key generation collaborator failed.
    KeyGeneration,
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum ErrorKind {
    /// Wrong-length or malformed ciphertext or key material.
    Structural,
    /// Any OAEP check failed.
    Padding,
    /// A fixed-width encoding invariant was violated.
    Encoding,
    /// The hardware path could not be used.
    HardwareUnavailable,
    /// The secure random source failed.
    RandomnessExhausted,
    /// Key pair generation failed.
    KeyGeneration,
}

impl Error {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidLength
            | Error::CiphertextOutOfRange
            | Error::InvalidModulus
            | Error::InvalidExponent
            | Error::InvalidEncoding => ErrorKind::Structural,
            Error::Padding => ErrorKind::Padding,
            Error::ValueTooLarge | Error::MaskTooLong => ErrorKind::Encoding,
            Error::HardwareUnavailable => ErrorKind::HardwareUnavailable,
            Error::RandomnessExhausted => ErrorKind::RandomnessExhausted,
            Error::KeyGeneration => ErrorKind::KeyGeneration,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidLength => write!(f, "invalid length"),
            Error::CiphertextOutOfRange => write!(f, "ciphertext out of range"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::InvalidExponent => write!(f, "invalid exponent"),
            Error::InvalidEncoding => write!(f, "invalid base64url encoding"),
            Error::Padding => write!(f, "decryption error"),
            Error::ValueTooLarge => write!(f, "number too large"),
            Error::MaskTooLong => write!(f, "mask too long"),
            Error::HardwareUnavailable => write!(f, "hardware decryption unavailable"),
            Error::RandomnessExhausted => write!(f, "secure random source exhausted"),
            Error::KeyGeneration => write!(f, "key generation failed"),
        }
    }
}

impl From<base64ct::Error> for Error {
    fn from(_: base64ct::Error) -> Error {
        Error::InvalidEncoding
    }
}

impl From<rand_core::Error> for Error {
    fn from(_: rand_core::Error) -> Error {
        Error::RandomnessExhausted
    }
}
