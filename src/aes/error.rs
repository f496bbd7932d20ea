use thiserror::Error;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate an AES key with an input size that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Provided a block to encrypt or decrypt that was not exactly 16 bytes.
    #[error("invalid block length: {len} bytes (expected 16)")]
    InvalidBlockLength { len: usize },
}
