//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits.
//! Keys are built from an existing byte slice and are immutable once constructed.

use crate::aes::error::{Error, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// The three AES key sizes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// Number of 32-bit words comprising the key (`Nk`): 4, 6, or 8.
    pub const fn nk(self) -> usize {
        match self {
            KeySize::Bits128 => 4,
            KeySize::Bits192 => 6,
            KeySize::Bits256 => 8,
        }
    }

    /// Number of rounds (`Nr = Nk + 6`): 10, 12, or 14.
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }
}

/// Contains a valid AES key, built from a slice of bytes that is 16, 24, or 32 bytes long.
/// A `Key` is required to instantiate a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> aesfips::Result<()> {
/// use aesfips::{Key, KeySize};
///
/// let key_bytes: [u8; 32] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE, 0x82, 0x06, 0xBA, 0x53, 0xC2, 0xC7, 0x55,
///                            0x2C, 0x72, 0xC5, 0x37, 0xBF, 0xD4, 0xDB, 0x5E];
/// let my_key_128 = Key::try_from_slice(&key_bytes[..16])?;
/// let my_key_256 = Key::try_from_slice(&key_bytes[..32])?;
///
/// assert_eq!(my_key_128.as_bytes(), &key_bytes[..16]);
/// assert_eq!(my_key_256.size(), KeySize::Bits256);
///
/// // Anything other than 16, 24, or 32 bytes is an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let err = Error::InvalidKeyLength { len: bytes.len() };
        let bytes = match bytes.len() {
            16 => KeyBytes::K128(bytes.try_into().map_err(|_| err)?),
            24 => KeyBytes::K192(bytes.try_into().map_err(|_| err)?),
            32 => KeyBytes::K256(bytes.try_into().map_err(|_| err)?),
            _ => return Err(err),
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes)
    }
}
