use crate::aes::core::{decrypt_block, encrypt_block};
use crate::aes::error::Result;
use crate::aes::key::{Key, KeySize};
use crate::aes::schedule::KeySchedule;
use crate::aes::state::{Block, try_block};
use crate::aes::trace::{NoTrace, RoundObserver};

/// Single-block AES encryption and decryption.
/// Instantiated with an AES [Key], which is expanded into a [KeySchedule] once and stored in
/// the instance. The schedule is never modified afterwards, so one `Cipher` can be shared
/// across threads working on independent blocks.
///
/// ## Examples
/// ```
/// # fn main() -> aesfips::Result<()> {
/// use aesfips::{Cipher, Key};
///
/// let key = Key::try_from_slice(&[0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
///                                 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c])?;
/// let cipher = Cipher::new(&key);
///
/// let plaintext = [0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d,
///                  0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07, 0x34];
/// let ciphertext = cipher.encrypt_block(&plaintext)?;
/// assert_eq!(ciphertext[..4], [0x39u8, 0x25, 0x84, 0x1d]);
/// assert_eq!(cipher.decrypt_block(&ciphertext)?, plaintext);
///
/// // blocks must be exactly 16 bytes
/// assert!(cipher.encrypt_block(&plaintext[..15]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Cipher {
    schedule: KeySchedule,
}

impl Cipher {
    /// Generates the key schedule from the provided key and stores it in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self {
            schedule: KeySchedule::new(key),
        }
    }

    /// Getter for the internal key schedule.
    pub fn key_schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    pub fn key_size(&self) -> KeySize {
        self.schedule.key_size()
    }

    /// Encrypts one 16-byte block. Returns an InvalidBlockLength error for any other length.
    pub fn encrypt_block(&self, plaintext: &[u8]) -> Result<Block> {
        self.encrypt_block_traced(plaintext, &mut NoTrace)
    }

    /// Decrypts one 16-byte block. Returns an InvalidBlockLength error for any other length.
    pub fn decrypt_block(&self, ciphertext: &[u8]) -> Result<Block> {
        self.decrypt_block_traced(ciphertext, &mut NoTrace)
    }

    /// Same as [encrypt_block](Cipher::encrypt_block), reporting every intermediate state and
    /// round key to `observer`.
    pub fn encrypt_block_traced<O>(&self, plaintext: &[u8], observer: &mut O) -> Result<Block>
    where
        O: RoundObserver + ?Sized,
    {
        let block = try_block(plaintext)?;
        Ok(encrypt_block(&block, &self.schedule, observer))
    }

    /// Same as [decrypt_block](Cipher::decrypt_block), reporting every intermediate state and
    /// round key to `observer`.
    pub fn decrypt_block_traced<O>(&self, ciphertext: &[u8], observer: &mut O) -> Result<Block>
    where
        O: RoundObserver + ?Sized,
    {
        let block = try_block(ciphertext)?;
        Ok(decrypt_block(&block, &self.schedule, observer))
    }
}

/// Encrypts one block under a raw key of 16, 24, or 32 bytes.
///
/// The key length is checked first, then the block length; nothing is expanded until both pass.
pub fn encrypt(block: &[u8], key: &[u8]) -> Result<Block> {
    let key = Key::try_from_slice(key)?;
    let block = try_block(block)?;
    Ok(encrypt_block(&block, &KeySchedule::new(&key), &mut NoTrace))
}

/// Decrypts one block under a raw key of 16, 24, or 32 bytes.
pub fn decrypt(block: &[u8], key: &[u8]) -> Result<Block> {
    let key = Key::try_from_slice(key)?;
    let block = try_block(block)?;
    Ok(decrypt_block(&block, &KeySchedule::new(&key), &mut NoTrace))
}
