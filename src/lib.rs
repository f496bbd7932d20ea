//! AES block cipher (FIPS-197): one 16-byte block at a time under 128, 192, or 256-bit keys.
//! Modes of operation, padding, and key derivation are left to the caller.

mod aes;

pub use aes::{
    BLOCK_SIZE, Block, Cipher, Direction, Error, Key, KeySchedule, KeySize, NoTrace, Result,
    RoundObserver, State, TraceEvent, TraceRecorder, TraceStep, TracingObserver, decrypt, encrypt,
};
