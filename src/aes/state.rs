//! The 4x4 byte state the round transforms operate on, and its mapping to 16-byte blocks.

use std::fmt;

use crate::aes::error::{Error, Result};

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, the unit of input and output in both directions.
pub type Block = [u8; BLOCK_SIZE];

/// Validates that `bytes` is exactly one block long.
pub(crate) fn try_block(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength { len: bytes.len() })
}

/// 4x4 byte matrix, indexed `[row][col]`. The block is laid out column-major:
/// `state[row][col] == block[row + 4 * col]`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
pub struct State([[u8; 4]; 4]);

impl State {
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (i, &b) in block.iter().enumerate() {
            rows[i % 4][i / 4] = b;
        }
        Self(rows)
    }

    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        for (i, b) in block.iter_mut().enumerate() {
            *b = self.0[i % 4][i / 4];
        }
        block
    }

    /// Builds a state from its rows, as the matrices in FIPS-197 are printed.
    pub const fn from_rows(rows: [[u8; 4]; 4]) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> &[[u8; 4]; 4] {
        &self.0
    }

    #[inline(always)]
    pub(crate) fn rows_mut(&mut self) -> &mut [[u8; 4]; 4] {
        &mut self.0
    }

    #[inline(always)]
    pub(crate) fn column(&self, col: usize) -> [u8; 4] {
        [self.0[0][col], self.0[1][col], self.0[2][col], self.0[3][col]]
    }

    #[inline(always)]
    pub(crate) fn set_column(&mut self, col: usize, column: [u8; 4]) {
        for (row, b) in column.into_iter().enumerate() {
            self.0[row][col] = b;
        }
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}

/// Lowercase hex of the serialized block, as printed in FIPS-197 Appendix C.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.to_block() {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: Block = [
        0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, //
        0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07, 0x34, //
    ];

    #[test]
    fn block_is_column_major() {
        let state = State::from_block(&BLOCK);
        assert_eq!(
            *state.rows(),
            [
                [0x32, 0x88, 0x31, 0xe0],
                [0x43, 0x5a, 0x31, 0x37],
                [0xf6, 0x30, 0x98, 0x07],
                [0xa8, 0x8d, 0xa2, 0x34],
            ]
        );
        assert_eq!(state.column(1), [0x88, 0x5a, 0x30, 0x8d]);
        assert_eq!(state.to_block(), BLOCK);
    }

    #[test]
    fn set_column_writes_down_rows() {
        let mut state = State::default();
        state.set_column(2, [1, 2, 3, 4]);
        assert_eq!(state.to_block()[8..12], [1u8, 2, 3, 4]);
    }

    #[test]
    fn display_is_block_hex() {
        let state = State::from(BLOCK);
        assert_eq!(state.to_string(), "3243f6a8885a308d313198a2e0370734");
    }

    #[test]
    fn try_block_checks_length() {
        assert_eq!(try_block(&BLOCK), Ok(BLOCK));
        assert_eq!(try_block(&BLOCK[..15]), Err(Error::InvalidBlockLength { len: 15 }));
        assert_eq!(try_block(&[0u8; 17]), Err(Error::InvalidBlockLength { len: 17 }));
        assert_eq!(try_block(&[]), Err(Error::InvalidBlockLength { len: 0 }));
    }
}
