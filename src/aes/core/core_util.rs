use crate::aes::core::field::{add, multiply};
use crate::aes::state::{Block, State};
use crate::aes::trace::{Direction, RoundObserver, TraceEvent, TraceStep};

#[inline(always)]
pub(crate) fn emit<O: RoundObserver + ?Sized>(
    observer: &mut O,
    direction: Direction,
    round: usize,
    step: TraceStep,
    value: Block,
) {
    observer.observe(&TraceEvent {
        direction,
        round,
        step,
        value,
    });
}

/// XORs one round key into the state. Word `c` becomes column `c`, most significant byte in row 0.
/// Self-inverse, so both pipelines use it.
#[inline(always)]
pub(crate) fn add_round_key(state: &mut State, round_key: &[u32; 4]) {
    for (col, word) in round_key.iter().enumerate() {
        let key_col = word.to_be_bytes();
        let mut column = state.column(col);
        for (b, k) in column.iter_mut().zip(key_col) {
            *b = add(*b, k);
        }
        state.set_column(col, column);
    }
}

/// Replaces every column with `matrix * column` over GF(2^8).
#[inline(always)]
pub(crate) fn transform_columns(state: &mut State, matrix: &[[u8; 4]; 4]) {
    for col in 0..4 {
        let column = state.column(col);
        let mut mixed = [0u8; 4];
        for (out, coeffs) in mixed.iter_mut().zip(matrix) {
            *out = coeffs
                .iter()
                .zip(column)
                .fold(0, |acc, (&c, b)| add(acc, multiply(c, b)));
        }
        state.set_column(col, mixed);
    }
}
