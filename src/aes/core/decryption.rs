use super::constants::SBOX_INV;
use super::core_util::{add_round_key, emit, transform_columns};
use crate::aes::schedule::KeySchedule;
use crate::aes::state::{Block, State};
use crate::aes::trace::{Direction, RoundObserver, TraceStep};

const INV_MIX_COLUMNS: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Inverse cipher over one block (FIPS-197 section 5.3). Round keys are consumed last to first;
/// trace events still count rounds upwards.
#[inline(always)]
pub(crate) fn decrypt_block<O>(ciphertext: &Block, schedule: &KeySchedule, observer: &mut O) -> Block
where
    O: RoundObserver + ?Sized,
{
    const DIR: Direction = Direction::Inverse;
    let nr = schedule.rounds();
    let mut state = State::from_block(ciphertext);

    emit(observer, DIR, 0, TraceStep::Input, *ciphertext);
    emit(observer, DIR, 0, TraceStep::RoundKey, schedule.round_key_bytes(nr));
    add_round_key(&mut state, &schedule.round_key(nr));

    for round in (0..nr).rev() {
        let step = nr - round;
        emit(observer, DIR, step, TraceStep::Start, state.to_block());

        shift_rows_inv(&mut state);
        emit(observer, DIR, step, TraceStep::ShiftRows, state.to_block());

        sub_bytes_inv(&mut state);
        emit(observer, DIR, step, TraceStep::SubBytes, state.to_block());

        emit(observer, DIR, step, TraceStep::RoundKey, schedule.round_key_bytes(round));
        add_round_key(&mut state, &schedule.round_key(round));

        // round 0 has no InvMixColumns
        if round != 0 {
            emit(observer, DIR, step, TraceStep::AddRoundKey, state.to_block());
            mix_columns_inv(&mut state);
        }
    }

    let plaintext = state.to_block();
    emit(observer, DIR, nr, TraceStep::Output, plaintext);
    plaintext
}

#[inline(always)]
pub(crate) fn sub_bytes_inv(state: &mut State) {
    for row in state.rows_mut() {
        for byte in row {
            *byte = SBOX_INV[*byte as usize];
        }
    }
}

/// Row `r` rotates right by `r` columns.
#[inline(always)]
pub(crate) fn shift_rows_inv(state: &mut State) {
    for (r, row) in state.rows_mut().iter_mut().enumerate() {
        row.rotate_right(r);
    }
}

#[inline(always)]
pub(crate) fn mix_columns_inv(state: &mut State) {
    transform_columns(state, &INV_MIX_COLUMNS);
}
