use super::constants::SBOX;
use super::core_util::{add_round_key, emit, transform_columns};
use crate::aes::schedule::KeySchedule;
use crate::aes::state::{Block, State};
use crate::aes::trace::{Direction, RoundObserver, TraceStep};

const MIX_COLUMNS: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Forward cipher over one block (FIPS-197 section 5.1).
#[inline(always)]
pub(crate) fn encrypt_block<O>(plaintext: &Block, schedule: &KeySchedule, observer: &mut O) -> Block
where
    O: RoundObserver + ?Sized,
{
    const DIR: Direction = Direction::Forward;
    let nr = schedule.rounds();
    let mut state = State::from_block(plaintext);

    emit(observer, DIR, 0, TraceStep::Input, *plaintext);
    emit(observer, DIR, 0, TraceStep::RoundKey, schedule.round_key_bytes(0));
    add_round_key(&mut state, &schedule.round_key(0));

    for round in 1..=nr {
        emit(observer, DIR, round, TraceStep::Start, state.to_block());

        sub_bytes(&mut state);
        emit(observer, DIR, round, TraceStep::SubBytes, state.to_block());

        shift_rows(&mut state);
        emit(observer, DIR, round, TraceStep::ShiftRows, state.to_block());

        // the final round has no MixColumns
        if round != nr {
            mix_columns(&mut state);
            emit(observer, DIR, round, TraceStep::MixColumns, state.to_block());
        }

        emit(observer, DIR, round, TraceStep::RoundKey, schedule.round_key_bytes(round));
        add_round_key(&mut state, &schedule.round_key(round));
    }

    let ciphertext = state.to_block();
    emit(observer, DIR, nr, TraceStep::Output, ciphertext);
    ciphertext
}

#[inline(always)]
pub(crate) fn sub_bytes(state: &mut State) {
    for row in state.rows_mut() {
        for byte in row {
            *byte = SBOX[*byte as usize];
        }
    }
}

/// Row `r` rotates left by `r` columns.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut State) {
    for (r, row) in state.rows_mut().iter_mut().enumerate() {
        row.rotate_left(r);
    }
}

#[inline(always)]
pub(crate) fn mix_columns(state: &mut State) {
    transform_columns(state, &MIX_COLUMNS);
}
