mod cipher;
mod core;
mod error;
mod key;
mod schedule;
mod state;
mod trace;

pub use cipher::{Cipher, decrypt, encrypt};
pub use error::{Error, Result};
pub use key::{Key, KeySize};
pub use schedule::KeySchedule;
pub use state::{BLOCK_SIZE, Block, State};
pub use trace::{
    Direction, NoTrace, RoundObserver, TraceEvent, TraceRecorder, TraceStep, TracingObserver,
};
