//! Optional observer hook for the intermediate values of each round.
//!
//! The cipher pipelines report every step to a [`RoundObserver`]. The default observer,
//! [`NoTrace`], does nothing and compiles away, so tracing is never part of the cipher result.
//! Labels and round numbering follow the worked examples in FIPS-197 Appendix C.

use std::fmt;

use crate::aes::state::Block;

/// Which pipeline produced an event.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Forward,
    Inverse,
}

/// The step of a round an event was recorded after.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum TraceStep {
    /// The block as supplied, before round 0.
    Input,
    /// State at the start of a round.
    Start,
    SubBytes,
    ShiftRows,
    MixColumns,
    /// The round key about to be added. The event value is the key, not the state.
    RoundKey,
    /// State after adding the round key (reported by the inverse pipeline only).
    AddRoundKey,
    /// The resulting block.
    Output,
}

impl TraceStep {
    /// FIPS-197 Appendix C label for this step.
    pub fn label(self, direction: Direction) -> &'static str {
        match (direction, self) {
            (Direction::Forward, TraceStep::Input) => "input",
            (Direction::Forward, TraceStep::Start) => "start",
            (Direction::Forward, TraceStep::SubBytes) => "s_box",
            (Direction::Forward, TraceStep::ShiftRows) => "s_row",
            (Direction::Forward, TraceStep::MixColumns) => "m_col",
            (Direction::Forward, TraceStep::RoundKey) => "k_sch",
            (Direction::Forward, TraceStep::AddRoundKey) => "k_add",
            (Direction::Forward, TraceStep::Output) => "output",
            (Direction::Inverse, TraceStep::Input) => "iinput",
            (Direction::Inverse, TraceStep::Start) => "istart",
            (Direction::Inverse, TraceStep::SubBytes) => "is_box",
            (Direction::Inverse, TraceStep::ShiftRows) => "is_row",
            (Direction::Inverse, TraceStep::MixColumns) => "im_col",
            (Direction::Inverse, TraceStep::RoundKey) => "ik_sch",
            (Direction::Inverse, TraceStep::AddRoundKey) => "ik_add",
            (Direction::Inverse, TraceStep::Output) => "ioutput",
        }
    }
}

/// One traced value. `round` counts up from 0 to `Nr` in both directions.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TraceEvent {
    pub direction: Direction,
    pub round: usize,
    pub step: TraceStep,
    pub value: Block,
}

impl TraceEvent {
    pub fn label(&self) -> &'static str {
        self.step.label(self.direction)
    }
}

struct Hex<'a>(&'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Renders as `round[ 1].s_box   63cab7040953d051cd60e0e7ba70e18c`.
impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round[{:>2}].{:<8}{}", self.round, self.label(), Hex(&self.value))
    }
}

/// Receives every intermediate value of a block transformation, in order.
pub trait RoundObserver {
    fn observe(&mut self, event: &TraceEvent) {
        let _ = event;
    }
}

/// Observer that ignores everything. Used by the untraced entry points.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoTrace;

impl RoundObserver for NoTrace {}

impl<F> RoundObserver for F
where
    F: FnMut(&TraceEvent),
{
    fn observe(&mut self, event: &TraceEvent) {
        self(event)
    }
}

/// Collects events in memory.
#[derive(Clone, Default, Debug)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    /// Events with the given label, e.g. every `"s_box"` state.
    pub fn find<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a TraceEvent> + 'a {
        self.events.iter().filter(move |e| e.label() == label)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl RoundObserver for TraceRecorder {
    fn observe(&mut self, event: &TraceEvent) {
        self.events.push(*event);
    }
}

/// Forwards events to `tracing` at TRACE level.
#[derive(Copy, Clone, Default, Debug)]
pub struct TracingObserver;

impl RoundObserver for TracingObserver {
    fn observe(&mut self, event: &TraceEvent) {
        tracing::trace!(
            direction = ?event.direction,
            round = event.round,
            step = event.label(),
            value = %Hex(&event.value),
            "aes round"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_appendix_c() {
        let event = TraceEvent {
            direction: Direction::Forward,
            round: 1,
            step: TraceStep::SubBytes,
            value: [
                0x63, 0xca, 0xb7, 0x04, 0x09, 0x53, 0xd0, 0x51, 0xcd, 0x60, 0xe0, 0xe7, 0xba,
                0x70, 0xe1, 0x8c,
            ],
        };
        assert_eq!(
            event.to_string(),
            "round[ 1].s_box   63cab7040953d051cd60e0e7ba70e18c"
        );

        let event = TraceEvent {
            direction: Direction::Inverse,
            round: 10,
            step: TraceStep::Output,
            value: [0u8; 16],
        };
        assert_eq!(
            event.to_string(),
            "round[10].ioutput 00000000000000000000000000000000"
        );
    }

    #[test]
    fn labels_differ_by_direction() {
        assert_eq!(TraceStep::ShiftRows.label(Direction::Forward), "s_row");
        assert_eq!(TraceStep::ShiftRows.label(Direction::Inverse), "is_row");
        assert_eq!(TraceStep::RoundKey.label(Direction::Inverse), "ik_sch");
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = 0usize;
        {
            let mut count = |_: &TraceEvent| seen += 1;
            let event = TraceEvent {
                direction: Direction::Forward,
                round: 0,
                step: TraceStep::Input,
                value: [0u8; 16],
            };
            count.observe(&event);
            count.observe(&event);
        }
        assert_eq!(seen, 2);
    }
}
