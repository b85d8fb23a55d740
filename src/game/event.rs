use crate::Chips;
use crate::Position;
use crate::cards::Card;
use crate::cards::Street;
use crate::cards::Strength;
use crate::game::action::Action;

/// Everything observable about a hand as it unfolds. The engine publishes
/// these to an [`EventSink`]; rendering stays outside the core.
#[derive(Debug, Clone)]
pub enum Event {
    HandStart {
        hand: u64,
        button: Position,
        stacks: Vec<Chips>,
    },
    Blind {
        seat: Position,
        chips: Chips,
    },
    /// A seat's private hole cards.
    HoleCards {
        seat: Position,
        hole: Vec<Card>,
    },
    /// Community cards after a street's reveal (cumulative board).
    Board {
        street: Street,
        board: Vec<Card>,
    },
    Action {
        seat: Position,
        action: Action,
    },
    /// Pots after a street's bets were collected.
    PotTotal {
        chips: Chips,
    },
    /// Showdown reveal of a live seat's evaluated hand.
    Reveal {
        seat: Position,
        hole: Vec<Card>,
        strength: Strength,
    },
    Award {
        seat: Position,
        chips: Chips,
    },
    HandEnd {
        hand: u64,
        stacks: Vec<Chips>,
    },
}

pub trait EventSink {
    fn publish(&mut self, event: Event);
}

/// Discards everything. Used in tests and simulations.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&mut self, _: Event) {}
}

/// Collects events for inspection.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink(pub Vec<Event>);

#[cfg(test)]
impl EventSink for RecordingSink {
    fn publish(&mut self, event: Event) {
        self.0.push(event);
    }
}
