use crate::Chips;
use crate::Position;
use crate::cards::Card;
use crate::cards::Strength;

/// Betting status within one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatState {
    Betting,
    Shoving,
    Folding,
}

impl SeatState {
    /// Still competing for the pot.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Betting | Self::Shoving)
    }
    /// Still able to make decisions.
    pub fn may_act(&self) -> bool {
        matches!(self, Self::Betting)
    }
}

impl std::fmt::Display for SeatState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Betting => write!(f, "B"),
            Self::Shoving => write!(f, "S"),
            Self::Folding => write!(f, "F"),
        }
    }
}

/// A player's state at the table.
///
/// Tracks chips behind, the street's committed bet, hole cards, and the
/// evaluated showdown strength once the hand reaches one. Chip movement goes
/// through [`bet`](Self::bet) and [`win`](Self::win) only, so conservation
/// can be checked at the table level.
#[derive(Debug, Clone)]
pub struct Seat {
    position: Position,
    state: SeatState,
    stack: Chips,
    current_bet: Chips,
    has_acted: bool,
    hole: Vec<Card>,
    best_hand: Option<Strength>,
}

impl Seat {
    pub fn new(position: Position, stack: Chips) -> Self {
        Self {
            position,
            state: SeatState::Betting,
            stack,
            current_bet: 0,
            has_acted: false,
            hole: Vec::new(),
            best_hand: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }
    pub fn state(&self) -> SeatState {
        self.state
    }
    /// Chips behind, not yet committed.
    pub fn stack(&self) -> Chips {
        self.stack
    }
    /// Chips committed on the current street, not yet collected into pots.
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }
    pub fn hole(&self) -> &[Card] {
        &self.hole
    }
    pub fn best_hand(&self) -> Option<&Strength> {
        self.best_hand.as_ref()
    }

    /// Commits chips from stack toward the current street. Consuming the
    /// whole stack transitions the seat to all-in.
    pub fn bet(&mut self, chips: Chips) {
        assert!(chips <= self.stack, "bet within stack");
        self.stack -= chips;
        self.current_bet += chips;
        if self.stack == 0 {
            self.state = SeatState::Shoving;
        }
    }
    /// Moves part of the street bet into a pot.
    pub fn deduct_bet(&mut self, chips: Chips) {
        assert!(chips <= self.current_bet, "deduct within committed bet");
        self.current_bet -= chips;
    }
    pub fn win(&mut self, chips: Chips) {
        self.stack += chips;
    }
    pub fn fold(&mut self) {
        self.state = SeatState::Folding;
    }
    pub fn mark_acted(&mut self) {
        self.has_acted = true;
    }
    pub fn clear_acted(&mut self) {
        self.has_acted = false;
    }
    pub fn deal(&mut self, card: Card) {
        self.hole.push(card);
    }
    pub fn show(&mut self, strength: Strength) {
        self.best_hand = Some(strength);
    }

    /// Clears per-hand state. The stack carries over.
    pub fn reset(&mut self) {
        self.state = SeatState::Betting;
        self.current_bet = 0;
        self.has_acted = false;
        self.hole.clear();
        self.best_hand = None;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "P{} {} ${:>4} (${})",
            self.position, self.state, self.stack, self.current_bet
        )
    }
}
