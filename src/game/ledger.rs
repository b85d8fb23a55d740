use crate::Chips;
use crate::RAISE_CAP;

/// Fixed-limit commitment schedule for one street.
///
/// Records the strictly increasing bet totals committed this street. Preflop
/// it opens holding the posted big blind, so the first raise builds on it;
/// every later street starts empty. Once [`RAISE_CAP`] totals are recorded
/// (the opening commitment plus three raises) no further Bet or Raise is
/// legal on the street.
#[derive(Debug, Clone, Default)]
pub struct BetLedger(Vec<Chips>);

impl BetLedger {
    /// Preflop ledger, seeded with the big blind.
    pub fn preflop(bblind: Chips) -> Self {
        Self(vec![bblind])
    }
    /// Empty ledger for flop, turn and river.
    pub fn postflop() -> Self {
        Self(Vec::new())
    }

    /// The total a Bet or Raise must reach: last committed total plus the
    /// street's fixed increment.
    pub fn next_total(&self, increment: Chips) -> Chips {
        self.0.last().copied().unwrap_or(0) + increment
    }

    /// Records a committed total.
    pub fn commit(&mut self, total: Chips) {
        debug_assert!(
            self.0.last().is_none_or(|&last| total > last),
            "ledger totals strictly increase"
        );
        self.0.push(total);
    }

    /// No further Bet or Raise this street.
    pub fn is_capped(&self) -> bool {
        self.0.len() >= RAISE_CAP
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
