pub mod cpu;
pub mod human;

pub use cpu::Cpu;
pub use human::Human;

use crate::Chips;
use crate::game::ActionKind;

/// Decision capture for one seat.
///
/// The betting round derives the legal actions and their sizing bounds; the
/// provider only chooses. The engine never depends on a concrete provider,
/// so tables can mix interactive, random and scripted seats freely.
pub trait DecisionProvider {
    /// Pick one of the legal actions. `legal` is never empty.
    fn choose_action(&mut self, legal: &[ActionKind]) -> ActionKind;
    /// Pick a Bet or Raise amount in `min..=max` chips to commit.
    fn choose_amount(&mut self, min: Chips, max: Chips) -> Chips;
}
