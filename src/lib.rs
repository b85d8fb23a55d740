//! Single-table Texas Hold'em simulation.
//!
//! The crate is split into three layers:
//!
//! - [`cards`] — card model and the 7-card hand evaluator
//! - [`game`] — betting-round state machine, pot ledger, and hand orchestration
//! - [`players`] — decision providers (interactive human, random CPU)
//!
//! The engine is single-threaded and strictly turn-based: exactly one seat's
//! decision is outstanding at any time, and all pot and seat mutations happen
//! inside the engine call stack for the current hand. Randomness (deck
//! permutation, CPU choices) is injected so tests can run deterministically.

pub mod cards;
pub mod game;
pub mod players;

/// Stack sizes and bet amounts in chips.
pub type Chips = u32;
/// Seat index around the table.
pub type Position = usize;

/// Hole cards dealt to each seat.
pub const HOLE_CARDS: usize = 2;
/// Fixed-limit betting caps at four commitments per street (opening bet + three raises).
pub const RAISE_CAP: usize = 4;

/// Initialize terminal logging for the binary.
/// Tests and library consumers bring their own logger.
pub fn logging() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
