pub mod action;
pub mod betting;
pub mod dealer;
pub mod event;
pub mod ledger;
pub mod limit;
pub mod pot;
pub mod seat;

pub use action::Action;
pub use action::ActionKind;
pub use betting::BettingRound;
pub use dealer::Dealer;
pub use event::Event;
pub use event::EventSink;
pub use event::NullSink;
pub use ledger::BetLedger;
pub use limit::Limit;
pub use limit::TableConfig;
pub use pot::Award;
pub use pot::Pot;
pub use pot::PotLedger;
pub use seat::Seat;
pub use seat::SeatState;
