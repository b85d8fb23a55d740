//! Card model and hand evaluation.

pub mod card;
pub mod category;
pub mod deck;
pub mod evaluator;
pub mod rank;
pub mod street;
pub mod strength;
pub mod suit;

pub use card::Card;
pub use category::HandCategory;
pub use deck::Deck;
pub use evaluator::Evaluator;
pub use rank::Rank;
pub use street::Street;
pub use strength::Strength;
pub use strength::TiebreakKey;
pub use suit::Suit;
