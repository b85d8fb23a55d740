use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;
use rand::seq::SliceRandom;

/// The fixed 52-card deck. Cards are drawn from the top (end of the Vec).
///
/// Shuffling takes a caller-supplied RNG so hands can be replayed
/// deterministically in tests.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// All 52 cards in generation order, unshuffled.
    pub fn new() -> Self {
        Self(
            Rank::all()
                .iter()
                .flat_map(|&r| Suit::all().map(|s| Card::new(r, s)))
                .collect(),
        )
    }

    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut deck = Self::new();
        deck.0.shuffle(rng);
        deck
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Card {
        self.0.pop().expect("cards remain in deck")
    }

    /// Discards the top card before a deal.
    pub fn burn(&mut self) {
        self.draw();
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    #[test]
    fn fifty_two_distinct_cards() {
        let deck = Deck::new();
        assert_eq!(deck.size(), 52);
        let distinct = deck.0.iter().copied().collect::<HashSet<Card>>();
        assert_eq!(distinct.len(), 52);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let deck = Deck::shuffled(rng);
        let distinct = deck.0.iter().copied().collect::<HashSet<Card>>();
        assert_eq!(distinct.len(), 52);
    }

    #[test]
    fn seeded_shuffles_agree() {
        let a = Deck::shuffled(&mut SmallRng::seed_from_u64(7));
        let b = Deck::shuffled(&mut SmallRng::seed_from_u64(7));
        assert_eq!(a.0, b.0);
    }

    #[test]
    fn draw_and_burn_consume() {
        let mut deck = Deck::new();
        let top = deck.draw();
        assert_eq!(deck.size(), 51);
        assert!(!deck.0.contains(&top));
        deck.burn();
        assert_eq!(deck.size(), 50);
    }
}
