use super::card::Card;
use super::category::HandCategory;
use super::strength::Strength;

/// Values forming the low-end straight, where the Ace plays as 1.
const WHEEL: [u8; 5] = [14, 5, 4, 3, 2];

/// Pure 5- and 7-card hand evaluation.
///
/// [`seven`](Self::seven) enumerates all 21 five-card subsets and keeps the
/// maximum under category-then-tiebreak ordering. [`five`](Self::five) tries
/// detectors from the strongest category down and returns the first match.
/// Deterministic and side-effect free, so it can be property tested
/// exhaustively.
pub struct Evaluator;

impl Evaluator {
    /// The best five-card hand makeable from seven cards.
    pub fn seven(cards: &[Card]) -> Strength {
        assert_eq!(cards.len(), 7, "seven-card evaluation");
        let mut best: Option<Strength> = None;
        let mut five = [cards[0]; 5];
        for i in 0..7 {
            for j in (i + 1)..7 {
                let mut n = 0;
                for (index, &card) in cards.iter().enumerate() {
                    if index != i && index != j {
                        five[n] = card;
                        n += 1;
                    }
                }
                let strength = Self::five(&five);
                if best.as_ref().is_none_or(|b| strength > *b) {
                    best = Some(strength);
                }
            }
        }
        best.expect("seven cards yield 21 subsets")
    }

    /// Evaluate exactly five cards.
    pub fn five(cards: &[Card]) -> Strength {
        assert_eq!(cards.len(), 5, "five-card evaluation");
        None.or_else(|| Self::royal_flush(cards))
            .or_else(|| Self::straight_flush(cards))
            .or_else(|| Self::four_of_a_kind(cards))
            .or_else(|| Self::full_house(cards))
            .or_else(|| Self::flush(cards))
            .or_else(|| Self::straight(cards))
            .or_else(|| Self::three_of_a_kind(cards))
            .or_else(|| Self::two_pair(cards))
            .or_else(|| Self::one_pair(cards))
            .unwrap_or_else(|| Self::high_card(cards))
    }

    fn royal_flush(cards: &[Card]) -> Option<Strength> {
        Self::straight_flush(cards)
            .filter(|s| s.tiebreak().values() == [14])
            .map(|_| Strength::from((HandCategory::RoyalFlush, vec![])))
    }
    fn straight_flush(cards: &[Card]) -> Option<Strength> {
        Self::flush(cards)
            .and_then(|_| Self::straight_top(cards))
            .map(|top| Strength::from((HandCategory::StraightFlush, vec![top])))
    }
    fn four_of_a_kind(cards: &[Card]) -> Option<Strength> {
        Self::value_of_count(cards, 4, &[]).map(|quad| {
            let kicker = Self::kickers(cards, &[quad], 1);
            Strength::from((HandCategory::FourOfAKind, [vec![quad], kicker].concat()))
        })
    }
    fn full_house(cards: &[Card]) -> Option<Strength> {
        Self::value_of_count(cards, 3, &[]).and_then(|trips| {
            Self::value_of_count(cards, 2, &[trips])
                .map(|pair| Strength::from((HandCategory::FullHouse, vec![trips, pair])))
        })
    }
    fn flush(cards: &[Card]) -> Option<Strength> {
        cards
            .iter()
            .all(|c| c.suit() == cards[0].suit())
            .then(|| Strength::from((HandCategory::Flush, Self::values_desc(cards))))
    }
    fn straight(cards: &[Card]) -> Option<Strength> {
        Self::straight_top(cards).map(|top| Strength::from((HandCategory::Straight, vec![top])))
    }
    fn three_of_a_kind(cards: &[Card]) -> Option<Strength> {
        Self::value_of_count(cards, 3, &[]).map(|trips| {
            let kickers = Self::kickers(cards, &[trips], 2);
            Strength::from((HandCategory::ThreeOfAKind, [vec![trips], kickers].concat()))
        })
    }
    fn two_pair(cards: &[Card]) -> Option<Strength> {
        Self::value_of_count(cards, 2, &[]).and_then(|hi| {
            Self::value_of_count(cards, 2, &[hi]).map(|lo| {
                let kicker = Self::kickers(cards, &[hi, lo], 1);
                Strength::from((HandCategory::TwoPair, [vec![hi, lo], kicker].concat()))
            })
        })
    }
    fn one_pair(cards: &[Card]) -> Option<Strength> {
        Self::value_of_count(cards, 2, &[]).map(|pair| {
            let kickers = Self::kickers(cards, &[pair], 3);
            Strength::from((HandCategory::OnePair, [vec![pair], kickers].concat()))
        })
    }
    fn high_card(cards: &[Card]) -> Strength {
        Strength::from((HandCategory::HighCard, Self::values_desc(cards)))
    }

    /// Top value of a five-card straight, if any. Checks tops 14 down to 6,
    /// then the wheel, whose top value is 5.
    fn straight_top(cards: &[Card]) -> Option<u8> {
        let present = |v: u8| cards.iter().any(|c| c.rank().value() == v);
        (6..=14)
            .rev()
            .find(|&top| (0..5).all(|i| present(top - i)))
            .or_else(|| WHEEL.iter().all(|&v| present(v)).then_some(5))
    }

    /// Highest rank value occurring exactly `n` times, ignoring `skip`.
    fn value_of_count(cards: &[Card], n: usize, skip: &[u8]) -> Option<u8> {
        (2..=14).rev().find(|&v| {
            !skip.contains(&v) && cards.iter().filter(|c| c.rank().value() == v).count() == n
        })
    }

    /// The `n` highest values not already consumed by the made hand.
    fn kickers(cards: &[Card], used: &[u8], n: usize) -> Vec<u8> {
        let mut rest = cards
            .iter()
            .map(|c| c.rank().value())
            .filter(|v| !used.contains(v))
            .collect::<Vec<u8>>();
        rest.sort_unstable_by(|a, b| b.cmp(a));
        rest.truncate(n);
        rest
    }

    fn values_desc(cards: &[Card]) -> Vec<u8> {
        let mut values = cards.iter().map(|c| c.rank().value()).collect::<Vec<u8>>();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values
    }
}
