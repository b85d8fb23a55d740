use super::rank::Rank;
use super::suit::Suit;

/// An immutable card. Construction from strings is validated; an invalid
/// suit or rank never reaches the evaluator.
///
/// The derived order (rank first, suit second) is used only for the initial
/// button draw.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// str isomorphism, e.g. "As", "Td", "9c"
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.len() < 2 {
            return Err(anyhow::anyhow!("invalid card: {}", s));
        }
        let (rank, suit) = s.split_at(s.len() - 1);
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        for s in ["As", "Td", "9c", "2h"] {
            let card = Card::try_from(s).unwrap();
            assert_eq!(card.to_string(), s);
        }
    }

    #[test]
    fn parse_rejects_invalid() {
        assert!(Card::try_from("Ax").is_err());
        assert!(Card::try_from("1s").is_err());
        assert!(Card::try_from("").is_err());
        assert!(Card::try_from("s").is_err());
    }

    #[test]
    fn button_draw_order() {
        let ace = Card::try_from("Ac").unwrap();
        let king = Card::try_from("Ks").unwrap();
        assert!(ace > king);
        // equal ranks fall back to suit order
        let low = Card::try_from("Ac").unwrap();
        let high = Card::try_from("As").unwrap();
        assert!(high > low);
    }
}
