use super::category::HandCategory;

/// Ordered rank values breaking ties within one category, most significant
/// first, compared lexicographically. Each category produces its own key
/// shape; keys are only ever compared between hands of equal category.
///
/// A Royal Flush carries an empty key: all Royal Flushes are rank-identical,
/// so they compare equal and split the pot.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TiebreakKey(Vec<u8>);

impl From<Vec<u8>> for TiebreakKey {
    fn from(values: Vec<u8>) -> Self {
        Self(values)
    }
}

impl TiebreakKey {
    pub fn values(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for TiebreakKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for value in &self.0 {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}

/// A hand's strength: category first, tiebreak key second.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Strength {
    category: HandCategory,
    tiebreak: TiebreakKey,
}

impl Strength {
    pub fn new(category: HandCategory, tiebreak: TiebreakKey) -> Self {
        Self { category, tiebreak }
    }
    pub fn category(&self) -> HandCategory {
        self.category
    }
    pub fn tiebreak(&self) -> &TiebreakKey {
        &self.tiebreak
    }
}

impl From<(HandCategory, Vec<u8>)> for Strength {
    fn from((category, values): (HandCategory, Vec<u8>)) -> Self {
        Self::new(category, TiebreakKey::from(values))
    }
}

impl Ord for Strength {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.category
            .strength()
            .cmp(&other.category.strength())
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}
impl PartialOrd for Strength {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<16} {}", self.category, self.tiebreak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_dominates_tiebreak() {
        let pair = Strength::from((HandCategory::OnePair, vec![14, 13, 12, 11]));
        let trips = Strength::from((HandCategory::ThreeOfAKind, vec![2, 5, 4]));
        assert!(trips > pair);
    }

    #[test]
    fn tiebreak_is_lexicographic() {
        let better = Strength::from((HandCategory::TwoPair, vec![14, 3, 5]));
        let worse = Strength::from((HandCategory::TwoPair, vec![13, 12, 11]));
        assert!(better > worse);
        let kicker = Strength::from((HandCategory::TwoPair, vec![14, 3, 6]));
        assert!(kicker > better);
    }

    #[test]
    fn royal_flushes_are_equal() {
        let a = Strength::from((HandCategory::RoyalFlush, vec![]));
        let b = Strength::from((HandCategory::RoyalFlush, vec![]));
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    }
}
