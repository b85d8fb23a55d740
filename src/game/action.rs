use crate::Chips;

/// The shape of a decision, before sizing. This is what a
/// [`DecisionProvider`](crate::players::DecisionProvider) chooses from; the
/// betting round turns it into a sized [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fold => "fold",
            Self::Check => "check",
            Self::Call => "call",
            Self::Bet => "bet",
            Self::Raise => "raise",
            Self::AllIn => "all-in",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A sized, applied decision, as it happened at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Fold,
    Check,
    Call(Chips),
    Bet(Chips),
    Raise(Chips),
    AllIn(Chips),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Fold => ActionKind::Fold,
            Self::Check => ActionKind::Check,
            Self::Call(_) => ActionKind::Call,
            Self::Bet(_) => ActionKind::Bet,
            Self::Raise(_) => ActionKind::Raise,
            Self::AllIn(_) => ActionKind::AllIn,
        }
    }
    /// Chips this action moved from stack to street.
    pub fn chips(&self) -> Chips {
        match self {
            Self::Fold | Self::Check => 0,
            Self::Call(c) | Self::Bet(c) | Self::Raise(c) | Self::AllIn(c) => *c,
        }
    }
    /// True for actions that can raise the table max and re-open the round.
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Self::Bet(_) | Self::Raise(_) | Self::AllIn(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "FOLD"),
            Self::Check => write!(f, "CHECK"),
            Self::Call(c) => write!(f, "CALL {}", c),
            Self::Bet(c) => write!(f, "BET {}", c),
            Self::Raise(c) => write!(f, "RAISE {}", c),
            Self::AllIn(c) => write!(f, "ALL-IN {}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip() {
        assert_eq!(Action::Call(50).kind(), ActionKind::Call);
        assert_eq!(Action::Fold.kind(), ActionKind::Fold);
        assert_eq!(Action::AllIn(75).chips(), 75);
        assert_eq!(Action::Check.chips(), 0);
    }

    #[test]
    fn aggression() {
        assert!(Action::Bet(10).is_aggressive());
        assert!(Action::AllIn(1).is_aggressive());
        assert!(!Action::Call(10).is_aggressive());
        assert!(!Action::Check.is_aggressive());
    }
}
