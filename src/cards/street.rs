use crate::Chips;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const fn all() -> [Self; 4] {
        [Self::Preflop, Self::Flop, Self::Turn, Self::River]
    }
    /// Community cards revealed when this street is dealt.
    pub const fn n_revealed(&self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn => 1,
            Self::River => 1,
        }
    }
    /// Fixed-limit bet/raise increment: one big blind on the early streets,
    /// two big blinds on turn and river.
    pub const fn fixed_increment(&self, bblind: Chips) -> Chips {
        match self {
            Self::Preflop | Self::Flop => bblind,
            Self::Turn | Self::River => bblind * 2,
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Preflop => write!(f, "Preflop"),
            Self::Flop => write!(f, "Flop"),
            Self::Turn => write!(f, "Turn"),
            Self::River => write!(f, "River"),
        }
    }
}
