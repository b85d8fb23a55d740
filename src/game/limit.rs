use crate::Chips;

/// Betting structure of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    /// Any amount from the minimum up to the full stack.
    NoLimit,
    /// Totals come off a fixed schedule, with a per-street raise cap.
    FixedLimit,
}

impl TryFrom<&str> for Limit {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "no-limit" | "nolimit" | "nl" => Ok(Self::NoLimit),
            "fixed-limit" | "fixedlimit" | "fl" => Ok(Self::FixedLimit),
            other => Err(anyhow::anyhow!("unknown limit: {}", other)),
        }
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NoLimit => write!(f, "no-limit"),
            Self::FixedLimit => write!(f, "fixed-limit"),
        }
    }
}

/// Blind sizes and betting structure for one table. Plain data passed into
/// the dealer; stakes and stacks live with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableConfig {
    pub sblind: Chips,
    pub bblind: Chips,
    pub limit: Limit,
}

impl TableConfig {
    pub const fn new(sblind: Chips, bblind: Chips, limit: Limit) -> Self {
        Self {
            sblind,
            bblind,
            limit,
        }
    }

    /// The standard lobby stakes, both structures at 1/2, 2/4 and 5/10.
    pub const fn presets() -> [Self; 6] {
        [
            Self::new(1, 2, Limit::NoLimit),
            Self::new(2, 4, Limit::NoLimit),
            Self::new(5, 10, Limit::NoLimit),
            Self::new(1, 2, Limit::FixedLimit),
            Self::new(2, 4, Limit::FixedLimit),
            Self::new(5, 10, Limit::FixedLimit),
        ]
    }
}

impl std::fmt::Display for TableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{} {}", self.sblind, self.bblind, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_limit_aliases() {
        assert_eq!(Limit::try_from("NL").unwrap(), Limit::NoLimit);
        assert_eq!(Limit::try_from("fixed-limit").unwrap(), Limit::FixedLimit);
        assert!(Limit::try_from("pot-limit").is_err());
    }

    #[test]
    fn presets_are_well_formed() {
        for preset in TableConfig::presets() {
            assert_eq!(preset.bblind, preset.sblind * 2);
        }
    }
}
