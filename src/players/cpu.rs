use super::DecisionProvider;
use crate::Chips;
use crate::game::ActionKind;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// CPU seat that chooses uniformly from the legal actions and sizes
/// uniformly within the offered bounds. Seeded construction makes whole
/// hands replayable.
pub struct Cpu {
    rng: SmallRng,
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionProvider for Cpu {
    fn choose_action(&mut self, legal: &[ActionKind]) -> ActionKind {
        legal
            .choose(&mut self.rng)
            .copied()
            .expect("non empty legal actions conditional on being asked to move")
    }
    fn choose_amount(&mut self, min: Chips, max: Chips) -> Chips {
        self.rng.random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_cpus_agree() {
        let legal = [ActionKind::Fold, ActionKind::Check, ActionKind::Bet];
        let mut a = Cpu::seeded(9);
        let mut b = Cpu::seeded(9);
        for _ in 0..20 {
            assert_eq!(a.choose_action(&legal), b.choose_action(&legal));
            assert_eq!(a.choose_amount(2, 100), b.choose_amount(2, 100));
        }
    }

    #[test]
    fn amounts_stay_in_bounds() {
        let mut cpu = Cpu::seeded(1);
        for _ in 0..100 {
            let amount = cpu.choose_amount(5, 40);
            assert!((5..=40).contains(&amount));
        }
    }
}
