use crate::Chips;
use crate::Position;
use crate::game::seat::Seat;
use std::collections::BTreeMap;

/// One pot, with per-seat contribution history.
///
/// Eligibility is derived, never stored: a seat is eligible for a pot iff its
/// contribution meets the cap, the largest single amount any seat has paid in.
/// The cap tracks single payments, not cumulative totals, because the main
/// pot keeps accumulating across streets: a seat that fully matched one
/// street's tier must not lose eligibility to a later street's bet. Short
/// all-in contributions and folded seats' dead money stay in the ledger but
/// win nothing.
#[derive(Debug, Clone, Default)]
pub struct Pot {
    total: Chips,
    cap: Chips,
    contributions: BTreeMap<Position, Chips>,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Chips {
        self.total
    }
    pub fn contribution(&self, seat: Position) -> Chips {
        self.contributions.get(&seat).copied().unwrap_or(0)
    }

    pub fn add_contribution(&mut self, seat: Position, chips: Chips) {
        self.total += chips;
        self.cap = self.cap.max(chips);
        *self.contributions.entry(seat).or_insert(0) += chips;
    }

    /// Largest single contribution paid into this pot.
    pub fn cap_per_seat(&self) -> Chips {
        self.cap
    }

    /// Seats whose contribution meets the cap, in position order.
    pub fn eligible(&self) -> Vec<Position> {
        self.contributions
            .iter()
            .filter(|&(_, &chips)| self.cap > 0 && chips >= self.cap)
            .map(|(&seat, _)| seat)
            .collect()
    }
}

/// One pot's payout to one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    pub seat: Position,
    pub chips: Chips,
}

/// The main pot and its side pots, in creation order.
#[derive(Debug, Clone)]
pub struct PotLedger(Vec<Pot>);

impl Default for PotLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl PotLedger {
    pub fn new() -> Self {
        Self(vec![Pot::new()])
    }

    pub fn pots(&self) -> &[Pot] {
        &self.0
    }
    pub fn total(&self) -> Chips {
        self.0.iter().map(Pot::total).sum()
    }

    /// Sweeps every seat's street bet into pots at the end of a street.
    ///
    /// The distinct positive bets of non-folded seats, ascending, form the
    /// tier boundaries. The first tier accumulates into the main pot; each
    /// later boundary opens a side pot capping shorter all-ins below it.
    /// Folded seats pay into each tier up to their own bet. Whatever remains
    /// above the top boundary is dead money and sweeps into one trailing pot.
    /// Afterwards every street bet is zero.
    pub fn collect(&mut self, seats: &mut [Seat]) {
        let mut boundaries = seats
            .iter()
            .filter(|s| s.state().is_live() && s.current_bet() > 0)
            .map(Seat::current_bet)
            .collect::<Vec<Chips>>();
        boundaries.sort_unstable();
        boundaries.dedup();

        let mut last = 0;
        for (tier, &boundary) in boundaries.iter().enumerate() {
            if tier > 0 {
                self.0.push(Pot::new());
            }
            let pot = if tier == 0 {
                &mut self.0[0]
            } else {
                self.0.last_mut().expect("pot just pushed")
            };
            for seat in seats.iter_mut() {
                let contribution = (boundary - last).min(seat.current_bet());
                if contribution > 0 {
                    pot.add_contribution(seat.position(), contribution);
                    seat.deduct_bet(contribution);
                }
            }
            last = boundary;
        }

        // dead money above the top live bet
        if seats.iter().any(|s| s.current_bet() > 0) {
            let mut pot = Pot::new();
            for seat in seats.iter_mut() {
                let rest = seat.current_bet();
                if rest > 0 {
                    pot.add_contribution(seat.position(), rest);
                    seat.deduct_bet(rest);
                }
            }
            self.0.push(pot);
        }

        debug_assert!(seats.iter().all(|s| s.current_bet() == 0));
    }

    /// Pays out every pot at showdown. Candidates for a pot are its eligible
    /// non-folded contributors; a pot holding only dead money falls back to
    /// the non-folded field. The best strength takes the pot, split evenly on
    /// ties with odd chips going one apiece to the earliest positions.
    pub fn distribute(&self, seats: &mut [Seat]) -> Vec<Award> {
        let mut awards = Vec::new();
        for pot in self.0.iter().filter(|p| p.total() > 0) {
            let live = |p: &Position| seats[*p].state().is_live();
            let mut candidates = pot.eligible();
            candidates.retain(&live);
            if candidates.is_empty() {
                candidates = seats
                    .iter()
                    .filter(|s| s.state().is_live())
                    .map(Seat::position)
                    .collect();
            }
            let best = candidates
                .iter()
                .map(|&p| seats[p].best_hand().expect("live seats evaluated"))
                .max()
                .expect("at least one live seat")
                .clone();
            let winners = candidates
                .iter()
                .copied()
                .filter(|&p| *seats[p].best_hand().expect("live seats evaluated") == best)
                .collect::<Vec<Position>>();
            let share = pot.total() / winners.len() as Chips;
            let bonus = pot.total() % winners.len() as Chips;
            for (i, &winner) in winners.iter().enumerate() {
                let chips = share + if (i as Chips) < bonus { 1 } else { 0 };
                seats[winner].win(chips);
                awards.push(Award {
                    seat: winner,
                    chips,
                });
            }
        }
        awards
    }

    /// Pays everything to the lone remaining seat, no evaluation.
    pub fn distribute_uncontested(&self, seats: &mut [Seat]) -> Award {
        let winner = seats
            .iter_mut()
            .find(|s| s.state().is_live())
            .expect("one live seat remains");
        let chips = self.total();
        winner.win(chips);
        Award {
            seat: winner.position(),
            chips,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::HandCategory;
    use crate::cards::Strength;

    fn seats_with_bets(bets: &[Chips]) -> Vec<Seat> {
        bets.iter()
            .enumerate()
            .map(|(i, &bet)| {
                let mut seat = Seat::new(i, 1_000);
                seat.bet(bet);
                seat
            })
            .collect()
    }

    fn strength(category: HandCategory, values: Vec<u8>) -> Strength {
        Strength::from((category, values))
    }

    #[test]
    fn eligibility_requires_full_contribution() {
        let mut pot = Pot::new();
        pot.add_contribution(0, 100);
        pot.add_contribution(1, 200);
        pot.add_contribution(2, 50);
        assert_eq!(pot.cap_per_seat(), 200);
        assert_eq!(pot.eligible(), vec![1]);
        assert_eq!(pot.total(), 350);
    }

    #[test]
    fn three_way_all_in_builds_tiered_pots() {
        // stacks 50 / 100 / 150, all in
        let mut seats = seats_with_bets(&[50, 100, 150]);
        let mut pots = PotLedger::new();
        pots.collect(&mut seats);
        let totals = pots.pots().iter().map(Pot::total).collect::<Vec<Chips>>();
        assert_eq!(totals, vec![150, 100, 50]);
        assert_eq!(pots.pots()[0].eligible(), vec![0, 1, 2]);
        assert_eq!(pots.pots()[1].eligible(), vec![1, 2]);
        assert_eq!(pots.pots()[2].eligible(), vec![2]);
        assert!(seats.iter().all(|s| s.current_bet() == 0));
    }

    #[test]
    fn collection_conserves_chips() {
        let mut seats = seats_with_bets(&[30, 70, 70, 10]);
        seats[3].fold();
        let committed: Chips = seats.iter().map(Seat::current_bet).sum();
        let mut pots = PotLedger::new();
        pots.collect(&mut seats);
        assert_eq!(pots.total(), committed);
        assert!(seats.iter().all(|s| s.current_bet() == 0));
    }

    #[test]
    fn folded_overage_sweeps_into_trailing_pot() {
        // the folder committed more than any live bet
        let mut seats = seats_with_bets(&[20, 20, 35]);
        seats[2].fold();
        let mut pots = PotLedger::new();
        pots.collect(&mut seats);
        let totals = pots.pots().iter().map(Pot::total).collect::<Vec<Chips>>();
        assert_eq!(totals, vec![60, 15]);
        // trailing pot has no live contributor; payout falls back to the field
        seats[0].show(strength(HandCategory::OnePair, vec![10, 9, 8, 7]));
        seats[1].show(strength(HandCategory::HighCard, vec![14, 12, 10, 8, 6]));
        let awards = pots.distribute(&mut seats);
        assert_eq!(
            awards,
            vec![Award { seat: 0, chips: 60 }, Award { seat: 0, chips: 15 }]
        );
    }

    #[test]
    fn short_all_in_wins_only_the_main_pot() {
        let mut seats = seats_with_bets(&[50, 100, 100]);
        let mut pots = PotLedger::new();
        pots.collect(&mut seats);
        seats[0].show(strength(HandCategory::Flush, vec![14, 10, 8, 4, 2]));
        seats[1].show(strength(HandCategory::Straight, vec![9]));
        seats[2].show(strength(HandCategory::OnePair, vec![2, 14, 13, 12]));
        let awards = pots.distribute(&mut seats);
        assert_eq!(
            awards,
            vec![
                Award {
                    seat: 0,
                    chips: 150
                },
                Award {
                    seat: 1,
                    chips: 100
                },
            ]
        );
        assert_eq!(seats[0].stack(), 950 + 150);
        assert_eq!(seats[1].stack(), 900 + 100);
    }

    #[test]
    fn ties_split_with_odd_chips_to_earliest() {
        let mut seats = seats_with_bets(&[67, 67, 67]);
        let mut pots = PotLedger::new();
        pots.collect(&mut seats);
        let tied = strength(HandCategory::Straight, vec![11]);
        seats[0].show(tied.clone());
        seats[1].show(tied.clone());
        seats[2].show(strength(HandCategory::OnePair, vec![5, 14, 13, 9]));
        let awards = pots.distribute(&mut seats);
        // 201 chips, two winners
        assert_eq!(
            awards,
            vec![
                Award {
                    seat: 0,
                    chips: 101
                },
                Award {
                    seat: 1,
                    chips: 100
                },
            ]
        );
    }

    #[test]
    fn preflop_all_in_stays_eligible_after_later_streets() {
        // seat 0 is all in for 50 preflop, seat 1 calls
        let mut seats = vec![Seat::new(0, 50), Seat::new(1, 1_000)];
        seats[0].bet(50);
        seats[1].bet(50);
        let mut pots = PotLedger::new();
        pots.collect(&mut seats);
        assert_eq!(pots.pots()[0].eligible(), vec![0, 1]);
        // flop: seat 1 bets 30 with nobody left to call; it folds into the
        // main pot without raising the cap seat 0 already matched
        seats[1].bet(30);
        pots.collect(&mut seats);
        assert_eq!(pots.pots().len(), 1);
        assert_eq!(pots.pots()[0].total(), 130);
        assert_eq!(pots.pots()[0].cap_per_seat(), 50);
        assert_eq!(pots.pots()[0].eligible(), vec![0, 1]);
        seats[0].show(strength(HandCategory::Flush, vec![14, 10, 8, 4, 2]));
        seats[1].show(strength(HandCategory::OnePair, vec![9, 14, 13, 12]));
        let awards = pots.distribute(&mut seats);
        assert_eq!(
            awards,
            vec![Award {
                seat: 0,
                chips: 130
            }]
        );
    }

    #[test]
    fn uncontested_takes_everything_without_evaluation() {
        let mut seats = seats_with_bets(&[5, 10, 10]);
        seats[0].fold();
        seats[1].fold();
        let mut pots = PotLedger::new();
        pots.collect(&mut seats);
        let award = pots.distribute_uncontested(&mut seats);
        assert_eq!(award, Award { seat: 2, chips: 25 });
        assert_eq!(seats[2].stack(), 1_015);
    }

    #[test]
    fn collect_accumulates_across_streets() {
        let mut seats = seats_with_bets(&[10, 10]);
        let mut pots = PotLedger::new();
        pots.collect(&mut seats);
        seats[0].bet(30);
        seats[1].bet(30);
        pots.collect(&mut seats);
        assert_eq!(pots.pots().len(), 1);
        assert_eq!(pots.total(), 80);
    }
}
