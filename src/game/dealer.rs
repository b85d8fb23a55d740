use crate::Chips;
use crate::HOLE_CARDS;
use crate::Position;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Evaluator;
use crate::cards::Street;
use crate::game::betting::BettingRound;
use crate::game::event::Event;
use crate::game::event::EventSink;
use crate::game::limit::TableConfig;
use crate::game::pot::PotLedger;
use crate::game::seat::Seat;
use rand::Rng;

use crate::players::DecisionProvider;

/// Sequences complete hands over a fixed ring of seats.
///
/// Owns the seats, their decision providers, the board and the pot ledger.
/// The RNG is injected so whole sessions replay under a fixed seed; all
/// rendering goes through the injected [`EventSink`].
pub struct Dealer<R: Rng> {
    config: TableConfig,
    seats: Vec<Seat>,
    providers: Vec<Box<dyn DecisionProvider>>,
    pots: PotLedger,
    board: Vec<Card>,
    button: Position,
    hand: u64,
    rng: R,
}

impl<R: Rng> Dealer<R> {
    pub fn new(
        config: TableConfig,
        stacks: Vec<Chips>,
        providers: Vec<Box<dyn DecisionProvider>>,
        rng: R,
    ) -> Self {
        assert!(stacks.len() >= 2, "a table seats at least two");
        assert_eq!(stacks.len(), providers.len());
        Self {
            config,
            seats: stacks
                .into_iter()
                .enumerate()
                .map(|(i, stack)| Seat::new(i, stack))
                .collect(),
            providers,
            pots: PotLedger::new(),
            board: Vec::new(),
            button: 0,
            hand: 0,
            rng,
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn stacks(&self) -> Vec<Chips> {
        self.seats.iter().map(Seat::stack).collect()
    }
    pub fn button(&self) -> Position {
        self.button
    }

    /// Draws one card per seat after a burn; the highest card (rank, then
    /// suit) takes the button. The cards go back with the deck.
    pub fn initial_button(&mut self) -> Position {
        let mut deck = Deck::shuffled(&mut self.rng);
        deck.burn();
        self.button = self
            .seats
            .iter()
            .map(|_| deck.draw())
            .enumerate()
            .max_by_key(|(_, card)| *card)
            .map(|(position, _)| position)
            .expect("at least two seats");
        self.button
    }

    /// Plays one complete hand: blinds, hole cards, the four streets with
    /// betting and pot collection, then showdown or an uncontested award.
    /// Afterwards the table is reset and the button advances.
    pub fn play_hand(&mut self, sink: &mut dyn EventSink) {
        self.hand += 1;
        log::info!("hand #{} button P{}", self.hand, self.button);
        sink.publish(Event::HandStart {
            hand: self.hand,
            button: self.button,
            stacks: self.stacks(),
        });

        let n = self.seats.len();
        let mut deck = Deck::shuffled(&mut self.rng);

        // busted seats sit the hand out
        for seat in self.seats.iter_mut() {
            if seat.stack() == 0 {
                seat.fold();
            }
        }

        // blinds, capped at the stack
        let sb = (self.button + 1) % n;
        let bb = (self.button + 2) % n;
        for (seat, blind) in [(sb, self.config.sblind), (bb, self.config.bblind)] {
            if !self.seats[seat].state().is_live() {
                continue;
            }
            let chips = blind.min(self.seats[seat].stack());
            self.seats[seat].bet(chips);
            sink.publish(Event::Blind { seat, chips });
        }

        // hole cards, one pass at a time starting left of the button
        deck.burn();
        for _ in 0..HOLE_CARDS {
            for i in 0..n {
                let seat = (self.button + 1 + i) % n;
                if self.seats[seat].state().is_live() {
                    let card = deck.draw();
                    self.seats[seat].deal(card);
                }
            }
        }
        for seat in self.seats.iter().filter(|s| s.state().is_live()) {
            sink.publish(Event::HoleCards {
                seat: seat.position(),
                hole: seat.hole().to_vec(),
            });
        }

        for street in Street::all() {
            if street.n_revealed() > 0 {
                deck.burn();
                for _ in 0..street.n_revealed() {
                    self.board.push(deck.draw());
                }
                sink.publish(Event::Board {
                    street,
                    board: self.board.clone(),
                });
            }
            let live = BettingRound::new(
                &mut self.seats,
                &mut self.providers,
                self.config,
                street,
                self.button,
            )
            .run(sink);
            self.pots.collect(&mut self.seats);
            sink.publish(Event::PotTotal {
                chips: self.pots.total(),
            });
            if live.len() == 1 {
                let award = self.pots.distribute_uncontested(&mut self.seats);
                log::info!("hand #{} uncontested, P{} wins {}", self.hand, award.seat, award.chips);
                sink.publish(Event::Award {
                    seat: award.seat,
                    chips: award.chips,
                });
                return self.finish(sink);
            }
        }

        // showdown
        for pos in 0..n {
            if self.seats[pos].state().is_live() {
                let mut seven = self.seats[pos].hole().to_vec();
                seven.extend_from_slice(&self.board);
                let strength = Evaluator::seven(&seven);
                sink.publish(Event::Reveal {
                    seat: pos,
                    hole: self.seats[pos].hole().to_vec(),
                    strength: strength.clone(),
                });
                self.seats[pos].show(strength);
            }
        }
        for award in self.pots.distribute(&mut self.seats) {
            log::info!("hand #{} P{} wins {}", self.hand, award.seat, award.chips);
            sink.publish(Event::Award {
                seat: award.seat,
                chips: award.chips,
            });
        }
        self.finish(sink)
    }

    fn finish(&mut self, sink: &mut dyn EventSink) {
        for seat in self.seats.iter_mut() {
            seat.reset();
        }
        self.board.clear();
        self.pots = PotLedger::new();
        sink.publish(Event::HandEnd {
            hand: self.hand,
            stacks: self.stacks(),
        });
        self.button = (self.button + 1) % self.seats.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::event::NullSink;
    use crate::game::event::RecordingSink;
    use crate::game::limit::Limit;
    use crate::players::Cpu;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn cpus(n: usize) -> Vec<Box<dyn DecisionProvider>> {
        (0..n)
            .map(|i| Box::new(Cpu::seeded(100 + i as u64)) as Box<dyn DecisionProvider>)
            .collect()
    }

    #[test]
    fn initial_button_is_a_valid_seat() {
        let config = TableConfig::new(1, 2, Limit::NoLimit);
        let mut dealer = Dealer::new(config, vec![100; 4], cpus(4), SmallRng::seed_from_u64(3));
        let button = dealer.initial_button();
        assert!(button < 4);
        assert_eq!(dealer.button(), button);
        // no cards stick to the seats
        assert!(dealer.seats().iter().all(|s| s.hole().is_empty()));
    }

    #[test]
    fn chips_are_conserved_across_many_hands() {
        let config = TableConfig::new(1, 2, Limit::NoLimit);
        let mut dealer = Dealer::new(config, vec![200; 4], cpus(4), SmallRng::seed_from_u64(7));
        for _ in 0..50 {
            dealer.play_hand(&mut NullSink);
            assert_eq!(dealer.stacks().iter().sum::<Chips>(), 800);
            assert!(dealer.seats().iter().all(|s| s.current_bet() == 0));
        }
    }

    #[test]
    fn chips_are_conserved_in_fixed_limit() {
        let config = TableConfig::new(2, 4, Limit::FixedLimit);
        let mut dealer = Dealer::new(config, vec![150; 3], cpus(3), SmallRng::seed_from_u64(11));
        for _ in 0..50 {
            dealer.play_hand(&mut NullSink);
            assert_eq!(dealer.stacks().iter().sum::<Chips>(), 450);
        }
    }

    #[test]
    fn seeded_sessions_replay_identically() {
        let config = TableConfig::new(1, 2, Limit::NoLimit);
        let run = || {
            let mut dealer =
                Dealer::new(config, vec![100; 3], cpus(3), SmallRng::seed_from_u64(21));
            for _ in 0..10 {
                dealer.play_hand(&mut NullSink);
            }
            dealer.stacks()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn a_hand_emits_a_coherent_event_stream() {
        let config = TableConfig::new(1, 2, Limit::NoLimit);
        let mut dealer = Dealer::new(config, vec![100; 3], cpus(3), SmallRng::seed_from_u64(2));
        let mut sink = RecordingSink::default();
        dealer.play_hand(&mut sink);
        let events = &sink.0;
        assert!(matches!(events.first(), Some(Event::HandStart { .. })));
        assert!(matches!(events.last(), Some(Event::HandEnd { .. })));
        let blinds = events
            .iter()
            .filter(|e| matches!(e, Event::Blind { .. }))
            .count();
        assert_eq!(blinds, 2);
        let holes = events
            .iter()
            .filter(|e| matches!(e, Event::HoleCards { hole, .. } if hole.len() == 2))
            .count();
        assert_eq!(holes, 3);
        // every chip awarded is accounted for by the final stacks
        let awarded: Chips = events
            .iter()
            .filter_map(|e| match e {
                Event::Award { chips, .. } => Some(*chips),
                _ => None,
            })
            .sum();
        assert!(awarded > 0);
        if let Some(Event::HandEnd { stacks, .. }) = events.last() {
            assert_eq!(stacks.iter().sum::<Chips>(), 300);
        }
    }

    #[test]
    fn busted_seats_sit_out() {
        let config = TableConfig::new(1, 2, Limit::NoLimit);
        let mut dealer =
            Dealer::new(config, vec![100, 0, 100], cpus(3), SmallRng::seed_from_u64(13));
        let mut sink = RecordingSink::default();
        dealer.play_hand(&mut sink);
        // the empty seat posts nothing, is dealt nothing, and wins nothing
        for event in &sink.0 {
            match event {
                Event::Blind { seat, .. } => assert_ne!(*seat, 1),
                Event::HoleCards { seat, .. } => assert_ne!(*seat, 1),
                Event::Action { seat, .. } => assert_ne!(*seat, 1),
                Event::Reveal { seat, .. } => assert_ne!(*seat, 1),
                Event::Award { seat, .. } => assert_ne!(*seat, 1),
                _ => {}
            }
        }
        assert_eq!(dealer.stacks()[1], 0);
        assert_eq!(dealer.stacks().iter().sum::<Chips>(), 200);
    }

    #[test]
    fn button_advances_every_hand() {
        let config = TableConfig::new(1, 2, Limit::NoLimit);
        let mut dealer = Dealer::new(config, vec![100; 3], cpus(3), SmallRng::seed_from_u64(5));
        assert_eq!(dealer.button(), 0);
        dealer.play_hand(&mut NullSink);
        assert_eq!(dealer.button(), 1);
        dealer.play_hand(&mut NullSink);
        assert_eq!(dealer.button(), 2);
        dealer.play_hand(&mut NullSink);
        assert_eq!(dealer.button(), 0);
    }
}
