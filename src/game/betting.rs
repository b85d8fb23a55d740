use crate::Chips;
use crate::Position;
use crate::cards::Street;
use crate::game::action::Action;
use crate::game::action::ActionKind;
use crate::game::event::Event;
use crate::game::event::EventSink;
use crate::game::ledger::BetLedger;
use crate::game::limit::Limit;
use crate::game::limit::TableConfig;
use crate::game::seat::Seat;

use crate::players::DecisionProvider;

/// One street of betting over a ring of seats.
///
/// Action starts three seats left of the button (preflop this is the seat
/// after the big blind; heads-up it is the small blind) and proceeds
/// clockwise until every non-folded seat has acted or shoved and every seat
/// still able to act matches the table max. Any Bet or Raise that lifts the
/// max re-opens the round for everyone else.
///
/// The round owns the street's [`BetLedger`]; in a fixed-limit structure all
/// Bet/Raise totals come off it and it caps the street at four commitments.
pub struct BettingRound<'a> {
    seats: &'a mut [Seat],
    providers: &'a mut [Box<dyn DecisionProvider>],
    config: TableConfig,
    street: Street,
    button: Position,
    ledger: BetLedger,
    /// Size of the last full bet or raise increment; a following raise must
    /// add at least this much beyond the call.
    last_raise: Chips,
}

impl<'a> BettingRound<'a> {
    pub fn new(
        seats: &'a mut [Seat],
        providers: &'a mut [Box<dyn DecisionProvider>],
        config: TableConfig,
        street: Street,
        button: Position,
    ) -> Self {
        assert_eq!(seats.len(), providers.len());
        let ledger = match street {
            Street::Preflop => BetLedger::preflop(config.bblind),
            _ => BetLedger::postflop(),
        };
        Self {
            seats,
            providers,
            config,
            street,
            button,
            ledger,
            last_raise: config.bblind,
        }
    }

    /// Runs the street to completion and returns the non-folded positions.
    pub fn run(&mut self, sink: &mut dyn EventSink) -> Vec<Position> {
        let n = self.seats.len();
        for seat in self.seats.iter_mut() {
            seat.clear_acted();
        }
        let start = (self.button + 3) % n;
        loop {
            for i in 0..n {
                let pos = (start + i) % n;
                let live = self.live();
                if live.len() == 1 {
                    return live;
                }
                if live.iter().all(|&p| !self.seats[p].state().may_act()) {
                    return live;
                }
                if !self.seats[pos].state().may_act() {
                    continue;
                }
                self.act(pos, sink);
                if self.is_closed() {
                    return self.live();
                }
            }
        }
    }

    fn live(&self) -> Vec<Position> {
        self.seats
            .iter()
            .filter(|s| s.state().is_live())
            .map(Seat::position)
            .collect()
    }

    fn max_bet(&self) -> Chips {
        self.seats
            .iter()
            .map(Seat::current_bet)
            .max()
            .unwrap_or(0)
    }

    /// All non-folded seats have acted or shoved, and every seat still able
    /// to act matches the table max.
    fn is_closed(&self) -> bool {
        let max = self.max_bet();
        self.seats
            .iter()
            .filter(|s| s.state().is_live())
            .all(|s| s.has_acted() || !s.state().may_act())
            && self
                .seats
                .iter()
                .filter(|s| s.state().may_act())
                .all(|s| s.current_bet() == max)
    }

    fn act(&mut self, pos: Position, sink: &mut dyn EventSink) {
        let max = self.max_bet();
        let legal = self.legal(pos, max);
        let kind = self.providers[pos].choose_action(&legal);
        debug_assert!(legal.contains(&kind), "provider picked a legal action");
        let action = self.apply(pos, kind, max);
        self.seats[pos].mark_acted();
        log::debug!("{} P{}: {}", self.street, pos, action);
        if action.is_aggressive() && self.seats[pos].current_bet() > max {
            self.reopen(pos);
        }
        sink.publish(Event::Action { seat: pos, action });
    }

    /// Legal action kinds for the seat, in presentation order.
    fn legal(&self, pos: Position, max: Chips) -> Vec<ActionKind> {
        let seat = &self.seats[pos];
        let bet = seat.current_bet();
        let stack = seat.stack();
        let mut legal = vec![ActionKind::Fold];
        if bet < max {
            if stack <= max - bet {
                legal.push(ActionKind::AllIn);
            } else {
                legal.push(ActionKind::Call);
            }
            if max < bet + stack && self.may_open() {
                legal.push(ActionKind::Raise);
            }
        } else {
            legal.push(ActionKind::Check);
            if max < bet + stack && self.may_open() {
                legal.push(ActionKind::Bet);
            }
        }
        legal
    }

    fn may_open(&self) -> bool {
        match self.config.limit {
            Limit::NoLimit => true,
            Limit::FixedLimit => !self.ledger.is_capped(),
        }
    }

    fn apply(&mut self, pos: Position, kind: ActionKind, max: Chips) -> Action {
        let bet = self.seats[pos].current_bet();
        let stack = self.seats[pos].stack();
        match kind {
            ActionKind::Fold => {
                self.seats[pos].fold();
                Action::Fold
            }
            ActionKind::Check => Action::Check,
            ActionKind::Call => {
                let chips = max - bet;
                self.seats[pos].bet(chips);
                Action::Call(chips)
            }
            ActionKind::AllIn => {
                // covering the shortfall (or less) with the whole stack
                self.seats[pos].bet(stack);
                Action::AllIn(stack)
            }
            ActionKind::Bet => self.open(pos, kind, max, self.config.bblind.min(stack)),
            ActionKind::Raise => self.open(pos, kind, max, ((max - bet) + self.last_raise).min(stack)),
        }
    }

    /// Applies a Bet or Raise. No-limit sizing is the provider's choice in
    /// `min..=stack`; fixed-limit totals come off the ledger.
    fn open(&mut self, pos: Position, kind: ActionKind, max: Chips, min: Chips) -> Action {
        let bet = self.seats[pos].current_bet();
        let stack = self.seats[pos].stack();
        let chips = match self.config.limit {
            Limit::NoLimit => self.providers[pos].choose_amount(min, stack).clamp(min, stack),
            Limit::FixedLimit => {
                let increment = self.street.fixed_increment(self.config.bblind);
                (self.ledger.next_total(increment) - bet).min(stack)
            }
        };
        self.seats[pos].bet(chips);
        let total = self.seats[pos].current_bet();
        match self.config.limit {
            Limit::NoLimit => self.last_raise = total - max,
            Limit::FixedLimit => self.ledger.commit(total),
        }
        if chips == stack {
            Action::AllIn(chips)
        } else if kind == ActionKind::Bet {
            Action::Bet(chips)
        } else {
            Action::Raise(chips)
        }
    }

    /// A lifted max re-opens the action for every other seat that can still
    /// make a decision.
    fn reopen(&mut self, pos: Position) {
        for seat in self.seats.iter_mut() {
            if seat.position() != pos && seat.state().may_act() {
                seat.clear_acted();
            }
        }
    }
}
