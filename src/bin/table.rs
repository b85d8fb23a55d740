use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use riverboat::Chips;
use riverboat::cards::Card;
use riverboat::game::Dealer;
use riverboat::game::Event;
use riverboat::game::EventSink;
use riverboat::game::Limit;
use riverboat::game::TableConfig;
use riverboat::players::Cpu;
use riverboat::players::DecisionProvider;
use riverboat::players::Human;

/// Interactive hold'em table: you in seat P0 against CPU opponents.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Lobby preset 1-6: 1/2, 2/4, 5/10 stakes, no-limit then fixed-limit
    #[arg(long, conflicts_with_all = ["sblind", "bblind", "limit"])]
    preset: Option<usize>,
    /// Small blind
    #[arg(long, default_value_t = 1)]
    sblind: Chips,
    /// Big blind
    #[arg(long, default_value_t = 2)]
    bblind: Chips,
    /// Betting structure: no-limit or fixed-limit
    #[arg(long, default_value = "no-limit")]
    limit: String,
    /// Number of CPU opponents
    #[arg(long, default_value_t = 3)]
    cpus: usize,
    /// Starting stack for every seat
    #[arg(long, default_value_t = 200)]
    stack: Chips,
    /// Hands to play before the session ends
    #[arg(long, default_value_t = 20)]
    hands: usize,
    /// Replay seed for the deck and the CPU seats
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    riverboat::logging();
    let args = Args::parse();
    anyhow::ensure!(args.cpus >= 1, "at least one CPU opponent");

    let config = match args.preset {
        Some(i) => *TableConfig::presets()
            .get(i.wrapping_sub(1))
            .context("preset is 1-6")?,
        None => TableConfig::new(
            args.sblind,
            args.bblind,
            Limit::try_from(args.limit.as_str())?,
        ),
    };

    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut providers: Vec<Box<dyn DecisionProvider>> = vec![Box::new(Human)];
    for i in 0..args.cpus {
        providers.push(Box::new(match args.seed {
            Some(seed) => Cpu::seeded(seed + 1 + i as u64),
            None => Cpu::new(),
        }));
    }
    let stacks = vec![args.stack; providers.len()];

    let mut dealer = Dealer::new(config, stacks, providers, rng);
    let button = dealer.initial_button();
    println!("{} table, {} seats, you are P0", config, args.cpus + 1);
    println!("High card takes the button: P{}", button);

    let mut sink = Printer;
    for _ in 0..args.hands {
        dealer.play_hand(&mut sink);
        if dealer.stacks()[0] == 0 {
            println!("You are out of chips.");
            break;
        }
        if dealer.stacks().iter().filter(|&&s| s > 0).count() < 2 {
            println!("The table is broke.");
            break;
        }
    }
    println!("Final stacks: {:?}", dealer.stacks());
    Ok(())
}

/// Renders the event stream to stdout. Hole cards print for P0 only.
struct Printer;

impl EventSink for Printer {
    fn publish(&mut self, event: Event) {
        match event {
            Event::HandStart { hand, button, .. } => {
                println!("\n=== Hand #{} (button P{}) ===", hand, button)
            }
            Event::Blind { seat, chips } => println!("P{} posts {}", seat, chips),
            Event::HoleCards { seat: 0, hole } => println!("Your cards: {}", join(&hole)),
            Event::HoleCards { .. } => {}
            Event::Board { street, board } => println!("{}: {}", street, join(&board)),
            Event::Action { seat, action } => println!("P{}: {}", seat, action),
            Event::PotTotal { chips } => println!("Pot: {}", chips),
            Event::Reveal {
                seat,
                hole,
                strength,
            } => println!("P{}: {} ({})", seat, join(&hole), strength),
            Event::Award { seat, chips } => println!("P{} wins {}", seat, chips),
            Event::HandEnd { stacks, .. } => println!("Stacks: {:?}", stacks),
        }
    }
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<String>>()
        .join(" ")
}
