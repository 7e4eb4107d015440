use std::error::Error;
use std::io::{self, IsTerminal};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod console;
mod render;
mod session;

use console::Console;
use session::{Session, DEFAULT_BANKROLL};

#[derive(Parser)]
#[command(name = "blackjack-table", about = "Play blackjack against the dealer in your terminal")]
struct Cli {
    /// Money you sit down with
    #[arg(
        long,
        env = "BLACKJACK_BANKROLL",
        default_value_t = DEFAULT_BANKROLL,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    bankroll: u64,

    /// Seed for reproducible shuffles
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Print suits without color
    #[arg(long)]
    no_color: bool,

    /// Diagnostics written to stderr: off, error, warn, info, debug, trace.
    /// RUST_LOG takes precedence when set.
    #[arg(long, env = "BLACKJACK_LOG", default_value = "warn")]
    log_level: log::LevelFilter,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let rng = match cli.seed {
        Some(seed) => {
            log::info!("shuffling with seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    let mut console = Console::new(io::stdin().lock(), stdout.lock(), color);
    console.show_rules()?;

    let mut session = Session::new(cli.bankroll, rng);
    let end = session.run(&mut console)?;
    log::info!(
        "session over ({:?}) after {} rounds with {}",
        end,
        session.rounds(),
        session.bankroll()
    );

    Ok(())
}
