use bluff_bomb::agents::AgentTable;
use bluff_bomb::console::StdConsole;
use bluff_bomb::frontend::ConsoleFrontend;
use bluff_bomb::game::{Game, GameError};
use bluff_bomb::input::InputError;
use bluff_bomb::player::PlayerId;
use bluff_bomb::rng::SeededRandom;
use clap::Parser;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bluff-bomb")]
#[command(version, about = "Bluff, question, and survive the bomb")]
struct Args {
    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Let a bot take the human seat and just watch
    #[arg(long)]
    spectate: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    // Quiet by default so logs don't interleave with the table text.
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let rng = match args.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };
    info!(seed = rng.seed(), version = bluff_bomb::VERSION, "random source ready");

    let (agents, viewer) = if args.spectate {
        (AgentTable::all_bots(), None)
    } else {
        (AgentTable::standard(), Some(PlayerId::new(0)))
    };
    let console = if args.no_color { StdConsole::plain() } else { StdConsole::new() };
    let mut frontend = ConsoleFrontend::new(console, viewer);
    let mut game = Game::new(agents, Box::new(rng));

    match game.run(&mut frontend) {
        Ok(_) => ExitCode::SUCCESS,
        Err(GameError::Input(InputError::Closed)) => {
            eprintln!("\nInput closed; leaving the table.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(error = %e, "game aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
