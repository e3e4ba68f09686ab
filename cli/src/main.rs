use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use minesweeper_alpha_core::{GameSession, Seed, SeedError, SessionState};

use banner::{Banner, Banners};
use console::Console;

mod banner;
mod console;

const QUIT_MESSAGE: &str = "Quitting the game..\nBye!.";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed file with the board size, mine count and mine positions
    seed: PathBuf,

    /// Directory holding the welcome, win and loss banners
    #[arg(short, long, default_value = "resources")]
    resources: PathBuf,

    /// Print a JSON summary line when the game ends
    #[arg(long)]
    summary: bool,

    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

/// Exit status for a failed run, seed problems get their own codes.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<SeedError>() {
        Some(SeedError::NotFound(_)) => 2,
        Some(_) => 3,
        None => 1,
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let banners = Banners::new(&args.resources);
    log::debug!("Banners from {}", banners.dir().display());
    if let Some(welcome) = banners.load(Banner::Welcome) {
        print!("{welcome}");
    }

    let seed = Seed::load(&args.seed)?;
    let mut session = GameSession::from_seed(&seed);
    let mut console = Console::stdio();
    let state = session.run(&mut console).context("Game aborted")?;

    match state {
        SessionState::Won => {
            println!();
            print!("{}", banners.won(session.score().unwrap_or_default()));
        }
        SessionState::Lost => {
            if let Some(lost) = banners.load(Banner::Lost) {
                print!("{lost}");
            }
        }
        SessionState::Quit => println!("{QUIT_MESSAGE}"),
        SessionState::Playing => anyhow::bail!("Game stopped while still in progress"),
    }

    if args.summary {
        println!("{}", serde_json::to_string(&session.summary())?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();
    log::debug!("args: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!();
            eprintln!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}
