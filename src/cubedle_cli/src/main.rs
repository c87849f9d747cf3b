mod config;
mod render;
mod store;

use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{OptionExt, WrapErr};
use cubedle_core::{Cubie, DailyGame};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};

use crate::{config::Config, store::Store};

/// Recreate the hidden cube of the day, one piece at a time
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Play the cube of another day instead of today, as YYYY-M-D.
    #[arg(long, value_name = "DATE")]
    date: Option<String>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    log_level: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cube you are building.
    Show,
    /// Put a piece into a slot, e.g. `assign UFR DBR`.
    Assign {
        /// The slot to fill
        slot: Cubie,
        /// The piece to put there
        piece: Cubie,
    },
    /// Remove the piece from a slot.
    Erase {
        /// The slot to empty
        slot: Cubie,
    },
    /// Flip an edge or twist a corner in place.
    Twist {
        /// The slot whose piece to turn
        slot: Cubie,
    },
    /// Remove every piece.
    Clear,
    /// Submit your cube and get feedback on every sticker.
    Guess,
    /// Show your guess statistics.
    Stats,
    #[cfg(debug_assertions)]
    /// Print the hidden cube (This subcommand will not be visible in release mode)
    Reveal,
}

/// The seed string for a date. Months and days are not zero padded.
fn seed_for(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

fn parse_date(text: &str) -> color_eyre::Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .wrap_err_with(|| format!("The date {text:?} must look like YYYY-M-D"))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(cli.config.as_deref())?;

    let date = match &cli.date {
        Some(date) => parse_date(date)?,
        None => Local::now().date_naive(),
    };
    let seed = seed_for(date);

    let store = Store::new(
        config
            .save_path()
            .ok_or_eyre("Could not find a directory to save progress in")?,
    );
    let mut game = DailyGame::new(&seed, store.load()?);
    info!("Playing {seed}, saving to {:?}", store.path());

    let paint = config.color;
    match cli.command {
        Commands::Show => {
            print!("{}", render::net(&game.player_facelets(), None, paint));
        }
        Commands::Assign { slot, piece } => {
            game.assign(slot, piece)?;
            print!("{}", render::net(&game.player_facelets(), None, paint));
        }
        Commands::Erase { slot } => {
            game.erase(slot)?;
            print!("{}", render::net(&game.player_facelets(), None, paint));
        }
        Commands::Twist { slot } => {
            game.twist(slot)?;
            print!("{}", render::net(&game.player_facelets(), None, paint));
        }
        Commands::Clear => {
            game.clear()?;
        }
        Commands::Guess => {
            let outcome = game.submit_guess()?;
            print!(
                "{}",
                render::net(&outcome.facelets, Some(&outcome.feedback), paint)
            );
            if outcome.solved {
                println!("Solved in {} guesses!", outcome.guess_number);
            } else {
                println!("Guess {}", outcome.guess_number);
            }
        }
        Commands::Stats => {
            let record = game.record();
            println!("{}: {} guesses", record.date, record.guesses);
            println!("{}", render::first_correct(record));
            println!();
            print!("{}", render::histogram(record));
        }
        #[cfg(debug_assertions)]
        Commands::Reveal => {
            print!("{}", render::net(game.target_facelets(), None, paint));
        }
    }

    store.save(game.record())?;

    Ok(())
}
