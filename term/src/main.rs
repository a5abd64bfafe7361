use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use fieldsweep_core::*;

mod command;
mod config;
mod render;

use command::Command;
use config::FileConfig;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// JSON file with any of `rows`, `cols`, `mines`, `seed`
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<Coord>,

    #[arg(long)]
    cols: Option<Coord>,

    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn settings(&self) -> anyhow::Result<FileConfig> {
        let file = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(file.merge(FileConfig {
            rows: self.rows,
            cols: self.cols,
            mines: self.mines,
            seed: self.seed,
        }))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = args.settings()?;
    let config = settings.game_config()?;
    log::debug!("seed: {:?}", settings.seed);

    let mut session = match settings.seed {
        Some(seed) => Session::with_seed(config, seed),
        None => Session::new(config),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", command::HELP);
    print!("{}", render::Board(&session));

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };
        log::trace!("command: {:?}", command);

        match command {
            Command::Reveal(coords) => match session.reveal(coords) {
                Ok(RevealOutcome::HitMine) => println!("Boom."),
                Ok(RevealOutcome::Won) => println!("Cleared!"),
                Ok(_) => {}
                Err(err) => println!("{err}"),
            },
            Command::Flag(coords) => {
                if let Err(err) = session.cycle_flag(coords) {
                    println!("{err}");
                }
            }
            Command::Replay => session.replay(),
            Command::Help => {
                println!("{}", command::HELP);
                continue;
            }
            Command::Quit => break,
        }

        print!("{}", render::Board(&session));
        if session.is_finished() {
            println!("type n for a new game, q to quit");
        }
        stdout.flush()?;
    }

    Ok(())
}
