use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use std::io::{self, BufRead, Write};
use sweeper_core::{BoardEngine, CellCount, Command, Coord, GameConfig, PanelGeometry};

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity,

    /// Board width in cells
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE.0)]
    width: Coord,

    /// Board height in cells
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE.1)]
    height: Coord,

    /// Number of mines, must be less than width * height
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_MINES)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_logging(verbose: &Verbosity) {
    // also forwards `log` records from the engine
    tracing_subscriber::fmt()
        .with_max_level(verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let config = GameConfig::new((args.width, args.height), args.mines)
        .context("Invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut engine = BoardEngine::seeded(config, seed)?;
    let geometry = PanelGeometry::default();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", command::HELP)?;
    write!(stdout, "{}", render::board(&engine.view()))?;
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read input")?;
        let input = match command::parse(&line) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(err) => {
                writeln!(stdout, "{}", err)?;
                continue;
            }
        };

        if input == command::Input::Help {
            writeln!(stdout, "{}", command::HELP)?;
            continue;
        }

        let Some(command) = input.into_command(&geometry, engine.size()) else {
            log::debug!("input off the board: {:?}", input);
            continue;
        };
        if command == Command::Quit {
            log::debug!("quit");
            break;
        }

        let outcome = engine.apply(command);
        log::debug!("{:?} -> {:?}", command, outcome);
        if outcome.has_update() {
            write!(stdout, "{}", render::board(&engine.view()))?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    fn level(args: &[&str]) -> LevelFilter {
        Args::try_parse_from(args).unwrap().verbose.tracing_level_filter()
    }

    #[test]
    fn verbosity_flags_pick_the_log_level() {
        assert_eq!(level(&["sweeper"]), LevelFilter::ERROR);
        assert_eq!(level(&["sweeper", "-vv"]), LevelFilter::INFO);
        assert_eq!(level(&["sweeper", "-vvvv"]), LevelFilter::TRACE);
        assert_eq!(level(&["sweeper", "-q"]), LevelFilter::OFF);
    }

    #[test]
    fn board_flags_default_to_expert() {
        let args = Args::try_parse_from(["sweeper", "--seed", "7"]).unwrap();

        assert_eq!((args.width, args.height), GameConfig::DEFAULT_SIZE);
        assert_eq!(args.mines, GameConfig::DEFAULT_MINES);
        assert_eq!(args.seed, Some(7));
    }
}
