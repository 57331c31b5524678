//! `patrol` CLI: answer Part A and Part B for a map file.
//!
//! Diagnostics go to stderr via `tracing`, filtered by `RUST_LOG`
//! (default `warn`). Answers go to stdout.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use patrol::engine::{LoopDetection, PatrolConfig};
use patrol::grid::GridSymbols;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "patrol")]
#[command(version, about = "Simulate a guard patrol and count looping obstruction placements")]
struct Cli {
    /// Map file, or `-` for stdin
    input: PathBuf,

    /// Which answers to print
    #[arg(long, value_enum, default_value_t = Part::Both)]
    part: Part,

    /// Loop search worker threads (default: available parallelism, max 16)
    #[arg(long)]
    workers: Option<usize>,

    /// Judge a run as looping after this many transitions instead of
    /// tracking repeated states
    #[arg(long, value_name = "N")]
    step_budget: Option<u64>,

    /// Print the baseline path map before the answers
    #[arg(long)]
    render: bool,

    /// Start marker character
    #[arg(long, value_name = "C", default_value_t = '^')]
    start: char,

    /// Obstruction marker character
    #[arg(long, value_name = "C", default_value_t = '#')]
    obstruction: char,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Part {
    A,
    B,
    Both,
}

impl Cli {
    fn config(&self) -> PatrolConfig {
        PatrolConfig {
            loop_detection: self
                .step_budget
                .map_or(LoopDetection::RepeatedState, LoopDetection::StepBudget),
            workers: self.workers,
        }
    }

    fn symbols(&self) -> GridSymbols {
        GridSymbols {
            start: self.start,
            obstruction: self.obstruction,
        }
    }
}

/// Install the stderr subscriber. Reads `RUST_LOG`, defaults to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read map from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read map from {}", path.display()))
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.config();

    let text = read_input(&cli.input)?;
    let grid = patrol::parse_grid(&text, cli.symbols())
        .with_context(|| format!("invalid map in {}", cli.input.display()))?;
    debug!(
        bounds = %grid.bounds(),
        start = %grid.start(),
        ?config,
        "map loaded"
    );

    let base = patrol::run_baseline(&grid, &config)?;
    if cli.render {
        println!("{}", base.render(&grid));
        println!();
    }

    match cli.part {
        Part::A => println!("part a: {}", base.visited_count()),
        Part::B | Part::Both => {
            let report =
                patrol::part_b_from(&grid, &config, &base).context("loop search failed")?;
            debug!(metrics = ?report.metrics, "loop search finished");
            if cli.part == Part::Both {
                println!("part a: {}", base.visited_count());
            }
            println!("part b: {}", report.looping_count());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["patrol", "map.txt"]).unwrap();
        assert_eq!(cli.part, Part::Both);
        assert!(!cli.render);
        let config = cli.config();
        assert_eq!(config.loop_detection, LoopDetection::RepeatedState);
        assert_eq!(config.workers, None);
        assert_eq!(cli.symbols(), GridSymbols::default());
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "patrol",
            "-",
            "--part",
            "b",
            "--workers",
            "3",
            "--step-budget",
            "3260",
            "--start",
            "S",
            "--obstruction",
            "O",
            "--render",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("-"));
        assert_eq!(cli.part, Part::B);
        assert!(cli.render);
        let config = cli.config();
        assert_eq!(config.loop_detection, LoopDetection::StepBudget(3260));
        assert_eq!(config.workers, Some(3));
        assert_eq!(
            cli.symbols(),
            GridSymbols {
                start: 'S',
                obstruction: 'O'
            }
        );
    }

    #[test]
    fn rejects_unknown_part() {
        assert!(Cli::try_parse_from(["patrol", "map.txt", "--part", "c"]).is_err());
    }

    #[test]
    fn rejects_multi_char_marker() {
        assert!(Cli::try_parse_from(["patrol", "map.txt", "--start", "ab"]).is_err());
    }
}
