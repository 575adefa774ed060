use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use invert_tree::{default_cases, run_all, LevelOrder};
use tracing::info;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{registry, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "invert-tree",
    version,
    about = "Invert binary trees breadth-first, without recursion"
)]
struct Cli {
    /// Level-order trees to invert, e.g. "[1,null,2]". Runs the built-in
    /// cases when omitted.
    trees: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let cases = if cli.trees.is_empty() {
        info!("running built-in cases");
        default_cases()
    } else {
        parse_trees(&cli.trees)?
    };

    for report in run_all(&cases) {
        println!("{report}");
        println!();
    }

    Ok(())
}

fn parse_trees(raw: &[String]) -> Result<Vec<LevelOrder>> {
    raw.iter()
        .enumerate()
        .map(|(idx, text)| {
            text.parse::<LevelOrder>()
                .with_context(|| format!("invalid tree argument {}: '{}'", idx + 1, text))
        })
        .collect()
}

fn setup_logging(verbosity: u8) -> Result<()> {
    let directives = match std::env::var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_owned(),
    };

    registry()
        .with(EnvFilter::builder().parse(directives)?)
        .with(layer().with_writer(std::io::stderr).with_target(false))
        .init();

    Ok(())
}
