use std::path::PathBuf;

use clap::Parser;
use desk_calculator::cli::{init_logging, load_config};
use desk_calculator::diceware;

#[derive(Parser)]
#[command(author, version, about = "Roll diceware word indices")]
struct Cli {
    /// Number of words to roll (defaults to the config file, then 5)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    count: Option<u64>,

    /// Configuration file (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let count = match cli.count {
        Some(count) => usize::try_from(count)?,
        None => config.diceware.count,
    };
    let rolls = diceware::roll(count)?;
    print!("{}", diceware::render(&rolls));
    Ok(())
}
