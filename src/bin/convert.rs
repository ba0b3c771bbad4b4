use std::path::PathBuf;

use clap::Parser;
use desk_calculator::cli::{init_logging, load_config};
use desk_calculator::units::{Converter, GnuUnits};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert a quantity between units using GNU units"
)]
struct Cli {
    /// Amount expressed in the source unit
    #[arg(allow_negative_numbers = true)]
    value: f64,

    /// Source unit expression (e.g. `meter`, `mi/hr`)
    from: String,

    /// Destination unit expression
    to: String,

    /// Print only the forward factor; exit with an error when there is none
    #[arg(long, default_value_t = false, conflicts_with = "json")]
    factor_only: bool,

    /// Print the structured result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Oracle executable (overrides the config file)
    #[arg(long)]
    executable: Option<String>,

    /// Oracle timeout in milliseconds (overrides the config file)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,

    /// Configuration file (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log oracle invocations to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut units = load_config(cli.config.as_deref())?.units;
    if let Some(executable) = cli.executable {
        units.executable = executable;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        units.timeout_ms = timeout_ms;
    }
    let converter = Converter::new(GnuUnits::from_config(&units));

    if cli.factor_only {
        let factor = converter
            .convert_or_none(cli.value, &cli.from, &cli.to, true)?
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "no conversion factor from `{}{}` to `{}`",
                    cli.value,
                    cli.from,
                    cli.to
                )
            })?;
        println!("{factor}");
        return Ok(());
    }

    let result = converter.convert(cli.value, &cli.from, &cli.to)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{result}");
    }
    Ok(())
}
