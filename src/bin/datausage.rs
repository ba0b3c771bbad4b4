use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use desk_calculator::cli::{init_logging, load_config};
use desk_calculator::dataplan;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compare this cycle's data usage against a uniform pace"
)]
struct Cli {
    /// Data used so far this cycle, in GB
    #[arg(long)]
    used: f64,

    /// Monthly allowance in GB (defaults to the config file)
    #[arg(long)]
    allowance: Option<f64>,

    /// Day of the month the allowance resets (defaults to the config file, then 11)
    #[arg(long)]
    reset_day: Option<u32>,

    /// Evaluate as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Configuration file (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let plan = load_config(cli.config.as_deref())?.data_plan;
    let allowance = cli.allowance.or(plan.allowance_gb).ok_or_else(|| {
        anyhow::anyhow!("no data allowance given; pass --allowance or set data_plan.allowance_gb")
    })?;
    let reset_day = cli.reset_day.unwrap_or(plan.reset_day);

    let report = match cli.today {
        Some(today) => dataplan::report(cli.used, allowance, reset_day, today)?,
        None => dataplan::report_now(cli.used, allowance, reset_day)?,
    };
    println!("{report}");
    Ok(())
}
