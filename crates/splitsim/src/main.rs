use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::eyre;
use splitsim::config::{ScenarioOverrides, load_scenario, scenario_path};
use splitsim::report::{sensitivity_markdown, summary_markdown};
use splitsim::{App, init_logging};
use splitsim_core::{ScenarioInputs, SensitivityParameter, sensitivity, summarize, sweep};

#[derive(Parser, Debug)]
#[command(name = "splitsim")]
#[command(about = "Explore how reward share changes with the split routed to a primary venue")]
struct Args {
    /// Path to the data directory (default: ~/.splitsim/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Scenario file (default: <data-dir>/scenario.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Voting asset held by the primary venue
    #[arg(long)]
    holdings: Option<f64>,

    /// Total voting asset supply
    #[arg(long)]
    total_supply: Option<f64>,

    /// Pool dominance in percent
    #[arg(long)]
    dominance: Option<f64>,

    /// Venue fee in percent
    #[arg(long)]
    fee: Option<f64>,

    /// Highlighted split in percent
    #[arg(long)]
    highlight: Option<f64>,

    /// Number of samples across the split domain
    #[arg(long)]
    resolution: Option<usize>,

    /// Print the summary as markdown and exit instead of opening the UI
    #[arg(long)]
    summary: bool,

    /// With --summary, also tabulate the optimum against this input
    #[arg(long, value_enum)]
    sensitivity: Option<SensitivityArg>,

    /// Number of values in the sensitivity table
    #[arg(long, default_value_t = 11)]
    sensitivity_steps: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SensitivityArg {
    Dominance,
    Fee,
    Holdings,
}

impl From<SensitivityArg> for SensitivityParameter {
    fn from(arg: SensitivityArg) -> Self {
        match arg {
            SensitivityArg::Dominance => SensitivityParameter::PoolDominance,
            SensitivityArg::Fee => SensitivityParameter::VenueFee,
            SensitivityArg::Holdings => SensitivityParameter::PrimaryHoldings,
        }
    }
}

impl Args {
    fn overrides(&self) -> ScenarioOverrides {
        ScenarioOverrides {
            primary_holdings: self.holdings,
            total_supply: self.total_supply,
            pool_dominance_pct: self.dominance,
            venue_fee_pct: self.fee,
            highlight_split_pct: self.highlight,
            resolution: self.resolution,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".splitsim")
}

fn print_summary(args: &Args, inputs: &ScenarioInputs) -> color_eyre::Result<()> {
    inputs
        .validate()
        .map_err(|e| eyre!("invalid scenario: {e}"))?;

    let result = sweep(inputs);
    let summary = summarize(&result, inputs.highlight_split)
        .ok_or_else(|| eyre!("sweep produced no samples"))?;
    print!("{}", summary_markdown(inputs, &summary));

    if let Some(arg) = args.sensitivity {
        let parameter = SensitivityParameter::from(arg);
        let values = parameter.default_values(inputs, args.sensitivity_steps);
        let points = sensitivity(inputs, parameter, &values);
        println!();
        print!("{}", sensitivity_markdown(parameter, &points));
    }

    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| scenario_path(&data_dir));
    let inputs = args.overrides().apply(&load_scenario(&config_path)?);

    if args.summary {
        return print_summary(&args, &inputs);
    }

    let mut app = App::new(inputs);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
