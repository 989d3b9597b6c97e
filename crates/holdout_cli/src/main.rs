use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use holdout_core::{load_rows, load_seeds, ClingoSolver, Split};
use holdout_experiments::parameter_spaces::{compact_rules_space, default_space, minimal_space};
use holdout_experiments::{
    run_configured_experiment, ExperimentConfig, ParameterSpace, ReportDigest,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "holdout",
    about = "Repeated 50/50 hold-out evaluation of a rule-induction solver",
    long_about = "Splits the labeled rows once per seed, searches the hyperparameter grid\n\
                  with one solver call per configuration, and reports per-split and\n\
                  average test error and rule-set size."
)]
struct Cli {
    #[command(flatten)]
    inputs: InputArgs,
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// JSON experiment configuration; flags below override its fields
    #[arg(long, global = true, env = "HOLDOUT_CONFIG")]
    config: Option<PathBuf>,
    /// Solver binary
    #[arg(long, global = true)]
    solver: Option<PathBuf>,
    /// Rule model file
    #[arg(long, global = true)]
    model: Option<PathBuf>,
    /// Dataset file
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Seed file (created with seeds 0-9 when missing)
    #[arg(long, global = true)]
    seeds: Option<PathBuf>,
    /// Directory for split and best-answer files
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,
    /// Label attribute term, e.g. `a(10)`
    #[arg(long, global = true)]
    label: Option<String>,
    /// Wall-clock budget per solver call, in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<f64>,
    /// Use a built-in grid instead of the configured one
    #[arg(long, global = true, value_enum)]
    grid: Option<GridPreset>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full hold-out evaluation
    Run {
        /// Summary CSV path
        #[arg(long)]
        summary_csv: Option<PathBuf>,
        /// Also write the summary as JSON
        #[arg(long)]
        summary_json: Option<PathBuf>,
        /// Disable the progress bar
        #[arg(long)]
        no_progress: bool,
    },
    /// Write the train/test facts for a single seed
    Split {
        #[arg(long)]
        seed: u64,
        /// Output file (defaults to <out-dir>/split_seed<SEED>.lp)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the seed list, initialising the seed file if needed
    Seeds,
    /// Print every grid configuration in search order
    Grid,
}

#[derive(Clone, Copy, ValueEnum)]
enum GridPreset {
    /// maxD 4-5, maxE 1-2, maxBody 2-4
    Default,
    /// A single configuration
    Minimal,
    /// maxD 2-4, maxE 0-1, maxBody 1-2
    Compact,
}

impl GridPreset {
    fn space(self) -> ParameterSpace {
        match self {
            Self::Default => default_space(),
            Self::Minimal => minimal_space(),
            Self::Compact => compact_rules_space(),
        }
    }
}

impl InputArgs {
    fn resolve(self) -> Result<ExperimentConfig> {
        let mut config = match &self.config {
            Some(path) => ExperimentConfig::from_json_file(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => ExperimentConfig::default(),
        };
        if let Some(solver) = self.solver {
            config.solver = solver;
        }
        if let Some(model) = self.model {
            config.model_file = model;
        }
        if let Some(data) = self.data {
            config.data_file = data;
        }
        if let Some(seeds) = self.seeds {
            config.seed_file = seeds;
        }
        if let Some(out_dir) = self.out_dir {
            config.out_dir = out_dir;
        }
        if let Some(label) = self.label {
            config.label_attribute = label;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        if let Some(preset) = self.grid {
            config.grid = preset.space();
        }
        config.validate()?;
        tracing::debug!(
            solver = %config.solver.display(),
            model = %config.model_file.display(),
            data = %config.data_file.display(),
            timeout_secs = config.timeout_secs,
            configurations = config.grid.len(),
            "resolved experiment configuration"
        );
        Ok(config)
    }
}

// ── commands ───────────────────────────────────────────────────────

fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(
    mut config: ExperimentConfig,
    summary_csv: Option<PathBuf>,
    summary_json: Option<PathBuf>,
    show_progress: bool,
) -> Result<()> {
    if let Some(path) = summary_csv {
        config.summary_csv = path;
    }
    if summary_json.is_some() {
        config.summary_json = summary_json;
    }

    let solver = ClingoSolver::new(&config.solver);
    let summary = run_configured_experiment(&config, &solver, show_progress)
        .context("hold-out evaluation failed")?;
    tracing::info!(
        successful_splits = summary.len(),
        out_dir = %config.out_dir.display(),
        "hold-out evaluation finished"
    );

    if let Some(digest) = ReportDigest::from_records(&summary) {
        println!("\n{digest}");
    }
    println!("\nCSV saved to {}", config.summary_csv.display());
    if let Some(path) = &config.summary_json {
        println!("JSON saved to {}", path.display());
    }
    println!(
        "Best rule sets in {} (one text file per split)",
        config.out_dir.display()
    );
    Ok(())
}

fn write_split(config: &ExperimentConfig, seed: u64, output: Option<PathBuf>) -> Result<()> {
    let rows = load_rows(&config.data_file, &config.label_attribute)?;
    let split = Split::generate(&rows, seed);
    let output = output.unwrap_or_else(|| config.out_dir.join(format!("split_seed{seed}.lp")));
    split.write(&output)?;
    tracing::debug!(seed, path = %output.display(), "wrote split facts");
    println!(
        "seed {seed}: {} train / {} test rows written to {}",
        split.train.len(),
        split.test.len(),
        output.display()
    );
    Ok(())
}

fn print_seeds(config: &ExperimentConfig) -> Result<()> {
    let seeds = load_seeds(&config.seed_file)?;
    for seed in seeds {
        println!("{seed}");
    }
    Ok(())
}

fn print_grid(config: &ExperimentConfig) -> Result<()> {
    println!("{} configurations", config.grid.len());
    for (idx, configuration) in config.grid.generate().enumerate() {
        println!(
            "{:>4}  {}",
            idx + 1,
            serde_json::to_string(&configuration).context("rendering configuration")?
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.inputs.resolve()?;

    match cli.command {
        Commands::Run {
            summary_csv,
            summary_json,
            no_progress,
        } => run(config, summary_csv, summary_json, !no_progress),
        Commands::Split { seed, output } => write_split(&config, seed, output),
        Commands::Seeds => print_seeds(&config),
        Commands::Grid => print_grid(&config),
    }
}
