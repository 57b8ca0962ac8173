use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Quantum Molecular Simulation Services",
    version,
    about = "pharmq CLI - A command-line interface for estimating molecular ground-state energies with the variational quantum eigensolver.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate a molecule's ground-state energy and derived chemistry metrics.
    Estimate(EstimateArgs),
    /// Show the reference data bundled for a molecule, or list all molecules.
    Info(InfoArgs),
}

/// Arguments for the `estimate` subcommand.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Molecule to estimate, by key (h2, h2o, nh3, ch4).
    /// Unrecognized keys fall back to an unknown placeholder record.
    #[arg(short, long, default_value = "h2", value_name = "KEY")]
    pub molecule: String,

    /// Path to a TOML configuration file with estimation settings.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Evaluator Overrides ---
    /// Override the number of qubits (defaults to the molecule's electron count).
    #[arg(long, value_name = "INT")]
    pub qubits: Option<usize>,

    /// Override the number of ansatz layers.
    #[arg(long, value_name = "INT")]
    pub layers: Option<usize>,

    /// Override the number of measurement shots per energy evaluation.
    #[arg(short, long, value_name = "INT")]
    pub shots: Option<u64>,

    // --- Optimization Overrides ---
    /// Override the maximum number of optimizer iterations.
    #[arg(long, value_name = "INT")]
    pub max_iterations: Option<u64>,

    /// Override the optimizer convergence tolerance.
    #[arg(long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,

    /// Initial rotation angle in radians; repeat the flag once per angle.
    /// Angles are drawn at random when omitted.
    #[arg(long = "initial-angle", value_name = "FLOAT")]
    pub initial_angles: Vec<f64>,

    /// Write the full estimation report as JSON to the given path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Molecule key to describe; lists every known molecule when omitted.
    #[arg(value_name = "KEY")]
    pub molecule: Option<String>,
}
