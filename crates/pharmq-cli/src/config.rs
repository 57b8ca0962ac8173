use crate::cli::EstimateArgs;
use crate::error::{CliError, Result};
use pharmq::core::molecules::molecule::Molecule;
use pharmq::engine::config as core_config;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileEvaluatorConfig {
    pub qubits: Option<usize>,
    pub layers: Option<usize>,
    pub shots: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileOptimizationConfig {
    #[serde(rename = "max-iterations")]
    pub max_iterations: Option<u64>,
    pub tolerance: Option<f64>,
}

/// Estimation settings as they appear in a TOML configuration file. Every
/// field is optional; CLI arguments win over file values, and anything left
/// unset falls back to the library defaults (the qubit count falls back to
/// the molecule's electron count).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PartialEstimateConfig {
    #[serde(default)]
    pub evaluator: FileEvaluatorConfig,
    #[serde(default)]
    pub optimization: FileOptimizationConfig,
}

impl PartialEstimateConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let parsed = toml::from_str(&raw).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!("Loaded configuration file from {:?}", path);
        Ok(parsed)
    }

    pub fn merge_with_args(
        &self,
        args: &EstimateArgs,
        molecule: &Molecule,
    ) -> Result<core_config::VqeConfig> {
        let qubits = args
            .qubits
            .or(self.evaluator.qubits)
            .unwrap_or_else(|| molecule.circuit_qubits());

        let mut builder = core_config::VqeConfig::builder().num_qubits(qubits);
        if let Some(layers) = args.layers.or(self.evaluator.layers) {
            builder = builder.num_layers(layers);
        }
        if let Some(shots) = args.shots.or(self.evaluator.shots) {
            builder = builder.shots(shots);
        }
        if let Some(iterations) = args.max_iterations.or(self.optimization.max_iterations) {
            builder = builder.max_iterations(iterations);
        }
        if let Some(tolerance) = args.tolerance.or(self.optimization.tolerance) {
            builder = builder.convergence_tolerance(tolerance);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }
}
