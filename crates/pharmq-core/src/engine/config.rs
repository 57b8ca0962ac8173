use thiserror::Error;

pub const DEFAULT_NUM_QUBITS: usize = 2;
pub const DEFAULT_NUM_LAYERS: usize = 1;
pub const DEFAULT_SHOTS: u64 = 1024;
pub const DEFAULT_MAX_ITERATIONS: u64 = 100;
pub const DEFAULT_CONVERGENCE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Number of qubits must be greater than 0")]
    InvalidQubitCount,
    #[error("Number of ansatz layers must be greater than 0")]
    InvalidLayerCount,
    #[error("Shot count must be greater than 0")]
    InvalidShotCount,
    #[error("Convergence tolerance must be positive (got {0})")]
    InvalidTolerance(f64),
}

/// Settings for one [`EnergyEvaluator`](super::evaluator::EnergyEvaluator).
///
/// `num_layers` is validated here and carried through the run, but the
/// measurement circuit is the fixed two-stage ansatz; the layer count does
/// not alter the gate sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatorConfig {
    pub num_qubits: usize,
    pub num_layers: usize,
    pub shots: u64,
}

impl EvaluatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_qubits == 0 {
            return Err(ConfigError::InvalidQubitCount);
        }
        if self.num_layers == 0 {
            return Err(ConfigError::InvalidLayerCount);
        }
        if self.shots == 0 {
            return Err(ConfigError::InvalidShotCount);
        }
        Ok(())
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            num_qubits: DEFAULT_NUM_QUBITS,
            num_layers: DEFAULT_NUM_LAYERS,
            shots: DEFAULT_SHOTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationConfig {
    pub max_iterations: u64,
    pub convergence_tolerance: f64,
}

impl OptimizationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.convergence_tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(self.convergence_tolerance));
        }
        Ok(())
    }
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            convergence_tolerance: DEFAULT_CONVERGENCE_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VqeConfig {
    pub evaluator: EvaluatorConfig,
    pub optimization: OptimizationConfig,
}

impl VqeConfig {
    pub fn builder() -> VqeConfigBuilder {
        VqeConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct VqeConfigBuilder {
    num_qubits: Option<usize>,
    num_layers: Option<usize>,
    shots: Option<u64>,
    max_iterations: Option<u64>,
    convergence_tolerance: Option<f64>,
}

impl VqeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_qubits(mut self, n: usize) -> Self {
        self.num_qubits = Some(n);
        self
    }
    pub fn num_layers(mut self, n: usize) -> Self {
        self.num_layers = Some(n);
        self
    }
    pub fn shots(mut self, shots: u64) -> Self {
        self.shots = Some(shots);
        self
    }
    pub fn max_iterations(mut self, iterations: u64) -> Self {
        self.max_iterations = Some(iterations);
        self
    }
    pub fn convergence_tolerance(mut self, tolerance: f64) -> Self {
        self.convergence_tolerance = Some(tolerance);
        self
    }

    pub fn build(self) -> Result<VqeConfig, ConfigError> {
        let evaluator = EvaluatorConfig {
            num_qubits: self.num_qubits.unwrap_or(DEFAULT_NUM_QUBITS),
            num_layers: self.num_layers.unwrap_or(DEFAULT_NUM_LAYERS),
            shots: self.shots.unwrap_or(DEFAULT_SHOTS),
        };
        evaluator.validate()?;
        let optimization = OptimizationConfig {
            max_iterations: self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
            convergence_tolerance: self
                .convergence_tolerance
                .unwrap_or(DEFAULT_CONVERGENCE_TOLERANCE),
        };
        optimization.validate()?;
        Ok(VqeConfig {
            evaluator,
            optimization,
        })
    }
}
