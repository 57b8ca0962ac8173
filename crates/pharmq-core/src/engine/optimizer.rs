use super::config::OptimizationConfig;
use super::error::EngineError;
use super::evaluator::EnergyEvaluator;
use super::state::OptimizationResult;
use crate::core::quantum::circuit::ANSATZ_ANGLES;
use crate::core::quantum::sampler::CircuitSampler;
use argmin::core::{CostFunction, Error as ObjectiveError, Executor};
use argmin::solver::neldermead::NelderMead;
use rand::{Rng, thread_rng};
use std::f64::consts::TAU;
use tracing::{debug, info, instrument};

/// Offset applied to each coordinate when expanding the starting point into
/// the initial simplex.
const SIMPLEX_STEP: f64 = 0.5;

struct ScoreObjective<'a, S: CircuitSampler> {
    evaluator: &'a EnergyEvaluator<S>,
}

impl<S: CircuitSampler> CostFunction for ScoreObjective<'_, S> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, ObjectiveError> {
        self.evaluator.score(params).map_err(ObjectiveError::from)
    }
}

/// Derivative-free search over the ansatz parameter space.
///
/// The search itself is delegated to a Nelder-Mead simplex; this driver only
/// shapes the problem (initial point, simplex, iteration cap, tolerance) and
/// unwraps the best iterate. Hitting the iteration cap is not an error: the
/// best-effort result is returned either way.
pub struct GroundStateOptimizer<'a, S: CircuitSampler> {
    evaluator: &'a EnergyEvaluator<S>,
    config: OptimizationConfig,
}

impl<'a, S: CircuitSampler> GroundStateOptimizer<'a, S> {
    pub fn new(evaluator: &'a EnergyEvaluator<S>, config: OptimizationConfig) -> Self {
        Self { evaluator, config }
    }

    #[instrument(skip_all, name = "vqe_optimization")]
    pub fn optimize(&self, initial: Option<Vec<f64>>) -> Result<OptimizationResult, EngineError> {
        let initial = initial.unwrap_or_else(random_initial_parameters);
        debug!(?initial, "Starting Nelder-Mead search.");

        let solver = NelderMead::new(initial_simplex(&initial))
            .with_sd_tolerance(self.config.convergence_tolerance)
            .map_err(|e| EngineError::Optimization(e.to_string()))?;

        let objective = ScoreObjective {
            evaluator: self.evaluator,
        };
        let outcome = Executor::new(objective, solver)
            .configure(|state| state.max_iters(self.config.max_iterations))
            .run()
            .map_err(|e| EngineError::Optimization(e.to_string()))?;

        let state = outcome.state;
        let energy = state.best_cost;
        let parameters = state.best_param.unwrap_or(initial);

        info!(
            energy,
            evaluations = self.evaluator.evaluation_count(),
            "Optimization finished."
        );
        Ok(OptimizationResult { parameters, energy })
    }
}

/// Uniform random rotation angles in [0, 2π), one per ansatz angle.
pub fn random_initial_parameters() -> Vec<f64> {
    let mut rng = thread_rng();
    (0..ANSATZ_ANGLES).map(|_| rng.gen_range(0.0..TAU)).collect()
}

fn initial_simplex(origin: &[f64]) -> Vec<Vec<f64>> {
    let mut simplex = vec![origin.to_vec()];
    for coordinate in 0..origin.len() {
        let mut vertex = origin.to_vec();
        vertex[coordinate] += SIMPLEX_STEP;
        simplex.push(vertex);
    }
    simplex
}
