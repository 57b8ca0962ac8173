use serde::Serialize;

/// Best iterate found by one optimization run. Owned by the caller; the
/// driver hands it back even when the iteration cap is reached without
/// convergence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub parameters: Vec<f64>,
    pub energy: f64,
}
