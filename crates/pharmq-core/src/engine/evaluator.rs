use super::config::EvaluatorConfig;
use super::error::EngineError;
use crate::core::energy;
use crate::core::quantum::circuit::AnsatzCircuit;
use crate::core::quantum::sampler::{CircuitSampler, StatevectorSampler};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, instrument};

/// Maps candidate ansatz parameters to an energy expectation value by
/// sampling the measurement circuit.
///
/// The evaluator is a pure function of the parameter vector up to the
/// sampler's randomness: it builds the fixed ansatz from the first two
/// parameters, requests the configured number of shots, and reduces the
/// outcome counts through the excitation-level table. Each successful call
/// bumps a per-instance evaluation counter.
pub struct EnergyEvaluator<S: CircuitSampler = StatevectorSampler> {
    config: EvaluatorConfig,
    sampler: S,
    evaluations: AtomicU64,
}

impl EnergyEvaluator<StatevectorSampler> {
    pub fn new(config: EvaluatorConfig) -> Result<Self, EngineError> {
        Self::with_sampler(config, StatevectorSampler::new())
    }
}

impl<S: CircuitSampler> EnergyEvaluator<S> {
    pub fn with_sampler(config: EvaluatorConfig, sampler: S) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            sampler,
            evaluations: AtomicU64::new(0),
        })
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Total number of energy evaluations performed since construction.
    pub fn evaluation_count(&self) -> u64 {
        self.evaluations.load(Ordering::SeqCst)
    }

    #[instrument(level = "debug", skip_all)]
    pub fn score(&self, params: &[f64]) -> Result<f64, EngineError> {
        let circuit = AnsatzCircuit::from_parameters(params);
        let counts = self.sampler.sample(&circuit, self.config.shots)?;
        let energy = energy::expectation_from_counts(&counts);

        let evaluation = self.evaluations.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(evaluation, energy, "Scored candidate parameters.");
        Ok(energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quantum::counts::OutcomeCounts;
    use crate::engine::config::ConfigError;
    use std::f64::consts::FRAC_PI_2;

    /// Sampler that replays a fixed outcome distribution regardless of the
    /// requested circuit.
    struct FixedCounts(Vec<(&'static str, u64)>);

    impl CircuitSampler for FixedCounts {
        fn sample(
            &self,
            _circuit: &AnsatzCircuit,
            _shots: u64,
        ) -> Result<OutcomeCounts, crate::core::quantum::sampler::SamplerError> {
            let mut counts = OutcomeCounts::new();
            for &(label, count) in &self.0 {
                for _ in 0..count {
                    counts.record(label);
                }
            }
            Ok(counts)
        }
    }

    #[test]
    fn construction_rejects_zero_qubits() {
        let config = EvaluatorConfig {
            num_qubits: 0,
            ..EvaluatorConfig::default()
        };
        let result = EnergyEvaluator::new(config);
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration {
                source: ConfigError::InvalidQubitCount
            })
        ));
    }

    #[test]
    fn construction_rejects_zero_layers() {
        let config = EvaluatorConfig {
            num_layers: 0,
            ..EvaluatorConfig::default()
        };
        let result = EnergyEvaluator::new(config);
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration {
                source: ConfigError::InvalidLayerCount
            })
        ));
    }

    #[test]
    fn score_is_a_convex_combination_of_the_level_values() {
        let sampler = FixedCounts(vec![("00", 300), ("01", 300), ("10", 200), ("11", 224)]);
        let evaluator = EnergyEvaluator::with_sampler(EvaluatorConfig::default(), sampler).unwrap();
        let energy = evaluator.score(&[0.0, 0.0]).unwrap();
        assert!(energy >= -1.17);
        assert!(energy <= 0.50);
    }

    #[test]
    fn score_matches_a_hand_computed_distribution() {
        let sampler = FixedCounts(vec![("00", 512), ("11", 512)]);
        let evaluator = EnergyEvaluator::with_sampler(EvaluatorConfig::default(), sampler).unwrap();
        let energy = evaluator.score(&[0.0, 0.0]).unwrap();
        assert!((energy - (-1.17 + 0.50) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn concentrated_circuit_scores_the_single_excitation_level() {
        let evaluator = EnergyEvaluator::new(EvaluatorConfig::default()).unwrap();
        let energy = evaluator.score(&[FRAC_PI_2, FRAC_PI_2]).unwrap();
        assert!((energy - (-0.80)).abs() < 1e-9);
    }

    #[test]
    fn evaluation_counter_increments_by_one_per_call() {
        let evaluator = EnergyEvaluator::new(EvaluatorConfig::default()).unwrap();
        assert_eq!(evaluator.evaluation_count(), 0);

        evaluator.score(&[0.1, 0.2]).unwrap();
        assert_eq!(evaluator.evaluation_count(), 1);

        evaluator.score(&[0.3, 0.4]).unwrap();
        evaluator.score(&[0.5, 0.6]).unwrap();
        assert_eq!(evaluator.evaluation_count(), 3);
    }

    #[test]
    fn missing_angles_are_scored_as_zero_rotations() {
        let sampler = FixedCounts(vec![("00", 1024)]);
        let evaluator = EnergyEvaluator::with_sampler(EvaluatorConfig::default(), sampler).unwrap();
        let energy = evaluator.score(&[]).unwrap();
        assert!((energy - (-1.17)).abs() < 1e-9);
    }
}
