use super::circuit::{ANSATZ_QUBITS, AnsatzCircuit};
use super::counts::{OutcomeCounts, basis_label};
use rand::{distributions::WeightedIndex, prelude::*};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("Failed to build the measurement outcome distribution: {source}")]
    Distribution {
        #[from]
        source: rand::distributions::WeightedError,
    },
}

/// Execution seam between the evaluator and the simulation backend. The
/// returned counts must sum to the requested shot count.
pub trait CircuitSampler {
    fn sample(&self, circuit: &AnsatzCircuit, shots: u64) -> Result<OutcomeCounts, SamplerError>;
}

/// Ideal, noise-free sampler backed by dense statevector simulation.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatevectorSampler;

impl StatevectorSampler {
    pub fn new() -> Self {
        Self
    }
}

impl CircuitSampler for StatevectorSampler {
    #[instrument(level = "trace", skip_all, fields(shots))]
    fn sample(&self, circuit: &AnsatzCircuit, shots: u64) -> Result<OutcomeCounts, SamplerError> {
        let probabilities = circuit.outcome_probabilities();
        let distribution = WeightedIndex::new(&probabilities)?;

        let mut rng = thread_rng();
        let mut counts = OutcomeCounts::new();
        for _ in 0..shots {
            let outcome = distribution.sample(&mut rng);
            counts.record(&basis_label(outcome, ANSATZ_QUBITS));
        }
        Ok(counts)
    }
}
