use crate::core::molecules::kind::MoleculeKind;
use crate::core::molecules::molecule::{DerivedProperties, Molecule, ValidationOutcome};
use crate::engine::config::VqeConfig;
use crate::engine::error::EngineError;
use crate::engine::evaluator::EnergyEvaluator;
use crate::engine::optimizer::GroundStateOptimizer;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::OptimizationResult;
use serde::Serialize;
use tracing::{info, instrument};

/// Everything one estimation run produced: the optimization outcome, the
/// comparison against the classical reference, and the derived chemistry
/// metrics. Constructed fresh per run; nothing is cached across runs.
#[derive(Debug, Clone, Serialize)]
pub struct GroundStateReport {
    pub molecule: &'static str,
    pub reference_energy: f64,
    pub optimization: OptimizationResult,
    pub validation: ValidationOutcome,
    pub derived: DerivedProperties,
    pub evaluations: u64,
}

/// Runs the full estimation procedure for one molecule: optimize the ansatz
/// parameters, validate the best energy against the reference record, and
/// derive secondary metrics.
///
/// The qubit count in `config` is taken as-is; callers that want the
/// molecule's electron count as the circuit width (the usual choice for the
/// small systems in the registry) should size the config from
/// [`Molecule::circuit_qubits`] before calling.
#[instrument(skip_all, name = "ground_state_workflow", fields(molecule = %kind))]
pub fn run(
    kind: MoleculeKind,
    config: &VqeConfig,
    initial: Option<Vec<f64>>,
    reporter: &ProgressReporter,
) -> Result<GroundStateReport, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    let molecule = Molecule::new(kind);
    info!(
        molecule = molecule.properties().name,
        reference_energy = molecule.properties().ground_state_energy,
        "Preparing estimation run."
    );
    let evaluator = EnergyEvaluator::new(config.evaluator.clone())?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Optimization",
    });
    let optimizer = GroundStateOptimizer::new(&evaluator, config.optimization.clone());
    let optimization = optimizer.optimize(initial)?;
    reporter.report(Progress::StatusUpdate {
        text: format!("Best energy {:.6} Hartree", optimization.energy),
    });
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Validation" });
    let validation = molecule.validate(optimization.energy);
    let derived = molecule.derived_properties(optimization.energy);
    if !validation.is_valid {
        reporter.report(Progress::Message(format!(
            "Estimated energy deviates from the reference by {:.4} Hartree.",
            validation.energy_error
        )));
    }
    reporter.report(Progress::PhaseFinish);

    let report = GroundStateReport {
        molecule: molecule.properties().name,
        reference_energy: molecule.properties().ground_state_energy,
        optimization,
        validation,
        derived,
        evaluations: evaluator.evaluation_count(),
    };
    info!(
        energy = report.optimization.energy,
        evaluations = report.evaluations,
        valid = report.validation.is_valid,
        "Ground-state estimation complete."
    );
    Ok(report)
}
