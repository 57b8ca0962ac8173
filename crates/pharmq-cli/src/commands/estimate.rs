use crate::cli::EstimateArgs;
use crate::config::PartialEstimateConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use pharmq::{
    core::molecules::molecule::Molecule,
    engine::progress::ProgressReporter,
    workflows,
};
use tracing::info;

pub fn run(args: EstimateArgs) -> Result<()> {
    let molecule = Molecule::from_key(&args.molecule);
    info!(
        "Molecular system resolved: {} ({})",
        molecule.properties().name,
        molecule.kind()
    );
    println!("{}", molecule);
    println!();

    let partial_config = match &args.config {
        Some(path) => PartialEstimateConfig::from_file(path)?,
        None => PartialEstimateConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_args(&args, &molecule)?;

    let initial = if args.initial_angles.is_empty() {
        None
    } else {
        Some(args.initial_angles.clone())
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting ground-state estimation...");
    info!("Invoking the core ground-state workflow...");

    let report = workflows::ground_state::run(molecule.kind(), &final_config, initial, &reporter)?;
    progress_handler.clear();

    info!(
        "Workflow finished after {} energy evaluations.",
        report.evaluations
    );

    println!(
        "✓ Ground state energy: {:.6} Hartree ({} evaluations)",
        report.optimization.energy, report.evaluations
    );
    println!(
        "  Energy error vs reference: {:.6} Hartree",
        report.validation.energy_error
    );
    println!(
        "  Binding affinity: {:.2} kcal/mol",
        report.derived.binding_affinity
    );
    if report.validation.is_valid {
        println!("  Validation: ✓ within tolerance of the reference energy");
    } else {
        println!("  Validation: ✗ outside tolerance of the reference energy");
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report).map_err(|e| CliError::Other(e.into()))?;
        std::fs::write(path, json)?;
        println!("  Report written to: {}", path.display());
    }

    Ok(())
}
