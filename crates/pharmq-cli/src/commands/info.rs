use crate::cli::InfoArgs;
use crate::error::Result;
use pharmq::core::molecules::{kind::MoleculeKind, molecule::Molecule};

pub fn run(args: InfoArgs) -> Result<()> {
    match &args.molecule {
        Some(key) => describe_molecule(key),
        None => list_molecules(),
    }
    Ok(())
}

fn describe_molecule(key: &str) {
    let molecule = Molecule::from_key(key);
    println!("{}", molecule);

    let (diagonal, off_diagonal) = molecule.hamiltonian_coefficients();
    println!("- Qubit Hamiltonian Coefficients: {} / {}", diagonal, off_diagonal);
    println!("- VQE Circuit Qubits: {}", molecule.circuit_qubits());
    println!(
        "- Estimated Convergence Iterations: {}",
        molecule.estimated_convergence_iterations()
    );
}

fn list_molecules() {
    println!("Bundled molecular reference data:");
    println!();
    println!(
        "{:<6} {:<20} {:>12} {:>18} {:>10}",
        "KEY", "NAME", "WEIGHT", "REF ENERGY (Ha)", "ELECTRONS"
    );
    for kind in MoleculeKind::KNOWN {
        let properties = kind.properties();
        println!(
            "{:<6} {:<20} {:>12} {:>18} {:>10}",
            kind.key(),
            properties.name,
            properties.molecular_weight,
            properties.ground_state_energy,
            properties.num_electrons
        );
    }
    println!();
    println!("Run `pharmq info <KEY>` for the full record.");
}
