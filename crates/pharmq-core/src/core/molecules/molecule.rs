use super::kind::MoleculeKind;
use super::properties::MolecularProperties;
use rand::{Rng, thread_rng};
use serde::Serialize;
use std::f64::consts::TAU;
use std::fmt;

/// Hartree to kcal/mol.
pub const HARTREE_TO_KCAL_PER_MOL: f64 = 627.51;

/// Maximum absolute deviation from the reference energy for a result to be
/// considered valid, in Hartree. The comparison is strict.
pub const VALIDATION_TOLERANCE_HARTREE: f64 = 0.1;

/// A molecular system together with its static reference record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Molecule {
    kind: MoleculeKind,
    properties: &'static MolecularProperties,
}

/// Result of checking an estimated energy against the classical reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidationOutcome {
    pub energy: f64,
    pub energy_error: f64,
    pub is_valid: bool,
}

/// Chemistry metrics derived from an estimated ground-state energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedProperties {
    pub ground_state_energy: f64,
    pub binding_affinity: f64,
    pub energy_error: f64,
}

impl Molecule {
    pub fn new(kind: MoleculeKind) -> Self {
        Self {
            kind,
            properties: kind.properties(),
        }
    }

    /// Resolves a molecule key, falling back to the unknown placeholder
    /// record for unrecognized keys.
    pub fn from_key(key: &str) -> Self {
        Self::new(MoleculeKind::from_key(key))
    }

    pub fn kind(&self) -> MoleculeKind {
        self.kind
    }

    pub fn properties(&self) -> &'static MolecularProperties {
        self.properties
    }

    /// Number of qubits the measurement circuit is sized for. Small molecules
    /// map one electron to one qubit.
    pub fn circuit_qubits(&self) -> usize {
        self.properties.num_electrons
    }

    /// Diagonal and off-diagonal qubit Hamiltonian coefficients.
    pub fn hamiltonian_coefficients(&self) -> (f64, f64) {
        match self.kind {
            MoleculeKind::H2 => (0.2, -0.2),
            _ => (0.1, -0.1),
        }
    }

    /// Heuristic iteration budget for optimizer convergence, scaled by
    /// molecular complexity.
    pub fn estimated_convergence_iterations(&self) -> u64 {
        100 + 50 * self.properties.num_electrons as u64
    }

    /// Draws uniform random rotation angles in [0, 2π), one per electron.
    pub fn initial_parameters(&self) -> Vec<f64> {
        let mut rng = thread_rng();
        (0..self.properties.num_electrons)
            .map(|_| rng.gen_range(0.0..TAU))
            .collect()
    }

    /// Binding affinity in kcal/mol, estimated as the energy deviation from
    /// the classical reference rescaled from Hartree.
    pub fn binding_affinity(&self, energy: f64) -> f64 {
        (energy - self.properties.ground_state_energy) * HARTREE_TO_KCAL_PER_MOL
    }

    pub fn validate(&self, energy: f64) -> ValidationOutcome {
        let energy_error = (energy - self.properties.ground_state_energy).abs();
        ValidationOutcome {
            energy,
            energy_error,
            is_valid: energy_error < VALIDATION_TOLERANCE_HARTREE,
        }
    }

    pub fn derived_properties(&self, energy: f64) -> DerivedProperties {
        DerivedProperties {
            ground_state_energy: energy,
            binding_affinity: self.binding_affinity(energy),
            energy_error: (energy - self.properties.ground_state_energy).abs(),
        }
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Molecular System: {}", self.properties.name)?;
        writeln!(
            f,
            "- Molecular Weight: {} g/mol",
            self.properties.molecular_weight
        )?;
        writeln!(
            f,
            "- Ground State Energy: {} Hartree",
            self.properties.ground_state_energy
        )?;
        writeln!(
            f,
            "- Number of Electrons: {}",
            self.properties.num_electrons
        )?;
        writeln!(
            f,
            "- Number of Quantum Orbitals: {}",
            self.properties.num_orbitals
        )?;
        write!(f, "- Bond Length: {} Å", self.properties.bond_length)
    }
}
