use super::kind::MoleculeKind;
use serde::Serialize;

/// Reference record for one molecular system. Energies are classical
/// reference values (FCI/DFT-grade) in Hartree; bond lengths in Angstroms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MolecularProperties {
    pub name: &'static str,
    pub molecular_weight: f64,
    pub ground_state_energy: f64,
    pub num_electrons: usize,
    pub num_orbitals: usize,
    pub bond_length: f64,
}

pub static HYDROGEN: MolecularProperties = MolecularProperties {
    name: "Hydrogen Molecule",
    molecular_weight: 2.016,
    ground_state_energy: -1.17,
    num_electrons: 2,
    num_orbitals: 2,
    bond_length: 0.74,
};

pub static WATER: MolecularProperties = MolecularProperties {
    name: "Water Molecule",
    molecular_weight: 18.015,
    ground_state_energy: -76.4,
    num_electrons: 10,
    num_orbitals: 7,
    bond_length: 0.96,
};

pub static AMMONIA: MolecularProperties = MolecularProperties {
    name: "Ammonia",
    molecular_weight: 17.031,
    ground_state_energy: -56.5,
    num_electrons: 10,
    num_orbitals: 7,
    bond_length: 1.01,
};

pub static METHANE: MolecularProperties = MolecularProperties {
    name: "Methane",
    molecular_weight: 16.043,
    ground_state_energy: -40.2,
    num_electrons: 10,
    num_orbitals: 9,
    bond_length: 1.09,
};

pub static UNKNOWN: MolecularProperties = MolecularProperties {
    name: "Unknown",
    molecular_weight: 0.0,
    ground_state_energy: 0.0,
    num_electrons: 0,
    num_orbitals: 0,
    bond_length: 0.0,
};

impl MoleculeKind {
    pub fn properties(&self) -> &'static MolecularProperties {
        match self {
            MoleculeKind::H2 => &HYDROGEN,
            MoleculeKind::H2O => &WATER,
            MoleculeKind::NH3 => &AMMONIA,
            MoleculeKind::CH4 => &METHANE,
            MoleculeKind::Custom => &UNKNOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydrogen_record_carries_the_reference_energy() {
        let properties = MoleculeKind::H2.properties();
        assert_eq!(properties.name, "Hydrogen Molecule");
        assert_eq!(properties.ground_state_energy, -1.17);
        assert_eq!(properties.num_electrons, 2);
    }

    #[test]
    fn unrecognized_kinds_resolve_to_the_unknown_record() {
        let properties = MoleculeKind::from_key("benzene").properties();
        assert_eq!(properties.name, "Unknown");
        assert_eq!(properties.num_electrons, 0);
        assert_eq!(properties.ground_state_energy, 0.0);
    }

    #[test]
    fn every_known_kind_has_a_nonzero_electron_count() {
        for kind in MoleculeKind::KNOWN {
            assert!(kind.properties().num_electrons > 0);
        }
    }
}
