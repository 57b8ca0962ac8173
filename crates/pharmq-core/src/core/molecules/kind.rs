use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;

/// The closed set of molecular systems the library ships reference data for.
/// `Custom` is the fallback tag for systems without bundled reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoleculeKind {
    H2,
    H2O,
    NH3,
    CH4,
    Custom,
}

static KEY_TO_KIND: Map<&'static str, MoleculeKind> = phf_map! {
    "h2" => MoleculeKind::H2,
    "hydrogen_molecule" => MoleculeKind::H2,
    "h2o" => MoleculeKind::H2O,
    "water_molecule" => MoleculeKind::H2O,
    "nh3" => MoleculeKind::NH3,
    "ammonia" => MoleculeKind::NH3,
    "ch4" => MoleculeKind::CH4,
    "methane" => MoleculeKind::CH4,
};

impl MoleculeKind {
    /// The kinds with bundled reference data, in registry order.
    pub const KNOWN: [MoleculeKind; 4] = [
        MoleculeKind::H2,
        MoleculeKind::H2O,
        MoleculeKind::NH3,
        MoleculeKind::CH4,
    ];

    /// Resolves a molecule-type key (case-insensitive). Unrecognized keys
    /// resolve to [`MoleculeKind::Custom`] rather than failing.
    pub fn from_key(key: &str) -> Self {
        KEY_TO_KIND
            .get(key.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or(MoleculeKind::Custom)
    }

    pub fn key(&self) -> &'static str {
        match self {
            MoleculeKind::H2 => "h2",
            MoleculeKind::H2O => "h2o",
            MoleculeKind::NH3 => "nh3",
            MoleculeKind::CH4 => "ch4",
            MoleculeKind::Custom => "custom",
        }
    }
}

impl fmt::Display for MoleculeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
