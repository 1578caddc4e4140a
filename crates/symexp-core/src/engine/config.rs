use crate::core::models::structure::Structure;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Contact radius must be a finite number, got {0}")]
    InvalidRadius(f64),

    #[error("Failed to parse configuration: {0}")]
    Toml(String),
}

/// Atom subset used as the reference (pivot) sphere of a symmetry-mate search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomSelection {
    #[default]
    All,
    /// Every atom of the chain with this label asym id.
    Chain(String),
    Residue {
        asym_id: String,
        seq_number: i32,
    },
    /// Every atom of residues with this name (e.g., a ligand code).
    ResidueName(String),
    /// Every atom of the entity with this entity id.
    Entity(String),
    /// Explicit atom row indices.
    Atoms(Vec<usize>),
}

impl AtomSelection {
    /// Resolves the selection to sorted, de-duplicated atom row indices.
    /// Indices outside the atom table are dropped.
    pub fn resolve(&self, structure: &Structure) -> Vec<usize> {
        let residues = structure.residues();
        let mut indices: Vec<usize> = match self {
            AtomSelection::All => (0..structure.atom_count()).collect(),
            AtomSelection::Chain(asym_id) => structure
                .chains()
                .iter()
                .filter(|chain| &chain.asym_id == asym_id)
                .flat_map(|chain| chain.atom_range())
                .collect(),
            AtomSelection::Residue {
                asym_id,
                seq_number,
            } => residues
                .iter()
                .filter(|r| &r.asym_id == asym_id && r.seq_number == *seq_number)
                .flat_map(|r| r.atom_range())
                .collect(),
            AtomSelection::ResidueName(name) => residues
                .iter()
                .filter(|r| &r.name == name)
                .flat_map(|r| r.atom_range())
                .collect(),
            AtomSelection::Entity(entity_id) => structure
                .entities()
                .iter()
                .filter(|entity| &entity.entity_id == entity_id)
                .flat_map(|entity| entity.atom_range())
                .collect(),
            AtomSelection::Atoms(list) => list
                .iter()
                .copied()
                .filter(|&index| index < structure.atom_count())
                .collect(),
        };
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatesConfig {
    /// Contact distance in Angstroms between sphere surfaces.
    pub radius: f64,
    #[serde(default)]
    pub pivot: AtomSelection,
}

impl MatesConfig {
    /// Parses a configuration such as
    ///
    /// ```toml
    /// radius = 6.0
    /// pivot = { chain = "A" }
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: MatesConfig =
            toml::from_str(content).map_err(|e| ConfigError::Toml(e.to_string()))?;
        validate_radius(config.radius)?;
        Ok(config)
    }
}

#[derive(Default)]
pub struct MatesConfigBuilder {
    radius: Option<f64>,
    pivot: Option<AtomSelection>,
}

impl MatesConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
    pub fn pivot(mut self, selection: AtomSelection) -> Self {
        self.pivot = Some(selection);
        self
    }

    pub fn build(self) -> Result<MatesConfig, ConfigError> {
        let radius = self.radius.ok_or(ConfigError::MissingParameter("radius"))?;
        validate_radius(radius)?;
        Ok(MatesConfig {
            radius,
            pivot: self.pivot.unwrap_or_default(),
        })
    }
}

// Non-positive radii are legal and select nothing beyond the input.
fn validate_radius(radius: f64) -> Result<(), ConfigError> {
    if radius.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidRadius(radius))
    }
}
