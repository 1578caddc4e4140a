use std::convert::Infallible;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityType {
    Polymer,
    NonPolymer,
    Water,
    #[default]
    Unknown,
}

/// Unrecognized type strings map to [`EntityType::Unknown`], so parsing
/// never fails.
impl FromStr for EntityType {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "polymer" => Ok(EntityType::Polymer),
            "non-polymer" | "nonpolymer" | "non_polymer" => Ok(EntityType::NonPolymer),
            "water" => Ok(EntityType::Water),
            _ => Ok(EntityType::Unknown),
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EntityType::Polymer => "polymer",
                EntityType::NonPolymer => "non-polymer",
                EntityType::Water => "water",
                EntityType::Unknown => "unknown",
            }
        )
    }
}

/// A single row of the entity table, the outermost level of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub entity_id: String, // Entity identifier from the source (e.g., "1")
    pub entity_type: EntityType,
    pub chain_start: usize,
    pub chain_end: usize,
    pub residue_start: usize,
    pub residue_end: usize,
    pub atom_start: usize,
    pub atom_end: usize,
}

impl Entity {
    pub fn new(entity_id: &str, entity_type: EntityType) -> Self {
        Self {
            entity_id: entity_id.to_string(),
            entity_type,
            chain_start: 0,
            chain_end: 0,
            residue_start: 0,
            residue_end: 0,
            atom_start: 0,
            atom_end: 0,
        }
    }

    pub fn chain_range(&self) -> Range<usize> {
        self.chain_start..self.chain_end
    }

    pub fn residue_range(&self) -> Range<usize> {
        self.residue_start..self.residue_end
    }

    pub fn atom_range(&self) -> Range<usize> {
        self.atom_start..self.atom_end
    }

    pub(crate) fn copy_metadata(&self) -> Self {
        Self::new(&self.entity_id, self.entity_type)
    }
}
