use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub asym_id: String,      // Label asym id (e.g., "A", or "A-2_555" for a copy)
    pub auth_asym_id: String, // Author asym id
    pub entity_index: usize,  // Row of the parent entity
    pub residue_start: usize,
    pub residue_end: usize,
    pub atom_start: usize,
    pub atom_end: usize,
    /// Row of the chain this one was copied from; only set on assembled structures.
    pub source_chain_index: Option<usize>,
    /// Row in `Structure::operators` that produced this copy; only set on assembled structures.
    pub operator_index: Option<usize>,
}

impl Chain {
    pub fn new(asym_id: &str, auth_asym_id: &str) -> Self {
        Self {
            asym_id: asym_id.to_string(),
            auth_asym_id: auth_asym_id.to_string(),
            entity_index: 0,
            residue_start: 0,
            residue_end: 0,
            atom_start: 0,
            atom_end: 0,
            source_chain_index: None,
            operator_index: None,
        }
    }

    pub fn residue_range(&self) -> Range<usize> {
        self.residue_start..self.residue_end
    }

    pub fn atom_range(&self) -> Range<usize> {
        self.atom_start..self.atom_end
    }

    pub(crate) fn copy_metadata(&self) -> Self {
        Self::new(&self.asym_id, &self.auth_asym_id)
    }
}
