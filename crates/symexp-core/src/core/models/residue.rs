use std::ops::Range;

/// A single row of the residue table.
///
/// A residue owns the half-open atom range `atom_start..atom_end`; the ranges
/// of consecutive residues tile the atom table without gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub name: String,           // Residue name (e.g., "ALA", "HOH")
    pub seq_number: i32,        // Label sequence number
    pub auth_seq_number: i32,   // Author sequence number
    pub ins_code: Option<char>, // PDB insertion code
    pub asym_id: String,        // Label asym id of the parent chain
    pub auth_asym_id: String,   // Author asym id of the parent chain
    pub is_het: bool,
    pub atom_start: usize,
    pub atom_end: usize,
    pub chain_index: usize,
    pub entity_index: usize,
    pub secondary_structure_index: usize,
}

impl Residue {
    pub fn new(name: &str, seq_number: i32, asym_id: &str) -> Self {
        Self {
            name: name.to_string(),
            seq_number,
            auth_seq_number: seq_number,
            ins_code: None,
            asym_id: asym_id.to_string(),
            auth_asym_id: asym_id.to_string(),
            is_het: false,
            atom_start: 0,
            atom_end: 0,
            chain_index: 0,
            entity_index: 0,
            secondary_structure_index: 0,
        }
    }

    pub fn atom_range(&self) -> Range<usize> {
        self.atom_start..self.atom_end
    }

    pub fn atom_count(&self) -> usize {
        self.atom_end - self.atom_start
    }

    /// Field-by-field copy of the descriptive columns; every index column of
    /// the returned row is reset and must be written by the caller.
    pub(crate) fn copy_metadata(&self) -> Self {
        Self {
            name: self.name.clone(),
            seq_number: self.seq_number,
            auth_seq_number: self.auth_seq_number,
            ins_code: self.ins_code,
            asym_id: self.asym_id.clone(),
            auth_asym_id: self.auth_asym_id.clone(),
            is_het: self.is_het,
            atom_start: 0,
            atom_end: 0,
            chain_index: 0,
            entity_index: 0,
            secondary_structure_index: 0,
        }
    }
}
