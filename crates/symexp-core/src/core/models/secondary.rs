use super::residue::Residue;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SecondaryStructureType {
    #[default]
    None,
    Helix,
    Turn,
    Sheet,
    Strand,
}

/// Identifies a residue by its label asym id, sequence number and insertion code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueIdentifier {
    pub asym_id: String,
    pub seq_number: i32,
    pub ins_code: Option<char>,
}

impl From<&Residue> for ResidueIdentifier {
    fn from(residue: &Residue) -> Self {
        Self {
            asym_id: residue.asym_id.clone(),
            seq_number: residue.seq_number,
            ins_code: residue.ins_code,
        }
    }
}

/// A contiguous run of residues sharing one secondary-structure assignment.
///
/// `start` and `end` name the first and last residue of the run;
/// `start_residue_index..end_residue_index` is the half-open row range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryStructureElement {
    pub kind: SecondaryStructureType,
    pub start: ResidueIdentifier,
    pub end: ResidueIdentifier,
    pub start_residue_index: usize,
    pub end_residue_index: usize,
}

impl SecondaryStructureElement {
    pub fn residue_range(&self) -> Range<usize> {
        self.start_residue_index..self.end_residue_index
    }

    pub fn len(&self) -> usize {
        self.end_residue_index - self.start_residue_index
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residue_identifier_is_taken_from_label_columns() {
        let mut residue = Residue::new("LYS", 12, "C");
        residue.auth_asym_id = "Z".to_string();
        residue.ins_code = Some('B');

        let id = ResidueIdentifier::from(&residue);
        assert_eq!(id.asym_id, "C");
        assert_eq!(id.seq_number, 12);
        assert_eq!(id.ins_code, Some('B'));
    }

    #[test]
    fn element_length_follows_half_open_range() {
        let residue = Residue::new("ALA", 1, "A");
        let element = SecondaryStructureElement {
            kind: SecondaryStructureType::Helix,
            start: ResidueIdentifier::from(&residue),
            end: ResidueIdentifier::from(&residue),
            start_residue_index: 4,
            end_residue_index: 9,
        };
        assert_eq!(element.len(), 5);
        assert!(!element.is_empty());
        assert_eq!(element.residue_range(), 4..9);
    }
}
