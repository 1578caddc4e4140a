use super::assembly::AssemblyInfo;
use super::atom::Atom;
use super::chain::Chain;
use super::entity::Entity;
use super::operator::Operator;
use super::residue::Residue;
use super::secondary::SecondaryStructureElement;
use super::symmetry::SymmetryInfo;
use std::ops::Range;
use std::sync::{Arc, Weak};
use thiserror::Error;

const ATOM_FIELDS: (&str, &str) = ("atom_start", "atom_end");
const RESIDUE_FIELDS: (&str, &str) = ("residue_start", "residue_end");

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("{level} {index} starts at {found}, expected {expected}")]
    Gap {
        level: &'static str,
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("{level} {index} has a reversed range {start}..{end}")]
    Reversed {
        level: &'static str,
        index: usize,
        start: usize,
        end: usize,
    },

    #[error("{level} rows cover {covered} of {total} child rows")]
    Incomplete {
        level: &'static str,
        covered: usize,
        total: usize,
    },

    #[error("{level} {index} declares {field} {found}, but its rows imply {expected}")]
    Mismatch {
        level: &'static str,
        index: usize,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{level} added before any enclosing {parent} was started")]
    Orphan {
        level: &'static str,
        parent: &'static str,
    },
}

/// Where a [`Structure`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructureSource {
    /// Produced by a format parser.
    #[default]
    File,
    /// Derived from another structure by symmetry expansion or assembly.
    Computed,
}

/// The raw tables of a [`Structure`], as handed over by a parser.
#[derive(Debug, Clone, Default)]
pub struct StructureTables {
    pub atoms: Vec<Atom>,
    pub residues: Vec<Residue>,
    pub chains: Vec<Chain>,
    pub entities: Vec<Entity>,
    pub secondary_structure: Vec<SecondaryStructureElement>,
}

/// A molecular structure stored as four parallel flat tables.
///
/// Parent rows own half-open index ranges into the child table
/// (entity → chain → residue → atom), and the ranges of consecutive parents
/// tile the child table without gaps or overlap. A structure is never
/// mutated after construction; symmetry expansion and assembly produce a new
/// one whose `parent` points back here.
#[derive(Debug, Clone)]
pub struct Structure {
    atoms: Vec<Atom>,
    residues: Vec<Residue>,
    chains: Vec<Chain>,
    entities: Vec<Entity>,
    secondary_structure: Vec<SecondaryStructureElement>,
    symmetry: Option<SymmetryInfo>,
    assembly_info: Option<AssemblyInfo>,
    /// Rigid motions that produced the chains of a computed structure,
    /// indexed by [`Chain::operator_index`].
    operators: Vec<Operator>,
    source: StructureSource,
    parent: Option<Weak<Structure>>,
}

impl Structure {
    /// Wraps parser output into a structure with [`StructureSource::File`].
    pub fn new(
        tables: StructureTables,
        symmetry: Option<SymmetryInfo>,
        assembly_info: Option<AssemblyInfo>,
    ) -> Self {
        Self {
            atoms: tables.atoms,
            residues: tables.residues,
            chains: tables.chains,
            entities: tables.entities,
            secondary_structure: tables.secondary_structure,
            symmetry,
            assembly_info,
            operators: Vec::new(),
            source: StructureSource::File,
            parent: None,
        }
    }

    /// Creates a computed structure that inherits the crystal metadata of
    /// `parent` and keeps a non-owning link to it.
    pub(crate) fn derive_from(
        parent: &Arc<Structure>,
        tables: StructureTables,
        operators: Vec<Operator>,
    ) -> Self {
        Self {
            atoms: tables.atoms,
            residues: tables.residues,
            chains: tables.chains,
            entities: tables.entities,
            secondary_structure: tables.secondary_structure,
            symmetry: parent.symmetry.clone(),
            assembly_info: parent.assembly_info.clone(),
            operators,
            source: StructureSource::Computed,
            parent: Some(Arc::downgrade(parent)),
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn secondary_structure(&self) -> &[SecondaryStructureElement] {
        &self.secondary_structure
    }

    pub fn symmetry(&self) -> Option<&SymmetryInfo> {
        self.symmetry.as_ref()
    }

    pub fn assembly_info(&self) -> Option<&AssemblyInfo> {
        self.assembly_info.as_ref()
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn source(&self) -> StructureSource {
        self.source
    }

    /// The structure this one was derived from, if it is still alive.
    pub fn parent(&self) -> Option<Arc<Structure>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Atoms of the residue at row `residue_index`.
    pub fn residue_atoms(&self, residue_index: usize) -> &[Atom] {
        &self.atoms[self.residues[residue_index].atom_range()]
    }

    /// Operator that produced the chain at row `chain_index`, for computed
    /// structures.
    pub fn chain_operator(&self, chain_index: usize) -> Option<&Operator> {
        self.chains
            .get(chain_index)
            .and_then(|chain| chain.operator_index)
            .and_then(|index| self.operators.get(index))
    }

    /// Checks that every level of the table hierarchy tiles its child table
    /// and that the back-references of child rows agree with the ranges.
    pub fn validate_hierarchy(&self) -> Result<(), HierarchyError> {
        check_tiling(
            "residue",
            self.residues.iter().map(Residue::atom_range),
            self.atoms.len(),
        )?;
        check_tiling(
            "chain",
            self.chains.iter().map(Chain::residue_range),
            self.residues.len(),
        )?;
        check_tiling(
            "entity",
            self.entities.iter().map(Entity::chain_range),
            self.chains.len(),
        )?;
        if !self.secondary_structure.is_empty() {
            check_tiling(
                "secondary structure element",
                self.secondary_structure
                    .iter()
                    .map(SecondaryStructureElement::residue_range),
                self.residues.len(),
            )?;
        }

        for (index, chain) in self.chains.iter().enumerate() {
            let atoms = self.span_of_residues(chain.residue_range());
            check_span("chain", index, ATOM_FIELDS, &chain.atom_range(), atoms)?;
        }
        for (index, entity) in self.entities.iter().enumerate() {
            let residues = self.span_of_chains(entity.chain_range(), Chain::residue_range);
            check_span(
                "entity",
                index,
                RESIDUE_FIELDS,
                &entity.residue_range(),
                residues,
            )?;
            let atoms = self.span_of_chains(entity.chain_range(), Chain::atom_range);
            check_span("entity", index, ATOM_FIELDS, &entity.atom_range(), atoms)?;
        }

        self.check_back_references()
    }

    fn span_of_residues(&self, residues: Range<usize>) -> Option<Range<usize>> {
        let first = self.residues.get(residues.start)?;
        let last = self.residues.get(residues.end.checked_sub(1)?)?;
        (residues.start < residues.end).then(|| first.atom_start..last.atom_end)
    }

    fn span_of_chains(
        &self,
        chains: Range<usize>,
        range_of: fn(&Chain) -> Range<usize>,
    ) -> Option<Range<usize>> {
        let first = self.chains.get(chains.start)?;
        let last = self.chains.get(chains.end.checked_sub(1)?)?;
        (chains.start < chains.end).then(|| range_of(first).start..range_of(last).end)
    }

    fn check_back_references(&self) -> Result<(), HierarchyError> {
        for (entity_index, entity) in self.entities.iter().enumerate() {
            for chain_index in entity.chain_range() {
                let chain = &self.chains[chain_index];
                let owner = [("entity_index", entity_index, chain.entity_index)];
                expect_indices("chain", chain_index, &owner)?;

                for residue_index in chain.residue_range() {
                    let residue = &self.residues[residue_index];
                    let owners = [
                        ("chain_index", chain_index, residue.chain_index),
                        ("entity_index", entity_index, residue.entity_index),
                    ];
                    expect_indices("residue", residue_index, &owners)?;

                    for atom_index in residue.atom_range() {
                        let atom = &self.atoms[atom_index];
                        let owners = [
                            ("residue_index", residue_index, atom.residue_index),
                            ("chain_index", chain_index, atom.chain_index),
                            ("entity_index", entity_index, atom.entity_index),
                        ];
                        expect_indices("atom", atom_index, &owners)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_tiling(
    level: &'static str,
    ranges: impl Iterator<Item = Range<usize>>,
    total: usize,
) -> Result<(), HierarchyError> {
    let mut cursor = 0;
    for (index, range) in ranges.enumerate() {
        if range.start != cursor {
            return Err(HierarchyError::Gap {
                level,
                index,
                expected: cursor,
                found: range.start,
            });
        }
        if range.end < range.start {
            return Err(HierarchyError::Reversed {
                level,
                index,
                start: range.start,
                end: range.end,
            });
        }
        cursor = range.end;
    }
    if cursor != total {
        return Err(HierarchyError::Incomplete {
            level,
            covered: cursor,
            total,
        });
    }
    Ok(())
}

// Empty parents imply no span and are only required to be empty.
fn check_span(
    level: &'static str,
    index: usize,
    (start_field, end_field): (&'static str, &'static str),
    declared: &Range<usize>,
    implied: Option<Range<usize>>,
) -> Result<(), HierarchyError> {
    let implied = match implied {
        Some(range) => range,
        None if declared.is_empty() => return Ok(()),
        None => declared.start..declared.start,
    };
    if declared.start != implied.start {
        return Err(HierarchyError::Mismatch {
            level,
            index,
            field: start_field,
            expected: implied.start,
            found: declared.start,
        });
    }
    if declared.end != implied.end {
        return Err(HierarchyError::Mismatch {
            level,
            index,
            field: end_field,
            expected: implied.end,
            found: declared.end,
        });
    }
    Ok(())
}

/// Each entry is `(field, expected, found)`.
fn expect_indices(
    level: &'static str,
    index: usize,
    owners: &[(&'static str, usize, usize)],
) -> Result<(), HierarchyError> {
    match owners.iter().find(|(_, expected, found)| expected != found) {
        Some(&(field, expected, found)) => Err(HierarchyError::Mismatch {
            level,
            index,
            field,
            expected,
            found,
        }),
        None => Ok(()),
    }
}
