use super::selection::ResidueSelection;
use crate::core::models::atom::Atom;
use crate::core::models::chain::Chain;
use crate::core::models::entity::Entity;
use crate::core::models::operator::Operator;
use crate::core::models::residue::Residue;
use crate::core::models::secondary::{ResidueIdentifier, SecondaryStructureElement};
use crate::core::models::structure::{Structure, StructureTables};
use std::sync::Arc;
use tracing::{info, instrument};

/// Identifier given to a chain (and its residues) copied by a non-identity
/// operator.
pub fn copy_identifier(source_id: &str, operator: &Operator) -> String {
    format!("{}-{}", source_id, operator.id)
}

/// Output tables under construction plus the "currently open" markers.
///
/// `group` holds the source entity, source chain and transform ordinal of
/// the residue visited last; a change in any of them opens new rows.
struct AssemblerState<'a> {
    source: &'a Structure,
    transforms: &'a [Operator],

    atoms: Vec<Atom>,
    residues: Vec<Residue>,
    chains: Vec<Chain>,
    entities: Vec<Entity>,

    // Per output residue: (source secondary-structure index, transform ordinal)
    residue_origins: Vec<(usize, usize)>,

    group: Option<(usize, usize, usize)>,
    chain_row: usize,
    entity_row: usize,
}

impl<'a> AssemblerState<'a> {
    fn new(
        source: &'a Structure,
        transforms: &'a [Operator],
        selection: &ResidueSelection,
    ) -> Self {
        Self {
            source,
            transforms,
            atoms: Vec::with_capacity(selection.atom_count),
            residues: Vec::with_capacity(selection.len()),
            chains: Vec::with_capacity(selection.chain_count),
            entities: Vec::with_capacity(selection.entity_count),
            residue_origins: Vec::with_capacity(selection.len()),
            group: None,
            chain_row: 0,
            entity_row: 0,
        }
    }

    fn visit(&mut self, residue_index: usize, ordinal: usize) {
        let source_residue = &self.source.residues()[residue_index];
        let group = (
            source_residue.entity_index,
            source_residue.chain_index,
            ordinal,
        );

        match self.group {
            Some(current) if current == group => {}
            Some((entity, _, _)) if entity == group.0 => {
                self.close_chain();
                self.open_chain(group.1, ordinal);
            }
            previous => {
                if previous.is_some() {
                    self.close_chain();
                    self.close_entity();
                }
                self.open_entity(group.0);
                self.open_chain(group.1, ordinal);
            }
        }
        self.group = Some(group);

        self.copy_residue(residue_index, ordinal);
    }

    fn open_entity(&mut self, source_entity: usize) {
        let mut entity = self.source.entities()[source_entity].copy_metadata();
        entity.chain_start = self.chains.len();
        entity.residue_start = self.residues.len();
        entity.atom_start = self.atoms.len();
        self.entity_row = self.entities.len();
        self.entities.push(entity);
    }

    fn close_entity(&mut self) {
        let entity = &mut self.entities[self.entity_row];
        entity.chain_end = self.chains.len();
        entity.residue_end = self.residues.len();
        entity.atom_end = self.atoms.len();
    }

    fn open_chain(&mut self, source_chain: usize, ordinal: usize) {
        let transform = &self.transforms[ordinal];
        let mut chain = self.source.chains()[source_chain].copy_metadata();
        if !transform.is_identity {
            chain.asym_id = copy_identifier(&chain.asym_id, transform);
            chain.auth_asym_id = copy_identifier(&chain.auth_asym_id, transform);
        }
        chain.entity_index = self.entity_row;
        chain.residue_start = self.residues.len();
        chain.atom_start = self.atoms.len();
        chain.source_chain_index = Some(source_chain);
        chain.operator_index = Some(ordinal);
        self.chain_row = self.chains.len();
        self.chains.push(chain);
    }

    fn close_chain(&mut self) {
        let chain = &mut self.chains[self.chain_row];
        chain.residue_end = self.residues.len();
        chain.atom_end = self.atoms.len();
    }

    fn copy_residue(&mut self, residue_index: usize, ordinal: usize) {
        let transform = &self.transforms[ordinal];
        let source_residue = &self.source.residues()[residue_index];
        let residue_row = self.residues.len();

        let mut residue = source_residue.copy_metadata();
        if !transform.is_identity {
            residue.asym_id = copy_identifier(&residue.asym_id, transform);
            residue.auth_asym_id = copy_identifier(&residue.auth_asym_id, transform);
        }
        residue.chain_index = self.chain_row;
        residue.entity_index = self.entity_row;
        residue.atom_start = self.atoms.len();

        for atom in self.source.residue_atoms(residue_index) {
            let id = self.atoms.len() + 1;
            self.atoms.push(atom.materialize(
                id,
                &transform.matrix,
                residue_row,
                self.chain_row,
                self.entity_row,
            ));
        }

        residue.atom_end = self.atoms.len();
        self.residues.push(residue);
        self.residue_origins
            .push((source_residue.secondary_structure_index, ordinal));
    }

    /// Closes the last open chain and entity, which no boundary closed.
    fn finish(mut self) -> StructureTables {
        if self.group.is_some() {
            self.close_chain();
            self.close_entity();
        }
        let secondary_structure = self.rebuild_secondary_structure();
        StructureTables {
            atoms: self.atoms,
            residues: self.residues,
            chains: self.chains,
            entities: self.entities,
            secondary_structure,
        }
    }

    /// Segments the assembled residues: consecutive residues from the same
    /// source segment under the same transform share an output segment.
    fn rebuild_secondary_structure(&mut self) -> Vec<SecondaryStructureElement> {
        let source_segments = self.source.secondary_structure();
        let mut segments: Vec<SecondaryStructureElement> = Vec::new();

        for index in 0..self.residues.len() {
            let origin = self.residue_origins[index];
            let continues = index > 0 && self.residue_origins[index - 1] == origin;
            let id = ResidueIdentifier::from(&self.residues[index]);

            if let Some(segment) = segments.last_mut().filter(|_| continues) {
                segment.end = id;
                segment.end_residue_index = index + 1;
            } else {
                let kind = source_segments
                    .get(origin.0)
                    .map(|s| s.kind)
                    .unwrap_or_default();
                segments.push(SecondaryStructureElement {
                    kind,
                    start: id.clone(),
                    end: id,
                    start_residue_index: index,
                    end_residue_index: index + 1,
                });
            }
            self.residues[index].secondary_structure_index = segments.len() - 1;
        }
        segments
    }
}

/// Rebuilds a structure holding one copy of every selected residue under its
/// transform.
///
/// `selection` must be non-empty and grouped so that pairs sharing a source
/// entity, chain and transform are contiguous. Output rows are numbered in
/// visiting order, which keeps every index range contiguous.
#[instrument(skip_all, name = "assembly_builder")]
pub fn assemble(
    source: &Arc<Structure>,
    selection: &ResidueSelection,
    transforms: Vec<Operator>,
) -> Structure {
    let mut state = AssemblerState::new(source, &transforms, selection);
    for (residue_index, ordinal) in selection.pairs() {
        state.visit(residue_index, ordinal);
    }
    let tables = state.finish();

    info!(
        atoms = tables.atoms.len(),
        residues = tables.residues.len(),
        chains = tables.chains.len(),
        entities = tables.entities.len(),
        "Assembly complete."
    );
    Structure::derive_from(source, tables, transforms)
}
