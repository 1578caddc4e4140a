use super::spheres::BoundingSpheres;
use crate::core::models::operator::Operator;
use crate::core::models::structure::Structure;
use tracing::{info, instrument};

/// Ordered `(residue, transform ordinal)` pairs to be materialized, plus the
/// row counts the assembled structure will have.
///
/// Pairs sharing a source entity, chain and transform must be contiguous;
/// the counters follow the same boundaries the assembler opens rows on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidueSelection {
    pub residue_indices: Vec<usize>,
    pub transform_ordinals: Vec<usize>,
    pub atom_count: usize,
    pub chain_count: usize,
    pub entity_count: usize,
    // (entity, chain, transform) of the last pushed pair
    last_group: Option<(usize, usize, usize)>,
}

impl ResidueSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.residue_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residue_indices.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.residue_indices
            .iter()
            .copied()
            .zip(self.transform_ordinals.iter().copied())
    }

    pub fn push(&mut self, structure: &Structure, residue_index: usize, transform_ordinal: usize) {
        let residue = &structure.residues()[residue_index];
        let group = (residue.entity_index, residue.chain_index, transform_ordinal);

        match self.last_group {
            Some((entity, _, _)) if entity == group.0 => {
                if self.last_group != Some(group) {
                    self.chain_count += 1;
                }
            }
            _ => {
                self.entity_count += 1;
                self.chain_count += 1;
            }
        }
        self.last_group = Some(group);

        self.residue_indices.push(residue_index);
        self.transform_ordinals.push(transform_ordinal);
        self.atom_count += residue.atom_count();
    }
}

/// Selects, per entity and accepted transform, the residues whose moved
/// bounding sphere comes within `radius` of the pivot sphere.
///
/// A chain is only descended into when its own sphere passes the same test.
/// A residue is selected once per transform that brings it in range.
#[instrument(skip_all, name = "residue_selection")]
pub fn select_by_contact(
    structure: &Structure,
    spheres: &BoundingSpheres,
    transforms: &[Operator],
    radius: f64,
) -> ResidueSelection {
    let mut selection = ResidueSelection::new();
    let target = &spheres.pivot;

    for entity in structure.entities() {
        for (ordinal, transform) in transforms.iter().enumerate() {
            for chain_index in entity.chain_range() {
                let chain_sphere = spheres.chains[chain_index].transformed(&transform.matrix);
                if !chain_sphere.is_within(target, radius) {
                    continue;
                }
                for residue_index in structure.chains()[chain_index].residue_range() {
                    let residue_sphere =
                        spheres.residues[residue_index].transformed(&transform.matrix);
                    if residue_sphere.is_within(target, radius) {
                        selection.push(structure, residue_index, ordinal);
                    }
                }
            }
        }
    }

    info!(
        residues = selection.len(),
        atoms = selection.atom_count,
        chains = selection.chain_count,
        entities = selection.entity_count,
        "Residue selection complete."
    );
    selection
}

/// Appends every residue flagged in `mask` under one transform ordinal, in
/// source row order.
pub fn select_by_mask(
    selection: &mut ResidueSelection,
    structure: &Structure,
    mask: &[bool],
    transform_ordinal: usize,
) {
    for (residue_index, _) in mask.iter().enumerate().filter(|(_, selected)| **selected) {
        selection.push(structure, residue_index, transform_ordinal);
    }
}
