use super::assembly::AssemblyInfo;
use super::atom::Atom;
use super::chain::Chain;
use super::entity::{Entity, EntityType};
use super::residue::Residue;
use super::secondary::{ResidueIdentifier, SecondaryStructureElement, SecondaryStructureType};
use super::structure::{HierarchyError, Structure, StructureTables};
use super::symmetry::SymmetryInfo;
use nalgebra::Point3;

/// Incrementally assembles a [`Structure`] in table order.
///
/// Rows are appended entity by entity, chain by chain, residue by residue;
/// the builder records start offsets as rows are opened and closes every
/// index range in [`build`](Self::build).
pub struct StructureBuilder {
    atoms: Vec<Atom>,
    residues: Vec<Residue>,
    chains: Vec<Chain>,
    entities: Vec<Entity>,
    residue_kinds: Vec<SecondaryStructureType>,
    symmetry: Option<SymmetryInfo>,
    assembly_info: Option<AssemblyInfo>,

    // First misuse seen; reported by `build`.
    orphan: Option<HierarchyError>,
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self {
            atoms: Vec::new(),
            residues: Vec::new(),
            chains: Vec::new(),
            entities: Vec::new(),
            residue_kinds: Vec::new(),
            symmetry: None,
            assembly_info: None,
            orphan: None,
        }
    }

    pub fn start_entity(&mut self, entity_id: &str, entity_type: EntityType) -> &mut Self {
        let mut entity = Entity::new(entity_id, entity_type);
        entity.chain_start = self.chains.len();
        entity.residue_start = self.residues.len();
        entity.atom_start = self.atoms.len();
        self.entities.push(entity);
        self
    }

    pub fn start_chain(&mut self, asym_id: &str, auth_asym_id: &str) -> &mut Self {
        let Some(entity_index) = self.entities.len().checked_sub(1) else {
            return self.record_orphan("chain", "entity");
        };
        let mut chain = Chain::new(asym_id, auth_asym_id);
        chain.entity_index = entity_index;
        chain.residue_start = self.residues.len();
        chain.atom_start = self.atoms.len();
        self.chains.push(chain);
        self
    }

    pub fn start_residue(&mut self, name: &str, seq_number: i32) -> &mut Self {
        let Some(chain_index) = self.chains.len().checked_sub(1) else {
            return self.record_orphan("residue", "chain");
        };
        let chain = &self.chains[chain_index];
        let mut residue = Residue::new(name, seq_number, &chain.asym_id);
        residue.auth_asym_id = chain.auth_asym_id.clone();
        residue.chain_index = chain_index;
        residue.entity_index = chain.entity_index;
        residue.atom_start = self.atoms.len();
        self.residues.push(residue);
        self.residue_kinds.push(SecondaryStructureType::None);
        self
    }

    /// Assigns a secondary-structure type to the most recently started residue.
    pub fn secondary_structure(&mut self, kind: SecondaryStructureType) -> &mut Self {
        let Some(slot) = self.residue_kinds.last_mut() else {
            return self.record_orphan("secondary structure", "residue");
        };
        *slot = kind;
        self
    }

    /// Appends an atom to the current residue with a sequential 1-based id.
    pub fn add_atom(&mut self, name: &str, element: &str, position: Point3<f64>) -> &mut Self {
        self.push_atom(Atom::new(name, element, position))
    }

    /// Appends a fully populated atom row to the current residue.
    ///
    /// The hierarchy indices of `atom` are overwritten; a zero `id` is
    /// replaced with the next sequential id.
    pub fn push_atom(&mut self, mut atom: Atom) -> &mut Self {
        let Some(residue_index) = self.residues.len().checked_sub(1) else {
            return self.record_orphan("atom", "residue");
        };
        let residue = &self.residues[residue_index];
        atom.residue_index = residue_index;
        atom.chain_index = residue.chain_index;
        atom.entity_index = residue.entity_index;
        if atom.id == 0 {
            atom.id = self.atoms.len() + 1;
        }
        self.atoms.push(atom);
        self
    }

    pub fn with_symmetry(&mut self, symmetry: SymmetryInfo) -> &mut Self {
        self.symmetry = Some(symmetry);
        self
    }

    pub fn with_assembly_info(&mut self, assembly_info: AssemblyInfo) -> &mut Self {
        self.assembly_info = Some(assembly_info);
        self
    }

    /// Closes every open index range, derives the secondary-structure
    /// segments and validates the resulting hierarchy.
    pub fn build(mut self) -> Result<Structure, HierarchyError> {
        if let Some(err) = self.orphan.take() {
            return Err(err);
        }

        let atom_total = self.atoms.len();
        let residue_total = self.residues.len();
        let chain_total = self.chains.len();

        let residue_starts: Vec<usize> = self.residues.iter().map(|r| r.atom_start).collect();
        for (index, residue) in self.residues.iter_mut().enumerate() {
            residue.atom_end = residue_starts.get(index + 1).copied().unwrap_or(atom_total);
        }

        let chain_starts: Vec<(usize, usize)> = self
            .chains
            .iter()
            .map(|c| (c.residue_start, c.atom_start))
            .collect();
        for (index, chain) in self.chains.iter_mut().enumerate() {
            let (residue_end, atom_end) = chain_starts
                .get(index + 1)
                .copied()
                .unwrap_or((residue_total, atom_total));
            chain.residue_end = residue_end;
            chain.atom_end = atom_end;
        }

        let entity_starts: Vec<(usize, usize, usize)> = self
            .entities
            .iter()
            .map(|e| (e.chain_start, e.residue_start, e.atom_start))
            .collect();
        for (index, entity) in self.entities.iter_mut().enumerate() {
            let (chain_end, residue_end, atom_end) = entity_starts
                .get(index + 1)
                .copied()
                .unwrap_or((chain_total, residue_total, atom_total));
            entity.chain_end = chain_end;
            entity.residue_end = residue_end;
            entity.atom_end = atom_end;
        }

        let secondary_structure = segment_residues(&mut self.residues, &self.residue_kinds);

        let structure = Structure::new(
            StructureTables {
                atoms: self.atoms,
                residues: self.residues,
                chains: self.chains,
                entities: self.entities,
                secondary_structure,
            },
            self.symmetry,
            self.assembly_info,
        );
        structure.validate_hierarchy()?;
        Ok(structure)
    }

    fn record_orphan(&mut self, level: &'static str, parent: &'static str) -> &mut Self {
        self.orphan
            .get_or_insert(HierarchyError::Orphan { level, parent });
        self
    }
}

/// Groups consecutive residues of one chain with the same type into segments
/// and writes each residue's segment index back.
fn segment_residues(
    residues: &mut [Residue],
    kinds: &[SecondaryStructureType],
) -> Vec<SecondaryStructureElement> {
    let mut segments: Vec<SecondaryStructureElement> = Vec::new();
    for (index, kind) in kinds.iter().enumerate() {
        let continues = index > 0
            && kinds[index - 1] == *kind
            && residues[index - 1].chain_index == residues[index].chain_index;

        if let Some(segment) = segments.last_mut().filter(|_| continues) {
            segment.end = ResidueIdentifier::from(&residues[index]);
            segment.end_residue_index = index + 1;
        } else {
            let id = ResidueIdentifier::from(&residues[index]);
            segments.push(SecondaryStructureElement {
                kind: *kind,
                start: id.clone(),
                end: id,
                start_residue_index: index,
                end_residue_index: index + 1,
            });
        }
        residues[index].secondary_structure_index = segments.len() - 1;
    }
    segments
}
