use nalgebra::{Matrix4, Point3};

/// A single row of the atom table.
///
/// Atoms never own their parents; `residue_index`, `chain_index` and
/// `entity_index` are plain row indices into the sibling tables of the same
/// [`Structure`](super::structure::Structure). Iterating atoms in row order,
/// each of the three back-references is non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Serial number of the atom (e.g., `_atom_site.id`).
    pub id: usize,
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// Element symbol (e.g., "C", "FE").
    pub element: String,
    /// Alternate location indicator, if any.
    pub alt_loc: Option<char>,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
    pub occupancy: f64,
    /// Isotropic temperature factor (B-factor).
    pub temperature_factor: f64,
    pub residue_index: usize,
    pub chain_index: usize,
    pub entity_index: usize,
}

impl Atom {
    /// Creates a new `Atom` with full occupancy and no hierarchy assignment.
    ///
    /// The hierarchy indices are filled in by whoever inserts the row into a
    /// table (see [`StructureBuilder`](super::builder::StructureBuilder)).
    pub fn new(name: &str, element: &str, position: Point3<f64>) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            element: element.to_string(),
            alt_loc: None,
            position,
            occupancy: 1.0,
            temperature_factor: 0.0,
            residue_index: 0,
            chain_index: 0,
            entity_index: 0,
        }
    }

    /// Copies every non-geometric column of `self` into a new row placed at
    /// `position` under the given output hierarchy indices.
    pub(crate) fn materialize(
        &self,
        id: usize,
        transform: &Matrix4<f64>,
        residue_index: usize,
        chain_index: usize,
        entity_index: usize,
    ) -> Self {
        Self {
            id,
            name: self.name.clone(),
            element: self.element.clone(),
            alt_loc: self.alt_loc,
            position: transform.transform_point(&self.position),
            occupancy: self.occupancy,
            temperature_factor: self.temperature_factor,
            residue_index,
            chain_index,
            entity_index,
        }
    }
}
