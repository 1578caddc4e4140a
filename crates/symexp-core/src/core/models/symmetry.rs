use crate::core::spacegroup::cell::frac_to_real;
use crate::core::spacegroup::symops::canonicalize;
use nalgebra::Matrix4;

/// Cells at or below this edge length (Angstroms) on every axis are treated as
/// placeholders written by programs that have no crystal frame.
const DEGENERATE_CELL_LENGTH: f64 = 1.1;

const TRIVIAL_SPACEGROUP: &str = "P 1";

/// Crystal symmetry metadata as read from the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetryInfo {
    pub spacegroup_name: String,
    /// Cell edge lengths (a, b, c) in Angstroms.
    pub cell_lengths: [f64; 3],
    /// Cell angles (alpha, beta, gamma) in degrees.
    pub cell_angles: [f64; 3],
    /// Cartesian-to-fractional matrix as supplied by the file.
    pub to_frac: Matrix4<f64>,
    /// Set when `to_frac` does not follow the standard PDB orientation and
    /// must be used verbatim instead of being derived from the cell.
    pub is_non_standard_crystal_frame: bool,
}

impl SymmetryInfo {
    /// Creates symmetry info in the standard frame, deriving `to_frac` from
    /// the cell parameters.
    pub fn new(spacegroup_name: &str, cell_lengths: [f64; 3], cell_angles: [f64; 3]) -> Self {
        let to_frac = frac_to_real(&cell_lengths, &cell_angles)
            .try_inverse()
            .unwrap_or_else(Matrix4::identity);
        Self {
            spacegroup_name: spacegroup_name.to_string(),
            cell_lengths,
            cell_angles,
            to_frac,
            is_non_standard_crystal_frame: false,
        }
    }

    /// Whether symmetry expansion is meaningless for this crystal: the space
    /// group is `P 1` or the cell is a sub-Angstrom placeholder.
    pub fn is_degenerate(&self) -> bool {
        canonicalize(&self.spacegroup_name) == TRIVIAL_SPACEGROUP
            || self
                .cell_lengths
                .iter()
                .all(|&length| length <= DEGENERATE_CELL_LENGTH)
    }
}
