use super::cell::frac_to_real;
use super::symops::{SpacegroupError, canonicalize, resolve};
use crate::core::models::symmetry::SymmetryInfo;
use nalgebra::{Matrix4, Vector3};

/// A space group bound to a concrete unit cell.
///
/// Produces real-space affine transforms for any combination of symmetry
/// operator and integer lattice shift.
#[derive(Debug, Clone)]
pub struct Spacegroup {
    name: String,
    operators: Vec<Matrix4<f64>>,
    to_frac: Matrix4<f64>,
    from_frac: Matrix4<f64>,
}

impl Spacegroup {
    /// Resolves the space group named in `info` and prepares the cell basis.
    ///
    /// # Errors
    ///
    /// Returns [`SpacegroupError::Unknown`] if the name is not in the operator
    /// table and [`SpacegroupError::SingularCell`] if the cell basis cannot be
    /// inverted.
    pub fn new(info: &SymmetryInfo) -> Result<Self, SpacegroupError> {
        let operators = resolve(&info.spacegroup_name)?;
        let name = canonicalize(&info.spacegroup_name);
        let singular = || SpacegroupError::SingularCell { name: name.clone() };

        let (to_frac, from_frac) = if info.is_non_standard_crystal_frame {
            let from_frac = info.to_frac.try_inverse().ok_or_else(singular)?;
            (info.to_frac, from_frac)
        } else {
            let from_frac = frac_to_real(&info.cell_lengths, &info.cell_angles);
            let to_frac = from_frac.try_inverse().ok_or_else(singular)?;
            (to_frac, from_frac)
        };

        Ok(Self {
            name,
            operators,
            to_frac,
            from_frac,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }

    pub fn to_frac(&self) -> &Matrix4<f64> {
        &self.to_frac
    }

    pub fn from_frac(&self) -> &Matrix4<f64> {
        &self.from_frac
    }

    /// Real-space transform for operator `op_index` shifted by the lattice
    /// vector `(i, j, k)`: `fromFrac · translate(i, j, k) · op · toFrac`.
    ///
    /// `op_index` must be below [`operator_count`](Self::operator_count).
    pub fn operator_matrix(&self, op_index: usize, i: i32, j: i32, k: i32) -> Matrix4<f64> {
        let shift = Matrix4::new_translation(&Vector3::new(i as f64, j as f64, k as f64));
        self.from_frac * shift * self.operators[op_index] * self.to_frac
    }
}
