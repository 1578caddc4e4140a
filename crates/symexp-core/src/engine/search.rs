use super::spheres::BoundingSpheres;
use crate::core::models::operator::Operator;
use crate::core::spacegroup::spacegroup::Spacegroup;
use tracing::{info, instrument};

/// Lattice shifts are searched over `-LATTICE_EXTENT..=LATTICE_EXTENT` on
/// each axis, independent of the contact radius and the cell size.
pub const LATTICE_EXTENT: i32 = 3;

/// Enumerates lattice-shifted symmetry operators whose image of the whole
/// structure comes within `radius` of the pivot sphere.
///
/// The untranslated identity is always first. The rest follow loop order:
/// `i`, then `j`, then `k`, then operator index. That order fixes the
/// numbering of the assembled chains.
#[instrument(skip_all, name = "transform_search")]
pub fn find_transforms(
    spacegroup: &Spacegroup,
    spheres: &BoundingSpheres,
    radius: f64,
) -> Vec<Operator> {
    let mut transforms = vec![Operator::lattice_identity()];
    let operator_count = spacegroup.operator_count();

    for i in -LATTICE_EXTENT..=LATTICE_EXTENT {
        for j in -LATTICE_EXTENT..=LATTICE_EXTENT {
            for k in -LATTICE_EXTENT..=LATTICE_EXTENT {
                let first = if i == 0 && j == 0 && k == 0 { 1 } else { 0 };
                for op_index in first..operator_count {
                    let matrix = spacegroup.operator_matrix(op_index, i, j, k);
                    if spheres
                        .whole
                        .transformed(&matrix)
                        .is_within(&spheres.pivot, radius)
                    {
                        transforms.push(Operator::lattice(op_index, [i, j, k], matrix));
                    }
                }
            }
        }
    }

    info!(
        accepted = transforms.len(),
        spacegroup = spacegroup.name(),
        "Transform search complete."
    );
    transforms
}
