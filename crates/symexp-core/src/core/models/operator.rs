use nalgebra::Matrix4;

const IDENTITY_TOLERANCE: f64 = 1e-6;

/// How an [`Operator`] was derived.
#[derive(Debug, Clone, PartialEq)]
pub enum OperatorKind {
    /// A space-group operator combined with an integer lattice shift.
    Lattice { op_index: usize, shift: [i32; 3] },
    /// A product of named assembly operators, listed in composition order.
    Assembly {
        ordinal: usize,
        components: Vec<String>,
    },
}

/// A resolved rigid-body motion attached to an assembled structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub id: String,
    pub matrix: Matrix4<f64>,
    pub is_identity: bool,
    pub kind: OperatorKind,
}

impl Operator {
    /// The untranslated identity of a space group, always `"1_555"`.
    pub fn lattice_identity() -> Self {
        Self::lattice(0, [0, 0, 0], Matrix4::identity())
    }

    /// Builds a lattice operator named in the crystallographic
    /// `{op+1}_{5+i}{5+j}{5+k}` convention.
    pub fn lattice(op_index: usize, shift: [i32; 3], matrix: Matrix4<f64>) -> Self {
        let [i, j, k] = shift;
        Self {
            id: format!("{}_{}{}{}", op_index + 1, 5 + i, 5 + j, 5 + k),
            matrix,
            is_identity: op_index == 0 && shift == [0, 0, 0],
            kind: OperatorKind::Lattice { op_index, shift },
        }
    }

    /// Builds an assembly operator with a sequential id (`ordinal + 1`).
    pub fn assembly(ordinal: usize, components: Vec<String>, matrix: Matrix4<f64>) -> Self {
        Self {
            id: (ordinal + 1).to_string(),
            is_identity: is_identity_matrix(&matrix),
            matrix,
            kind: OperatorKind::Assembly {
                ordinal,
                components,
            },
        }
    }
}

pub fn is_identity_matrix(matrix: &Matrix4<f64>) -> bool {
    (matrix - Matrix4::identity()).amax() < IDENTITY_TOLERANCE
}
