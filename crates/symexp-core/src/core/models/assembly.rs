use nalgebra::Matrix4;
use std::collections::HashSet;

/// A named rigid-body operator declared by the source file
/// (e.g., one row of `_pdbx_struct_oper_list`).
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyOperator {
    pub id: String,
    pub name: String,
    pub matrix: Matrix4<f64>,
}

/// One generator entry of an assembly.
///
/// `operator_groups` holds indices into [`AssemblyInfo::operators`]. The groups
/// are expanded as a Cartesian product, so `[[0], [1, 2, 3]]` yields the three
/// products `op0·op1`, `op0·op2` and `op0·op3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyGenerator {
    pub operator_groups: Vec<Vec<usize>>,
    pub asym_ids: HashSet<String>,
}

impl AssemblyGenerator {
    pub fn new<I, S>(operator_groups: Vec<Vec<usize>>, asym_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            operator_groups,
            asym_ids: asym_ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyDefinition {
    pub name: String,
    pub details: String,
    pub generators: Vec<AssemblyGenerator>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyInfo {
    pub operators: Vec<AssemblyOperator>,
    pub assemblies: Vec<AssemblyDefinition>,
}

impl AssemblyInfo {
    pub fn find(&self, name: &str) -> Option<&AssemblyDefinition> {
        self.assemblies.iter().find(|a| a.name == name)
    }
}
