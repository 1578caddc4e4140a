use crate::core::models::assembly::{
    AssemblyDefinition, AssemblyGenerator, AssemblyInfo, AssemblyOperator,
};
use crate::core::models::builder::StructureBuilder;
use crate::core::models::entity::EntityType;
use crate::core::models::secondary::SecondaryStructureType;
use crate::core::models::structure::Structure;
use crate::core::models::symmetry::SymmetryInfo;
use nalgebra::{Matrix4, Point3, Rotation3, Vector3};
use std::collections::HashSet;
use std::sync::Arc;

const CROSS: [[f64; 3]; 5] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

/// Five atoms in a unit cross around `center`; residue sphere radius is 1.
fn add_cross_residue(builder: &mut StructureBuilder, name: &str, seq: i32, center: Point3<f64>) {
    builder.start_residue(name, seq);
    for (i, offset) in CROSS.iter().enumerate() {
        let element = if i == 0 { "C" } else { "N" };
        builder.add_atom(element, element, center + Vector3::from(*offset));
    }
}

/// Two chains of one entity in a 100 A cubic `P 1 2 1` cell.
///
/// Chain A: 10 residues / 50 atoms along y from (45, 0, 45) to (45, 18, 45),
/// helix then strand. Chain B: 5 residues / 25 atoms from (45, 60, 45) to
/// (45, 68, 45). With chain A as pivot and a radius of 8 A, the only accepted
/// non-identity transform is `2_656`, which brings all of chain A and none of
/// chain B into range.
pub(crate) fn two_chain_crystal() -> Arc<Structure> {
    let mut builder = StructureBuilder::new();
    builder.start_entity("1", EntityType::Polymer);
    builder.start_chain("A", "A");
    for r in 0..10 {
        let center = Point3::new(45.0, 2.0 * r as f64, 45.0);
        add_cross_residue(&mut builder, "ALA", r + 1, center);
        builder.secondary_structure(if r < 5 {
            SecondaryStructureType::Helix
        } else {
            SecondaryStructureType::Strand
        });
    }
    builder.start_chain("B", "B");
    for r in 0..5 {
        let center = Point3::new(45.0, 60.0 + 2.0 * r as f64, 45.0);
        add_cross_residue(&mut builder, "GLY", r + 1, center);
    }
    builder.with_symmetry(SymmetryInfo::new("P 1 2 1", [100.0; 3], [90.0; 3]));
    Arc::new(builder.build().expect("fixture hierarchy is well formed"))
}

pub(crate) const TWO_CHAIN_RADIUS: f64 = 8.0;

/// A compact polymer chain plus a ligand and a water in the given crystal.
pub(crate) fn small_crystal(spacegroup: &str, cell: [f64; 3], angles: [f64; 3]) -> Arc<Structure> {
    let mut builder = StructureBuilder::new();
    builder.start_entity("1", EntityType::Polymer);
    builder.start_chain("A", "A");
    for r in 0..6 {
        let angle = r as f64 * 100f64.to_radians();
        let center = Point3::new(
            5.0 + 2.3 * angle.cos(),
            5.0 + 2.3 * angle.sin(),
            3.0 + 1.5 * r as f64,
        );
        add_cross_residue(&mut builder, "LEU", r + 1, center);
        builder.secondary_structure(SecondaryStructureType::Helix);
    }
    builder.start_entity("2", EntityType::NonPolymer);
    builder.start_chain("B", "A");
    add_cross_residue(&mut builder, "HEM", 101, Point3::new(9.0, 5.0, 6.0));
    builder.start_entity("3", EntityType::Water);
    builder.start_chain("C", "A");
    add_cross_residue(&mut builder, "HOH", 201, Point3::new(2.0, 8.0, 4.0));
    builder.with_symmetry(SymmetryInfo::new(spacegroup, cell, angles));
    Arc::new(builder.build().expect("fixture hierarchy is well formed"))
}

/// Chains A and B (entity 1, two residues each) and ligand chain C
/// (entity 2), with declared operators:
///
/// | index | id | motion                         |
/// |-------|----|--------------------------------|
/// | 0     | 1  | identity                       |
/// | 1     | 2  | 180 degrees about z            |
/// | 2     | 3  | translation by (0, 0, 30)      |
///
/// Assemblies: `"1"` (dimer of A and B under 1 and 2), `"2"` (`[[3], [1, 2]]`
/// on A plus `[[1]]` on C), `"empty"` (no generators), `"ghost"` (masks an
/// absent chain), `"broken"` (refers to operator index 7).
pub(crate) fn assembly_structure() -> Arc<Structure> {
    let mut builder = StructureBuilder::new();
    builder.start_entity("1", EntityType::Polymer);
    for (chain, x) in [("A", 10.0), ("B", 20.0)] {
        builder.start_chain(chain, chain);
        for r in 0..2 {
            let center = Point3::new(x, 2.0 * r as f64, 0.0);
            add_cross_residue(&mut builder, "VAL", r + 1, center);
        }
    }
    builder.start_entity("2", EntityType::NonPolymer);
    builder.start_chain("C", "C");
    add_cross_residue(&mut builder, "ATP", 1, Point3::new(15.0, 5.0, 0.0));

    let half_turn = Rotation3::from_axis_angle(&Vector3::z_axis(), std::f64::consts::PI);
    let operators = vec![
        AssemblyOperator {
            id: "1".into(),
            name: "identity operation".into(),
            matrix: Matrix4::identity(),
        },
        AssemblyOperator {
            id: "2".into(),
            name: "crystal symmetry operation".into(),
            matrix: half_turn.to_homogeneous(),
        },
        AssemblyOperator {
            id: "3".into(),
            name: "translation".into(),
            matrix: Matrix4::new_translation(&Vector3::new(0.0, 0.0, 30.0)),
        },
    ];
    let assembly = |name: &str, generators: Vec<AssemblyGenerator>| AssemblyDefinition {
        name: name.into(),
        details: String::new(),
        generators,
    };
    let both_chains = AssemblyGenerator::new(vec![vec![0, 1]], ["A", "B"]);
    let dangling = AssemblyGenerator::new(vec![vec![0], vec![7]], ["A"]);
    let assemblies = vec![
        assembly("1", vec![both_chains]),
        assembly(
            "2",
            vec![
                AssemblyGenerator::new(vec![vec![2], vec![0, 1]], ["A"]),
                AssemblyGenerator::new(vec![vec![0]], ["C"]),
            ],
        ),
        assembly("empty", Vec::new()),
        assembly("ghost", vec![AssemblyGenerator::new(vec![vec![1]], ["Z"])]),
        assembly("broken", vec![dangling]),
    ];

    builder.with_assembly_info(AssemblyInfo {
        operators,
        assemblies,
    });
    Arc::new(builder.build().expect("fixture hierarchy is well formed"))
}

/// Checks the table, naming and segment invariants every assembled
/// structure must satisfy.
pub(crate) fn assert_well_formed(structure: &Structure) {
    assert_eq!(structure.validate_hierarchy(), Ok(()));

    let mut names = HashSet::new();
    for (index, chain) in structure.chains().iter().enumerate() {
        assert!(
            names.insert(chain.asym_id.clone()),
            "duplicate chain id {}",
            chain.asym_id
        );
        if let Some(operator) = structure.chain_operator(index) {
            if !operator.is_identity {
                assert!(chain.asym_id.ends_with(&format!("-{}", operator.id)));
            }
        }
    }

    let covered: usize = structure
        .secondary_structure()
        .iter()
        .map(|segment| segment.len())
        .sum();
    assert_eq!(covered, structure.residue_count());
}
