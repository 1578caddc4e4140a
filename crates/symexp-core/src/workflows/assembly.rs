use crate::core::models::assembly::{AssemblyGenerator, AssemblyOperator};
use crate::core::models::operator::Operator;
use crate::core::models::structure::Structure;
use crate::engine::assembler::assemble;
use crate::engine::error::SymmetryError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::selection::{ResidueSelection, select_by_mask};
use crate::workflows::unchanged;
use nalgebra::Matrix4;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Builds the named biological assembly declared in the structure's
/// assembly information.
pub fn build_assembly(
    structure: &Arc<Structure>,
    name: &str,
) -> Result<Arc<Structure>, SymmetryError> {
    run(structure, name, &ProgressReporter::new())
}

#[instrument(skip_all, name = "assembly_workflow", fields(assembly = name))]
pub fn run(
    structure: &Arc<Structure>,
    name: &str,
    reporter: &ProgressReporter,
) -> Result<Arc<Structure>, SymmetryError> {
    let info = structure
        .assembly_info()
        .ok_or(SymmetryError::AssemblyInfoMissing)?;
    let definition = info
        .find(name)
        .ok_or_else(|| SymmetryError::AssemblyNotFound {
            name: name.to_string(),
        })?;

    if structure.symmetry().is_some_and(|s| s.is_degenerate()) {
        debug!("Degenerate crystal; returning input unchanged.");
        return Ok(unchanged(structure, reporter, "Degenerate crystal"));
    }
    if definition.generators.is_empty() {
        debug!("Assembly has no generators; returning input unchanged.");
        return Ok(unchanged(structure, reporter, "Assembly has no generators"));
    }

    // === Phase 1: Operator expansion and masking ===
    reporter.checkpoint("Residue Selection")?;
    reporter.report(Progress::PhaseStart {
        name: "Residue Selection",
    });
    let mut transforms: Vec<Operator> = Vec::new();
    let mut selection = ResidueSelection::new();
    for generator in &definition.generators {
        let combinations = expand_operator_groups(&generator.operator_groups);
        let composed = combinations
            .iter()
            .map(|combination| compose(&info.operators, combination))
            .collect::<Result<Vec<_>, _>>()?;

        let mask = residue_mask(structure, generator);
        if !mask.contains(&true) {
            debug!(
                chains = ?generator.asym_ids,
                "Generator matches no residue; skipping."
            );
            continue;
        }

        for (components, matrix) in composed {
            let ordinal = transforms.len();
            select_by_mask(&mut selection, structure, &mask, ordinal);
            transforms.push(Operator::assembly(ordinal, components, matrix));
        }
    }
    reporter.report(Progress::PhaseFinish);

    if selection.is_empty() {
        warn!("Assembly selects no residue; returning input unchanged.");
        return Ok(unchanged(structure, reporter, "Assembly selects no residue"));
    }

    // === Phase 2: Assembly ===
    reporter.checkpoint("Assembly")?;
    reporter.report(Progress::PhaseStart { name: "Assembly" });
    let transform_count = transforms.len();
    let assembled = assemble(structure, &selection, transforms);
    reporter.report(Progress::PhaseFinish);

    info!(
        transforms = transform_count,
        chains = assembled.chain_count(),
        atoms = assembled.atom_count(),
        "Assembly built."
    );
    Ok(Arc::new(assembled))
}

/// Cartesian product of the operator groups, first group varying slowest.
fn expand_operator_groups(groups: &[Vec<usize>]) -> Vec<Vec<usize>> {
    groups.iter().fold(vec![Vec::new()], |prefixes, group| {
        prefixes
            .iter()
            .flat_map(|prefix| {
                group.iter().map(move |&index| {
                    let mut combination = prefix.clone();
                    combination.push(index);
                    combination
                })
            })
            .collect()
    })
}

/// Multiplies the operators of one combination left to right, returning the
/// component ids alongside the product.
fn compose(
    operators: &[AssemblyOperator],
    combination: &[usize],
) -> Result<(Vec<String>, Matrix4<f64>), SymmetryError> {
    combination.iter().try_fold(
        (Vec::with_capacity(combination.len()), Matrix4::identity()),
        |(mut components, matrix), &index| {
            let operator = operators
                .get(index)
                .ok_or(SymmetryError::OperatorNotFound {
                    index,
                    count: operators.len(),
                })?;
            components.push(operator.id.clone());
            Ok((components, matrix * operator.matrix))
        },
    )
}

fn residue_mask(structure: &Structure, generator: &AssemblyGenerator) -> Vec<bool> {
    structure
        .residues()
        .iter()
        .map(|residue| generator.asym_ids.contains(&residue.asym_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::builder::StructureBuilder;
    use crate::core::models::entity::EntityType;
    use crate::core::models::operator::OperatorKind;
    use crate::core::models::structure::StructureSource;
    use crate::core::models::symmetry::SymmetryInfo;
    use crate::workflows::fixtures::{assembly_structure, assert_well_formed};
    use nalgebra::{Point3, Vector3};
    use std::sync::Mutex;

    const EPS: f64 = 1e-9;

    fn chain_names(structure: &Structure) -> Vec<&str> {
        structure
            .chains()
            .iter()
            .map(|c| c.asym_id.as_str())
            .collect()
    }

    mod expansion {
        use super::*;

        #[test]
        fn cartesian_product_keeps_first_group_outermost() {
            let combos = expand_operator_groups(&[vec![0, 1], vec![2, 3, 4]]);
            assert_eq!(
                combos,
                vec![
                    vec![0, 2],
                    vec![0, 3],
                    vec![0, 4],
                    vec![1, 2],
                    vec![1, 3],
                    vec![1, 4],
                ]
            );
        }

        #[test]
        fn empty_group_list_yields_one_empty_combination() {
            assert_eq!(expand_operator_groups(&[]), vec![Vec::<usize>::new()]);
        }

        #[test]
        fn composition_applies_rightmost_operator_first() {
            let rotate = AssemblyOperator {
                id: "R".into(),
                name: String::new(),
                matrix: nalgebra::Rotation3::from_axis_angle(
                    &Vector3::z_axis(),
                    std::f64::consts::FRAC_PI_2,
                )
                .to_homogeneous(),
            };
            let shift = AssemblyOperator {
                id: "T".into(),
                name: String::new(),
                matrix: Matrix4::new_translation(&Vector3::new(5.0, 0.0, 0.0)),
            };
            let (ids, matrix) = compose(&[rotate, shift], &[0, 1]).unwrap();
            assert_eq!(ids, vec!["R", "T"]);
            // translate first, then rotate: (5, 0, 0) -> (0, 5, 0)
            let moved = matrix.transform_point(&Point3::origin());
            assert!((moved - Point3::new(0.0, 5.0, 0.0)).norm() < EPS);
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn missing_assembly_info_is_reported() {
            let mut builder = StructureBuilder::new();
            builder.start_entity("1", EntityType::Polymer);
            builder.start_chain("A", "A");
            builder.start_residue("GLY", 1);
            builder.add_atom("CA", "C", Point3::origin());
            let structure = Arc::new(builder.build().unwrap());
            assert_eq!(
                build_assembly(&structure, "1").unwrap_err(),
                SymmetryError::AssemblyInfoMissing
            );
        }

        #[test]
        fn unknown_assembly_name_is_reported() {
            let structure = assembly_structure();
            assert_eq!(
                build_assembly(&structure, "42").unwrap_err(),
                SymmetryError::AssemblyNotFound {
                    name: "42".to_string()
                }
            );
        }

        #[test]
        fn out_of_range_operator_index_is_reported() {
            let structure = assembly_structure();
            assert_eq!(
                build_assembly(&structure, "broken").unwrap_err(),
                SymmetryError::OperatorNotFound { index: 7, count: 3 }
            );
        }

        #[test]
        fn cancellation_stops_before_selection() {
            let structure = assembly_structure();
            let reporter = ProgressReporter::new().with_cancellation(Box::new(|| true));
            assert_eq!(
                run(&structure, "1", &reporter).unwrap_err(),
                SymmetryError::Cancelled {
                    phase: "Residue Selection"
                }
            );
        }
    }

    mod short_circuits {
        use super::*;

        #[test]
        fn assembly_without_generators_returns_input() {
            let structure = assembly_structure();
            let result = build_assembly(&structure, "empty").unwrap();
            assert!(Arc::ptr_eq(&result, &structure));
        }

        #[test]
        fn generator_matching_no_chain_returns_input() {
            let structure = assembly_structure();
            let result = build_assembly(&structure, "ghost").unwrap();
            assert!(Arc::ptr_eq(&result, &structure));
        }

        #[test]
        fn early_return_reason_reaches_the_reporter() {
            let structure = assembly_structure();
            let messages = Mutex::new(Vec::new());
            let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
                if let Progress::Message(text) = event {
                    messages.lock().unwrap().push(text);
                }
            }));
            let result = run(&structure, "ghost", &reporter).unwrap();
            drop(reporter);
            assert!(Arc::ptr_eq(&result, &structure));
            assert_eq!(
                messages.into_inner().unwrap(),
                vec!["Assembly selects no residue; returning input unchanged."]
            );
        }

        #[test]
        fn degenerate_crystal_returns_input() {
            let mut builder = StructureBuilder::new();
            builder.start_entity("1", EntityType::Polymer);
            builder.start_chain("A", "A");
            builder.start_residue("GLY", 1);
            builder.add_atom("CA", "C", Point3::origin());
            builder.with_symmetry(SymmetryInfo::new("P 1", [40.0; 3], [90.0; 3]));
            builder.with_assembly_info(assembly_structure().assembly_info().unwrap().clone());
            let structure = Arc::new(builder.build().unwrap());

            let result = build_assembly(&structure, "1").unwrap();
            assert!(Arc::ptr_eq(&result, &structure));
        }
    }

    mod dimer {
        use super::*;

        #[test]
        fn every_chain_is_copied_per_operator() {
            let structure = assembly_structure();
            let result = build_assembly(&structure, "1").unwrap();

            assert_eq!(chain_names(&result), vec!["A", "B", "A-2", "B-2"]);
            assert_eq!(result.entity_count(), 1);
            assert_eq!(result.residue_count(), 8);
            assert_eq!(result.atom_count(), 40);
            assert_well_formed(&result);
        }

        #[test]
        fn operators_are_numbered_sequentially() {
            let structure = assembly_structure();
            let result = build_assembly(&structure, "1").unwrap();

            let ids: Vec<&str> = result.operators().iter().map(|o| o.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2"]);
            assert!(result.operators()[0].is_identity);
            assert!(!result.operators()[1].is_identity);
            assert_eq!(
                result.operators()[1].kind,
                OperatorKind::Assembly {
                    ordinal: 1,
                    components: vec!["2".to_string()],
                }
            );
        }

        #[test]
        fn half_turn_copies_are_rotated_about_z() {
            let structure = assembly_structure();
            let result = build_assembly(&structure, "1").unwrap();

            // chain A-2 starts after the 20 identity atoms
            for (copy, original) in result.atoms()[20..30].iter().zip(&structure.atoms()[..10]) {
                let expected = Point3::new(
                    -original.position.x,
                    -original.position.y,
                    original.position.z,
                );
                assert!((copy.position - expected).norm() < EPS);
            }
            assert_eq!(result.source(), StructureSource::Computed);
            assert!(Arc::ptr_eq(&result.parent().unwrap(), &structure));
        }
    }

    mod multiple_generators {
        use super::*;

        #[test]
        fn ordinals_accumulate_across_generators() {
            let structure = assembly_structure();
            let result = build_assembly(&structure, "2").unwrap();

            let ids: Vec<&str> = result.operators().iter().map(|o| o.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "3"]);
            // translation, translation after half turn, then plain identity for C
            assert!(!result.operators()[0].is_identity);
            assert!(!result.operators()[1].is_identity);
            assert!(result.operators()[2].is_identity);
            assert_eq!(chain_names(&result), vec!["A-1", "A-2", "C"]);
            assert_eq!(result.entity_count(), 2);
            assert_well_formed(&result);
        }

        #[test]
        fn composed_transforms_apply_in_declared_order() {
            let structure = assembly_structure();
            let result = build_assembly(&structure, "2").unwrap();

            let source = structure.atoms()[0].position;
            let lifted = result.atoms()[0].position;
            let offset = Vector3::new(0.0, 0.0, 30.0);
            assert!((lifted - (source + offset)).norm() < EPS);

            let turned = result.atoms()[10].position;
            let expected = Point3::new(-source.x, -source.y, source.z + 30.0);
            assert!((turned - expected).norm() < EPS);

            let ligand = &result.atoms()[20];
            assert_eq!(ligand.position, structure.atoms()[20].position);
            assert_eq!(ligand.id, 21);
        }

        #[test]
        fn copied_residues_are_renamed_with_their_chain() {
            let structure = assembly_structure();
            let result = build_assembly(&structure, "2").unwrap();
            let asym: Vec<&str> = result
                .residues()
                .iter()
                .map(|r| r.asym_id.as_str())
                .collect();
            assert_eq!(asym, vec!["A-1", "A-1", "A-2", "A-2", "C"]);
        }
    }
}
