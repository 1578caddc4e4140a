use crate::core::models::structure::Structure;
use crate::core::spacegroup::spacegroup::Spacegroup;
use crate::engine::assembler::assemble;
use crate::engine::config::{AtomSelection, MatesConfig};
use crate::engine::error::SymmetryError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::search::find_transforms;
use crate::engine::selection::select_by_contact;
use crate::engine::spheres::BoundingSpheres;
use crate::workflows::unchanged;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Builds the symmetry copies of `structure` that come within `radius`
/// Angstroms of the whole structure.
///
/// Returns the input itself (same `Arc`) when there is nothing to expand:
/// no symmetry info, a `P 1` or placeholder cell, or a radius that is not a
/// positive finite number.
pub fn build_symmetry_mates(
    structure: &Arc<Structure>,
    radius: f64,
) -> Result<Arc<Structure>, SymmetryError> {
    build_pivot_group_symmetry(structure, radius, None)
}

/// Like [`build_symmetry_mates`], but measures contacts against the
/// bounding sphere of `pivot` instead of the whole structure.
pub fn build_pivot_group_symmetry(
    structure: &Arc<Structure>,
    radius: f64,
    pivot: Option<&AtomSelection>,
) -> Result<Arc<Structure>, SymmetryError> {
    let config = MatesConfig {
        radius,
        pivot: pivot.cloned().unwrap_or_default(),
    };
    run(structure, &config, &ProgressReporter::new())
}

#[instrument(skip_all, name = "symmetry_mates_workflow")]
pub fn run(
    structure: &Arc<Structure>,
    config: &MatesConfig,
    reporter: &ProgressReporter,
) -> Result<Arc<Structure>, SymmetryError> {
    let Some(symmetry) = structure.symmetry() else {
        debug!("No symmetry information; returning input unchanged.");
        return Ok(unchanged(structure, reporter, "No symmetry information"));
    };
    if symmetry.is_degenerate() {
        debug!(
            spacegroup = %symmetry.spacegroup_name,
            "Degenerate crystal; returning input unchanged."
        );
        return Ok(unchanged(structure, reporter, "Degenerate crystal"));
    }
    if !config.radius.is_finite() || config.radius <= 0.0 {
        debug!(
            radius = config.radius,
            "Non-positive radius; returning input unchanged."
        );
        return Ok(unchanged(structure, reporter, "Non-positive radius"));
    }

    // === Phase 0: Space group and bounding spheres ===
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    let spacegroup = Spacegroup::new(symmetry)?;
    let pivot_atoms = match &config.pivot {
        AtomSelection::All => None,
        selection => Some(selection.resolve(structure)),
    };
    let spheres = BoundingSpheres::compute(structure, pivot_atoms.as_deref());
    reporter.report(Progress::PhaseFinish);

    // === Phase 1: Transform search ===
    reporter.checkpoint("Transform Search")?;
    reporter.report(Progress::PhaseStart {
        name: "Transform Search",
    });
    let transforms = find_transforms(&spacegroup, &spheres, config.radius);
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Residue selection ===
    reporter.checkpoint("Residue Selection")?;
    reporter.report(Progress::PhaseStart {
        name: "Residue Selection",
    });
    let selection = select_by_contact(structure, &spheres, &transforms, config.radius);
    reporter.report(Progress::PhaseFinish);

    if selection.is_empty() {
        warn!("No residue lies within the contact radius; returning input unchanged.");
        return Ok(unchanged(structure, reporter, "No residue in contact"));
    }

    // === Phase 3: Assembly ===
    reporter.checkpoint("Assembly")?;
    reporter.report(Progress::PhaseStart { name: "Assembly" });
    let assembled = assemble(structure, &selection, transforms);
    reporter.report(Progress::PhaseFinish);

    info!(
        chains = assembled.chain_count(),
        atoms = assembled.atom_count(),
        "Symmetry mates built."
    );
    Ok(Arc::new(assembled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::builder::StructureBuilder;
    use crate::core::models::entity::EntityType;
    use crate::core::models::structure::StructureSource;
    use crate::core::models::symmetry::SymmetryInfo;
    use crate::core::spacegroup::symops::SpacegroupError;
    use crate::engine::config::MatesConfigBuilder;
    use crate::workflows::fixtures::{
        TWO_CHAIN_RADIUS, assert_well_formed, small_crystal, two_chain_crystal,
    };
    use nalgebra::Point3;
    use std::sync::Mutex;

    fn chain_a() -> AtomSelection {
        AtomSelection::Chain("A".to_string())
    }

    mod short_circuits {
        use super::*;

        #[test]
        fn p1_cell_returns_input_unchanged() {
            let structure = small_crystal("P 1", [50.0; 3], [90.0; 3]);
            let result = build_symmetry_mates(&structure, 10.0).unwrap();
            assert!(Arc::ptr_eq(&result, &structure));
        }

        #[test]
        fn early_return_reason_reaches_the_reporter() {
            let structure = small_crystal("P 1", [50.0; 3], [90.0; 3]);
            let messages = Mutex::new(Vec::new());
            let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
                if let Progress::Message(text) = event {
                    messages.lock().unwrap().push(text);
                }
            }));
            let config = MatesConfig {
                radius: 10.0,
                pivot: AtomSelection::All,
            };
            let result = run(&structure, &config, &reporter).unwrap();
            drop(reporter);
            assert!(Arc::ptr_eq(&result, &structure));
            assert_eq!(
                messages.into_inner().unwrap(),
                vec!["Degenerate crystal; returning input unchanged."]
            );
        }

        #[test]
        fn placeholder_cell_returns_input_unchanged() {
            let structure = small_crystal("P 21 21 21", [1.0; 3], [90.0; 3]);
            let result = build_symmetry_mates(&structure, 10.0).unwrap();
            assert!(Arc::ptr_eq(&result, &structure));
        }

        #[test]
        fn non_positive_radius_returns_input_unchanged() {
            let structure = small_crystal("P 21 21 21", [30.0; 3], [90.0; 3]);
            for radius in [0.0, -4.0, f64::NAN] {
                let result = build_symmetry_mates(&structure, radius).unwrap();
                assert!(Arc::ptr_eq(&result, &structure));
                assert_eq!(result.atom_count(), structure.atom_count());
            }
        }

        #[test]
        fn missing_symmetry_returns_input_unchanged() {
            let mut builder = StructureBuilder::new();
            builder.start_entity("1", EntityType::Polymer);
            builder.start_chain("A", "A");
            builder.start_residue("GLY", 1);
            builder.add_atom("CA", "C", Point3::origin());
            let structure = Arc::new(builder.build().unwrap());
            let result = build_symmetry_mates(&structure, 5.0).unwrap();
            assert!(Arc::ptr_eq(&result, &structure));
        }

        #[test]
        fn pivot_out_of_reach_returns_input_unchanged() {
            let structure = two_chain_crystal();
            let nowhere = AtomSelection::Atoms(Vec::new());
            let result = build_pivot_group_symmetry(&structure, 1.0, Some(&nowhere)).unwrap();
            assert!(Arc::ptr_eq(&result, &structure));
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn unknown_space_group_fails_before_building() {
            let structure = small_crystal("Q 42 42", [30.0; 3], [90.0; 3]);
            let err = build_symmetry_mates(&structure, 5.0).unwrap_err();
            assert_eq!(
                err,
                SymmetryError::Spacegroup {
                    source: SpacegroupError::Unknown {
                        name: "Q 42 42".to_string()
                    }
                }
            );
        }

        #[test]
        fn cancellation_stops_between_stages() {
            let structure = two_chain_crystal();
            let config = MatesConfigBuilder::new()
                .radius(TWO_CHAIN_RADIUS)
                .build()
                .unwrap();
            let reporter = ProgressReporter::new().with_cancellation(Box::new(|| true));
            assert_eq!(
                run(&structure, &config, &reporter).unwrap_err(),
                SymmetryError::Cancelled {
                    phase: "Transform Search"
                }
            );
        }
    }

    mod two_chain_scenario {
        use super::*;

        fn expand() -> (Arc<Structure>, Arc<Structure>) {
            let structure = two_chain_crystal();
            let result =
                build_pivot_group_symmetry(&structure, TWO_CHAIN_RADIUS, Some(&chain_a())).unwrap();
            (structure, result)
        }

        #[test]
        fn one_non_identity_transform_is_accepted() {
            let (_, result) = expand();
            let ids: Vec<&str> = result.operators().iter().map(|o| o.id.as_str()).collect();
            assert_eq!(ids, vec!["1_555", "2_656"]);
            assert!(result.operators()[0].is_identity);
        }

        #[test]
        fn chain_a_and_its_copy_are_assembled() {
            let (_, result) = expand();
            let names: Vec<&str> = result.chains().iter().map(|c| c.asym_id.as_str()).collect();
            assert_eq!(names, vec!["A", "A-2_656"]);
            assert_eq!(result.entity_count(), 1);
            assert_eq!(result.residue_count(), 20);
            assert_eq!(result.atom_count(), 100);
            assert_well_formed(&result);
        }

        #[test]
        fn copy_coordinates_follow_the_operator() {
            let (structure, result) = expand();
            // (-x + 100, y, -z + 100)
            let source = structure.atoms()[1].position;
            let copied = result.atoms()[51].position;
            let expected = Point3::new(100.0 - source.x, source.y, 100.0 - source.z);
            assert!((copied - expected).norm() < 1e-9);
            assert_eq!(result.atoms()[51].id, 52);
        }

        #[test]
        fn identity_copy_keeps_source_coordinates() {
            let (structure, result) = expand();
            for (copied, original) in result.atoms()[..50].iter().zip(structure.atoms()) {
                assert_eq!(copied.position, original.position);
            }
        }

        #[test]
        fn secondary_structure_is_rebuilt_per_copy() {
            let (_, result) = expand();
            let ranges: Vec<_> = result
                .secondary_structure()
                .iter()
                .map(|s| s.residue_range())
                .collect();
            assert_eq!(ranges, vec![0..5, 5..10, 10..15, 15..20]);
            assert_eq!(result.secondary_structure()[2].start.asym_id, "A-2_656");
        }

        #[test]
        fn result_is_computed_from_the_input() {
            let (structure, result) = expand();
            assert_eq!(result.source(), StructureSource::Computed);
            assert!(Arc::ptr_eq(&result.parent().unwrap(), &structure));
            assert_eq!(result.symmetry(), structure.symmetry());
            assert_eq!(structure.chain_count(), 2);
        }
    }

    mod whole_structure {
        use super::*;

        #[test]
        fn expansion_keeps_every_source_residue_under_identity() {
            let structure = small_crystal("P 21 21 21", [20.0, 24.0, 28.0], [90.0; 3]);
            let result = build_symmetry_mates(&structure, 8.0).unwrap();

            assert!(result.atom_count() > structure.atom_count());
            let identity_atoms: usize = result
                .chains()
                .iter()
                .filter(|c| c.operator_index == Some(0))
                .map(|c| c.atom_range().len())
                .sum();
            assert_eq!(identity_atoms, structure.atom_count());
            assert_well_formed(&result);
        }

        #[test]
        fn atom_count_is_the_sum_over_selected_residues() {
            let structure = small_crystal("C 1 2 1", [40.0, 22.0, 30.0], [90.0, 104.0, 90.0]);
            let result = build_symmetry_mates(&structure, 8.0).unwrap();

            let expected: usize = result.residues().iter().map(|r| r.atom_count()).sum();
            assert_eq!(result.atom_count(), expected);
            for chain in result.chains() {
                let source = chain.source_chain_index.unwrap();
                let residues = chain.residue_range().len();
                assert!(residues <= structure.chains()[source].residue_range().len());
            }
            assert_well_formed(&result);
        }

        #[test]
        fn non_standard_frame_is_honoured() {
            let mut symmetry = SymmetryInfo::new("P 1 21 1", [20.0; 3], [90.0; 3]);
            symmetry.is_non_standard_crystal_frame = true;
            let mut builder = StructureBuilder::new();
            builder.start_entity("1", EntityType::Polymer);
            builder.start_chain("A", "A");
            builder.start_residue("GLY", 1);
            builder.add_atom("CA", "C", Point3::new(1.0, 1.0, 1.0));
            builder.with_symmetry(symmetry);
            let structure = Arc::new(builder.build().unwrap());

            // Supplied to_frac equals the derived one, so results coincide.
            let result = build_symmetry_mates(&structure, 25.0).unwrap();
            assert_well_formed(&result);
            assert!(result.operators().iter().any(|o| o.id == "1_655"));
        }

        #[test]
        fn progress_reports_every_phase_in_order() {
            let structure = two_chain_crystal();
            let phases = Mutex::new(Vec::new());
            let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
                if let Progress::PhaseStart { name } = event {
                    phases.lock().unwrap().push(name);
                }
            }));
            let config = MatesConfig {
                radius: TWO_CHAIN_RADIUS,
                pivot: chain_a(),
            };
            run(&structure, &config, &reporter).unwrap();
            drop(reporter);
            let expected = [
                "Preparation",
                "Transform Search",
                "Residue Selection",
                "Assembly",
            ];
            assert_eq!(phases.into_inner().unwrap(), expected);
        }
    }
}
