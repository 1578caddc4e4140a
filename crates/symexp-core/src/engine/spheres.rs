use crate::core::models::structure::Structure;
use crate::core::utils::geometry::{Sphere, max_distance};
use nalgebra::{Point3, Vector3};
use std::ops::Range;
use tracing::{debug, instrument};

/// Bounding spheres for every level of a structure's hierarchy.
#[derive(Debug, Clone)]
pub struct BoundingSpheres {
    pub residues: Vec<Sphere>,
    pub chains: Vec<Sphere>,
    pub entities: Vec<Sphere>,
    pub whole: Sphere,
    /// Reference sphere for contact tests; equals `whole` unless a pivot
    /// subset was given.
    pub pivot: Sphere,
}

/// Running coordinate sum; divides by at least one.
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: Vector3<f64>,
    count: usize,
}

impl Accumulator {
    fn add(&mut self, point: &Point3<f64>) {
        self.sum += point.coords;
        self.count += 1;
    }

    fn centroid(&self) -> Point3<f64> {
        Point3::from(self.sum / self.count.max(1) as f64)
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl BoundingSpheres {
    /// Computes all spheres in one bottom-up pass over the atom table.
    ///
    /// Residue centroids are the mean of their atoms; chain, entity and
    /// whole-structure centroids are means of the non-empty centroids one
    /// level down. Radii are the largest centroid-to-atom distance within the
    /// level's atom range. An empty `pivot_atoms` slice yields a pivot sphere
    /// at the origin with zero radius.
    #[instrument(skip_all, name = "bounding_spheres")]
    pub fn compute(structure: &Structure, pivot_atoms: Option<&[usize]>) -> Self {
        let atoms = structure.atoms();
        let position = move |index: usize| &atoms[index].position;

        let mut residue_sums = vec![Accumulator::default(); structure.residue_count()];
        for atom in atoms {
            residue_sums[atom.residue_index].add(&atom.position);
        }

        let mut chain_sums = vec![Accumulator::default(); structure.chain_count()];
        for (residue, sum) in structure.residues().iter().zip(&residue_sums) {
            if !sum.is_empty() {
                chain_sums[residue.chain_index].add(&sum.centroid());
            }
        }

        let mut entity_sums = vec![Accumulator::default(); structure.entity_count()];
        for (chain, sum) in structure.chains().iter().zip(&chain_sums) {
            if !sum.is_empty() {
                entity_sums[chain.entity_index].add(&sum.centroid());
            }
        }

        let mut whole_sum = Accumulator::default();
        for sum in entity_sums.iter().filter(|s| !s.is_empty()) {
            whole_sum.add(&sum.centroid());
        }

        let bound = |sum: &Accumulator, range: Range<usize>| {
            let center = sum.centroid();
            Sphere::new(center, max_distance(&center, range.map(position)))
        };

        let residues: Vec<Sphere> = structure
            .residues()
            .iter()
            .zip(&residue_sums)
            .map(|(residue, sum)| bound(sum, residue.atom_range()))
            .collect();
        let chains: Vec<Sphere> = structure
            .chains()
            .iter()
            .zip(&chain_sums)
            .map(|(chain, sum)| bound(sum, chain.atom_range()))
            .collect();
        let entities: Vec<Sphere> = structure
            .entities()
            .iter()
            .zip(&entity_sums)
            .map(|(entity, sum)| bound(sum, entity.atom_range()))
            .collect();
        let whole = bound(&whole_sum, 0..atoms.len());

        let pivot = match pivot_atoms {
            None => whole,
            Some(indices) => {
                let mut sum = Accumulator::default();
                for &index in indices {
                    sum.add(position(index));
                }
                let center = sum.centroid();
                let spread = max_distance(&center, indices.iter().map(|&i| position(i)));
                Sphere::new(center, spread)
            }
        };

        debug!(
            whole_radius = whole.radius,
            pivot_radius = pivot.radius,
            "Bounding spheres computed."
        );

        Self {
            residues,
            chains,
            entities,
            whole,
            pivot,
        }
    }
}
