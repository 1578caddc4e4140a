//! # Workflows Module
//!
//! High-level entry points that run a complete expansion from an input structure to a
//! newly assembled one.
//!
//! ## Architecture
//!
//! - **Symmetry Mates** ([`mates`]) - Geometric expansion: finds the lattice transforms whose
//!   copies come within a contact radius of the structure (or of a pivot selection) and
//!   keeps only the residues that are actually in range.
//! - **Biological Assemblies** ([`assembly`]) - Declarative expansion: composes the operators
//!   named by an assembly's generators and copies the chains each generator lists.
//!
//! ## Key Capabilities
//!
//! - **Degenerate short-circuits** returning the input unchanged when there is nothing to do
//! - **Progress monitoring** with phase reporting and cancellation between stages
//! - **Globally unique chain naming** for every non-identity copy

use crate::core::models::structure::Structure;
use crate::engine::progress::{Progress, ProgressReporter};
use std::sync::Arc;

pub mod assembly;
pub mod mates;

#[cfg(test)]
pub(crate) mod fixtures;

/// Tells the reporter why a workflow stopped early and hands back the input.
fn unchanged(
    structure: &Arc<Structure>,
    reporter: &ProgressReporter,
    reason: &str,
) -> Arc<Structure> {
    reporter.report(Progress::Message(format!("{reason}; returning input unchanged.")));
    Arc::clone(structure)
}
