//! # symexp Core Library
//!
//! Crystallographic symmetry-mate expansion and biological assembly
//! construction for macromolecular structures stored as flat, index-ranged
//! atom/residue/chain/entity tables.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture so each concern can be tested on
//! its own.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Structure`, its row types and the
//!   `StructureBuilder`), the space-group operator tables with cell geometry, and small
//!   geometric helpers such as bounding spheres.
//!
//! - **[`engine`]: The Logic Core.** The individual stages of an expansion: bounding sphere
//!   computation, lattice transform search, residue selection and the single-pass assembler
//!   that rebuilds hierarchically consistent tables. Configuration, errors and progress
//!   reporting live here too.
//!
//! - **[`workflows`]: The Public API.** Entry points that chain the stages together:
//!   [`workflows::mates::build_symmetry_mates`],
//!   [`workflows::mates::build_pivot_group_symmetry`] and
//!   [`workflows::assembly::build_assembly`]. Each returns a new `Structure` derived from
//!   its input, or the input itself when there is nothing to expand.

pub mod core;
pub mod engine;
pub mod workflows;
