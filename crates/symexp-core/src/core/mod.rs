//! # Core Module
//!
//! Fundamental data structures and crystallographic knowledge that the symmetry engine
//! builds on.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Flat atom, residue, chain and entity tables,
//!   secondary-structure segments, symmetry and assembly metadata, and the resolved
//!   operators attached to assembled structures
//! - **Space Groups** ([`spacegroup`]) - Static operator tables, name canonicalization,
//!   fractional/Cartesian cell bases and lattice operator matrices
//! - **Geometry** ([`utils`]) - Bounding spheres and distance helpers
//!
//! Everything in this module is immutable once built; the engine only ever reads from it
//! and allocates new tables for its results.

pub mod models;
pub mod spacegroup;
pub mod utils;
