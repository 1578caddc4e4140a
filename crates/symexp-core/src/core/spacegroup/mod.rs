//! Space-group operator tables and the real-space transforms they generate.
//!
//! [`symops`] resolves a space-group name to its fractional-space operators,
//! [`cell`] derives the unit-cell basis and [`spacegroup::Spacegroup`] combines
//! both into Cartesian affine transforms for any operator and lattice shift.

pub mod cell;
pub mod spacegroup;
pub mod symops;
mod tables;
