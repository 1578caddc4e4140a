//! # Core Models Module
//!
//! Data structures describing a molecular structure as flat tables, together with the
//! crystallographic metadata needed to expand it.
//!
//! ## Overview
//!
//! A [`structure::Structure`] stores four parallel tables (entities, chains, residues and
//! atoms). Parent rows refer to their children through half-open index ranges, never through
//! pointers, so the whole hierarchy can be rebuilt by a single linear pass. The tables are:
//!
//! - **Append-only while building** - [`builder::StructureBuilder`] opens rows in order and
//!   closes every range at the end
//! - **Immutable afterwards** - expansion always produces a new structure
//! - **Self-checking** - [`structure::Structure::validate_hierarchy`] verifies contiguity and
//!   back-references
//!
//! ## Key Components
//!
//! - [`atom`], [`residue`], [`chain`], [`entity`] - Typed table rows
//! - [`secondary`] - Secondary-structure segments indexed against residue rows
//! - [`symmetry`] - Space group and unit cell of the crystal
//! - [`assembly`] - Declared assembly operators and generator entries
//! - [`operator`] - Resolved rigid motions attached to computed structures
//! - [`structure`] - The structure container and its hierarchy validation
//! - [`builder`] - Incremental construction of well-formed structures
//!
//! ## Usage
//!
//! ```ignore
//! use symexp::core::models::builder::StructureBuilder;
//! use symexp::core::models::entity::EntityType;
//!
//! let mut builder = StructureBuilder::new();
//! builder.start_entity("1", EntityType::Polymer).start_chain("A", "A");
//! builder.start_residue("GLY", 1).add_atom("CA", "C", Point3::origin());
//! let structure = builder.build()?;
//! ```

pub mod assembly;
pub mod atom;
pub mod builder;
pub mod chain;
pub mod entity;
pub mod operator;
pub mod residue;
pub mod secondary;
pub mod structure;
pub mod symmetry;
