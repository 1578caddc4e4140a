//! # Engine Module
//!
//! This module implements the stages of symmetry expansion: everything between a parsed
//! structure and the rebuilt structure holding its symmetry copies.
//!
//! ## Overview
//!
//! Each stage consumes the full output of the previous one and produces a fresh immutable
//! result, so no state is shared between stages and a caller can stop between any two of them:
//!
//! 1. [`spheres`] - Hierarchical bounding spheres for residues, chains, entities, the whole
//!    structure and the pivot atom subset
//! 2. [`search`] - Lattice-shifted space-group operators whose image of the structure lies near
//!    the pivot
//! 3. [`selection`] - `(residue, transform)` pairs that pass the contact test, or that are
//!    picked by an assembly mask
//! 4. [`assembler`] - Single-pass reconstruction of the entity, chain, residue and atom tables
//!
//! ## Supporting Modules
//!
//! - **Configuration** ([`config`]) - Contact radius and pivot selection, from code or TOML
//! - **Progress Monitoring** ([`progress`]) - Phase events and cooperative cancellation
//! - **Error Handling** ([`error`]) - The error type shared by all workflows

pub mod assembler;
pub mod config;
pub mod error;
pub mod progress;
pub mod search;
pub mod selection;
pub mod spheres;
