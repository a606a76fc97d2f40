//! cellcube CLI library.
//!
//! This crate provides the command implementations behind the `cellcube`
//! binary: parameter loading, atlas generation, UV dumps, atlas inspection
//! and validation.

pub mod commands;
pub mod input;
pub mod logging;
