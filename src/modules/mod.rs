//! Everything built on top of the core data structures.

pub mod decorate;
pub mod export;
pub mod parse;
pub mod sample;
pub mod walker;
