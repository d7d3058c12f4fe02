//! Core types for the Tessera layout engine.
//!
//! This crate provides the value types shared by the layout engine and the
//! collaborators that consume its output:
//! - Geometry (axes, sizes, border-box rectangles)
//! - Box-model metrics (border, padding, cell spacing, alignment)
//! - Error types

pub mod errors;
pub mod geometry;
pub mod style;

pub use errors::*;
pub use geometry::*;
pub use style::*;
