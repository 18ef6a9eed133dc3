//! Core 2-D diffusion-limited aggregation (DLA) engine.
//!
//! Main components:
//! - [`types`] — shared type aliases for lattice cells.
//! - [`geometry`] — distance and Moore-neighbourhood primitives.
//! - [`boundary`] — the spawn boundary (disk of launch cells).
//! - [`cluster`] — the growing aggregate.
//! - [`config`] — growth parameters.
//! - [`walk`] — random-walk-to-stick driver.
//! - [`growth`] — high-level growth loop and state construction.
//! - [`raster`] — rasterization of the cluster for rendering.
//! - [`error`] — error types.

pub mod boundary;
pub mod cluster;
pub mod config;
pub mod error;
pub mod geometry;
pub mod growth;
pub mod raster;
pub mod types;
pub mod walk;
