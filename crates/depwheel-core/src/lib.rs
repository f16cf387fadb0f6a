//! Depwheel Core — scans a JavaScript tree for class declarations and builds
//! the adjacency data consumed by the dependency wheel frontend.
//!
//! This crate contains the whole data pipeline: directory scanning,
//! declaration-line extraction, registry construction, and the projection
//! into the `packageNames`/`matrix` structure the viewer page loads.

pub mod config;
pub mod extract;
pub mod output;
pub mod phases;
pub mod pipeline;
pub mod registry;
