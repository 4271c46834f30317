//! # Reaction Simulation Engine
//!
//! Frame-driven simulation of H2 + Cl2 → 2 HCl: state ownership, per-tick
//! ordering and the snapshot handed to a renderer.

pub mod params;
pub mod simulation;
pub mod snapshot;

pub use params::*;
pub use simulation::*;
pub use snapshot::*;
