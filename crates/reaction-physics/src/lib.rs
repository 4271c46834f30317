//! # Reaction Physics
//!
//! Core model for the H2 + Cl2 → 2 HCl classroom simulation: molecules,
//! temperature-dependent kinetics, wall-bounded motion, overlap correction
//! and reactive encounters.

pub mod constants;
pub mod encounter;
pub mod entity;
pub mod kinetics;
pub mod motion;
pub mod overlap;

pub use constants::*;
pub use encounter::*;
pub use entity::*;
pub use kinetics::*;
pub use motion::*;
pub use overlap::*;
