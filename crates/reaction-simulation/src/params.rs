//! Simulation parameters for runtime tuning

use reaction_physics::{
    Bounds, EncounterParams, KineticsParams, OverlapParams, PRESEPARATION_ITERATIONS,
};

/// Largest reactant count accepted per species
pub const MAX_REACTANTS: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    /// Size of the box in pixels
    pub bounds: Bounds,
    /// Temperature → speed / probability law
    pub kinetics: KineticsParams,
    /// Per-tick overlap correction
    pub overlap: OverlapParams,
    /// Contact distance and product placement
    pub encounter: EncounterParams,
    /// Resolver passes right after random placement
    pub preseparation_iterations: usize,
    /// Upper bound for each initial reactant count
    pub max_reactants: u32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            kinetics: KineticsParams::default(),
            overlap: OverlapParams::default(),
            encounter: EncounterParams::default(),
            preseparation_iterations: PRESEPARATION_ITERATIONS,
            max_reactants: MAX_REACTANTS,
        }
    }
}

impl SimulationParams {
    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = Bounds::new(width, height);
        self
    }
}
