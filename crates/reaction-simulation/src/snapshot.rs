//! Per-frame output for renderers

use reaction_physics::{EntityInstance, Kinetics, Species};

/// Everything a renderer needs to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSnapshot {
    /// Live reactants first, then all products
    pub instances: Vec<EntityInstance>,
    /// Kinetics used for this tick
    pub kinetics: Kinetics,
    pub reaction_count: u32,
    pub tick: u64,
}

impl RenderSnapshot {
    /// Instance data ready for a vertex/instance buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn count(&self, species: Species) -> usize {
        self.instances
            .iter()
            .filter(|i| i.get_species() == Some(species))
            .count()
    }
}
