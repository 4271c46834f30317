//! Molecule types and properties for the reaction simulation

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use rand::Rng;

use crate::constants::*;
use crate::motion::Bounds;

/// Molecule species
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// H2
    ReactantA = 0,
    /// Cl2
    ReactantB = 1,
    /// HCl, terminal
    Product = 2,
}

impl Species {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Species::ReactantA),
            1 => Some(Species::ReactantB),
            2 => Some(Species::Product),
            _ => None,
        }
    }

    /// Radii of the two bonded atoms, left to right
    pub fn atom_radii(self) -> [f32; 2] {
        match self {
            Species::ReactantA => [HYDROGEN_RADIUS, HYDROGEN_RADIUS],
            Species::ReactantB => [CHLORINE_RADIUS, CHLORINE_RADIUS],
            Species::Product => [HYDROGEN_RADIUS, CHLORINE_RADIUS],
        }
    }

    /// Interaction radius used by both the overlap and the encounter tests
    pub fn envelope_radius(self) -> f32 {
        let [r1, r2] = self.atom_radii();
        r1 + r2 + ENVELOPE_PADDING
    }

    pub fn is_reactant(self) -> bool {
        !matches!(self, Species::Product)
    }

    /// True for the one reactive pairing, in either order
    pub fn reacts_with(self, other: Species) -> bool {
        matches!(
            (self, other),
            (Species::ReactantA, Species::ReactantB) | (Species::ReactantB, Species::ReactantA)
        )
    }
}

/// A single molecule in the box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub species: Species,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Logically deleted: skipped by motion, drawing and interactions
    pub consumed: bool,
}

impl Entity {
    pub fn new(species: Species, position: Vec2, velocity: Vec2) -> Self {
        Self {
            species,
            position,
            velocity,
            consumed: false,
        }
    }

    /// Create an entity at a random spot away from the walls, moving in a random direction
    pub fn spawn<R: Rng + ?Sized>(species: Species, bounds: Bounds, rng: &mut R) -> Self {
        let margin_x = SPAWN_MARGIN.min(bounds.width * 0.5);
        let margin_y = SPAWN_MARGIN.min(bounds.height * 0.5);
        let position = Vec2::new(
            sample_span(rng, margin_x, bounds.width - margin_x),
            sample_span(rng, margin_y, bounds.height - margin_y),
        );
        Self::new(species, position, random_velocity(rng))
    }

    pub fn envelope_radius(&self) -> f32 {
        self.species.envelope_radius()
    }

    pub fn is_active(&self) -> bool {
        !self.consumed
    }

    pub fn instance(&self) -> EntityInstance {
        EntityInstance {
            position: self.position.to_array(),
            radius: self.envelope_radius(),
            species: self.species as u32,
        }
    }
}

/// Fresh velocity with both components uniform in [-1, 1)
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.random_range(-MAX_INITIAL_VELOCITY..MAX_INITIAL_VELOCITY),
        rng.random_range(-MAX_INITIAL_VELOCITY..MAX_INITIAL_VELOCITY),
    )
}

/// Uniform sample in [lo, hi), collapsing to `lo` for an empty span
pub(crate) fn sample_span<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

/// Renderer-facing entity data
/// Aligned for direct upload as an instance buffer
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct EntityInstance {
    pub position: [f32; 2],
    pub radius: f32,
    /// Maps to the `Species` enum
    pub species: u32,
}

impl EntityInstance {
    pub fn get_species(&self) -> Option<Species> {
        Species::from_u32(self.species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_envelope_radii() {
        assert_eq!(Species::ReactantA.envelope_radius(), 14.0);
        assert_eq!(Species::ReactantB.envelope_radius(), 22.0);
        assert_eq!(Species::Product.envelope_radius(), 18.0);
    }

    #[test]
    fn test_reactive_pairs() {
        assert!(Species::ReactantA.reacts_with(Species::ReactantB));
        assert!(Species::ReactantB.reacts_with(Species::ReactantA));
        assert!(!Species::ReactantA.reacts_with(Species::ReactantA));
        assert!(!Species::ReactantB.reacts_with(Species::ReactantB));
        assert!(!Species::Product.reacts_with(Species::ReactantA));
        assert!(!Species::Product.is_reactant());
    }

    #[test]
    fn test_spawn_inside_margins() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::new(640.0, 400.0);
        for _ in 0..200 {
            let entity = Entity::spawn(Species::ReactantB, bounds, &mut rng);
            assert!(entity.position.x >= SPAWN_MARGIN && entity.position.x < 640.0 - SPAWN_MARGIN);
            assert!(entity.position.y >= SPAWN_MARGIN && entity.position.y < 400.0 - SPAWN_MARGIN);
            assert!(entity.velocity.x >= -1.0 && entity.velocity.x < 1.0);
            assert!(entity.velocity.y >= -1.0 && entity.velocity.y < 1.0);
            assert!(entity.is_active());
        }
    }

    #[test]
    fn test_spawn_in_tiny_domain() {
        let mut rng = StdRng::seed_from_u64(1);
        let entity = Entity::spawn(Species::ReactantA, Bounds::new(50.0, 0.0), &mut rng);
        assert_eq!(entity.position, Vec2::new(25.0, 0.0));
    }

    #[test]
    fn test_instance_roundtrip_species() {
        let entity = Entity::new(Species::Product, Vec2::new(3.0, 4.0), Vec2::ZERO);
        let instance = entity.instance();
        assert_eq!(instance.position, [3.0, 4.0]);
        assert_eq!(instance.radius, 18.0);
        assert_eq!(instance.get_species(), Some(Species::Product));
        assert_eq!(Species::from_u32(9), None);
    }
}
