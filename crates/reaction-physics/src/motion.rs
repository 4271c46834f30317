//! Motion integration with elastic wall reflection

use glam::Vec2;

use crate::constants::{DOMAIN_HEIGHT, DOMAIN_WIDTH};
use crate::entity::Entity;

/// Axis-aligned simulation domain with its origin in the top-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Keep a disc of `radius` fully inside the domain where it fits
    pub fn clamp_position(&self, position: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            clamp_axis(position.x, radius, self.width),
            clamp_axis(position.y, radius, self.height),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DOMAIN_WIDTH, DOMAIN_HEIGHT)
    }
}

fn clamp_axis(value: f32, radius: f32, extent: f32) -> f32 {
    let hi = extent - radius;
    if hi < radius {
        // Narrower than the disc: pin to the middle
        extent * 0.5
    } else {
        value.clamp(radius, hi)
    }
}

impl Entity {
    /// Advance one tick and bounce off the walls, independently per axis
    pub fn advance(&mut self, speed: f32, bounds: Bounds) {
        if self.consumed {
            return;
        }

        self.position += self.velocity * speed;

        let r = self.envelope_radius();
        if self.position.x < r {
            self.position.x = r;
            self.velocity.x = -self.velocity.x;
        }
        if self.position.x > bounds.width - r {
            self.position.x = bounds.width - r;
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < r {
            self.position.y = r;
            self.velocity.y = -self.velocity.y;
        }
        if self.position.y > bounds.height - r {
            self.position.y = bounds.height - r;
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Move every non-consumed entity of a collection
pub fn integrate(entities: &mut [Entity], speed: f32, bounds: Bounds) {
    for entity in entities.iter_mut().filter(|e| e.is_active()) {
        entity.advance(speed, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Species;

    #[test]
    fn test_free_motion() {
        let mut e = Entity::new(Species::ReactantA, Vec2::new(100.0, 100.0), Vec2::new(0.5, -1.0));
        e.advance(2.0, Bounds::default());
        assert_eq!(e.position, Vec2::new(101.0, 98.0));
        assert_eq!(e.velocity, Vec2::new(0.5, -1.0));
    }

    #[test]
    fn test_reflect_left_wall() {
        let mut e = Entity::new(Species::ReactantA, Vec2::new(14.5, 100.0), Vec2::new(-1.0, 0.25));
        e.advance(1.0, Bounds::default());
        assert_eq!(e.position.x, 14.0);
        assert_eq!(e.velocity, Vec2::new(1.0, 0.25));
    }

    #[test]
    fn test_reflect_far_corner() {
        let bounds = Bounds::new(200.0, 100.0);
        let mut e = Entity::new(Species::ReactantB, Vec2::new(177.0, 77.0), Vec2::new(1.0, 1.0));
        e.advance(2.0, bounds);
        assert_eq!(e.position, Vec2::new(178.0, 78.0));
        assert_eq!(e.velocity, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_consumed_does_not_move() {
        let mut entities = vec![
            Entity::new(Species::ReactantA, Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0)),
            Entity::new(Species::ReactantB, Vec2::new(200.0, 200.0), Vec2::new(1.0, 1.0)),
        ];
        entities[1].consumed = true;
        integrate(&mut entities, 1.0, Bounds::default());
        assert_eq!(entities[0].position, Vec2::new(101.0, 101.0));
        assert_eq!(entities[1].position, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_clamp_position() {
        let bounds = Bounds::new(100.0, 30.0);
        let p = bounds.clamp_position(Vec2::new(-5.0, 10.0), 14.0);
        assert_eq!(p, Vec2::new(14.0, 14.0));

        // Too narrow for the disc
        let narrow = Bounds::new(100.0, 20.0);
        let p = narrow.clamp_position(Vec2::new(50.0, 3.0), 14.0);
        assert_eq!(p, Vec2::new(50.0, 10.0));
    }
}
