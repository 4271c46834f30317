//! Positional overlap correction
//!
//! Pushes overlapping molecules apart along their separation axis. Only
//! positions change; velocities are left to the encounter resolver.

use glam::Vec2;

use crate::constants::{OVERLAP_EPSILON, OVERLAP_PUSH_FRACTION};
use crate::entity::Entity;
use crate::motion::Bounds;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlapParams {
    /// Fraction of the overlap removed per pass, split between both entities
    pub push_fraction: f32,
    /// Pairs closer than this have no usable separation direction and are pushed along +X
    pub epsilon: f32,
}

impl Default for OverlapParams {
    fn default() -> Self {
        Self {
            push_fraction: OVERLAP_PUSH_FRACTION,
            epsilon: OVERLAP_EPSILON,
        }
    }
}

/// One pass over every unordered pair of non-consumed entities.
/// Returns the number of pairs that were pushed apart.
pub fn resolve_overlaps(entities: &mut [Entity], params: &OverlapParams, bounds: Bounds) -> usize {
    let mut corrected = 0;

    for i in 0..entities.len() {
        if entities[i].consumed {
            continue;
        }

        for j in (i + 1)..entities.len() {
            if entities[j].consumed {
                continue;
            }

            let ra = entities[i].envelope_radius();
            let rb = entities[j].envelope_radius();
            let delta = entities[j].position - entities[i].position;
            let distance = delta.length();
            let min_distance = ra + rb;

            if distance >= min_distance {
                continue;
            }

            // Coincident centers have no separation axis, fall back to +X
            let normal = if distance > params.epsilon {
                delta / distance
            } else {
                Vec2::X
            };
            let push = normal * ((min_distance - distance) * params.push_fraction * 0.5);

            entities[i].position = bounds.clamp_position(entities[i].position - push, ra);
            entities[j].position = bounds.clamp_position(entities[j].position + push, rb);
            corrected += 1;
        }
    }

    corrected
}

/// Repeat the resolver until nothing moves or the pass budget runs out.
/// Returns the number of passes that corrected at least one pair.
pub fn pre_separate(
    entities: &mut [Entity],
    params: &OverlapParams,
    bounds: Bounds,
    max_passes: usize,
) -> usize {
    let mut passes = 0;
    for _ in 0..max_passes {
        if resolve_overlaps(entities, params, bounds) == 0 {
            break;
        }
        passes += 1;
    }
    passes
}

/// Smallest `distance - (ra + rb)` over all active pairs, `None` with fewer than two
pub fn min_clearance(entities: &[Entity]) -> Option<f32> {
    let mut clearance: Option<f32> = None;
    for (i, a) in entities.iter().enumerate().filter(|(_, e)| e.is_active()) {
        for b in entities[i + 1..].iter().filter(|e| e.is_active()) {
            let gap = a.position.distance(b.position) - (a.envelope_radius() + b.envelope_radius());
            clearance = Some(clearance.map_or(gap, |c| c.min(gap)));
        }
    }
    clearance
}
