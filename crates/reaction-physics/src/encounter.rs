//! Reactive encounters between H2 and Cl2
//!
//! Only opposite reactant species are tested. A pair within contact distance
//! swaps velocities (a simplified elastic bounce) and reacts with the current
//! probability, turning into two HCl near the collision point.

use glam::Vec2;
use rand::Rng;

use crate::constants::{CONTACT_MULTIPLIER, PRODUCT_JITTER};
use crate::entity::{random_velocity, sample_span, Entity, Species};
use crate::motion::Bounds;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncounterParams {
    /// Contact distance is `(ra + rb) * contact_multiplier`, must be >= 1
    pub contact_multiplier: f32,
    /// Products spawn within this distance of the midpoint, per axis
    pub product_jitter: f32,
}

impl Default for EncounterParams {
    fn default() -> Self {
        Self {
            contact_multiplier: CONTACT_MULTIPLIER,
            product_jitter: PRODUCT_JITTER,
        }
    }
}

/// What happened during one encounter pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncounterReport {
    /// Reactive pairs found within contact distance (each one bounced)
    pub contacts: usize,
    /// Reactions fired; each appended two products
    pub reactions: u32,
}

/// Test every unordered pair of live reactants once.
///
/// An entity consumed during the pass is not evaluated again: when the outer
/// entity reacts the inner loop stops, and consumed partners are skipped.
pub fn resolve_encounters<R: Rng + ?Sized>(
    reactants: &mut [Entity],
    products: &mut Vec<Entity>,
    reaction_probability: f32,
    params: &EncounterParams,
    bounds: Bounds,
    rng: &mut R,
) -> EncounterReport {
    let mut report = EncounterReport::default();
    let multiplier = params.contact_multiplier.max(1.0);

    for i in 0..reactants.len() {
        if reactants[i].consumed {
            continue;
        }

        for j in (i + 1)..reactants.len() {
            let a = reactants[i];
            let b = reactants[j];
            if b.consumed || !a.species.reacts_with(b.species) {
                continue;
            }

            let threshold = (a.envelope_radius() + b.envelope_radius()) * multiplier;
            if a.position.distance_squared(b.position) > threshold * threshold {
                continue;
            }

            report.contacts += 1;
            reactants[i].velocity = b.velocity;
            reactants[j].velocity = a.velocity;

            if rng.random::<f32>() < reaction_probability {
                reactants[i].consumed = true;
                reactants[j].consumed = true;

                let midpoint = (a.position + b.position) * 0.5;
                for _ in 0..2 {
                    products.push(spawn_product(midpoint, params.product_jitter, bounds, rng));
                }
                report.reactions += 1;
                break;
            }
        }
    }

    report
}

/// New HCl near `center`, with a fresh random velocity
pub fn spawn_product<R: Rng + ?Sized>(center: Vec2, jitter: f32, bounds: Bounds, rng: &mut R) -> Entity {
    let jitter = jitter.max(0.0);
    let offset = Vec2::new(
        sample_span(rng, -jitter, jitter),
        sample_span(rng, -jitter, jitter),
    );
    let position = bounds.clamp_position(center + offset, Species::Product.envelope_radius());
    Entity::new(Species::Product, position, random_velocity(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pair(distance: f32) -> Vec<Entity> {
        vec![
            Entity::new(Species::ReactantA, Vec2::new(200.0, 200.0), Vec2::new(1.0, 0.0)),
            Entity::new(Species::ReactantB, Vec2::new(200.0 + distance, 200.0), Vec2::new(-0.5, 0.5)),
        ]
    }

    #[test]
    fn test_contact_bounces_without_reaction() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut reactants = pair(38.0);
        let mut products = Vec::new();
        let report = resolve_encounters(
            &mut reactants,
            &mut products,
            0.0,
            &EncounterParams::default(),
            Bounds::default(),
            &mut rng,
        );
        assert_eq!(report, EncounterReport { contacts: 1, reactions: 0 });
        assert_eq!(reactants[0].velocity, Vec2::new(-0.5, 0.5));
        assert_eq!(reactants[1].velocity, Vec2::new(1.0, 0.0));
        assert!(products.is_empty());
    }

    #[test]
    fn test_near_contact_counts() {
        // 36 * 1.15 = 41.4, beyond plain overlap but within contact
        let mut rng = StdRng::seed_from_u64(3);
        let mut reactants = pair(41.0);
        let mut products = Vec::new();
        let report = resolve_encounters(
            &mut reactants,
            &mut products,
            0.0,
            &EncounterParams::default(),
            Bounds::default(),
            &mut rng,
        );
        assert_eq!(report.contacts, 1);

        let mut far = pair(42.0);
        let report = resolve_encounters(
            &mut far,
            &mut products,
            1.0,
            &EncounterParams::default(),
            Bounds::default(),
            &mut rng,
        );
        assert_eq!(report, EncounterReport::default());
        assert_eq!(far[0].velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_certain_reaction_spawns_two_products() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut reactants = pair(30.0);
        let mut products = Vec::new();
        let report = resolve_encounters(
            &mut reactants,
            &mut products,
            1.0,
            &EncounterParams::default(),
            Bounds::default(),
            &mut rng,
        );
        assert_eq!(report.reactions, 1);
        assert!(reactants.iter().all(|e| e.consumed));
        assert_eq!(products.len(), 2);

        let midpoint = Vec2::new(215.0, 200.0);
        for p in &products {
            assert_eq!(p.species, Species::Product);
            assert!(!p.consumed);
            assert!((p.position - midpoint).abs().max_element() <= PRODUCT_JITTER);
            assert!(p.velocity.abs().max_element() <= 1.0);
        }
    }

    #[test]
    fn test_same_species_never_bounce() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut reactants = vec![
            Entity::new(Species::ReactantB, Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0)),
            Entity::new(Species::ReactantB, Vec2::new(110.0, 100.0), Vec2::new(0.0, 1.0)),
            Entity::new(Species::ReactantA, Vec2::new(300.0, 300.0), Vec2::new(1.0, 1.0)),
            Entity::new(Species::ReactantA, Vec2::new(301.0, 300.0), Vec2::new(-1.0, 1.0)),
        ];
        let before = reactants.clone();
        let mut products = Vec::new();
        let report = resolve_encounters(
            &mut reactants,
            &mut products,
            1.0,
            &EncounterParams::default(),
            Bounds::default(),
            &mut rng,
        );
        assert_eq!(report, EncounterReport::default());
        assert_eq!(reactants, before);
    }

    #[test]
    fn test_consumed_entity_reacts_once() {
        // One H2 touching two Cl2: with certain reaction only the first pair fires
        let mut rng = StdRng::seed_from_u64(9);
        let mut reactants = vec![
            Entity::new(Species::ReactantA, Vec2::new(200.0, 200.0), Vec2::ZERO),
            Entity::new(Species::ReactantB, Vec2::new(230.0, 200.0), Vec2::ZERO),
            Entity::new(Species::ReactantB, Vec2::new(170.0, 200.0), Vec2::ZERO),
        ];
        let mut products = Vec::new();
        let report = resolve_encounters(
            &mut reactants,
            &mut products,
            1.0,
            &EncounterParams::default(),
            Bounds::default(),
            &mut rng,
        );
        assert_eq!(report.reactions, 1);
        assert_eq!(products.len(), 2);
        assert!(reactants[0].consumed && reactants[1].consumed);
        assert!(!reactants[2].consumed);
    }

    #[test]
    fn test_consumed_reactants_skipped() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut reactants = pair(20.0);
        reactants[0].consumed = true;
        let mut products = Vec::new();
        let report = resolve_encounters(
            &mut reactants,
            &mut products,
            1.0,
            &EncounterParams::default(),
            Bounds::default(),
            &mut rng,
        );
        assert_eq!(report, EncounterReport::default());
        assert!(!reactants[1].consumed);
    }

    #[test]
    fn test_product_clamped_at_wall() {
        let mut rng = StdRng::seed_from_u64(4);
        let product = spawn_product(Vec2::new(0.0, 0.0), PRODUCT_JITTER, Bounds::default(), &mut rng);
        assert_eq!(product.position, Vec2::new(18.0, 18.0));
    }
}
