//! Frame-driven reaction simulation
//!
//! One tick runs, in order: motion for live reactants and all products,
//! overlap correction on reactants then on products, reactive encounters on
//! reactants. Reacted molecules stay in `reactants` flagged as consumed so
//! pair indices remain stable within a tick.

use crate::{RenderSnapshot, SimulationParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reaction_physics::{
    integrate, pre_separate, resolve_encounters, resolve_overlaps, Entity, EntityInstance,
    Species,
};

/// Reactant counts a run started with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitialCounts {
    pub reactant_a: u32,
    pub reactant_b: u32,
}

/// Live molecule counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpeciesCounts {
    pub reactant_a: u32,
    pub reactant_b: u32,
    pub products: u32,
}

/// Complete state of one run
#[derive(Clone, Debug)]
pub struct SimulationState {
    reactants: Vec<Entity>,
    products: Vec<Entity>,
    reaction_count: u32,
    initial_counts: InitialCounts,
    tick_count: u64,
}

impl SimulationState {
    /// Fresh run: random placement, then pre-separation of the spawn
    pub fn initialize<R: Rng + ?Sized>(
        reactant_a: u32,
        reactant_b: u32,
        params: &SimulationParams,
        rng: &mut R,
    ) -> Self {
        let reactant_a = clamp_count(reactant_a, params.max_reactants, "H2");
        let reactant_b = clamp_count(reactant_b, params.max_reactants, "Cl2");
        if reactant_b <= reactant_a {
            log::debug!(
                "Cl2 is not in excess ({} H2, {} Cl2), continuing anyway",
                reactant_a,
                reactant_b
            );
        }

        let mut reactants = Vec::with_capacity((reactant_a + reactant_b) as usize);
        for _ in 0..reactant_a {
            reactants.push(Entity::spawn(Species::ReactantA, params.bounds, rng));
        }
        for _ in 0..reactant_b {
            reactants.push(Entity::spawn(Species::ReactantB, params.bounds, rng));
        }

        let passes = pre_separate(
            &mut reactants,
            &params.overlap,
            params.bounds,
            params.preseparation_iterations,
        );

        log::info!(
            "Initialized {} H2 and {} Cl2 ({} separation passes)",
            reactant_a,
            reactant_b,
            passes
        );

        Self {
            reactants,
            products: Vec::with_capacity((2 * reactant_a.min(reactant_b)) as usize),
            reaction_count: 0,
            initial_counts: InitialCounts {
                reactant_a,
                reactant_b,
            },
            tick_count: 0,
        }
    }

    /// Build a state from explicit molecules, e.g. a hand-placed scene
    pub fn from_entities(reactants: Vec<Entity>) -> Self {
        let reactants: Vec<Entity> = reactants
            .into_iter()
            .filter(|e| e.species.is_reactant())
            .map(|e| Entity { consumed: false, ..e })
            .collect();
        let count = |species: Species| reactants.iter().filter(|e| e.species == species).count() as u32;
        let initial_counts = InitialCounts {
            reactant_a: count(Species::ReactantA),
            reactant_b: count(Species::ReactantB),
        };

        Self {
            reactants,
            products: Vec::new(),
            reaction_count: 0,
            initial_counts,
            tick_count: 0,
        }
    }

    /// Advance one frame
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        temperature_c: f32,
        trap_mode: bool,
        params: &SimulationParams,
        rng: &mut R,
    ) -> RenderSnapshot {
        let kinetics = params.kinetics.evaluate(temperature_c, trap_mode);

        integrate(&mut self.reactants, kinetics.speed, params.bounds);
        integrate(&mut self.products, kinetics.speed, params.bounds);

        resolve_overlaps(&mut self.reactants, &params.overlap, params.bounds);
        resolve_overlaps(&mut self.products, &params.overlap, params.bounds);

        let report = resolve_encounters(
            &mut self.reactants,
            &mut self.products,
            kinetics.reaction_probability,
            &params.encounter,
            params.bounds,
            rng,
        );

        self.tick_count += 1;
        if report.reactions > 0 {
            self.reaction_count += report.reactions;
            log::debug!(
                "tick {}: {} reaction(s), {} total, p = {:.5}",
                self.tick_count,
                report.reactions,
                self.reaction_count,
                kinetics.reaction_probability
            );
        }

        RenderSnapshot {
            instances: self.instances(),
            kinetics,
            reaction_count: self.reaction_count,
            tick: self.tick_count,
        }
    }

    /// Drawable molecules: live reactants, then products
    pub fn instances(&self) -> Vec<EntityInstance> {
        self.reactants
            .iter()
            .chain(self.products.iter())
            .filter(|e| e.is_active())
            .map(Entity::instance)
            .collect()
    }

    pub fn counts(&self) -> SpeciesCounts {
        let live = |species: Species| {
            self.reactants
                .iter()
                .filter(|e| e.species == species && e.is_active())
                .count() as u32
        };
        SpeciesCounts {
            reactant_a: live(Species::ReactantA),
            reactant_b: live(Species::ReactantB),
            products: self.products.len() as u32,
        }
    }

    /// Reactants of `species` that have reacted so far
    pub fn consumed(&self, species: Species) -> u32 {
        self.reactants
            .iter()
            .filter(|e| e.species == species && e.consumed)
            .count() as u32
    }

    pub fn reactants(&self) -> &[Entity] {
        &self.reactants
    }

    pub fn products(&self) -> &[Entity] {
        &self.products
    }

    pub fn reaction_count(&self) -> u32 {
        self.reaction_count
    }

    pub fn initial_counts(&self) -> InitialCounts {
        self.initial_counts
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

fn clamp_count(count: u32, max: u32, label: &str) -> u32 {
    if count > max {
        log::warn!("{} count {} exceeds the limit, using {}", label, count, max);
        max
    } else {
        count
    }
}

/// Owns parameters, random source and the current run
pub struct ReactionSimulation<R: Rng = StdRng> {
    params: SimulationParams,
    rng: R,
    state: SimulationState,
}

impl ReactionSimulation<StdRng> {
    /// New simulation seeded from the thread RNG
    pub fn new(params: SimulationParams, reactant_a: u32, reactant_b: u32) -> Self {
        Self::with_seed(params, reactant_a, reactant_b, rand::rng().random())
    }

    /// Reproducible simulation
    pub fn with_seed(params: SimulationParams, reactant_a: u32, reactant_b: u32, seed: u64) -> Self {
        Self::with_rng(params, reactant_a, reactant_b, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ReactionSimulation<R> {
    pub fn with_rng(params: SimulationParams, reactant_a: u32, reactant_b: u32, mut rng: R) -> Self {
        let state = SimulationState::initialize(reactant_a, reactant_b, &params, &mut rng);
        Self { params, rng, state }
    }

    /// Replace the whole run; nothing from the previous state survives
    pub fn restart(&mut self, reactant_a: u32, reactant_b: u32) {
        self.state = SimulationState::initialize(reactant_a, reactant_b, &self.params, &mut self.rng);
    }

    pub fn tick(&mut self, temperature_c: f32, trap_mode: bool) -> RenderSnapshot {
        self.state
            .tick(temperature_c, trap_mode, &self.params, &mut self.rng)
    }

    pub fn counts(&self) -> SpeciesCounts {
        self.state.counts()
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }
}
