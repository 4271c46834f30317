//! Constants for the H2 + Cl2 reaction model
//!
//! Geometry is in screen pixels, kinetics values are scaled so the effect of
//! temperature stays visible at classroom frame rates.

/// Hydrogen atom radius (px)
pub const HYDROGEN_RADIUS: f32 = 6.0;

/// Chlorine atom radius (px)
pub const CHLORINE_RADIUS: f32 = 10.0;

/// Extra padding added to the two atom radii of a diatomic envelope
pub const ENVELOPE_PADDING: f32 = 2.0;

/// Ideal gas constant, J/(mol·K)
pub const GAS_CONSTANT: f32 = 8.314;

/// Activation energy, J/mol (chosen for a visible temperature sensitivity)
pub const ACTIVATION_ENERGY: f32 = 9000.0;

/// Pre-exponential factor (max probability per encounter before the ceiling)
pub const PRE_EXPONENTIAL_FACTOR: f32 = 0.30;

/// Hard cap on the per-encounter reaction probability
pub const PROBABILITY_CEILING: f32 = 0.20;

/// Offset between Celsius and Kelvin
pub const KELVIN_OFFSET: f32 = 273.15;

/// Temperature at which motion speed is exactly 1.0
pub const REFERENCE_TEMPERATURE_C: f32 = 50.0;

/// Speed clamp, keeps motion readable at the ends of the slider
pub const SPEED_FLOOR: f32 = 0.45;
pub const SPEED_CEILING: f32 = 2.0;

/// Below this temperature the reaction is nearly frozen
pub const COLD_THRESHOLD_C: f32 = 25.0;

/// Probability dampening below the cold threshold
pub const COLD_PROBABILITY_FACTOR: f32 = 0.10;
pub const TRAP_PROBABILITY_FACTOR: f32 = 0.02;

/// Speed dampening below the cold threshold
pub const COLD_SPEED_FACTOR: f32 = 0.75;
pub const TRAP_SPEED_FACTOR: f32 = 0.55;

/// Supported temperature range of the slider (°C)
pub const MIN_TEMPERATURE_C: f32 = -20.0;
pub const MAX_TEMPERATURE_C: f32 = 100.0;

/// Contact distance multiplier: encounters count from near-contact, not only overlap
pub const CONTACT_MULTIPLIER: f32 = 1.15;

/// Fraction of the overlap removed per resolver pass (split between both entities)
pub const OVERLAP_PUSH_FRACTION: f32 = 0.5;

/// Below this center distance the separation direction is undefined
pub const OVERLAP_EPSILON: f32 = 1.0e-4;

/// Resolver passes run once after random placement
pub const PRESEPARATION_ITERATIONS: usize = 240;

/// Spawned entities keep this distance from the walls (px)
pub const SPAWN_MARGIN: f32 = 60.0;

/// Products appear within this distance of the reacting pair's midpoint (px)
pub const PRODUCT_JITTER: f32 = 10.0;

/// Initial velocity components are drawn from [-MAX_INITIAL_VELOCITY, MAX_INITIAL_VELOCITY)
pub const MAX_INITIAL_VELOCITY: f32 = 1.0;

/// Default simulation domain (px)
pub const DOMAIN_WIDTH: f32 = 640.0;
pub const DOMAIN_HEIGHT: f32 = 400.0;
