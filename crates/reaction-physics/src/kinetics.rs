//! Temperature-dependent kinetics
//!
//! Motion speed follows thermal agitation, `sqrt(T / T_ref)`, and the
//! per-encounter reaction probability follows an Arrhenius law,
//! `A * exp(-Ea / (R * T))`. Below the cold threshold both are damped, more
//! so in trap mode, which models a nearly frozen reaction.

use crate::constants::*;

/// Tunable kinetics parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KineticsParams {
    pub gas_constant: f32,
    pub activation_energy: f32,
    pub pre_exponential_factor: f32,
    pub probability_ceiling: f32,
    pub reference_temperature_c: f32,
    pub speed_floor: f32,
    pub speed_ceiling: f32,
    pub cold_threshold_c: f32,
    pub cold_probability_factor: f32,
    pub trap_probability_factor: f32,
    pub cold_speed_factor: f32,
    pub trap_speed_factor: f32,
    pub min_temperature_c: f32,
    pub max_temperature_c: f32,
}

impl Default for KineticsParams {
    fn default() -> Self {
        Self {
            gas_constant: GAS_CONSTANT,
            activation_energy: ACTIVATION_ENERGY,
            pre_exponential_factor: PRE_EXPONENTIAL_FACTOR,
            probability_ceiling: PROBABILITY_CEILING,
            reference_temperature_c: REFERENCE_TEMPERATURE_C,
            speed_floor: SPEED_FLOOR,
            speed_ceiling: SPEED_CEILING,
            cold_threshold_c: COLD_THRESHOLD_C,
            cold_probability_factor: COLD_PROBABILITY_FACTOR,
            trap_probability_factor: TRAP_PROBABILITY_FACTOR,
            cold_speed_factor: COLD_SPEED_FACTOR,
            trap_speed_factor: TRAP_SPEED_FACTOR,
            min_temperature_c: MIN_TEMPERATURE_C,
            max_temperature_c: MAX_TEMPERATURE_C,
        }
    }
}

/// Speed multiplier and reaction probability for one tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinetics {
    pub speed: f32,
    pub reaction_probability: f32,
}

impl KineticsParams {
    /// Clamp a temperature into the supported range; non-finite input falls
    /// back to the reference temperature
    pub fn sanitize_temperature(&self, temperature_c: f32) -> f32 {
        if temperature_c.is_finite() {
            temperature_c.clamp(self.min_temperature_c, self.max_temperature_c)
        } else {
            self.reference_temperature_c
        }
    }

    /// Compute the kinetics for a temperature in Celsius
    pub fn evaluate(&self, temperature_c: f32, trap_mode: bool) -> Kinetics {
        let tc = self.sanitize_temperature(temperature_c);
        let tk = (tc + KELVIN_OFFSET).max(f32::MIN_POSITIVE);
        let tref = (self.reference_temperature_c + KELVIN_OFFSET).max(f32::MIN_POSITIVE);

        let mut speed = (tk / tref).sqrt().clamp(self.speed_floor, self.speed_ceiling);
        let mut probability =
            self.pre_exponential_factor * (-self.activation_energy / (self.gas_constant * tk)).exp();

        if tc < self.cold_threshold_c {
            if trap_mode {
                probability *= self.trap_probability_factor;
                speed *= self.trap_speed_factor;
            } else {
                probability *= self.cold_probability_factor;
                speed *= self.cold_speed_factor;
            }
        }

        Kinetics {
            speed,
            reaction_probability: probability.clamp(0.0, self.probability_ceiling),
        }
    }
}

/// Kinetics with the default parameters
pub fn kinetic_params(temperature_c: f32, trap_mode: bool) -> Kinetics {
    KineticsParams::default().evaluate(temperature_c, trap_mode)
}
