use log::{trace, warn};
use serde::Serialize;

use crate::constants::{
    GAS_CONSTANT_AIR, HEAT_CAPACITY_RATIO, LAYER_BASE_ALTITUDE, LAYER_BASE_PRESSURE,
    LAYER_BASE_TEMPERATURE, LAYER_COUNT, LAYER_LAPSE_RATE, LAYER_TOP_ALTITUDE, MAX_ALTITUDE,
    MIN_ALTITUDE, SEA_LEVEL_DENSITY, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE,
    SEA_LEVEL_VISCOSITY, STANDARD_GRAVITY, SUTHERLAND_TEMPERATURE,
};
use crate::errors::AtmosphereError;
use crate::model::config::{AtmosphereConfig, PressureChain};
use crate::model::layers::{
    altitude_layer, is_isothermal, isothermal_ratio, polytropic_ratio, pressure_layer, BaseTables,
};
use crate::utils::units::kelvin_to_celsius;

/// Where the requested altitude fell relative to the model range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Valid,
    BelowSeaLevel,
    AboveCeiling,
    /// NaN altitude or non-finite temperature offset; every output is
    /// meaningless.
    NonFinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtmosphereState {
    pub temperature: f64,       // K
    pub pressure: f64,          // Pa
    pub density: f64,           // kg/m³
    pub speed_of_sound: f64,    // m/s
    pub viscosity: f64,         // kg/(m·s)
    pub pressure_altitude: f64, // m
    pub domain: Domain,
}

impl AtmosphereState {
    /// Fills in density, speed of sound and viscosity from temperature and
    /// pressure.
    fn from_temperature_pressure(
        temperature: f64,
        pressure: f64,
        pressure_altitude: f64,
        domain: Domain,
    ) -> Self {
        AtmosphereState {
            temperature,
            pressure,
            density: pressure / (GAS_CONSTANT_AIR * temperature),
            speed_of_sound: (HEAT_CAPACITY_RATIO * GAS_CONSTANT_AIR * temperature).sqrt(),
            viscosity: sutherland_viscosity(temperature),
            pressure_altitude,
            domain,
        }
    }

    pub fn was_clamped(&self) -> bool {
        matches!(self.domain, Domain::BelowSeaLevel | Domain::AboveCeiling)
    }

    pub fn temperature_celsius(&self) -> f64 {
        kelvin_to_celsius(self.temperature)
    }

    pub fn temperature_ratio(&self) -> f64 {
        self.temperature / SEA_LEVEL_TEMPERATURE
    }

    pub fn pressure_ratio(&self) -> f64 {
        self.pressure / SEA_LEVEL_PRESSURE
    }

    pub fn density_ratio(&self) -> f64 {
        self.density / SEA_LEVEL_DENSITY
    }

    pub fn kinematic_viscosity(&self) -> f64 {
        self.viscosity / self.density
    }
}

pub fn sutherland_viscosity(temperature: f64) -> f64 {
    SEA_LEVEL_VISCOSITY
        * (temperature / SEA_LEVEL_TEMPERATURE)
        * ((SEA_LEVEL_TEMPERATURE + SUTHERLAND_TEMPERATURE)
            / (temperature + SUTHERLAND_TEMPERATURE))
}

/// Altitude at which the standard atmosphere has `pressure`, regardless of
/// the actual temperature.
pub fn pressure_altitude(pressure: f64) -> f64 {
    let layer = pressure_layer(pressure);
    let base_altitude = LAYER_BASE_ALTITUDE[layer];
    let base_temperature = LAYER_BASE_TEMPERATURE[layer];
    let base_pressure = LAYER_BASE_PRESSURE[layer];
    let lapse_rate = LAYER_LAPSE_RATE[layer];

    if is_isothermal(layer) {
        base_altitude
            - (GAS_CONSTANT_AIR * base_temperature / STANDARD_GRAVITY)
                * (pressure / base_pressure).ln()
    } else {
        let exponent = -lapse_rate * GAS_CONSTANT_AIR / STANDARD_GRAVITY;
        base_altitude
            + (base_temperature / lapse_rate) * ((pressure / base_pressure).powf(exponent) - 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereModel {
    config: AtmosphereConfig,
    tables: BaseTables,
}

impl AtmosphereModel {
    pub fn new(config: AtmosphereConfig) -> Self {
        AtmosphereModel {
            tables: BaseTables::new(config.temperature_offset, config.pressure_chain),
            config,
        }
    }

    pub fn standard() -> Self {
        Self::new(AtmosphereConfig::default())
    }

    pub fn config(&self) -> &AtmosphereConfig {
        &self.config
    }

    pub fn tables(&self) -> &BaseTables {
        &self.tables
    }

    /// Evaluates the atmosphere at a geopotential altitude. Altitudes outside
    /// the model range are clamped, logged and flagged in `domain`. NaN
    /// altitudes and non-finite offsets are logged and flagged but not
    /// rejected; use `try_at_altitude` for that.
    pub fn at_altitude(&self, altitude: f64) -> AtmosphereState {
        let temperature_offset = self.config.temperature_offset;
        if altitude.is_nan() || !temperature_offset.is_finite() {
            warn!(
                "Non-finite input (H = {} m, DT = {} K), ISA results are undefined",
                altitude, temperature_offset
            );
            self.within_range(altitude, Domain::NonFinite)
        } else if altitude < MIN_ALTITUDE {
            warn!(
                "Altitude {} m is below sea level, ISA model not valid; using results for H = {} m",
                altitude, MIN_ALTITUDE
            );
            self.below_sea_level()
        } else if altitude > MAX_ALTITUDE {
            warn!(
                "Altitude {} m is above {} m, ISA model not valid; using results for H = {} m",
                altitude, MAX_ALTITUDE, MAX_ALTITUDE
            );
            self.above_ceiling()
        } else {
            self.within_range(altitude, Domain::Valid)
        }
    }

    /// Like `at_altitude`, but rejects non-finite or out of range altitudes
    /// instead of clamping them.
    pub fn try_at_altitude(&self, altitude: f64) -> Result<AtmosphereState, AtmosphereError> {
        if !altitude.is_finite() {
            return Err(AtmosphereError::NonFiniteInput {
                name: "altitude",
                value: altitude,
            });
        }
        if !self.config.temperature_offset.is_finite() {
            return Err(AtmosphereError::NonFiniteInput {
                name: "temperature_offset",
                value: self.config.temperature_offset,
            });
        }
        if !(MIN_ALTITUDE..=MAX_ALTITUDE).contains(&altitude) {
            return Err(AtmosphereError::AltitudeOutOfRange {
                altitude,
                min: MIN_ALTITUDE,
                max: MAX_ALTITUDE,
            });
        }

        Ok(self.within_range(altitude, Domain::Valid))
    }

    fn below_sea_level(&self) -> AtmosphereState {
        match self.config.pressure_chain {
            PressureChain::Reference => AtmosphereState::from_temperature_pressure(
                SEA_LEVEL_TEMPERATURE,
                SEA_LEVEL_PRESSURE,
                0.0,
                Domain::BelowSeaLevel,
            ),
            PressureChain::Hydrostatic => self.within_range(MIN_ALTITUDE, Domain::BelowSeaLevel),
        }
    }

    fn above_ceiling(&self) -> AtmosphereState {
        match self.config.pressure_chain {
            PressureChain::Reference => {
                let top = LAYER_COUNT - 1;
                let temperature = LAYER_BASE_TEMPERATURE[top];
                // Extrapolated from the upper stratosphere base pressure.
                let base_pressure = self.tables.pressure(top - 1);
                let pressure = base_pressure
                    * isothermal_ratio(
                        LAYER_TOP_ALTITUDE[top] - LAYER_BASE_ALTITUDE[top],
                        temperature,
                    );
                let pressure_altitude = LAYER_BASE_ALTITUDE[top]
                    - (GAS_CONSTANT_AIR * temperature / STANDARD_GRAVITY)
                        * (pressure / base_pressure).ln();

                AtmosphereState::from_temperature_pressure(
                    temperature,
                    pressure,
                    pressure_altitude,
                    Domain::AboveCeiling,
                )
            }
            PressureChain::Hydrostatic => self.within_range(MAX_ALTITUDE, Domain::AboveCeiling),
        }
    }

    fn within_range(&self, altitude: f64, domain: Domain) -> AtmosphereState {
        let layer = altitude_layer(altitude);
        let base_temperature = self.tables.temperature(layer);
        let base_pressure = self.tables.pressure(layer);
        let height = altitude - LAYER_BASE_ALTITUDE[layer];
        let lapse_rate = LAYER_LAPSE_RATE[layer];

        let temperature = base_temperature + lapse_rate * height;
        let pressure = if is_isothermal(layer) {
            base_pressure * isothermal_ratio(height, base_temperature)
        } else {
            base_pressure * polytropic_ratio(temperature / base_temperature, lapse_rate)
        };
        trace!(
            "H = {} m in layer {}: T = {} K, p = {} Pa",
            altitude,
            layer,
            temperature,
            pressure
        );

        AtmosphereState::from_temperature_pressure(
            temperature,
            pressure,
            pressure_altitude(pressure),
            domain,
        )
    }
}

impl Default for AtmosphereModel {
    fn default() -> Self {
        Self::standard()
    }
}

/// ISA properties at `altitude` (m, geopotential) for a temperature offset
/// `temperature_offset` (K) from standard conditions.
pub fn evaluate(altitude: f64, temperature_offset: f64) -> AtmosphereState {
    AtmosphereModel::new(AtmosphereConfig::new(temperature_offset)).at_altitude(altitude)
}

pub fn evaluate_many(altitudes: &[f64], temperature_offset: f64) -> Vec<AtmosphereState> {
    let model = AtmosphereModel::new(AtmosphereConfig::new(temperature_offset));
    altitudes
        .iter()
        .map(|&altitude| model.at_altitude(altitude))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn hydrostatic(temperature_offset: f64) -> AtmosphereModel {
        AtmosphereModel::new(
            AtmosphereConfig::new(temperature_offset)
                .with_pressure_chain(PressureChain::Hydrostatic),
        )
    }

    #[test]
    fn test_sea_level_standard() {
        let state = evaluate(0.0, 0.0);

        assert_eq!(state.temperature, 288.15);
        assert_eq!(state.pressure, 101_325.0);
        assert_abs_diff_eq!(state.density, 1.225, epsilon = 1e-3);
        assert_abs_diff_eq!(state.speed_of_sound, 340.294, epsilon = 1e-3);
        assert_eq!(state.viscosity, SEA_LEVEL_VISCOSITY);
        assert_eq!(state.pressure_altitude, 0.0);
        assert_eq!(state.domain, Domain::Valid);
    }

    #[test]
    fn test_below_sea_level_clamps() {
        let state = evaluate(-100.0, 0.0);

        assert_eq!(state.temperature, 288.15);
        assert_eq!(state.pressure, 101_325.0);
        assert_eq!(state.viscosity, SEA_LEVEL_VISCOSITY);
        assert_eq!(state.pressure_altitude, 0.0);
        assert_eq!(state.domain, Domain::BelowSeaLevel);
        assert!(state.was_clamped());
    }

    #[test]
    fn test_below_sea_level_ignores_offset_in_reference_chain() {
        let state = evaluate(-500.0, 15.0);
        assert_eq!(state.temperature, 288.15);
        assert_eq!(state.pressure, 101_325.0);
    }

    #[test]
    fn test_above_ceiling_clamps() {
        let state = evaluate(60_000.0, 0.0);

        assert_eq!(state.temperature, 270.65);
        assert_abs_diff_eq!(state.pressure, 2_457.079, epsilon = 1e-2);
        assert_abs_diff_eq!(state.pressure_altitude, 50_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(state.speed_of_sound, 329.799, epsilon = 1e-3);
        assert_relative_eq!(state.viscosity, 1.75800e-5, max_relative = 1e-4);
        assert_eq!(state.domain, Domain::AboveCeiling);
    }

    #[test]
    fn test_reference_example() {
        let state = evaluate(5_000.0, 5.0);

        assert_abs_diff_eq!(state.temperature, 260.65, epsilon = 1e-9);
        assert_abs_diff_eq!(state.temperature_celsius(), -12.5, epsilon = 1e-9);
        assert_abs_diff_eq!(state.pressure, 54_638.376, epsilon = 1e-2);
        assert_abs_diff_eq!(state.density, 0.730261, epsilon = 1e-5);
        assert_abs_diff_eq!(state.pressure_altitude, 4_914.719, epsilon = 1e-2);
        assert!(!state.was_clamped());
    }

    #[test]
    fn test_isothermal_layers_have_density_sound_and_viscosity() {
        for altitude in [15_000.0, 20_000.0, 48_000.0, 50_000.0] {
            let state = evaluate(altitude, 0.0);
            assert!(state.density.is_finite() && state.density > 0.0);
            assert!(state.speed_of_sound.is_finite() && state.speed_of_sound > 0.0);
            assert!(state.viscosity.is_finite() && state.viscosity > 0.0);
            assert_abs_diff_eq!(
                state.density,
                state.pressure / (GAS_CONSTANT_AIR * state.temperature),
                epsilon = 1e-12
            );
        }

        let tropopause = evaluate(15_000.0, 0.0);
        assert_abs_diff_eq!(tropopause.temperature, 216.65, epsilon = 1e-9);
        assert_abs_diff_eq!(tropopause.pressure, 12_044.564, epsilon = 1e-2);
        assert_abs_diff_eq!(tropopause.speed_of_sound, 295.070, epsilon = 1e-3);
    }

    #[test]
    fn test_result_returned_for_every_pressure_layer() {
        let model = hydrostatic(0.0);
        for (altitude, expected_layer) in [
            (5_000.0, 0),
            (15_000.0, 1),
            (25_000.0, 2),
            (40_000.0, 3),
            (48_000.0, 4),
        ] {
            let state = model.at_altitude(altitude);
            assert_eq!(pressure_layer(state.pressure), expected_layer);
            assert!(state.pressure_altitude.is_finite());
            assert_abs_diff_eq!(state.pressure_altitude, altitude, epsilon = 1.0);
        }
    }

    #[test]
    fn test_pressure_altitude_of_table_pressures() {
        for (layer, pressure) in LAYER_BASE_PRESSURE.iter().enumerate() {
            assert_abs_diff_eq!(
                pressure_altitude(*pressure),
                LAYER_BASE_ALTITUDE[layer],
                epsilon = 1.0
            );
        }
    }

    #[test]
    fn test_try_at_altitude_rejects_out_of_range() {
        let model = AtmosphereModel::standard();

        assert_eq!(
            model.try_at_altitude(-1.0),
            Err(AtmosphereError::AltitudeOutOfRange {
                altitude: -1.0,
                min: MIN_ALTITUDE,
                max: MAX_ALTITUDE,
            })
        );
        assert!(model.try_at_altitude(50_001.0).is_err());
        assert!(matches!(
            model.try_at_altitude(f64::NAN),
            Err(AtmosphereError::NonFiniteInput { name: "altitude", .. })
        ));
        assert_eq!(model.try_at_altitude(10_000.0), Ok(model.at_altitude(10_000.0)));
    }

    #[test]
    fn test_try_at_altitude_rejects_non_finite_offset() {
        let model = AtmosphereModel::new(AtmosphereConfig::new(f64::INFINITY));
        assert!(matches!(
            model.try_at_altitude(1_000.0),
            Err(AtmosphereError::NonFiniteInput {
                name: "temperature_offset",
                ..
            })
        ));
    }

    #[test]
    fn test_hydrostatic_clamps_to_boundary_values() {
        let model = hydrostatic(10.0);

        let below = model.at_altitude(-50.0);
        let surface = model.at_altitude(0.0);
        assert_eq!(below.temperature, surface.temperature);
        assert_eq!(below.pressure, surface.pressure);
        assert_eq!(below.domain, Domain::BelowSeaLevel);

        let above = model.at_altitude(75_000.0);
        let ceiling = model.at_altitude(50_000.0);
        assert_eq!(above.temperature, ceiling.temperature);
        assert_eq!(above.pressure, ceiling.pressure);
        assert_eq!(above.domain, Domain::AboveCeiling);
    }

    #[test]
    fn test_nan_altitude_is_flagged_not_valid() {
        let state = evaluate(f64::NAN, 0.0);

        assert!(state.temperature.is_nan());
        assert!(state.pressure.is_nan());
        assert_eq!(state.domain, Domain::NonFinite);
        assert!(!state.was_clamped());
    }

    #[test]
    fn test_non_finite_offset_is_flagged() {
        let state = evaluate(1_000.0, f64::NAN);
        assert_eq!(state.domain, Domain::NonFinite);

        let state = evaluate(1_000.0, f64::INFINITY);
        assert_eq!(state.domain, Domain::NonFinite);
    }

    #[test]
    fn test_infinite_altitudes_still_clamp() {
        assert_eq!(evaluate(f64::INFINITY, 0.0), evaluate(60_000.0, 0.0));
        assert_eq!(evaluate(f64::NEG_INFINITY, 0.0), evaluate(-100.0, 0.0));
    }

    #[test]
    fn test_derived_ratios_at_sea_level() {
        let state = evaluate(0.0, 0.0);
        assert_abs_diff_eq!(state.temperature_ratio(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.pressure_ratio(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.density_ratio(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(state.kinematic_viscosity(), 1.4607e-5, max_relative = 1e-3);
    }

    #[test]
    fn test_evaluate_many_preserves_order() {
        let altitudes = [0.0, 5_000.0, -10.0, 70_000.0];
        let states = evaluate_many(&altitudes, 5.0);

        assert_eq!(states.len(), altitudes.len());
        assert_eq!(states[1], evaluate(5_000.0, 5.0));
        assert_eq!(states[2].domain, Domain::BelowSeaLevel);
        assert_eq!(states[3].domain, Domain::AboveCeiling);
    }
}
