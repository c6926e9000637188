use crate::constants::{
    GAS_CONSTANT_AIR, LAYER_BASE_ALTITUDE, LAYER_BASE_PRESSURE, LAYER_BASE_TEMPERATURE,
    LAYER_COUNT, LAYER_LAPSE_RATE, LAYER_TOP_ALTITUDE, STANDARD_GRAVITY,
};
use crate::model::config::PressureChain;

/// Pressure ratio across a layer with a non-zero lapse rate.
pub fn polytropic_ratio(temperature_ratio: f64, lapse_rate: f64) -> f64 {
    temperature_ratio.powf(-STANDARD_GRAVITY / (lapse_rate * GAS_CONSTANT_AIR))
}

/// Pressure ratio across `thickness` meters of an isothermal layer.
pub fn isothermal_ratio(thickness: f64, temperature: f64) -> f64 {
    (-STANDARD_GRAVITY * thickness / (GAS_CONSTANT_AIR * temperature)).exp()
}

pub fn is_isothermal(layer: usize) -> bool {
    LAYER_LAPSE_RATE[layer] == 0.0
}

/// Lowest layer whose top is at or above `altitude`. Altitudes past the
/// ceiling land in the topmost layer.
pub fn altitude_layer(altitude: f64) -> usize {
    let mut layer = 0;
    while layer < LAYER_COUNT - 1 && altitude - LAYER_TOP_ALTITUDE[layer] > 0.0 {
        layer += 1;
    }
    layer
}

/// Standard atmosphere layer containing `pressure`, using the uncorrected
/// base pressure table.
pub fn pressure_layer(pressure: f64) -> usize {
    let mut layer = 0;
    while layer < LAYER_COUNT - 1 && pressure - LAYER_BASE_PRESSURE[layer + 1] < 0.0 {
        layer += 1;
    }
    layer
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePressures {
    pub troposphere: f64,
    pub tropopause: f64,
    pub lower_stratosphere: f64,
    pub upper_stratosphere: f64,
    pub stratopause: f64,
}

impl BasePressures {
    /// The fixed reference chain. Uses the uncorrected base temperatures, so
    /// it does not depend on the temperature offset.
    pub fn reference() -> Self {
        let hb = LAYER_BASE_ALTITUDE;
        let tb = LAYER_BASE_TEMPERATURE;
        let a = LAYER_LAPSE_RATE;

        let troposphere = LAYER_BASE_PRESSURE[0];
        let tropopause = LAYER_BASE_PRESSURE[0] * polytropic_ratio(tb[1] / tb[0], a[0]);
        let lower_stratosphere = troposphere * isothermal_ratio(hb[2] - hb[1], tb[1]);
        let upper_stratosphere = tropopause * polytropic_ratio(tb[3] / tb[2], a[2]);
        let stratopause = lower_stratosphere * polytropic_ratio(tb[4] / tb[3], a[3]);

        BasePressures {
            troposphere,
            tropopause,
            lower_stratosphere,
            upper_stratosphere,
            stratopause,
        }
    }

    /// Each layer chained from the one directly below, with the corrected
    /// base temperatures `tb`.
    pub fn hydrostatic(tb: &[f64; LAYER_COUNT]) -> Self {
        let hb = LAYER_BASE_ALTITUDE;
        let a = LAYER_LAPSE_RATE;

        let troposphere = LAYER_BASE_PRESSURE[0];
        let tropopause = troposphere * polytropic_ratio(tb[1] / tb[0], a[0]);
        let lower_stratosphere = tropopause * isothermal_ratio(hb[2] - hb[1], tb[1]);
        let upper_stratosphere = lower_stratosphere * polytropic_ratio(tb[3] / tb[2], a[2]);
        let stratopause = upper_stratosphere * polytropic_ratio(tb[4] / tb[3], a[3]);

        BasePressures {
            troposphere,
            tropopause,
            lower_stratosphere,
            upper_stratosphere,
            stratopause,
        }
    }

    pub fn layer(&self, layer: usize) -> f64 {
        match layer {
            0 => self.troposphere,
            1 => self.tropopause,
            2 => self.lower_stratosphere,
            3 => self.upper_stratosphere,
            _ => self.stratopause,
        }
    }

    pub fn to_array(&self) -> [f64; LAYER_COUNT] {
        [
            self.troposphere,
            self.tropopause,
            self.lower_stratosphere,
            self.upper_stratosphere,
            self.stratopause,
        ]
    }
}

/// Base temperatures and pressures corrected for a temperature offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseTables {
    pub temperatures: [f64; LAYER_COUNT],
    pub pressures: BasePressures,
}

impl BaseTables {
    // Offsets that push any base temperature to or below 0 K are outside the
    // model. Nothing is validated here and the results may be NaN.
    pub fn new(temperature_offset: f64, chain: PressureChain) -> Self {
        let temperatures = LAYER_BASE_TEMPERATURE.map(|t| t + temperature_offset);
        let pressures = match chain {
            PressureChain::Reference => BasePressures::reference(),
            PressureChain::Hydrostatic => BasePressures::hydrostatic(&temperatures),
        };

        BaseTables {
            temperatures,
            pressures,
        }
    }

    pub fn temperature(&self, layer: usize) -> f64 {
        self.temperatures[layer]
    }

    pub fn pressure(&self, layer: usize) -> f64 {
        self.pressures.layer(layer)
    }
}
