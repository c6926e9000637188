use serde::{Deserialize, Serialize};

/// How the temperature-corrected base pressures of each layer are chained
/// from the sea level pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureChain {
    /// The fixed five-formula reference table. Layer 2 is built from layer 0
    /// and layer 4 from layer 2, using the uncorrected base temperatures, and
    /// out of range altitudes clamp with the reference boundary formulas.
    #[default]
    Reference,
    /// Each layer chained from the one directly below it with the corrected
    /// base temperatures. Pressure is continuous and strictly decreasing for
    /// any temperature offset, and clamping evaluates the nearest boundary.
    Hydrostatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    /// Offset from standard temperature, K (same as °C for a delta).
    pub temperature_offset: f64,
    pub pressure_chain: PressureChain,
}

impl AtmosphereConfig {
    pub fn new(temperature_offset: f64) -> Self {
        AtmosphereConfig {
            temperature_offset,
            ..Default::default()
        }
    }

    pub fn with_temperature_offset(mut self, temperature_offset: f64) -> Self {
        self.temperature_offset = temperature_offset;
        self
    }

    pub fn with_pressure_chain(mut self, pressure_chain: PressureChain) -> Self {
        self.pressure_chain = pressure_chain;
        self
    }
}
