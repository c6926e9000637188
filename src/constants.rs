// Physical Constants
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s²
pub const GAS_CONSTANT_AIR: f64 = 287.053; // J/(kg·K)
pub const HEAT_CAPACITY_RATIO: f64 = 1.4;
pub const SEA_LEVEL_VISCOSITY: f64 = 1.7894e-5; // kg/(m·s)
pub const SUTHERLAND_TEMPERATURE: f64 = 110.0; // K

// Model Range
pub const MIN_ALTITUDE: f64 = 0.0; // m
pub const MAX_ALTITUDE: f64 = 50_000.0; // m
pub const LAYER_COUNT: usize = 5;
pub const MAX_PROFILE_POINTS: usize = 100_000;

// Standard Atmosphere Tables, co-indexed by layer
pub const LAYER_BASE_ALTITUDE: [f64; LAYER_COUNT] =
    [0.0, 11_000.0, 20_000.0, 32_000.0, 47_000.0]; // m
pub const LAYER_TOP_ALTITUDE: [f64; LAYER_COUNT] =
    [11_000.0, 20_000.0, 32_000.0, 47_000.0, 50_000.0]; // m
pub const LAYER_LAPSE_RATE: [f64; LAYER_COUNT] = [-0.0065, 0.0, 0.001, 0.0028, 0.0]; // K/m
pub const LAYER_BASE_TEMPERATURE: [f64; LAYER_COUNT] =
    [288.15, 216.65, 216.65, 228.65, 270.65]; // K
pub const LAYER_BASE_PRESSURE: [f64; LAYER_COUNT] =
    [101_325.0, 22_632.0, 5_474.87, 868.014, 110.906]; // Pa

// Sea Level Reference
pub const SEA_LEVEL_TEMPERATURE: f64 = LAYER_BASE_TEMPERATURE[0]; // K
pub const SEA_LEVEL_PRESSURE: f64 = LAYER_BASE_PRESSURE[0]; // Pa
pub const SEA_LEVEL_DENSITY: f64 =
    SEA_LEVEL_PRESSURE / (GAS_CONSTANT_AIR * SEA_LEVEL_TEMPERATURE); // kg/m³

// Display
pub const KELVIN_OFFSET: f64 = 273.15;
