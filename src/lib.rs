pub mod constants;
pub mod errors;
pub mod model;
pub mod report_system;
pub mod utils;

pub use constants::*;
pub use errors::AtmosphereError;
pub use model::atmosphere::{
    evaluate, evaluate_many, pressure_altitude, AtmosphereModel, AtmosphereState, Domain,
};
pub use model::config::{AtmosphereConfig, PressureChain};
pub use model::profile::Profile;

// Re-export commonly used items from report_system
pub use report_system::report::Report;
