use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AtmosphereError {
    #[error("Altitude {altitude} m is outside the model range [{min}, {max}] m")]
    AltitudeOutOfRange { altitude: f64, min: f64, max: f64 },

    #[error("Non-finite input: {name} = {value}")]
    NonFiniteInput { name: &'static str, value: f64 },

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}
