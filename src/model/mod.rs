pub mod atmosphere;
pub mod config;
pub mod layers;
pub mod profile;
