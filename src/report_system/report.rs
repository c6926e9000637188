use serde::Serialize;

use crate::model::atmosphere::{AtmosphereState, Domain};
use crate::model::config::AtmosphereConfig;
use crate::utils::units::pascals_to_hectopascals;

#[derive(Debug, Serialize)]
struct Entry {
    altitude: f64,
    #[serde(flatten)]
    state: AtmosphereState,
}

#[derive(Debug, Serialize)]
pub struct Report {
    config: AtmosphereConfig,
    entries: Vec<Entry>,
    #[serde(skip)]
    clamped: usize,
}

impl Report {
    pub fn new(config: AtmosphereConfig) -> Self {
        Report {
            config,
            entries: Vec::new(),
            clamped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clamped_count(&self) -> usize {
        self.clamped
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    fn format_domain(domain: Domain) -> &'static str {
        match domain {
            Domain::Valid => "",
            Domain::BelowSeaLevel => " (clamped to sea level)",
            Domain::AboveCeiling => " (clamped to ceiling)",
            Domain::NonFinite => " (non-finite input)",
        }
    }

    pub fn collect_data(&mut self, altitude: f64, state: AtmosphereState) {
        if state.was_clamped() {
            self.clamped += 1;
        }
        self.entries.push(Entry { altitude, state });
    }

    pub fn format_state(altitude: f64, state: &AtmosphereState) -> String {
        format!(
            "Altitude: {}{}\n\
                 Temperature: {:.2} °C ({:.2} K)\n\
                 Pressure: {:.2} Pa ({:.2} hPa)\n\
                 Density: {:.4} kg/m³\n\
                 Speed of Sound: {:.2} m/s\n\
                 Dynamic Viscosity: {:.4e} kg/(m·s)\n\
                 Pressure Altitude: {:.2} m\n",
            Self::format_altitude(altitude),
            Self::format_domain(state.domain),
            state.temperature_celsius(),
            state.temperature,
            state.pressure,
            pascals_to_hectopascals(state.pressure),
            state.density,
            state.speed_of_sound,
            state.viscosity,
            state.pressure_altitude,
        )
    }

    pub fn format_table(&self) -> String {
        let mut table = format!(
            "{:>10} {:>8} {:>11} {:>9} {:>8} {:>11} {:>10}\n",
            "H [m]", "T [°C]", "p [Pa]", "rho", "a [m/s]", "mu", "Hp [m]"
        );
        for entry in &self.entries {
            let state = &entry.state;
            table.push_str(&format!(
                "{:>10.1} {:>8.2} {:>11.2} {:>9.5} {:>8.2} {:>11.4e} {:>10.1}{}\n",
                entry.altitude,
                state.temperature_celsius(),
                state.pressure,
                state.density,
                state.speed_of_sound,
                state.viscosity,
                state.pressure_altitude,
                if state.was_clamped() { " *" } else { "" },
            ));
        }
        table
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn display_data(&self) {
        println!("--- ISA Atmosphere ---");
        println!(
            "Temperature Offset: {:.2} K, Pressure Chain: {:?}",
            self.config.temperature_offset, self.config.pressure_chain
        );

        if self.entries.len() == 1 {
            let entry = &self.entries[0];
            println!("{}", Self::format_state(entry.altitude, &entry.state));
        } else {
            println!("{}", self.format_table());
        }

        if self.clamped > 0 {
            println!(
                "{} altitude(s) outside the model range were clamped",
                self.clamped
            );
        }
    }
}
