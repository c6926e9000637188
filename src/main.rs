use clap::{Parser, ValueEnum};
use isa_atmosphere::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Chain {
    Reference,
    Hydrostatic,
}

impl From<Chain> for PressureChain {
    fn from(chain: Chain) -> Self {
        match chain {
            Chain::Reference => PressureChain::Reference,
            Chain::Hydrostatic => PressureChain::Hydrostatic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// International Standard Atmosphere properties between 0 and 50 km
#[derive(Parser, Debug)]
#[command(name = "isa")]
#[command(
    about = "ISA temperature, pressure, density, speed of sound, viscosity and pressure altitude",
    long_about = None
)]
struct Args {
    /// Geopotential altitude in meters
    #[arg(short, long, default_value_t = 5_000.0, allow_hyphen_values = true)]
    altitude: f64,

    /// Temperature offset from standard conditions in K (or °C)
    #[arg(short, long, default_value_t = 5.0, allow_hyphen_values = true)]
    temperature_offset: f64,

    /// How base pressures are chained between layers
    #[arg(short, long, value_enum, default_value_t = Chain::Reference)]
    chain: Chain,

    /// Reject altitudes outside the model range instead of clamping them
    #[arg(short, long)]
    strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Evaluate a profile instead of a single altitude: START END STEP in meters
    #[arg(
        short,
        long,
        num_args = 3,
        value_names = ["START", "END", "STEP"],
        allow_hyphen_values = true
    )]
    profile: Option<Vec<f64>>,
}

fn run(args: &Args) -> Result<Report, AtmosphereError> {
    let config =
        AtmosphereConfig::new(args.temperature_offset).with_pressure_chain(args.chain.into());
    let model = AtmosphereModel::new(config);
    let mut report = Report::new(config);

    let altitudes = match args.profile.as_deref() {
        Some(&[start, end, step]) => Profile::new(start, end, step)?.altitudes(),
        _ => vec![args.altitude],
    };

    for altitude in altitudes {
        let state = if args.strict {
            model.try_at_altitude(altitude)?
        } else {
            model.at_altitude(altitude)
        };
        report.collect_data(altitude, state);
    }

    Ok(report)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let report = run(&args)?;

    match args.format {
        Format::Text => report.display_data(),
        Format::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
