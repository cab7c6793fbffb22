use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use urbannexus::{
    clock::SystemClock,
    sampler::{CityLocation, CitySampler},
    scenario::ScenarioLoader,
    web::{self, ServerConfig},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "UrbanNexus city metrics runner")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/baseline.yaml")]
    scenario: PathBuf,

    /// Override the scenario's latitude
    #[arg(long)]
    lat: Option<f64>,

    /// Override the scenario's longitude
    #[arg(long)]
    lon: Option<f64>,

    /// Serve the JSON/SSE dashboard API instead of printing a one-shot report
    #[arg(long)]
    serve: bool,

    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, default_value_t = 8787)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let mut scenario = loader.load(&cli.scenario)?;
    if let Some(lat) = cli.lat {
        scenario.city.lat = lat;
    }
    if let Some(lon) = cli.lon {
        scenario.city.lon = lon;
    }
    scenario.validate()?;

    if cli.serve {
        return web::run(ServerConfig {
            scenario,
            host: cli.host,
            port: cli.port,
        })
        .await;
    }

    let city = CityLocation {
        name: scenario.city.name.clone(),
        lat: scenario.city.lat,
        lon: scenario.city.lon,
    };
    let sampler =
        CitySampler::new(city, Box::new(SystemClock)).with_scenario(scenario.params);
    let frame = sampler.frame();
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}
