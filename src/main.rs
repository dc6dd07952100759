use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use reefsim::{
    engine::{Engine, EngineSettings},
    scenario::ScenarioLoader,
    web::{self, WebServerConfig},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Reef ecosystem simulator")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/coral_reef.yaml")]
    scenario: PathBuf,

    /// Override step count (uses scenario default when omitted)
    #[arg(long)]
    steps: Option<u64>,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override snapshot interval in steps (0 disables snapshots)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Directory for snapshots
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,

    /// Serve the live web view instead of running headless
    #[arg(long)]
    serve: bool,

    /// Bind host for the web view
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port for the web view
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;
    let steps = scenario.ticks(cli.steps);
    let snapshot_interval = cli
        .snapshot_interval
        .unwrap_or(scenario.snapshot_interval_ticks);
    let snapshot_dir = cli
        .snapshot_dir
        .unwrap_or_else(|| PathBuf::from("snapshots"));

    let settings = EngineSettings {
        scenario_name: scenario.name.clone(),
        seed: cli.seed.unwrap_or(scenario.seed),
        snapshot_interval_ticks: snapshot_interval,
        snapshot_dir,
    };

    if cli.serve {
        let config = WebServerConfig {
            scenario,
            settings,
            steps,
            host: cli.host,
            port: cli.port,
        };
        return tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(web::run(config));
    }

    let mut engine = Engine::new(settings, scenario.world_config());
    println!("Step {:4}  {}", 0, engine.world().counts());
    let executed = engine.run_with_hook(steps, |snapshot| {
        println!(
            "Step {:4}  {:02}:{:02} {:6}  {}",
            snapshot.step,
            snapshot.hour,
            snapshot.minute,
            snapshot.weather.name(),
            snapshot.counts
        );
    })?;

    if executed < steps {
        println!(
            "Scenario '{}' lost viability after {} of {} steps.",
            scenario.name, executed, steps
        );
    } else {
        println!(
            "Scenario '{}' completed {} steps. Final population: {}",
            scenario.name,
            executed,
            engine.world().counts().animals()
        );
    }
    Ok(())
}
