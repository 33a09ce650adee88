//! UAV grid planner.
//!
//! Usage:
//!   cargo run -p uav-cli --bin uav-planner -- run --map height --rule height
//!   cargo run -p uav-cli --bin uav-planner -- compare --altitude 6

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use uav_cli::logging::{init_tracing, log_report};
use uav_cli::{format_comparison, format_report, parse_coordinate, Config, MapSource};
use uav_core::{compare, presets, Coordinate, ScenarioConfig, ScenarioRunner, TraversalRule};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest-route planner with flight cost estimates")]
struct Args {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a single route
    Run {
        /// Map: "flat", "height" or a path to a JSON grid
        #[arg(long, default_value = "flat")]
        map: MapSource,

        #[arg(long, value_enum, default_value_t = RuleArg::Flat)]
        rule: RuleArg,

        /// Start cell as ROW,COL
        #[arg(long, value_parser = parse_coordinate, default_value = "0,0")]
        start: Coordinate,

        /// Goal cell as ROW,COL
        #[arg(long, value_parser = parse_coordinate, default_value = "4,4")]
        goal: Coordinate,

        #[command(flatten)]
        vehicle: VehicleArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the flat and height-threshold reference scenarios and compare them
    Compare {
        #[command(flatten)]
        vehicle: VehicleArgs,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args, Debug)]
struct VehicleArgs {
    /// Flight altitude in meters [env: UAV_ALTITUDE_M]
    #[arg(long)]
    altitude: Option<f64>,

    /// Cruise speed in cells per second [env: UAV_SPEED_MPS]
    #[arg(long)]
    speed: Option<f64>,

    /// Battery capacity in percent [env: UAV_BATTERY_CAPACITY]
    #[arg(long)]
    capacity: Option<f64>,
}

impl VehicleArgs {
    fn resolve(&self, config: &Config) -> ScenarioConfig {
        config.resolve(self.altitude, self.speed, self.capacity)
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RuleArg {
    Flat,
    Height,
}

impl From<RuleArg> for TraversalRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Flat => TraversalRule::Flat,
            RuleArg::Height => TraversalRule::HeightThreshold,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json)?;

    let config = Config::from_env();

    match args.command {
        Command::Run {
            map,
            rule,
            start,
            goal,
            vehicle,
            json,
        } => {
            let grid = map.load()?;
            let runner = ScenarioRunner::new(vehicle.resolve(&config));
            let scenario = uav_core::Scenario::new("custom", rule.into(), start, goal);
            let report = runner
                .run_scenario(&grid, &scenario)
                .context("scenario failed")?;
            log_report(&report);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", format_report(&report));
            }
        }
        Command::Compare { vehicle, json } => {
            let runner = ScenarioRunner::new(vehicle.resolve(&config));

            // Scenarios share nothing, so run them side by side.
            let flat_runner = runner.clone();
            let flat = tokio::task::spawn_blocking(move || {
                flat_runner.run_scenario(&presets::flat_map(), &presets::flat_scenario())
            });
            let height = tokio::task::spawn_blocking(move || {
                runner.run_scenario(&presets::height_map(), &presets::height_scenario())
            });
            let (flat, height) = tokio::try_join!(flat, height)?;
            let flat = flat.context("flat scenario failed")?;
            let height = height.context("height-threshold scenario failed")?;
            log_report(&flat);
            log_report(&height);

            let comparison = compare(flat.outcome.metrics(), height.outcome.metrics());

            if json {
                let body = serde_json::json!({
                    "scenarios": [&flat, &height],
                    "comparison": comparison,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                print!("{}", format_report(&flat));
                println!();
                print!("{}", format_report(&height));
                println!();
                print!("{}", format_comparison(&flat.name, &height.name, &comparison));
            }
        }
    }

    Ok(())
}
