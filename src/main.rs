use physim::{run_drag, run_two_body, DragModel, ModelConfig, NullObserver, Scenario, ScenarioConfig};
use physim::relative_residuals;

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "falling_sphere.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&args.file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let model = scenario_cfg.engine.model;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    info!(
        "scenario loaded: {} bodies, h0 = {}, max_iter = {}",
        scenario.system.bodies.len(),
        scenario.parameters.h0,
        scenario.parameters.max_iter
    );

    match model {
        ModelConfig::DragFall => report_drag(&mut scenario)?,
        ModelConfig::TwoBody => report_two_body(&mut scenario)?,
    }

    Ok(())
}

/// Run a fall scenario and print each body's terminal velocity together with
/// the worst residual against the closed-form trajectory.
fn report_drag(scenario: &mut Scenario) -> Result<()> {
    let params = scenario.parameters.clone();
    let outcome = run_drag(scenario, &mut NullObserver)?;

    info!(
        "fall run finished after {} steps ({:.2} s simulated)",
        outcome.steps, outcome.elapsed
    );

    for (i, rec) in outcome.records.iter().enumerate() {
        let model = DragModel::for_body(&scenario.system.bodies[i], &params, i)?;
        let reference: Vec<f64> = rec
            .track
            .times
            .iter()
            .map(|t| model.reference_position(*t))
            .collect();
        let residuals = relative_residuals(&rec.track.positions, &reference)?;
        let worst = residuals.iter().copied().fold(0.0, f64::max);
        let final_speed = rec.track.velocities.last().map_or(0.0, |v| v.abs());

        println!(
            "body {i}: terminal velocity = {:.2} m/s, final speed = {:.2} m/s, samples = {}, worst position error = {:.3}%",
            rec.terminal_velocity,
            final_speed,
            rec.track.len(),
            worst * 100.0
        );
    }

    Ok(())
}

/// Run an orbit scenario and print the separation bounds, the total-energy
/// drift, and the simulated wall time in days.
fn report_two_body(scenario: &mut Scenario) -> Result<()> {
    let outcome = run_two_body(scenario, &mut NullObserver)?;

    info!("orbit run finished after {} steps", outcome.steps);

    println!(
        "separation: min = {:.4e} m, max = {:.4e} m",
        outcome.min_separation(),
        outcome.max_separation()
    );
    println!("total energy drift: {:.4}%", outcome.energy_drift() * 100.0);
    println!(
        "Real life days taken: {:.2}",
        outcome.elapsed / (60.0 * 60.0 * 24.0)
    );

    Ok(())
}
