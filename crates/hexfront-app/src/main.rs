//! Headless Hexfront runner.
//!
//! Loads `config.json` and `units.json`, drives the simulation at the
//! configured frame rate, and prints the territory tally once per
//! second. Startup errors print and exit nonzero before the loop
//! starts.

use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use hexfront_app::config;
use hexfront_app::game_loop::{self, LoopCommand};
use hexfront_sim::engine::{SimConfig, SimulationEngine};
use hexfront_sim::manifest;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let config_path = args.get(1).map(String::as_str).unwrap_or("config.json");
    let units_path = args.get(2).map(String::as_str).unwrap_or("units.json");
    let run_secs = match args.get(3).map(|s| s.parse::<u64>()) {
        None => None,
        Some(Ok(secs)) => Some(secs),
        Some(Err(_)) => {
            eprintln!("usage: hexfront [config.json] [units.json] [run-seconds]");
            return ExitCode::FAILURE;
        }
    };

    match run(config_path, units_path, run_secs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hexfront: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: &str, units_path: &str, run_secs: Option<u64>) -> Result<(), Box<dyn Error>> {
    let config = config::load(Path::new(config_path))?;
    let units = manifest::load_units(Path::new(units_path))?;

    let mut engine = SimulationEngine::new(SimConfig {
        rows: config.rows,
        cols: config.cols,
        seed: config.seed,
        movement: config.movement,
    });
    engine.spawn_units(&units)?;

    println!(
        "hexfront: {}x{} board, {} units, {} fps",
        config.rows,
        config.cols,
        units.len(),
        config.frame_rate
    );

    let handle = game_loop::spawn_frame_loop(engine, config.frame_rate);
    let started = Instant::now();

    loop {
        std::thread::sleep(Duration::from_secs(1));
        if let Ok(slot) = handle.latest_snapshot.lock() {
            if let Some(snapshot) = slot.as_ref() {
                let t = snapshot.territory;
                println!(
                    "t={:6.1}s  blue {:5.1}%  red {:5.1}%  unclaimed {:5.1}%",
                    snapshot.time.elapsed_ms / 1000.0,
                    t.blue_pct,
                    t.red_pct,
                    t.none_pct
                );
            }
        }
        if let Some(secs) = run_secs {
            if started.elapsed() >= Duration::from_secs(secs) {
                break;
            }
        }
    }

    let _ = handle.commands.send(LoopCommand::Shutdown);
    let _ = handle.thread.join();
    Ok(())
}
