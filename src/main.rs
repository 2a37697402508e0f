//! Headless galaxy runner.
//!
//! Loads an optional JSON preset, generates one galaxy and logs a summary.
//!
//! Run with: `RUST_LOG=info cargo run --release -- [preset.json] [seed]`

use spiral_galaxy::prelude::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let params = match args.next() {
        Some(path) => match GalaxyParams::load(&path) {
            Ok(params) => params.clamped(),
            Err(e) => {
                log::error!("Could not load preset '{}': {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => GalaxyParams::default(),
    };
    let seed: Option<u64> = args.next().and_then(|s| s.parse().ok());

    let result = match seed {
        Some(seed) => summarize(GalaxyController::with_params(SeededRandom::new(seed), params)),
        None => summarize(GalaxyController::with_params(SystemRandom::new(), params)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn summarize<R: RandomSource>(mut galaxy: GalaxyController<R>) -> Result<(), GalaxyError> {
    galaxy.refresh()?;

    let material = galaxy.material();
    if let Some(cloud) = galaxy.cloud() {
        log::info!(
            "{} points, extent {:.2}, point size {}, {:?} blending",
            cloud.len(),
            cloud.bounding_radius(),
            material.size,
            material.blend_mode
        );
    }
    Ok(())
}
