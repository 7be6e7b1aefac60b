use toroid_life::{Pattern, Runner, Settings, SimulationState};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

fn initial_state(settings: &Settings) -> toroid_life::Result<SimulationState> {
    match &settings.pattern {
        Some(name) => {
            let pattern: Pattern = name.parse()?;
            Ok(SimulationState::load_pattern(
                settings.grid_size,
                pattern.offsets(),
                settings.rotation,
                settings.flip,
            ))
        }
        None => {
            let mut rng = match settings.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Ok(SimulationState::randomize(settings.grid_size, &mut rng))
        }
    }
}

fn run() -> toroid_life::Result<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    let state = initial_state(&settings)?;
    log::info!(
        "Starting {}x{} grid with {} live cells",
        settings.grid_size,
        settings.grid_size,
        state.live_count()
    );

    let mut runner = Runner::new(state, settings.rules, settings.delay())
        .with_max_generations(settings.max_generations);
    runner.running().resume();

    let reason = runner.run(|snapshot| {
        log::debug!(
            "Generation {}: {} live cells",
            snapshot.generation(),
            snapshot.live_count()
        );
    });

    let last = runner.state();
    log::info!(
        "Stopped: {} (generation {}, {} live cells)",
        reason,
        last.generation(),
        last.live_count()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
