//! Asteroid Drift headless runner
//!
//! Runs a session without a display: the demo pilot (or nobody) supplies
//! input, and each frame is either written as a JSON line on stdout or
//! summarized through the logger.
//!
//! Usage: `asteroid-drift [settings.json]`

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use asteroid_drift::demo::DemoPilot;
use asteroid_drift::sim::GameEvent;
use asteroid_drift::{FrameOutput, Game, Settings};

fn main() {
    env_logger::init();
    log::info!("Asteroid Drift (headless) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());

    if let Err(err) = run(&settings) {
        log::error!("Runner stopped: {err}");
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> io::Result<()> {
    let mut game = Game::new(settings.seed);
    let mut pilot = DemoPilot::new(settings.restart_delay);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut runs = 0u32;
    let mut best_score = 0u64;

    for frame in 0..settings.frames {
        if settings.autopilot {
            for event in pilot.drive(game.state()) {
                game.handle(event);
            }
        }

        let scene = game.tick(frame as f64);

        for event in game.events() {
            match event {
                GameEvent::GameStarted => runs += 1,
                GameEvent::GameOver { score } => best_score = best_score.max(*score),
                _ => {}
            }
        }

        match settings.output {
            FrameOutput::Json => {
                let line = scene.to_json().map_err(io::Error::other)?;
                writeln!(out, "{line}")?;
            }
            FrameOutput::Summary => {
                if settings.summary_every > 0 && frame % settings.summary_every == 0 {
                    log::info!(
                        "frame {:>6} | {:<8} | level {:>2} | lives {} | score {:>6} | asteroids {:>2} | particles {:>3}",
                        scene.frame,
                        scene.state.as_str(),
                        scene.level,
                        scene.lives,
                        scene.score,
                        scene.asteroids.len(),
                        scene.particles.len()
                    );
                }
            }
        }
    }

    out.flush()?;

    let state = game.state();
    best_score = best_score.max(state.score);
    log::info!(
        "Finished {} frames: {} runs, best score {}, current level {}",
        settings.frames,
        runs,
        best_score,
        state.level
    );
    Ok(())
}
