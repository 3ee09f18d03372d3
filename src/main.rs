//! Bean Catcher entry point
//!
//! Headless demo runner: the autopilot plays a seeded run and periodically
//! logs snapshots. Hosts with a renderer drive the library the same way,
//! swapping the autopilot for real input.

use std::process::ExitCode;

use bean_catcher::GameConfig;
use bean_catcher::sim::{GameState, TickInput, tick};

/// How often to log a progress line (ticks)
const REPORT_INTERVAL: u64 = 600;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => Some(seed),
        Some(Err(_)) => {
            eprintln!("usage: bean-catcher [seed] [max-ticks]");
            return ExitCode::FAILURE;
        }
        None => None,
    };
    let max_ticks = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(ticks)) => ticks,
        Some(Err(_)) => {
            eprintln!("usage: bean-catcher [seed] [max-ticks]");
            return ExitCode::FAILURE;
        }
        None => 20_000,
    };

    let config = GameConfig {
        seed,
        ..Default::default()
    };
    let mut state = match GameState::new(config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Bean Catcher headless demo, seed {}", state.seed);

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    for _ in 0..max_ticks {
        if !state.running() {
            break;
        }
        tick(&mut state, &input);

        if state.time_ticks % REPORT_INTERVAL == 0 {
            let snap = state.snapshot();
            log::info!(
                "tick {:>6}  score {:>4}  misses {}  beans {:>2}  interval {}",
                snap.tick,
                snap.score,
                snap.misses,
                snap.beans.len(),
                state.spawn.interval,
            );
        }
    }

    let snap = state.snapshot();
    if let Ok(json) = serde_json::to_string(&snap) {
        log::debug!("final snapshot: {json}");
    }
    println!(
        "seed {}: {} ticks, score {}, misses {}, {}",
        state.seed,
        snap.tick,
        snap.score,
        snap.misses,
        if snap.running { "still running" } else { "game over" },
    );

    ExitCode::SUCCESS
}
