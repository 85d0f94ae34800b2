//! Walkies entry point
//!
//! Headless demo driver: runs a full session against the simulation core
//! with a small autopilot on the controls, logging milestones as the walk
//! unfolds. A real frontend would sample the keyboard into a `TickInput`
//! and draw from the settled `GameState` instead.

use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

use walkies::consts::*;
use walkies::sim::{GameState, Phase, TickInput, tick};

/// Give up after ten minutes of simulated play.
const MAX_TICKS: u64 = 10 * 60 * 60;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0x5EED);
    let mut state = GameState::new(seed);

    for _ in 0..MAX_TICKS {
        let input = autopilot(&state);
        tick(&mut state, &input);

        if state.tick_count % 600 == 0 {
            log::debug!(
                "t={} progress={:.0}/{:.0} poop={:.0} stamina={:.0} score={:.0}",
                state.tick_count,
                state.progress,
                MAX_PROGRESS,
                state.poop_gauge,
                state.stamina,
                state.score
            );
        }

        match state.phase {
            Phase::GameOver => {
                let why = state
                    .game_over_reason
                    .map(|r| r.message())
                    .unwrap_or("unknown");
                log::info!(
                    "run ended after {} ticks: {} (progress {:.0}%, score {:.0})",
                    state.tick_count,
                    why,
                    100.0 * state.progress_fraction(),
                    state.score
                );
                return;
            }
            Phase::ClearScreen => {
                log::info!(
                    "made it home after {} ticks, score {:.0}",
                    state.tick_count,
                    state.score
                );
                return;
            }
            _ => {}
        }
    }
    log::warn!("demo hit the tick limit without finishing");
}

/// Minimal stand-in for a keyboard: dodge the nearest hazard overhead,
/// drift toward trash bags when the lane is safe, shoot when armed.
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    match state.phase {
        Phase::Title => input.start = true,
        // The door animation drives the player by itself
        Phase::ClearSequence | Phase::ClearScreen | Phase::GameOver => {}
        Phase::Playing => {
            let px = state.player.pos.x;
            let py = state.player.pos.y;

            // Closest obstacle falling in the player's column
            let threat = state
                .obstacles
                .iter()
                .filter(|o| o.pos.y < py && (o.pos.x - px).abs() < HIT_RADIUS + 6.0)
                .max_by(|a, b| {
                    a.pos
                        .y
                        .partial_cmp(&b.pos.y)
                        .unwrap_or(Ordering::Equal)
                });

            if let Some(threat) = threat {
                // Sidestep toward the roomier side, hurrying if possible
                if threat.pos.x >= px {
                    input.left = true;
                } else {
                    input.right = true;
                }
                input.sprint = state.stamina > 20.0;
                input.shoot = state.has_power;
            } else if let Some(bag) = state
                .heal_pickups
                .iter()
                .filter(|p| p.pos.y < py)
                .min_by(|a, b| {
                    (a.pos.x - px)
                        .abs()
                        .partial_cmp(&(b.pos.x - px).abs())
                        .unwrap_or(Ordering::Equal)
                })
            {
                if bag.pos.x > px + 2.0 {
                    input.right = true;
                } else if bag.pos.x < px - 2.0 {
                    input.left = true;
                }
            }
        }
    }
    input
}
