//! Per-tick simulation update
//!
//! One `tick` call per frame advances the whole session: phase handling,
//! spawning, gauges, movement, collisions. No dt scaling; the original
//! cadence is one simulation step per rendered frame.

use glam::Vec2;
use rand::Rng;

use super::collision::{box_hit, spawn_point_clear};
use super::state::{
    Decoration, FlashlightPickup, GameOverReason, GameState, HealPickup, Obstacle, Phase,
    PowerPickup, Projectile,
};
use crate::consts::*;

/// Input for a single tick, sampled by the platform layer.
///
/// `left`/`right`/`sprint` are key-held states; the rest are
/// pressed-this-frame edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub start: bool,
    pub restart: bool,
    pub shoot: bool,
    pub drop_decoration: bool,
}

/// Advance the game state by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.tick_count += 1;

    match state.phase {
        Phase::Title => {
            state.title_spin = (state.title_spin + 1) % TITLE_SPIN_FRAMES;
            if input.start {
                state.phase = Phase::Playing;
                log::info!("walk started (seed {})", state.seed);
            }
        }
        Phase::GameOver | Phase::ClearScreen if input.restart => {
            state.reset();
        }
        Phase::GameOver => {}
        Phase::ClearScreen => {
            if input.drop_decoration {
                spawn_decoration(state);
            }
        }
        Phase::ClearSequence => {
            let Some(seq) = state.clear.as_mut() else {
                debug_assert!(false, "clear-sequence phase without a controller");
                return;
            };
            if seq.step(&mut state.player) {
                state.clear = None;
                state.phase = Phase::ClearScreen;
            }
        }
        Phase::Playing => update_playing(state, input),
    }
}

fn update_playing(state: &mut GameState, input: &TickInput) {
    state.day.advance(&mut state.rng);

    // Urgency climbs faster the longer the walk goes on
    state.poop_multiplier += POOP_ACCELERATION;
    state.poop_gauge =
        (state.poop_gauge + BASE_POOP_INCREASE * state.poop_multiplier).min(GAUGE_MAX);

    // Later trash bags relieve more
    state.heal_multiplier += HEAL_ACCELERATION;

    if state.speed < SCROLL_SPEED_MAX {
        state.speed += SCROLL_SPEED_INCREASE;
    }

    // Spawn cadence tightens as the course speeds up
    let interval = ((SPAWN_BASE_INTERVAL as f32 / state.speed) as u64).max(SPAWN_MIN_INTERVAL);
    if state.tick_count % interval == 0 {
        spawn_lane_entity(state);
    }

    // Sprinting drains stamina; walking lets it recover
    if input.sprint && state.stamina > 0.0 {
        state.stamina = (state.stamina - STAMINA_DRAIN).max(0.0);
    } else if state.stamina < GAUGE_MAX {
        state.stamina = (state.stamina + STAMINA_REGEN).min(GAUGE_MAX);
    }
    let move_speed = if input.sprint && state.stamina > 0.0 {
        PLAYER_SPRINT_SPEED
    } else {
        PLAYER_SPEED
    };

    // Direction keys override the velocity outright, no acceleration
    if input.left {
        state.player.vx = -move_speed;
    } else if input.right {
        state.player.vx = move_speed;
    }

    state.player.pos.x += state.player.vx;
    if state.player.pos.x < LEFT_WALL {
        state.player.pos.x = LEFT_WALL;
        state.player.vx = -state.player.vx;
    }
    if state.player.pos.x > RIGHT_WALL {
        state.player.pos.x = RIGHT_WALL;
        state.player.vx = -state.player.vx;
    }

    advance_entities(state);

    if state.poop_gauge >= GAUGE_MAX {
        state.enter_game_over(GameOverReason::GaugeFull);
    }

    state.score += state.speed * SCORE_RATE;

    // Timed effects wind down
    if state.has_power {
        state.power_timer = state.power_timer.saturating_sub(1);
        if state.power_timer == 0 {
            state.has_power = false;
        }
    }
    if state.has_flashlight {
        state.flashlight_timer = state.flashlight_timer.saturating_sub(1);
        if state.flashlight_timer == 0 {
            state.has_flashlight = false;
        }
    }
    state.reload_timer = state.reload_timer.saturating_sub(1);

    if state.has_power && input.shoot && state.reload_timer == 0 {
        state.projectiles.push(Projectile {
            pos: state.player.pos + Vec2::new(PROJECTILE_OFFSET_X, 0.0),
            vel: Vec2::new(0.0, PROJECTILE_VEL_Y),
        });
        state.reload_timer = RELOAD_TICKS;
    }

    update_projectiles(state);

    state.progress = (state.progress + PROGRESS_PER_TICK).min(MAX_PROGRESS);
    if state.progress >= MAX_PROGRESS && state.phase == Phase::Playing {
        state.enter_clear_sequence();
    }
}

/// Scroll every entity down the course, cull what leaves the screen, and
/// resolve player contacts. Removal is a retain pass per collection; no
/// collection is mutated while it is being iterated.
fn advance_entities(state: &mut GameState) {
    let speed = state.speed;
    let player = state.player.pos;

    for o in &mut state.obstacles {
        o.pos.y += speed;
    }
    state.obstacles.retain(|o| o.pos.y <= SCREEN_HEIGHT);
    if state.obstacles.iter().any(|o| box_hit(o.pos, player)) {
        state.enter_game_over(GameOverReason::HitObstacle);
    }

    for p in &mut state.heal_pickups {
        p.pos.y += speed;
    }
    let mut heals = 0u32;
    state.heal_pickups.retain(|p| {
        if p.pos.y > SCREEN_HEIGHT {
            return false;
        }
        if box_hit(p.pos, player) {
            heals += 1;
            return false;
        }
        true
    });
    if heals > 0 {
        let relief = BASE_HEAL_AMOUNT * state.heal_multiplier * heals as f32;
        state.poop_gauge = (state.poop_gauge - relief).max(0.0);
    }

    for p in &mut state.power_pickups {
        p.pos.y += speed;
    }
    let mut grabbed_power = false;
    state.power_pickups.retain(|p| {
        if p.pos.y > SCREEN_HEIGHT {
            return false;
        }
        if box_hit(p.pos, player) {
            grabbed_power = true;
            return false;
        }
        true
    });
    if grabbed_power {
        state.has_power = true;
        state.power_timer = POWER_DURATION;
    }

    for p in &mut state.flashlight_pickups {
        p.pos.y += speed;
    }
    let mut grabbed_flashlight = false;
    state.flashlight_pickups.retain(|p| {
        if p.pos.y > SCREEN_HEIGHT {
            return false;
        }
        if box_hit(p.pos, player) {
            grabbed_flashlight = true;
            return false;
        }
        true
    });
    if grabbed_flashlight {
        state.has_flashlight = true;
        state.flashlight_timer = FLASHLIGHT_DURATION;
    }
}

fn update_projectiles(state: &mut GameState) {
    for p in &mut state.projectiles {
        p.pos += p.vel;
    }
    let obstacles = &mut state.obstacles;
    state.projectiles.retain(|p| {
        if p.pos.y < PROJECTILE_CULL_Y {
            return false;
        }
        // First obstacle within reach absorbs the shot
        if let Some(hit) = obstacles.iter().position(|o| box_hit(p.pos, o.pos)) {
            obstacles.remove(hit);
            return false;
        }
        true
    });
}

/// Spawn at most one entity at the top of a randomly chosen clear lane.
fn spawn_lane_entity(state: &mut GameState) {
    let mut open_lanes: Vec<f32> = Vec::with_capacity(LANE_CENTERS.len());
    for &cx in &LANE_CENTERS {
        if spawn_point_clear(Vec2::new(cx, 0.0), state.occupied_points()) {
            open_lanes.push(cx);
        }
    }
    if open_lanes.is_empty() {
        return;
    }
    let cx = open_lanes[state.rng.random_range(0..open_lanes.len())];

    // Mostly hazards; the odd power-up
    if state.rng.random_range(0..=20) >= 1 {
        if state.rng.random_range(0..=1) == 0 {
            state.obstacles.push(Obstacle {
                pos: Vec2::new(cx, 0.0),
            });
        } else {
            state.heal_pickups.push(HealPickup {
                pos: Vec2::new(cx, 0.0),
            });
        }
    } else if state.rng.random_range(0..=1) == 0 {
        state.power_pickups.push(PowerPickup {
            pos: Vec2::new(cx + POWERUP_OFFSET_X, 0.0),
        });
    } else {
        state.flashlight_pickups.push(FlashlightPickup {
            pos: Vec2::new(cx + POWERUP_OFFSET_X, 0.0),
        });
    }
}

/// Cosmetic drop on the clear screen: random size, random spot.
fn spawn_decoration(state: &mut GameState) {
    let size = state.rng.random_range(DECOR_SIZE_MIN..=DECOR_SIZE_MAX);
    let x = state.rng.random_range(0..=(SCREEN_WIDTH as i32 - size));
    let y = state.rng.random_range(0..=(SCREEN_HEIGHT as i32 - size));
    state.decorations.push(Decoration {
        pos: Vec2::new(x as f32, y as f32),
        size: size as f32,
    });
}
