//! Walkies - a three-lane dog-walking arcade runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, gauges, phases)
//!
//! Rendering and input polling live outside this crate. A frontend samples
//! the keyboard into a [`sim::TickInput`], calls [`sim::tick`] once per
//! frame, then draws from the settled [`sim::GameState`] read-only.

pub mod sim;

pub use sim::{GameState, Phase, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Logical screen dimensions (pixel-art resolution)
    pub const SCREEN_WIDTH: f32 = 160.0;
    pub const SCREEN_HEIGHT: f32 = 120.0;

    /// Player sprite size (square)
    pub const PLAYER_SIZE: f32 = 12.0;
    /// Player spawn position
    pub const PLAYER_START_X: f32 = 80.0;
    pub const PLAYER_START_Y: f32 = 100.0;
    /// Walk speed (units per tick)
    pub const PLAYER_SPEED: f32 = 2.0;
    /// Sprint speed, available while stamina holds out
    pub const PLAYER_SPRINT_SPEED: f32 = 4.0;

    /// Lane centers across the course
    pub const LANE_CENTERS: [f32; 3] = [35.0, 75.0, 115.0];
    /// Horizontal bounds the player bounces off
    pub const LEFT_WALL: f32 = 20.0;
    pub const RIGHT_WALL: f32 = 130.0;

    /// Shared scroll speed (entity fall rate, units per tick)
    pub const SCROLL_SPEED_START: f32 = 1.0;
    pub const SCROLL_SPEED_INCREASE: f32 = 0.005;
    pub const SCROLL_SPEED_MAX: f32 = 4.0;

    /// Spawn cadence: interval = max(MIN, BASE / speed)
    pub const SPAWN_BASE_INTERVAL: u64 = 30;
    pub const SPAWN_MIN_INTERVAL: u64 = 10;
    /// A lane is blocked when an entity is this close to the spawn point
    pub const SPAWN_CLEAR_X: f32 = 40.0;
    pub const MIN_SPAWN_DISTANCE: f32 = 40.0;
    /// Power-ups spawn slightly off the lane center
    pub const POWERUP_OFFSET_X: f32 = 2.0;

    /// Contact half-width, both axes independently (box test)
    pub const HIT_RADIUS: f32 = 12.0;

    /// Gauge bounds and growth
    pub const GAUGE_MAX: f32 = 100.0;
    pub const BASE_POOP_INCREASE: f32 = 0.1;
    pub const POOP_ACCELERATION: f32 = 0.005;
    pub const BASE_HEAL_AMOUNT: f32 = 10.0;
    pub const HEAL_ACCELERATION: f32 = 0.001;
    pub const STAMINA_DRAIN: f32 = 1.0;
    pub const STAMINA_REGEN: f32 = 0.2;

    /// Timed effects, in ticks (60 fps)
    pub const POWER_DURATION: u32 = 180;
    pub const FLASHLIGHT_DURATION: u32 = 250;
    pub const RELOAD_TICKS: u32 = 10;

    /// Projectiles fire straight up from just right of the player origin
    pub const PROJECTILE_VEL_Y: f32 = -4.0;
    pub const PROJECTILE_OFFSET_X: f32 = 3.0;
    pub const PROJECTILE_CULL_Y: f32 = -10.0;

    /// Day/night cycle phase thresholds
    pub const NIGHT_START: f32 = 0.5;
    pub const DAWN_END: f32 = 0.6;
    pub const CYCLE_SPEED_INITIAL: f32 = 0.002;
    pub const CYCLE_SPEED_MIN: f32 = 0.001;
    pub const CYCLE_SPEED_MAX: f32 = 0.005;
    /// Darkening phase at which the "night approaching" warning shows
    pub const NIGHT_WARNING: f32 = 0.4;

    /// Course length and pacing
    pub const MAX_PROGRESS: f32 = 500.0;
    pub const PROGRESS_PER_TICK: f32 = 0.5;
    pub const SCORE_RATE: f32 = 0.1;

    /// Title-screen mascot spin period in ticks
    pub const TITLE_SPIN_FRAMES: u32 = 32;

    /// Clear-door animation
    pub const DOOR_START_Y: f32 = -50.0;
    pub const DOOR_STOP_Y: f32 = SCREEN_HEIGHT / 2.0 - 30.0;
    pub const DOOR_OPEN_MAX: f32 = 20.0;
    pub const DOOR_CLOSE_STEP: f32 = 0.5;
    pub const DOOR_HOLD_TICKS: u32 = 30;
    /// Player walk-in target: door center, then below the door frame
    pub const DOOR_TARGET_X: f32 = SCREEN_WIDTH / 2.0 - 6.0;
    pub const DOOR_ENTRY_OFFSET_Y: f32 = 35.0;

    /// Decorative objects on the clear screen
    pub const DECOR_SIZE_MIN: i32 = 3;
    pub const DECOR_SIZE_MAX: i32 = 6;
}
