//! Game session state and entity types
//!
//! One `GameState` value owns everything the simulation mutates. `tick`
//! takes it by `&mut`, the render layer reads it by `&`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::daynight::DayCycle;
use super::door::ClearSequence;
use crate::consts::*;

/// Top-level session phase. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start screen, waiting for the start key
    Title,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
    /// Goal reached, door animation running
    ClearSequence,
    /// Terminal display phase after the door closes
    ClearScreen,
}

/// Why the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    HitObstacle,
    GaugeFull,
}

impl GameOverReason {
    /// Display line for the game-over screen.
    pub fn message(self) -> &'static str {
        match self {
            Self::HitObstacle => "Look ahead!!",
            Self::GaugeFull => "Don't leave the poop behind!!",
        }
    }
}

/// The walked dog: lane-bound horizontal motion with wall bouncing.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    /// Horizontal velocity; sign flips on wall contact
    pub vx: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vx: PLAYER_SPEED,
        }
    }
}

/// A tree blocking a lane. Fatal on contact.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub pos: Vec2,
}

/// A trash bag; collecting one relieves the poop gauge.
#[derive(Debug, Clone, Copy)]
pub struct HealPickup {
    pub pos: Vec2,
}

/// Grants the timed shooting power.
#[derive(Debug, Clone, Copy)]
pub struct PowerPickup {
    pub pos: Vec2,
}

/// Grants timed visibility at night.
#[derive(Debug, Clone, Copy)]
pub struct FlashlightPickup {
    pub pos: Vec2,
}

/// Fired upward by the player; destroys one obstacle on contact.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Cosmetic object dropped on the clear screen. No gameplay effect.
#[derive(Debug, Clone, Copy)]
pub struct Decoration {
    pub pos: Vec2,
    pub size: f32,
}

/// Complete game state (deterministic for a given seed and input stream).
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session-owned RNG; the only randomness source in the simulation
    pub rng: Pcg32,
    /// Global tick counter; advances in every phase (drives spawn cadence)
    pub tick_count: u64,
    /// Current phase
    pub phase: Phase,
    /// Set when phase is GameOver
    pub game_over_reason: Option<GameOverReason>,

    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub heal_pickups: Vec<HealPickup>,
    pub power_pickups: Vec<PowerPickup>,
    pub flashlight_pickups: Vec<FlashlightPickup>,
    pub projectiles: Vec<Projectile>,
    pub decorations: Vec<Decoration>,

    /// Urgency gauge in [0, 100]; full means game over
    pub poop_gauge: f32,
    /// Growth factor applied to the poop gauge each tick (unbounded)
    pub poop_multiplier: f32,
    /// Growth factor applied to heal pickups (unbounded)
    pub heal_multiplier: f32,
    /// Sprint reserve in [0, 100]
    pub stamina: f32,
    /// Shared scroll speed for entity advance and spawn cadence
    pub speed: f32,
    pub score: f32,
    /// Distance covered toward the goal, in [0, MAX_PROGRESS]
    pub progress: f32,

    pub has_power: bool,
    pub power_timer: u32,
    pub has_flashlight: bool,
    pub flashlight_timer: u32,
    pub reload_timer: u32,

    pub day: DayCycle,
    /// Door animation controller; present only while phase is ClearSequence
    pub clear: Option<ClearSequence>,
    /// Title-screen mascot rotation frame, modulo TITLE_SPIN_FRAMES
    pub title_spin: u32,
}

impl GameState {
    /// Create a fresh session at the title screen.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick_count: 0,
            phase: Phase::Title,
            game_over_reason: None,
            player: Player::default(),
            obstacles: Vec::new(),
            heal_pickups: Vec::new(),
            power_pickups: Vec::new(),
            flashlight_pickups: Vec::new(),
            projectiles: Vec::new(),
            decorations: Vec::new(),
            poop_gauge: 0.0,
            poop_multiplier: 1.0,
            heal_multiplier: 1.0,
            stamina: GAUGE_MAX,
            speed: SCROLL_SPEED_START,
            score: 0.0,
            progress: 0.0,
            has_power: false,
            power_timer: 0,
            has_flashlight: false,
            flashlight_timer: 0,
            reload_timer: 0,
            day: DayCycle::default(),
            clear: None,
            title_spin: 0,
        }
    }

    /// Return to the title screen with all mutable state back at its
    /// initial values. The RNG stream and global tick counter keep running.
    pub fn reset(&mut self) {
        let seed = self.seed;
        let rng = self.rng.clone();
        let tick_count = self.tick_count;
        *self = Self::new(seed);
        self.rng = rng;
        self.tick_count = tick_count;
    }

    /// True while the background is in its day half of the cycle.
    pub fn is_day(&self) -> bool {
        self.day.is_day()
    }

    /// Obstacles and pickups are drawn only in daylight, unless the
    /// flashlight effect is active.
    pub fn entities_visible(&self) -> bool {
        self.day.is_day() || self.has_flashlight
    }

    /// Blinking "night approaching" warning window.
    pub fn night_warning(&self) -> bool {
        self.day.night_warning()
    }

    /// Fraction of the course covered, in [0, 1]. For the progress gauge.
    pub fn progress_fraction(&self) -> f32 {
        self.progress / MAX_PROGRESS
    }

    /// Every position a spawn candidate must keep clear of.
    pub(crate) fn occupied_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.obstacles
            .iter()
            .map(|o| o.pos)
            .chain(self.heal_pickups.iter().map(|p| p.pos))
            .chain(self.power_pickups.iter().map(|p| p.pos))
            .chain(self.flashlight_pickups.iter().map(|p| p.pos))
    }

    pub(crate) fn enter_game_over(&mut self, reason: GameOverReason) {
        self.phase = Phase::GameOver;
        self.game_over_reason = Some(reason);
        log::info!("game over: {:?} (score {:.0})", reason, self.score);
    }

    /// Goal reached: drop every tracked entity and start the door animation.
    pub(crate) fn enter_clear_sequence(&mut self) {
        self.obstacles.clear();
        self.heal_pickups.clear();
        self.power_pickups.clear();
        self.flashlight_pickups.clear();
        self.projectiles.clear();
        self.clear = Some(ClearSequence::new());
        self.phase = Phase::ClearSequence;
        log::info!("course cleared (score {:.0})", self.score);
    }
}
