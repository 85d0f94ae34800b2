//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no dt scaling
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod daynight;
pub mod door;
pub mod state;
pub mod tick;

pub use collision::{box_hit, spawn_point_clear};
pub use daynight::DayCycle;
pub use door::{ClearSequence, DoorStage};
pub use state::{
    Decoration, FlashlightPickup, GameOverReason, GameState, HealPickup, Obstacle, Phase, Player,
    PowerPickup, Projectile,
};
pub use tick::{TickInput, tick};
