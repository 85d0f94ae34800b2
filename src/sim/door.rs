//! Clear-sequence controller
//!
//! When the course is complete, a door descends from the top of the
//! screen, opens, the dog walks in, and the door closes behind it. Six
//! stages, strictly sequential, no way back.

use crate::consts::*;
use crate::sim::state::Player;

/// Door animation stages, in order of occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DoorStage {
    /// Door slides down into place
    Descending,
    /// Brief pause before opening
    Holding,
    /// Both halves slide apart
    Opening,
    /// Player walks to the door center, then up through it
    WalkIn,
    /// Halves slide back together
    Closing,
    /// Held shut briefly before the clear screen
    Done,
}

/// State for the door animation. Lives on the session only while the
/// phase is ClearSequence.
#[derive(Debug, Clone)]
pub struct ClearSequence {
    pub stage: DoorStage,
    pub door_y: f32,
    /// How far each half has slid open, capped at DOOR_OPEN_MAX
    pub open_width: f32,
    /// Stage-local timer; reset on most stage changes
    timer: u32,
}

impl ClearSequence {
    pub fn new() -> Self {
        Self {
            stage: DoorStage::Descending,
            door_y: DOOR_START_Y,
            open_width: 0.0,
            timer: 0,
        }
    }

    /// Advance the animation one tick, steering the player during WalkIn.
    /// Returns true once the whole sequence has played out.
    pub fn step(&mut self, player: &mut Player) -> bool {
        self.timer += 1;

        match self.stage {
            DoorStage::Descending => {
                self.door_y += 1.0;
                if self.door_y >= DOOR_STOP_Y {
                    self.stage = DoorStage::Holding;
                    self.timer = 0;
                }
            }
            DoorStage::Holding => {
                if self.timer > DOOR_HOLD_TICKS {
                    self.stage = DoorStage::Opening;
                }
            }
            DoorStage::Opening => {
                self.open_width = (self.open_width + 1.0).min(DOOR_OPEN_MAX);
                if self.open_width >= DOOR_OPEN_MAX {
                    self.stage = DoorStage::WalkIn;
                    self.timer = 0;
                }
            }
            DoorStage::WalkIn => {
                let target_y = self.door_y + DOOR_ENTRY_OFFSET_Y;

                // Walk to the door center first, snapping once close enough
                if (player.pos.x - DOOR_TARGET_X).abs() > 1.0 {
                    if player.pos.x < DOOR_TARGET_X {
                        player.pos.x += 1.0;
                    } else {
                        player.pos.x -= 1.0;
                    }
                } else {
                    player.pos.x = DOOR_TARGET_X;
                }

                // Only once aligned, walk up into the doorway
                if (player.pos.x - DOOR_TARGET_X).abs() <= 1.0 {
                    if player.pos.y > target_y {
                        player.pos.y -= 1.0;
                    }
                    if player.pos.y <= target_y {
                        self.stage = DoorStage::Closing;
                        self.timer = 0;
                    }
                }
            }
            DoorStage::Closing => {
                self.open_width = (self.open_width - DOOR_CLOSE_STEP).max(0.0);
                if self.open_width <= 0.0 {
                    self.stage = DoorStage::Done;
                    self.timer = 0;
                }
            }
            DoorStage::Done => {
                if self.timer > DOOR_HOLD_TICKS {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for ClearSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_run_in_order_with_no_skips() {
        let mut seq = ClearSequence::new();
        let mut player = Player::default();
        let mut visited = vec![seq.stage];

        for _ in 0..1000 {
            let finished = seq.step(&mut player);
            if visited.last() != Some(&seq.stage) {
                visited.push(seq.stage);
            }
            if finished {
                break;
            }
        }

        assert_eq!(
            visited,
            vec![
                DoorStage::Descending,
                DoorStage::Holding,
                DoorStage::Opening,
                DoorStage::WalkIn,
                DoorStage::Closing,
                DoorStage::Done,
            ]
        );
    }

    #[test]
    fn sequence_reports_finished_only_in_done() {
        let mut seq = ClearSequence::new();
        let mut player = Player::default();

        let mut finished_at = None;
        for n in 0..1000 {
            if seq.step(&mut player) {
                finished_at = Some(n);
                break;
            }
        }
        assert!(finished_at.is_some());
        assert_eq!(seq.stage, DoorStage::Done);
    }

    #[test]
    fn door_stops_at_half_screen_and_opens_to_cap() {
        let mut seq = ClearSequence::new();
        let mut player = Player::default();

        while seq.stage == DoorStage::Descending {
            seq.step(&mut player);
        }
        assert_eq!(seq.door_y, DOOR_STOP_Y);

        while seq.stage <= DoorStage::Opening {
            seq.step(&mut player);
        }
        assert_eq!(seq.open_width, DOOR_OPEN_MAX);
    }

    #[test]
    fn player_snaps_to_door_center_then_walks_up() {
        let mut seq = ClearSequence::new();
        // Start the player off-center, at the left wall
        let mut player = Player {
            pos: glam::Vec2::new(LEFT_WALL, PLAYER_START_Y),
            vx: 0.0,
        };

        while seq.stage != DoorStage::Closing {
            seq.step(&mut player);
        }
        assert_eq!(player.pos.x, DOOR_TARGET_X);
        assert!(player.pos.y <= DOOR_STOP_Y + DOOR_ENTRY_OFFSET_Y);
    }

    #[test]
    fn door_closes_fully_before_done() {
        let mut seq = ClearSequence::new();
        let mut player = Player::default();

        while seq.stage != DoorStage::Done {
            seq.step(&mut player);
        }
        assert_eq!(seq.open_width, 0.0);
    }
}
