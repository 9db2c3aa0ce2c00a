//! Tuning constants and persisted user settings.
//!
//! All timers are in simulation frames (one frame per 16ms tick).

use serde::{Deserialize, Serialize};

/// Logical world size; the canvas is scaled to fit the window.
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 450.0;
pub const GROUND_Y: f64 = WORLD_HEIGHT - 50.0;

pub const GRAVITY: f64 = 0.5;
pub const ENEMY_GRAVITY_FACTOR: f64 = 0.8;
pub const PARTICLE_GRAVITY: f64 = 0.1;

pub const PLAYER_START_X: f64 = 100.0;
pub const PLAYER_START_Y: f64 = 300.0;
pub const PLAYER_SIZE: f64 = 50.0;
pub const PLAYER_SPEED: f64 = 5.0;
pub const PLAYER_JUMP_FORCE: f64 = 12.0;
pub const PLAYER_MAX_HEALTH: i32 = 100;
pub const PLAYER_PUNCH_DAMAGE: i32 = 10;
pub const PLAYER_MAGNET_RANGE: f64 = 150.0;
/// Air jump strength relative to the ground jump.
pub const DOUBLE_JUMP_FACTOR: f64 = 0.85;

pub const PUNCH_RANGE: f64 = 90.0;
pub const PUNCH_FRAMES: u32 = 9;
pub const HIT_FLASH_FRAMES: u32 = 6;

pub const CONTACT_DAMAGE: i32 = 5;
pub const BOSS_CONTACT_DAMAGE: i32 = 10;
pub const KNOCKBACK: f64 = 5.0;
pub const KNOCKBACK_DECAY: f64 = 0.8;

pub const BLINK_FRAMES: u32 = 30;
pub const BLINK_PERIOD: u32 = 6;
pub const REGEN_DELAY_FRAMES: u32 = 360;
pub const REGEN_PER_FRAME: i32 = 1;

pub const ENEMY_WIDTH: f64 = 40.0;
pub const ENEMY_HEIGHT: f64 = 50.0;
pub const ENEMY_SPAWN_INTERVAL: u32 = 180;
pub const ENEMY_FOLLOW_RANGE: f64 = 300.0;
/// Enemies are dropped once this far past a screen edge.
pub const ENEMY_DESPAWN_MARGIN: f64 = 100.0;
pub const ENEMY_COLORS: [&str; 5] = ["#e74c3c", "#9b59b6", "#2ecc71", "#f39c12", "#1abc9c"];
pub const KILL_SCORE: u32 = 10;

pub const BOSS_ROUND_INTERVAL: u32 = 5;
pub const BOSS_WIDTH: f64 = 80.0;
pub const BOSS_HEIGHT: f64 = 90.0;
pub const BOSS_SPEED: f64 = 0.8;
pub const BOSS_FIRE_INTERVAL: u32 = 120;
pub const BOSS_KILL_SCORE: u32 = 100;
pub const BOSS_COIN_DROP: u32 = 10;
pub const FIREBALL_SPEED: f64 = 4.0;
pub const FIREBALL_RADIUS: f64 = 8.0;
pub const FIREBALL_DAMAGE: i32 = 10;

pub const BURN_FRAMES: u32 = 180;
pub const BURN_TICK_FRAMES: u32 = 30;
pub const BURN_DAMAGE: i32 = 2;
pub const CHILL_FRAMES: u32 = 120;
pub const CHILL_FACTOR: f64 = 0.5;

pub const COIN_RADIUS: f64 = 15.0;
pub const COIN_SPIN: f64 = 0.05;
pub const COIN_PULL_SPEED: f64 = 5.0;

pub const FIRST_ROUND_QUOTA: u32 = 5;
pub const QUOTA_PER_ROUND: u32 = 2;
pub const ROUND_TRANSITION_FRAMES: u32 = 120;

pub const BURST_FRAMES: u32 = 60;
pub const PLAYER_DEATH_FRAMES: u32 = 90;
pub const GAME_OVER_TEXT_DELAY: u32 = 30;
/// Frames between the killing blow and the death screen (about two seconds).
pub const DEATH_SCREEN_DELAY: u32 = 120;
pub const GRAVE_FRAMES: u32 = 180;
pub const GRAVE_RISE_FRAMES: u32 = 30;
pub const GRAVE_FADE_FRAMES: u32 = 60;
pub const INDICATOR_FRAMES: u32 = 60;

pub const BLOOD_COLORS: [&str; 5] = ["#e74c3c", "#c0392b", "#a93226", "#922b21", "#7b241c"];
pub const DUST_COLOR: &str = "#7f8c8d";

/// Quota of enemies for a given round number (1-based).
pub fn round_quota(round: u32) -> u32 {
    FIRST_ROUND_QUOTA + round.saturating_sub(1) * QUOTA_PER_ROUND
}

pub fn is_boss_round(round: u32) -> bool {
    round > 0 && round % BOSS_ROUND_INTERVAL == 0
}

/// User-facing display toggles, stored as JSON in localStorage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub show_damage_numbers: bool,
    pub show_dust: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_damage_numbers: true,
            show_dust: true,
        }
    }
}
