//! Plain records for everything that lives in the arena.

use crate::config::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict AABB overlap; touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f64 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Elemental effect applied by the player's fists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    Fire,
    Ice,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub color: &'static str,
    pub alpha: f64,
    pub rotation: f64,
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    /// Advance one frame; returns false once the particle has expired.
    pub fn step(&mut self) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += PARTICLE_GRAVITY;
        self.life += 1;
        self.alpha = 1.0 - self.life as f64 / self.max_life as f64;
        self.life < self.max_life
    }
}

/// Blood particles sharing one timer; they also shrink as they fall.
#[derive(Clone, Debug, PartialEq)]
pub struct Burst {
    pub particles: Vec<Particle>,
    pub timer: u32,
    pub max_time: u32,
}

impl Burst {
    pub fn step(&mut self) -> bool {
        self.timer += 1;
        let fade = 1.0 - self.timer as f64 / self.max_time as f64;
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += PARTICLE_GRAVITY;
            p.alpha = fade;
            p.size *= 0.97;
        }
        self.timer < self.max_time
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Grave {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub timer: u32,
    pub y_offset: f64,
    pub alpha: f64,
}

impl Grave {
    pub fn new(x: f64) -> Self {
        Self {
            x: x + 10.0,
            y: GROUND_Y - 30.0,
            width: 30.0,
            height: 40.0,
            timer: 0,
            y_offset: 40.0,
            alpha: 0.0,
        }
    }

    /// Rise out of the ground, hold, then fade.
    pub fn step(&mut self) -> bool {
        self.timer += 1;
        if self.timer < GRAVE_RISE_FRAMES {
            let t = self.timer as f64 / GRAVE_RISE_FRAMES as f64;
            self.y_offset = 40.0 * (1.0 - t);
            self.alpha = t;
        } else if self.timer > GRAVE_FRAMES - GRAVE_FADE_FRAMES {
            self.alpha = (GRAVE_FRAMES.saturating_sub(self.timer)) as f64 / GRAVE_FADE_FRAMES as f64;
        } else {
            self.y_offset = 0.0;
            self.alpha = 1.0;
        }
        self.timer < GRAVE_FRAMES
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DamageIndicator {
    pub x: f64,
    pub y: f64,
    pub value: i32,
    pub timer: u32,
    pub color: &'static str,
    pub size: f64,
}

impl DamageIndicator {
    pub fn new(x: f64, y: f64, value: i32) -> Self {
        Self {
            x,
            y,
            value,
            timer: 0,
            color: if value >= 15 { "#ff0000" } else { "#ffffff" },
            size: 12.0 + value.min(20) as f64 / 2.0,
        }
    }

    pub fn alpha(&self) -> f64 {
        1.0 - self.timer as f64 / INDICATOR_FRAMES as f64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub rotation: f64,
    pub vx: f64,
    pub vy: f64,
    pub attracted: bool,
}

impl Coin {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            radius: COIN_RADIUS,
            rotation: 0.0,
            vx: 0.0,
            vy: 0.0,
            attracted: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Burn {
    pub frames_left: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
    pub health: i32,
    pub max_health: i32,
    pub color: &'static str,
    pub velocity: Velocity,
    pub is_jumping: bool,
    pub jump_force: f64,
    pub jump_cooldown: u32,
    pub max_jump_cooldown: u32,
    pub direction: f64,
    pub hit_flash: u32,
    pub burn: Option<Burn>,
    pub chill_frames: u32,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn about_to_jump(&self) -> bool {
        !self.is_jumping && (self.jump_cooldown as f64) < self.max_jump_cooldown as f64 * 0.3
    }

    pub fn health_ratio(&self) -> f64 {
        (self.health.max(0) as f64 / self.max_health as f64).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub health: i32,
    pub max_health: i32,
    pub velocity: Velocity,
    pub direction: f64,
    pub fire_cooldown: u32,
    pub hit_flash: u32,
}

impl Boss {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn health_ratio(&self) -> f64 {
        (self.health.max(0) as f64 / self.max_health as f64).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub damage: i32,
    pub age: u32,
}

impl Projectile {
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x - self.radius,
            self.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    pub fn off_screen(&self) -> bool {
        self.x < -self.radius
            || self.x > WORLD_WIDTH + self.radius
            || self.y < -self.radius
            || self.y > WORLD_HEIGHT + self.radius
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeathAnimation {
    pub active: bool,
    pub timer: u32,
    pub particles: Vec<Particle>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
    pub jump_force: f64,
    pub velocity: Velocity,
    /// Horizontal push from the last hit, decays every frame.
    pub knockback: f64,
    pub is_jumping: bool,
    pub punch_timer: u32,
    pub punch_damage: i32,
    pub health: i32,
    pub max_health: i32,
    pub coin_magnet_range: f64,
    pub facing: Facing,
    pub is_dead: bool,
    pub death: DeathAnimation,
    pub blink_timer: Option<u32>,
    pub frames_since_damage: u32,
    pub has_double_jump: bool,
    pub air_jump_used: bool,
    pub element: Option<Element>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            jump_force: PLAYER_JUMP_FORCE,
            velocity: Velocity::default(),
            knockback: 0.0,
            is_jumping: false,
            punch_timer: 0,
            punch_damage: PLAYER_PUNCH_DAMAGE,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            coin_magnet_range: PLAYER_MAGNET_RANGE,
            facing: Facing::Right,
            is_dead: false,
            death: DeathAnimation {
                active: false,
                timer: 0,
                particles: Vec::new(),
            },
            blink_timer: None,
            frames_since_damage: 0,
            has_double_jump: false,
            air_jump_used: false,
            element: None,
        }
    }
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_punching(&self) -> bool {
        self.punch_timer > 0
    }

    pub fn is_regenerating(&self) -> bool {
        self.frames_since_damage >= REGEN_DELAY_FRAMES && self.health < self.max_health
    }

    /// Dimmed on the first half of every blink period.
    pub fn blink_dimmed(&self) -> bool {
        match self.blink_timer {
            Some(t) => t % BLINK_PERIOD < BLINK_PERIOD / 2,
            None => false,
        }
    }

    pub fn health_ratio(&self) -> f64 {
        (self.health.max(0) as f64 / self.max_health as f64).clamp(0.0, 1.0)
    }

    /// Position and motion go back to the spawn point; upgrades are kept.
    pub fn reset_for_new_game(&mut self) {
        let upgraded = Player {
            speed: self.speed,
            jump_force: self.jump_force,
            punch_damage: self.punch_damage,
            max_health: self.max_health,
            health: self.max_health,
            coin_magnet_range: self.coin_magnet_range,
            has_double_jump: self.has_double_jump,
            element: self.element,
            ..Player::default()
        };
        *self = upgraded;
    }
}
