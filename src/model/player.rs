use super::{GameState, InputSnapshot, Particle};
use crate::config::*;

impl GameState {
    pub(super) fn update_player(&mut self, input: InputSnapshot) {
        let alive = !self.player.is_dead;
        let p = &mut self.player;
        if p.punch_timer > 0 {
            p.punch_timer -= 1;
        }
        p.velocity.x = 0.0;
        if alive && input.left {
            p.velocity.x = -p.speed;
            p.facing = super::Facing::Left;
        }
        if alive && input.right {
            p.velocity.x = p.speed;
            p.facing = super::Facing::Right;
        }

        let mut jumped = false;
        if alive && input.jump_held && !p.is_jumping {
            p.velocity.y = -p.jump_force;
            p.is_jumping = true;
            jumped = true;
        } else if alive && input.jump_pressed && p.is_jumping && p.has_double_jump && !p.air_jump_used {
            p.velocity.y = -p.jump_force * DOUBLE_JUMP_FACTOR;
            p.air_jump_used = true;
            jumped = true;
        }

        p.velocity.y += GRAVITY;
        p.x += p.velocity.x + p.knockback;
        p.y += p.velocity.y;
        p.knockback *= KNOCKBACK_DECAY;
        if p.knockback.abs() < 0.05 {
            p.knockback = 0.0;
        }

        let mut landed = false;
        if p.y > GROUND_Y - p.height {
            p.y = GROUND_Y - p.height;
            p.velocity.y = 0.0;
            if p.is_jumping {
                p.is_jumping = false;
                p.air_jump_used = false;
                landed = true;
            }
        }
        p.x = p.x.clamp(0.0, WORLD_WIDTH - p.width);

        let (feet_x, feet_y) = (p.x, p.y + p.height);
        if jumped {
            self.spawn_jump_dust(feet_x, feet_y);
        }
        if landed {
            self.spawn_landing_dust(feet_x, feet_y);
        }
    }

    /// Applies a hit to the player; returns true if this hit killed them.
    pub(super) fn damage_player(&mut self, amount: i32, from_x: f64) -> bool {
        let p = &mut self.player;
        if p.is_dead {
            return false;
        }
        p.health -= amount;
        p.frames_since_damage = 0;
        p.blink_timer = Some(0);
        p.knockback = if p.x < from_x { -KNOCKBACK } else { KNOCKBACK };
        p.velocity.y = -5.0;
        if p.health <= 0 {
            self.start_player_death();
            return true;
        }
        false
    }

    fn start_player_death(&mut self) {
        self.player.is_dead = true;
        self.player.health = 0;
        self.player.punch_timer = 0;
        self.player.death.active = true;
        self.player.death.timer = 0;
        let (px, py, pw, ph) = (self.player.x, self.player.y, self.player.width, self.player.height);
        let mut particles = Vec::with_capacity(40);
        for _ in 0..40 {
            let color = self.pick(&BLOOD_COLORS);
            particles.push(Particle {
                x: px + self.rand() * pw,
                y: py + self.rand() * ph,
                vx: (self.rand() - 0.5) * 12.0,
                vy: (self.rand() - 0.5) * 12.0,
                size: self.rand() * 15.0 + 5.0,
                color,
                alpha: 1.0,
                rotation: self.rand() * std::f64::consts::TAU,
                life: 0,
                max_life: PLAYER_DEATH_FRAMES,
            });
        }
        self.player.death.particles = particles;
        self.spawn_grave(px);
        self.death_screen_countdown = Some(DEATH_SCREEN_DELAY);
        if self.score > self.high_score {
            self.high_score = self.score;
            self.new_high_score = true;
            log::info!("new high score: {}", self.score);
        }
        log::info!(
            "player died on round {} with score {}",
            self.round.current,
            self.score
        );
    }

    pub(super) fn update_player_death(&mut self) {
        let death = &mut self.player.death;
        if !death.active {
            return;
        }
        death.timer += 1;
        let fade = 1.0 - death.timer as f64 / PLAYER_DEATH_FRAMES as f64;
        for p in &mut death.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += PARTICLE_GRAVITY;
            p.alpha = fade;
            p.size *= 0.97;
        }
        if death.timer >= PLAYER_DEATH_FRAMES {
            death.active = false;
        }
    }

    pub(super) fn update_blink_and_regen(&mut self) {
        let p = &mut self.player;
        if let Some(t) = p.blink_timer {
            let t = t + 1;
            p.blink_timer = if t >= BLINK_FRAMES { None } else { Some(t) };
        }
        if p.blink_timer.is_none() && !p.is_dead {
            p.frames_since_damage = p.frames_since_damage.saturating_add(1);
            if p.frames_since_damage >= REGEN_DELAY_FRAMES && p.health < p.max_health {
                p.health = (p.health + REGEN_PER_FRAME).min(p.max_health);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{GameState, InputSnapshot};
    use crate::config::*;

    fn grounded() -> GameState {
        let mut gs = GameState::with_seed(11);
        gs.started = true;
        gs.player.y = GROUND_Y - gs.player.height;
        gs
    }

    fn held(left: bool, right: bool, jump: bool) -> InputSnapshot {
        InputSnapshot {
            left,
            right,
            jump_held: jump,
            jump_pressed: false,
        }
    }

    #[test]
    fn walks_and_clamps_to_world() {
        let mut gs = grounded();
        gs.update_player(held(false, true, false));
        assert_eq!(gs.player.x, PLAYER_START_X + PLAYER_SPEED);
        gs.player.x = 2.0;
        gs.update_player(held(true, false, false));
        assert_eq!(gs.player.x, 0.0);
        assert_eq!(gs.player.facing, super::super::Facing::Left);
    }

    #[test]
    fn jump_kicks_up_dust_and_lands() {
        let mut gs = grounded();
        gs.update_player(held(false, false, true));
        assert!(gs.player.is_jumping);
        assert_eq!(gs.dust.len(), 15);
        for _ in 0..60 {
            gs.update_player(InputSnapshot::default());
        }
        assert!(!gs.player.is_jumping);
        assert_eq!(gs.player.y, GROUND_Y - gs.player.height);
        assert_eq!(gs.dust.len(), 35);
    }

    #[test]
    fn air_jump_needs_upgrade_and_fresh_press() {
        let press = InputSnapshot {
            jump_held: true,
            jump_pressed: true,
            ..Default::default()
        };
        let mut gs = grounded();
        gs.update_player(press);
        let vy = gs.player.velocity.y;
        gs.update_player(press);
        assert!(gs.player.velocity.y > vy, "no air jump without upgrade");

        let mut gs = grounded();
        gs.player.has_double_jump = true;
        gs.update_player(press);
        gs.update_player(press);
        assert!(gs.player.air_jump_used);
        assert!(gs.player.velocity.y < -PLAYER_JUMP_FORCE * DOUBLE_JUMP_FACTOR + 1.0);
        let vy = gs.player.velocity.y;
        gs.update_player(press);
        assert!(gs.player.velocity.y > vy, "only one air jump");
    }

    #[test]
    fn hit_blinks_then_regen_waits_for_delay() {
        let mut gs = grounded();
        gs.damage_player(30, gs.player.x + 10.0);
        assert_eq!(gs.player.health, 70);
        assert!(gs.player.knockback < 0.0);
        for _ in 0..BLINK_FRAMES {
            gs.update_blink_and_regen();
        }
        assert!(gs.player.blink_timer.is_none());
        // the frame the blink ends already counts toward the delay
        for _ in 0..REGEN_DELAY_FRAMES - 2 {
            gs.update_blink_and_regen();
        }
        assert_eq!(gs.player.health, 70);
        gs.update_blink_and_regen();
        assert_eq!(gs.player.health, 71);
        for _ in 0..100 {
            gs.update_blink_and_regen();
        }
        assert_eq!(gs.player.health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn lethal_hit_starts_death_and_records_high_score() {
        let mut gs = grounded();
        gs.score = 90;
        gs.high_score = 40;
        assert!(gs.damage_player(200, 0.0));
        assert!(gs.player.is_dead);
        assert_eq!(gs.player.death.particles.len(), 40);
        assert_eq!(gs.graves.len(), 1);
        assert_eq!(gs.high_score, 90);
        assert!(gs.new_high_score);
        assert!(!gs.damage_player(5, 0.0));
    }

    #[test]
    fn death_screen_opens_after_delay() {
        let mut gs = grounded();
        gs.damage_player(500, 0.0);
        for _ in 0..DEATH_SCREEN_DELAY - 1 {
            gs.tick(InputSnapshot::default());
        }
        assert!(!gs.show_death_screen);
        gs.tick(InputSnapshot::default());
        assert!(gs.show_death_screen);
        assert!(gs.is_paused);
        assert!(!gs.player.death.active);
    }
}
