use super::{Boss, Enemy, GameState, Projectile, Velocity};
use crate::config::*;

impl GameState {
    /// Rolls a fresh enemy for the current round, standing just off-screen.
    pub(crate) fn make_enemy(&mut self) -> Enemy {
        let round = self.round.current as f64;
        let color = self.pick(&ENEMY_COLORS);
        let from_left = self.rand() > 0.5;
        let cooldown = self.roll_jump_cooldown();
        let health = 20 + (self.round.current as i32 - 1) * 5;
        let speed = 1.0 + self.rand() * 1.5 * (1.0 + round * 0.08);
        let jump_force = 8.0 + self.rand() * 4.0;
        Enemy {
            x: if from_left { -50.0 } else { WORLD_WIDTH + 50.0 },
            y: GROUND_Y - ENEMY_HEIGHT,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            speed,
            health,
            max_health: health,
            color,
            velocity: Velocity::default(),
            is_jumping: false,
            jump_force,
            jump_cooldown: cooldown,
            max_jump_cooldown: cooldown,
            direction: if from_left { 1.0 } else { -1.0 },
            hit_flash: 0,
            burn: None,
            chill_frames: 0,
        }
    }

    fn roll_jump_cooldown(&mut self) -> u32 {
        120 + (self.rand() * 180.0).floor() as u32
    }

    fn spawn_enemy(&mut self) {
        if self.round.enemies_remaining == 0 {
            return;
        }
        self.round.enemies_remaining -= 1;
        let enemy = self.make_enemy();
        self.enemies.push(enemy);
    }

    fn spawn_boss(&mut self) {
        let from_left = self.rand() > 0.5;
        let health = 200 + self.round.current as i32 * 20;
        self.boss = Some(Boss {
            x: if from_left { -BOSS_WIDTH } else { WORLD_WIDTH },
            y: GROUND_Y - BOSS_HEIGHT,
            width: BOSS_WIDTH,
            height: BOSS_HEIGHT,
            health,
            max_health: health,
            velocity: Velocity::default(),
            direction: if from_left { 1.0 } else { -1.0 },
            fire_cooldown: BOSS_FIRE_INTERVAL,
            hit_flash: 0,
        });
        self.round.boss_pending = false;
        log::info!("boss spawned on round {} with {} hp", self.round.current, health);
    }

    pub(super) fn update_enemies(&mut self) {
        if !self.round.in_transition() {
            self.round.spawn_timer += 1;
            if self.round.spawn_timer >= ENEMY_SPAWN_INTERVAL {
                if self.round.enemies_remaining > 0 {
                    self.spawn_enemy();
                    self.round.spawn_timer = 0;
                } else if self.round.boss_pending && self.boss.is_none() {
                    self.spawn_boss();
                    self.round.spawn_timer = 0;
                }
            }
            if self.round_complete() {
                self.start_round_transition();
            }
        }

        for i in (0..self.enemies.len()).rev() {
            self.step_enemy(i);
        }
    }

    fn step_enemy(&mut self, i: usize) {
        let (px, py) = (self.player.x, self.player.y);
        let jitter = self.rand() - 0.5;
        let reroll = self.roll_jump_cooldown();

        let enemy = &mut self.enemies[i];
        let dx = px - enemy.x;
        let dy = py - enemy.y;
        let distance = (dx * dx + dy * dy).sqrt();

        enemy.velocity.y += GRAVITY * ENEMY_GRAVITY_FACTOR;
        if !enemy.is_jumping && enemy.jump_cooldown == 0 {
            enemy.velocity.y = -enemy.jump_force;
            enemy.is_jumping = true;
            enemy.jump_cooldown = reroll;
            enemy.max_jump_cooldown = reroll;
        }
        if enemy.jump_cooldown > 0 {
            enemy.jump_cooldown -= 1;
        }

        let speed = if enemy.chill_frames > 0 {
            enemy.chill_frames -= 1;
            enemy.speed * CHILL_FACTOR
        } else {
            enemy.speed
        };
        if distance < ENEMY_FOLLOW_RANGE {
            if distance > 0.0 {
                enemy.direction = if dx / distance > 0.0 { 1.0 } else { -1.0 };
            }
            enemy.x += enemy.direction * speed + jitter;
        } else {
            enemy.x += enemy.direction * speed;
        }

        enemy.y += enemy.velocity.y;
        if enemy.y > GROUND_Y - enemy.height {
            enemy.y = GROUND_Y - enemy.height;
            enemy.velocity.y = 0.0;
            enemy.is_jumping = false;
        }
        if enemy.hit_flash > 0 {
            enemy.hit_flash -= 1;
        }

        let mut burn_damage = 0;
        if let Some(burn) = enemy.burn.as_mut() {
            burn.frames_left = burn.frames_left.saturating_sub(1);
            if burn.frames_left % BURN_TICK_FRAMES == 0 {
                burn_damage = BURN_DAMAGE;
            }
            if burn.frames_left == 0 {
                enemy.burn = None;
            }
        }

        let gone = (enemy.direction > 0.0 && enemy.x < -ENEMY_DESPAWN_MARGIN)
            || (enemy.direction < 0.0 && enemy.x > WORLD_WIDTH + ENEMY_DESPAWN_MARGIN);
        let rect = enemy.rect();
        let (ix, iy) = (enemy.x + enemy.width / 2.0, enemy.y);

        if burn_damage > 0 {
            enemy.health -= burn_damage;
            let dead = enemy.health <= 0;
            self.spawn_damage_indicator(ix, iy, burn_damage);
            if dead {
                self.kill_enemy(i, 0.0);
                return;
            }
        }
        if gone {
            self.enemies.remove(i);
            return;
        }

        if !self.player.is_punching() && !self.player.is_dead && self.player.rect().overlaps(&rect) {
            self.damage_player(CONTACT_DAMAGE, rect.x);
        }
    }

    pub(super) fn update_boss(&mut self) {
        let (pcx, pcy) = self.player.rect().center();
        let Some(boss) = self.boss.as_mut() else {
            return;
        };
        let (bcx, _) = boss.rect().center();
        boss.direction = if pcx > bcx { 1.0 } else { -1.0 };
        boss.x += boss.direction * BOSS_SPEED;
        boss.velocity.y += GRAVITY * ENEMY_GRAVITY_FACTOR;
        boss.y += boss.velocity.y;
        if boss.y > GROUND_Y - boss.height {
            boss.y = GROUND_Y - boss.height;
            boss.velocity.y = 0.0;
        }
        if boss.hit_flash > 0 {
            boss.hit_flash -= 1;
        }

        let mut shot = None;
        boss.fire_cooldown = boss.fire_cooldown.saturating_sub(1);
        if boss.fire_cooldown == 0 {
            boss.fire_cooldown = BOSS_FIRE_INTERVAL;
            let (sx, sy) = (bcx, boss.y + boss.height * 0.35);
            let (dx, dy) = (pcx - sx, pcy - sy);
            let len = (dx * dx + dy * dy).sqrt().max(1.0);
            shot = Some(Projectile {
                x: sx,
                y: sy,
                vx: dx / len * FIREBALL_SPEED,
                vy: dy / len * FIREBALL_SPEED,
                radius: FIREBALL_RADIUS,
                damage: FIREBALL_DAMAGE,
                age: 0,
            });
        }
        let rect = boss.rect();

        if let Some(p) = shot {
            self.projectiles.push(p);
        }
        if !self.player.is_punching() && !self.player.is_dead && self.player.rect().overlaps(&rect) {
            self.damage_player(BOSS_CONTACT_DAMAGE, rect.x + rect.w / 2.0);
        }
    }

    pub(super) fn update_projectiles(&mut self) {
        let player = self.player.rect();
        let can_hit = !self.player.is_dead;
        let mut hits = Vec::new();
        self.projectiles.retain_mut(|p| {
            p.x += p.vx;
            p.y += p.vy;
            p.age += 1;
            if can_hit && p.rect().overlaps(&player) {
                hits.push((p.damage, p.x));
                return false;
            }
            !p.off_screen()
        });
        for (damage, from_x) in hits {
            self.damage_player(damage, from_x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{GameState, InputSnapshot, Projectile};
    use crate::config::*;

    fn running() -> GameState {
        let mut gs = GameState::with_seed(33);
        gs.started = true;
        gs.player.y = GROUND_Y - gs.player.height;
        gs
    }

    #[test]
    fn enemy_stats_scale_with_round() {
        let mut gs = running();
        gs.round.current = 3;
        for _ in 0..50 {
            let e = gs.make_enemy();
            assert_eq!(e.health, 30);
            assert!(e.speed >= 1.0 && e.speed < 1.0 + 1.5 * 1.24);
            assert!((120..300).contains(&e.jump_cooldown));
            assert!(e.jump_force >= 8.0 && e.jump_force < 12.0);
            assert!(e.x == -50.0 || e.x == WORLD_WIDTH + 50.0);
            assert_eq!(e.direction > 0.0, e.x < 0.0);
        }
    }

    #[test]
    fn spawns_on_interval_until_quota_spent() {
        let mut gs = running();
        gs.player.x = WORLD_WIDTH / 2.0;
        for _ in 0..ENEMY_SPAWN_INTERVAL - 1 {
            gs.update_enemies();
        }
        assert!(gs.enemies.is_empty());
        gs.update_enemies();
        assert_eq!(gs.enemies.len(), 1);
        assert_eq!(gs.round.enemies_remaining, FIRST_ROUND_QUOTA - 1);
    }

    #[test]
    fn chasing_enemy_turns_toward_player() {
        let mut gs = running();
        let mut e = gs.make_enemy();
        e.x = gs.player.x + 200.0;
        e.y = gs.player.y;
        e.direction = 1.0;
        gs.enemies.push(e);
        gs.update_enemies();
        assert_eq!(gs.enemies[0].direction, -1.0);
    }

    #[test]
    fn contact_hurts_unless_punching() {
        let mut gs = running();
        let mut e = gs.make_enemy();
        e.x = gs.player.x + 10.0;
        e.y = gs.player.y;
        e.speed = 0.0;
        gs.enemies.push(e.clone());
        gs.update_enemies();
        assert_eq!(gs.player.health, PLAYER_MAX_HEALTH - CONTACT_DAMAGE);
        assert!(gs.player.blink_timer.is_some());

        let mut gs = running();
        gs.player.punch_timer = PUNCH_FRAMES;
        gs.enemies.push(e);
        gs.update_enemies();
        assert_eq!(gs.player.health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn burn_ticks_and_can_kill() {
        let mut gs = running();
        let mut e = gs.make_enemy();
        e.x = 700.0;
        e.health = 3;
        e.burn = Some(super::super::Burn {
            frames_left: BURN_FRAMES,
        });
        gs.player.x = 0.0;
        gs.enemies.push(e);
        for _ in 0..BURN_TICK_FRAMES {
            gs.update_enemies();
        }
        assert_eq!(gs.enemies[0].health, 1);
        for _ in 0..BURN_TICK_FRAMES {
            gs.update_enemies();
        }
        assert!(gs.enemies.is_empty());
        assert_eq!(gs.score, KILL_SCORE);
    }

    #[test]
    fn boss_arrives_after_quota_on_boss_round() {
        let mut gs = running();
        gs.round.current = BOSS_ROUND_INTERVAL;
        gs.round.enemies_remaining = 0;
        gs.round.boss_pending = true;
        gs.round.spawn_timer = ENEMY_SPAWN_INTERVAL - 1;
        gs.update_enemies();
        let boss = gs.boss.as_ref().expect("boss spawned");
        assert_eq!(boss.health, 200 + BOSS_ROUND_INTERVAL as i32 * 20);
        assert!(!gs.round.boss_pending);
        assert!(!gs.round.in_transition());
    }

    #[test]
    fn boss_fires_at_player() {
        let mut gs = running();
        gs.round.boss_pending = true;
        gs.round.enemies_remaining = 0;
        gs.round.spawn_timer = ENEMY_SPAWN_INTERVAL - 1;
        gs.update_enemies();
        for _ in 0..BOSS_FIRE_INTERVAL {
            gs.update_boss();
        }
        assert_eq!(gs.projectiles.len(), 1);
        let shot = &gs.projectiles[0];
        let speed = (shot.vx * shot.vx + shot.vy * shot.vy).sqrt();
        assert!((speed - FIREBALL_SPEED).abs() < 1e-9);
        let boss_cx = gs.boss.as_ref().unwrap().x + BOSS_WIDTH / 2.0;
        assert_eq!(shot.vx > 0.0, gs.player.x > boss_cx);
    }

    #[test]
    fn fireball_hits_once_and_despawns() {
        let mut gs = running();
        let (cx, cy) = gs.player.rect().center();
        gs.projectiles.push(Projectile {
            x: cx - 20.0,
            y: cy,
            vx: 4.0,
            vy: 0.0,
            radius: FIREBALL_RADIUS,
            damage: FIREBALL_DAMAGE,
            age: 0,
        });
        gs.projectiles.push(Projectile {
            x: WORLD_WIDTH + 5.0,
            y: 20.0,
            vx: 4.0,
            vy: 0.0,
            radius: FIREBALL_RADIUS,
            damage: FIREBALL_DAMAGE,
            age: 0,
        });
        gs.update_projectiles();
        assert_eq!(gs.player.health, PLAYER_MAX_HEALTH - FIREBALL_DAMAGE);
        gs.update_projectiles();
        assert!(gs.projectiles.is_empty());
    }

    /// An enemy far from the player on flat ground that will not jump soon.
    fn idle_enemy(gs: &mut GameState, x: f64, direction: f64) -> super::super::Enemy {
        let mut e = gs.make_enemy();
        e.x = x;
        e.direction = direction;
        e.speed = 2.0;
        e.jump_cooldown = 1000;
        e.max_jump_cooldown = 1000;
        e
    }

    #[test]
    fn enemies_past_the_far_edge_despawn() {
        let mut gs = running();
        gs.player.x = WORLD_WIDTH / 2.0;
        let e = idle_enemy(&mut gs, -ENEMY_DESPAWN_MARGIN - 20.0, 1.0);
        gs.enemies.push(e);
        let e = idle_enemy(&mut gs, WORLD_WIDTH + ENEMY_DESPAWN_MARGIN + 20.0, -1.0);
        gs.enemies.push(e);
        // still walking in from its spawn point
        let e = idle_enemy(&mut gs, -50.0, 1.0);
        gs.enemies.push(e);
        gs.update_enemies();
        assert_eq!(gs.enemies.len(), 1);
        assert_eq!(gs.enemies[0].x, -48.0);
        assert_eq!(gs.score, 0);
    }

    #[test]
    fn chill_halves_speed_until_it_wears_off() {
        let mut gs = running();
        gs.player.x = 0.0;
        let mut e = idle_enemy(&mut gs, 400.0, 1.0);
        e.chill_frames = 1;
        gs.enemies.push(e);
        gs.update_enemies();
        assert_eq!(gs.enemies[0].x, 401.0);
        assert_eq!(gs.enemies[0].chill_frames, 0);
        gs.update_enemies();
        assert_eq!(gs.enemies[0].x, 403.0);
    }

    #[test]
    fn contact_knockback_pushes_away_and_decays() {
        let mut gs = running();
        gs.player.x = 400.0;
        let mut e = idle_enemy(&mut gs, 410.0, -1.0);
        e.speed = 0.0;
        e.y = gs.player.y;
        gs.enemies.push(e);
        gs.update_enemies();
        assert_eq!(gs.player.knockback, -KNOCKBACK);

        gs.enemies.clear();
        gs.update_player(InputSnapshot::default());
        assert!((gs.player.x - (400.0 - KNOCKBACK)).abs() < 1e-9);
        assert!((gs.player.knockback + KNOCKBACK * KNOCKBACK_DECAY).abs() < 1e-9);
        gs.update_player(InputSnapshot::default());
        let expected = 400.0 - KNOCKBACK - KNOCKBACK * KNOCKBACK_DECAY;
        assert!((gs.player.x - expected).abs() < 1e-9);
        for _ in 0..30 {
            gs.update_player(InputSnapshot::default());
        }
        assert_eq!(gs.player.knockback, 0.0);
    }

    #[test]
    fn enemy_jumps_when_cooldown_runs_out() {
        let mut gs = running();
        gs.player.x = 0.0;
        let mut e = idle_enemy(&mut gs, 600.0, 1.0);
        e.jump_cooldown = 0;
        e.y = GROUND_Y - e.height;
        let force = e.jump_force;
        gs.enemies.push(e);
        gs.update_enemies();
        let e = &gs.enemies[0];
        assert!(e.is_jumping);
        assert_eq!(e.velocity.y, -force);
        assert!((120..300).contains(&e.max_jump_cooldown));
        assert_eq!(e.jump_cooldown, e.max_jump_cooldown - 1);
        // airborne, so no second jump until it lands
        gs.enemies[0].jump_cooldown = 0;
        gs.update_enemies();
        assert!(gs.enemies[0].velocity.y > -force);
    }

    #[test]
    fn jump_marker_shows_in_last_stretch_of_cooldown() {
        let mut gs = running();
        let mut e = idle_enemy(&mut gs, 400.0, 1.0);
        e.max_jump_cooldown = 200;
        e.jump_cooldown = 61;
        assert!(!e.about_to_jump());
        e.jump_cooldown = 59;
        assert!(e.about_to_jump());
        e.is_jumping = true;
        assert!(!e.about_to_jump());
    }

    #[test]
    fn enemies_keep_moving_while_player_is_dying() {
        let mut gs = running();
        let mut e = gs.make_enemy();
        e.x = 600.0;
        e.direction = -1.0;
        gs.enemies.push(e);
        gs.damage_player(1000, 0.0);
        let before = gs.enemies[0].x;
        gs.tick(InputSnapshot::default());
        assert_ne!(gs.enemies[0].x, before);
    }
}
