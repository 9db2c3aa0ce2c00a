use super::{Burn, Element, Facing, GameState, Rect};
use crate::config::*;

/// Where a target sits relative to the punch lane, if it is inside it.
///
/// Returns the proximity factor, one at the player's knuckles and falling to
/// zero at full reach. Targets overlapping the player score above one.
pub fn punch_proximity(player: &Rect, facing: Facing, target: &Rect) -> Option<f64> {
    if (target.y - player.y).abs() >= player.h {
        return None;
    }
    let distance = match facing {
        Facing::Right => {
            if target.x > player.x && target.x < player.right() + PUNCH_RANGE {
                target.x - player.right()
            } else {
                return None;
            }
        }
        Facing::Left => {
            if target.right() < player.x && target.right() > player.x - PUNCH_RANGE {
                player.x - target.right()
            } else {
                return None;
            }
        }
    };
    Some(1.0 - distance / PUNCH_RANGE)
}

pub fn punch_damage(base: i32, proximity: f64) -> i32 {
    (base as f64 * (1.0 + proximity)).ceil() as i32
}

impl GameState {
    pub(super) fn punch(&mut self) {
        if !self.is_running() || self.player.is_dead || self.player.is_punching() {
            return;
        }
        self.player.punch_timer = PUNCH_FRAMES;
        let reach = self.player.rect();
        let facing = self.player.facing;
        let base = self.player.punch_damage;
        let element = self.player.element;

        let mut i = 0;
        while i < self.enemies.len() {
            let Some(proximity) = punch_proximity(&reach, facing, &self.enemies[i].rect()) else {
                i += 1;
                continue;
            };
            let damage = punch_damage(base, proximity);
            let enemy = &mut self.enemies[i];
            enemy.health -= damage;
            enemy.hit_flash = HIT_FLASH_FRAMES;
            match element {
                Some(Element::Fire) => {
                    enemy.burn = Some(Burn {
                        frames_left: BURN_FRAMES,
                    })
                }
                Some(Element::Ice) => enemy.chill_frames = CHILL_FRAMES,
                None => {}
            }
            let (ix, iy) = (enemy.x + enemy.width / 2.0, enemy.y);
            let dead = enemy.health <= 0;
            self.spawn_damage_indicator(ix, iy, damage);
            if dead {
                self.kill_enemy(i, proximity);
            } else {
                i += 1;
            }
        }

        let boss_rect = self.boss.as_ref().map(|b| b.rect());
        if let Some(proximity) = boss_rect.and_then(|r| punch_proximity(&reach, facing, &r)) {
            self.hit_boss(punch_damage(base, proximity));
        }
    }

    /// Removes the enemy at `index`, paying out score and coins.
    pub(super) fn kill_enemy(&mut self, index: usize, proximity: f64) {
        let enemy = self.enemies.remove(index);
        self.score += KILL_SCORE;
        self.spawn_death_effects(enemy.x, enemy.y, enemy.width, enemy.height);
        let extra = (proximity * 2.0).floor().max(0.0) as u32;
        for _ in 0..extra {
            self.spawn_coin_scattered(enemy.x, enemy.y);
        }
    }

    pub(super) fn hit_boss(&mut self, damage: i32) {
        let Some(boss) = self.boss.as_mut() else {
            return;
        };
        boss.health -= damage;
        boss.hit_flash = HIT_FLASH_FRAMES;
        let (ix, iy) = (boss.x + boss.width / 2.0, boss.y);
        let dead = boss.health <= 0;
        self.spawn_damage_indicator(ix, iy, damage);
        if dead {
            if let Some(boss) = self.boss.take() {
                self.score += BOSS_KILL_SCORE;
                self.spawn_death_effects(boss.x, boss.y, boss.width, boss.height);
                for _ in 1..BOSS_COIN_DROP {
                    self.spawn_coin_scattered(boss.x + boss.width / 2.0, boss.y + boss.height / 2.0);
                }
                log::info!("boss defeated on round {}", self.round.current);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Boss, Velocity};
    use super::*;

    fn armed() -> GameState {
        let mut gs = GameState::with_seed(21);
        gs.started = true;
        gs.player.x = 300.0;
        gs.player.y = GROUND_Y - gs.player.height;
        gs
    }

    fn enemy_at(gs: &mut GameState, x: f64) {
        let mut e = gs.make_enemy();
        e.x = x;
        e.y = GROUND_Y - e.height;
        gs.enemies.push(e);
    }

    #[test]
    fn proximity_falls_off_with_reach() {
        let p = Rect::new(100.0, 100.0, 50.0, 50.0);
        let touching = Rect::new(150.5, 100.0, 40.0, 50.0);
        let far = Rect::new(230.0, 100.0, 40.0, 50.0);
        assert!(punch_proximity(&p, Facing::Right, &touching).unwrap() > 0.99);
        let f = punch_proximity(&p, Facing::Right, &far).unwrap();
        assert!((f - (1.0 - 80.0 / 90.0)).abs() < 1e-9);
        assert!(punch_proximity(&p, Facing::Left, &far).is_none());
        assert!(punch_proximity(&p, Facing::Right, &Rect::new(241.0, 100.0, 40.0, 50.0)).is_none());
        let left = Rect::new(20.0, 100.0, 40.0, 50.0);
        let f = punch_proximity(&p, Facing::Left, &left).unwrap();
        assert!((f - (1.0 - 40.0 / 90.0)).abs() < 1e-9);
        let above = Rect::new(160.0, 40.0, 40.0, 50.0);
        assert!(punch_proximity(&p, Facing::Right, &above).is_none());
    }

    #[test]
    fn close_punches_hit_harder() {
        assert_eq!(punch_damage(10, 1.0), 20);
        assert_eq!(punch_damage(10, 0.0), 10);
        assert_eq!(punch_damage(10, 0.55), 16);
    }

    #[test]
    fn punch_lands_once_and_flashes() {
        let mut gs = armed();
        enemy_at(&mut gs, 400.0);
        let before = gs.enemies[0].health;
        gs.punch();
        let e = &gs.enemies[0];
        assert!(e.health < before);
        assert_eq!(e.hit_flash, HIT_FLASH_FRAMES);
        assert_eq!(gs.damage_indicators.len(), 1);
        gs.punch();
        assert_eq!(gs.damage_indicators.len(), 1, "still punching");
    }

    #[test]
    fn kill_pays_score_and_coins() {
        let mut gs = armed();
        enemy_at(&mut gs, 352.0);
        gs.enemies[0].health = 1;
        gs.punch();
        assert!(gs.enemies.is_empty());
        assert_eq!(gs.score, KILL_SCORE);
        // proximity is just under 1, so one bonus coin on top of the drop
        assert_eq!(gs.coin_drops.len(), 2);
        assert_eq!(gs.graves.len(), 1);
        assert_eq!(gs.bursts.len(), 1);
    }

    #[test]
    fn punch_ignored_while_paused() {
        let mut gs = armed();
        enemy_at(&mut gs, 400.0);
        gs.is_paused = true;
        gs.punch();
        assert!(!gs.player.is_punching());
        assert!(gs.damage_indicators.is_empty());
    }

    #[test]
    fn elemental_fists_apply_status() {
        let mut gs = armed();
        gs.player.element = Some(Element::Fire);
        enemy_at(&mut gs, 400.0);
        gs.enemies[0].health = 1000;
        gs.punch();
        assert!(gs.enemies[0].burn.is_some());

        let mut gs = armed();
        gs.player.element = Some(Element::Ice);
        enemy_at(&mut gs, 400.0);
        gs.enemies[0].health = 1000;
        gs.punch();
        assert_eq!(gs.enemies[0].chill_frames, CHILL_FRAMES);
    }

    #[test]
    fn boss_kill_drops_a_pile_of_coins() {
        let mut gs = armed();
        gs.boss = Some(Boss {
            x: 360.0,
            y: GROUND_Y - BOSS_HEIGHT,
            width: BOSS_WIDTH,
            height: BOSS_HEIGHT,
            health: 5,
            max_health: 300,
            velocity: Velocity::default(),
            direction: -1.0,
            fire_cooldown: BOSS_FIRE_INTERVAL,
            hit_flash: 0,
        });
        gs.punch();
        assert!(gs.boss.is_none());
        assert_eq!(gs.score, BOSS_KILL_SCORE);
        assert_eq!(gs.coin_drops.len() as u32, BOSS_COIN_DROP);
    }
}
