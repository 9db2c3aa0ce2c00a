// Short-lived visuals and coin drops.
use super::{Burst, Coin, DamageIndicator, GameState, Grave, Particle};
use crate::config::*;

impl GameState {
    pub(super) fn spawn_jump_dust(&mut self, x: f64, y: f64) {
        let width = self.player.width;
        for _ in 0..15 {
            let p = Particle {
                x: x + self.rand() * width,
                y,
                vx: (self.rand() - 0.5) * 3.0,
                vy: -self.rand() * 2.0 - 1.0,
                size: self.rand() * 8.0 + 2.0,
                color: DUST_COLOR,
                alpha: 1.0,
                rotation: 0.0,
                life: 0,
                max_life: 20 + (self.rand() * 20.0) as u32,
            };
            self.dust.push(p);
        }
    }

    pub(super) fn spawn_landing_dust(&mut self, x: f64, y: f64) {
        let width = self.player.width;
        for _ in 0..20 {
            let p = Particle {
                x: x + self.rand() * width,
                y,
                vx: (self.rand() - 0.5) * 5.0,
                vy: -self.rand() * 1.5,
                size: self.rand() * 10.0 + 3.0,
                color: DUST_COLOR,
                alpha: 1.0,
                rotation: 0.0,
                life: 0,
                max_life: 15 + (self.rand() * 15.0) as u32,
            };
            self.dust.push(p);
        }
    }

    pub(super) fn spawn_grave(&mut self, x: f64) {
        self.graves.push(Grave::new(x));
    }

    /// Blood burst, grave and a single coin where an enemy fell.
    pub(super) fn spawn_death_effects(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let mut particles = Vec::with_capacity(30);
        for _ in 0..30 {
            let color = self.pick(&BLOOD_COLORS);
            particles.push(Particle {
                x: x + self.rand() * w,
                y: y + self.rand() * h,
                vx: (self.rand() - 0.5) * 8.0,
                vy: self.rand() * 2.0 + 1.0,
                size: self.rand() * 10.0 + 5.0,
                color,
                alpha: 1.0,
                rotation: self.rand() * std::f64::consts::TAU,
                life: 0,
                max_life: BURST_FRAMES,
            });
        }
        self.bursts.push(Burst {
            particles,
            timer: 0,
            max_time: BURST_FRAMES,
        });
        self.spawn_grave(x);
        self.spawn_coin(x, y);
    }

    pub(super) fn spawn_coin(&mut self, x: f64, y: f64) {
        self.coin_drops.push(Coin::new(x, y));
    }

    /// A coin dropped a little way off the given point.
    pub(super) fn spawn_coin_scattered(&mut self, x: f64, y: f64) {
        let cx = x + self.rand() * 30.0;
        let cy = y + self.rand() * 30.0;
        self.spawn_coin(cx, cy);
    }

    pub(super) fn spawn_damage_indicator(&mut self, x: f64, y: f64, value: i32) {
        self.damage_indicators.push(DamageIndicator::new(x, y, value));
    }

    pub(super) fn update_effects(&mut self) {
        self.bursts.retain_mut(Burst::step);
        self.graves.retain_mut(Grave::step);
        self.damage_indicators.retain_mut(|d| {
            d.timer += 1;
            d.y -= 1.0;
            d.timer < INDICATOR_FRAMES
        });
        self.dust.retain_mut(Particle::step);
    }

    pub(super) fn update_coins(&mut self) {
        let (cx, cy) = self.player.rect().center();
        let range = self.player.coin_magnet_range;
        let pickup = self.player.width / 2.0;
        let mut collected = 0;
        self.coin_drops.retain_mut(|coin| {
            coin.rotation += COIN_SPIN;
            let dx = cx - coin.x;
            let dy = cy - coin.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < range {
                coin.attracted = true;
                let angle = dy.atan2(dx);
                let speed = COIN_PULL_SPEED * (1.0 - distance / range);
                coin.vx = angle.cos() * speed;
                coin.vy = angle.sin() * speed;
            }
            if coin.attracted {
                coin.x += coin.vx;
                coin.y += coin.vy;
            }
            if distance < pickup + coin.radius {
                collected += 1;
                return false;
            }
            true
        });
        self.coins += collected;
    }
}
