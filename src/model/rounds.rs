use super::GameState;
use crate::config::{self, ROUND_TRANSITION_FRAMES};

impl GameState {
    /// Share of this round's quota already dealt with, in `0.0..=1.0`.
    pub fn round_progress(&self) -> f64 {
        if self.round.in_transition() {
            return 0.0;
        }
        let total = config::round_quota(self.round.current) as f64;
        let defeated = total - self.round.enemies_remaining as f64 - self.enemies.len() as f64;
        (defeated / total).clamp(0.0, 1.0)
    }

    pub(super) fn round_complete(&self) -> bool {
        self.round.enemies_remaining == 0
            && self.enemies.is_empty()
            && self.boss.is_none()
            && !self.round.boss_pending
            && !self.round.in_transition()
    }

    pub(super) fn start_round_transition(&mut self) {
        self.round.current += 1;
        self.round.enemies_remaining = config::round_quota(self.round.current);
        self.round.boss_pending = config::is_boss_round(self.round.current);
        self.round.transition_timer = Some(0);
        self.round.spawn_timer = 0;
        log::info!(
            "round {} begins: {} enemies{}",
            self.round.current,
            self.round.enemies_remaining,
            if self.round.boss_pending { " and a boss" } else { "" }
        );
    }

    pub(super) fn update_round_transition(&mut self) {
        let Some(t) = self.round.transition_timer else {
            return;
        };
        let t = t + 1;
        self.round.transition_timer = if t >= ROUND_TRANSITION_FRAMES { None } else { Some(t) };
    }

    /// Opacity of the "ROUND N" banner; fades over the first and last 30 frames.
    pub fn round_banner_alpha(&self) -> Option<f64> {
        let t = self.round.transition_timer? as f64;
        let total = ROUND_TRANSITION_FRAMES as f64;
        let alpha = if t < 30.0 {
            t / 30.0
        } else if t > total - 30.0 {
            (total - t) / 30.0
        } else {
            1.0
        };
        Some(alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Boss, GameState, Velocity};
    use crate::config::*;

    fn cleared_round() -> GameState {
        let mut gs = GameState::with_seed(2);
        gs.started = true;
        gs.round.enemies_remaining = 0;
        gs
    }

    #[test]
    fn progress_counts_defeated_enemies() {
        let mut gs = GameState::with_seed(2);
        assert_eq!(gs.round_progress(), 0.0);
        gs.round.enemies_remaining = 2;
        let e = gs.make_enemy();
        gs.enemies.push(e);
        assert!((gs.round_progress() - 2.0 / 5.0).abs() < 1e-9);
    }

    #[test]
    fn clearing_a_round_advances_after_transition() {
        let mut gs = cleared_round();
        gs.update_enemies();
        assert_eq!(gs.round.current, 2);
        assert_eq!(gs.round.enemies_remaining, round_quota(2));
        assert!(gs.round.in_transition());
        for _ in 0..ENEMY_SPAWN_INTERVAL * 2 {
            gs.update_enemies();
        }
        assert!(gs.enemies.is_empty(), "no spawns during transition");
        for _ in 0..ROUND_TRANSITION_FRAMES {
            gs.update_round_transition();
        }
        assert!(!gs.round.in_transition());
    }

    #[test]
    fn live_boss_holds_the_round() {
        let mut gs = cleared_round();
        gs.boss = Some(Boss {
            x: 600.0,
            y: GROUND_Y - BOSS_HEIGHT,
            width: BOSS_WIDTH,
            height: BOSS_HEIGHT,
            health: 10,
            max_health: 10,
            velocity: Velocity::default(),
            direction: -1.0,
            fire_cooldown: BOSS_FIRE_INTERVAL,
            hit_flash: 0,
        });
        gs.update_enemies();
        assert_eq!(gs.round.current, 1);
        gs.boss = None;
        gs.update_enemies();
        assert_eq!(gs.round.current, 2);
    }

    #[test]
    fn fifth_round_queues_a_boss() {
        let mut gs = cleared_round();
        gs.round.current = BOSS_ROUND_INTERVAL - 1;
        gs.update_enemies();
        assert_eq!(gs.round.current, BOSS_ROUND_INTERVAL);
        assert!(gs.round.boss_pending);
    }

    #[test]
    fn banner_fades_in_and_out() {
        let mut gs = cleared_round();
        assert!(gs.round_banner_alpha().is_none());
        gs.start_round_transition();
        assert_eq!(gs.round_banner_alpha(), Some(0.0));
        gs.round.transition_timer = Some(60);
        assert_eq!(gs.round_banner_alpha(), Some(1.0));
        gs.round.transition_timer = Some(105);
        assert_eq!(gs.round_banner_alpha(), Some(0.5));
    }
}
