//! Core game state and the reducer that drives it.
//!
//! The model never touches the DOM. Views dispatch [`GameAction`]s and read
//! the resulting [`GameState`] snapshot.

mod combat;
mod effects;
mod enemies;
pub mod entities;
mod player;
mod rounds;
pub mod shop;

use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use yew::Reducible;

use crate::config::{self, Settings};
pub use entities::*;
pub use shop::{PurchaseError, ShopItem};

/// Keys sampled at the start of a simulation tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump_held: bool,
    /// A fresh jump press since the previous tick.
    pub jump_pressed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundState {
    pub current: u32,
    /// Enemies of this round's quota not yet spawned.
    pub enemies_remaining: u32,
    pub transition_timer: Option<u32>,
    pub spawn_timer: u32,
    pub boss_pending: bool,
}

impl RoundState {
    pub fn first() -> Self {
        Self {
            current: 1,
            enemies_remaining: config::round_quota(1),
            transition_timer: None,
            spawn_timer: 0,
            boss_pending: false,
        }
    }

    pub fn in_transition(&self) -> bool {
        self.transition_timer.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub started: bool,
    pub is_paused: bool,
    pub is_shop_open: bool,
    pub show_death_screen: bool,
    pub score: u32,
    pub coins: u32,
    pub high_score: u32,
    /// Set when the last death beat the stored high score.
    pub new_high_score: bool,
    pub player: Player,
    pub round: RoundState,
    pub enemies: Vec<Enemy>,
    pub boss: Option<Boss>,
    pub projectiles: Vec<Projectile>,
    pub coin_drops: Vec<Coin>,
    pub bursts: Vec<Burst>,
    pub graves: Vec<Grave>,
    pub dust: Vec<Particle>,
    pub damage_indicators: Vec<DamageIndicator>,
    /// Frames until the death screen opens, counted from the killing blow.
    pub death_screen_countdown: Option<u32>,
    pub settings: Settings,
    rng: Pcg32,
}

impl GameState {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            started: false,
            is_paused: false,
            is_shop_open: false,
            show_death_screen: false,
            score: 0,
            coins: 0,
            high_score: 0,
            new_high_score: false,
            player: Player::default(),
            round: RoundState::first(),
            enemies: Vec::new(),
            boss: None,
            projectiles: Vec::new(),
            coin_drops: Vec::new(),
            bursts: Vec::new(),
            graves: Vec::new(),
            dust: Vec::new(),
            damage_indicators: Vec::new(),
            death_screen_countdown: None,
            settings: Settings::default(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Applies values read back from storage; absent ones keep their defaults.
    pub fn with_saved(mut self, high_score: Option<u32>, settings: Option<Settings>) -> Self {
        if let Some(score) = high_score {
            self.high_score = score;
        }
        if let Some(settings) = settings {
            self.settings = settings;
        }
        self
    }

    /// True when ticks advance the simulation.
    pub fn is_running(&self) -> bool {
        self.started && !self.is_paused && !self.is_shop_open
    }

    pub(crate) fn rand(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    pub(crate) fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }

    fn start_game(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.round = RoundState::first();
        log::info!("game started, round {}", self.round.current);
    }

    fn restart(&mut self) {
        self.score = 0;
        self.coins = 0;
        self.round = RoundState::first();
        self.player.reset_for_new_game();
        self.enemies.clear();
        self.boss = None;
        self.projectiles.clear();
        self.coin_drops.clear();
        self.bursts.clear();
        self.graves.clear();
        self.dust.clear();
        self.damage_indicators.clear();
        self.death_screen_countdown = None;
        self.show_death_screen = false;
        self.new_high_score = false;
        self.started = false;
        self.is_paused = false;
        self.is_shop_open = false;
        log::info!("game restarted");
    }

    fn toggle_pause(&mut self) {
        if !self.started || self.show_death_screen || self.player.is_dead {
            return;
        }
        if self.is_shop_open {
            self.close_shop();
            return;
        }
        self.is_paused = !self.is_paused;
    }

    fn toggle_shop(&mut self) {
        if self.is_shop_open {
            self.close_shop();
        } else if self.started && !self.is_paused && !self.show_death_screen && !self.player.is_dead {
            self.is_shop_open = true;
            self.is_paused = true;
        }
    }

    fn close_shop(&mut self) {
        if self.is_shop_open {
            self.is_shop_open = false;
            self.is_paused = false;
        }
    }

    fn tick(&mut self, input: InputSnapshot) {
        self.update_player(input);
        self.update_player_death();
        self.update_enemies();
        self.update_boss();
        self.update_projectiles();
        self.update_coins();
        self.update_effects();
        self.update_round_transition();
        self.update_blink_and_regen();
        self.update_death_countdown();
    }

    fn update_death_countdown(&mut self) {
        let Some(left) = self.death_screen_countdown else {
            return;
        };
        if left <= 1 {
            self.death_screen_countdown = None;
            self.show_death_screen = true;
            self.is_paused = true;
        } else {
            self.death_screen_countdown = Some(left - 1);
        }
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    StartGame,
    Restart,
    TogglePause,
    ToggleShop,
    CloseShop,
    Punch,
    Tick { input: InputSnapshot },
    Purchase(ShopItem),
    ResetHighScore,
    SetSettings(Settings),
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        if let Tick { .. } = action {
            if !self.is_running() {
                return self;
            }
        }
        let mut new = (*self).clone();
        match action {
            StartGame => new.start_game(),
            Restart => new.restart(),
            TogglePause => new.toggle_pause(),
            ToggleShop => new.toggle_shop(),
            CloseShop => new.close_shop(),
            Punch => new.punch(),
            Tick { input } => new.tick(input),
            Purchase(item) => match new.purchase(item) {
                Ok(cost) => log::info!("bought {:?} for {} coins", item, cost),
                Err(e) => log::debug!("purchase of {:?} refused: {}", item, e),
            },
            ResetHighScore => {
                new.high_score = 0;
                new.new_high_score = false;
            }
            SetSettings(s) => new.settings = s,
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> GameState {
        let mut gs = GameState::with_seed(7);
        gs.start_game();
        gs
    }

    fn reduce(gs: GameState, action: GameAction) -> GameState {
        (*Rc::new(gs).reduce(action)).clone()
    }

    #[test]
    fn tick_is_a_no_op_before_start() {
        let gs = Rc::new(GameState::with_seed(1));
        let after = gs.clone().reduce(GameAction::Tick {
            input: InputSnapshot::default(),
        });
        assert!(Rc::ptr_eq(&gs, &after));
    }

    #[test]
    fn shop_pauses_and_closing_resumes() {
        let gs = reduce(running(), GameAction::ToggleShop);
        assert!(gs.is_shop_open && gs.is_paused);
        assert!(!gs.is_running());
        let gs = reduce(gs, GameAction::ToggleShop);
        assert!(!gs.is_shop_open && !gs.is_paused);
    }

    #[test]
    fn escape_closes_open_shop_instead_of_pausing() {
        let gs = reduce(running(), GameAction::ToggleShop);
        let gs = reduce(gs, GameAction::TogglePause);
        assert!(!gs.is_shop_open);
        assert!(!gs.is_paused);
    }

    #[test]
    fn shop_cannot_open_while_paused() {
        let gs = reduce(running(), GameAction::TogglePause);
        let gs = reduce(gs, GameAction::ToggleShop);
        assert!(gs.is_paused);
        assert!(!gs.is_shop_open);
    }

    #[test]
    fn pause_and_shop_ignored_on_start_menu() {
        let gs = reduce(GameState::with_seed(3), GameAction::TogglePause);
        assert!(!gs.is_paused);
        let gs = reduce(gs, GameAction::ToggleShop);
        assert!(!gs.is_shop_open);
    }

    #[test]
    fn restart_returns_to_start_menu_keeping_upgrades() {
        let mut gs = running();
        gs.score = 120;
        gs.coins = 40;
        gs.player.punch_damage = 20;
        gs.round.current = 4;
        let e = gs.make_enemy();
        gs.enemies.push(e);
        gs.coin_drops.push(Coin::new(1.0, 1.0));
        let gs = reduce(gs, GameAction::Restart);
        assert!(!gs.started);
        assert_eq!(gs.score, 0);
        assert_eq!(gs.coins, 0);
        assert_eq!(gs.round, RoundState::first());
        assert!(gs.enemies.is_empty() && gs.coin_drops.is_empty());
        assert_eq!(gs.player.punch_damage, 20);
    }

    #[test]
    fn paused_tick_keeps_the_same_snapshot() {
        let gs = Rc::new(reduce(running(), GameAction::TogglePause));
        let after = gs.clone().reduce(GameAction::Tick {
            input: InputSnapshot::default(),
        });
        assert!(Rc::ptr_eq(&gs, &after));

        let gs = Rc::new(running());
        let after = gs.clone().reduce(GameAction::Tick {
            input: InputSnapshot::default(),
        });
        assert!(!Rc::ptr_eq(&gs, &after));
    }

    #[test]
    fn saved_values_seed_a_fresh_game() {
        let quiet = Settings {
            show_damage_numbers: false,
            show_dust: true,
        };
        let gs = GameState::with_seed(1).with_saved(Some(75), Some(quiet));
        assert_eq!(gs.high_score, 75);
        assert_eq!(gs.settings, quiet);
        assert!(!gs.started);

        let gs = GameState::with_seed(1).with_saved(None, None);
        assert_eq!(gs.high_score, 0);
        assert_eq!(gs.settings, Settings::default());
    }

    #[test]
    fn reset_clears_the_record() {
        let mut gs = GameState::with_seed(1);
        gs.high_score = 50;
        gs.new_high_score = true;
        let gs = reduce(gs, GameAction::ResetHighScore);
        assert_eq!(gs.high_score, 0);
        assert!(!gs.new_high_score);
    }

    #[test]
    fn same_seed_same_game() {
        let drive = |seed| {
            let mut gs = running();
            gs.rng = Pcg32::seed_from_u64(seed);
            for _ in 0..600 {
                gs.tick(InputSnapshot::default());
            }
            gs.enemies.iter().map(|e| e.x).collect::<Vec<_>>()
        };
        assert_eq!(drive(99), drive(99));
    }
}
