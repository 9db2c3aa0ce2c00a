// Held keyboard keys, sampled by the simulation interval.
use std::collections::HashSet;

use crate::model::InputSnapshot;

const LEFT_KEYS: [&str; 2] = ["a", "arrowleft"];
const RIGHT_KEYS: [&str; 2] = ["d", "arrowright"];
const JUMP_KEYS: [&str; 2] = [" ", "arrowup"];

#[derive(Debug, Default, Clone)]
pub struct KeyState {
    held: HashSet<String>,
    jump_latched: bool,
}

pub fn is_jump_key(key: &str) -> bool {
    JUMP_KEYS.contains(&key)
}

/// Keys the page should not react to (scrolling on space and arrows).
pub fn is_game_key(key: &str) -> bool {
    LEFT_KEYS.contains(&key) || RIGHT_KEYS.contains(&key) || JUMP_KEYS.contains(&key) || key == "arrowdown"
}

impl KeyState {
    pub fn key_down(&mut self, key: &str, repeat: bool) {
        let key = key.to_lowercase();
        if is_jump_key(&key) && !repeat && !self.held.contains(&key) {
            self.jump_latched = true;
        }
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&key.to_lowercase());
    }

    /// Drops everything, e.g. when the window loses focus mid-press.
    pub fn clear(&mut self) {
        self.held.clear();
        self.jump_latched = false;
    }

    fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.held.contains(*k))
    }

    /// Current input for one tick; consumes the jump edge.
    pub fn take_snapshot(&mut self) -> InputSnapshot {
        let snap = InputSnapshot {
            left: self.any_held(&LEFT_KEYS),
            right: self.any_held(&RIGHT_KEYS),
            jump_held: self.any_held(&JUMP_KEYS),
            jump_pressed: self.jump_latched,
        };
        self.jump_latched = false;
        snap
    }
}
