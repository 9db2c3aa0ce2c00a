//! Between-fight upgrades bought with coins.

use thiserror::Error;

use super::{Element, GameState, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShopItem {
    Strength,
    Speed,
    Health,
    Magnet,
    DoubleJump,
    FireFists,
    IceFists,
}

pub struct ShopItemDef {
    pub item: ShopItem,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u32,
}

pub const SHOP_ITEMS: &[ShopItemDef] = &[
    ShopItemDef {
        item: ShopItem::Strength,
        name: "Strength",
        description: "Punch damage +5",
        cost: 10,
    },
    ShopItemDef {
        item: ShopItem::Speed,
        name: "Speed",
        description: "Move 10% faster",
        cost: 15,
    },
    ShopItemDef {
        item: ShopItem::Health,
        name: "Health",
        description: "Max health +20",
        cost: 20,
    },
    ShopItemDef {
        item: ShopItem::Magnet,
        name: "Coin Magnet",
        description: "Pull coins from further away",
        cost: 10,
    },
    ShopItemDef {
        item: ShopItem::DoubleJump,
        name: "Double Jump",
        description: "Jump again in mid-air",
        cost: 25,
    },
    ShopItemDef {
        item: ShopItem::FireFists,
        name: "Fire Fists",
        description: "Punches set enemies alight",
        cost: 30,
    },
    ShopItemDef {
        item: ShopItem::IceFists,
        name: "Ice Fists",
        description: "Punches slow enemies down",
        cost: 30,
    },
];

impl ShopItem {
    pub fn def(self) -> &'static ShopItemDef {
        // every variant has an entry in SHOP_ITEMS
        SHOP_ITEMS
            .iter()
            .find(|d| d.item == self)
            .unwrap_or(&SHOP_ITEMS[0])
    }

    pub fn cost(self) -> u32 {
        self.def().cost
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("need {cost} coins, have {have}")]
    NotEnoughCoins { cost: u32, have: u32 },
    #[error("already owned")]
    AlreadyOwned,
}

pub fn owns(player: &Player, item: ShopItem) -> bool {
    match item {
        ShopItem::DoubleJump => player.has_double_jump,
        ShopItem::FireFists => player.element == Some(Element::Fire),
        ShopItem::IceFists => player.element == Some(Element::Ice),
        _ => false,
    }
}

pub fn check_purchase(player: &Player, coins: u32, item: ShopItem) -> Result<u32, PurchaseError> {
    if owns(player, item) {
        return Err(PurchaseError::AlreadyOwned);
    }
    let cost = item.cost();
    if coins < cost {
        return Err(PurchaseError::NotEnoughCoins { cost, have: coins });
    }
    Ok(cost)
}

fn apply(player: &mut Player, item: ShopItem) {
    match item {
        ShopItem::Strength => player.punch_damage += 5,
        ShopItem::Speed => player.speed *= 1.1,
        ShopItem::Health => {
            player.max_health += 20;
            player.health += 20;
        }
        ShopItem::Magnet => player.coin_magnet_range += 50.0,
        ShopItem::DoubleJump => player.has_double_jump = true,
        ShopItem::FireFists => player.element = Some(Element::Fire),
        ShopItem::IceFists => player.element = Some(Element::Ice),
    }
}

impl GameState {
    /// Spends coins on an upgrade; returns the price paid.
    pub fn purchase(&mut self, item: ShopItem) -> Result<u32, PurchaseError> {
        let cost = check_purchase(&self.player, self.coins, item)?;
        self.coins -= cost;
        apply(&mut self.player, item);
        Ok(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::*;

    #[test]
    fn every_item_has_a_definition() {
        for item in [
            ShopItem::Strength,
            ShopItem::Speed,
            ShopItem::Health,
            ShopItem::Magnet,
            ShopItem::DoubleJump,
            ShopItem::FireFists,
            ShopItem::IceFists,
        ] {
            assert_eq!(item.def().item, item);
        }
    }

    #[test]
    fn purchase_deducts_and_upgrades() {
        let mut gs = GameState::with_seed(4);
        gs.coins = 50;
        assert_eq!(gs.purchase(ShopItem::Strength), Ok(10));
        assert_eq!(gs.player.punch_damage, PLAYER_PUNCH_DAMAGE + 5);
        assert_eq!(gs.purchase(ShopItem::Health), Ok(20));
        assert_eq!(gs.player.max_health, PLAYER_MAX_HEALTH + 20);
        assert_eq!(gs.player.health, PLAYER_MAX_HEALTH + 20);
        assert_eq!(gs.purchase(ShopItem::Speed), Ok(15));
        assert!((gs.player.speed - PLAYER_SPEED * 1.1).abs() < 1e-9);
        assert_eq!(gs.coins, 5);
    }

    #[test]
    fn refuses_when_short_of_coins() {
        let mut gs = GameState::with_seed(4);
        gs.coins = 9;
        assert_eq!(
            gs.purchase(ShopItem::Strength),
            Err(PurchaseError::NotEnoughCoins { cost: 10, have: 9 })
        );
        assert_eq!(gs.coins, 9);
        assert_eq!(gs.player.punch_damage, PLAYER_PUNCH_DAMAGE);
    }

    #[test]
    fn one_time_upgrades_and_element_swap() {
        let mut gs = GameState::with_seed(4);
        gs.coins = 200;
        gs.purchase(ShopItem::DoubleJump).unwrap();
        assert_eq!(gs.purchase(ShopItem::DoubleJump), Err(PurchaseError::AlreadyOwned));
        gs.purchase(ShopItem::FireFists).unwrap();
        assert_eq!(gs.player.element, Some(Element::Fire));
        gs.purchase(ShopItem::IceFists).unwrap();
        assert_eq!(gs.player.element, Some(Element::Ice));
        assert_eq!(gs.coins, 200 - 25 - 30 - 30);
    }
}
