use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::overlay::{Backdrop, PANEL_STYLE};
use crate::model::shop::{self, SHOP_ITEMS, ShopItemDef};
use crate::model::{Player, PurchaseError, ShopItem};
use crate::util::buy_label;

const PURCHASED_MS: i32 = 2000;
const REFUSED_MS: i32 = 1000;

#[derive(Clone, Copy, PartialEq)]
enum Feedback {
    Purchased,
    NotEnoughCoins,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ShopModalProps {
    pub show: bool,
    pub coins: u32,
    pub player: Player,
    pub on_buy: Callback<ShopItem>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ShopModal(props: &ShopModalProps) -> Html {
    if !props.show {
        return html! {};
    }
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <Backdrop>
            <div style={PANEL_STYLE}>
                <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:8px;">
                    <h2 style="margin:0; font-size:22px; color:#d4af37;">{"Shop"}</h2>
                    <span style="font-variant-numeric:tabular-nums; color:#d4af37;">{ format!("🪙 {}", props.coins) }</span>
                </div>
                <div style="display:flex; flex-direction:column; gap:8px; text-align:left;">
                    { for SHOP_ITEMS.iter().map(|def| html! {
                        <ShopRow item={def.item} coins={props.coins} player={props.player.clone()} on_buy={props.on_buy.clone()} />
                    }) }
                </div>
                <div style="margin-top:14px; display:flex; justify-content:space-between; align-items:center;">
                    <span style="font-size:11px; opacity:0.6;">{"S or Esc to close"}</span>
                    <button onclick={close_cb}>{"Close"}</button>
                </div>
            </div>
        </Backdrop>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ShopRowProps {
    item: ShopItem,
    coins: u32,
    player: Player,
    on_buy: Callback<ShopItem>,
}

#[function_component]
fn ShopRow(props: &ShopRowProps) -> Html {
    let def: &ShopItemDef = props.item.def();
    let feedback = use_state(|| None::<Feedback>);
    // bumped per click so an older timeout cannot clear newer feedback
    let generation = use_mut_ref(|| 0u32);

    let onclick = {
        let feedback = feedback.clone();
        let generation = generation.clone();
        let on_buy = props.on_buy.clone();
        let item = props.item;
        let player = props.player.clone();
        let coins = props.coins;
        Callback::from(move |_| {
            let (next, ms) = match shop::check_purchase(&player, coins, item) {
                Ok(_) => (Feedback::Purchased, PURCHASED_MS),
                Err(PurchaseError::NotEnoughCoins { .. }) => (Feedback::NotEnoughCoins, REFUSED_MS),
                Err(PurchaseError::AlreadyOwned) => return,
            };
            if next == Feedback::Purchased {
                on_buy.emit(item);
            }
            feedback.set(Some(next));
            let ticket = {
                let mut g = generation.borrow_mut();
                *g = g.wrapping_add(1);
                *g
            };
            let feedback = feedback.clone();
            let generation = generation.clone();
            let clear = Closure::once_into_js(move || {
                if *generation.borrow() == ticket {
                    feedback.set(None);
                }
            });
            if let Some(win) = web_sys::window() {
                if win
                    .set_timeout_with_callback_and_timeout_and_arguments_0(clear.unchecked_ref(), ms)
                    .is_err()
                {
                    log::warn!("could not schedule shop feedback reset");
                }
            }
        })
    };

    let owned = shop::owns(&props.player, props.item);
    let (label, disabled) = match *feedback {
        Some(Feedback::Purchased) => ("Purchased!".to_string(), true),
        Some(Feedback::NotEnoughCoins) => ("Not enough coins!".to_string(), false),
        None if owned => ("Owned".to_string(), true),
        None => (buy_label(def.cost), false),
    };
    let affordable = props.coins >= def.cost;
    html! {
        <div style="display:flex; align-items:center; gap:10px; background:#1c2128; border:1px solid #30363d; border-radius:8px; padding:8px 10px;">
            <div style="flex:1; display:flex; flex-direction:column;">
                <span style="font-weight:600;">{ def.name }</span>
                <span style="font-size:12px; opacity:0.75;">{ def.description }</span>
            </div>
            <button {onclick} {disabled} style={if affordable || owned { "min-width:150px;" } else { "min-width:150px; opacity:0.6;" }}>{ label }</button>
        </div>
    }
}
