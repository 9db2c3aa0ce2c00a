use yew::prelude::*;

use crate::util::percent;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub score: u32,
    pub coins: u32,
    pub round: u32,
    /// Share of the round's quota already beaten.
    pub progress: f64,
    pub high_score: u32,
    pub shop_enabled: bool,
    pub on_toggle_shop: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn Hud(props: &HudProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:60px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let shop_cb = {
        let cb = props.on_toggle_shop.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<>
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:8px; font-size:14px; color:#e6edf3; z-index:10;">
            <div style={row_style}>
                <span style={icon_style}>{"⭐"}</span>
                <span style={label_style}>{"Score"}</span>
                <span style={value_style}>{ props.score }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"🪙"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Coins"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ props.coins }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"⚔"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Round"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ props.round }</span>
            </div>
            <div style="height:6px; background:#30363d; border-radius:3px; overflow:hidden;">
                <div style={format!("height:100%; width:{}; background:#2ea043; transition:width 0.2s;", percent(props.progress))}></div>
            </div>
            <div style="font-size:11px; opacity:0.7;">{ format!("High Score: {}", props.high_score) }</div>
        </div>
        <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px; z-index:10;">
            <button onclick={shop_cb} disabled={!props.shop_enabled}>{"Shop (S)"}</button>
            <button onclick={settings_cb}>{"Settings"}</button>
        </div>
    </>}
}
