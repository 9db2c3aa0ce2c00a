use yew::prelude::*;

use super::overlay::{Backdrop, PANEL_STYLE};

#[derive(Properties, PartialEq, Clone)]
pub struct StartMenuProps {
    pub show: bool,
    pub high_score: u32,
    pub on_start: Callback<()>,
}

#[function_component(StartMenu)]
pub fn start_menu(props: &StartMenuProps) -> Html {
    if !props.show {
        return html! {};
    }
    let start_btn = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <Backdrop>
            <div style={PANEL_STYLE}>
                <h1 style="margin:0 0 8px 0; font-size:32px; color:#e67e22;">{"Monkey Brawler"}</h1>
                <p style="margin:4px 0 14px 0; opacity:0.85;">{"Punch your way through wave after wave. Grab the coins, buy upgrades, survive."}</p>
                <ul style="margin:0 0 14px 18px; padding:0; text-align:left; list-style:disc; display:flex; flex-direction:column; gap:4px; font-size:14px;">
                    <li>{"A / D or ← / → to move"}</li>
                    <li>{"Space or ↑ to jump"}</li>
                    <li>{"J to punch, closer hits land harder"}</li>
                    <li>{"S opens the shop, Esc pauses"}</li>
                </ul>
                { if props.high_score > 0 {
                    html!{ <p style="margin:0 0 12px 0; color:#d4af37;">{ format!("High Score: {}", props.high_score) }</p> }
                } else { html!{} } }
                <button onclick={start_btn} style="padding:8px 24px; font-size:16px;">{"Start Game"}</button>
            </div>
        </Backdrop>
    }
}
