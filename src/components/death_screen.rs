use yew::prelude::*;

use super::overlay::{Backdrop, PANEL_STYLE};

#[derive(Properties, PartialEq, Clone)]
pub struct DeathScreenProps {
    pub show: bool,
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
    pub round: u32,
    pub restart: Callback<()>,
}

#[function_component]
pub fn DeathScreen(props: &DeathScreenProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    html! {
        <Backdrop>
            <div style={format!("{} border-color:#f85149;", PANEL_STYLE)}>
                <h2 style="margin:0 0 12px 0; color:#f85149;">{"You Died"}</h2>
                <p style="margin:4px 0;">{ format!("Score: {}", props.score) }</p>
                <p style="margin:4px 0;">{ format!("Reached Round: {}", props.round) }</p>
                <p style="margin:4px 0;">{ format!("High Score: {}", props.high_score) }</p>
                { if props.new_high_score {
                    html!{ <div style="margin:10px auto 0 auto; display:inline-block; padding:4px 10px; border-radius:6px; background:#d4af37; color:#161b22; font-weight:700;">{"New High Score!"}</div> }
                } else { html!{} } }
                <div style="margin-top:16px;">
                    <button onclick={restart_btn}>{"Play Again"}</button>
                </div>
            </div>
        </Backdrop>
    }
}
