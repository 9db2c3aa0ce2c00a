use yew::prelude::*;

use super::overlay::{Backdrop, PANEL_STYLE};

#[derive(Properties, PartialEq, Clone)]
pub struct PauseMenuProps {
    pub show: bool,
    pub on_resume: Callback<()>,
    pub on_restart: Callback<()>,
}

#[function_component]
pub fn PauseMenu(props: &PauseMenuProps) -> Html {
    if !props.show {
        return html! {};
    }
    let resume_cb = props.on_resume.clone();
    let resume_btn = Callback::from(move |_| resume_cb.emit(()));
    let restart_cb = props.on_restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    html! {
        <Backdrop>
            <div style={PANEL_STYLE}>
                <h2 style="margin:0 0 16px 0; color:#58a6ff;">{"Paused"}</h2>
                <div style="display:flex; gap:12px; justify-content:center;">
                    <button onclick={resume_btn}>{"Resume"}</button>
                    <button onclick={restart_btn}>{"Restart"}</button>
                </div>
                <div style="margin-top:12px; font-size:11px; opacity:0.6;">{"Press Esc to resume"}</div>
            </div>
        </Backdrop>
    }
}
