use yew::prelude::*;

use super::overlay::{Backdrop, PANEL_STYLE};
use crate::config::Settings;

/// Shared menu panel, laid out as a left-aligned column.
fn panel_style() -> String {
    format!(
        "{} display:flex; flex-direction:column; gap:14px; text-align:left;",
        PANEL_STYLE
    )
}

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub settings: Settings,
    pub on_change: Callback<Settings>,
    pub on_close: Callback<()>,
    pub on_reset_high_score: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }
    let settings = props.settings;

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_damage_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            cb.emit(Settings {
                show_damage_numbers: !settings.show_damage_numbers,
                ..settings
            })
        })
    };
    let toggle_dust_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            cb.emit(Settings {
                show_dust: !settings.show_dust,
                ..settings
            })
        })
    };
    let reset_cb = {
        let cb = props.on_reset_high_score.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if win
                    .confirm_with_message("Reset the saved high score to zero?")
                    .unwrap_or(false)
                {
                    cb.emit(());
                }
            } else {
                cb.emit(());
            }
        })
    };

    html! {<Backdrop z_index={50}>
        <div style={panel_style()}>
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={settings.show_damage_numbers} onclick={toggle_damage_cb} />
                    <span>{"Show Damage Numbers"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={settings.show_dust} onclick={toggle_dust_cb} />
                    <span>{"Show Dust Particles"}</span>
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_cb} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Reset High Score"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Settings and the high score are kept in this browser only."}</div>
        </div>
    </Backdrop>}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_matches_other_menus() {
        let style = panel_style();
        assert!(style.starts_with(PANEL_STYLE));
        // column layout overrides the centred text
        assert!(style.ends_with("text-align:left;"));
    }
}
