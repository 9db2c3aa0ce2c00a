use super::run_view::RunView;
use crate::model::{GameAction, GameState};
use crate::storage;
use yew::prelude::*;

/// Fresh game seeded from the clock, with saved high score and settings applied.
fn initial_state() -> GameState {
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let seed = (js_sys::Date::now() as u64) ^ (noise << 32);
    let high_score = storage::load_high_score().unwrap_or_else(|e| {
        log::warn!("high score not loaded: {}", e);
        None
    });
    let settings = storage::load_settings().unwrap_or_else(|e| {
        log::warn!("settings not loaded, using defaults: {}", e);
        None
    });
    let gs = GameState::with_seed(seed).with_saved(high_score, settings);
    log::debug!("loaded high score {}, settings {:?}", gs.high_score, gs.settings);
    gs
}

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(initial_state);

    // Persist high score changes
    {
        let high_score = game.high_score;
        use_effect_with(high_score, move |_| {
            let res = if high_score == 0 {
                storage::clear_high_score()
            } else {
                storage::save_high_score(high_score)
            };
            if let Err(e) = res {
                log::warn!("high score not saved: {}", e);
            }
            || ()
        });
    }
    // Persist settings changes
    {
        let settings = game.settings;
        use_effect_with(settings, move |_| {
            if let Err(e) = storage::save_settings(&settings) {
                log::warn!("settings not saved: {}", e);
            }
            || ()
        });
    }

    let reset_high_score = {
        let game = game.clone();
        Callback::from(move |()| {
            log::info!("high score reset");
            game.dispatch(GameAction::ResetHighScore);
        })
    };

    html! { <RunView game={game} on_reset_high_score={reset_high_score} /> }
}
