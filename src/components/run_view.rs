use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Window};
use yew::prelude::*;

use crate::config::{Settings, WORLD_HEIGHT, WORLD_WIDTH};
use crate::model::{GameAction, GameState, ShopItem};
use crate::render;
use crate::state::keys::is_game_key;
use crate::state::{Background, KeyState, Viewport};

use super::{
    death_screen::DeathScreen, hud::Hud, pause_menu::PauseMenu, settings_modal::SettingsModal,
    shop_modal::ShopModal, start_menu::StartMenu,
};

const SIM_TICK_MS: i32 = 16;

#[derive(Properties, PartialEq, Clone)]
pub struct RunViewProps {
    pub game: UseReducerHandle<GameState>,
    pub on_reset_high_score: Callback<()>,
}

#[function_component(RunView)]
pub fn run_view(props: &RunViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let viewport = use_mut_ref(Viewport::default);
    let background = use_mut_ref(Background::random);
    let keys = use_mut_ref(KeyState::default);
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let game_ref = use_mut_ref(|| props.game.clone());
    let open_settings = use_state(|| false);
    let settings_open_flag = use_mut_ref(|| false);

    // Latest handle for the loops, refreshed after every render
    {
        let game_ref = game_ref.clone();
        let current = props.game.clone();
        use_effect(move || {
            *game_ref.borrow_mut() = current;
            || ()
        });
    }
    {
        let flag = *open_settings;
        let settings_open_flag = settings_open_flag.clone();
        use_effect_with(flag, move |_| {
            *settings_open_flag.borrow_mut() = flag;
            || ()
        });
    }
    // Main mount effect (canvas, loops, keyboard)
    {
        let canvas_ref = canvas_ref.clone();
        let mount = Mount {
            viewport: viewport.clone(),
            background: background.clone(),
            keys: keys.clone(),
            draw_ref: draw_ref.clone(),
            game_ref: game_ref.clone(),
            open_settings: open_settings.clone(),
            settings_open_flag: settings_open_flag.clone(),
        };
        use_effect_with((), move |_| {
            let cleanup = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| mount.attach(canvas));
            if cleanup.is_none() {
                log::error!("run view could not attach to the canvas");
            }
            move || {
                if let Some(cleanup) = cleanup {
                    cleanup();
                }
            }
        });
    }

    let gs = &*props.game;
    let dispatch = |action: GameAction| {
        let game = props.game.clone();
        Callback::from(move |()| game.dispatch(action.clone()))
    };
    let start_cb = dispatch(GameAction::StartGame);
    let restart_cb = dispatch(GameAction::Restart);
    let resume_cb = dispatch(GameAction::TogglePause);
    let toggle_shop_cb = dispatch(GameAction::ToggleShop);
    let close_shop_cb = dispatch(GameAction::CloseShop);
    let buy_cb = {
        let game = props.game.clone();
        Callback::from(move |item: ShopItem| game.dispatch(GameAction::Purchase(item)))
    };
    let settings_change_cb = {
        let game = props.game.clone();
        Callback::from(move |s: Settings| game.dispatch(GameAction::SetSettings(s)))
    };
    let open_settings_cb = {
        let open_settings = open_settings.clone();
        let game = props.game.clone();
        Callback::from(move |()| {
            if game.is_running() {
                game.dispatch(GameAction::TogglePause);
            }
            open_settings.set(true);
        })
    };
    let close_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };

    let show_pause = gs.started && gs.is_paused && !gs.is_shop_open && !gs.show_death_screen;
    let shop_enabled = gs.started && !gs.player.is_dead && (!gs.is_paused || gs.is_shop_open);

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; font-family:sans-serif;">
        <canvas ref={canvas_ref} id="game-canvas" style="display:block; width:100%; height:100%;"></canvas>
        { if gs.started {
            html!{ <Hud score={gs.score} coins={gs.coins} round={gs.round.current} progress={gs.round_progress()} high_score={gs.high_score}
                shop_enabled={shop_enabled} on_toggle_shop={toggle_shop_cb} on_open_settings={open_settings_cb.clone()} /> }
        } else { html!{} } }
        <StartMenu show={!gs.started} high_score={gs.high_score} on_start={start_cb} />
        <PauseMenu show={show_pause} on_resume={resume_cb} on_restart={restart_cb.clone()} />
        <ShopModal show={gs.is_shop_open} coins={gs.coins} player={gs.player.clone()} on_buy={buy_cb} on_close={close_shop_cb} />
        <DeathScreen show={gs.show_death_screen} score={gs.score} high_score={gs.high_score} new_high_score={gs.new_high_score} round={gs.round.current} restart={restart_cb} />
        <SettingsModal show={*open_settings} settings={gs.settings} on_change={settings_change_cb} on_close={close_settings_cb} on_reset_high_score={props.on_reset_high_score.clone()} />
    </div>}
}

/// Shared handles the mount effect wires into browser callbacks.
struct Mount {
    viewport: Rc<RefCell<Viewport>>,
    background: Rc<RefCell<Background>>,
    keys: Rc<RefCell<KeyState>>,
    draw_ref: Rc<RefCell<Option<Rc<dyn Fn()>>>>,
    game_ref: Rc<RefCell<UseReducerHandle<GameState>>>,
    open_settings: UseStateHandle<bool>,
    settings_open_flag: Rc<RefCell<bool>>,
}

fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(WORLD_WIDTH);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(WORLD_HEIGHT);
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
    Viewport::fit(width, height)
}

fn listen(window: &Window, name: &str, cb: &wasm_bindgen::JsValue) {
    if window
        .add_event_listener_with_callback(name, cb.unchecked_ref())
        .is_err()
    {
        log::warn!("could not listen for {}", name);
    }
}

impl Mount {
    /// Installs loops and listeners; the returned closure tears them down.
    fn attach(self, canvas: HtmlCanvasElement) -> Option<Box<dyn FnOnce()>> {
        let window = web_sys::window()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        *self.viewport.borrow_mut() = fit_canvas(&window, &canvas);

        // Draw closure
        let draw_closure: Rc<dyn Fn()> = {
            let canvas = canvas.clone();
            let viewport = self.viewport.clone();
            let background = self.background.clone();
            let game_ref = self.game_ref.clone();
            Rc::new(move || {
                if !canvas.is_connected() {
                    return;
                }
                let vp = viewport.borrow();
                let w = canvas.width() as f64;
                let h = canvas.height() as f64;
                ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
                ctx.set_fill_style_str("#0e1116");
                ctx.fill_rect(0.0, 0.0, w, h);
                ctx.set_transform(vp.zoom, 0.0, 0.0, vp.zoom, vp.offset_x, vp.offset_y)
                    .ok();
                ctx.save();
                ctx.begin_path();
                ctx.rect(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT);
                ctx.clip();
                let handle = game_ref.borrow();
                render::draw_frame(&ctx, &**handle, &background.borrow(), js_sys::Date::now());
                ctx.restore();
            })
        };
        *self.draw_ref.borrow_mut() = Some(draw_closure.clone());
        (draw_closure)();

        // Sim interval
        let sim_tick = {
            let game_ref = self.game_ref.clone();
            let keys = self.keys.clone();
            Closure::wrap(Box::new(move || {
                let input = keys.borrow_mut().take_snapshot();
                let handle = game_ref.borrow().clone();
                handle.dispatch(GameAction::Tick { input });
            }) as Box<dyn FnMut()>)
        };
        let sim_tick_id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                sim_tick.as_ref().unchecked_ref(),
                SIM_TICK_MS,
            )
            .ok()?;

        // RAF loop
        let raf_id = Rc::new(RefCell::new(None));
        let raf_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        {
            let raf_id_loop = raf_id.clone();
            let raf_cell_loop = raf_cell.clone();
            let draw_ref = self.draw_ref.clone();
            let background = self.background.clone();
            let window_loop = window.clone();
            *raf_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                background.borrow_mut().step(js_sys::Math::random);
                if let Some(f) = &*draw_ref.borrow() {
                    f();
                }
                if let Some(cb) = raf_cell_loop.borrow().as_ref() {
                    if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        *raf_id_loop.borrow_mut() = Some(id);
                    }
                }
            }) as Box<dyn FnMut()>));
            if let Some(cb) = raf_cell.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }
        }

        let keydown_cb = {
            let game_ref = self.game_ref.clone();
            let keys = self.keys.clone();
            let open_settings = self.open_settings.clone();
            let settings_open_flag = self.settings_open_flag.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                let key = e.key().to_lowercase();
                if is_game_key(&key) {
                    e.prevent_default();
                }
                if *settings_open_flag.borrow() {
                    if key == "escape" {
                        open_settings.set(false);
                    }
                    return;
                }
                keys.borrow_mut().key_down(&key, e.repeat());
                let handle = game_ref.borrow().clone();
                match key.as_str() {
                    "escape" => handle.dispatch(GameAction::TogglePause),
                    "s" => handle.dispatch(GameAction::ToggleShop),
                    "j" => handle.dispatch(GameAction::Punch),
                    _ => {}
                }
            }) as Box<dyn FnMut(_)>)
        };
        listen(&window, "keydown", keydown_cb.as_ref());
        let keyup_cb = {
            let keys = self.keys.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                keys.borrow_mut().key_up(&e.key());
            }) as Box<dyn FnMut(_)>)
        };
        listen(&window, "keyup", keyup_cb.as_ref());
        let blur_cb = {
            let keys = self.keys.clone();
            Closure::wrap(Box::new(move |_e: web_sys::Event| {
                keys.borrow_mut().clear();
            }) as Box<dyn FnMut(_)>)
        };
        listen(&window, "blur", blur_cb.as_ref());
        let resize_cb = {
            let canvas = canvas.clone();
            let window_resize = window.clone();
            let viewport = self.viewport.clone();
            let draw_ref = self.draw_ref.clone();
            Closure::wrap(Box::new(move |_e: web_sys::Event| {
                *viewport.borrow_mut() = fit_canvas(&window_resize, &canvas);
                if let Some(f) = &*draw_ref.borrow() {
                    f();
                }
            }) as Box<dyn FnMut(_)>)
        };
        listen(&window, "resize", resize_cb.as_ref());
        log::debug!("run view attached");

        // Cleanup
        Some(Box::new(move || {
            for (name, cb) in [
                ("keydown", keydown_cb.as_ref()),
                ("keyup", keyup_cb.as_ref()),
                ("blur", blur_cb.as_ref()),
                ("resize", resize_cb.as_ref()),
            ] {
                let _ = window.remove_event_listener_with_callback(name, cb.unchecked_ref());
            }
            window.clear_interval_with_handle(sim_tick_id);
            if let Some(id) = *raf_id.borrow() {
                let _ = window.cancel_animation_frame(id);
            }
            raf_cell.borrow_mut().take();
            let _keep_alive = &sim_tick;
        }))
    }
}
