use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BackdropProps {
    #[prop_or(40)]
    pub z_index: u32,
    #[prop_or_default]
    pub children: Html,
}

/// Dims the arena behind a menu and centres its content.
#[function_component]
pub fn Backdrop(props: &BackdropProps) -> Html {
    html! {
        <div style={format!("position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:{};", props.z_index)}>
            { props.children.clone() }
        </div>
    }
}

pub const PANEL_STYLE: &str = "background:rgba(22,27,34,0.95); border:2px solid #30363d; border-radius:14px; padding:24px 32px; min-width:320px; max-width:520px; text-align:center; color:#e6edf3; box-shadow:0 6px 18px rgba(0,0,0,0.6);";
