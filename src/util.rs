// Small formatting helpers shared by the renderer and the HUD.

pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, a.clamp(0.0, 1.0))
}

pub fn hsl(h: f64, s: u8, l: u8) -> String {
    format!("hsl({:.1}, {}%, {}%)", h, s, l)
}

/// CSS width for a progress ratio, e.g. `"40%"`.
pub fn percent(ratio: f64) -> String {
    format!("{}%", (ratio.clamp(0.0, 1.0) * 100.0).round())
}

pub fn buy_label(cost: u32) -> String {
    format!("Buy ({} coins)", cost)
}
