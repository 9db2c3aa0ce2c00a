use crate::config::{WORLD_HEIGHT, WORLD_WIDTH};

/// Maps the fixed logical world onto the canvas, letterboxed and centred.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Viewport {
    pub fn fit(canvas_w: f64, canvas_h: f64) -> Self {
        if canvas_w <= 0.0 || canvas_h <= 0.0 {
            return Self::default();
        }
        let zoom = (canvas_w / WORLD_WIDTH).min(canvas_h / WORLD_HEIGHT);
        Self {
            zoom,
            offset_x: (canvas_w - WORLD_WIDTH * zoom) / 2.0,
            offset_y: (canvas_h - WORLD_HEIGHT * zoom) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_canvas_is_pillarboxed() {
        let vp = Viewport::fit(1600.0, 450.0);
        assert_eq!(vp.zoom, 1.0);
        assert_eq!(vp.offset_x, 400.0);
        assert_eq!(vp.offset_y, 0.0);
    }

    #[test]
    fn tall_canvas_is_letterboxed() {
        let vp = Viewport::fit(400.0, 1000.0);
        assert_eq!(vp.zoom, 0.5);
        assert_eq!(vp.offset_x, 0.0);
        assert_eq!(vp.offset_y, (1000.0 - 225.0) / 2.0);
        // world centre lands on canvas centre
        assert_eq!(vp.offset_x + WORLD_WIDTH / 2.0 * vp.zoom, 200.0);
        assert_eq!(vp.offset_y + WORLD_HEIGHT / 2.0 * vp.zoom, 500.0);
    }

    #[test]
    fn zero_sized_canvas_falls_back() {
        assert_eq!(Viewport::fit(0.0, 300.0), Viewport::default());
    }
}
