// Sky, clouds and grass. Purely cosmetic, so it lives outside the model.
use crate::config::WORLD_WIDTH;

pub const CLOUD_COUNT: usize = 5;
pub const TUFT_SPACING: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone)]
pub struct Background {
    pub time: f64,
    pub clouds: Vec<Cloud>,
    /// One height per grass tuft, left to right.
    pub tufts: Vec<f64>,
}

fn cloud_y(rand: &mut impl FnMut() -> f64) -> f64 {
    50.0 + rand() * 100.0
}

impl Background {
    pub fn new(mut rand: impl FnMut() -> f64) -> Self {
        let clouds = (0..CLOUD_COUNT)
            .map(|_| Cloud {
                x: rand() * WORLD_WIDTH,
                y: cloud_y(&mut rand),
                width: 60.0 + rand() * 40.0,
                height: 30.0 + rand() * 20.0,
                speed: 0.2 + rand() * 0.3,
                opacity: 0.6 + rand() * 0.3,
            })
            .collect();
        let count = (WORLD_WIDTH / TUFT_SPACING).ceil() as usize;
        let tufts = (0..count).map(|_| 5.0 + rand() * 8.0).collect();
        Self {
            time: 0.0,
            clouds,
            tufts,
        }
    }

    /// Seeded from `Math.random`; only usable in the browser.
    pub fn random() -> Self {
        Self::new(js_sys::Math::random)
    }

    pub fn step(&mut self, mut rand: impl FnMut() -> f64) {
        self.time += 0.01;
        for cloud in &mut self.clouds {
            cloud.x += cloud.speed;
            if cloud.x > WORLD_WIDTH + cloud.width {
                cloud.x = -cloud.width;
                cloud.y = cloud_y(&mut rand);
            }
        }
    }

    pub fn sky_hues(&self) -> (f64, f64) {
        (
            180.0 + self.time.sin() * 10.0,
            210.0 + (self.time * 0.5).sin() * 5.0,
        )
    }

    pub fn tuft_sway(&self, x: f64) -> f64 {
        (self.time * 2.0 + x * 0.05).sin() * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(v: f64) -> impl FnMut() -> f64 {
        move || v
    }

    #[test]
    fn tufts_cover_the_ground_and_stay_put() {
        let mut bg = Background::new(fixed(0.5));
        assert_eq!(bg.clouds.len(), CLOUD_COUNT);
        assert_eq!(bg.tufts.len(), 54);
        let before = bg.tufts.clone();
        bg.step(fixed(0.1));
        assert_eq!(bg.tufts, before);
    }

    #[test]
    fn clouds_wrap_to_the_left_edge() {
        let mut bg = Background::new(fixed(0.0));
        bg.clouds[0].x = WORLD_WIDTH + bg.clouds[0].width;
        bg.step(fixed(1.0));
        assert_eq!(bg.clouds[0].x, -bg.clouds[0].width);
        assert_eq!(bg.clouds[0].y, 150.0);
        assert!((bg.time - 0.01).abs() < 1e-12);
    }
}
