pub mod background;
pub mod keys;
pub mod viewport;

pub use background::Background;
pub use keys::KeyState;
pub use viewport::Viewport;
