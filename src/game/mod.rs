pub mod config;
pub mod feed;
mod session;
mod sprite;
pub mod trail;

pub use config::Config;
pub use feed::{Feed, FoodItem, HalfExtents};
pub use session::Session;
pub use sprite::Sprite;
pub use trail::Trail;
