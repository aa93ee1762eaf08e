pub mod controller;
pub mod model;
pub mod overlay;
pub mod render;
pub mod settings;
pub mod settings_ui;
pub mod tiling;

pub use controller::{OverlayState, SettingEdit, SettingsController};
pub use model::{WatermarkColor, WatermarkParameters};
pub use overlay::{OverlayFactory, OverlaySurface, OverlayWindow, ViewportOverlayFactory};
pub use settings::WatermarkSettings;
pub use tiling::{Tile, TileLayout};
