// Calorie Tracker - Core Library
// Exposes all modules for use in the terminal binary and tests

pub mod app;
pub mod config;
pub mod items;
pub mod logging;
pub mod storage;
pub mod ui;
pub mod view;

// Re-export commonly used types
pub use app::{App, UiEvent};
pub use config::{Config, ConfigError};
pub use items::{Calories, CaloriesError, Item, ItemId, ItemStore};
pub use storage::{ItemStorage, LocalStorage, STORAGE_KEY};
pub use view::{Anchor, Anchors, UiMode, View, ViewError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
