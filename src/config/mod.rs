//! User configuration (`~/.pman.toml`).

pub mod settings;

pub use settings::Settings;
