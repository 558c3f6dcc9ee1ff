#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod explorer;
pub mod log;
pub mod settings;

pub use explorer::{Detail, Explorer};
pub use settings::{Settings, SettingsError};
