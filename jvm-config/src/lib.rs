pub mod cli;
pub mod config;
pub mod error;
pub mod platform;
pub mod property;
pub mod settings;

pub use config::{JvmConfig, LaunchArgs};
pub use error::ConfigError;
pub use platform::HostPlatform;
pub use property::{BoolProperty, StringProperty};
pub use settings::JvmSettings;
