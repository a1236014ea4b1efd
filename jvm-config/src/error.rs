use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO Error")]
    Io(#[from] std::io::Error),
    #[error("TOML Error")]
    Toml(#[from] toml::de::Error),
}
