use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Operating system family of the host a JVM is launched on.
///
/// Only used to pick platform-conditional defaults, so the classification is
/// deliberately coarse.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HostPlatform {
    Linux,
    MacOs,
    Windows,
    Other,
}

impl HostPlatform {
    /// Returns the platform for the current operating system
    pub fn current() -> Self {
        if cfg!(any(target_os = "linux", target_os = "android")) {
            HostPlatform::Linux
        } else if cfg!(target_os = "macos") {
            HostPlatform::MacOs
        } else if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else {
            HostPlatform::Other
        }
    }

    pub fn is_linux_family(self) -> bool {
        matches!(self, HostPlatform::Linux)
    }
}
