//! Descriptors for the named JVM settings.
//!
//! Declaration order of each enum is the order its options are emitted in,
//! so variants must not be reordered.

use crate::platform::HostPlatform;
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};

/// A setting whose value is free text, emitted as `flag + value` when non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum StringProperty {
    ClassPath,
    ThreadStackSize,
    InitialHeapSize,
    MaximumHeapSize,
    DebugPort,
}

impl StringProperty {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Prefix the current value is appended to.
    pub fn flag(self) -> &'static str {
        match self {
            StringProperty::ClassPath => "-Djava.class.path=",
            StringProperty::ThreadStackSize => "-Xss",
            StringProperty::InitialHeapSize => "-Xms",
            StringProperty::MaximumHeapSize => "-Xmx",
            StringProperty::DebugPort => {
                "-agentlib:jdwp=transport=dt_socket,server=y,suspend=y,address="
            }
        }
    }

    /// An empty default means the option is absent unless set.
    pub fn default_value(self) -> &'static str {
        match self {
            StringProperty::InitialHeapSize => "512M",
            StringProperty::MaximumHeapSize => "4G",
            StringProperty::ClassPath
            | StringProperty::ThreadStackSize
            | StringProperty::DebugPort => "",
        }
    }

    pub fn render(self, value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(format!("{}{}", self.flag(), value))
        }
    }
}

/// A setting emitted as a literal flag when enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum BoolProperty {
    UseDevUrandom,
    CheckJni,
    VerboseJni,
    #[strum(serialize = "printGCDetails")]
    PrintGcDetails,
    TraceClassLoading,
    TraceClassUnloading,
}

impl BoolProperty {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn flag(self) -> &'static str {
        match self {
            BoolProperty::UseDevUrandom => "-Djava.security.egd=file:/dev/urandom",
            BoolProperty::CheckJni => "-Xcheck:jni",
            BoolProperty::VerboseJni => "-verbose:jni",
            BoolProperty::PrintGcDetails => "-XX:+PrintGCDetails",
            BoolProperty::TraceClassLoading => "-XX:+TraceClassLoading",
            BoolProperty::TraceClassUnloading => "-XX:+TraceClassUnloading",
        }
    }

    /// Default value on the given host.
    ///
    /// The JVM's default blocking `/dev/random` source stalls JDBC connects and
    /// similar on Linux, so the urandom source is switched on there.
    pub fn default_for(self, platform: HostPlatform) -> bool {
        match self {
            BoolProperty::UseDevUrandom => platform.is_linux_family(),
            _ => false,
        }
    }

    pub fn render(self, enabled: bool) -> Option<&'static str> {
        enabled.then(|| self.flag())
    }
}
