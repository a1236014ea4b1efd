use crate::config::JvmConfig;
use crate::error::ConfigError;
use crate::platform::HostPlatform;
use serde::Deserialize;
use std::path::Path;

/// JVM settings as read from a TOML file.
///
/// Every field is optional; absent fields keep whatever the target
/// configuration already holds.
///
/// ```toml
/// library_path = "/usr/lib/jvm/default/lib/server/libjvm.so"
/// class_path = "app.jar:lib/*"
/// maximum_heap_size = "8G"
/// check_jni = true
/// options = ["-Dfile.encoding=UTF-8"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JvmSettings {
    pub platform: Option<HostPlatform>,
    pub library_path: Option<String>,
    pub class_path: Option<String>,
    pub thread_stack_size: Option<String>,
    pub initial_heap_size: Option<String>,
    pub maximum_heap_size: Option<String>,
    pub debug_port: Option<String>,
    pub use_dev_urandom: Option<bool>,
    pub check_jni: Option<bool>,
    pub verbose_jni: Option<bool>,
    pub print_gc_details: Option<bool>,
    pub trace_class_loading: Option<bool>,
    pub trace_class_unloading: Option<bool>,
    #[serde(default)]
    pub options: Vec<String>,
}

impl JvmSettings {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        tracing::debug!("Loading JVM settings from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Build a configuration for the settings' platform (or the current host)
    /// with the settings applied on top of its defaults.
    pub fn into_config(self) -> JvmConfig {
        let platform = self.platform.unwrap_or_else(HostPlatform::current);
        let mut config = JvmConfig::for_platform(platform);
        self.apply(&mut config);
        config
    }

    /// Overlay these settings onto `config`. Present fields replace the current
    /// value and `options` are appended after any existing extra options.
    pub fn apply(self, config: &mut JvmConfig) {
        if let Some(platform) = self.platform {
            if platform != config.platform() {
                tracing::warn!(
                    "Settings target {} but configuration was built for {}; platform defaults are not recomputed",
                    platform,
                    config.platform()
                );
            }
        }

        if let Some(library_path) = self.library_path {
            config.set_library_path(library_path);
        }
        if let Some(value) = self.class_path {
            config.set_class_path(value);
        }
        if let Some(value) = self.thread_stack_size {
            config.set_thread_stack_size(value);
        }
        if let Some(value) = self.initial_heap_size {
            config.set_initial_heap_size(value);
        }
        if let Some(value) = self.maximum_heap_size {
            config.set_maximum_heap_size(value);
        }
        if let Some(value) = self.debug_port {
            config.set_debug_port(value);
        }
        if let Some(value) = self.use_dev_urandom {
            config.set_use_dev_urandom(value);
        }
        if let Some(value) = self.check_jni {
            config.set_check_jni(value);
        }
        if let Some(value) = self.verbose_jni {
            config.set_verbose_jni(value);
        }
        if let Some(value) = self.print_gc_details {
            config.set_print_gc_details(value);
        }
        if let Some(value) = self.trace_class_loading {
            config.set_trace_class_loading(value);
        }
        if let Some(value) = self.trace_class_unloading {
            config.set_trace_class_unloading(value);
        }

        tracing::debug!("Applying {} extra JVM options from settings", self.options.len());
        config.extend_options(self.options);
    }
}
