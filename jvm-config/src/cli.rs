use crate::config::{JvmConfig, LaunchArgs};
use crate::error::ConfigError;
use crate::platform::HostPlatform;
use crate::settings::JvmSettings;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One option per line
    #[default]
    Lines,
    /// Library path and options as a JSON object
    Json,
}

impl OutputFormat {
    pub fn render(self, args: &LaunchArgs) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Lines => Ok(args.options.join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(args),
        }
    }
}

/// Print the options an embedded JVM would be launched with.
///
/// Flags override values from the settings file, which override the defaults.
#[derive(Debug, Parser)]
#[command(
    name = "jvm-options",
    color = clap::ColorChoice::Auto,
    dont_delimit_trailing_values = true,
)]
pub struct Args {
    /// TOML settings file
    #[arg(short, long, env = "JVM_OPTIONS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Host platform used for platform-dependent defaults [default: current host]
    #[arg(long)]
    pub platform: Option<HostPlatform>,

    #[arg(long)]
    pub library_path: Option<String>,

    #[arg(long)]
    pub class_path: Option<String>,

    #[arg(long)]
    pub thread_stack_size: Option<String>,

    #[arg(long)]
    pub initial_heap_size: Option<String>,

    #[arg(long)]
    pub maximum_heap_size: Option<String>,

    /// JDWP address to listen on
    #[arg(long)]
    pub debug_port: Option<String>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub use_dev_urandom: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub check_jni: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub verbose_jni: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub print_gc_details: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub trace_class_loading: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub trace_class_unloading: Option<bool>,

    /// Extra option passed through verbatim (repeatable)
    #[arg(short = 'o', long = "option", value_name = "OPTION", allow_hyphen_values = true)]
    pub options: Vec<String>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl Args {
    /// Resolve defaults, the settings file and the command-line flags into a
    /// single configuration.
    pub fn load_config(&self) -> Result<JvmConfig, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => JvmSettings::from_file(path)?,
            None => JvmSettings::default(),
        };
        if self.platform.is_some() {
            settings.platform = self.platform;
        }

        let mut config = settings.into_config();
        self.overrides().apply(&mut config);
        Ok(config)
    }

    fn overrides(&self) -> JvmSettings {
        JvmSettings {
            platform: None,
            library_path: self.library_path.clone(),
            class_path: self.class_path.clone(),
            thread_stack_size: self.thread_stack_size.clone(),
            initial_heap_size: self.initial_heap_size.clone(),
            maximum_heap_size: self.maximum_heap_size.clone(),
            debug_port: self.debug_port.clone(),
            use_dev_urandom: self.use_dev_urandom,
            check_jni: self.check_jni,
            verbose_jni: self.verbose_jni,
            print_gc_details: self.print_gc_details,
            trace_class_loading: self.trace_class_loading,
            trace_class_unloading: self.trace_class_unloading,
            options: self.options.clone(),
        }
    }
}
