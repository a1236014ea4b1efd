use crate::platform::HostPlatform;
use crate::property::{BoolProperty, StringProperty};
use serde::Serialize;
use strum::{EnumCount, IntoEnumIterator};

macro_rules! string_accessors {
    ($($property:ident => $getter:ident, $setter:ident;)*) => {
        $(
            pub fn $getter(&self) -> &str {
                self.string(StringProperty::$property)
            }

            pub fn $setter(&mut self, value: impl Into<String>) {
                self.set_string(StringProperty::$property, value);
            }
        )*
    };
}

macro_rules! flag_accessors {
    ($($property:ident => $getter:ident, $setter:ident;)*) => {
        $(
            pub fn $getter(&self) -> bool {
                self.flag(BoolProperty::$property)
            }

            pub fn $setter(&mut self, value: bool) {
                self.set_flag(BoolProperty::$property, value);
            }
        )*
    };
}

/// Settings for launching an embedded JVM.
///
/// Holds the named properties, free-form extra options and the native library
/// path, and renders them into the option strings passed to `JNI_CreateJavaVM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JvmConfig {
    /// Host classification the defaults were computed for
    platform: HostPlatform,
    /// Path of the native JVM library, handed to the launcher separately
    library_path: String,
    /// Values indexed by `StringProperty` discriminant
    strings: [String; StringProperty::COUNT],
    /// Values indexed by `BoolProperty` discriminant
    flags: [bool; BoolProperty::COUNT],
    /// Caller-supplied options, emitted verbatim after the named ones
    options: Vec<String>,
}

/// Everything the launch facility needs to start the JVM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchArgs {
    pub library_path: String,
    pub options: Vec<String>,
}

impl Default for JvmConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl JvmConfig {
    /// Create a configuration with defaults for the current host.
    pub fn new() -> Self {
        Self::for_platform(HostPlatform::current())
    }

    /// Create a configuration with defaults for the given host.
    pub fn for_platform(platform: HostPlatform) -> Self {
        let mut strings: [String; StringProperty::COUNT] = Default::default();
        for property in StringProperty::iter() {
            strings[property as usize] = property.default_value().to_string();
        }

        let mut flags = [false; BoolProperty::COUNT];
        for property in BoolProperty::iter() {
            flags[property as usize] = property.default_for(platform);
        }

        Self {
            platform,
            library_path: String::new(),
            strings,
            flags,
            options: Vec::new(),
        }
    }

    pub fn platform(&self) -> HostPlatform {
        self.platform
    }

    pub fn string(&self, property: StringProperty) -> &str {
        &self.strings[property as usize]
    }

    pub fn set_string(&mut self, property: StringProperty, value: impl Into<String>) {
        self.strings[property as usize] = value.into();
    }

    pub fn flag(&self, property: BoolProperty) -> bool {
        self.flags[property as usize]
    }

    pub fn set_flag(&mut self, property: BoolProperty, value: bool) {
        self.flags[property as usize] = value;
    }

    string_accessors! {
        ClassPath => class_path, set_class_path;
        ThreadStackSize => thread_stack_size, set_thread_stack_size;
        InitialHeapSize => initial_heap_size, set_initial_heap_size;
        MaximumHeapSize => maximum_heap_size, set_maximum_heap_size;
        DebugPort => debug_port, set_debug_port;
    }

    flag_accessors! {
        UseDevUrandom => use_dev_urandom, set_use_dev_urandom;
        CheckJni => check_jni, set_check_jni;
        VerboseJni => verbose_jni, set_verbose_jni;
        PrintGcDetails => print_gc_details, set_print_gc_details;
        TraceClassLoading => trace_class_loading, set_trace_class_loading;
        TraceClassUnloading => trace_class_unloading, set_trace_class_unloading;
    }

    pub fn library_path(&self) -> &str {
        &self.library_path
    }

    pub fn set_library_path(&mut self, library_path: impl Into<String>) {
        self.library_path = library_path.into();
    }

    /// Append a free-form option. Duplicates and conflicts with named
    /// properties are kept; the JVM resolves them (last flag wins).
    pub fn add_option(&mut self, option: impl Into<String>) {
        self.options.push(option.into());
    }

    pub fn extend_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extend(options.into_iter().map(Into::into));
    }

    pub fn extra_options(&self) -> &[String] {
        &self.options
    }

    /// Render the configuration into JVM option strings.
    ///
    /// String properties come first, then boolean flags, each group in
    /// declaration order, then the extra options in the order they were added.
    pub fn build_option_list(&self) -> Vec<String> {
        let mut options =
            Vec::with_capacity(StringProperty::COUNT + BoolProperty::COUNT + self.options.len());

        options.extend(
            StringProperty::iter().filter_map(|property| property.render(self.string(property))),
        );
        options.extend(
            BoolProperty::iter()
                .filter_map(|property| property.render(self.flag(property)))
                .map(str::to_owned),
        );
        options.extend(self.options.iter().cloned());

        tracing::trace!(count = options.len(), "Built JVM option list");
        options
    }

    pub fn launch_args(&self) -> LaunchArgs {
        LaunchArgs {
            library_path: self.library_path.clone(),
            options: self.build_option_list(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URANDOM: &str = "-Djava.security.egd=file:/dev/urandom";

    #[test]
    fn test_defaults_off_linux() {
        for platform in [HostPlatform::MacOs, HostPlatform::Windows, HostPlatform::Other] {
            let config = JvmConfig::for_platform(platform);
            assert_eq!(config.build_option_list(), ["-Xms512M", "-Xmx4G"]);
        }
    }

    #[test]
    fn test_defaults_on_linux() {
        let config = JvmConfig::for_platform(HostPlatform::Linux);
        assert!(config.use_dev_urandom());
        assert_eq!(config.build_option_list(), ["-Xms512M", "-Xmx4G", URANDOM]);
    }

    #[test]
    fn test_new_uses_current_host() {
        let config = JvmConfig::new();
        assert_eq!(config.platform(), HostPlatform::current());
        assert_eq!(
            config.build_option_list().iter().any(|o| o == URANDOM),
            HostPlatform::current().is_linux_family()
        );
    }

    #[test]
    fn test_build_is_pure() {
        let mut config = JvmConfig::for_platform(HostPlatform::Linux);
        config.set_class_path("/a:/b");
        config.set_verbose_jni(true);
        config.add_option("-Dfoo=bar");

        let first = config.build_option_list();
        let second = config.build_option_list();
        assert_eq!(first, second);
        assert_eq!(config.extra_options(), ["-Dfoo=bar"]);
    }

    #[test]
    fn test_class_path_comes_first() {
        let mut config = JvmConfig::for_platform(HostPlatform::Other);
        config.set_class_path("/a:/b");

        let options = config.build_option_list();
        assert_eq!(options[0], "-Djava.class.path=/a:/b");
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_flag_toggle_is_reversible() {
        let mut config = JvmConfig::for_platform(HostPlatform::Other);
        let before = config.build_option_list();

        config.set_check_jni(true);
        assert!(config.build_option_list().contains(&"-Xcheck:jni".to_string()));

        config.set_check_jni(false);
        assert_eq!(config.build_option_list(), before);
    }

    #[test]
    fn test_extra_options_follow_named_properties() {
        let mut config = JvmConfig::for_platform(HostPlatform::Linux);
        config.set_trace_class_unloading(true);
        config.add_option("-foo");
        config.add_option("-bar");

        let options = config.build_option_list();
        assert_eq!(
            options,
            [
                "-Xms512M",
                "-Xmx4G",
                URANDOM,
                "-XX:+TraceClassUnloading",
                "-foo",
                "-bar"
            ]
        );
    }

    #[test]
    fn test_empty_defaults_are_omitted() {
        for platform in [HostPlatform::Linux, HostPlatform::Windows] {
            let options = JvmConfig::for_platform(platform).build_option_list();
            assert!(!options.iter().any(|o| o.starts_with("-Xss")));
            assert!(!options.iter().any(|o| o.starts_with("-agentlib:jdwp")));
        }
    }

    #[test]
    fn test_empty_value_removes_option() {
        let mut config = JvmConfig::for_platform(HostPlatform::Other);
        config.set_debug_port("5005");
        config.set_initial_heap_size("");
        assert_eq!(
            config.build_option_list(),
            [
                "-Xmx4G",
                "-agentlib:jdwp=transport=dt_socket,server=y,suspend=y,address=5005"
            ]
        );

        config.set_debug_port(String::new());
        assert_eq!(config.build_option_list(), ["-Xmx4G"]);
    }

    #[test]
    fn test_full_ordering() {
        let mut config = JvmConfig::for_platform(HostPlatform::Other);
        config.add_option("-Xmx1G");
        config.set_trace_class_loading(true);
        config.set_print_gc_details(true);
        config.set_verbose_jni(true);
        config.set_check_jni(true);
        config.set_use_dev_urandom(true);
        config.set_debug_port("8000");
        config.set_maximum_heap_size("8G");
        config.set_initial_heap_size("1G");
        config.set_thread_stack_size("4m");
        config.set_class_path("app.jar");

        assert_eq!(
            config.build_option_list(),
            [
                "-Djava.class.path=app.jar",
                "-Xss4m",
                "-Xms1G",
                "-Xmx8G",
                "-agentlib:jdwp=transport=dt_socket,server=y,suspend=y,address=8000",
                URANDOM,
                "-Xcheck:jni",
                "-verbose:jni",
                "-XX:+PrintGCDetails",
                "-XX:+TraceClassLoading",
                "-Xmx1G",
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut config = JvmConfig::for_platform(HostPlatform::Other);
        config.extend_options(["-Xmx1G", "-Xmx1G"]);

        let options = config.build_option_list();
        assert_eq!(options.iter().filter(|o| o.starts_with("-Xmx")).count(), 3);
    }

    #[test]
    fn test_library_path_not_in_options() {
        let mut config = JvmConfig::for_platform(HostPlatform::Other);
        config.set_library_path("/usr/lib/jvm/lib/server/libjvm.so");

        let args = config.launch_args();
        assert_eq!(args.library_path, "/usr/lib/jvm/lib/server/libjvm.so");
        assert_eq!(args.options, config.build_option_list());
        assert!(!args.options.iter().any(|o| o.contains("libjvm")));
    }

    #[test]
    fn test_generic_accessors_match_typed() {
        let mut config = JvmConfig::for_platform(HostPlatform::Other);
        config.set_string(StringProperty::ThreadStackSize, "1m");
        config.set_flag(BoolProperty::PrintGcDetails, true);

        assert_eq!(config.thread_stack_size(), "1m");
        assert!(config.print_gc_details());
        assert_eq!(config.initial_heap_size(), "512M");
        assert_eq!(config.maximum_heap_size(), "4G");
        assert_eq!(config.class_path(), "");
        assert!(!config.trace_class_loading());
    }
}
