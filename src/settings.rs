use std::path::PathBuf;

/// Names and defaults shared by the locator, loader and executor.
///
/// Built once at startup and passed down, so tests can swap any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// File name searched for in the home and working directories
    pub file_name: String,
    /// Environment variable holding an explicit config path
    pub config_env_key: String,
    /// Interpreter used when neither the action nor its source names one
    pub default_shell: String,
    /// Environment variable exported to children with the launcher's own path
    pub self_env_key: String,
    /// Directory for staged scripts; the system temp dir when unset
    pub staging_dir: Option<PathBuf>,
}

pub const CONFIG_FILE_NAME: &str = "launch.toml";
pub const CONFIG_ENV_KEY: &str = "LAUNCH_CONFIG";
pub const DEFAULT_SHELL: &str = "sh";
pub const SELF_ENV_KEY: &str = "LAUNCHPACK";

impl Default for Settings {
    fn default() -> Self {
        Settings {
            file_name: CONFIG_FILE_NAME.to_string(),
            config_env_key: CONFIG_ENV_KEY.to_string(),
            default_shell: DEFAULT_SHELL.to_string(),
            self_env_key: SELF_ENV_KEY.to_string(),
            staging_dir: None,
        }
    }
}
