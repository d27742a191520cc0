//! Discovery of candidate configuration files

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use log::debug;

use crate::settings::Settings;

/// Where a candidate path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Home,
    Override,
    WorkingDir,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Home => write!(f, "home"),
            Origin::Override => write!(f, "env"),
            Origin::WorkingDir => write!(f, "cwd"),
        }
    }
}

/// A configuration file that may or may not exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub origin: Origin,
    pub path: PathBuf,
}

/// The environment inputs used to build the search path.
///
/// Each field is optional; a missing one simply drops its candidate.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    pub home: Option<PathBuf>,
    pub config_override: Option<OsString>,
    pub cwd: Option<PathBuf>,
}

impl Locator {
    /// Capture home directory, override variable and working directory from the process.
    #[must_use]
    pub fn from_env(settings: &Settings) -> Self {
        let cwd = match std::env::current_dir() {
            Ok(cwd) => Some(cwd),
            Err(e) => {
                debug!("Unable to resolve working directory: {e}");
                None
            }
        };
        Locator {
            home: dirs::home_dir(),
            config_override: std::env::var_os(&settings.config_env_key),
            cwd,
        }
    }

    /// Candidate paths in precedence order: home, override, working directory.
    ///
    /// Paths are not deduplicated; the same file may be listed twice.
    #[must_use]
    pub fn candidates(&self, settings: &Settings) -> Vec<Candidate> {
        let mut candidates = Vec::with_capacity(3);
        if let Some(home) = &self.home {
            candidates.push(Candidate {
                origin: Origin::Home,
                path: home.join(&settings.file_name),
            });
        }
        if let Some(path) = self.config_override.as_ref().filter(|p| !p.is_empty()) {
            candidates.push(Candidate {
                origin: Origin::Override,
                path: PathBuf::from(path),
            });
        }
        if let Some(cwd) = &self.cwd {
            candidates.push(Candidate {
                origin: Origin::WorkingDir,
                path: cwd.join(&settings.file_name),
            });
        }
        debug!("Config candidates: {candidates:?}");
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_order() {
        let locator = Locator {
            home: Some(PathBuf::from("/home/user")),
            config_override: Some(OsString::from("/etc/custom.toml")),
            cwd: Some(PathBuf::from("/work")),
        };
        let candidates = locator.candidates(&Settings::default());
        assert_eq!(
            candidates,
            vec![
                Candidate {
                    origin: Origin::Home,
                    path: PathBuf::from("/home/user/launch.toml"),
                },
                Candidate {
                    origin: Origin::Override,
                    path: PathBuf::from("/etc/custom.toml"),
                },
                Candidate {
                    origin: Origin::WorkingDir,
                    path: PathBuf::from("/work/launch.toml"),
                },
            ]
        );
    }

    #[test]
    fn test_override_is_literal_path() {
        let locator = Locator {
            config_override: Some(OsString::from("/etc/dir")),
            ..Default::default()
        };
        let candidates = locator.candidates(&Settings::default());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].path, PathBuf::from("/etc/dir"));
    }

    #[test]
    fn test_missing_inputs_are_skipped() {
        let locator = Locator {
            home: None,
            config_override: Some(OsString::new()),
            cwd: Some(PathBuf::from("/work")),
        };
        let candidates = locator.candidates(&Settings::default());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].origin, Origin::WorkingDir);
    }

    #[test]
    fn test_same_path_is_not_deduplicated() {
        let locator = Locator {
            home: Some(PathBuf::from("/work")),
            config_override: None,
            cwd: Some(PathBuf::from("/work")),
        };
        let candidates = locator.candidates(&Settings::default());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].path, candidates[1].path);
    }

    #[test]
    fn test_custom_file_name() {
        let settings = Settings {
            file_name: "tasks.toml".to_string(),
            ..Default::default()
        };
        let locator = Locator {
            cwd: Some(PathBuf::from("/work")),
            ..Default::default()
        };
        let candidates = locator.candidates(&settings);
        assert_eq!(candidates[0].path, PathBuf::from("/work/tasks.toml"));
    }
}
