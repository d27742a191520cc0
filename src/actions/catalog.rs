use std::collections::HashSet;

use log::{debug, info};
use thiserror::Error;

use crate::actions::action::Action;
use crate::actions::pack::{Pack, ResolvedAction};
use crate::config_file::{Config, ConfigError};
use crate::locate::Candidate;
use crate::settings::Settings;

/// Lookup failures surfaced to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("config file not found")]
    NoConfig,
    #[error("action not found: {0}")]
    ActionNotFound(String),
    #[error("default action not found")]
    DefaultNotFound,
}

/// All packs loaded for this invocation, in search-path order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub packs: Vec<Pack>,
}

/// A candidate that was dropped while loading
#[derive(Debug)]
pub struct Skipped {
    /// Index of the candidate in the search path
    pub position: usize,
    pub candidate: Candidate,
    pub error: ConfigError,
}

/// Result of loading every candidate: the catalog plus what was left out
#[derive(Debug, Default)]
pub struct LoadReport {
    pub catalog: Catalog,
    pub skipped: Vec<Skipped>,
}

impl Catalog {
    /// Load each candidate in order, dropping those that fail.
    ///
    /// A bad file never prevents the remaining candidates from loading.
    #[must_use]
    pub fn load(candidates: &[Candidate], settings: &Settings) -> LoadReport {
        let mut report = LoadReport::default();
        for (position, candidate) in candidates.iter().enumerate() {
            match Config::from_file(&candidate.path) {
                Ok(config) => {
                    debug!(
                        "Loaded {} config: {}",
                        candidate.origin,
                        candidate.path.display()
                    );
                    report
                        .catalog
                        .packs
                        .push(config.into_pack(candidate.path.clone(), &settings.default_shell));
                }
                Err(error) => {
                    match &error {
                        ConfigError::NotFound(_) => debug!("Skipping {}: {error}", candidate.origin),
                        _ => info!("Skipping {}: {error}", candidate.origin),
                    }
                    report.skipped.push(Skipped {
                        position,
                        candidate: candidate.clone(),
                        error,
                    });
                }
            }
        }
        report
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Find the first valid action called `name`, scanning packs in order.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::ActionNotFound` if no pack declares it.
    pub fn look_up_action(&self, name: &str) -> Result<ResolvedAction<'_>, LookupError> {
        self.packs
            .iter()
            .find_map(|pack| pack.find(name))
            .ok_or_else(|| LookupError::ActionNotFound(name.to_string()))
    }

    /// Find the default action of the first pack that declares a valid one.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::DefaultNotFound` if no pack declares one.
    pub fn look_up_default(&self) -> Result<ResolvedAction<'_>, LookupError> {
        self.packs
            .iter()
            .find_map(Pack::default_action)
            .ok_or(LookupError::DefaultNotFound)
    }

    /// Resolve the named action, or the default action when no name is given.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::NoConfig` if nothing was loaded, otherwise the
    /// error from the matching lookup.
    pub fn resolve(&self, name: Option<&str>) -> Result<ResolvedAction<'_>, LookupError> {
        if self.is_empty() {
            return Err(LookupError::NoConfig);
        }
        match name {
            Some(name) => self.look_up_action(name),
            None => self.look_up_default(),
        }
    }

    /// Valid actions across all packs, keeping only the first of each name.
    pub fn unique_actions(&self) -> impl Iterator<Item = &Action> {
        let mut seen = HashSet::new();
        self.packs
            .iter()
            .flat_map(|pack| pack.valid_actions())
            .filter(move |&a| seen.insert(a.name.as_str()))
    }
}
