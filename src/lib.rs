//! Core implementation of the launchpack command launcher
//!
//! Launchpack reads `launch.toml` files from the home directory, the path in
//! `LAUNCH_CONFIG`, and the working directory, then runs one named action (or the
//! first declared default) as a child process with the caller's stdio attached.

use log::debug;

use crate::actions::catalog::{Catalog, LoadReport};
use crate::locate::Locator;
use crate::settings::Settings;

pub mod actions;
pub mod config_file;
pub mod exec;
pub mod list;
pub mod locate;
pub mod logger;
pub mod messages;
pub mod settings;

/// Locate and load every configuration source.
///
/// Sources that are missing or malformed are recorded in [`LoadReport::skipped`]
/// rather than failing the load.
#[must_use]
pub fn load_catalog(locator: &Locator, settings: &Settings) -> LoadReport {
    let candidates = locator.candidates(settings);
    let report = Catalog::load(&candidates, settings);
    debug!(
        "Loaded {} of {} config candidates",
        report.catalog.packs.len(),
        candidates.len()
    );
    report
}
