use std::process::ExitCode;

use log::info;

use launchpack::exec;
use launchpack::load_catalog;
use launchpack::locate::Locator;
use launchpack::settings::Settings;

/// Resolve and run an action, exiting with its code.
///
/// # Errors
///
/// Returns an error if no config loaded, the action cannot be found, or the
/// script cannot be staged.
pub fn run(
    action: Option<&str>,
    locator: &Locator,
    settings: &Settings,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let report = load_catalog(locator, settings);
    let resolved = report.catalog.resolve(action)?;
    info!(
        "Running '{}' from {}",
        resolved.action.name,
        resolved.owner.path.display()
    );
    let code = exec::run(resolved, settings)?;
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX)))
}
