use std::io::Write;
use std::process::ExitCode;

use launchpack::actions::catalog::Catalog;
use launchpack::locate::Locator;
use launchpack::settings::Settings;

/// Print each config candidate and whether it loaded.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run(locator: &Locator, settings: &Settings) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let candidates = locator.candidates(settings);
    let report = Catalog::load(&candidates, settings);
    let mut out = std::io::stdout().lock();
    for (position, candidate) in candidates.iter().enumerate() {
        let status = report
            .skipped
            .iter()
            .find(|s| s.position == position)
            .map_or_else(|| "loaded".to_string(), |s| s.error.to_string());
        writeln!(
            out,
            "{:<4} {} ({status})",
            candidate.origin.to_string(),
            candidate.path.display()
        )?;
    }
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
