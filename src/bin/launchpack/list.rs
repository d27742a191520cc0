use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use launchpack::config_file::Config;
use launchpack::list::{ListMode, render_catalog, render_pack};
use launchpack::load_catalog;
use launchpack::locate::Locator;
use launchpack::settings::Settings;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Append a NUL and the bare name to each line (for fuzzy selectors)
    #[arg(long)]
    null: bool,

    /// List a single config file instead of every located one
    #[arg(long)]
    file: Option<PathBuf>,
}

/// Run the list subcommand.
///
/// # Errors
///
/// Returns an error if `--file` cannot be loaded or stdout cannot be written.
pub fn run(
    args: &ListArgs,
    locator: &Locator,
    settings: &Settings,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mode = if args.null {
        ListMode::Null
    } else {
        ListMode::Plain
    };
    let mut out = std::io::stdout().lock();

    if let Some(path) = &args.file {
        let pack = Config::from_file(path)?.into_pack(path.clone(), &settings.default_shell);
        render_pack(&pack, mode, &mut out)?;
    } else {
        let report = load_catalog(locator, settings);
        render_catalog(&report.catalog, mode, &mut out)?;
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
