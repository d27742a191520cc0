mod list;
mod paths;
mod run;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use launchpack::locate::Locator;
use launchpack::logger;
use launchpack::settings::Settings;

/// Exit status for command-line usage errors
const USAGE_ERROR: u8 = 255;
/// Exit status when the launcher itself gives up
const ABORT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "launchpack", version, about = "Run named actions from launch.toml files")]
struct Cli {
    /// Name of the action to run (the first declared default if omitted)
    #[arg(short, long)]
    action: Option<String>,

    /// Log file path (in addition to stderr)
    #[arg(long)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available actions
    List(list::ListArgs),
    /// Show where config files are searched for and which ones loaded
    Paths,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(USAGE_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(ABORT)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let log_file = cli
        .log_file
        .as_ref()
        .map(std::fs::File::create)
        .transpose()?;
    logger::init(log_file)?;

    let settings = Settings::default();
    let locator = Locator::from_env(&settings);

    match cli.command {
        Some(Commands::List(ref args)) => list::run(args, &locator, &settings),
        Some(Commands::Paths) => paths::run(&locator, &settings),
        None => run::run(cli.action.as_deref(), &locator, &settings),
    }
}
