mod cli;
mod config;
mod display;
mod error;
mod logging;
mod models;

use chrono::Local;
use clap::Parser;
use std::path::Path;

use crate::cli::remove::Removal;
use crate::display::Theme;
use crate::error::Result;

/// Count down days until events.
#[derive(Parser)]
#[command(name = "days_until")]
#[command(about = "Count down days until events", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Print version info
    #[arg(short, long)]
    version: bool,

    /// Print config path
    #[arg(long)]
    config: bool,

    /// Interactively add an event
    #[arg(short, long)]
    add: bool,

    /// Interactively remove events
    #[arg(short, long)]
    remove: bool,

    /// Remove events that have ended
    #[arg(long)]
    clean: bool,

    /// Compress output when printing
    #[arg(short, long)]
    compress: bool,
}

fn main() {
    let cli = Cli::parse();
    let _logger = logging::init();

    if let Err(e) = run(cli) {
        let theme = Theme::detect_stderr();
        eprintln!("{}", theme.paint_bold(&format!("Error: {}", e), theme.error));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.version {
        println!("days_until v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config_path = config::config_path()?;
    let today = Local::now().date_naive();

    if cli.config {
        if !config_path.exists() {
            config::load(&config_path)?;
        }
        println!("{}", config_path.display());
        return Ok(());
    }

    if cli.add {
        let mut prompter = cli::prompt::stdio();
        cli::add::run(&mut prompter, &config_path, today)?;
        return Ok(());
    }

    if cli.remove {
        let mut prompter = cli::prompt::stdio();
        let outcome = cli::remove::run(&mut prompter, &config_path)?;
        log_removal(&outcome, &config_path);
        return Ok(());
    }

    if cli.clean {
        let mut prompter = cli::prompt::stdio();
        let outcome = cli::clean::run(&mut prompter, &config_path, today)?;
        log_removal(&outcome, &config_path);
        return Ok(());
    }

    let theme = Theme::detect();
    let mut stdout = std::io::stdout().lock();
    cli::list::run(&mut stdout, &config_path, &theme, cli.compress, today)
}

fn log_removal(outcome: &Removal, config_path: &Path) {
    if let Removal::Removed(ids) = outcome {
        log::info!("removed [{}] from {}", ids.join(", "), config_path.display());
    }
}
