//! fsutil CLI
//!
//! Command-line access to the fsutil path and text-file helpers.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    let platform = cli.target_platform();
    tracing::debug!(?platform, "Using platform conventions");

    match cli.command {
        Some(cmd) => execute_command(cmd, &platform),
        None => {
            // No command provided - show help hint
            println!("{} path and text-file helpers", "fsutil".green().bold());
            println!();
            println!("Run {} for available commands.", "fsutil --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, platform: &fsutil::Platform) -> Result<()> {
    match cmd {
        Commands::Barename { paths } => commands::run_barename(&paths),
        Commands::CommonPath { paths } => commands::run_common_path(&paths, platform),
        Commands::ConfigFile {
            appname,
            domain,
            ext,
            json,
            create,
        } => commands::run_config_file(&domain, &appname, &ext, json, create),
        Commands::IniFile {
            appname,
            domain,
            json,
        } => commands::run_ini_file(&domain, &appname, json),
        Commands::Abs { path } => commands::run_abs(&path),
        Commands::Home => commands::run_home(),
        Commands::Probe { paths } => commands::run_probe(&paths),
        Commands::Lines { file, number } => commands::run_lines(&file, number),
        Commands::Convert { input, output } => commands::run_convert(&input, &output, platform),
    }
}
