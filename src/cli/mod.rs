use clap::Parser;
use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::error::FxgenError;
use crate::generator::ManifestGenerator;
use crate::scanner::{FileCategories, ResourceScanner};
use crate::ui;

#[derive(Parser, Debug)]
#[command(name = "fxgen")]
#[command(version, about = "FiveM resource manifest generator", long_about = None)]
pub struct Args {
    /// Resource folder to scan (prompts when omitted)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Print the manifest to stdout instead of writing fxmanifest.lua
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Echo every accepted file as it is discovered
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (suppress output)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: Args) -> Result<()> {
    if !args.quiet {
        println!("{}", "FiveM FXManifest Generator".bold().blue());
        println!("{}", "==========================".blue());
        println!();
    }

    let directory = resolve_directory(&args)?;
    debug!("Resolved resource directory: {}", directory.display());

    let categories = scan_resource(&directory, &args);

    if !args.quiet {
        report_warnings(&categories);
        report_summary(&categories);
        println!("\nGenerating fxmanifest.lua...");
    }

    let generator = ManifestGenerator::new(&resource_name_of(&directory));

    if args.dry_run {
        let stdout = io::stdout();
        generator.render(&categories, &mut stdout.lock())?;
    } else {
        let manifest_path = generator.write_to_dir(&categories, &directory)?;

        if !args.quiet {
            println!(
                "\n{} fxmanifest.lua generated successfully at: {}",
                "✓".green(),
                manifest_path.display()
            );
            ui::pause_before_exit();
        }
    }

    Ok(())
}

/// Positional argument or interactive prompt, validated and canonicalized.
/// Both configuration failures are fatal before any scan occurs.
fn resolve_directory(args: &Args) -> Result<PathBuf> {
    let directory = match &args.directory {
        Some(path) => path.clone(),
        None => PathBuf::from(ui::prompt_for_directory()?),
    };

    if !directory.exists() {
        return Err(FxgenError::MissingDirectory(directory.display().to_string()).into());
    }
    if !directory.is_dir() {
        return Err(FxgenError::NotADirectory(directory.display().to_string()).into());
    }

    directory
        .canonicalize()
        .map_err(|e| FxgenError::ResolveDirectory(directory.display().to_string(), e).into())
}

fn scan_resource(directory: &Path, args: &Args) -> FileCategories {
    let scanner = ResourceScanner::new(directory);

    if args.quiet {
        return scanner.scan();
    }

    println!("\nScanning directory...");

    if args.verbose {
        return scanner.scan_with_observer(|relative| {
            println!("[Found] {}", relative);
        });
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    spinner.set_message("Scanning resource files...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let categories = scanner.scan();

    spinner.finish_and_clear();
    categories
}

/// A typical resource ships at least one client and one server script, so
/// an empty bucket usually means misnamed files. Non-fatal.
fn report_warnings(categories: &FileCategories) {
    if categories.client_scripts.is_empty() {
        println!("{}", "Warning: No client scripts found!".yellow());
    }
    if categories.server_scripts.is_empty() {
        println!("{}", "Warning: No server scripts found!".yellow());
    }
}

fn report_summary(categories: &FileCategories) {
    println!("\nSummary:");
    println!("  Client scripts: {}", categories.client_scripts.len());
    println!("  Server scripts: {}", categories.server_scripts.len());
    println!("  Shared scripts: {}", categories.shared_scripts.len());
    println!("  UI pages: {}", categories.ui_pages.len());
    println!("  Files: {}", categories.files.len());
    println!("  Dependencies: {}", categories.dependencies.len());
}

fn resource_name_of(directory: &Path) -> String {
    directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| directory.display().to_string())
}
