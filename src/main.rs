use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use budget_setup::cli::{handle_replay, run_wizard, ReplayOptions, WizardOutcome};
use budget_setup::cli::wizard::parse_date;
use budget_setup::config::{paths::SetupPaths, settings::Settings};
use budget_setup::display::format_category_list;
use budget_setup::export::{export_snapshot, ExportFormat};
use budget_setup::logging::init_tracing;
use budget_setup::models::standard_categories;
use budget_setup::setup::{BudgetSetupModel, SetupSnapshot};

#[derive(Parser)]
#[command(
    name = "budget-setup",
    version,
    about = "Budget setup wizard",
    long_about = "Pick your expense categories, give each one a budget and record \
                  an opening transaction before moving on."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive setup wizard
    Wizard {
        /// Write the final snapshot when setup completes, to this file or,
        /// without a value, to the exports directory
        #[arg(short, long, num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// Apply an intent script (JSON or YAML) and print the final snapshot
    Replay {
        /// Path to the script
        file: PathBuf,
        /// Script format (guessed from the extension by default)
        #[arg(long, value_enum)]
        script_format: Option<ExportFormat>,
        /// Output format (defaults to the configured export format)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
        /// Freeze "today" at this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_today)]
        today: Option<NaiveDate>,
        /// Fail unless every selected category is complete
        #[arg(long)]
        require_complete: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the standard categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Wizard { export }) => {
            let (paths, settings) = load_settings()?;
            let mut model =
                BudgetSetupModel::new().with_custom_icon(settings.custom_category_icon.clone());
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let outcome = run_wizard(&mut model, &settings, stdin.lock(), &mut stdout)?;

            if let (WizardOutcome::Completed(snapshot), Some(target)) = (&outcome, export) {
                let path = match target {
                    Some(path) => path,
                    None => default_export_path(&paths, settings.export_format)?,
                };
                write_snapshot(snapshot, settings.export_format, Some(&path))?;
                println!("Snapshot written to {}", path.display());
            }
        }
        Some(Commands::Replay {
            file,
            script_format,
            format,
            today,
            require_complete,
            output,
        }) => {
            let (_, settings) = load_settings()?;
            let options = ReplayOptions {
                script_format,
                today,
                require_complete,
            };
            let snapshot = handle_replay(&file, &settings, &options)
                .with_context(|| format!("Replay of {} failed", file.display()))?;
            write_snapshot(
                &snapshot,
                format.unwrap_or(settings.export_format),
                output.as_ref(),
            )?;
        }
        Some(Commands::Categories) => {
            print!("{}", format_category_list(&standard_categories()));
        }
        Some(Commands::Config) => {
            let (paths, settings) = load_settings()?;
            println!("Budget Setup Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Custom category icon: {}", settings.custom_category_icon);
            println!("  Date format:          {}", settings.date_format);
            println!("  Export format:        {:?}", settings.export_format);
            println!("  Log filter:           {}", settings.log_filter);
        }
        None => {
            println!("budget-setup - set up your budget categories");
            println!();
            println!("Run 'budget-setup --help' for usage information.");
            println!("Run 'budget-setup wizard' to start the setup wizard.");
        }
    }

    Ok(())
}

/// Resolve paths, read settings and start logging
///
/// Only commands that use the config directory call this, so `categories`
/// works without a home directory or with a broken config file.
fn load_settings() -> Result<(SetupPaths, Settings)> {
    let paths = SetupPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);
    Ok((paths, settings))
}

/// Timestamped file name under the exports directory
fn default_export_path(paths: &SetupPaths, format: ExportFormat) -> Result<PathBuf> {
    paths.ensure_directories()?;
    let name = format!(
        "budget-setup-{}.{}",
        Local::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    );
    Ok(paths.export_dir().join(name))
}

fn write_snapshot(
    snapshot: &SetupSnapshot,
    format: ExportFormat,
    path: Option<&PathBuf>,
) -> Result<()> {
    match path {
        Some(path) => {
            if path.is_dir() {
                bail!("{} is a directory", path.display());
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            export_snapshot(snapshot, format, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            export_snapshot(snapshot, format, &mut lock)?;
        }
    }
    Ok(())
}
