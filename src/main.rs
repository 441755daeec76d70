use anyhow::Result;
use clap::{Parser, Subcommand};

use repair_quote::cli::{
    handle_catalog_command, handle_estimate_command, handle_submissions_command, CatalogKind,
    EstimateArgs, SubmissionsCommands,
};
use repair_quote::config::{QuotePaths, Settings};
use repair_quote::logging;
use repair_quote::submissions::SubmissionLog;

#[derive(Parser)]
#[command(
    name = "repair-quote",
    version,
    about = "Terminal-based device repair quote wizard",
    long_about = "repair-quote walks you through choosing a device, its model, the \
                  issues to fix and your location, then estimates the repair price \
                  and records your quote request."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive quote wizard (default)
    #[command(alias = "ui")]
    Tui,

    /// Estimate a repair price without the wizard
    Estimate(EstimateArgs),

    /// Show the device, model and issue catalogs
    Catalog {
        /// Which catalog to show
        #[arg(value_enum, default_value = "devices")]
        kind: CatalogKind,

        /// Device id to filter models by
        #[arg(short, long)]
        device: Option<String>,
    },

    /// Recorded quote requests
    #[command(subcommand)]
    Submissions(SubmissionsCommands),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = QuotePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            logging::init_tui(&paths.log_file(), "repair_quote=info");
            repair_quote::tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Estimate(args)) => {
            logging::init_stderr("repair_quote=warn");
            handle_estimate_command(&settings, args)?;
        }
        Some(Commands::Catalog { kind, device }) => {
            logging::init_stderr("repair_quote=warn");
            handle_catalog_command(kind, device)?;
        }
        Some(Commands::Submissions(cmd)) => {
            logging::init_stderr("repair_quote=warn");
            handle_submissions_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Config { write }) => {
            if write {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            let log = SubmissionLog::new(paths.submissions_log());
            println!("repair-quote Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Submission log:   {}", paths.submissions_log().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Base price:             {}", settings.format_price(settings.base_price));
            println!("  Dependent fields:       {:?}", settings.dependent_fields);
            println!("  Default contact method: {}", settings.default_contact_method);
            println!("  Record submissions:     {}", settings.record_submissions);
            if log.exists() {
                println!();
                println!("Recorded submissions: {}", log.entry_count()?);
            }
        }
    }

    Ok(())
}
