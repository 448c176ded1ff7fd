use anyhow::Result;
use clap::{Parser, Subcommand};

use sitebrief::config::{Settings, SinkKind, SiteBriefPaths, WizardVariant};
use sitebrief::display::{format_catalog, format_settings};
use sitebrief::logging::init_logging;
use sitebrief::wizard::WizardController;

#[derive(Parser)]
#[command(
    name = "sitebrief",
    author = "Kaylee Beyene",
    version,
    about = "Terminal questionnaire that collects website requirements",
    long_about = "SiteBrief walks you through a short questionnaire about the \
                  website you want built: pages, colors, content, logo, \
                  inspiration and extras. The finished brief is sent to the \
                  studio when you submit."
)]
struct Cli {
    /// Log at debug level regardless of settings
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive questionnaire (default)
    #[command(alias = "ui")]
    Tui {
        /// Ask for a website plan before the other steps
        #[arg(long)]
        with_plan: bool,

        /// Override the configured submission sink
        #[arg(long, value_enum)]
        sink: Option<SinkKind>,
    },

    /// List the plans, themes, templates and extras on offer
    Catalog,

    /// Write the default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SiteBriefPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui {
        with_plan: false,
        sink: None,
    });
    let is_tui_mode = matches!(command, Commands::Tui { .. });

    let logging = init_logging(&paths, &settings.logging, is_tui_mode, cli.debug)?;
    if let Some(path) = &logging.log_file_path {
        tracing::debug!(path = %path.display(), "logging to file");
    }

    match command {
        Commands::Tui { with_plan, sink } => {
            if with_plan {
                settings.wizard_variant = WizardVariant::WithPlan;
            }
            if let Some(sink) = sink {
                settings.sink = sink;
            }

            // Fail before the terminal switches to the alternate screen
            let sink = sitebrief::sink::from_settings(&settings)?;
            let controller = WizardController::new(settings.wizard_variant);
            sitebrief::tui::run_tui(controller, sink)?;
        }
        Commands::Catalog => {
            print!("{}", format_catalog());
        }
        Commands::Init => {
            println!("Initializing SiteBrief at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Edit {} to choose a sink.", paths.settings_file().display());
            println!("Run 'sitebrief tui' to start the questionnaire.");
        }
        Commands::Config => {
            println!("SiteBrief Configuration");
            println!("=======================");
            print!("{}", format_settings(&settings, &paths));
            if !paths.is_initialized() {
                println!();
                println!("Not initialized yet; run 'sitebrief init' to write the defaults.");
            }
        }
    }

    Ok(())
}
