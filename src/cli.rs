//! Command-line shell around the view layer.
//!
//! The shell owns the loaded data and the [`ViewState`]; each subcommand
//! builds a state through [`Action`]s, asks the layout controller for the
//! matching view and prints it.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::entities::ModuleId;
use crate::icons::IconService;
use crate::logger::{self, Logger};
use crate::storage;
use crate::ui::core::{Action, AppContext, ViewState};
use crate::ui::{layout, renderer, router};
use crate::utils::datetime;

#[derive(Parser)]
#[command(name = "gardenist")]
#[command(about = "Browse your garden catalogs and upcoming garden tasks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./gardenist.toml or the XDG config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Garden snapshot JSON (defaults to the configured or XDG data path)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Print captured log lines to stderr after the command
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Today's and this week's tasks, recent items and catalog sizes
    Dashboard {
        /// Day to treat as today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List a module's items, optionally filtered
    List {
        module: ModuleId,

        #[arg(long, short)]
        search: Option<String>,

        /// Id of the item to show in the detail pane
        #[arg(long)]
        select: Option<String>,
    },

    /// Show one item's details
    Show { module: ModuleId, id: String },

    /// Tasks on a calendar day
    Calendar {
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Registered modules and what they allow
    Modules,

    /// Write a default configuration file
    InitConfig {
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let memory = Logger::new();
    if let Some(path) = logger::init(&config.logging, &memory)? {
        log::info!("Logging to {}", path.display());
    }

    let today = datetime::today();
    let output = match cli.command.unwrap_or(Commands::Dashboard { date: None }) {
        Commands::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Commands::Dashboard { date } => {
            let ctx = load_context(cli.data, config)?;
            let view = layout::derive_home_view(&ctx, date.unwrap_or(today));
            renderer::render_home(&view, &ctx.icons)
        }
        Commands::List { module, search, select } => {
            let mut state = ViewState::new(config.default_module()).apply(Action::SwitchModule(module));
            if let Some(term) = search {
                state = state.apply(Action::SetSearch(term));
            }
            if let Some(id) = select {
                state = state.apply(Action::SelectItem(id));
            }
            let ctx = load_context(cli.data, config)?;
            let view = layout::derive_module_view(&state, &ctx);
            renderer::render_module(&view, &ctx.icons)
        }
        Commands::Show { module, id } => {
            let state = ViewState::new(module).apply(Action::SelectItem(id));
            let ctx = load_context(cli.data, config)?;
            let view = layout::derive_module_view(&state, &ctx);
            renderer::render_module(&view, &ctx.icons)
        }
        Commands::Calendar { date } => {
            let ctx = load_context(cli.data, config)?;
            let day = date.unwrap_or(today);
            let tasks = layout::derive_calendar_day(&ctx, day);
            renderer::render_calendar_day(day, &tasks, today, &ctx.icons)
        }
        Commands::Modules => {
            let icons = IconService::new(config.ui.icon_theme);
            renderer::render_modules(&router::all_module_configs(), &icons)
        }
    };

    print!("{}", output);

    if cli.verbose {
        for line in memory.get_logs().iter().rev() {
            eprintln!("{}", line);
        }
    }
    Ok(())
}

fn load_context(data: Option<PathBuf>, config: Config) -> Result<AppContext> {
    let snapshot_path = match data {
        Some(path) => path,
        None => config.snapshot_path()?,
    };
    let snapshot = storage::load_or_empty(&snapshot_path)
        .with_context(|| format!("Failed to load garden data from {}", snapshot_path.display()))?;
    Ok(AppContext::new(snapshot, config))
}
