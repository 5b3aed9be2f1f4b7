use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clarity_core::practice::PracticeCategory;
use clarity_core::state::Theme;
use clarity_infrastructure::DEFAULT_SESSION_ID;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

use commands::AppContext;

#[derive(Parser)]
#[command(name = "clarity")]
#[command(about = "Clarity - understand sarcasm, figurative language and tone", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding config.toml and stored state
    #[arg(long, global = true, env = "CLARITY_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Session whose font size, name and history are used
    #[arg(long, global = true, env = "CLARITY_SESSION", default_value = DEFAULT_SESSION_ID)]
    session: String,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text for sarcasm, figurative language and tone
    Analyze {
        /// Text to analyze
        text: Option<String>,
        /// Read the text from stdin
        #[arg(long, conflicts_with = "text")]
        stdin: bool,
        /// Mark phrases with brackets instead of colors
        #[arg(long)]
        plain: bool,
    },
    /// Browse previous analyses of this session
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Show or change the reading font size
    Font {
        #[command(subcommand)]
        action: FontAction,
    },
    /// Show or change the name used in greetings
    Name {
        #[command(subcommand)]
        action: NameAction,
    },
    /// List built-in practice texts
    Examples {
        /// Only list examples of this category
        #[arg(long)]
        category: Option<PracticeCategory>,
        #[command(subcommand)]
        action: Option<ExamplesAction>,
    },
    /// Manage the current session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List analyses, newest first
    List,
    /// Show one analysis again
    Show {
        /// History item id
        id: String,
        /// Mark phrases with brackets instead of colors
        #[arg(long)]
        plain: bool,
    },
    /// Delete all history of this session
    Clear,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the current theme
    Show,
    /// Set the theme
    Set { theme: Theme },
    /// Advance light -> dark -> high-contrast -> light
    Cycle,
    /// Switch between light and dark
    Toggle,
}

#[derive(Subcommand)]
enum FontAction {
    Show,
    Increase,
    Decrease,
    Reset,
}

#[derive(Subcommand)]
enum NameAction {
    Show,
    /// Set the name; an empty name clears it
    Set { name: String },
    Clear,
    /// Print the time-of-day greeting
    Greet,
}

#[derive(Subcommand)]
enum ExamplesAction {
    /// Analyze a practice text
    Try {
        /// Example id, e.g. sarcasm-1
        id: String,
        #[arg(long)]
        plain: bool,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Forget font size, name and history of this session
    End,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = AppContext::new(cli.config_dir, cli.session)?;

    match cli.command {
        Commands::Analyze { text, stdin, plain } => {
            commands::analyze::run(&ctx, text, stdin, plain).await?
        }
        Commands::History { action } => match action {
            HistoryAction::List => commands::history::list(&ctx)?,
            HistoryAction::Show { id, plain } => commands::history::show(&ctx, &id, plain)?,
            HistoryAction::Clear => commands::history::clear(&ctx)?,
        },
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::theme::show(&ctx)?,
            ThemeAction::Set { theme } => commands::theme::set(&ctx, theme)?,
            ThemeAction::Cycle => commands::theme::cycle(&ctx)?,
            ThemeAction::Toggle => commands::theme::toggle(&ctx)?,
        },
        Commands::Font { action } => match action {
            FontAction::Show => commands::font::show(&ctx)?,
            FontAction::Increase => commands::font::increase(&ctx)?,
            FontAction::Decrease => commands::font::decrease(&ctx)?,
            FontAction::Reset => commands::font::reset(&ctx)?,
        },
        Commands::Name { action } => match action {
            NameAction::Show => commands::name::show(&ctx)?,
            NameAction::Set { name } => commands::name::set(&ctx, &name)?,
            NameAction::Clear => commands::name::clear(&ctx)?,
            NameAction::Greet => commands::name::greet(&ctx)?,
        },
        Commands::Examples { category, action } => match action {
            None => commands::examples::list(category),
            Some(ExamplesAction::Try { id, plain }) => {
                commands::examples::try_example(&ctx, &id, plain).await?
            }
        },
        Commands::Session { action } => match action {
            SessionAction::End => commands::session::end(&ctx)?,
        },
    }

    Ok(())
}
