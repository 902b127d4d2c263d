//! CLI binary for painpoint.

use clap::{Args, Parser, Subcommand};
use painpoint::form_file::render_form;
use painpoint::{
    resolve_form, AppConfig, DryRunOpener, FormFormat, FormOverrides, SystemTabOpener,
};
use painpoint::listing::{platform_lines, preset_lines, trends_category_lines};
use painpoint_query::{
    build_and_open_searches, fetch_suggestions, format_preview_query, FormState, PlatformId,
    SearchEngine, TabOpener, TimeFilter,
};
use std::path::PathBuf;
use tracing::info;

/// Painpoint: find customer pain points with site-targeted searches.
#[derive(Parser)]
#[command(name = "painpoint", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    form: FormArgs,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Form fields. A form file is loaded first, then these flags override it.
#[derive(Args)]
struct FormArgs {
    /// TOML or JSON (`.json`) form file.
    #[arg(long, global = true)]
    form: Option<PathBuf>,

    /// Main topic, e.g. "meal planning apps".
    #[arg(short, long, global = true)]
    topic: Option<String>,

    /// Additional keywords; quoted phrases become an OR group.
    #[arg(short, long, global = true)]
    keywords: Option<String>,

    /// Platform id (repeatable). Replaces the form file's selection.
    #[arg(short, long = "platform", global = true)]
    platforms: Vec<PlatformId>,

    /// Phrase to include (repeatable).
    #[arg(long = "phrase", global = true)]
    phrases: Vec<String>,

    /// Phrase preset id; replaces the phrase selection.
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Search engine: google, duckduckgo or bing.
    #[arg(short, long, global = true)]
    engine: Option<SearchEngine>,

    /// Time filter: any, hour, day, week, month or year (Google only).
    #[arg(long = "time", global = true)]
    time_filter: Option<TimeFilter>,

    /// Google Trends category id.
    #[arg(long, global = true)]
    trends_category: Option<String>,
}

impl FormArgs {
    fn overrides(&self) -> FormOverrides {
        FormOverrides {
            topic: self.topic.clone(),
            keywords: self.keywords.clone(),
            platforms: self.platforms.clone(),
            phrases: self.phrases.clone(),
            preset: self.preset.clone(),
            engine: self.engine,
            time_filter: self.time_filter,
            trends_category: self.trends_category.clone(),
        }
    }
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Print the combined preview query.
    Preview,

    /// Open one search per selected platform and print the links.
    Search {
        /// Print the links without opening browser tabs.
        #[arg(long)]
        no_open: bool,
    },

    /// Print topic suggestions for a partial query.
    Suggest {
        /// Partial topic text.
        text: String,
    },

    /// Print the resolved form (TOML, or JSON with --json).
    Form {
        #[arg(long)]
        json: bool,
    },

    /// List searchable platforms.
    Platforms,

    /// List phrase presets and categories.
    Presets,

    /// List Google Trends categories.
    TrendsCategories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_config_path);
    let config = AppConfig::load_or_default(&config_path)?;

    // RUST_LOG still wins over the configured filter.
    painpoint::logging::init_tracing(&config.logging.filter);

    match cli.command {
        Command::Preview => {
            let form = load_form(&config, &cli.form)?;
            println!("{}", format_preview_query(&form));
            Ok(())
        }
        Command::Search { no_open } => {
            let form = load_form(&config, &cli.form)?;
            let open = config.search.open_tabs && !no_open;
            if open {
                run_search(&form, &SystemTabOpener)
            } else {
                run_search(&form, &DryRunOpener::new())
            }
        }
        Command::Suggest { text } => run_suggest(&config, &text).await,
        Command::Form { json } => {
            let form = load_form(&config, &cli.form)?;
            let format = if json { FormFormat::Json } else { FormFormat::Toml };
            println!("{}", render_form(&form, format)?);
            Ok(())
        }
        Command::Platforms => {
            print_lines(platform_lines());
            Ok(())
        }
        Command::Presets => {
            print_lines(preset_lines());
            Ok(())
        }
        Command::TrendsCategories => {
            print_lines(trends_category_lines());
            Ok(())
        }
    }
}

fn load_form(config: &AppConfig, args: &FormArgs) -> anyhow::Result<FormState> {
    Ok(resolve_form(config, args.form.as_deref(), &args.overrides())?)
}

fn run_search(form: &FormState, opener: &dyn TabOpener) -> anyhow::Result<()> {
    let dispatch = build_and_open_searches(form, opener);
    if dispatch.links.is_empty() {
        anyhow::bail!("{}: {}", dispatch.notice.title, dispatch.notice.description);
    }
    info!(links = dispatch.links.len(), "search dispatched");
    println!("{}: {}", dispatch.notice.title, dispatch.notice.description);
    for link in &dispatch.links {
        println!("{}: {}", link.platform_name, link.url);
    }
    Ok(())
}

async fn run_suggest(config: &AppConfig, text: &str) -> anyhow::Result<()> {
    let suggestions = fetch_suggestions(text, &config.suggest).await?;
    if suggestions.is_empty() {
        println!("No suggestions.");
    }
    for suggestion in suggestions {
        println!("{}", suggestion.title);
    }
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
