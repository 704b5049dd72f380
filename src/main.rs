use clap::{Parser, Subcommand};
use log::{error, info};
use meal_finder::{
    finder_from_env, FinderConfig, HtmlDocument, MealDbClient, MealFinder, Outcome,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Browse TheMealDB and write the resulting page as HTML
#[derive(Debug, Parser)]
#[command(name = "meal-finder", version, about)]
struct Cli {
    /// Config file (defaults to ./meal-finder.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Write the page here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Render with the category side menu open
    #[arg(long, global = true)]
    menu: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Only the category grid
    Categories,
    /// Search meals by name
    Search { term: String },
    /// List the meals of a category
    Category { name: String },
    /// Show one meal's recipe
    Meal { id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(Outcome::Failed) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Outcome, Box<dyn std::error::Error>> {
    let finder = if cli.config.is_none() && cli.base_url.is_none() {
        finder_from_env()?
    } else {
        let mut config = match &cli.config {
            Some(path) => FinderConfig::load_from(path)?,
            None => FinderConfig::load()?,
        };
        if let Some(base_url) = cli.base_url {
            config.api.base_url = base_url;
        }
        let client = MealDbClient::from_config(&config.api)?;
        MealFinder::new(client, HtmlDocument::default())
    };
    info!("Using API at {}", finder.api().base_url());

    // Initial page load
    let initial = finder.load_categories().await;
    if cli.menu {
        finder.toggle_menu();
    }

    let outcome = match &cli.command {
        Command::Categories => initial,
        Command::Search { term } => finder.search_meals(term).await,
        Command::Category { name } => finder.load_meals_by_category(name).await,
        Command::Meal { id } => finder.load_meal_detail(id).await,
    };

    let page = finder.ui().render_page();
    match cli.output {
        Some(path) => {
            tokio::fs::write(&path, page).await?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", page),
    }

    Ok(outcome)
}
