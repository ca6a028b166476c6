// portfolio - the portfolio page, in a terminal
//
// Parses CLI args, sets up logging, and dispatches to handlers.

use anyhow::Result;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use portfolio_lib::{
    config::PortfolioConfig,
    content::{GALLERY, HERO_PHOTO, HIGHLIGHTS, PROFILE},
    core::source_for,
    ContentStore, PortfolioPage, ProjectRecord,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Projects, gallery and contact links from the portfolio page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project data file, URL or path (overrides PORTFOLIO_* settings)
    #[arg(long, global = true)]
    source: Option<String>,

    /// Log what the loader is doing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List projects, optionally filtered by title or tag
    Projects {
        /// Case-insensitive text to look for
        query: Option<String>,

        /// Print the visible projects as JSON
        #[arg(long)]
        json: bool,
    },
    /// Filter interactively, one query per line
    Browse,
    /// Validate a project data file
    Check {
        /// URL or path of the data file
        location: String,
    },
    /// Show the hero, highlights and contact links
    Profile,
    /// Show the gallery cards
    Gallery,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Projects { query, json } => handle_projects(cli.source, query, json).await,
        Command::Browse => handle_browse(cli.source).await,
        Command::Check { location } => handle_check(&location).await,
        Command::Profile => {
            handle_profile();
            Ok(())
        }
        Command::Gallery => {
            handle_gallery();
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .init();
}

fn present_page(source_override: Option<String>) -> Result<PortfolioPage> {
    let location = match source_override {
        Some(location) => location,
        None => PortfolioConfig::from_env()?.projects_location()?,
    };

    let source = Arc::from(source_for(&location));
    Ok(PortfolioPage::present(ContentStore::new(), source))
}

async fn handle_projects(
    source: Option<String>,
    query: Option<String>,
    json: bool,
) -> Result<()> {
    let mut page = present_page(source)?;
    page.settle().await;

    let view = page.view_mut();
    view.set_query(query.unwrap_or_default());
    let visible = view.visible();

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    print_projects(view.query(), &visible);
    Ok(())
}

async fn handle_browse(source: Option<String>) -> Result<()> {
    let mut page = present_page(source)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut store_open = true;

    println!("Type to filter projects. Empty line shows everything, Ctrl-D quits.");
    print_projects("", &page.view().visible());

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let view = page.view_mut();
                view.set_query(line);
                print_projects(view.query(), &view.visible());
            }
            changed = page.view_mut().changed(), if store_open => {
                if changed {
                    let view = page.view();
                    print_projects(view.query(), &view.visible());
                } else {
                    store_open = false;
                }
            }
        }
    }

    Ok(())
}

async fn handle_check(location: &str) -> Result<()> {
    let source = source_for(location);

    match source.fetch().await {
        Ok(projects) => {
            println!("✓ {} is a valid project list ({} projects)", location, projects.len());
            Ok(())
        }
        // reported once, by main
        Err(e) => Err(anyhow::anyhow!("✗ {}", e.user_message())),
    }
}

fn handle_profile() {
    println!("\n{}", PROFILE.name);
    println!("{}", "=".repeat(60));
    println!("{}", PROFILE.headline);
    println!("{}", PROFILE.title);
    println!("Photo: {}", HERO_PHOTO);

    println!("\nHighlights:");
    for highlight in HIGHLIGHTS {
        println!("  • {}", highlight);
    }

    println!("\nLinks:");
    println!("  {:<10} {}", "Résumé:", PROFILE.resume);
    println!("  {:<10} {}", "LinkedIn:", PROFILE.linkedin);
    println!("  {:<10} {}", "GitHub:", PROFILE.github);
    println!("  {:<10} {}", "Email:", PROFILE.mailto());
    println!("  {:<10} {}", "Video:", PROFILE.video);

    println!("{}", "=".repeat(60));
    println!("{}", PROFILE.footer(chrono::Local::now().year()));
}

fn handle_gallery() {
    println!("\nThrowback Gallery");
    println!("{}", "=".repeat(60));
    for (i, item) in GALLERY.iter().enumerate() {
        println!("{:3}. {}", i + 1, item.title.unwrap_or(item.alt));
        if let Some(caption) = item.caption {
            println!("     {}", caption);
        }
        println!("     {}", item.src);
    }
    println!("{}", "=".repeat(60));
}

fn print_projects(query: &str, projects: &[ProjectRecord]) {
    if projects.is_empty() {
        println!("No projects match '{}'", query);
        return;
    }

    if query.is_empty() {
        println!("\n{} project(s):", projects.len());
    } else {
        println!("\n{} project(s) matching '{}':", projects.len(), query);
    }
    println!("{}", "=".repeat(60));

    for (i, project) in projects.iter().enumerate() {
        println!("{:3}. {} ({})", i + 1, project.title, project.year);
        if !project.tags.is_empty() {
            println!("     [{}]", project.tags.join(", "));
        }
        println!("     {}", project.description);
        for link in project.links() {
            println!("     {}: {}", link.label, link.href);
        }
    }

    println!("{}", "=".repeat(60));
}
