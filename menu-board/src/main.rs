//! menu-board — terminal rendition of a branch's digital menu
//!
//! Loads configuration from the environment, fetches the branch catalog once
//! and prints the filtered menu grouped by category.

mod logger;
mod render;

use clap::Parser;
use menu_client::{BranchCatalog, ClientConfig, MenuSession};

#[derive(Debug, Parser)]
#[command(name = "menu-board", about = "Print a branch's digital menu")]
struct Args {
    /// Search dishes by name or description
    #[arg(short, long, env = "MENU_SEARCH", default_value = "")]
    search: String,

    /// Category to show ("all" for every category)
    #[arg(short, long, env = "MENU_CATEGORY", default_value = "all")]
    category: String,

    /// Override the configured branch id
    #[arg(short, long)]
    branch: Option<String>,

    /// Directory for daily rolling log files
    #[arg(long, env = "LOG_DIR")]
    log_dir: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    logger::init_logger(args.log_dir.as_deref());

    let mut config = ClientConfig::from_env();
    if let Some(branch) = args.branch {
        config = config.with_branch_id(branch);
    }
    tracing::info!("Loading menu for branch {}", config.resolved_branch_id());

    let client = config.build_http_client()?;
    let catalog = BranchCatalog::new(client, config.branch_id.clone());

    let mut session = MenuSession::new(config.base_url.clone());
    session.set_search_term(args.search);
    session.select_category(args.category);

    print!("{}", render::render(&session));
    session.load(&catalog).await;
    print!("{}", render::render(&session));

    Ok(())
}
