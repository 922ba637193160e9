mod repl;

use anyhow::Result;
use clap::Parser;
use item_catalog::{CatalogClient, CatalogConfig};
use repl::Flow;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tradeboard_app::{ListingFeed, MarketSession};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog endpoint, must answer with `{ "items": [...] }`
    #[arg(short, long, default_value = CatalogConfig::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// User agent sent with the catalog request
    #[arg(long, default_value = CatalogConfig::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Start with an empty feed instead of the example post
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = CatalogConfig::new(&args.endpoint)?.with_user_agent(&args.user_agent);
    let client = CatalogClient::new(config)?;
    let mut session = if args.no_seed {
        MarketSession::with_feed(ListingFeed::empty())
    } else {
        MarketSession::new()
    };
    session.load_catalog(&client).await;
    info!(status = ?session.catalog().status(), "board ready");

    let mut stdout = std::io::stdout();
    writeln!(stdout, "Item Marketplace. Type `help` for commands.")?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if repl::handle_line(&mut session, &line, &mut stdout)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
