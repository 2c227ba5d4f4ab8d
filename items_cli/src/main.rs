mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use items_lib::{CachedClient, Client, PageCache, ResponseShape};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "items")]
#[command(about = "Browse and create catalog items")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Base URL of the items server
    #[arg(long, default_value = "http://localhost:3001", global = true)]
    base_url: String,

    /// Expect the wrapped {"data": [...]} body shape (test transport)
    #[arg(long, global = true)]
    wrapped_body: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List items
    List(commands::list::ListArgs),
    /// Create a new item
    Create(commands::create::CreateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("items=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let shape = if cli.wrapped_body {
        ResponseShape::Wrapped
    } else {
        ResponseShape::Bare
    };
    let cache = PageCache::new(Duration::from_secs(300));
    let client = CachedClient::with_client(
        Client::with_base_url(&cli.base_url).with_shape(shape),
        cache,
    );

    match &cli.command {
        Commands::List(args) => commands::list::run(args, &client, &format).await?,
        Commands::Create(args) => commands::create::run(args, &client, &format).await?,
    }

    Ok(())
}
