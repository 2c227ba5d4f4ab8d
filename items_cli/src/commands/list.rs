use anyhow::{Context, Result};
use clap::Args;
use items_lib::types::Item;
use items_lib::{CachedClient, ItemFeed, ItemPager};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Page number to fetch (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: i64,

    /// Items per page
    #[arg(long, default_value_t = 10)]
    pub limit: i64,

    /// Accumulate every page instead of showing a single one
    #[arg(long)]
    pub all: bool,
}

pub async fn run(args: &ListArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    if args.all {
        list_all(args, client, format).await
    } else {
        list_page(args, client, format).await
    }
}

/// Fetches a single page through the page selector.
async fn list_page(args: &ListArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let mut pager = ItemPager::new(args.limit);
    pager.select_page(args.page, client).await?;

    let page = pager
        .current()
        .context("no page loaded after selection")?;
    eprintln!(
        "Страница {} из {} ({} записей)",
        page.page,
        page.total_pages(),
        page.total
    );
    print_items(&page.data, format)
}

/// Drains the whole listing page by page, the way the accumulating
/// view does when the last row keeps scrolling into sight.
async fn list_all(args: &ListArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let mut feed = ItemFeed::new(args.limit);
    feed.load_first(client).await?;
    while feed.on_last_row_visible(client).await? {}

    eprintln!("Всего записей: {}", feed.total());
    let items: Vec<Item> = feed.items().into_iter().cloned().collect();
    print_items(&items, format)
}

fn print_items(items: &[Item], format: &OutputFormat) -> Result<()> {
    if items.is_empty() {
        println!("Нет данных");
        return Ok(());
    }
    match format {
        OutputFormat::Json => output::print_json(&items),
        OutputFormat::Csv => output::print_items_csv(items)?,
        OutputFormat::Markdown => output::print_items_markdown(items),
        OutputFormat::Table => output::print_items_table(items),
    }
    Ok(())
}
