use anyhow::{bail, Result};
use clap::Args;
use items_lib::validation;
use items_lib::{CachedClient, ItemForm, ItemsError};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct CreateArgs {
    /// Item name
    #[arg(long)]
    pub name: String,

    /// Item description
    #[arg(long)]
    pub description: String,

    /// Price, must be greater than zero
    #[arg(long)]
    pub price: f64,

    /// Category
    #[arg(long)]
    pub category: String,

    /// Status: active or inactive
    #[arg(long, default_value = "active")]
    pub status: String,

    /// Tag, repeatable; at least one is required
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Rating from 0 to 5
    #[arg(long, default_value_t = 0.0)]
    pub rating: f64,

    /// Stock count
    #[arg(long, default_value_t = 0)]
    pub stock: i64,

    /// Mark the item as not available
    #[arg(long)]
    pub unavailable: bool,
}

pub async fn run(args: &CreateArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let mut form = ItemForm::new();
    form.name = args.name.clone();
    form.description = args.description.clone();
    form.price = args.price;
    form.category = args.category.clone();
    form.status = validation::validate_status(&args.status)?;
    form.rating = args.rating;
    form.stock = args.stock;
    form.is_available = !args.unavailable;
    for tag in &args.tags {
        form.set_tag_input(tag);
        form.commit_tag();
    }

    let created = match form.submit(client).await {
        Ok(item) => item,
        Err(ItemsError::Validation(errors)) => {
            for error in &errors {
                eprintln!("{}", error);
            }
            bail!("item not created: {} validation error(s)", errors.len());
        }
        Err(e) => return Err(e.into()),
    };

    eprintln!("Создано: id {}", created.id);
    match format {
        OutputFormat::Json => output::print_json(&created),
        OutputFormat::Csv => output::print_items_csv(std::slice::from_ref(&created))?,
        OutputFormat::Markdown => output::print_items_markdown(std::slice::from_ref(&created)),
        OutputFormat::Table => output::print_items_table(std::slice::from_ref(&created)),
    }
    Ok(())
}
