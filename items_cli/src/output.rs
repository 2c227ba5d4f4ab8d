use anyhow::Result;
use items_lib::types::{Item, Status};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct ItemRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Название")]
    #[serde(rename = "Название")]
    name: String,
    #[tabled(rename = "Описание")]
    #[serde(rename = "Описание")]
    description: String,
    #[tabled(rename = "Цена")]
    #[serde(rename = "Цена")]
    price: String,
    #[tabled(rename = "Категория")]
    #[serde(rename = "Категория")]
    category: String,
    #[tabled(rename = "Статус")]
    #[serde(rename = "Статус")]
    status: String,
    #[tabled(rename = "Рейтинг")]
    #[serde(rename = "Рейтинг")]
    rating: String,
    #[tabled(rename = "Количество")]
    #[serde(rename = "Количество")]
    stock: i64,
    #[tabled(rename = "Доступен")]
    #[serde(rename = "Доступен")]
    available: String,
}

// -- Row builders --

fn build_item_rows(items: &[Item]) -> Vec<ItemRow> {
    items
        .iter()
        .map(|item| ItemRow {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: format_number(item.price),
            category: item.category.clone(),
            status: status_label(item.status).to_string(),
            rating: format_number(item.rating),
            stock: item.stock,
            available: availability_label(item.is_available).to_string(),
        })
        .collect()
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Active => "Активен",
        Status::Inactive => "Неактивен",
    }
}

fn availability_label(available: bool) -> &'static str {
    if available {
        "Да"
    } else {
        "Нет"
    }
}

/// Renders whole numbers without a trailing `.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// -- Table output --

pub fn print_items_table(items: &[Item]) {
    println!("{}", Table::new(build_item_rows(items)));
}

// -- Markdown output --

pub fn print_items_markdown(items: &[Item]) {
    let mut table = Table::new(build_item_rows(items));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_items_csv(items: &[Item]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for mut row in build_item_rows(items) {
        row.name = sanitize_csv_field(&row.name);
        row.description = sanitize_csv_field(&row.description);
        row.category = sanitize_csv_field(&row.category);
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prefixes fields starting with a formula trigger so spreadsheets
/// treat them as text.
fn sanitize_csv_field(field: &str) -> String {
    if field.starts_with(['=', '+', '-', '@']) {
        format!("\t{}", field)
    } else {
        field.to_string()
    }
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod output_tests;
