use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::catalog::CatalogEntry;
use crate::models::{BudgetItem, ItemDraft};

/// Parse a currency cell, tolerating "$", thousands commas, surrounding
/// quotes and whitespace. Empty cells are an error; amounts are mandatory
/// in item and catalog files.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned = s.trim().trim_matches('"').replace(['$', ','], "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        anyhow::bail!("Empty amount");
    }
    Decimal::from_str(cleaned).with_context(|| format!("Invalid amount: '{s}'"))
}

/// Load a plan's budget items from CSV with columns
/// `item_code, description, unit_price, quantity[, category]`.
/// Every row must pass draft validation (price ≥ 0.01, quantity ≥ 1).
pub(crate) fn load_items(path: &Path, plan_id: i64) -> Result<Vec<BudgetItem>> {
    let rows = read_rows(path)?;
    let rows = skip_header(rows, &[2, 3]);

    let mut items = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let item = parse_item_row(row, plan_id)
            .with_context(|| format!("Row {}: invalid budget item", i + 1))?;
        items.push(item);
    }
    Ok(items)
}

fn parse_item_row(row: &[String], plan_id: i64) -> Result<BudgetItem> {
    let unit_price = parse_amount(cell(row, 2)).context("unit price")?;
    let quantity: u32 = cell(row, 3)
        .trim()
        .parse()
        .with_context(|| format!("Invalid quantity: '{}'", cell(row, 3)))?;

    let draft = ItemDraft {
        item_code: cell(row, 0).trim().to_string(),
        description: cell(row, 1).trim().to_string(),
        category: nonempty(cell(row, 4)),
        unit_price: Some(unit_price),
        quantity: Some(quantity),
    };
    draft.into_item(plan_id).map_err(|errors| {
        let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        anyhow::anyhow!("{}", msgs.join("; "))
    })
}

/// Load an item catalog from CSV with columns
/// `item_code, description, category, unit_price`.
pub(crate) fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let rows = read_rows(path)?;
    let rows = skip_header(rows, &[3]);

    let mut entries = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let unit_price = parse_amount(cell(row, 3))
            .with_context(|| format!("Row {}: invalid catalog price", i + 1))?;
        entries.push(CatalogEntry {
            item_code: cell(row, 0).trim().to_string(),
            description: cell(row, 1).trim().to_string(),
            category: nonempty(cell(row, 2)),
            unit_price,
        });
    }
    Ok(entries)
}

fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .context("Failed to open CSV file")?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result.context("Failed to read CSV record")?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    if rows.is_empty() {
        anyhow::bail!("CSV file is empty");
    }
    Ok(rows)
}

/// Drop a leading header row if present, detected the cheap way: a header's
/// numeric columns don't parse as amounts.
fn skip_header(mut rows: Vec<Vec<String>>, numeric_columns: &[usize]) -> Vec<Vec<String>> {
    let looks_like_header = numeric_columns
        .iter()
        .all(|&col| parse_amount(cell(&rows[0], col)).is_err());
    if looks_like_header {
        rows.remove(0);
    }
    rows
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

fn nonempty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests;
