//! # Terminal Rendering
//!
//! Turns snapshots and products into text. Pure string building so it can
//! be tested without a terminal.

use std::fmt::Write;
use storefront_core::{CatalogSnapshot, Product};

/// Renders the list screen: status line, category chips, products.
pub fn render_list(snapshot: &CatalogSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Source: {}  Sort: {}  Page {}/{}",
        snapshot.source.to_string().to_uppercase(),
        snapshot.sort_order.to_string().to_uppercase(),
        snapshot.page,
        snapshot.total_pages
    );
    let _ = writeln!(out, "{}", render_categories(snapshot));
    if !snapshot.search_query.is_empty() {
        let _ = writeln!(out, "Search: \"{}\"", snapshot.search_query);
    }
    out.push('\n');

    if let Some(error) = &snapshot.error {
        let _ = writeln!(out, "Error: {}", error);
        return out;
    }
    if let Some(placeholder) = &snapshot.placeholder {
        let _ = writeln!(out, "{}", placeholder);
        return out;
    }

    for product in &snapshot.filtered {
        let _ = writeln!(out, "{}", render_row(product));
    }
    out
}

/// `[all] shoes hats` with the selected category bracketed.
pub fn render_categories(snapshot: &CatalogSnapshot) -> String {
    snapshot
        .categories
        .iter()
        .map(|c| {
            if *c == snapshot.selected_category {
                format!("[{}]", c)
            } else {
                c.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One list row.
pub fn render_row(product: &Product) -> String {
    let mut row = format!(
        "#{:<4} {:<40} {:>10}  {}",
        product.id,
        truncate(&product.title, 40),
        product.formatted_price(),
        product.category
    );
    if product.has_discount() {
        let _ = write!(row, "  {}% off", product.discount.unwrap_or_default());
    }
    if let Some(rating) = product.rating {
        let _ = write!(row, "  * {} ({} reviews)", rating.rate, rating.count);
    }
    row
}

/// The detail screen.
pub fn render_detail(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", product.title);
    let _ = write!(out, "Price: {}", product.formatted_price());
    if product.has_discount() {
        let _ = write!(out, "  Save {}%", product.discount.unwrap_or_default());
    }
    out.push('\n');
    let _ = writeln!(out, "Category: {}", product.category);
    if let Some(brand) = &product.brand {
        let _ = writeln!(out, "Brand: {}", brand);
    }
    if let Some(model) = &product.model {
        let _ = writeln!(out, "Model: {}", model);
    }
    if let Some(rating) = product.rating {
        let _ = writeln!(out, "Rating: {} ({} reviews)", rating.rate, rating.count);
    }
    if !product.image.is_empty() {
        let _ = writeln!(out, "Image: {}", product.image);
    }
    let description = product.description_or_empty();
    if !description.is_empty() {
        let _ = writeln!(out, "\n{}", description);
    }
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CatalogState, DataSource, Rating, NO_RESULTS_PLACEHOLDER};

    fn product() -> Product {
        Product {
            id: 3,
            title: "Fjallraven Backpack".to_string(),
            description: Some("Fits 15 inch laptops".to_string()),
            price: 109.95,
            category: "men's clothing".to_string(),
            image: String::new(),
            rating: Some(Rating {
                rate: 3.9,
                count: 120,
            }),
            brand: None,
            model: None,
            color: None,
            discount: Some(10.0),
        }
    }

    #[test]
    fn test_row_contains_price_rating_and_discount() {
        let row = render_row(&product());
        assert!(row.contains("$109.95"));
        assert!(row.contains("10% off"));
        assert!(row.contains("(120 reviews)"));
    }

    #[test]
    fn test_categories_mark_selection() {
        let state = CatalogState::new(DataSource::Local, 20);
        assert_eq!(render_categories(&state.snapshot()), "[all]");
    }

    #[test]
    fn test_list_shows_placeholder_when_empty() {
        let mut state = CatalogState::new(DataSource::Local, 20);
        state.replace_products(vec![product()]);
        state.set_search("umbrella");

        let out = render_list(&state.snapshot());
        assert!(out.contains(NO_RESULTS_PLACEHOLDER));
        assert!(out.contains("Search: \"umbrella\""));
    }

    #[test]
    fn test_list_shows_error_instead_of_rows() {
        let mut state = CatalogState::new(DataSource::Remote, 20);
        state.fail_and_clear("Network error: connection refused");

        let out = render_list(&state.snapshot());
        assert!(out.contains("Error: Network error: connection refused"));
    }

    #[test]
    fn test_detail() {
        let out = render_detail(&product());
        assert!(out.starts_with("Fjallraven Backpack\n"));
        assert!(out.contains("Save 10%"));
        assert!(out.contains("Fits 15 inch laptops"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long product title", 10), "a very ...");
    }
}
