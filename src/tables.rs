//! Terminal tables for listings, menus and carts.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, catalog::ProductsPage, navigation::Menu};

/// Errors that can occur while writing a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// IO error
    #[error("IO error")]
    Io(#[from] io::Error),
}

/// Write a page of products followed by its page link bar.
///
/// # Errors
///
/// Returns a [`TableError`] if writing fails.
pub fn write_products_page(mut out: impl io::Write, page: &ProductsPage) -> Result<(), TableError> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Category", "Price"]);

    for product in &page.products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.category().unwrap_or_default().to_string(),
            product.price.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(Columns::last(), Alignment::right());

    writeln!(out, "{table}")?;

    let links: Vec<String> = page
        .paging_info
        .page_links()
        .map(|link| {
            if link.is_current {
                format!("[{}]", link.page)
            } else {
                link.page.to_string()
            }
        })
        .collect();

    writeln!(
        out,
        "Page {} of {} ({} products{}): {}",
        page.paging_info.current_page,
        page.paging_info.total_pages(),
        page.paging_info.total_items,
        page.current_category
            .as_deref()
            .map(|category| format!(" in {category}"))
            .unwrap_or_default(),
        links.join(" ")
    )?;

    Ok(())
}

/// Write the category menu, marking the selected entry.
///
/// # Errors
///
/// Returns a [`TableError`] if writing fails.
pub fn write_menu(mut out: impl io::Write, menu: &Menu) -> Result<(), TableError> {
    writeln!(out, "  Home")?;

    for entry in menu.entries() {
        let marker = if entry.is_selected { '>' } else { ' ' };

        writeln!(out, "{marker} {}", entry.category)?;
    }

    Ok(())
}

/// Write cart lines and the cart summary.
///
/// # Errors
///
/// Returns a [`TableError`] if writing fails.
pub fn write_cart(mut out: impl io::Write, cart: &Cart) -> Result<(), TableError> {
    let mut builder = Builder::default();

    builder.push_record(["Quantity", "Item", "Price", "Subtotal"]);

    for line in cart.lines() {
        builder.push_record([
            line.quantity().to_string(),
            line.product().name.clone(),
            line.product().price.to_string(),
            line.line_total().to_string(),
        ]);
    }

    builder.push_record([
        String::new(),
        String::new(),
        "Total:".to_string(),
        cart.compute_total().to_string(),
    ]);

    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(Rows::first(), Alignment::center());
    table.modify(Columns::new(2..4), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(
        out,
        "{} item(s) in {} line(s)",
        cart.item_count(),
        cart.len()
    )?;

    Ok(())
}
