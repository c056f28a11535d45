use std::io;

use anyhow::Result;
use clap::Args;
use rusty_money::iso::Currency;
use storefront::{
    cart::Cart, products::ProductId, repository::ProductRepository, storefront::Storefront,
    tables,
};
use tracing::warn;

#[derive(Debug, Args)]
pub(crate) struct CartArgs {
    /// Product to add, as ID or IDxQUANTITY (e.g. 3x2)
    #[arg(short, long, value_parser = parse_addition)]
    add: Vec<(ProductId, u32)>,

    /// Product id to remove after all additions
    #[arg(short, long)]
    remove: Vec<u32>,
}

pub(crate) fn run<R: ProductRepository>(
    store: &Storefront<R>,
    currency: &'static Currency,
    args: &CartArgs,
    out: impl io::Write,
) -> Result<()> {
    let mut cart = Cart::new(currency);

    for &(product_id, quantity) in &args.add {
        if !store.add_to_cart(&mut cart, product_id, quantity)? {
            warn!(product = %product_id, "no such product");
        }
    }

    for &product_id in &args.remove {
        store.remove_from_cart(&mut cart, ProductId::new(product_id));
    }

    tables::write_cart(out, &cart)?;

    Ok(())
}

fn parse_addition(s: &str) -> Result<(ProductId, u32), String> {
    let (id, quantity) = s.split_once('x').unwrap_or((s, "1"));

    let id = id
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid product id `{id}`: {err}"))?;

    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid quantity `{quantity}`: {err}"))?;

    if quantity == 0 {
        return Err(format!("quantity for product {id} must be at least 1"));
    }

    Ok((ProductId::new(id), quantity))
}
