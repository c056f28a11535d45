use std::io;

use anyhow::Result;
use clap::Args;
use storefront::{repository::ProductRepository, storefront::Storefront, tables};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Only list products in this category
    #[arg(short, long)]
    category: Option<String>,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    page: u32,
}

pub(crate) fn run<R: ProductRepository>(
    store: &Storefront<R>,
    args: &ListArgs,
    out: impl io::Write,
) -> Result<()> {
    let page = store.list_products(args.category.as_deref(), args.page)?;

    tables::write_products_page(out, &page)?;

    Ok(())
}
