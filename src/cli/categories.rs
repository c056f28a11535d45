use std::io;

use anyhow::Result;
use clap::Args;
use storefront::{repository::ProductRepository, storefront::Storefront, tables};

#[derive(Debug, Args)]
pub(crate) struct CategoriesArgs {
    /// Category to mark as selected
    #[arg(short, long)]
    selected: Option<String>,
}

pub(crate) fn run<R: ProductRepository>(
    store: &Storefront<R>,
    args: &CategoriesArgs,
    out: impl io::Write,
) -> Result<()> {
    let menu = store.menu(args.selected.as_deref())?;

    tables::write_menu(out, &menu)?;

    Ok(())
}
