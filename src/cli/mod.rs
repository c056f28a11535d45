use std::io;

use anyhow::Result;
use clap::Subcommand;
use storefront::{fixtures::Fixture, storefront::Storefront};

use crate::config::Config;

mod cart;
mod categories;
mod list;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// List a page of products
    List(list::ListArgs),

    /// Show the category menu
    Categories(categories::CategoriesArgs),

    /// Build a cart and show its contents
    Cart(cart::CartArgs),
}

pub(crate) fn run(config: Config) -> Result<()> {
    let mut fixture = Fixture::with_base_path(&config.fixtures);
    fixture.load_products(&config.fixture)?;

    let currency = fixture.currency()?;
    let store = Storefront::new(fixture.into_repository(), config.page_size)?;

    let stdout = io::stdout();
    let out = stdout.lock();

    match config.command {
        Commands::List(args) => list::run(&store, &args, out),
        Commands::Categories(args) => categories::run(&store, &args, out),
        Commands::Cart(args) => cart::run(&store, currency, &args, out),
    }
}
