//! Navigation

use std::{collections::BTreeSet, sync::Arc};

use crate::{
    products::Product,
    repository::{ProductRepository, RepositoryError},
};

/// Distinct, non-empty categories of `products`, sorted lexicographically.
pub fn categories<'p>(products: impl IntoIterator<Item = &'p Arc<Product>>) -> Vec<String> {
    products
        .into_iter()
        .filter_map(|product| product.category())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// A single category link in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Category name
    pub category: String,

    /// Whether this category is currently being browsed
    pub is_selected: bool,
}

/// Category navigation menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    /// Build a menu from sorted categories, flagging `selected`.
    pub fn new(categories: Vec<String>, selected: Option<&str>) -> Self {
        let entries = categories
            .into_iter()
            .map(|category| MenuEntry {
                is_selected: selected == Some(category.as_str()),
                category,
            })
            .collect();

        Self { entries }
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// The selected category, if it is on the menu.
    pub fn selected(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.is_selected)
            .map(|entry| entry.category.as_str())
    }

    /// Category names in display order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.category.as_str())
    }

    /// Get the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the menu is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Menu generation over an injected repository.
#[derive(Debug, Clone)]
pub struct Navigation<R> {
    repository: R,
}

impl<R: ProductRepository> Navigation<R> {
    /// Create navigation over the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Build the category menu, flagging `selected`.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the repository cannot be read.
    pub fn menu(&self, selected: Option<&str>) -> Result<Menu, RepositoryError> {
        let products = self.repository.products()?;

        Ok(Menu::new(categories(&products), selected))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use crate::repository::InMemoryProductRepository;

    use super::*;

    fn product(id: u32, category: Option<&str>) -> Product {
        let product = Product::new(id, format!("p{id}"), Money::from_minor(100, GBP));

        match category {
            Some(category) => product.with_category(category),
            None => product,
        }
    }

    fn navigation(
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Navigation<InMemoryProductRepository>, RepositoryError> {
        Ok(Navigation::new(InMemoryProductRepository::with_products(
            products,
        )?))
    }

    #[test]
    fn can_create_categories() -> TestResult {
        let nav = navigation([
            product(1, Some("jeden")),
            product(2, Some("jeden")),
            product(3, Some("dwa")),
            product(4, Some("trzy")),
            product(5, Some("cztery")),
            product(6, Some("piec")),
        ])?;

        let menu = nav.menu(None)?;
        let categories: Vec<&str> = menu.categories().collect();

        assert_eq!(categories, ["cztery", "dwa", "jeden", "piec", "trzy"]);
        assert_eq!(menu.selected(), None);

        Ok(())
    }

    #[test]
    fn absent_and_empty_categories_are_excluded() {
        let products: Vec<Arc<Product>> = [
            product(1, None),
            product(2, Some("")),
            product(3, Some("Soccer")),
        ]
        .into_iter()
        .map(Arc::new)
        .collect();

        assert_eq!(categories(&products), ["Soccer"]);
    }

    #[test]
    fn indicates_selected_category() -> TestResult {
        let nav = navigation([product(1, Some("Apples")), product(4, Some("Oranges"))])?;

        let menu = nav.menu(Some("Apples"))?;

        assert_eq!(menu.selected(), Some("Apples"));
        assert_eq!(
            menu.entries(),
            [
                MenuEntry {
                    category: "Apples".to_string(),
                    is_selected: true
                },
                MenuEntry {
                    category: "Oranges".to_string(),
                    is_selected: false
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn unknown_selection_flags_nothing() -> TestResult {
        let nav = navigation([product(1, Some("Apples"))])?;

        let menu = nav.menu(Some("Pears"))?;

        assert_eq!(menu.len(), 1);
        assert_eq!(menu.selected(), None);

        Ok(())
    }

    #[test]
    fn empty_repository_gives_empty_menu() -> TestResult {
        let nav = navigation([])?;

        assert!(nav.menu(None)?.is_empty());

        Ok(())
    }
}
