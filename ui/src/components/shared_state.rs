use dioxus::prelude::*;

use shopfront_common::error::ListingError;
use shopfront_common::product::{parse_catalog, Product};

/// Catalog state shared across all components.
///
/// Written by the catalog store (or the example-data seeder); pages only read.
#[derive(Clone, Debug)]
pub struct ProductsState {
    /// Full catalog; `None` until the store has delivered it.
    pub all_products: Option<Vec<Product>>,
    /// Whether the store is still fetching the catalog.
    pub is_loading: bool,
}

impl ProductsState {
    pub fn new() -> Self {
        Self {
            all_products: None,
            is_loading: true,
        }
    }

    /// Replace the catalog and mark loading as finished.
    pub fn set_catalog(&mut self, products: Vec<Product>) {
        tracing::info!(count = products.len(), "catalog loaded");
        self.all_products = Some(products);
        self.is_loading = false;
    }

    /// Decode the store's JSON payload into the catalog.
    ///
    /// On a malformed payload loading still finishes, with no catalog, so the
    /// page shows its empty state instead of spinning forever.
    pub fn load_json(&mut self, json: &str) -> Result<(), ListingError> {
        match parse_catalog(json) {
            Ok(products) => {
                self.set_catalog(products);
                Ok(())
            }
            Err(err) => {
                tracing::error!("Failed to decode catalog: {err}");
                self.all_products = None;
                self.is_loading = false;
                Err(err)
            }
        }
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in self.all_products.iter().flatten() {
            if !product.category.is_empty() && !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

pub fn use_products_state() -> Signal<ProductsState> {
    use_context::<Signal<ProductsState>>()
}
