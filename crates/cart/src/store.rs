//! The cart store and its derived views.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use sweetshop_catalog::Product;
use sweetshop_core::{Money, ProductName};

/// Cart-level error.
///
/// A negative quantity indicates a defect in the calling UI logic, not user
/// input, so the store fails fast instead of clamping and masking the bug.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("cart quantity must be non-negative, got {quantity}")]
    InvalidQuantity { quantity: i64 },
}

/// A product as it appears in the cart view: quantity > 0, with its line
/// total precomputed. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    pub name: ProductName,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

impl CartItem {
    fn for_product(product: &Product) -> Self {
        Self {
            name: product.name().clone(),
            quantity: product.quantity(),
            unit_price: product.price(),
            line_total: product.price().times(product.quantity() as u64),
        }
    }
}

/// Running order totals, derived from the current product mapping.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub total_quantity: i64,
    pub total_price: Money,
}

/// Authoritative mapping of product name → product (including quantity).
///
/// The store exclusively owns the product collection. The presentation layer
/// reads it and funnels every mutation (add, increase, decrease, remove)
/// through [`CartStore::set_quantity`]; semantically they are all the same
/// operation (replace quantity) with a derived argument.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CartStore {
    products: IndexMap<ProductName, Product>,
}

impl CartStore {
    /// An empty store; stays empty until the catalog load resolves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the fetched catalog, in fetch order.
    ///
    /// Called once at startup with the loader's result. Product names are
    /// unique per the catalog contract; a duplicate keeps the first entry's
    /// position and the later record wins.
    pub fn replace_catalog(&mut self, products: Vec<Product>) {
        self.products = IndexMap::with_capacity(products.len());
        for product in products {
            let name = product.name().clone();
            if self.products.insert(name.clone(), product).is_some() {
                tracing::warn!(%name, "duplicate product name in catalog payload");
            }
        }
    }

    /// Replace the quantity of the named product. The only mutation path.
    ///
    /// Unknown names are a no-op: the store never synthesizes catalog
    /// entries. Negative quantities are a caller defect and fail fast.
    pub fn set_quantity(&mut self, name: &ProductName, quantity: i64) -> Result<(), CartError> {
        if quantity < 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        match self.products.get_mut(name) {
            Some(product) => product.set_quantity(quantity),
            None => tracing::debug!(%name, "ignoring quantity update for unknown product"),
        }

        Ok(())
    }

    pub fn product(&self, name: &ProductName) -> Option<&Product> {
        self.products.get(name)
    }

    /// Current quantity of the named product; 0 for unknown names.
    pub fn quantity_of(&self, name: &ProductName) -> i64 {
        self.products.get(name).map_or(0, Product::quantity)
    }

    /// All catalog products, in catalog insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Products with quantity > 0, in catalog insertion order (never
    /// quantity or name order).
    pub fn cart_items(&self) -> Vec<CartItem> {
        self.products
            .values()
            .filter(|product| product.in_cart())
            .map(CartItem::for_product)
            .collect()
    }

    /// Live recomputation over the current product mapping.
    pub fn totals(&self) -> CartTotals {
        self.products
            .values()
            .filter(|product| product.in_cart())
            .fold(CartTotals::default(), |mut totals, product| {
                totals.total_quantity += product.quantity();
                totals.total_price += product.price().times(product.quantity() as u64);
                totals
            })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
