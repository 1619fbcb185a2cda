//! Product data model and wire records.

use serde::{Deserialize, Serialize};

use sweetshop_core::{Money, ProductName};
use sweetshop_layout::LayoutTier;

use crate::loader::CatalogError;

/// Per-tier image references: one URI per layout tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}

impl ImageSet {
    /// The image variant to render for the given layout tier.
    pub fn for_tier(&self, tier: LayoutTier) -> &str {
        match tier {
            LayoutTier::Mobile => &self.mobile,
            LayoutTier::Tablet => &self.tablet,
            LayoutTier::Desktop => &self.desktop,
        }
    }
}

/// A catalog product plus its current cart quantity.
///
/// Quantity is absent from the wire payload and defaults to 0; it is mutated
/// only through the cart store's single mutation entry point. A product is
/// never removed from the catalog; quantity returning to 0 just excludes it
/// from the cart view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: ProductName,
    category: String,
    price: Money,
    images: ImageSet,
    quantity: i64,
}

impl Product {
    pub fn new(name: ProductName, category: String, price: Money, images: ImageSet) -> Self {
        Self {
            name,
            category,
            price,
            images,
            quantity: 0,
        }
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Whether this product currently appears in the cart view.
    pub fn in_cart(&self) -> bool {
        self.quantity > 0
    }

    /// Replace the cart quantity.
    ///
    /// All mutations funnel through `CartStore::set_quantity`, which
    /// validates the quantity before calling this.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

/// Wire record as served by the catalog source.
///
/// ```json
/// { "name": "...", "category": "...", "price": 5.5,
///   "image": { "mobile": "...", "tablet": "...", "desktop": "..." } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub image: ImageSet,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        if record.name.trim().is_empty() {
            return Err(CatalogError::Parse(
                "product name cannot be empty".to_owned(),
            ));
        }

        let price = Money::from_price(record.price).map_err(|err| {
            CatalogError::Parse(format!("product {:?}: {err}", record.name))
        })?;

        Ok(Product::new(
            ProductName::from(record.name),
            record.category,
            price,
            record.image,
        ))
    }
}
