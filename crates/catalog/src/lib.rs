//! Product catalog: data model and one-shot loader.
//!
//! The catalog source is an external collaborator serving a static
//! `data.json` document. This crate owns the wire format, the validated
//! [`Product`] model, and the [`CatalogClient`] that fetches the document
//! exactly once at startup.

pub mod loader;
pub mod product;

pub use loader::{CatalogClient, CatalogError, DATA_FILE};
pub use product::{ImageSet, Product, ProductRecord};
