//! Value catalog: the fixed, ordered list of categories and value words
//! a user picks from.

pub mod data;
pub mod entities;

pub use entities::{Catalog, CatalogEntry, Category, Source};
