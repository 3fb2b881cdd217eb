//! SeaORM entities and the API-facing models derived from them.
//!
//! Each resource has an entity `Model` (the table row) and a separate API
//! struct with a `From<Model>` conversion, so the wire shape stays decoupled
//! from the persistence shape.

pub mod category;
pub mod sale;
pub mod spare_part;

pub use category::{Category, CategoryCreate};
pub use sale::{Sale, SaleCreate};
pub use spare_part::{SparePart, SparePartCreate, SparePartWithCategory};
