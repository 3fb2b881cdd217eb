//! Inventory and sales tracking API for an auto-spare-parts shop.
//!
//! Three resources (categories, spare parts, sales) exposed over HTTP with
//! basic CRUD operations backed by SQLite through SeaORM.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;

pub use errors::ApiError;
