pub mod api;
pub mod cafe;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod server;

pub use cafe::{CafeError, CafeParams, CafeQuery, find_cafes, handle, lookup, render};
pub use catalog::{CatalogError, CityCatalog};
pub use server::{create_app, start_server};
