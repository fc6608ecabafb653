//! Catalog Search Library
//!
//! The product search relevance engine and the HTTP service around it. The binary
//! (`main.rs`) wires these modules together.
//!
//! ## Modules
//! - **`catalog`**: The store boundary. Defines the `CatalogStore` contract, the candidate
//!   projection handed to the engine, and an in-memory catalog backend.
//! - **`search`**: Query normalization, synonym expansion, filter predicates, weighted
//!   relevance scoring, windowed ranking, pagination and response projection.
//! - **`config`**: Command-line configuration and engine constants.
//! - **`routes`**: The Axum router exposing search, suggestions and catalog admin endpoints.

pub mod catalog;
pub mod config;
pub mod routes;
pub mod search;
