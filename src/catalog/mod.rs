//! Catalog Store Module
//!
//! The boundary between the search engine and the product catalog.
//!
//! ## Core Concepts
//! - **Contract**: `CatalogStore` is the only way the engine reads catalog data. It answers
//!   two questions for a `FilterPredicate`: how many rows match, and which rows (most
//!   recent first).
//! - **Projection**: Stored rows (`CatalogProduct`) carry visibility flags, stock and timestamps.
//!   The engine only ever receives the minimal `CandidateRecord` projection.
//! - **In-memory backend**: `InMemoryCatalog` keeps products in a concurrent map and evaluates
//!   predicates row by row. It backs the binary and the test suite.

pub mod handlers;
pub mod memory;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
