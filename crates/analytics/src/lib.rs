//! # Salesboard Analytics Engine
//!
//! This crate computes per-seller sales performance from a complete
//! in-memory dataset: revenue, profit, sales count, rank-based bonus, and
//! each seller's best-selling products.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   files, formatting, or configuration loading. It depends only on
//!   `core-types` and the `strategies` traits.
//! - **Stateless Calculation:** The `SalesAnalyticsEngine` is a stateless
//!   calculator. It takes the dataset and an options bundle as input and
//!   produces ranked `SellerReport`s as output. This makes it highly
//!   reliable and easy to test.
//! - **Mutate, then freeze:** per-seller accumulators are created, mutated,
//!   and consumed entirely within one `analyze` call; callers only ever see
//!   the immutable report records.
//!
//! ## Public API
//!
//! - `SalesAnalyticsEngine`: The main struct that contains the pipeline.
//! - `AnalysisOptions`: The strategy bundle plus report parameters.
//! - `SellerReport`: The standardized per-seller result record.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod options;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::SalesAnalyticsEngine;
pub use error::AnalyticsError;
pub use options::AnalysisOptions;
pub use report::{ProductQuantity, SellerReport};
