//! Testing infrastructure for market integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `MockMarket`: in-process HTTP server speaking the marketplace API
//! - `fixtures`: generated listing catalogs served by `MockMarket`
//! - `TestWorld`: isolated config directory plus a preconfigured CLI command

pub mod fixtures;
pub mod server;
pub mod world;

pub use fixtures::Catalog;
pub use server::MockMarket;
pub use world::TestWorld;
