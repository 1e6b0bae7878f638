//! Product catalog layer
//!
//! This module handles everything between the storefront and the remote
//! catalog service:
//! - Issuing the product listing request and parsing the response
//! - Running the request off the UI thread
//! - Tracking the lifecycle of one fetch per home page mount

pub mod fetch;
pub mod state;

pub use fetch::{spawn_fetch, FetchError, FetchResult, HttpCatalog, ProductSource};
pub use state::FetchState;
