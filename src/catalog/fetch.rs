//! Product listing requests
//!
//! Issues the single outbound request to the catalog service and turns the
//! response into products. Supports running the request on a worker thread
//! so the interface stays responsive while it is in flight.

use crate::types::Product;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use thiserror::Error;

/// Number of products requested per fetch
pub const PAGE_SIZE: usize = 8;

/// Outcome of one catalog request
pub type FetchResult = Result<Vec<Product>, FetchError>;

/// Why a catalog request produced no products
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Could not reach the catalog service: {0}")]
    Transport(String),

    #[error("Catalog service responded with {code} {reason}")]
    Status { code: i32, reason: String },

    #[error("Could not read the product list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can produce one page of products
pub trait ProductSource: Send + Sync {
    fn fetch_products(&self) -> FetchResult;
}

/// Catalog service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full request URL including the page size limit
    pub fn request_url(&self) -> String {
        format!("{}?limit={}", self.base_url.trim_end_matches('/'), PAGE_SIZE)
    }
}

impl ProductSource for HttpCatalog {
    fn fetch_products(&self) -> FetchResult {
        let url = self.request_url();
        tracing::debug!("GET {}", url);

        let response = minreq::get(&url)
            .with_header("Accept", "application/json")
            .with_header("User-Agent", concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !(200..300).contains(&response.status_code) {
            return Err(FetchError::Status {
                code: response.status_code,
                reason: response.reason_phrase.clone(),
            });
        }

        let body = response
            .as_str()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        parse_products(body)
    }
}

/// Parse a product listing response body, preserving server order
pub fn parse_products(body: &str) -> FetchResult {
    Ok(serde_json::from_str(body)?)
}

/// Run one fetch on a worker thread
///
/// The result is delivered over the returned channel. If the receiver has
/// been dropped by the time the request settles, the result is discarded.
pub fn spawn_fetch(source: Arc<dyn ProductSource>) -> Receiver<FetchResult> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let result = source.fetch_products();
        match &result {
            Ok(products) => tracing::info!("Fetched {} products", products.len()),
            Err(e) => tracing::info!("Product fetch failed: {}", e),
        }
        // Receiver gone means the view unmounted
        let _ = tx.send(result);
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual T-Shirt",
            "price": 22.3,
            "description": "Slim-fitting style",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        }
    ]"#;

    struct FixedSource(Vec<Product>);

    impl ProductSource for FixedSource {
        fn fetch_products(&self) -> FetchResult {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_parse_products_preserves_order() {
        let products = parse_products(SAMPLE).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[1].title, "Mens Casual T-Shirt");
        assert_eq!(products[1].rating.count, 259);
    }

    #[test]
    fn test_parse_products_empty() {
        assert!(parse_products("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_failure() {
        let err = parse_products("<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(err.to_string().starts_with("Could not read the product list"));

        // Missing required field
        let err = parse_products(r#"[{"id": 1, "title": "x"}]"#).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            code: 503,
            reason: "Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "Catalog service responded with 503 Service Unavailable"
        );
    }

    #[test]
    fn test_request_url() {
        let catalog = HttpCatalog::new("https://fakestoreapi.com/products/");
        assert_eq!(
            catalog.request_url(),
            "https://fakestoreapi.com/products?limit=8"
        );
    }

    #[test]
    fn test_spawn_fetch_delivers_result() {
        let products = parse_products(SAMPLE).unwrap();
        let rx = spawn_fetch(Arc::new(FixedSource(products.clone())));
        let result = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(result.unwrap(), products);
    }
}
