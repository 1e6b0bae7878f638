//! Fetch lifecycle for the home page product region
//!
//! Each mount of the home page owns one `FetchState` that moves forward
//! exactly once: Idle -> Pending -> Succeeded | Failed.

use super::fetch::FetchResult;
use crate::types::Product;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Pending,
    Succeeded {
        products: Vec<Product>,
        fetched_at: DateTime<Local>,
    },
    Failed(String),
}

impl FetchState {
    /// Mark the request as in flight. Only valid from `Idle`.
    pub fn begin(&mut self) -> bool {
        match self {
            FetchState::Idle => {
                *self = FetchState::Pending;
                true
            }
            _ => false,
        }
    }

    /// Record the outcome of the request. Only valid from `Pending`.
    pub fn settle(&mut self, result: FetchResult) -> bool {
        if !matches!(self, FetchState::Pending) {
            return false;
        }

        *self = match result {
            Ok(products) => FetchState::Succeeded {
                products,
                fetched_at: Local::now(),
            },
            Err(e) => FetchState::Failed(e.to_string()),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Pending)
    }

    /// Products held by a successful fetch (empty otherwise)
    pub fn products(&self) -> &[Product] {
        match self {
            FetchState::Succeeded { products, .. } => products,
            _ => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Pending => "pending",
            FetchState::Succeeded { .. } => "succeeded",
            FetchState::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FetchError;

    #[test]
    fn test_forward_transitions() {
        let mut state = FetchState::default();
        assert!(state.is_loading());

        assert!(state.begin());
        assert_eq!(state.label(), "pending");

        assert!(state.settle(Ok(Vec::new())));
        assert_eq!(state.label(), "succeeded");
        assert!(!state.is_loading());
    }

    #[test]
    fn test_no_reentry_into_pending() {
        let mut state = FetchState::default();
        assert!(state.begin());
        assert!(!state.begin());

        state.settle(Ok(Vec::new()));
        assert!(!state.begin());
        assert_eq!(state.label(), "succeeded");
    }

    #[test]
    fn test_settle_requires_pending() {
        let mut state = FetchState::default();
        assert!(!state.settle(Ok(Vec::new())));
        assert_eq!(state.label(), "idle");
    }

    #[test]
    fn test_failure_keeps_message_only() {
        let mut state = FetchState::default();
        state.begin();
        state.settle(Err(FetchError::Status {
            code: 500,
            reason: "Internal Server Error".into(),
        }));

        assert!(state.products().is_empty());
        match state {
            FetchState::Failed(msg) => assert!(msg.contains("500")),
            other => panic!("unexpected state {:?}", other),
        }
    }
}
