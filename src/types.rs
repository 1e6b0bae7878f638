//! Core data types for storefront
//!
//! This module defines the catalog entities and page identifiers shared
//! throughout the application.

use serde::{Deserialize, Serialize};

/// Maximum number of characters of a description shown on a product card
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// One catalog item as returned by the product listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

impl Product {
    /// Format the price for display
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Short description for product cards
    pub fn description_preview(&self) -> String {
        truncate_description(&self.description, DESCRIPTION_PREVIEW_CHARS)
    }
}

/// Average review score plus number of reviews
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

impl Rating {
    /// Format the rating for display (e.g., "★ 4.1 (259)")
    pub fn formatted(&self) -> String {
        format!("★ {:.1} ({})", self.rate, self.count)
    }
}

/// Application pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Contact,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::About, Page::Contact]
    }

    pub fn index(&self) -> usize {
        match self {
            Page::Home => 0,
            Page::About => 1,
            Page::Contact => 2,
        }
    }

    /// Resolve a page identifier; anything unrecognized lands on the home page
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "about" => Page::About,
            "contact" => Page::Contact,
            _ => Page::Home,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Page::Home => Page::About,
            Page::About => Page::Contact,
            Page::Contact => Page::Home,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Page::Home => Page::Contact,
            Page::About => Page::Home,
            Page::Contact => Page::About,
        }
    }
}

// Helper functions

/// Cut text to at most `max_chars` characters, appending "..." when shortened
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
