//! Page composition
//!
//! Turns (theme, page, fetch state) into a description of what is on
//! screen. Nothing here touches the terminal; `render` draws the result.

use crate::catalog::FetchState;
use crate::config::ThemeName;
use crate::types::{Page, Product};

/// Store name shown in the header and on the home page
pub const STORE_NAME: &str = "Storefront";

/// Structural layout of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutVariant {
    /// Single column, centered
    Centered,
    /// Fixed sidebar with a list of labels next to the content pane
    Sidebar {
        heading: &'static str,
        labels: &'static [&'static str],
    },
}

/// Everything visible on one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub page: Page,
    pub layout: LayoutVariant,
    pub body: PageBody<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageBody<'a> {
    Home {
        heading: String,
        tagline: &'static str,
        products: ProductRegion<'a>,
    },
    About {
        heading: &'static str,
        paragraphs: &'static [&'static str],
    },
    Contact {
        heading: &'static str,
        intro: &'static str,
        fields: &'static [FormField],
        send_label: &'static str,
    },
}

/// Product list region of the home page
#[derive(Debug, Clone, PartialEq)]
pub enum ProductRegion<'a> {
    Loading,
    Error(&'a str),
    Cards(Vec<ProductCard<'a>>),
}

impl ProductRegion<'_> {
    pub fn card_count(&self) -> usize {
        match self {
            ProductRegion::Cards(cards) => cards.len(),
            _ => 0,
        }
    }
}

/// One product as shown in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard<'a> {
    pub image: &'a str,
    pub title: &'a str,
    pub category: &'a str,
    pub description: String,
    pub price: String,
    pub rating: String,
}

impl<'a> From<&'a Product> for ProductCard<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            image: &product.image,
            title: &product.title,
            category: &product.category,
            description: product.description_preview(),
            price: product.formatted_price(),
            rating: product.rating.formatted(),
        }
    }
}

/// Contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[FormField::Name, FormField::Email, FormField::Message]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "you@example.com",
            FormField::Message => "How can we help?",
        }
    }
}

const ABOUT_PARAGRAPHS: &[&str] = &[
    "We started as a tiny corner shop with a simple idea: good products, fair prices, and people who care.",
    "Today we ship everything from everyday essentials to small luxuries, picked by a team that still reads every review.",
    "This storefront is also a playground for themes. Switch between them at any time and your choice is remembered.",
];

/// Compose the view for the given state
pub fn compose<'a>(theme: ThemeName, page: Page, fetch: &'a FetchState) -> PageView<'a> {
    let body = match page {
        Page::Home => PageBody::Home {
            heading: format!("Welcome to {}", STORE_NAME),
            tagline: "Fresh picks from our catalog",
            products: product_region(fetch),
        },
        Page::About => PageBody::About {
            heading: "About Us",
            paragraphs: ABOUT_PARAGRAPHS,
        },
        Page::Contact => PageBody::Contact {
            heading: "Contact Us",
            intro: "Questions about an order or a product? Drop us a line.",
            fields: FormField::all(),
            send_label: "Send Message",
        },
    };

    PageView {
        page,
        layout: layout_variant(theme, page),
        body,
    }
}

/// Pick the structural layout for a page under a theme
pub fn layout_variant(theme: ThemeName, page: Page) -> LayoutVariant {
    match theme {
        ThemeName::DarkSidebar => {
            let (heading, labels) = sidebar_labels(page);
            LayoutVariant::Sidebar { heading, labels }
        }
        ThemeName::Light | ThemeName::Colorful => LayoutVariant::Centered,
    }
}

/// Fixed sidebar contents for each page
fn sidebar_labels(page: Page) -> (&'static str, &'static [&'static str]) {
    match page {
        Page::Home => ("Shop", &["New Arrivals", "Best Sellers", "Deals", "Gift Cards"]),
        Page::About => ("Company", &["Our Story", "Team", "Values", "Press"]),
        Page::Contact => ("Departments", &["Support", "Sales", "Partnership", "Careers"]),
    }
}

fn product_region(fetch: &FetchState) -> ProductRegion<'_> {
    match fetch {
        FetchState::Idle | FetchState::Pending => ProductRegion::Loading,
        FetchState::Failed(message) => ProductRegion::Error(message),
        FetchState::Succeeded { products, .. } => {
            ProductRegion::Cards(products.iter().map(ProductCard::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FetchError;
    use crate::types::Rating;

    fn products(n: u64) -> Vec<Product> {
        (1..=n)
            .map(|id| Product {
                id,
                title: format!("Product {}", id),
                price: id as f64 * 10.0,
                description: "d".repeat(150),
                category: "electronics".into(),
                image: format!("https://example.com/{}.jpg", id),
                rating: Rating { rate: 4.0, count: id },
            })
            .collect()
    }

    fn settled(result: Result<Vec<Product>, FetchError>) -> FetchState {
        let mut state = FetchState::default();
        state.begin();
        state.settle(result);
        state
    }

    #[test]
    fn test_cards_match_fetch_order() {
        for n in [0, 1, 5, 8] {
            let fetch = settled(Ok(products(n)));
            let view = compose(ThemeName::Light, Page::Home, &fetch);
            let PageBody::Home { products: region, .. } = view.body else {
                panic!("expected home page");
            };
            assert_eq!(region.card_count(), n as usize);
            if let ProductRegion::Cards(cards) = region {
                let titles: Vec<&str> = cards.iter().map(|c| c.title).collect();
                let expected: Vec<String> = products(n).into_iter().map(|p| p.title).collect();
                assert_eq!(titles, expected);
            }
        }
    }

    #[test]
    fn test_card_fields() {
        let fetch = settled(Ok(products(1)));
        let view = compose(ThemeName::Colorful, Page::Home, &fetch);
        let PageBody::Home { products: ProductRegion::Cards(cards), .. } = view.body else {
            panic!("expected cards");
        };
        let card = &cards[0];
        assert_eq!(card.title, "Product 1");
        assert_eq!(card.price, "$10.00");
        assert_eq!(card.rating, "★ 4.0 (1)");
        assert_eq!(card.image, "https://example.com/1.jpg");
        assert_eq!(card.description.chars().count(), 103);
        assert!(card.description.ends_with("..."));
    }

    #[test]
    fn test_failed_fetch_shows_error_for_every_theme() {
        let fetch = settled(Err(FetchError::Status {
            code: 404,
            reason: "Not Found".into(),
        }));
        for theme in ThemeName::all() {
            let view = compose(*theme, Page::Home, &fetch);
            let PageBody::Home { products: region, .. } = view.body else {
                panic!("expected home page");
            };
            assert_eq!(region.card_count(), 0);
            match region {
                ProductRegion::Error(msg) => assert!(msg.contains("404")),
                other => panic!("expected error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_loading_before_settle() {
        let idle = FetchState::default();
        let mut pending = FetchState::default();
        pending.begin();

        for fetch in [&idle, &pending] {
            let view = compose(ThemeName::Light, Page::Home, fetch);
            assert!(matches!(
                view.body,
                PageBody::Home { products: ProductRegion::Loading, .. }
            ));
        }
    }

    #[test]
    fn test_layout_dispatch() {
        for page in Page::all() {
            assert_eq!(layout_variant(ThemeName::Light, *page), LayoutVariant::Centered);
            assert_eq!(layout_variant(ThemeName::Colorful, *page), LayoutVariant::Centered);
            assert!(matches!(
                layout_variant(ThemeName::DarkSidebar, *page),
                LayoutVariant::Sidebar { .. }
            ));
        }
    }

    #[test]
    fn test_dark_sidebar_contact_page() {
        let fetch = FetchState::default();
        let view = compose(ThemeName::DarkSidebar, Page::Contact, &fetch);

        assert_eq!(
            view.layout,
            LayoutVariant::Sidebar {
                heading: "Departments",
                labels: &["Support", "Sales", "Partnership", "Careers"],
            }
        );
        match view.body {
            PageBody::Contact { fields, .. } => {
                assert_eq!(fields, &[FormField::Name, FormField::Email, FormField::Message]);
            }
            other => panic!("expected contact page, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_page_id_composes_home() {
        let fetch = FetchState::default();
        let view = compose(ThemeName::Light, Page::from_id("unknown-page"), &fetch);
        assert_eq!(view.page, Page::Home);
        assert!(matches!(view.body, PageBody::Home { .. }));
    }
}
