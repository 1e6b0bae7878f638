//! Theme registry for storefront
//!
//! Provides three built-in themes: Light, Dark Sidebar, and Colorful.
//! Each theme resolves to a fixed bundle of style tokens, one per visible
//! region of the page. Views only ever ask for tokens; they never pick
//! colors themselves.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Complete set of presentation tokens for one theme
#[derive(Debug, Clone, PartialEq)]
pub struct StyleBundle {
    pub name: ThemeName,

    // Page regions
    pub container: Style,
    pub header: Style,
    pub nav_item: Style,
    pub nav_item_active: Style,
    pub button: Style,
    pub card: Style,
    pub product_grid: Style,
    pub product_card: Style,

    // Two-column layout regions (Dark Sidebar only)
    pub sidebar: Option<Style>,
    pub content: Option<Style>,

    // Text accents
    pub title: Style,
    pub muted: Style,
    pub price: Style,
    pub rating: Style,
    pub error: Style,

    // Shape
    pub border: Style,
    pub border_type: BorderType,
    pub grid_columns: u16,
}

/// Resolve the style bundle for a theme
pub fn resolve_style_bundle(theme: ThemeName) -> StyleBundle {
    match theme {
        ThemeName::Light => StyleBundle::light(),
        ThemeName::DarkSidebar => StyleBundle::dark_sidebar(),
        ThemeName::Colorful => StyleBundle::colorful(),
    }
}

impl StyleBundle {
    /// Light theme (default)
    fn light() -> Self {
        let bg = Color::Rgb(255, 255, 255); // #ffffff
        let fg = Color::Rgb(33, 37, 41); // #212529
        let accent = Color::Rgb(13, 110, 253); // #0d6efd

        Self {
            name: ThemeName::Light,
            container: Style::default().fg(fg).bg(bg),
            header: Style::default()
                .fg(fg)
                .bg(Color::Rgb(248, 249, 250)) // #f8f9fa
                .add_modifier(Modifier::BOLD),
            nav_item: Style::default().fg(Color::Rgb(108, 117, 125)).bg(Color::Rgb(248, 249, 250)),
            nav_item_active: Style::default()
                .fg(accent)
                .bg(Color::Rgb(248, 249, 250))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            button: Style::default()
                .fg(Color::White)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            card: Style::default().fg(fg).bg(bg),
            product_grid: Style::default().fg(fg).bg(bg),
            product_card: Style::default().fg(fg).bg(bg),

            sidebar: None,
            content: None,

            title: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::Rgb(108, 117, 125)), // #6c757d
            price: Style::default()
                .fg(Color::Rgb(25, 135, 84)) // #198754
                .add_modifier(Modifier::BOLD),
            rating: Style::default().fg(Color::Rgb(255, 193, 7)), // #ffc107
            error: Style::default().fg(Color::Rgb(220, 53, 69)), // #dc3545

            border: Style::default().fg(Color::Rgb(222, 226, 230)), // #dee2e6
            border_type: BorderType::Plain,
            grid_columns: 4,
        }
    }

    /// Dark theme with a fixed sidebar
    fn dark_sidebar() -> Self {
        let bg = Color::Rgb(17, 24, 39); // #111827
        let panel = Color::Rgb(31, 41, 55); // #1f2937
        let fg = Color::Rgb(229, 231, 235); // #e5e7eb
        let accent = Color::Rgb(129, 140, 248); // #818cf8

        Self {
            name: ThemeName::DarkSidebar,
            container: Style::default().fg(fg).bg(bg),
            header: Style::default()
                .fg(fg)
                .bg(panel)
                .add_modifier(Modifier::BOLD),
            nav_item: Style::default().fg(Color::Rgb(156, 163, 175)).bg(panel),
            nav_item_active: Style::default()
                .fg(accent)
                .bg(panel)
                .add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(79, 70, 229)) // #4f46e5
                .add_modifier(Modifier::BOLD),
            card: Style::default().fg(fg).bg(panel),
            product_grid: Style::default().fg(fg).bg(bg),
            product_card: Style::default().fg(fg).bg(panel),

            sidebar: Some(
                Style::default()
                    .fg(Color::Rgb(156, 163, 175)) // #9ca3af
                    .bg(Color::Rgb(3, 7, 18)), // #030712
            ),
            content: Some(Style::default().fg(fg).bg(bg)),

            title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::Rgb(107, 114, 128)), // #6b7280
            price: Style::default()
                .fg(Color::Rgb(52, 211, 153)) // #34d399
                .add_modifier(Modifier::BOLD),
            rating: Style::default().fg(Color::Rgb(251, 191, 36)), // #fbbf24
            error: Style::default().fg(Color::Rgb(248, 113, 113)), // #f87171

            border: Style::default().fg(Color::Rgb(55, 65, 81)), // #374151
            border_type: BorderType::Plain,
            grid_columns: 3,
        }
    }

    /// Colorful theme
    fn colorful() -> Self {
        let bg = Color::Rgb(253, 242, 248); // #fdf2f8
        let fg = Color::Rgb(76, 29, 149); // #4c1d95
        let header_bg = Color::Rgb(219, 39, 119); // #db2777

        Self {
            name: ThemeName::Colorful,
            container: Style::default().fg(fg).bg(bg),
            header: Style::default()
                .fg(Color::White)
                .bg(header_bg)
                .add_modifier(Modifier::BOLD),
            nav_item: Style::default().fg(Color::Rgb(252, 231, 243)).bg(header_bg),
            nav_item_active: Style::default()
                .fg(Color::Rgb(253, 224, 71)) // #fde047
                .bg(header_bg)
                .add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(245, 158, 11)) // #f59e0b
                .add_modifier(Modifier::BOLD),
            card: Style::default().fg(fg).bg(Color::Rgb(237, 233, 254)), // #ede9fe
            product_grid: Style::default().fg(fg).bg(bg),
            product_card: Style::default().fg(fg).bg(Color::Rgb(255, 255, 255)),

            sidebar: None,
            content: None,

            title: Style::default()
                .fg(Color::Rgb(190, 24, 93)) // #be185d
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            muted: Style::default().fg(Color::Rgb(124, 58, 237)), // #7c3aed
            price: Style::default()
                .fg(Color::Rgb(5, 150, 105)) // #059669
                .add_modifier(Modifier::BOLD),
            rating: Style::default().fg(Color::Rgb(234, 88, 12)), // #ea580c
            error: Style::default()
                .fg(Color::Rgb(185, 28, 28)) // #b91c1c
                .add_modifier(Modifier::BOLD),

            border: Style::default().fg(Color::Rgb(139, 92, 246)), // #8b5cf6
            border_type: BorderType::Rounded,
            grid_columns: 4,
        }
    }

    /// Style of the main content pane (falls back to the container)
    pub fn content_area(&self) -> Style {
        self.content.unwrap_or(self.container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_tokens(bundle: &StyleBundle) -> Vec<(&'static str, Style)> {
        vec![
            ("container", bundle.container),
            ("header", bundle.header),
            ("nav_item", bundle.nav_item),
            ("nav_item_active", bundle.nav_item_active),
            ("button", bundle.button),
            ("card", bundle.card),
            ("product_grid", bundle.product_grid),
            ("product_card", bundle.product_card),
        ]
    }

    #[test]
    fn test_every_region_has_a_token() {
        for theme in ThemeName::all() {
            let bundle = resolve_style_bundle(*theme);
            assert_eq!(bundle.name, *theme);
            for (region, style) in required_tokens(&bundle) {
                assert_ne!(style, Style::default(), "{:?} has empty {}", theme, region);
            }
            assert!(bundle.grid_columns > 0);
        }
    }

    #[test]
    fn test_only_dark_sidebar_has_sidebar_tokens() {
        let dark = resolve_style_bundle(ThemeName::DarkSidebar);
        assert!(dark.sidebar.is_some());
        assert!(dark.content.is_some());
        assert_ne!(dark.sidebar, Some(Style::default()));

        for theme in [ThemeName::Light, ThemeName::Colorful] {
            let bundle = resolve_style_bundle(theme);
            assert!(bundle.sidebar.is_none());
            assert_eq!(bundle.content_area(), bundle.container);
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for theme in ThemeName::all() {
            assert_eq!(resolve_style_bundle(*theme), resolve_style_bundle(*theme));
        }
        assert_ne!(
            resolve_style_bundle(ThemeName::Light),
            resolve_style_bundle(ThemeName::Colorful)
        );
    }
}
