//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with navigation and theme selector
//! - The composed page, in its centered or sidebar layout
//! - Status bar

use crate::app::{App, AppState, FormFocus};
use crate::catalog::FetchState;
use crate::config::ThemeName;
use crate::types::Page;
use crate::ui::theme::StyleBundle;
use crate::ui::view::{
    compose, FormField, LayoutVariant, PageBody, PageView, ProductCard, ProductRegion, STORE_NAME,
};
use crate::ui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

/// Widest the centered layout is allowed to grow
const CENTERED_MAX_WIDTH: u16 = 110;
const SIDEBAR_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 9;

/// Smallest terminal the full layout fits into
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 10;

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = &app.theme;

    frame.render_widget(Block::default().style(theme.container), area);

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, theme, area);
        return;
    }

    // Main layout: header, page, status bar
    let layout = Layout::vertical([
        Constraint::Length(3), // Header + navigation
        Constraint::Min(5),    // Page
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, app, layout[0]);

    let view = compose(app.theme_name, app.page, &app.fetch);
    render_page(frame, app, &view, layout[1]);

    render_status_bar(frame, app, layout[2]);
}

/// Shown instead of the page when the terminal cannot fit the layout
fn render_too_small(frame: &mut Frame, theme: &StyleBundle, area: Rect) {
    let message = Paragraph::new(vec![
        Line::styled("Terminal too small", theme.error),
        Line::styled(format!("Need at least {}x{}", MIN_WIDTH, MIN_HEIGHT), theme.muted),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(message, widgets::centered_rect(area.width, 2, area));
}

/// Render header with navigation and theme selector
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let header_block = Block::default()
        .style(theme.header)
        .title(format!(" ◆ {} ", STORE_NAME))
        .title_style(theme.header)
        .borders(Borders::BOTTOM)
        .border_style(theme.border.patch(theme.header));

    frame.render_widget(header_block, area);

    let row = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    }
    .intersection(area);
    if row.is_empty() {
        return;
    }

    // Theme selector on the right, all three names visible
    let mut selector = vec![Span::styled("Theme: ", theme.nav_item)];
    for (i, name) in ThemeName::all().iter().enumerate() {
        let style = if *name == app.theme_name {
            theme.button
        } else {
            theme.nav_item
        };
        selector.push(Span::styled(format!(" F{} {} ", i + 1, name.label()), style));
        selector.push(Span::styled(" ", theme.nav_item));
    }
    let selector = Line::from(selector);
    let selector_width = (selector.width() as u16).min(row.width);

    let [nav_area, selector_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(selector_width)]).areas(row);

    // Navigation
    let nav_titles: Vec<Line> = Page::all()
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let style = if app.page == *page {
                theme.nav_item_active
            } else {
                theme.nav_item
            };
            Line::styled(format!("[{}] {}", i + 1, page.label()), style)
        })
        .collect();

    let nav = Tabs::new(nav_titles)
        .select(app.page.index())
        .divider(" │ ")
        .style(theme.nav_item)
        .highlight_style(theme.nav_item_active);

    frame.render_widget(nav, nav_area);
    frame.render_widget(Paragraph::new(selector).alignment(Alignment::Right), selector_area);
}

/// Render the page in its layout variant
fn render_page(frame: &mut Frame, app: &App, view: &PageView, area: Rect) {
    let theme = &app.theme;

    match &view.layout {
        LayoutVariant::Centered => {
            let column = widgets::centered_column(area, CENTERED_MAX_WIDTH);
            render_body(frame, app, &view.body, padded(column));
        }
        LayoutVariant::Sidebar { heading, labels } => {
            let [sidebar_area, content_area] =
                Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                    .areas(area);

            render_sidebar(frame, heading, labels, theme, sidebar_area);
            frame.render_widget(Block::default().style(theme.content_area()), content_area);
            render_body(frame, app, &view.body, padded(content_area));
        }
    }
}

/// Leave a margin around the page content
fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(1),
    }
}

/// Fixed sidebar of the two-column layout
fn render_sidebar(
    frame: &mut Frame,
    heading: &str,
    labels: &[&str],
    theme: &StyleBundle,
    area: Rect,
) {
    let style = theme.sidebar.unwrap_or(theme.container);

    let block = Block::default()
        .style(style)
        .borders(Borders::RIGHT)
        .border_style(theme.border.patch(Style::default().bg(style.bg.unwrap_or_default())));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::raw(""),
        Line::styled(format!(" {}", heading.to_uppercase()), theme.title),
        Line::raw(""),
    ];
    lines.extend(
        labels
            .iter()
            .map(|label| Line::styled(format!("  › {}", label), style)),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render page content
fn render_body(frame: &mut Frame, app: &App, body: &PageBody, area: Rect) {
    match body {
        PageBody::Home {
            heading,
            tagline,
            products,
        } => render_home(frame, app, heading, tagline, products, area),
        PageBody::About {
            heading,
            paragraphs,
        } => render_about(frame, &app.theme, heading, paragraphs, area),
        PageBody::Contact {
            heading,
            intro,
            fields,
            send_label,
        } => render_contact(frame, app, heading, intro, fields, send_label, area),
    }
}

// === PAGE RENDERERS ===

/// Home page: greeting and the product grid
fn render_home(
    frame: &mut Frame,
    app: &App,
    heading: &str,
    tagline: &str,
    products: &ProductRegion,
    area: Rect,
) {
    let theme = &app.theme;

    let [intro_area, grid_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let intro = Paragraph::new(vec![
        Line::styled(heading, theme.title),
        Line::styled(tagline, theme.muted),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(intro, intro_area);

    frame.render_widget(Block::default().style(theme.product_grid), grid_area);

    match products {
        ProductRegion::Loading => {
            widgets::render_loading(frame, "Loading products...", theme, grid_area);
        }
        ProductRegion::Error(message) => {
            widgets::render_error(frame, message, theme, grid_area);
        }
        ProductRegion::Cards(_) if products.card_count() == 0 => {
            let empty = Paragraph::new("No products available")
                .style(theme.muted)
                .alignment(Alignment::Center);
            frame.render_widget(empty, widgets::centered_rect(grid_area.width, 1, grid_area));
        }
        ProductRegion::Cards(cards) => {
            let skip = app.product_scroll * usize::from(theme.grid_columns);
            let visible = &cards[skip.min(cards.len())..];
            let cells = widgets::grid_cells(grid_area, theme.grid_columns, CARD_HEIGHT, visible.len());

            for (card, cell) in visible.iter().zip(cells) {
                render_product_card(frame, card, theme, cell);
            }
        }
    }
}

/// One product card
fn render_product_card(frame: &mut Frame, card: &ProductCard, theme: &StyleBundle, area: Rect) {
    let block = widgets::themed_block("", theme.product_card, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let body = Paragraph::new(vec![
        Line::styled(card.title, theme.title),
        Line::styled(card.category, theme.muted),
        Line::styled(format!("▣ {}", card.image), theme.muted),
        Line::styled(card.description.as_str(), theme.product_card),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(body, body_area);

    let footer = Line::from(vec![
        Span::styled(card.price.as_str(), theme.price),
        Span::raw("  "),
        Span::styled(card.rating.as_str(), theme.rating),
    ]);
    frame.render_widget(Paragraph::new(footer), footer_area);
}

/// About page: static copy inside a card
fn render_about(
    frame: &mut Frame,
    theme: &StyleBundle,
    heading: &str,
    paragraphs: &[&str],
    area: Rect,
) {
    let block = widgets::themed_block(heading, theme.card, theme);
    let inner = padded(block.inner(area));
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for paragraph in paragraphs {
        lines.push(Line::styled(*paragraph, theme.card));
        lines.push(Line::raw(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// Contact page: form fields and send control
fn render_contact(
    frame: &mut Frame,
    app: &App,
    heading: &str,
    intro: &str,
    fields: &[FormField],
    send_label: &str,
    area: Rect,
) {
    let theme = &app.theme;
    let form = &app.contact;

    let block = widgets::themed_block(heading, theme.card, theme);
    let inner = padded(block.inner(area));
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(fields.iter().map(|field| match field {
        FormField::Message => Constraint::Length(5),
        FormField::Name | FormField::Email => Constraint::Length(3),
    }));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let rows = Layout::vertical(constraints).split(inner);

    frame.render_widget(Paragraph::new(intro).style(theme.muted), rows[0]);

    for (field, row) in fields.iter().zip(rows.iter().skip(1)) {
        let focused = form.focus == Some(FormFocus::Field(*field));
        let value = form.value(*field);

        let border_style = if focused {
            theme.nav_item_active
        } else {
            theme.border
        };
        let input = Block::default()
            .style(theme.card)
            .title(field.label())
            .title_style(theme.title)
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(border_style);

        let text = if value.is_empty() && !focused {
            Line::styled(field.placeholder(), theme.muted)
        } else if focused {
            Line::from(vec![
                Span::styled(value, theme.card),
                Span::styled("▏", theme.nav_item_active),
            ])
        } else {
            Line::styled(value, theme.card)
        };

        frame.render_widget(
            Paragraph::new(text).block(input).wrap(Wrap { trim: false }),
            *row,
        );
    }

    let send_focused = form.focus == Some(FormFocus::Send);
    let send_style = if send_focused {
        theme.button.add_modifier(Modifier::UNDERLINED)
    } else {
        theme.button
    };
    let marker = if send_focused { "▶" } else { " " };
    let send = Line::from(vec![
        Span::styled(marker, theme.title),
        Span::raw(" "),
        Span::styled(format!(" {} ", send_label), send_style),
    ]);
    frame.render_widget(Paragraph::new(send), rows[fields.len() + 1]);
}

/// Render status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match (app.page, app.state()) {
        (_, AppState::FormInput) => " [Tab] Next field  [Enter] Confirm  [Esc] Leave form",
        (Page::Home, _) => " [1-3] Pages  [j/k] Scroll  [t] Theme  [q] Quit",
        (Page::About, _) => " [1-3] Pages  [t] Theme  [q] Quit",
        (Page::Contact, _) => " [1-3] Pages  [Enter] Fill form  [t] Theme  [q] Quit",
    };

    let status = match (&app.fetch, app.page) {
        (_, Page::About | Page::Contact) => app.theme.name.label().to_string(),
        (fetch, Page::Home) if fetch.is_loading() => "Loading catalog…".to_string(),
        (FetchState::Succeeded { products, fetched_at }, Page::Home) => format!(
            "{} products · {}",
            products.len(),
            fetched_at.format("%H:%M:%S")
        ),
        (_, Page::Home) => "Catalog unavailable".to_string(),
    };

    widgets::render_status_bar(frame, hints, &status, &app.theme, area);
}
