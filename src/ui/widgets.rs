//! Reusable UI widgets
//!
//! Contains common UI components used across pages:
//! - Loading indicator and inline messages
//! - Status bar
//! - Layout helpers

use crate::ui::theme::StyleBundle;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Bordered block styled with the theme's border tokens
pub fn themed_block<'a>(title: &'a str, style: Style, theme: &StyleBundle) -> Block<'a> {
    let block = Block::default()
        .style(style)
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border.patch(Style::default().bg(style.bg.unwrap_or_default())));

    if title.is_empty() {
        block
    } else {
        block.title(format!(" {} ", title)).title_style(theme.title)
    }
}

/// Render a loading indicator
pub fn render_loading(frame: &mut Frame, message: &str, theme: &StyleBundle, area: Rect) {
    let frame_idx =
        (chrono::Local::now().timestamp_millis() / 100).rem_euclid(SPINNER_FRAMES.len() as i64) as usize;

    let content = Line::from(vec![
        Span::styled(SPINNER_FRAMES[frame_idx], theme.title),
        Span::raw(" "),
        Span::styled(message, theme.muted),
    ]);

    let loading_area = centered_rect(area.width.min(40), 1, area);
    let loading = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(loading, loading_area);
}

/// Render an inline error message
pub fn render_error(frame: &mut Frame, message: &str, theme: &StyleBundle, area: Rect) {
    let content = vec![
        Line::styled("✗ Could not load products", theme.error),
        Line::raw(""),
        Line::styled(message, theme.muted),
    ];

    let error_area = centered_rect(area.width.min(70), 3, area);
    let error = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(error, error_area);
}

/// Render a one-line status bar: key hints on the left, status on the right
pub fn render_status_bar(
    frame: &mut Frame,
    hints: &str,
    status: &str,
    theme: &StyleBundle,
    area: Rect,
) {
    let row = Rect {
        height: area.height.min(1),
        ..area
    };
    if row.is_empty() {
        return;
    }

    frame.render_widget(Block::default().style(theme.header), row);

    let status = Line::styled(status, theme.header);
    let status_width = (status.width() as u16 + 1).min(row.width);
    let [hints_area, status_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(row);

    frame.render_widget(Paragraph::new(hints).style(theme.header), hints_area);
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}

/// Helper: Center a column of at most `max_width` horizontally
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Helper: Split an area into `columns` equal cells per row of `row_height`
pub fn grid_cells(area: Rect, columns: u16, row_height: u16, count: usize) -> Vec<Rect> {
    let columns = columns.max(1);
    let rows = count.div_ceil(usize::from(columns));
    let visible_rows = usize::from(area.height / row_height.max(1)).min(rows);

    let row_areas = Layout::vertical(vec![Constraint::Length(row_height); visible_rows])
        .flex(Flex::Start)
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal(vec![Constraint::Ratio(1, u32::from(columns)); usize::from(columns)])
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}
