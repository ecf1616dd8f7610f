//! Picker screen rendering.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::catalog::CatalogFilter;
use crate::selector::{SelectorState, VISIBLE_WINDOW};
use crate::tui::colors;

const KEY_HINTS: &str = "Type to search • ↑/↓ navigate • Enter select • Esc clear/cancel";

/// Render the loading screen shown while the catalog call is in flight.
pub fn render_loading(frame: &mut Frame<'_>, filter: CatalogFilter) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading OpenRouter models...",
            Style::default().fg(colors::ACCENT_WARNING),
        )),
    ];
    frame.render_widget(screen(lines, filter), frame.area());
}

/// Render the interactive picker for the current session state.
pub fn render_picker(frame: &mut Frame<'_>, state: &SelectorState, filter: CatalogFilter) {
    let filtered = state.filtered();
    let mut lines: Vec<Line<'_>> = Vec::new();

    if let Some(current) = state.current.as_deref() {
        lines.push(Line::from(vec![
            Span::styled("Current: ", Style::default().fg(colors::TEXT_DIM)),
            Span::styled(
                current.to_string(),
                Style::default()
                    .fg(colors::ACCENT_POSITIVE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("Search: ", Style::default().fg(colors::TEXT_DIM)),
        Span::styled(
            format!("{}_", state.query),
            Style::default().fg(colors::TEXT_PRIMARY),
        ),
        Span::styled(
            format!(" ({} matches)", filtered.len()),
            Style::default().fg(colors::TEXT_MUTED),
        ),
    ]));
    lines.push(Line::from(""));

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No models found matching \"{}\"", state.query),
            Style::default().fg(colors::ACCENT_NEGATIVE),
        )));
    } else {
        if state.scroll > 0 {
            lines.push(Line::from(Span::styled(
                format!("↑ {} more above", state.scroll),
                Style::default().fg(colors::TEXT_MUTED),
            )));
        }

        let end = (state.scroll + VISIBLE_WINDOW).min(filtered.len());
        for (idx, model) in filtered
            .iter()
            .enumerate()
            .take(end)
            .skip(state.scroll)
        {
            let is_cursor = idx == state.selected;
            let is_current = state.current.as_deref() == Some(model.id.as_str());

            let row_style = if is_cursor {
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .bg(colors::SURFACE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::TEXT_PRIMARY)
            };

            let cursor = if is_cursor { "▶ " } else { "  " };
            let current_mark = if is_current { " (current)" } else { "" };
            lines.push(Line::from(Span::styled(
                format!("{cursor}{}{current_mark}", model.name),
                row_style,
            )));

            // Expanded detail only under the highlighted row.
            if is_cursor {
                if let Some(description) = model.description.as_deref() {
                    lines.push(Line::from(Span::styled(
                        format!("    {description}"),
                        Style::default().fg(colors::TEXT_DIM),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    format!("    {}", detail_line(model)),
                    Style::default().fg(colors::TEXT_DIM),
                )));
            }
        }

        if end < filtered.len() {
            lines.push(Line::from(Span::styled(
                format!("↓ {} more below", filtered.len() - end),
                Style::default().fg(colors::TEXT_MUTED),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        KEY_HINTS,
        Style::default().fg(colors::TEXT_MUTED),
    )));

    frame.render_widget(screen(lines, filter), frame.area());
}

fn detail_line(model: &crate::catalog::ModelDescriptor) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(cost) = model.cost_info() {
        parts.push(cost);
    }
    if let Some(len) = model.context_length {
        parts.push(format!("{}k context", len / 1000));
    }
    if model.supports_tools() {
        parts.push("[tools]".to_string());
    }
    if parts.is_empty() {
        model.id.clone()
    } else {
        parts.join(" • ")
    }
}

fn screen(lines: Vec<Line<'_>>, filter: CatalogFilter) -> Paragraph<'_> {
    Paragraph::new(lines)
        .block(
            Block::default()
                .title(filter.title())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG))
}
