//! Building blocks of the add/edit modals.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::ui::{components::centered_box, theme::Theme};

const LABEL_WIDTH: usize = 14;

/// A text input row: label, value and a cursor when focused.
pub fn text_field(label: &str, value: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let cursor = if focused { "│" } else { "" };
    Line::from(vec![
        label_span(label, focused, theme),
        Span::raw(" "),
        Span::styled(format!("{value}{cursor}"), value_style(focused, theme)),
    ])
}

/// A dropdown row. When focused, arrows hint that ↑/↓ change the value.
pub fn choice_field(
    label: &str,
    value: &str,
    color: Color,
    focused: bool,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = vec![label_span(label, focused, theme), Span::raw(" ")];
    if focused {
        spans.push(Span::styled("‹ ", Style::default().fg(theme.accent)));
    }
    spans.push(chip(value, color));
    if focused {
        spans.push(Span::styled(" ›", Style::default().fg(theme.accent)));
    }
    Line::from(spans)
}

/// A bold bracketed label in `color`.
pub fn chip(label: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{label}]"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Draw `lines` in a bordered box centered over `area`, clearing what is
/// underneath.
pub fn render_modal(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    theme: &Theme,
) {
    let height = lines.len() as u16 + 2;
    let rect = centered_box(64, height, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

/// Footer with the save/cancel keys.
pub fn actions_line(save: &str, cancel: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::styled(format!(" {cancel}   "), Style::default().fg(theme.dim)),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::styled(format!(" {save}"), Style::default().fg(theme.dim)),
    ])
}

fn label_span(label: &str, focused: bool, theme: &Theme) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    Span::styled(format!("{label:<LABEL_WIDTH$}"), style)
}

fn value_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_muted)
    }
}
