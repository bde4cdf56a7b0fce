pub mod accounts;
pub mod home;
pub mod reports;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, TableState},
};

use crate::ui::{components::card::Card, theme::Theme};

/// Shown in place of the rows when nothing passes the filter.
pub const EMPTY_PLACEHOLDER: &str = "Tidak ada data";

/// Search box and selector line above a list.
pub fn filter_bar(
    query: &str,
    searching: bool,
    selector_name: &str,
    selector_value: String,
    theme: &Theme,
) -> Line<'static> {
    let query_style = if searching {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    let cursor = if searching { "│" } else { "" };
    let shown = if query.is_empty() && !searching {
        Span::styled("Search...", Style::default().fg(theme.dim))
    } else {
        Span::styled(format!("{query}{cursor}"), query_style)
    };

    Line::from(vec![
        Span::styled("Cari: ", Style::default().fg(theme.text_muted)),
        shown,
        Span::raw("   "),
        Span::styled(
            format!("{selector_name}: "),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(
            selector_value,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Render a record table in a card. An empty `rows` keeps the header and
/// shows [`EMPTY_PLACEHOLDER`] below it.
pub fn render_table<const N: usize>(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    header: [&'static str; N],
    widths: [Constraint; N],
    rows: Vec<Row<'static>>,
    selected: usize,
    theme: &Theme,
) {
    let block = Card::new(title, theme).focused(true).block();
    let inner = block.inner(area);
    let is_empty = rows.is_empty();

    let header = Row::new(header).style(
        Style::default()
            .fg(theme.text_muted)
            .add_modifier(Modifier::BOLD),
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    let mut table_state = TableState::default();
    if !is_empty {
        table_state.select(Some(selected));
    }
    frame.render_stateful_widget(table, area, &mut table_state);

    if is_empty && inner.height > 1 {
        let placeholder = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                EMPTY_PLACEHOLDER,
                Style::default().fg(theme.dim),
            ))
            .alignment(Alignment::Center),
            placeholder,
        );
    }
}
