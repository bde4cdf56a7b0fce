use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{AppState, Section},
    ui::{
        components::{centered_rect, tabs},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    if !state.help.active {
        return;
    }

    let theme = Theme::default();
    let popup = centered_rect(70, 70, area);
    let block = Block::default()
        .title(" Keybinds ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(help_lines(state.section, &theme)).block(block),
        popup,
    );
}

fn help_lines(section: Section, theme: &Theme) -> Vec<Line<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.accent));

    let mut lines = vec![
        Line::from(vec![
            key("?"),
            Span::raw(" help  "),
            key("Esc"),
            Span::raw(" close  "),
            key("q"),
            Span::raw(" quit"),
        ]),
        Line::from(tabs::tab_shortcuts(theme)),
        Line::from(""),
    ];

    match section {
        Section::Home => {
            lines.push(Line::from("Home: ringkasan laporan dan akun."));
        }
        Section::Reports => {
            lines.push(Line::from("Laporan:"));
            lines.push(Line::from(vec![
                key("/"),
                Span::raw(" cari  "),
                key("c"),
                Span::raw(" kategori  "),
                key("Esc"),
                Span::raw(" reset cari"),
            ]));
            lines.push(Line::from(vec![
                key("Enter"),
                Span::raw(" edit  "),
                key("o"),
                Span::raw(" lokasi  "),
                key("x"),
                Span::raw(" export CSV"),
            ]));
        }
        Section::Accounts => {
            lines.push(Line::from("Data Akun:"));
            lines.push(Line::from(vec![
                key("/"),
                Span::raw(" cari  "),
                key("r"),
                Span::raw(" role  "),
                key("Esc"),
                Span::raw(" reset cari"),
            ]));
            lines.push(Line::from(vec![
                key("n"),
                Span::raw(" tambah  "),
                key("Enter"),
                Span::raw(" edit"),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from("Form:"));
    lines.push(Line::from(vec![
        key("Tab"),
        Span::raw(" next field  "),
        key("↑/↓"),
        Span::raw(" change  "),
        key("Enter"),
        Span::raw(" save  "),
        key("Esc"),
        Span::raw(" cancel"),
    ]));

    lines
}
