use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use engine::{Category, Role};

use crate::{
    app::AppState,
    ui::{
        components::card::{Card, StatCard},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Report stats
            Constraint::Length(4), // Account stats
            Constraint::Min(3),    // Quick actions
        ])
        .split(area);

    render_report_stats(frame, layout[0], state, &theme);
    render_account_stats(frame, layout[1], state, &theme);
    render_quick_actions(frame, layout[2], &theme);
}

fn thirds(area: Rect) -> [Rect; 3] {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [cols[0], cols[1], cols[2]]
}

fn render_report_stats(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let reports = state.reports.board.records();
    let count = |category: Category| {
        reports
            .iter()
            .filter(|report| report.category == category)
            .count()
    };

    let [total, potential, not_potential] = thirds(area);
    StatCard::new("Total Laporan", reports.len().to_string(), theme).render(frame, total);
    StatCard::new(
        Category::Potential.label(),
        count(Category::Potential).to_string(),
        theme,
    )
    .subtitle("jentik ditemukan")
    .render(frame, potential);
    StatCard::new(
        Category::NotPotential.label(),
        count(Category::NotPotential).to_string(),
        theme,
    )
    .render(frame, not_potential);
}

fn render_account_stats(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let accounts = state.accounts.board.records();
    let columns = thirds(area);

    for (role, rect) in Role::ALL.into_iter().zip(columns) {
        let count = accounts
            .iter()
            .filter(|account| account.role == role)
            .count();
        StatCard::new(role.label(), count.to_string(), theme).render(frame, rect);
    }
}

fn render_quick_actions(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let block = Card::new("Menu", theme).block();
    let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.accent));
    let line = Line::from(vec![
        key("l"),
        Span::raw(" Laporan  "),
        key("a"),
        Span::raw(" Data Akun  "),
        key("?"),
        Span::raw(" help"),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
