pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Section};
use components::hints::{HintProvider, hint_separator, hints_to_spans};

pub use terminal::{AppTerminal as Terminal, install_panic_hook, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    match state.section {
        Section::Home => screens::home::render(frame, layout[2], state),
        Section::Reports => screens::reports::render(frame, layout[2], state),
        Section::Accounts => screens::accounts::render(frame, layout[2], state),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
    components::help_overlay::render(frame, area, state);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let export = state
        .last_export
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled("Laporan", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.reports.board.records().len())),
        Span::styled("Akun", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.accounts.board.records().len())),
        Span::styled("Export", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {export}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::tabs::tab_shortcuts(theme);

    let context = match state.section {
        Section::Home => Vec::new(),
        Section::Reports => state.reports.hints(),
        Section::Accounts => state.accounts.hints(),
    };
    if !context.is_empty() {
        parts.push(hint_separator(theme));
        parts.extend(hints_to_spans(&context, theme));
    }

    parts.push(hint_separator(theme));
    parts.push(Span::styled("?", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" help  "));
    parts.push(Span::styled("q", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        app::tests::{state, type_text},
        ui::keymap::AppAction,
    };

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn home_shows_counts() {
        let screen = draw(&state());
        assert!(screen.contains("Total Laporan"));
        assert!(screen.contains("Tidak Berpotensi"));
        assert!(screen.contains("Petugas"));
    }

    #[test]
    fn reports_table_lists_rows() {
        let mut state = state();
        let _ = state.handle(AppAction::Input('l'));
        let screen = draw(&state);
        assert!(screen.contains("Detail Alamat"));
        assert!(screen.contains("Jl. MH. Thamrin No. 50, Sibolga"));
        assert!(screen.contains("[Berpotensi]"));
        assert!(!screen.contains(screens::EMPTY_PLACEHOLDER));
    }

    #[test]
    fn empty_filter_shows_placeholder() {
        let mut state = state();
        let _ = state.handle(AppAction::Input('l'));
        let _ = state.handle(AppAction::Input('/'));
        type_text(&mut state, "zzz");
        assert!(draw(&state).contains(screens::EMPTY_PLACEHOLDER));

        let _ = state.handle(AppAction::Cancel);
        let _ = state.handle(AppAction::Input('a'));
        let _ = state.handle(AppAction::Input('/'));
        type_text(&mut state, "zzz");
        let screen = draw(&state);
        assert!(screen.contains(screens::EMPTY_PLACEHOLDER));
        assert!(screen.contains("Nama"));
    }

    #[test]
    fn account_rows_dash_missing_unit() {
        let mut state = state();
        let _ = state.handle(AppAction::Input('a'));
        let screen = draw(&state);
        let officer_row = screen
            .lines()
            .find(|line| line.contains("Petugas A"))
            .unwrap();
        assert!(officer_row.contains(" - "));
        assert!(officer_row.contains("[Petugas]"));
    }

    #[test]
    fn modals_have_titles_and_fields() {
        let mut state = state();
        let _ = state.handle(AppAction::Input('a'));
        let _ = state.handle(AppAction::Input('n'));
        let screen = draw(&state);
        assert!(screen.contains("Add User"));
        assert!(screen.contains("Simpan"));
        assert!(screen.contains("RT"));

        let _ = state.handle(AppAction::Cancel);
        let _ = state.handle(AppAction::Input('l'));
        let _ = state.handle(AppAction::Submit);
        let screen = draw(&state);
        assert!(screen.contains("Edit Laporan"));
        assert!(screen.contains("Batal"));
    }

    #[test]
    fn officer_modal_hides_unit_fields() {
        let mut state = state();
        let _ = state.handle(AppAction::Input('a'));
        let _ = state.handle(AppAction::Input('n'));
        let _ = state.handle(AppAction::Down);
        let screen = draw(&state);
        let modal: Vec<&str> = screen
            .lines()
            .skip_while(|line| !line.contains("Add User"))
            .take_while(|line| !line.contains("Simpan"))
            .collect();
        assert!(modal.iter().any(|line| line.contains("Nama")));
        assert!(!modal.iter().any(|line| line.contains("RW ")));
    }

    #[test]
    fn help_overlay_lists_section_keys() {
        let mut state = state();
        let _ = state.handle(AppAction::Input('l'));
        let _ = state.handle(AppAction::Input('?'));
        let screen = draw(&state);
        assert!(screen.contains("Keybinds"));
        assert!(screen.contains("export CSV"));
    }
}
