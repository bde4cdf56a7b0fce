use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Cell, Paragraph, Row},
};

use crate::{
    app::{AccountField, AccountsState, AppState, ListMode},
    ui::{
        components::form::{actions_line, chip, choice_field, render_modal, text_field},
        screens::{filter_bar, render_table},
        theme::Theme,
    },
};

const HEADER: [&str; 5] = ["No", "Nama", "RT", "RW", "Role"];

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let accounts = &state.accounts;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let bar = filter_bar(
        accounts.board.query(),
        accounts.mode == ListMode::Search,
        "Role",
        accounts.board.selector().to_string(),
        &theme,
    );
    frame.render_widget(Paragraph::new(bar), layout[0]);

    render_table(
        frame,
        layout[1],
        "Data Akun",
        HEADER,
        [
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(12),
        ],
        rows(accounts, &theme),
        accounts.selected,
        &theme,
    );

    if accounts.mode == ListMode::Edit {
        render_editor(frame, area, accounts, &theme);
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn rows(accounts: &AccountsState, theme: &Theme) -> Vec<Row<'static>> {
    accounts
        .board
        .visible()
        .into_iter()
        .enumerate()
        .map(|(position, account)| {
            Row::new(vec![
                Cell::from((position + 1).to_string()),
                Cell::from(account.name.clone()),
                Cell::from(or_dash(&account.rt)),
                Cell::from(or_dash(&account.rw)),
                Cell::from(chip(account.role.label(), theme.role(account.role))),
            ])
            .style(Style::default().fg(theme.text))
        })
        .collect()
}

fn render_editor(frame: &mut Frame<'_>, area: Rect, accounts: &AccountsState, theme: &Theme) {
    let Some(draft) = accounts.board.draft() else {
        return;
    };
    let account = &draft.record;

    let mut lines: Vec<Line<'static>> = AccountField::visible_for(account.role)
        .iter()
        .map(|field| {
            let focused = accounts.focus == *field;
            match field {
                AccountField::Role => choice_field(
                    field.label(),
                    account.role.label(),
                    theme.role(account.role),
                    focused,
                    theme,
                ),
                AccountField::Name => text_field(field.label(), &account.name, focused, theme),
                AccountField::Rt => text_field(field.label(), &account.rt, focused, theme),
                AccountField::Rw => text_field(field.label(), &account.rw, focused, theme),
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(actions_line("Simpan", "Batal", theme));

    render_modal(frame, area, accounts.modal_title(), lines, theme);
}
