use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row},
};

use crate::{
    app::{AppState, ListMode, ReportField, ReportsState},
    ui::{
        components::form::{actions_line, chip, choice_field, render_modal, text_field},
        screens::{filter_bar, render_table},
        theme::Theme,
    },
};

const IMAGE_WIDTH: usize = 18;

const HEADER: [&str; 8] = [
    "No",
    "Tanggal",
    "RT",
    "RW",
    "Detail Alamat",
    "Kategori",
    "Pelapor",
    "Gambar",
];

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let reports = &state.reports;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let bar = filter_bar(
        reports.board.query(),
        reports.mode == ListMode::Search,
        "Kategori",
        reports.board.selector().to_string(),
        &theme,
    );
    frame.render_widget(Paragraph::new(bar), layout[0]);

    render_table(
        frame,
        layout[1],
        "Laporan",
        HEADER,
        [
            Constraint::Length(4),
            Constraint::Length(12),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(20),
            Constraint::Length(12),
            Constraint::Length(IMAGE_WIDTH as u16),
        ],
        rows(reports, &theme),
        reports.selected,
        &theme,
    );

    if reports.mode == ListMode::Edit {
        render_editor(frame, area, reports, &theme);
    }
}

fn rows(reports: &ReportsState, theme: &Theme) -> Vec<Row<'static>> {
    reports
        .board
        .visible()
        .into_iter()
        .map(|report| {
            Row::new(vec![
                Cell::from(report.id.to_string()),
                Cell::from(report.date.clone()),
                Cell::from(report.rt.clone()),
                Cell::from(report.rw.clone()),
                Cell::from(report.address.clone()),
                Cell::from(chip(
                    report.category.label(),
                    theme.category(report.category),
                )),
                Cell::from(report.reporter.clone()),
                Cell::from(image_cell(report.image_ref())),
            ])
            .style(Style::default().fg(theme.text))
        })
        .collect()
}

/// The image reference, cut to the column width, or `—` when there is none.
fn image_cell(image: Option<&str>) -> String {
    let Some(image) = image else {
        return "—".to_string();
    };
    if image.chars().count() <= IMAGE_WIDTH {
        return image.to_string();
    }
    let mut cut: String = image.chars().take(IMAGE_WIDTH - 1).collect();
    cut.push('…');
    cut
}

fn render_editor(frame: &mut Frame<'_>, area: Rect, reports: &ReportsState, theme: &Theme) {
    let Some(draft) = reports.board.draft() else {
        return;
    };
    let report = &draft.record;

    let mut lines: Vec<Line<'static>> = ReportField::ORDER
        .iter()
        .map(|field| {
            let focused = reports.focus == *field;
            match field {
                ReportField::Date => text_field(field.label(), &report.date, focused, theme),
                ReportField::Rt => text_field(field.label(), &report.rt, focused, theme),
                ReportField::Rw => text_field(field.label(), &report.rw, focused, theme),
                ReportField::Address => {
                    text_field(field.label(), &report.address, focused, theme)
                }
                ReportField::Category => choice_field(
                    field.label(),
                    report.category.label(),
                    theme.category(report.category),
                    focused,
                    theme,
                ),
            }
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format!("Pelapor: {}", report.reporter),
        Style::default().fg(theme.dim),
    )));
    lines.push(Line::from(""));
    lines.push(actions_line("Simpan", "Batal", theme));

    render_modal(frame, area, "Edit Laporan", lines, theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_cell_shows_reference() {
        assert_eq!(image_cell(None), "—");
        assert_eq!(image_cell(Some("img/a.jpg")), "img/a.jpg");

        let cell = image_cell(Some("https://img.example/bukti/laporan-1.jpg"));
        assert_eq!(cell.chars().count(), IMAGE_WIDTH);
        assert!(cell.starts_with("https://img.exam"));
        assert!(cell.ends_with('…'));
    }
}
