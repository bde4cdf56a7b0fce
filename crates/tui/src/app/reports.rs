use chrono::Local;
use engine::{Category, Report, ReportsBoard, SaveOutcome, export};

use super::{AppState, ListMode, ToastLevel, clamp, step_down};
use crate::ui::keymap::AppAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    Date,
    Rt,
    Rw,
    Address,
    Category,
}

impl ReportField {
    pub const ORDER: [ReportField; 5] = [
        ReportField::Date,
        ReportField::Rt,
        ReportField::Rw,
        ReportField::Address,
        ReportField::Category,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Tanggal",
            Self::Rt => "RT",
            Self::Rw => "RW",
            Self::Address => "Detail Alamat",
            Self::Category => "Kategori",
        }
    }

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug)]
pub struct ReportsState {
    pub board: ReportsBoard,
    pub mode: ListMode,
    /// Row of the visible set under the cursor.
    pub selected: usize,
    pub focus: ReportField,
}

impl ReportsState {
    pub fn new(reports: Vec<Report>) -> Self {
        Self {
            board: ReportsBoard::new(reports),
            mode: ListMode::Browse,
            selected: 0,
            focus: ReportField::Date,
        }
    }

    pub fn selected_report(&self) -> Option<&Report> {
        self.board.visible().get(self.selected).copied()
    }

    fn select_next(&mut self) {
        self.selected = step_down(self.selected, self.board.visible().len());
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = clamp(self.selected, self.board.visible().len());
    }

    fn select_id(&mut self, id: u64) {
        match self.board.visible().iter().position(|report| report.id == id) {
            Some(position) => self.selected = position,
            None => self.clamp_selection(),
        }
    }

    fn text_field_mut(&mut self) -> Option<&mut String> {
        let focus = self.focus;
        let draft = self.board.draft_mut()?;
        match focus {
            ReportField::Date => Some(&mut draft.date),
            ReportField::Rt => Some(&mut draft.rt),
            ReportField::Rw => Some(&mut draft.rw),
            ReportField::Address => Some(&mut draft.address),
            ReportField::Category => None,
        }
    }

    fn toggle_category(&mut self) {
        if let Some(draft) = self.board.draft_mut() {
            draft.category = draft.category.toggle();
        }
    }
}

impl AppState {
    pub(super) fn handle_reports(&mut self, action: AppAction) {
        match self.reports.mode {
            ListMode::Browse => self.reports_browse(action),
            ListMode::Search => self.reports_search(action),
            ListMode::Edit => self.reports_edit(action),
        }
    }

    fn reports_browse(&mut self, action: AppAction) {
        let reports = &mut self.reports;
        match action {
            AppAction::Up | AppAction::Input('k') => reports.select_prev(),
            AppAction::Down | AppAction::Input('j') => reports.select_next(),
            AppAction::Input('/') => reports.mode = ListMode::Search,
            AppAction::Input('c') => {
                let selector = reports.board.selector().next_in(&Category::ALL);
                reports.board.set_selector(selector);
                reports.clamp_selection();
            }
            AppAction::Cancel => {
                reports.board.set_query(String::new());
                reports.clamp_selection();
            }
            AppAction::Submit | AppAction::Input('e') => self.open_report_editor(),
            AppAction::Input('o') => self.show_report_location(),
            AppAction::Input('x') => self.export_reports(),
            _ => {}
        }
    }

    fn reports_search(&mut self, action: AppAction) {
        let reports = &mut self.reports;
        match action {
            AppAction::Input(ch) => reports.board.query_mut().push(ch),
            AppAction::Backspace => {
                reports.board.query_mut().pop();
            }
            AppAction::Submit => reports.mode = ListMode::Browse,
            AppAction::Cancel => {
                reports.board.set_query(String::new());
                reports.mode = ListMode::Browse;
            }
            AppAction::Up => reports.select_prev(),
            AppAction::Down => reports.select_next(),
            _ => {}
        }
        reports.clamp_selection();
    }

    fn reports_edit(&mut self, action: AppAction) {
        let reports = &mut self.reports;
        let on_category = reports.focus == ReportField::Category;
        match action {
            AppAction::NextField => reports.focus = reports.focus.next(),
            AppAction::PrevField => reports.focus = reports.focus.prev(),
            AppAction::Up | AppAction::Down | AppAction::Left | AppAction::Right
                if on_category =>
            {
                reports.toggle_category();
            }
            AppAction::Input(' ') if on_category => reports.toggle_category(),
            AppAction::Input(ch) => {
                if let Some(field) = reports.text_field_mut() {
                    field.push(ch);
                }
            }
            AppAction::Backspace => {
                if let Some(field) = reports.text_field_mut() {
                    field.pop();
                }
            }
            AppAction::Submit => self.save_report(),
            AppAction::Cancel => {
                reports.board.cancel();
                reports.mode = ListMode::Browse;
            }
            _ => {}
        }
    }

    fn open_report_editor(&mut self) {
        let Some(id) = self.reports.selected_report().map(|report| report.id) else {
            return;
        };
        match self.reports.board.open_edit(id) {
            Ok(()) => {
                self.reports.mode = ListMode::Edit;
                self.reports.focus = ReportField::Date;
            }
            Err(err) => self.notify(ToastLevel::Error, err.to_string()),
        }
    }

    fn save_report(&mut self) {
        match self.reports.board.save() {
            Ok(SaveOutcome::Committed { id, .. }) => {
                self.reports.mode = ListMode::Browse;
                self.reports.select_id(id);
                self.notify(ToastLevel::Success, format!("Laporan #{id} disimpan."));
            }
            Ok(SaveOutcome::Rejected) => {}
            Ok(SaveOutcome::NothingOpen) => self.reports.mode = ListMode::Browse,
            Err(err) => {
                tracing::warn!("report save failed: {err}");
                self.notify(ToastLevel::Error, err.to_string());
            }
        }
    }

    fn show_report_location(&mut self) {
        let Some(message) = self.reports.selected_report().map(|report| {
            format!(
                "Lokasi: {} (RT {}/RW {})",
                report.address, report.rt, report.rw
            )
        }) else {
            return;
        };
        self.notify(ToastLevel::Info, message);
    }

    fn export_reports(&mut self) {
        match export::write_reports(&self.export_dir, self.reports.board.records()) {
            Ok(path) => {
                self.last_export = Some(Local::now());
                self.notify(
                    ToastLevel::Success,
                    format!("Export: {}", path.display()),
                );
            }
            Err(err) => {
                tracing::error!("export failed: {err}");
                self.notify(ToastLevel::Error, format!("Export gagal: {err}"));
            }
        }
    }
}
