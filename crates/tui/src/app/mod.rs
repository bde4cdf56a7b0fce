mod accounts;
mod reports;

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEvent};
use engine::seed::Dataset;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use accounts::{AccountField, AccountsState};
pub use reports::{ReportField, ReportsState};

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Reports,
    Accounts,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::Reports, Section::Accounts];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Reports => "Laporan",
            Self::Accounts => "Data Akun",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Home => Self::Reports,
            Self::Reports => Self::Accounts,
            Self::Accounts => Self::Home,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Home => Self::Accounts,
            Self::Reports => Self::Home,
            Self::Accounts => Self::Reports,
        }
    }
}

/// What a list screen is doing with keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Browse,
    /// Typed characters go to the search query.
    Search,
    /// The edit modal is open.
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct HelpState {
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub reports: ReportsState,
    pub accounts: AccountsState,
    pub toast: Option<ToastState>,
    pub help: HelpState,
    pub export_dir: PathBuf,
    pub last_export: Option<DateTime<Local>>,
}

impl AppState {
    pub fn new(dataset: Dataset, export_dir: PathBuf) -> Self {
        Self {
            section: Section::Home,
            reports: ReportsState::new(dataset.reports),
            accounts: AccountsState::new(dataset.accounts),
            toast: None,
            help: HelpState::default(),
            export_dir,
            last_export: None,
        }
    }

    /// One turn of the update cycle: apply `action` to the state.
    pub fn handle(&mut self, action: AppAction) -> Flow {
        if action == AppAction::Quit {
            return Flow::Quit;
        }

        if self.help.active {
            if matches!(action, AppAction::Cancel | AppAction::Input('?')) {
                self.help.active = false;
            }
            return Flow::Continue;
        }

        if self.active_mode() == ListMode::Browse {
            match action {
                AppAction::Input('q') => return Flow::Quit,
                AppAction::Input('?') => {
                    self.help.active = true;
                    return Flow::Continue;
                }
                AppAction::Input('h') => {
                    self.section = Section::Home;
                    return Flow::Continue;
                }
                AppAction::Input('l') => {
                    self.section = Section::Reports;
                    return Flow::Continue;
                }
                AppAction::Input('a') => {
                    self.section = Section::Accounts;
                    return Flow::Continue;
                }
                AppAction::NextField => {
                    self.section = self.section.next();
                    return Flow::Continue;
                }
                AppAction::PrevField => {
                    self.section = self.section.prev();
                    return Flow::Continue;
                }
                _ => {}
            }
        }

        match self.section {
            Section::Home => {}
            Section::Reports => self.handle_reports(action),
            Section::Accounts => self.handle_accounts(action),
        }
        Flow::Continue
    }

    /// Input mode of the visible screen.
    pub fn active_mode(&self) -> ListMode {
        match self.section {
            Section::Home => ListMode::Browse,
            Section::Reports => self.reports.mode,
            Section::Accounts => self.accounts.mode,
        }
    }

    pub fn notify(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(ToastState {
            message: message.into(),
            level,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    pub fn expire_toast(&mut self, now: Instant) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
        }
    }
}

pub struct App {
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, dataset: Dataset) -> Self {
        Self {
            state: AppState::new(dataset, config.export_dir()),
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        ui::install_panic_hook();
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
            self.state.expire_toast(Instant::now());
        }

        tracing::info!("console closed");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.state.handle(map_key(key)) == Flow::Quit {
            self.should_quit = true;
        }
    }
}

/// Move `selected` one row down within `len` rows.
fn step_down(selected: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (selected + 1).min(len - 1)
}

fn clamp(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}
