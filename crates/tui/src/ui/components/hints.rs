use ratatui::{style::Style, text::Span};

use crate::{
    app::{AccountField, AccountsState, ListMode, ReportField, ReportsState},
    ui::theme::Theme,
};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            hint.key.clone(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

pub mod common {
    use super::KeyHint;

    pub fn search_input() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Enter", "done"),
            KeyHint::new("Esc", "clear"),
        ]
    }

    pub fn form_editing() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Tab", "next"),
            KeyHint::new("Enter", "save"),
            KeyHint::new("Esc", "cancel"),
        ]
    }

    pub fn choice_editing() -> Vec<KeyHint> {
        vec![
            KeyHint::new("↑↓", "change"),
            KeyHint::new("Tab", "next"),
            KeyHint::new("Enter", "save"),
        ]
    }
}

/// Context-aware hints for the bottom bar.
pub trait HintProvider {
    fn hints(&self) -> Vec<KeyHint>;
}

impl HintProvider for ReportsState {
    fn hints(&self) -> Vec<KeyHint> {
        match self.mode {
            ListMode::Browse => vec![
                KeyHint::new("/", "search"),
                KeyHint::new("c", "kategori"),
                KeyHint::new("e", "edit"),
                KeyHint::new("o", "lokasi"),
                KeyHint::new("x", "export"),
            ],
            ListMode::Search => common::search_input(),
            ListMode::Edit if self.focus == ReportField::Category => common::choice_editing(),
            ListMode::Edit => common::form_editing(),
        }
    }
}

impl HintProvider for AccountsState {
    fn hints(&self) -> Vec<KeyHint> {
        match self.mode {
            ListMode::Browse => vec![
                KeyHint::new("/", "search"),
                KeyHint::new("r", "role"),
                KeyHint::new("n", "add"),
                KeyHint::new("e", "edit"),
            ],
            ListMode::Search => common::search_input(),
            ListMode::Edit if self.focus == AccountField::Role => common::choice_editing(),
            ListMode::Edit => common::form_editing(),
        }
    }
}
