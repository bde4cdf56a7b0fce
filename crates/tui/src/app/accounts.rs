use engine::{Account, AccountsBoard, Origin, Role, SaveOutcome};

use super::{AppState, ListMode, ToastLevel, clamp, step_down};
use crate::ui::keymap::AppAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Role,
    Name,
    Rt,
    Rw,
}

impl AccountField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Role => "Role",
            Self::Name => "Nama",
            Self::Rt => "RT",
            Self::Rw => "RW",
        }
    }

    /// Fields shown in the modal. RT/RW only exist for residents.
    pub fn visible_for(role: Role) -> &'static [AccountField] {
        if role == Role::Resident {
            &[Self::Role, Self::Name, Self::Rt, Self::Rw]
        } else {
            &[Self::Role, Self::Name]
        }
    }
}

#[derive(Debug)]
pub struct AccountsState {
    pub board: AccountsBoard,
    pub mode: ListMode,
    pub selected: usize,
    pub focus: AccountField,
}

impl AccountsState {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            board: AccountsBoard::new(accounts),
            mode: ListMode::Browse,
            selected: 0,
            focus: AccountField::Role,
        }
    }

    pub fn selected_account(&self) -> Option<&Account> {
        self.board.visible().get(self.selected).copied()
    }

    /// Title of the modal for the open session.
    pub fn modal_title(&self) -> &'static str {
        match self.board.session().origin() {
            Some(Origin::New) => "Add User",
            _ => "Edit User",
        }
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
        match self.board.visible().iter().position(|account| account.id == id) {
            Some(position) => self.selected = position,
            None => self.clamp_selection(),
        }
    }

    fn draft_role(&self) -> Role {
        self.board
            .draft()
            .map_or(Role::default(), |draft| draft.record.role)
    }

    fn move_focus(&mut self, forward: bool) {
        let fields = AccountField::visible_for(self.draft_role());
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let len = fields.len();
        let next = if forward { idx + 1 } else { idx + len - 1 };
        self.focus = fields[next % len];
    }

    /// Switching away from `Resident` hides RT/RW, but the typed codes stay
    /// in the draft until commit.
    fn cycle_role(&mut self, forward: bool) {
        if let Some(draft) = self.board.draft_mut() {
            draft.role = if forward {
                draft.role.next()
            } else {
                draft.role.prev()
            };
        }
    }

    fn text_field_mut(&mut self) -> Option<&mut String> {
        let focus = self.focus;
        let draft = self.board.draft_mut()?;
        match focus {
            AccountField::Name => Some(&mut draft.name),
            AccountField::Rt => Some(&mut draft.rt),
            AccountField::Rw => Some(&mut draft.rw),
            AccountField::Role => None,
        }
    }
}

impl AppState {
    pub(super) fn handle_accounts(&mut self, action: AppAction) {
        match self.accounts.mode {
            ListMode::Browse => self.accounts_browse(action),
            ListMode::Search => self.accounts_search(action),
            ListMode::Edit => self.accounts_edit(action),
        }
    }

    fn accounts_browse(&mut self, action: AppAction) {
        let accounts = &mut self.accounts;
        match action {
            AppAction::Up | AppAction::Input('k') => accounts.select_prev(),
            AppAction::Down | AppAction::Input('j') => accounts.select_next(),
            AppAction::Input('/') => accounts.mode = ListMode::Search,
            AppAction::Input('r') => {
                let selector = accounts.board.selector().next_in(&Role::ALL);
                accounts.board.set_selector(selector);
                accounts.clamp_selection();
            }
            AppAction::Cancel => {
                accounts.board.set_query(String::new());
                accounts.clamp_selection();
            }
            AppAction::Input('n') => {
                let id = accounts.board.open_add();
                tracing::debug!(id, "add user opened");
                accounts.mode = ListMode::Edit;
                accounts.focus = AccountField::Role;
            }
            AppAction::Submit | AppAction::Input('e') => self.open_account_editor(),
            _ => {}
        }
    }

    fn accounts_search(&mut self, action: AppAction) {
        let accounts = &mut self.accounts;
        match action {
            AppAction::Input(ch) => accounts.board.query_mut().push(ch),
            AppAction::Backspace => {
                accounts.board.query_mut().pop();
            }
            AppAction::Submit => accounts.mode = ListMode::Browse,
            AppAction::Cancel => {
                accounts.board.set_query(String::new());
                accounts.mode = ListMode::Browse;
            }
            AppAction::Up => accounts.select_prev(),
            AppAction::Down => accounts.select_next(),
            _ => {}
        }
        accounts.clamp_selection();
    }

    fn accounts_edit(&mut self, action: AppAction) {
        let accounts = &mut self.accounts;
        let on_role = accounts.focus == AccountField::Role;
        match action {
            AppAction::NextField => accounts.move_focus(true),
            AppAction::PrevField => accounts.move_focus(false),
            AppAction::Down | AppAction::Right if on_role => accounts.cycle_role(true),
            AppAction::Up | AppAction::Left if on_role => accounts.cycle_role(false),
            AppAction::Input(' ') if on_role => accounts.cycle_role(true),
            AppAction::Input(ch) => {
                if let Some(field) = accounts.text_field_mut() {
                    field.push(ch);
                }
            }
            AppAction::Backspace => {
                if let Some(field) = accounts.text_field_mut() {
                    field.pop();
                }
            }
            AppAction::Submit => self.save_account(),
            AppAction::Cancel => {
                accounts.board.cancel();
                accounts.mode = ListMode::Browse;
            }
            _ => {}
        }
    }

    fn open_account_editor(&mut self) {
        let Some(id) = self.accounts.selected_account().map(|account| account.id) else {
            return;
        };
        match self.accounts.board.open_edit(id) {
            Ok(()) => {
                self.accounts.mode = ListMode::Edit;
                self.accounts.focus = AccountField::Role;
            }
            Err(err) => self.notify(ToastLevel::Error, err.to_string()),
        }
    }

    fn save_account(&mut self) {
        match self.accounts.board.save() {
            Ok(SaveOutcome::Committed { id, .. }) => {
                self.accounts.mode = ListMode::Browse;
                self.accounts.select_id(id);
                self.notify(ToastLevel::Success, "Akun disimpan.");
            }
            // Empty name: the modal simply stays open.
            Ok(SaveOutcome::Rejected) => {}
            Ok(SaveOutcome::NothingOpen) => self.accounts.mode = ListMode::Browse,
            Err(err) => {
                tracing::warn!("account save failed: {err}");
                self.notify(ToastLevel::Error, err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use engine::Selector;

    use super::*;
    use crate::app::tests::{state, type_text};

    fn accounts_state() -> AppState {
        let mut state = state();
        let _ = state.handle(AppAction::Input('a'));
        state
    }

    #[test]
    fn add_officer_through_modal() {
        let mut state = accounts_state();
        let _ = state.handle(AppAction::Input('n'));
        assert_eq!(state.accounts.modal_title(), "Add User");

        let _ = state.handle(AppAction::Down);
        let _ = state.handle(AppAction::NextField);
        assert_eq!(state.accounts.focus, AccountField::Name);
        type_text(&mut state, " Budi ");
        let _ = state.handle(AppAction::Submit);

        assert_eq!(state.accounts.mode, ListMode::Browse);
        let first = &state.accounts.board.records()[0];
        assert_eq!(first.name, "Budi");
        assert_eq!(first.role, Role::Officer);
        assert_eq!(state.accounts.board.records().len(), 4);
        assert_eq!(state.accounts.selected, 0);
    }

    #[test]
    fn empty_name_keeps_modal_open() {
        let mut state = accounts_state();
        let _ = state.handle(AppAction::Input('n'));
        let _ = state.handle(AppAction::Submit);
        assert_eq!(state.accounts.mode, ListMode::Edit);
        assert!(state.accounts.board.session().is_open());
        assert_eq!(state.accounts.board.records().len(), 3);
        assert!(state.toast.is_none());
    }

    #[test]
    fn unit_fields_follow_role() {
        let mut state = accounts_state();
        let _ = state.handle(AppAction::Input('e'));
        assert_eq!(state.accounts.modal_title(), "Edit User");

        for _ in 0..3 {
            let _ = state.handle(AppAction::NextField);
        }
        assert_eq!(state.accounts.focus, AccountField::Rw);

        let _ = state.handle(AppAction::NextField);
        assert_eq!(state.accounts.focus, AccountField::Role);
        let _ = state.handle(AppAction::Input(' '));
        assert_eq!(
            state.accounts.board.draft().unwrap().record.role,
            Role::Officer
        );
        let _ = state.handle(AppAction::NextField);
        let _ = state.handle(AppAction::NextField);
        assert_eq!(state.accounts.focus, AccountField::Role);

        let _ = state.handle(AppAction::Submit);
        let saved = &state.accounts.board.records()[0];
        assert_eq!(saved.id, 1);
        assert_eq!(saved.role, Role::Officer);
        assert_eq!(saved.rt, "");
        assert_eq!(saved.rw, "");
    }

    #[test]
    fn focus_wraps_backwards_and_up_cycles_role() {
        let mut state = accounts_state();
        let _ = state.handle(AppAction::Input('e'));
        let _ = state.handle(AppAction::PrevField);
        assert_eq!(state.accounts.focus, AccountField::Rw);
        let _ = state.handle(AppAction::PrevField);
        let _ = state.handle(AppAction::PrevField);
        let _ = state.handle(AppAction::PrevField);
        assert_eq!(state.accounts.focus, AccountField::Role);
        let _ = state.handle(AppAction::Up);
        assert_eq!(
            state.accounts.board.draft().unwrap().record.role,
            Role::Admin
        );
    }

    #[test]
    fn role_filter_and_search() {
        let mut state = accounts_state();
        let _ = state.handle(AppAction::Input('r'));
        let _ = state.handle(AppAction::Input('r'));
        assert_eq!(
            state.accounts.board.selector(),
            Selector::Only(Role::Officer)
        );
        assert_eq!(state.accounts.board.visible().len(), 1);

        let _ = state.handle(AppAction::Input('r'));
        let _ = state.handle(AppAction::Input('r'));
        let _ = state.handle(AppAction::Input('/'));
        type_text(&mut state, "PUSAT");
        let visible = state.accounts.board.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Admin Pusat");
    }
}
