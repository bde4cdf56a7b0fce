//! The module contains `Account`, its `Role` and the account commit rules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{EngineError, Record};

/// Role of a user account.
///
/// Only residents belong to a neighbourhood unit, so only they carry RT/RW
/// codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "Warga")]
    Resident,
    #[serde(rename = "Petugas")]
    Officer,
    #[serde(rename = "Admin")]
    Admin,
}

impl Role {
    /// Every role, in selector order.
    pub const ALL: [Role; 3] = [Role::Resident, Role::Officer, Role::Admin];

    /// Label shown in tables, selectors and exported data.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Role::Resident => "Warga",
            Role::Officer => "Petugas",
            Role::Admin => "Admin",
        }
    }

    /// The next role in selector order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Role::Resident => Role::Officer,
            Role::Officer => Role::Admin,
            Role::Admin => Role::Resident,
        }
    }

    /// The previous role in selector order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Role::Resident => Role::Admin,
            Role::Officer => Role::Resident,
            Role::Admin => Role::Officer,
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Role {
    type Error = EngineError;

    /// Exact, case-sensitive match on the label.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Role::ALL
            .into_iter()
            .find(|role| role.label() == value)
            .ok_or_else(|| EngineError::UnknownRole(value.to_string()))
    }
}

/// A user account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub name: String,
    pub role: Role,
    /// Neighbourhood unit (RT). Empty unless the role is `Resident`.
    #[serde(default)]
    pub rt: String,
    /// Community unit (RW). Empty unless the role is `Resident`.
    #[serde(default)]
    pub rw: String,
}

impl Account {
    pub fn new(id: u64, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            rt: String::new(),
            rw: String::new(),
        }
    }

    /// Builder-style setter for the RT/RW codes.
    #[must_use]
    pub fn with_unit(mut self, rt: impl Into<String>, rw: impl Into<String>) -> Self {
        self.rt = rt.into();
        self.rw = rw.into();
        self
    }

    /// The template staged by "add user": a resident with every text field
    /// empty.
    pub fn blank(id: u64) -> Self {
        Self::new(id, String::new(), Role::default())
    }

    /// Whether RT/RW apply to this account's role.
    pub fn has_unit(&self) -> bool {
        self.role == Role::Resident
    }

    /// Clear RT/RW when the role has no unit.
    pub fn normalize_unit(&mut self) {
        if !self.has_unit() {
            self.rt.clear();
            self.rw.clear();
        }
    }
}

impl Record for Account {
    type Id = u64;
    type Kind = Role;

    const INSERTS_NEW: bool = true;

    fn id(&self) -> u64 {
        self.id
    }

    fn kind(&self) -> Role {
        self.role
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn prepare_commit(mut self) -> Option<Self> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        self.name = name.to_string();
        self.normalize_unit();
        Some(self)
    }
}

/// A fresh account id: one past the largest id in use, or the smallest
/// unused id once the largest is `u64::MAX`.
///
/// The result never matches an id in `accounts`, so a new-account commit
/// always inserts.
pub fn next_account_id(accounts: &[Account]) -> u64 {
    let Some(max) = accounts.iter().map(|account| account.id).max() else {
        return 1;
    };
    max.checked_add(1).unwrap_or_else(|| smallest_unused_id(accounts))
}

fn smallest_unused_id(accounts: &[Account]) -> u64 {
    let used: BTreeSet<u64> = accounts.iter().map(|account| account.id).collect();
    (1..=u64::MAX).find(|id| !used.contains(id)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_labels_parse_exactly() {
        assert_eq!(Role::try_from("Warga").unwrap(), Role::Resident);
        assert_eq!(Role::try_from("Petugas").unwrap(), Role::Officer);
        assert_eq!(Role::try_from("Admin").unwrap(), Role::Admin);
        assert_eq!(
            Role::try_from("warga").unwrap_err(),
            EngineError::UnknownRole("warga".to_string())
        );
    }

    #[test]
    fn role_cycle_wraps() {
        assert_eq!(Role::Admin.next(), Role::Resident);
        assert_eq!(Role::Resident.prev(), Role::Admin);
        for role in Role::ALL {
            assert_eq!(role.next().prev(), role);
        }
    }

    #[test]
    fn prepare_commit_trims_name() {
        let account = Account::new(1, "  Budi  ", Role::Officer);
        let prepared = account.prepare_commit().unwrap();
        assert_eq!(prepared.name, "Budi");
    }

    #[test]
    fn prepare_commit_rejects_blank_name() {
        assert!(Account::new(1, "   ", Role::Admin).prepare_commit().is_none());
        assert!(Account::blank(1).prepare_commit().is_none());
    }

    #[test]
    fn prepare_commit_clears_unit_for_non_residents() {
        let officer = Account::new(2, "Petugas A", Role::Officer).with_unit("03", "04");
        let prepared = officer.prepare_commit().unwrap();
        assert_eq!(prepared.rt, "");
        assert_eq!(prepared.rw, "");

        let resident = Account::new(3, "Sahroni", Role::Resident).with_unit("01", "02");
        let prepared = resident.prepare_commit().unwrap();
        assert_eq!(prepared.rt, "01");
        assert_eq!(prepared.rw, "02");
    }

    #[test]
    fn next_id_is_one_past_max() {
        assert_eq!(next_account_id(&[]), 1);
        let accounts = vec![
            Account::new(7, "A", Role::Admin),
            Account::new(3, "B", Role::Admin),
        ];
        assert_eq!(next_account_id(&accounts), 8);
    }

    #[test]
    fn next_id_after_max_takes_smallest_free() {
        let accounts = vec![Account::new(u64::MAX, "Max", Role::Admin)];
        assert_eq!(next_account_id(&accounts), 1);

        let accounts = vec![
            Account::new(1, "A", Role::Admin),
            Account::new(u64::MAX, "Max", Role::Admin),
            Account::new(2, "B", Role::Admin),
        ];
        assert_eq!(next_account_id(&accounts), 3);
    }

    #[test]
    fn deserializes_source_shape() {
        let raw = r#"{"id":1,"name":"Sahroni","role":"Warga","rt":"01","rw":"01"}"#;
        let account: Account = serde_json::from_str(raw).unwrap();
        assert_eq!(
            account,
            Account::new(1, "Sahroni", Role::Resident).with_unit("01", "01")
        );
    }
}
