//! Data the console starts with.
//!
//! The built-in seed mirrors the demo data of the admin screens. A JSON
//! dataset file can replace it; it is only ever read.

use std::{collections::BTreeSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Account, Category, EngineError, Report, ResultEngine, Role};

const SEED_REPORTS: usize = 10;
const SEED_DATE: &str = "01/Okt/2025";
const SEED_ADDRESS: &str = "Jl. MH. Thamrin No. 50, Sibolga";
const SEED_REPORTER: &str = "Sindy";

/// Both collections, as stored in a dataset file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub reports: Vec<Report>,
}

impl Dataset {
    /// The built-in demo data.
    pub fn builtin() -> Self {
        Self {
            accounts: accounts(),
            reports: reports(),
        }
    }
}

pub fn accounts() -> Vec<Account> {
    vec![
        Account::new(1, "Sahroni", Role::Resident).with_unit("01", "01"),
        Account::new(2, "Petugas A", Role::Officer),
        Account::new(3, "Admin Pusat", Role::Admin),
    ]
}

/// Ten reports; every third one, starting with the first, is `Potential`.
pub fn reports() -> Vec<Report> {
    (0..SEED_REPORTS)
        .map(|i| Report {
            id: i as u64 + 1,
            date: SEED_DATE.to_string(),
            rt: format!("{:02}", i % 6 + 1),
            rw: format!("{:02}", i % 4 + 1),
            address: SEED_ADDRESS.to_string(),
            category: if i % 3 == 0 {
                Category::Potential
            } else {
                Category::NotPotential
            },
            reporter: SEED_REPORTER.to_string(),
            image: None,
        })
        .collect()
}

/// Parse a dataset. Missing sections default to empty collections.
///
/// Ids must be unique within each collection. RT/RW of non-resident
/// accounts are cleared, as a commit would.
pub fn parse_json(content: &str) -> ResultEngine<Dataset> {
    let mut dataset: Dataset = serde_json::from_str(content)?;
    ensure_unique_ids("accounts", dataset.accounts.iter().map(|account| account.id))?;
    ensure_unique_ids("reports", dataset.reports.iter().map(|report| report.id))?;
    for account in &mut dataset.accounts {
        account.normalize_unit();
    }
    Ok(dataset)
}

fn ensure_unique_ids(
    collection: &'static str,
    ids: impl Iterator<Item = u64>,
) -> ResultEngine<()> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(EngineError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

/// Read a dataset file. See [`parse_json`].
pub fn load_json(path: &Path) -> ResultEngine<Dataset> {
    let content = fs::read_to_string(path)?;
    let dataset = parse_json(&content)?;
    tracing::info!(
        path = %path.display(),
        accounts = dataset.accounts.len(),
        reports = dataset.reports.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// The dataset at `path`, or the built-in one when no path is given.
pub fn load_or_builtin(path: Option<&Path>) -> ResultEngine<Dataset> {
    match path {
        Some(path) => load_json(path),
        None => Ok(Dataset::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_reports_layout() {
        let reports = reports();
        assert_eq!(reports.len(), 10);
        assert_eq!(reports[0].rt, "01");
        assert_eq!(reports[5].rt, "06");
        assert_eq!(reports[6].rt, "01");
        assert_eq!(reports[3].rw, "04");
        assert_eq!(reports[4].rw, "01");
        let ids: Vec<u64> = reports.iter().map(|report| report.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    }

    #[test]
    fn seed_accounts_respect_unit_invariant() {
        for account in accounts() {
            if !account.has_unit() {
                assert!(account.rt.is_empty() && account.rw.is_empty());
            }
        }
    }

    #[test]
    fn dataset_sections_are_optional() {
        let dataset: Dataset = serde_json::from_str(
            r#"{"accounts":[{"id":5,"name":"Budi","role":"Petugas"}]}"#,
        )
        .unwrap();
        assert_eq!(dataset.accounts, vec![Account::new(5, "Budi", Role::Officer)]);
        assert!(dataset.reports.is_empty());
    }

    #[test]
    fn load_json_missing_file_is_io_error() {
        let err = load_json(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }

    #[test]
    fn duplicate_report_ids_are_rejected() {
        let report = r#"{"id":4,"date":"","rt":"","rw":"","alamat":"","kategori":"Berpotensi","pelapor":""}"#;
        let raw = format!(r#"{{"reports":[{report},{report}]}}"#);
        assert_eq!(
            parse_json(&raw).unwrap_err(),
            EngineError::DuplicateId {
                collection: "reports",
                id: 4
            }
        );
    }

    #[test]
    fn same_id_across_collections_is_fine() {
        let raw = r#"{
            "accounts":[{"id":1,"name":"A","role":"Admin"}],
            "reports":[{"id":1,"date":"","rt":"","rw":"","alamat":"","kategori":"Berpotensi","pelapor":""}]
        }"#;
        let dataset = parse_json(raw).unwrap();
        assert_eq!(dataset.accounts.len(), 1);
        assert_eq!(dataset.reports.len(), 1);
    }

    #[test]
    fn non_resident_units_are_cleared_on_load() {
        let raw = r#"{"accounts":[
            {"id":1,"name":"A","role":"Warga","rt":"01","rw":"01"},
            {"id":2,"name":"B","role":"Petugas","rt":"09","rw":"09"}
        ]}"#;
        let dataset = parse_json(raw).unwrap();
        assert_eq!(
            dataset.accounts,
            vec![
                Account::new(1, "A", Role::Resident).with_unit("01", "01"),
                Account::new(2, "B", Role::Officer),
            ]
        );
    }

    #[test]
    fn load_json_validates_file_contents() {
        let path = std::env::temp_dir().join(format!("jumantik_seed_{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"accounts":[{"id":3,"name":"A","role":"Admin"},{"id":3,"name":"B","role":"Admin"}]}"#,
        )
        .unwrap();
        let err = load_json(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            err,
            EngineError::DuplicateId {
                collection: "accounts",
                id: 3
            }
        );
    }
}
