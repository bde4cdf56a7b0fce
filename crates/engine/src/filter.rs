//! Filter/search over a collection.
//!
//! The visible set is a pure derivation of (records, query, selector): it is
//! recomputed on every read and never cached, so it cannot go stale after a
//! commit.

use crate::{EngineError, Record};

/// Label of the sentinel selector.
pub const ALL_LABEL: &str = "All";

/// The category/role dropdown value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selector<K> {
    /// No restriction.
    #[default]
    All,
    Only(K),
}

impl<K: Copy + Eq> Selector<K> {
    pub fn accepts(&self, kind: K) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => *wanted == kind,
        }
    }

    /// Step through `All, kinds[0], kinds[1], …` and back to `All`.
    #[must_use]
    pub fn next_in(self, kinds: &[K]) -> Self {
        match self {
            Selector::All => kinds.first().copied().map_or(Selector::All, Selector::Only),
            Selector::Only(current) => kinds
                .iter()
                .position(|kind| *kind == current)
                .and_then(|idx| kinds.get(idx + 1))
                .copied()
                .map_or(Selector::All, Selector::Only),
        }
    }
}

impl<K> Selector<K>
where
    K: for<'a> TryFrom<&'a str, Error = EngineError>,
{
    /// Parses a dropdown value. `"All"` is the sentinel; anything else must
    /// be an exact, case-sensitive label.
    pub fn parse(value: &str) -> Result<Self, EngineError> {
        if value == ALL_LABEL {
            return Ok(Selector::All);
        }
        K::try_from(value)
            .map(Selector::Only)
            .map_err(|_| EngineError::UnknownSelector(value.to_string()))
    }
}

impl<K: core::fmt::Display> core::fmt::Display for Selector<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Selector::All => f.write_str(ALL_LABEL),
            Selector::Only(kind) => kind.fmt(f),
        }
    }
}

/// Trimmed, lower-cased query. Empty means "no text filter".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether `record` passes both stages. `needle` must already be normalized.
pub fn matches<T: Record>(record: &T, needle: &str, selector: &Selector<T::Kind>) -> bool {
    if !selector.accepts(record.kind()) {
        return false;
    }
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// The visible subset, in collection order.
pub fn visible<'a, T: Record>(
    records: &'a [T],
    query: &str,
    selector: &Selector<T::Kind>,
) -> Vec<&'a T> {
    let needle = normalize_query(query);
    records
        .iter()
        .filter(|record| matches(*record, &needle, selector))
        .collect()
}

/// Collection positions of the visible subset, ascending.
pub fn visible_indices<T: Record>(
    records: &[T],
    query: &str,
    selector: &Selector<T::Kind>,
) -> Vec<usize> {
    let needle = normalize_query(query);
    records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| matches(record, &needle, selector).then_some(idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Account, Category, Role, seed};

    fn accounts() -> Vec<Account> {
        vec![
            Account::new(1, "Sahroni", Role::Resident).with_unit("01", "01"),
            Account::new(2, "Petugas A", Role::Officer),
            Account::new(3, "Admin Pusat", Role::Admin),
            Account::new(4, "Siti Sahara", Role::Resident).with_unit("02", "01"),
        ]
    }

    fn ids(records: &[&Account]) -> Vec<u64> {
        records.iter().map(|record| record.id).collect()
    }

    #[test]
    fn unfiltered_is_identity() {
        let accounts = accounts();
        let all = visible(&accounts, "", &Selector::All);
        assert_eq!(all.len(), accounts.len());
        assert!(all.iter().zip(&accounts).all(|(a, b)| *a == b));

        let whitespace = visible(&accounts, "   ", &Selector::All);
        assert_eq!(whitespace.len(), accounts.len());
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() {
        let accounts = accounts();
        assert_eq!(ids(&visible(&accounts, "  SAH ", &Selector::All)), [1, 4]);
        assert_eq!(ids(&visible(&accounts, "pusat", &Selector::All)), [3]);
        assert!(visible(&accounts, "nobody", &Selector::All).is_empty());
    }

    #[test]
    fn selector_and_search_are_conjunctive() {
        let accounts = accounts();
        let residents = Selector::Only(Role::Resident);
        assert_eq!(ids(&visible(&accounts, "", &residents)), [1, 4]);
        assert_eq!(ids(&visible(&accounts, "siti", &residents)), [4]);
        assert!(visible(&accounts, "pusat", &residents).is_empty());
    }

    #[test]
    fn visible_is_an_ordered_subsequence_and_idempotent() {
        let accounts = accounts();
        let queries = ["", "a", "SAH", "pusat", "zz"];
        let selectors = [
            Selector::All,
            Selector::Only(Role::Resident),
            Selector::Only(Role::Officer),
            Selector::Only(Role::Admin),
        ];
        for query in queries {
            for selector in &selectors {
                let indices = visible_indices(&accounts, query, selector);
                assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));

                let once: Vec<Account> = visible(&accounts, query, selector)
                    .into_iter()
                    .cloned()
                    .collect();
                let twice = visible(&once, query, selector);
                assert_eq!(twice.len(), once.len());
                assert!(twice.iter().zip(&once).all(|(a, b)| *a == b));
            }
        }
    }

    #[test]
    fn report_search_covers_address_reporter_and_date() {
        let mut reports = seed::reports();
        reports[1].reporter = "Budi".to_string();
        reports[2].date = "05/Nov/2025".to_string();
        reports[3].address = "Jl. Sisingamangaraja".to_string();

        let hit = |query: &str| -> Vec<u64> {
            visible(&reports, query, &Selector::All)
                .iter()
                .map(|report| report.id)
                .collect()
        };
        assert_eq!(hit("budi"), [2]);
        assert_eq!(hit("nov"), [3]);
        assert_eq!(hit("SISINGA"), [4]);
        assert_eq!(hit("thamrin").len(), 9);
    }

    #[test]
    fn potential_reports_are_every_third() {
        let reports = seed::reports();
        let potential = visible(&reports, "", &Selector::Only(Category::Potential));
        let ids: Vec<u64> = potential.iter().map(|report| report.id).collect();
        assert_eq!(ids, [1, 4, 7, 10]);
    }

    #[test]
    fn selector_parsing_is_exact() {
        assert_eq!(Selector::<Role>::parse("All").unwrap(), Selector::All);
        assert_eq!(
            Selector::<Category>::parse("Berpotensi").unwrap(),
            Selector::Only(Category::Potential)
        );
        assert_eq!(
            Selector::<Role>::parse("all").unwrap_err(),
            EngineError::UnknownSelector("all".to_string())
        );
        assert!(Selector::<Role>::parse("petugas").is_err());
    }

    #[test]
    fn selector_cycles_through_all() {
        let mut selector = Selector::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            selector = selector.next_in(&Role::ALL);
            seen.push(selector);
        }
        assert_eq!(
            seen,
            [
                Selector::Only(Role::Resident),
                Selector::Only(Role::Officer),
                Selector::Only(Role::Admin),
                Selector::All,
            ]
        );
        assert_eq!(Selector::<Role>::All.to_string(), "All");
        assert_eq!(Selector::Only(Category::NotPotential).to_string(), "Tidak Berpotensi");
    }
}
