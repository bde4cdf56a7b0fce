//! The module contains `Report` and its `Category`.

use serde::{Deserialize, Serialize};

use crate::{EngineError, Record};

/// Outcome of a field inspection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Larvae breeding potential found.
    #[serde(rename = "Berpotensi")]
    Potential,
    #[default]
    #[serde(rename = "Tidak Berpotensi")]
    NotPotential,
}

impl Category {
    /// Every category, in selector order.
    pub const ALL: [Category; 2] = [Category::Potential, Category::NotPotential];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Potential => "Berpotensi",
            Category::NotPotential => "Tidak Berpotensi",
        }
    }

    /// The other category. With two values, next and previous coincide.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Category::Potential => Category::NotPotential,
            Category::NotPotential => Category::Potential,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == value)
            .ok_or_else(|| EngineError::UnknownCategory(value.to_string()))
    }
}

/// A field report.
///
/// Field names follow the dataset files (`alamat`, `kategori`, `pelapor`)
/// when (de)serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    /// Display date. Free-form, never parsed.
    pub date: String,
    pub rt: String,
    pub rw: String,
    #[serde(rename = "alamat")]
    pub address: String,
    #[serde(rename = "kategori")]
    pub category: Category,
    #[serde(rename = "pelapor")]
    pub reporter: String,
    /// Picture URL attached by the reporter.
    #[serde(default)]
    pub image: Option<String>,
}

impl Report {
    /// The image reference, treating an empty string as no image.
    pub fn image_ref(&self) -> Option<&str> {
        self.image.as_deref().filter(|image| !image.is_empty())
    }
}

impl Record for Report {
    type Id = u64;
    type Kind = Category;

    const INSERTS_NEW: bool = false;

    fn id(&self) -> u64 {
        self.id
    }

    fn kind(&self) -> Category {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.address.as_str(),
            self.reporter.as_str(),
            self.date.as_str(),
        ]
    }

    /// Reports are committed as edited; an emptied address is kept.
    fn prepare_commit(self) -> Option<Self> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report {
            id: 1,
            date: "01/Okt/2025".to_string(),
            rt: "01".to_string(),
            rw: "01".to_string(),
            address: "Jl. A".to_string(),
            category: Category::Potential,
            reporter: "Sindy".to_string(),
            image: None,
        }
    }

    #[test]
    fn category_labels_parse_exactly() {
        assert_eq!(
            Category::try_from("Tidak Berpotensi").unwrap(),
            Category::NotPotential
        );
        assert!(Category::try_from("berpotensi").is_err());
        assert!(Category::try_from("All").is_err());
    }

    #[test]
    fn empty_image_is_no_image() {
        let mut report = report();
        assert_eq!(report.image_ref(), None);
        report.image = Some(String::new());
        assert_eq!(report.image_ref(), None);
        report.image = Some("https://img.example/1.jpg".to_string());
        assert_eq!(report.image_ref(), Some("https://img.example/1.jpg"));
    }

    #[test]
    fn commit_keeps_emptied_address() {
        let mut report = report();
        report.address.clear();
        assert_eq!(report.clone().prepare_commit(), Some(report));
    }

    #[test]
    fn deserializes_dataset_keys() {
        let raw = r#"{
            "id": 4,
            "date": "01/Okt/2025",
            "rt": "04",
            "rw": "04",
            "alamat": "Jl. MH. Thamrin No. 50, Sibolga",
            "kategori": "Berpotensi",
            "pelapor": "Sindy",
            "image": ""
        }"#;
        let report: Report = serde_json::from_str(raw).unwrap();
        assert_eq!(report.category, Category::Potential);
        assert_eq!(report.address, "Jl. MH. Thamrin No. 50, Sibolga");
        assert_eq!(report.image_ref(), None);
    }
}
