use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse dataset file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDate,
    pub price: f64,
    pub sale_price: f64,
}

const SAMPLE_DATASET: &str = include_str!("../data/sample.json");

/// The dataset compiled into the binary, used when no `--file` is given.
pub fn sample_records() -> &'static [Record] {
    static SAMPLE: LazyLock<Vec<Record>> = LazyLock::new(|| {
        serde_json::from_str(SAMPLE_DATASET).expect("bundled sample dataset is valid JSON")
    });
    &SAMPLE
}

pub fn load_records(path: Option<&Path>) -> Result<Vec<Record>, DatasetError> {
    match path {
        Some(path) => load_records_from_path(path),
        None => Ok(sample_records().to_vec()),
    }
}

pub fn load_records_from_path(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path_display.clone(),
        source,
    })?;

    serde_json::from_str::<Vec<Record>>(&raw).map_err(|source| DatasetError::Parse {
        path: path_display,
        source,
    })
}
