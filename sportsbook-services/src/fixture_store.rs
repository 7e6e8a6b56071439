//! Fixture Store
//!
//! Holds one sport's pre-match odds and result snapshots. Both documents are
//! read once at startup and never written again, so a store can be shared
//! across request handlers behind an `Arc` without locking.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::schema::MarketSchema;

/// Immutable odds and results for one sport
pub struct FixtureStore<S: MarketSchema> {
    prematch: S::Prematch,
    results: S::Results,
    loaded_at: DateTime<Utc>,
}

impl<S: MarketSchema> FixtureStore<S> {
    /// Build a store from already parsed documents
    pub fn new(prematch: S::Prematch, results: S::Results) -> Self {
        Self {
            prematch,
            results,
            loaded_at: Utc::now(),
        }
    }

    /// Load `{sport}_prematch.json` and `{sport}_result.json` from `dir`
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, FixtureError> {
        let prematch_path = S::SPORT.prematch_path(dir.as_ref());
        let result_path = S::SPORT.result_path(dir.as_ref());

        let prematch: S::Prematch = read_json(&prematch_path)?;
        let results: S::Results = read_json(&result_path)?;

        let store = Self::new(prematch, results);
        info!(
            "Loaded {} fixtures: {} matches, {} results",
            S::SPORT.key(),
            store.match_count(),
            store.result_count()
        );

        Ok(store)
    }

    /// Build a store from JSON text, for embedded or test fixtures
    pub fn from_json(prematch: &str, results: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            serde_json::from_str(prematch)?,
            serde_json::from_str(results)?,
        ))
    }

    pub fn prematch(&self) -> &S::Prematch {
        &self.prematch
    }

    pub fn results(&self) -> &S::Results {
        &self.results
    }

    pub fn match_count(&self) -> usize {
        S::match_count(&self.prematch)
    }

    pub fn result_count(&self) -> usize {
        S::result_records(&self.results).len()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let raw = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| FixtureError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CricketSchema, VolleyballSchema};

    const CRICKET_PREMATCH: &str = r#"{"success": 1, "results": [{"id": "1", "markets": [
        {"name": "Match Winner", "header": "1", "odds": "1.72", "handicap": ""}
    ]}]}"#;
    const CRICKET_RESULT: &str = r#"{"success": 1, "results": [{"id": "1", "ss": "150-140"}]}"#;

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cricket_prematch.json"), CRICKET_PREMATCH).unwrap();
        fs::write(dir.path().join("cricket_result.json"), CRICKET_RESULT).unwrap();

        let store = FixtureStore::<CricketSchema>::load(dir.path()).unwrap();
        assert_eq!(store.match_count(), 1);
        assert_eq!(store.result_count(), 1);
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cricket_prematch.json"), CRICKET_PREMATCH).unwrap();

        let err = FixtureStore::<CricketSchema>::load(dir.path())
            .err()
            .expect("missing result file must fail");
        match err {
            FixtureError::Io { path, .. } => assert!(path.ends_with("cricket_result.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("volleyball_prematch.json"), "{\"results\": [").unwrap();
        fs::write(dir.path().join("volleyball_result.json"), "{}").unwrap();

        let err = FixtureStore::<VolleyballSchema>::load(dir.path())
            .err()
            .expect("truncated document must fail");
        assert!(matches!(err, FixtureError::Json { .. }));
        assert!(err.to_string().contains("volleyball_prematch.json"));
    }

    #[test]
    fn test_empty_documents_load() {
        let store = FixtureStore::<VolleyballSchema>::from_json("{}", r#"{"results": []}"#).unwrap();
        assert_eq!(store.match_count(), 0);
        assert_eq!(store.result_count(), 0);
    }
}
