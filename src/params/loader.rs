//! JSON-backed persistence for calculator parameters
//!
//! Loading never fails: a missing or unreadable record falls back to
//! `CalculatorParams::default()`, and a partial record is merged over it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::CalculatorParams;
use crate::error::Result;

/// Storage key; also the default file stem
pub const STORAGE_KEY: &str = "investmentCalculatorParams";

/// Persisted parameter record at a fixed path
#[derive(Debug, Clone)]
pub struct ParamsStore {
    path: PathBuf,
}

impl ParamsStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store named after `STORAGE_KEY` inside `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", STORAGE_KEY)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved record, or defaults if there is none or it cannot be parsed
    pub fn load(&self) -> CalculatorParams {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No saved params at {}, using defaults", self.path.display());
                return CalculatorParams::default();
            }
            Err(e) => {
                warn!("Could not read saved params at {}: {}; using defaults", self.path.display(), e);
                return CalculatorParams::default();
            }
        };

        match serde_json::from_str::<CalculatorParams>(&contents) {
            Ok(params) => params,
            Err(e) => {
                warn!("Could not parse saved values ({}), using defaults", e);
                CalculatorParams::default()
            }
        }
    }

    pub fn save(&self, params: &CalculatorParams) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(params)?;
        fs::write(&self.path, json)?;
        debug!("Saved params to {}", self.path.display());
        Ok(())
    }

    /// Remove the saved record and return the defaults
    pub fn reset(&self) -> Result<CalculatorParams> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        Ok(CalculatorParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_store() -> ParamsStore {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "capital_projection_loader_{}_{}",
            std::process::id(),
            n
        ));
        ParamsStore::in_dir(dir)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let store = scratch_store();
        assert_eq!(store.load(), CalculatorParams::default());
    }

    #[test]
    fn test_save_then_load() {
        let store = scratch_store();
        let params = CalculatorParams::new(2_500.0, 150.0, 5.5, 50_000.0, Some(120));
        store.save(&params).unwrap();
        assert_eq!(store.load(), params);
        assert!(store.path().ends_with("investmentCalculatorParams.json"));
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        let store = scratch_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), CalculatorParams::default());
    }

    #[test]
    fn test_reset_removes_record() {
        let store = scratch_store();
        store.save(&CalculatorParams::new(1.0, 1.0, 1.0, 2.0, None)).unwrap();
        let params = store.reset().unwrap();
        assert_eq!(params, CalculatorParams::default());
        assert!(!store.path().exists());
        // Resetting twice is fine
        assert!(store.reset().is_ok());
    }
}
