//! Fingerprint store implementations
//!
//! - `TomlFingerprintStore`: `[parameters.assets] hash = "..."` in a TOML file
//! - `FnFingerprintStore`: adapts a pair of caller closures
//! - `MemoryFingerprintStore`: in-process map, for tests and dry runs

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use toml::{Table, Value};

use crate::domain::ports::{FingerprintStore, StoreError, StoreResult};
use crate::domain::value_objects::Fingerprint;
use crate::infrastructure::fs::atomic_write;

const SECTION: &str = "parameters";
const SUBSECTION: &str = "assets";
const KEY: &str = "hash";

/// Stores the fingerprint inside a TOML parameters file
///
/// Other keys in the file are preserved on write; comments are not.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlFingerprintStore;

impl TomlFingerprintStore {
    pub fn new() -> Self {
        Self
    }

    fn load(path: &Path) -> StoreResult<Table> {
        match fs::read_to_string(path) {
            Ok(contents) => contents
                .parse::<Table>()
                .map_err(|e| StoreError::InvalidFormat(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Table::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl FingerprintStore for TomlFingerprintStore {
    fn read_hash(&self, config_file: &Path) -> StoreResult<Option<Fingerprint>> {
        let table = Self::load(config_file)?;
        let hash = table
            .get(SECTION)
            .and_then(Value::as_table)
            .and_then(|t| t.get(SUBSECTION))
            .and_then(Value::as_table)
            .and_then(|t| t.get(KEY));

        match hash {
            None => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(Fingerprint::new(s))),
            Some(other) => Err(StoreError::InvalidFormat(format!(
                "{}.{}.{} must be a string, found {}",
                SECTION,
                SUBSECTION,
                KEY,
                other.type_str()
            ))),
        }
    }

    fn write_hash(&self, config_file: &Path, fingerprint: &Fingerprint) -> StoreResult<()> {
        let mut table = Self::load(config_file)?;

        let parameters = subtable(&mut table, SECTION)?;
        let assets = subtable(parameters, SUBSECTION)?;
        assets.insert(KEY.to_string(), Value::String(fingerprint.to_string()));

        let contents =
            toml::to_string(&table).map_err(|e| StoreError::InvalidFormat(e.to_string()))?;
        atomic_write(config_file, contents.as_bytes())
            .map_err(|e| StoreError::Other(e.to_string()))
    }
}

fn subtable<'a>(table: &'a mut Table, key: &str) -> StoreResult<&'a mut Table> {
    let entry = table
        .entry(key.to_string())
        .or_insert_with(|| Value::Table(Table::new()));
    entry
        .as_table_mut()
        .ok_or_else(|| StoreError::InvalidFormat(format!("'{}' must be a table", key)))
}

type ReadFn = dyn Fn(&Path) -> StoreResult<Option<Fingerprint>> + Send + Sync;
type WriteFn = dyn Fn(&Path, &Fingerprint) -> StoreResult<()> + Send + Sync;

/// Store backed by caller-supplied read and write functions
pub struct FnFingerprintStore {
    read: Box<ReadFn>,
    write: Box<WriteFn>,
}

impl FnFingerprintStore {
    pub fn new<R, W>(read: R, write: W) -> Self
    where
        R: Fn(&Path) -> StoreResult<Option<Fingerprint>> + Send + Sync + 'static,
        W: Fn(&Path, &Fingerprint) -> StoreResult<()> + Send + Sync + 'static,
    {
        Self {
            read: Box::new(read),
            write: Box::new(write),
        }
    }
}

impl FingerprintStore for FnFingerprintStore {
    fn read_hash(&self, config_file: &Path) -> StoreResult<Option<Fingerprint>> {
        (self.read)(config_file)
    }

    fn write_hash(&self, config_file: &Path, fingerprint: &Fingerprint) -> StoreResult<()> {
        (self.write)(config_file, fingerprint)
    }
}

/// In-memory store keyed by config path
#[derive(Debug, Default)]
pub struct MemoryFingerprintStore {
    hashes: Mutex<HashMap<PathBuf, Fingerprint>>,
    writes: Mutex<usize>,
}

impl MemoryFingerprintStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `write_hash` calls
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or(0)
    }

    pub fn get(&self, config_file: &Path) -> Option<Fingerprint> {
        self.hashes
            .lock()
            .ok()
            .and_then(|h| h.get(config_file).cloned())
    }
}

impl FingerprintStore for MemoryFingerprintStore {
    fn read_hash(&self, config_file: &Path) -> StoreResult<Option<Fingerprint>> {
        Ok(self.get(config_file))
    }

    fn write_hash(&self, config_file: &Path, fingerprint: &Fingerprint) -> StoreResult<()> {
        let mut hashes = self
            .hashes
            .lock()
            .map_err(|_| StoreError::Other("fingerprint store poisoned".to_string()))?;
        hashes.insert(config_file.to_path_buf(), fingerprint.clone());
        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
        Ok(())
    }
}
