//! Spreadsheet access: backends that read and overwrite whole worksheets,
//! and a caching connection in front of them.

mod google;
mod sqlite;
mod table;

pub use google::{GoogleSheets, DEFAULT_API_BASE};
pub use sqlite::SqliteWorkbook;
pub use table::Table;

use crate::error::BackendError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A tabular store that can only read or replace a whole worksheet.
pub trait SheetBackend: Send + Sync {
    fn read(&self, worksheet: &str) -> Result<Table, BackendError>;

    /// Overwrites the named worksheet with `data`.
    fn update(&self, worksheet: &str, data: &Table) -> Result<(), BackendError>;
}

impl<T: SheetBackend + ?Sized> SheetBackend for Arc<T> {
    fn read(&self, worksheet: &str) -> Result<Table, BackendError> {
        (**self).read(worksheet)
    }

    fn update(&self, worksheet: &str, data: &Table) -> Result<(), BackendError> {
        (**self).update(worksheet, data)
    }
}

impl<T: SheetBackend + ?Sized> SheetBackend for Box<T> {
    fn read(&self, worksheet: &str) -> Result<Table, BackendError> {
        (**self).read(worksheet)
    }

    fn update(&self, worksheet: &str, data: &Table) -> Result<(), BackendError> {
        (**self).update(worksheet, data)
    }
}

struct CachedTable {
    fetched_at: Instant,
    table: Table,
}

/// Backend plus a per-worksheet freshness cache.
pub struct SheetConnection {
    backend: Box<dyn SheetBackend>,
    cache: Mutex<HashMap<String, CachedTable>>,
}

impl SheetConnection {
    pub fn new(backend: impl SheetBackend + 'static) -> Self {
        SheetConnection {
            backend: Box::new(backend),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Reads a worksheet, serving a cached copy younger than `ttl`.
    /// A zero `ttl` always goes to the backend.
    pub fn read(&self, worksheet: &str, ttl: Duration) -> Result<Table, BackendError> {
        {
            let cache = self.cache.lock().map_err(|_| BackendError::Poisoned)?;
            if let Some(cached) = cache.get(worksheet) {
                if cached.fetched_at.elapsed() < ttl {
                    tracing::debug!(worksheet, "worksheet served from cache");
                    return Ok(cached.table.clone());
                }
            }
        }

        tracing::debug!(worksheet, "reading worksheet from backend");
        let table = self.backend.read(worksheet).map_err(|e| {
            tracing::warn!(worksheet, error = %e, "worksheet read failed");
            e
        })?;

        let mut cache = self.cache.lock().map_err(|_| BackendError::Poisoned)?;
        cache.insert(
            worksheet.to_string(),
            CachedTable {
                fetched_at: Instant::now(),
                table: table.clone(),
            },
        );
        Ok(table)
    }

    /// Overwrites a worksheet and forgets its cached copy.
    pub fn update(&self, worksheet: &str, data: &Table) -> Result<(), BackendError> {
        self.backend.update(worksheet, data).map_err(|e| {
            tracing::warn!(worksheet, error = %e, "worksheet update failed");
            e
        })?;

        let mut cache = self.cache.lock().map_err(|_| BackendError::Poisoned)?;
        cache.remove(worksheet);
        tracing::debug!(worksheet, rows = data.len(), "worksheet overwritten");
        Ok(())
    }

    /// Appends `rows` (laid out in `columns` order) to a worksheet.
    ///
    /// The backend has no append primitive, so this reads the worksheet
    /// (within `ttl`), merges in memory and writes the whole table back.
    /// Two callers doing this at once both read the same state and the later
    /// write wins. Returns the table that was written.
    pub fn append_rows(
        &self,
        worksheet: &str,
        columns: &[&str],
        rows: Vec<Vec<String>>,
        ttl: Duration,
    ) -> Result<Table, AppendError> {
        let mut table = self.read(worksheet, ttl).map_err(AppendError::Read)?;

        if table.is_empty() {
            // An empty or never-written sheet becomes exactly the new rows.
            table = Table::new(columns.iter().copied());
        }
        table.append(columns, rows);

        self.update(worksheet, &table).map_err(AppendError::Write)?;
        Ok(table)
    }
}

/// Which half of an append failed.
#[derive(Debug)]
pub enum AppendError {
    Read(BackendError),
    Write(BackendError),
}
