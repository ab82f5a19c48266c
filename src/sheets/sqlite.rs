use super::{SheetBackend, Table};
use crate::error::BackendError;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

/// A local workbook kept in SQLite: every worksheet is a header plus ordered
/// rows, each stored as a JSON array of cells.
pub struct SqliteWorkbook {
    pub conn: Mutex<Connection>,
}

impl SqliteWorkbook {
    pub fn open(path: &Path) -> Result<Self, BackendError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let conn = Connection::open(path)?;
        let workbook = SqliteWorkbook {
            conn: Mutex::new(conn),
        };
        workbook.initialize()?;
        Ok(workbook)
    }

    pub fn open_in_memory() -> Result<Self, BackendError> {
        let workbook = SqliteWorkbook {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        workbook.initialize()?;
        Ok(workbook)
    }

    fn initialize(&self) -> Result<(), BackendError> {
        let conn = self.conn.lock().map_err(|_| BackendError::Poisoned)?;

        conn.execute_batch(
            "
            -- One row per worksheet, header kept as a JSON array
            CREATE TABLE IF NOT EXISTS worksheets (
                name TEXT PRIMARY KEY,
                header TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            -- Data rows in sheet order
            CREATE TABLE IF NOT EXISTS worksheet_rows (
                worksheet TEXT NOT NULL,
                row_index INTEGER NOT NULL,
                cells TEXT NOT NULL,
                PRIMARY KEY (worksheet, row_index),
                FOREIGN KEY (worksheet) REFERENCES worksheets(name)
            );
            ",
        )?;

        Ok(())
    }
}

impl SheetBackend for SqliteWorkbook {
    fn read(&self, worksheet: &str) -> Result<Table, BackendError> {
        let conn = self.conn.lock().map_err(|_| BackendError::Poisoned)?;

        let header: Option<String> = conn
            .query_row(
                "SELECT header FROM worksheets WHERE name = ?1",
                [worksheet],
                |row| row.get(0),
            )
            .optional()?;

        // A worksheet nobody wrote yet is just a blank sheet
        let header = match header {
            Some(header) => header,
            None => return Ok(Table::default()),
        };

        let mut grid = vec![serde_json::from_str::<Vec<String>>(&header)?];

        let mut stmt = conn.prepare(
            "SELECT cells FROM worksheet_rows WHERE worksheet = ?1 ORDER BY row_index",
        )?;
        let rows = stmt
            .query_map([worksheet], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        for cells in rows {
            grid.push(serde_json::from_str::<Vec<String>>(&cells)?);
        }

        Ok(Table::from_grid(grid))
    }

    fn update(&self, worksheet: &str, data: &Table) -> Result<(), BackendError> {
        let mut conn = self.conn.lock().map_err(|_| BackendError::Poisoned)?;
        let tx = conn.transaction()?;

        tx.execute(
            "DELETE FROM worksheet_rows WHERE worksheet = ?1",
            [worksheet],
        )?;
        tx.execute(
            "INSERT INTO worksheets (name, header) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE
             SET header = excluded.header, updated_at = CURRENT_TIMESTAMP",
            params![worksheet, serde_json::to_string(&data.columns)?],
        )?;

        {
            let mut insert = tx.prepare(
                "INSERT INTO worksheet_rows (worksheet, row_index, cells) VALUES (?1, ?2, ?3)",
            )?;
            for (index, row) in data.rows.iter().enumerate() {
                insert.execute(params![worksheet, index as i64, serde_json::to_string(row)?])?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}
