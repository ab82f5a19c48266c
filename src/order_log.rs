use crate::error::OrderError;
use crate::models::{OrderRow, COL_ORDER_ID, ORDER_COLUMNS};
use crate::sheets::{AppendError, SheetConnection};
use std::time::Duration;

/// Read/append access to the `Orders` worksheet.
pub struct OrderLog<'a> {
    conn: &'a SheetConnection,
    worksheet: &'a str,
    ttl: Duration,
}

impl<'a> OrderLog<'a> {
    pub fn new(conn: &'a SheetConnection, worksheet: &'a str, ttl: Duration) -> Self {
        OrderLog {
            conn,
            worksheet,
            ttl,
        }
    }

    /// Order IDs of every logged row, one entry per row.
    pub fn existing_order_ids(&self) -> Result<Vec<String>, OrderError> {
        let table = self
            .conn
            .read(self.worksheet, self.ttl)
            .map_err(OrderError::BackendUnavailable)?;
        Ok(table.column(COL_ORDER_ID).map(str::to_string).collect())
    }

    /// Appends the rows and rewrites the worksheet in one update.
    pub fn append(&self, rows: &[OrderRow]) -> Result<(), OrderError> {
        let cells = rows.iter().map(OrderRow::to_cells).collect();
        self.conn
            .append_rows(self.worksheet, &ORDER_COLUMNS, cells, self.ttl)
            .map_err(|e| match e {
                AppendError::Read(e) => OrderError::BackendUnavailable(e),
                AppendError::Write(e) => OrderError::Backend(e),
            })?;
        Ok(())
    }
}
