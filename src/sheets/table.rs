use serde::{Deserialize, Serialize};

/// A worksheet as the backend sees it: a header row and rows of text cells.
///
/// Rows are always as wide as the header. Business code should convert a
/// `Table` into typed records right after reading it.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Builds a table from a raw grid whose first row is the header.
    ///
    /// Fully blank rows are dropped and short rows are padded, so a sheet
    /// with trailing empty lines reads the same as one without. Cells to the
    /// right of the header widen it with unnamed columns, so writing the
    /// table back keeps them.
    pub fn from_grid(grid: Vec<Vec<String>>) -> Self {
        let mut grid = grid.into_iter();
        let mut columns: Vec<String> = match grid.next() {
            Some(header) => header.into_iter().map(|c| c.trim().to_string()).collect(),
            None => return Table::default(),
        };

        let mut rows: Vec<Vec<String>> = grid
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
            .collect();

        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(columns.len());
        columns.resize(width, String::new());
        for row in &mut rows {
            row.resize(width, String::new());
        }

        Table { columns, rows }
    }

    /// Header followed by the rows; the inverse of `from_grid`.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        if self.columns.is_empty() {
            return Vec::new();
        }
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(self.columns.clone());
        grid.extend(self.rows.iter().cloned());
        grid
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of one column, top to bottom. Empty when the column is absent.
    pub fn column<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        let index = self.column_index(name);
        self.rows.iter().filter_map(move |row| {
            index.map(|i| row.get(i).map(String::as_str).unwrap_or(""))
        })
    }

    /// Appends rows laid out in `columns` order, matching cells by column
    /// name. Columns this table does not have yet are added at the end and
    /// existing rows get empty cells for them.
    pub fn append(&mut self, columns: &[&str], rows: Vec<Vec<String>>) {
        for name in columns {
            if self.column_index(name).is_none() {
                self.columns.push(name.to_string());
            }
        }
        let width = self.columns.len();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }

        let positions: Vec<usize> = columns
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();

        for cells in rows {
            let mut row = vec![String::new(); width];
            for (pos, cell) in positions.iter().zip(cells) {
                row[*pos] = cell;
            }
            self.rows.push(row);
        }
    }
}
