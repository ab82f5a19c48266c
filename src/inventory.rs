use crate::error::{BackendError, OrderError};
use crate::models::{InventoryItem, COL_CATEGORY, COL_ITEM_NAME, COL_SKU};
use crate::sheets::{SheetConnection, Table};
use std::collections::BTreeSet;
use std::time::Duration;

/// The item catalog as loaded from the `Inventory` worksheet.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Inventory { items }
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Item names of one category in sheet order.
    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.items
            .iter()
            .filter(move |item| item.category == category)
            .map(|item| item.item_name.as_str())
    }

    /// First item with this name in this category.
    pub fn find(&self, category: &str, item_name: &str) -> Option<&InventoryItem> {
        self.items
            .iter()
            .find(|item| item.category == category && item.item_name == item_name)
    }

    /// Converts the raw worksheet, requiring the three catalog columns.
    pub fn from_table(worksheet: &str, table: &Table) -> Result<Self, BackendError> {
        let column = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| BackendError::MalformedWorksheet {
                    worksheet: worksheet.to_string(),
                    reason: format!("missing column '{}'", name),
                })
        };

        // An untouched sheet has no header at all; that is an empty catalog
        if table.columns.is_empty() {
            return Ok(Inventory::default());
        }

        let name_col = column(COL_ITEM_NAME)?;
        let category_col = column(COL_CATEGORY)?;
        let sku_col = column(COL_SKU)?;

        let items = table
            .rows
            .iter()
            .map(|row| InventoryItem {
                item_name: cell(row, name_col),
                category: cell(row, category_col),
                sku: cell(row, sku_col),
            })
            .collect();

        Ok(Inventory { items })
    }
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

/// Read-only access to the catalog worksheet.
pub struct InventoryStore<'a> {
    conn: &'a SheetConnection,
    worksheet: &'a str,
    ttl: Duration,
}

impl<'a> InventoryStore<'a> {
    pub fn new(conn: &'a SheetConnection, worksheet: &'a str, ttl: Duration) -> Self {
        InventoryStore {
            conn,
            worksheet,
            ttl,
        }
    }

    pub fn load_inventory(&self) -> Result<Inventory, OrderError> {
        let table = self
            .conn
            .read(self.worksheet, self.ttl)
            .map_err(OrderError::BackendUnavailable)?;
        Inventory::from_table(self.worksheet, &table).map_err(OrderError::BackendUnavailable)
    }
}
