use serde::{Deserialize, Serialize};

pub const COL_ITEM_NAME: &str = "Item Name";
pub const COL_CATEGORY: &str = "Category";
pub const COL_SKU: &str = "SKU";
pub const COL_ORDER_ID: &str = "Order ID";
pub const COL_TIMESTAMP: &str = "Timestamp";
pub const COL_DEALER_NAME: &str = "Dealer Name";
pub const COL_SHOP_NAME: &str = "Shop Name";
pub const COL_QTY: &str = "Qty";

/// Column layout of the `Orders` worksheet.
pub const ORDER_COLUMNS: [&str; 8] = [
    COL_ORDER_ID,
    COL_TIMESTAMP,
    COL_DEALER_NAME,
    COL_SHOP_NAME,
    COL_ITEM_NAME,
    COL_CATEGORY,
    COL_SKU,
    COL_QTY,
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub item_name: String,
    pub category: String,
    pub sku: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item_name: String,
    pub category: String,
    pub sku: String,
    pub qty: u32,
}

/// One persisted line of the order log.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub order_id: String,
    pub timestamp: String,
    pub dealer_name: String,
    pub shop_name: String,
    pub item_name: String,
    pub category: String,
    pub sku: String,
    pub qty: u32,
}

impl OrderRow {
    /// Cells in `ORDER_COLUMNS` order.
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.timestamp.clone(),
            self.dealer_name.clone(),
            self.shop_name.clone(),
            self.item_name.clone(),
            self.category.clone(),
            self.sku.clone(),
            self.qty.to_string(),
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SubmittedOrder {
    pub order_id: String,
    pub timestamp: String,
    pub rows: Vec<OrderRow>,
}

/// What the form needs to render its pickers.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Catalog {
    pub categories: Vec<String>,
    pub items: Vec<InventoryItem>,
}
