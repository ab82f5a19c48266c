use crate::error::OrderError;
use crate::models::{OrderLine, OrderRow, SubmittedOrder};
use crate::order_id::generate_order_id;
use crate::order_log::OrderLog;
use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Checked before anything else, so a missing name never costs a backend call.
pub fn validate_dealer(dealer_name: &str, shop_name: &str) -> Result<(), OrderError> {
    if dealer_name.trim().is_empty() || shop_name.trim().is_empty() {
        return Err(OrderError::MissingDealerInfo);
    }
    Ok(())
}

/// Writes one order to the log and returns what was written.
///
/// Every line becomes one row; all rows share the order ID and `now` as
/// their timestamp. Nothing is written unless validation passes, and a
/// failed write is not retried.
pub fn submit(
    dealer_name: &str,
    shop_name: &str,
    order_lines: &[OrderLine],
    order_log: &OrderLog<'_>,
    now: NaiveDateTime,
) -> Result<SubmittedOrder, OrderError> {
    validate_dealer(dealer_name, shop_name)?;
    if order_lines.is_empty() {
        return Err(OrderError::EmptyOrder);
    }

    let existing = order_log.existing_order_ids()?;
    let order_id = generate_order_id(&existing, now.date());
    let timestamp = now.format(TIMESTAMP_FORMAT).to_string();

    let rows: Vec<OrderRow> = order_lines
        .iter()
        .map(|line| OrderRow {
            order_id: order_id.clone(),
            timestamp: timestamp.clone(),
            dealer_name: dealer_name.trim().to_string(),
            shop_name: shop_name.trim().to_string(),
            item_name: line.item_name.clone(),
            category: line.category.clone(),
            sku: line.sku.clone(),
            qty: line.qty,
        })
        .collect();

    order_log.append(&rows)?;

    tracing::info!(
        order_id = %order_id,
        dealer = %dealer_name.trim(),
        shop = %shop_name.trim(),
        lines = rows.len(),
        "order submitted"
    );

    Ok(SubmittedOrder {
        order_id,
        timestamp,
        rows,
    })
}
