//! Draft edits. The page owns the draft; every command takes the current
//! value and returns the edited one.

use crate::draft::DraftOrder;

#[tauri::command]
pub fn new_draft() -> DraftOrder {
    DraftOrder::new()
}

#[tauri::command]
pub fn add_section(mut draft: DraftOrder) -> DraftOrder {
    draft.add_section();
    draft
}

#[tauri::command]
pub fn reset_draft(mut draft: DraftOrder) -> DraftOrder {
    draft.reset();
    draft
}

#[tauri::command]
pub fn select_category(
    mut draft: DraftOrder,
    section: usize,
    category: Option<String>,
) -> Result<DraftOrder, String> {
    draft
        .select_category(section, category)
        .map_err(|e| e.to_string())?;
    Ok(draft)
}

#[tauri::command]
pub fn select_items(
    mut draft: DraftOrder,
    section: usize,
    items: Vec<String>,
) -> Result<DraftOrder, String> {
    draft.select_items(section, items).map_err(|e| e.to_string())?;
    Ok(draft)
}

#[tauri::command]
pub fn set_quantity(
    mut draft: DraftOrder,
    section: usize,
    item: String,
    qty: u32,
) -> Result<DraftOrder, String> {
    draft
        .set_quantity(section, &item, qty)
        .map_err(|e| e.to_string())?;
    Ok(draft)
}
