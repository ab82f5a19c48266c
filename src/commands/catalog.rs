use crate::models::Catalog;
use crate::portal::PortalExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_catalog(app: AppHandle) -> Result<Catalog, String> {
    app.portal().catalog().map_err(|e| e.to_string())
}
