pub mod config;
pub mod draft;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod models;
pub mod order_id;
pub mod order_log;
pub mod portal;
pub mod sheets;
pub mod submission;

#[cfg(feature = "desktop")]
mod commands;


pub use draft::DraftOrder;
pub use error::{BackendError, DraftError, OrderError};
pub use portal::{Portal, PortalSettings};

#[cfg(feature = "desktop")]
use tauri::Manager;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::{catalog, draft, orders};

    tauri::Builder::default()
        .setup(|app| {
            let config_dir = app.path().app_config_dir()?;
            let data_dir = app.path().app_data_dir()?;

            let config = config::load_config(&config_dir)?;
            logging::initialize(&config.logging, &data_dir.join("logs"))?;

            let portal = Portal::from_config(&config, &data_dir)?;
            app.manage(portal);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Catalog
            catalog::get_catalog,
            // Draft
            draft::new_draft,
            draft::add_section,
            draft::reset_draft,
            draft::select_category,
            draft::select_items,
            draft::set_quantity,
            // Orders
            orders::submit_order,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
