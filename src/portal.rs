use crate::config::{resolve_path, BackendConfig, Config};
use crate::draft::DraftOrder;
use crate::error::OrderError;
use crate::inventory::InventoryStore;
use crate::models::{Catalog, SubmittedOrder};
use crate::order_log::OrderLog;
use crate::sheets::{GoogleSheets, SheetBackend, SheetConnection, SqliteWorkbook};
use crate::submission::{submit, validate_dealer};
use chrono::{Local, NaiveDateTime};
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "desktop")]
use tauri::{AppHandle, Manager};

/// Worksheet names and freshness windows.
#[derive(Debug, Clone)]
pub struct PortalSettings {
    pub inventory_sheet: String,
    pub orders_sheet: String,
    pub inventory_ttl: Duration,
    pub orders_ttl: Duration,
}

impl Default for PortalSettings {
    fn default() -> Self {
        PortalSettings {
            inventory_sheet: "Inventory".to_string(),
            orders_sheet: "Orders".to_string(),
            inventory_ttl: Duration::from_secs(600),
            orders_ttl: Duration::from_secs(60),
        }
    }
}

impl From<&Config> for PortalSettings {
    fn from(config: &Config) -> Self {
        PortalSettings {
            inventory_sheet: config.worksheets.inventory.clone(),
            orders_sheet: config.worksheets.orders.clone(),
            inventory_ttl: config.cache.inventory_ttl(),
            orders_ttl: config.cache.orders_ttl(),
        }
    }
}

/// The order form's backing services: one spreadsheet connection and the
/// clients built on it.
pub struct Portal {
    conn: SheetConnection,
    settings: PortalSettings,
}

impl Portal {
    pub fn new(backend: impl SheetBackend + 'static, settings: PortalSettings) -> Self {
        Portal {
            conn: SheetConnection::new(backend),
            settings,
        }
    }

    /// Opens the backend named in the configuration. Relative workbook paths
    /// are resolved against `data_dir`.
    pub fn from_config(config: &Config, data_dir: &Path) -> anyhow::Result<Self> {
        let settings = PortalSettings::from(config);
        let portal = match &config.backend {
            BackendConfig::Local { path } => {
                let path = resolve_path(data_dir, path);
                tracing::info!("Opening local workbook at {}", path.display());
                Portal::new(SqliteWorkbook::open(&path)?, settings)
            }
            BackendConfig::GoogleSheets {
                spreadsheet_id,
                access_token,
                api_base,
            } => {
                tracing::info!(spreadsheet_id = %spreadsheet_id, "Using Google Sheets backend");
                Portal::new(
                    GoogleSheets::new(api_base, spreadsheet_id, access_token)?,
                    settings,
                )
            }
        };
        Ok(portal)
    }

    pub fn settings(&self) -> &PortalSettings {
        &self.settings
    }

    pub fn connection(&self) -> &SheetConnection {
        &self.conn
    }

    pub fn inventory(&self) -> InventoryStore<'_> {
        InventoryStore::new(
            &self.conn,
            &self.settings.inventory_sheet,
            self.settings.inventory_ttl,
        )
    }

    pub fn order_log(&self) -> OrderLog<'_> {
        OrderLog::new(&self.conn, &self.settings.orders_sheet, self.settings.orders_ttl)
    }

    /// Categories and items for the pickers.
    pub fn catalog(&self) -> Result<Catalog, OrderError> {
        let inventory = self.inventory().load_inventory()?;
        Ok(Catalog {
            categories: inventory.categories(),
            items: inventory.items,
        })
    }

    /// Submits the draft stamped with the current local time.
    pub fn submit_draft(
        &self,
        dealer_name: &str,
        shop_name: &str,
        draft: &mut DraftOrder,
    ) -> Result<SubmittedOrder, OrderError> {
        self.submit_draft_at(dealer_name, shop_name, draft, Local::now().naive_local())
    }

    /// Validates, writes the order and resets the draft. On any error the
    /// draft is left exactly as it was.
    pub fn submit_draft_at(
        &self,
        dealer_name: &str,
        shop_name: &str,
        draft: &mut DraftOrder,
        now: NaiveDateTime,
    ) -> Result<SubmittedOrder, OrderError> {
        validate_dealer(dealer_name, shop_name)?;

        // Nothing to look up: no need to touch the catalog
        let lines = if draft.has_order_lines() {
            let inventory = self.inventory().load_inventory()?;
            draft.collect_order_lines(&inventory)?
        } else {
            Vec::new()
        };

        let submitted = submit(dealer_name, shop_name, &lines, &self.order_log(), now)?;
        draft.reset();
        Ok(submitted)
    }
}

#[cfg(feature = "desktop")]
pub trait PortalExt {
    fn portal(&self) -> &Portal;
}

#[cfg(feature = "desktop")]
impl PortalExt for AppHandle {
    fn portal(&self) -> &Portal {
        self.state::<Portal>().inner()
    }
}
