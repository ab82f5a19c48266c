use crate::draft::DraftOrder;
use crate::portal::PortalExt;
use serde::Serialize;
use tauri::AppHandle;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub order_id: String,
    pub message: String,
    /// Fresh draft to render after a successful submit
    pub draft: DraftOrder,
}

/// On error the page keeps its own draft, so the dealer can press submit
/// again without re-entering anything.
#[tauri::command]
pub fn submit_order(
    app: AppHandle,
    dealer_name: String,
    shop_name: String,
    mut draft: DraftOrder,
) -> Result<SubmitResponse, String> {
    let submitted = app
        .portal()
        .submit_draft(&dealer_name, &shop_name, &mut draft)
        .map_err(|e| {
            tracing::warn!(error = %e, "order submission rejected");
            e.to_string()
        })?;

    Ok(SubmitResponse {
        message: format!("Order {} submitted!", submitted.order_id),
        order_id: submitted.order_id,
        draft,
    })
}
