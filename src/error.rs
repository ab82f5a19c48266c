use thiserror::Error;

/// Failure talking to the spreadsheet backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("workbook error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-2xx answer from the Sheets API
    #[error("spreadsheet API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid API address: {0}")]
    InvalidUrl(String),

    #[error("worksheet '{worksheet}' is malformed: {reason}")]
    MalformedWorksheet { worksheet: String, reason: String },

    #[error("backend lock poisoned")]
    Poisoned,
}

/// Errors surfaced by the order form.
///
/// Validation variants carry the message shown inline next to the form;
/// backend variants are shown as a generic failure and leave the draft as is.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Dealer and Shop name required")]
    MissingDealerInfo,

    #[error("Add at least one item with quantity")]
    EmptyOrder,

    #[error("'{item}' is no longer listed under '{category}'")]
    UnknownItem { category: String, item: String },

    #[error("Could not reach the order sheet, please try again ({0})")]
    BackendUnavailable(#[source] BackendError),

    #[error("Could not save the order, please try again ({0})")]
    Backend(#[source] BackendError),
}

/// Invalid edit of a draft order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("no item section #{0}")]
    NoSuchSection(usize),

    #[error("'{item}' is not selected in section #{section}")]
    ItemNotSelected { section: usize, item: String },
}
