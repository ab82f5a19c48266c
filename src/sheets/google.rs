use super::{SheetBackend, Table};
use crate::error::BackendError;
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";

/// `spreadsheets.values` response body
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRangeBody<'a> {
    range: &'a str,
    major_dimension: &'static str,
    values: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Google Sheets worksheet access over the v4 REST API.
#[derive(Debug, Clone)]
pub struct GoogleSheets {
    client: Client,
    api_base: String,
    spreadsheet_id: String,
    access_token: String,
}

impl GoogleSheets {
    pub fn new(
        api_base: &str,
        spreadsheet_id: &str,
        access_token: &str,
    ) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            access_token: access_token.to_string(),
        })
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}` with the range escaped.
    pub(crate) fn values_url(&self, range: &str) -> Result<Url, BackendError> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| BackendError::InvalidUrl(format!("{}: {}", self.api_base, e)))?;
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl(self.api_base.clone()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values", range]);
        Ok(url)
    }

    fn check(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorResponse>(&text)
            .map(|e| e.error.message)
            .unwrap_or(text);
        Err(BackendError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// The worksheet's used range as text cells.
    fn values(&self, worksheet: &str) -> Result<Vec<Vec<String>>, BackendError> {
        let mut url = self.values_url(&quoted(worksheet))?;
        url.query_pairs_mut()
            .append_pair("majorDimension", "ROWS")
            .append_pair("valueRenderOption", "FORMATTED_VALUE");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()?;
        let body: ValueRange = Self::check(response)?.json()?;
        Ok(grid_from_values(body.values))
    }
}

/// A1-notation sheet name, quoted so spaces and punctuation survive.
fn quoted(worksheet: &str) -> String {
    format!("'{}'", worksheet.replace('\'', "''"))
}

/// Renders a JSON cell the way it shows in the sheet.
pub(crate) fn cell_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub(crate) fn grid_from_values(values: Vec<Vec<serde_json::Value>>) -> Vec<Vec<String>> {
    values
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect())
        .collect()
}

/// Pads `grid` with empty cells out to `height` rows and `width` columns.
///
/// Writing empty strings over the old extent clears it as part of the same
/// request that writes the new contents.
pub(crate) fn padded(mut grid: Vec<Vec<String>>, height: usize, width: usize) -> Vec<Vec<String>> {
    let width = grid.iter().map(Vec::len).max().unwrap_or(0).max(width);
    if grid.len() < height {
        grid.resize(height, Vec::new());
    }
    for row in &mut grid {
        row.resize(width, String::new());
    }
    grid
}

impl SheetBackend for GoogleSheets {
    fn read(&self, worksheet: &str) -> Result<Table, BackendError> {
        Ok(Table::from_grid(self.values(worksheet)?))
    }

    /// One `PUT` covering both the new contents and the old extent, so the
    /// worksheet is either fully replaced or left as it was.
    fn update(&self, worksheet: &str, data: &Table) -> Result<(), BackendError> {
        let current = self.values(worksheet)?;
        let height = current.len();
        let width = current.iter().map(Vec::len).max().unwrap_or(0);

        let values = padded(data.to_grid(), height, width);
        if values.is_empty() {
            return Ok(());
        }

        let range = format!("{}!A1", quoted(worksheet));
        let mut url = self.values_url(&range)?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED");

        let body = ValueRangeBody {
            range: &range,
            major_dimension: "ROWS",
            values,
        };
        let response = self
            .client
            .put(url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()?;
        Self::check(response)?;

        tracing::info!(worksheet, rows = data.len(), "worksheet written to Google Sheets");
        Ok(())
    }
}
