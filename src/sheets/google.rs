//! Google Sheets values API store.
//!
//! Reads use `values.get` with unformatted values so numeric cells arrive as
//! plain numbers; writes use `values.update` with raw input.

use reqwest::blocking::Client;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, RigcheckError};

use super::{MajorDimension, SheetStore};

/// Default values API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// Body of a `values.get` response and a `values.update` request.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    major_dimension: Option<String>,
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

/// Store backed by one Google spreadsheet.
pub struct GoogleSheetsStore {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    access_token: Option<String>,
    timeout: Duration,
}

impl GoogleSheetsStore {
    /// Create a store for `spreadsheet_id` with a 30-second timeout.
    pub fn new(spreadsheet_id: impl Into<String>, access_token: Option<String>) -> Result<Self> {
        Self::with_options(
            DEFAULT_BASE_URL,
            spreadsheet_id,
            access_token,
            Duration::from_secs(30),
        )
    }

    /// Create a store against a custom endpoint and timeout.
    pub fn with_options(
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent("rigcheck")
            .timeout(timeout)
            .build()
            .map_err(|e| RigcheckError::sheet("client setup", e))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            spreadsheet_id: spreadsheet_id.into(),
            access_token: access_token.filter(|t| !t.is_empty()),
            timeout,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether writes can be authorized.
    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    fn values_url(&self, range: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| RigcheckError::sheet("url", format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| RigcheckError::sheet("url", format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["spreadsheets", self.spreadsheet_id.as_str(), "values", range]);
        Ok(url)
    }
}

/// Text of one JSON cell.
pub fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Bool(true) => "TRUE".to_string(),
        serde_json::Value::Bool(false) => "FALSE".to_string(),
        other => other.to_string(),
    }
}

impl SheetStore for GoogleSheetsStore {
    fn fetch_rows(&self, range: &str, dimension: MajorDimension) -> Result<Vec<Vec<String>>> {
        let mut url = self.values_url(range)?;
        url.query_pairs_mut()
            .append_pair("majorDimension", dimension.as_api_str())
            .append_pair("valueRenderOption", "UNFORMATTED_VALUE");

        tracing::debug!(range, ?dimension, "Fetching sheet range");

        let mut request = self.client.get(url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| RigcheckError::sheet("read", format!("{}: {}", range, e)))?;

        if !response.status().is_success() {
            return Err(RigcheckError::sheet(
                "read",
                format!("HTTP {} fetching {}", response.status(), range),
            ));
        }

        let body: ValueRange = response
            .json()
            .map_err(|e| RigcheckError::sheet("read", format!("{}: {}", range, e)))?;

        Ok(body
            .values
            .iter()
            .map(|line| line.iter().map(cell_text).collect())
            .collect())
    }

    fn write_cell(&mut self, location: &str, value: &str) -> Result<()> {
        let token = self.access_token.as_deref().ok_or_else(|| {
            RigcheckError::sheet(
                "write",
                "no access token configured; set sheets.access_token or the token environment variable",
            )
        })?;

        let mut url = self.values_url(location)?;
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");

        let body = ValueRange {
            range: Some(location.to_string()),
            major_dimension: Some(MajorDimension::Columns.as_api_str().to_string()),
            values: vec![vec![serde_json::Value::String(value.to_string())]],
        };

        tracing::debug!(location, "Writing sheet cell");

        let response = self
            .client
            .put(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .map_err(|e| RigcheckError::sheet("write", format!("{}: {}", location, e)))?;

        if !response.status().is_success() {
            return Err(RigcheckError::sheet(
                "write",
                format!("HTTP {} updating {}", response.status(), location),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn store(server: &MockServer, token: Option<&str>) -> GoogleSheetsStore {
        GoogleSheetsStore::with_options(
            server.url("/v4"),
            "sheet-123",
            token.map(String::from),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn default_timeout_is_30_seconds() {
        let store = GoogleSheetsStore::new("abc", None).unwrap();
        assert_eq!(store.timeout(), Duration::from_secs(30));
        assert!(!store.has_token());
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let store = GoogleSheetsStore::new("abc", Some(String::new())).unwrap();
        assert!(!store.has_token());
    }

    #[test]
    fn cell_text_converts_json_scalars() {
        assert_eq!(cell_text(&json!("i7-8650U")), "i7-8650U");
        assert_eq!(cell_text(&json!(6300)), "6300");
        assert_eq!(cell_text(&json!(15.5)), "15.5");
        assert_eq!(cell_text(&json!(true)), "TRUE");
        assert_eq!(cell_text(&json!(null)), "");
    }

    #[test]
    fn fetch_reads_values_in_requested_dimension() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/spreadsheets/sheet-123/values/Specs!B1:H7")
                .query_param("majorDimension", "COLUMNS")
                .query_param("valueRenderOption", "UNFORMATTED_VALUE")
                .header("authorization", "Bearer tok");
            then.status(200).json_body(json!({
                "range": "Specs!B1:H7",
                "majorDimension": "COLUMNS",
                "values": [["Alpha", "Windows10", 6000, 8, 256, 50, "64"]]
            }));
        });

        let rows = store(&server, Some("tok"))
            .fetch_rows("Specs!B1:H7", MajorDimension::Columns)
            .unwrap();

        mock.assert();
        assert_eq!(
            rows,
            vec![vec!["Alpha", "Windows10", "6000", "8", "256", "50", "64"]]
        );
    }

    #[test]
    fn fetch_of_empty_range_returns_no_rows() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v4/spreadsheets/sheet-123/values/Empty!A1:B");
            then.status(200)
                .json_body(json!({"range": "Empty!A1:B", "majorDimension": "ROWS"}));
        });

        let rows = store(&server, None)
            .fetch_rows("Empty!A1:B", MajorDimension::Rows)
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn fetch_reports_http_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v4/spreadsheets/sheet-123/values/ICs!A3:F");
            then.status(403).body("forbidden");
        });

        let err = store(&server, None)
            .fetch_rows("ICs!A3:F", MajorDimension::Rows)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("403"), "unexpected message: {}", msg);
        assert!(msg.contains("ICs!A3:F"));
    }

    #[test]
    fn write_puts_raw_value() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v4/spreadsheets/sheet-123/values/ICs!G5")
                .query_param("valueInputOption", "RAW")
                .header("authorization", "Bearer tok")
                .json_body(json!({
                    "range": "ICs!G5",
                    "majorDimension": "COLUMNS",
                    "values": [["Yes"]]
                }));
            then.status(200).json_body(json!({"updatedCells": 1}));
        });

        store(&server, Some("tok")).write_cell("ICs!G5", "Yes").unwrap();
        mock.assert();
    }

    #[test]
    fn write_without_token_fails_before_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT);
            then.status(200);
        });

        let err = store(&server, None).write_cell("ICs!G5", "Yes").unwrap_err();
        assert!(err.to_string().contains("access token"));
        mock.assert_hits(0);
    }

    #[test]
    fn write_reports_http_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/v4/spreadsheets/sheet-123/values/ICs!H5");
            then.status(500);
        });

        let err = store(&server, Some("tok"))
            .write_cell("ICs!H5", "report")
            .unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
