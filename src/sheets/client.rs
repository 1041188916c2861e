//! Authenticated HTTP client for the Google Sheets v4 REST API.

use super::auth::{self, AccessToken, SCOPES};
use super::service::SpreadsheetService;
use crate::credentials::Credentials;
use crate::errors::{AppError, AppResult};
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info, trace};

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com/v4/";

const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Authenticated handle to the spreadsheet service.
///
/// Holds no per-request state: once built it is only read.
#[derive(Debug)]
pub struct SheetsClient {
    http: Client,
    base_url: Url,
    token: AccessToken,
}

impl SheetsClient {
    /// Authenticate with the service-account key and build the handle.
    pub fn connect(creds: &Credentials, api_base: &str) -> AppResult<Self> {
        let base_url = Url::parse(api_base)
            .map_err(|e| AppError::InvalidFormat(format!("invalid API base URL '{api_base}': {e}")))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .default_headers(default_headers)
            .build()
            .map_err(|e| AppError::Auth(format!("could not build HTTP client: {e}")))?;

        let token = auth::authenticate(&http, &creds.service_account, &SCOPES)?;

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    fn url(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidFormat(format!("API base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn send(&self, req: RequestBuilder, sheet_id: &str) -> AppResult<String> {
        let res = req
            .bearer_auth(self.token.value())
            .send()
            .map_err(|e| AppError::RemoteService(format!("request failed: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .map_err(|e| AppError::RemoteService(format!("response unreadable: {e}")))?;

        trace!(%status, %body, "sheets response");

        if status.is_success() {
            Ok(body)
        } else {
            Err(classify(status, &body, sheet_id))
        }
    }
}

impl SpreadsheetService for SheetsClient {
    fn worksheet_titles(&self, sheet_id: &str) -> AppResult<Vec<String>> {
        let url = self.url(&["spreadsheets", sheet_id])?;
        debug!(%sheet_id, "fetching worksheet titles");

        let req = self
            .http
            .get(url)
            .query(&[("fields", "sheets.properties.title")]);
        let body = self.send(req, sheet_id)?;

        let meta: SpreadsheetMeta = serde_json::from_str(&body)
            .map_err(|e| AppError::Unknown(format!("unexpected spreadsheet metadata: {e}")))?;

        Ok(meta.sheets.into_iter().map(|s| s.properties.title).collect())
    }

    fn get_all_values(&self, sheet_id: &str, worksheet: &str) -> AppResult<Vec<Vec<String>>> {
        let range = a1_range(worksheet);
        let url = self.url(&["spreadsheets", sheet_id, "values", &range])?;
        debug!(%sheet_id, %worksheet, "fetching all values");

        let body = self.send(self.http.get(url), sheet_id)?;

        let values: ValueRange = serde_json::from_str(&body)
            .map_err(|e| AppError::Unknown(format!("unexpected value range: {e}")))?;

        Ok(values
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }

    fn append_row(&self, sheet_id: &str, worksheet: &str, cells: &[String]) -> AppResult<()> {
        let target = format!("{}:append", a1_range(worksheet));
        let url = self.url(&["spreadsheets", sheet_id, "values", &target])?;

        let req = self
            .http
            .post(url)
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&json!({ "values": [cells] }));

        self.send(req, sheet_id)?;
        info!(%sheet_id, %worksheet, cells = cells.len(), "row appended");
        Ok(())
    }
}

/// A1 range covering a whole worksheet: the quoted title.
pub fn a1_range(worksheet: &str) -> String {
    format!("'{}'", worksheet.replace('\'', "''"))
}

fn cell_to_string(v: Value) -> String {
    match v {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Map a non-success response onto the error taxonomy.
pub fn classify(status: StatusCode, body: &str, sheet_id: &str) -> AppError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| match b.error.status {
            Some(s) if !b.error.message.is_empty() => format!("{} ({s})", b.error.message),
            Some(s) => s,
            None => b.error.message,
        })
        .unwrap_or_else(|_| format!("HTTP {status}"));

    match status {
        StatusCode::UNAUTHORIZED => AppError::Auth(message),
        StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => {
            AppError::SpreadsheetNotFound(format!("{sheet_id}: {message}"))
        }
        StatusCode::TOO_MANY_REQUESTS => AppError::RemoteService(message),
        s if s.is_server_error() => AppError::RemoteService(message),
        _ => AppError::Unknown(message),
    }
}
