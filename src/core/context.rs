//! Top-level application context: configuration plus the lazily
//! authenticated spreadsheet session.

use crate::config::Config;
use crate::credentials::{Credentials, load_credentials};
use crate::errors::AppResult;
use crate::sheets::{ClientFactory, SheetFacade, SheetsClient, SpreadsheetService};
use std::path::PathBuf;

pub struct AppContext {
    pub config: Config,
    pub config_path: PathBuf,
}

impl AppContext {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
        }
    }

    /// Load and validate the secret store named by the configuration.
    pub fn credentials(&self) -> AppResult<Credentials> {
        load_credentials(&self.config.secrets_path())
    }

    /// Validate secrets and resolve the sheet ID. No network traffic happens
    /// until the session's façade is first requested.
    pub fn session(&self) -> AppResult<Session> {
        let credentials = self.credentials()?;
        let sheet_id = credentials.sheet_id()?;
        let factory = ClientFactory::new(credentials, &self.config.api_base_url);
        Ok(Session::new(factory, sheet_id, self.config.worksheet.clone()))
    }
}

/// Target spreadsheet/worksheet plus the memoized client that reaches it.
pub struct Session<C = SheetsClient> {
    factory: ClientFactory<C>,
    pub sheet_id: String,
    pub worksheet: String,
}

impl<C: SpreadsheetService> Session<C> {
    pub fn new(factory: ClientFactory<C>, sheet_id: String, worksheet: String) -> Self {
        Self {
            factory,
            sheet_id,
            worksheet,
        }
    }

    /// Façade over the authenticated client (authenticates on first call).
    pub fn facade(&self) -> AppResult<SheetFacade<'_, C>> {
        Ok(SheetFacade::new(self.factory.get_client()?))
    }

    pub fn service_identity(&self) -> &str {
        self.factory.credentials().service_identity()
    }
}
