//! Lazily-built, memoized client handle.

use super::client::SheetsClient;
use crate::credentials::Credentials;
use crate::errors::AppResult;
use once_cell::sync::OnceCell;
use tracing::debug;

/// Function that authenticates and returns a ready client.
pub type Connector<C> = fn(&Credentials, &str) -> AppResult<C>;

/// Builds the authenticated client on first use and hands out the same
/// handle for the rest of its lifetime.
///
/// A failed attempt leaves the factory empty, so the next call tries again.
pub struct ClientFactory<C = SheetsClient> {
    credentials: Credentials,
    api_base: String,
    connector: Connector<C>,
    cell: OnceCell<C>,
}

impl ClientFactory<SheetsClient> {
    pub fn new(credentials: Credentials, api_base: &str) -> Self {
        Self::with_connector(credentials, api_base, SheetsClient::connect)
    }
}

impl<C> ClientFactory<C> {
    pub fn with_connector(credentials: Credentials, api_base: &str, connector: Connector<C>) -> Self {
        Self {
            credentials,
            api_base: api_base.to_string(),
            connector,
            cell: OnceCell::new(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Authenticated handle; authenticates only on the first successful call.
    pub fn get_client(&self) -> AppResult<&C> {
        self.cell.get_or_try_init(|| {
            debug!(identity = %self.credentials.service_identity(), "authenticating");
            (self.connector)(&self.credentials, &self.api_base)
        })
    }

    /// Whether a handle has already been built.
    pub fn is_connected(&self) -> bool {
        self.cell.get().is_some()
    }
}
