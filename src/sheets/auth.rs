//! Service-account authentication (OAuth 2.0 JWT bearer grant).

use crate::credentials::ServiceAccountKey;
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scopes requested for the service account: spreadsheet read/write and file listing.
pub const SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive",
];

const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: String,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TokenError {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Bearer token returned by the token endpoint.
#[derive(Clone)]
pub struct AccessToken {
    value: String,
    pub expires_in: Option<i64>,
}

impl AccessToken {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Build the signed assertion sent to the token endpoint.
pub fn signed_assertion(key: &ServiceAccountKey, scopes: &[&str], now: i64) -> AppResult<String> {
    // Keys pasted from JSON often keep their newlines escaped.
    let pem = key.private_key.replace("\\n", "\n");

    let encoding_key = EncodingKey::from_rsa_pem(pem.as_bytes())
        .map_err(|e| AppError::Auth(format!("invalid private key: {e}")))?;

    let claims = Claims {
        iss: &key.client_email,
        scope: scopes.join(" "),
        aud: &key.token_uri,
        iat: now,
        exp: now + ASSERTION_LIFETIME_SECS,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    encode(&header, &claims, &encoding_key)
        .map_err(|e| AppError::Auth(format!("could not sign assertion: {e}")))
}

/// Exchange the service-account key for an access token.
pub fn authenticate(
    http: &Client,
    key: &ServiceAccountKey,
    scopes: &[&str],
) -> AppResult<AccessToken> {
    let assertion = signed_assertion(key, scopes, Utc::now().timestamp())?;

    debug!(identity = %key.client_email, token_uri = %key.token_uri, "requesting access token");

    let res = http
        .post(&key.token_uri)
        .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
        .send()
        .map_err(|e| AppError::Auth(format!("token request failed: {e}")))?;

    let status = res.status();
    let body = res
        .text()
        .map_err(|e| AppError::Auth(format!("token response unreadable: {e}")))?;

    if !status.is_success() {
        let reason = match serde_json::from_str::<TokenError>(&body) {
            Ok(err) => err.error_description.unwrap_or(err.error),
            Err(_) => format!("token endpoint returned {status}"),
        };
        return Err(AppError::Auth(reason));
    }

    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| AppError::Auth(format!("unexpected token response: {e}")))?;

    debug!(expires_in = ?token.expires_in, "access token granted");

    Ok(AccessToken {
        value: token.access_token,
        expires_in: token.expires_in,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(pem: &str) -> ServiceAccountKey {
        ServiceAccountKey {
            client_email: "svc@test.iam".into(),
            private_key: pem.into(),
            private_key_id: None,
            project_id: None,
            token_uri: crate::credentials::DEFAULT_TOKEN_URI.into(),
        }
    }

    #[test]
    fn malformed_private_key_is_auth_error() {
        let err = signed_assertion(&key("not a pem"), &SCOPES, 0).unwrap_err();
        match err {
            AppError::Auth(reason) => assert!(reason.contains("invalid private key")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn token_debug_output_is_redacted() {
        let t = AccessToken {
            value: "ya29.secret".into(),
            expires_in: Some(3599),
        };
        let dbg = format!("{t:?}");
        assert!(!dbg.contains("ya29.secret"));
        assert!(dbg.contains("redacted"));
    }
}
