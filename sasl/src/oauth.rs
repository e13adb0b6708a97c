//! Settings for the `OAUTHBEARER` mechanism.

use std::error::Error as StdError;
use std::fmt;

use clap::{ArgMatches, Command};
use serde::{Deserialize, Serialize};

use crate::flags::{apply_string, string_flag, RegisterFlags};

const FLAG_TOKEN: &str = "kafka.sasl.oauth.token";
const FLAG_CLIENT_SECRET: &str = "kafka.sasl.oauth.client-secret";

/// OAuth bearer configuration.
///
/// Either a static `token` is used as-is, or a token is fetched from
/// `token_endpoint` with the client credentials grant.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OAuthBearerConfig {
    /// A static bearer token.
    pub token: String,
    /// Client id for the client credentials grant.
    #[serde(alias = "clientid")]
    pub client_id: String,
    /// Client secret for the client credentials grant.
    #[serde(alias = "clientsecret")]
    pub client_secret: String,
    /// URL of the token endpoint.
    #[serde(alias = "tokenendpoint")]
    pub token_endpoint: String,
    /// Space separated scopes to request.
    pub scope: String,
}

/// Why an [`OAuthBearerConfig`] is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Neither a token nor complete client credentials were given.
    MissingCredentials,
    /// The token endpoint is not an http(s) URL.
    InvalidTokenEndpoint(String),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingCredentials => write!(
                fmt,
                "OAuth Bearer requires either a token or a client id, client secret and token endpoint"
            ),
            Error::InvalidTokenEndpoint(url) => {
                write!(fmt, "token endpoint '{}' is not an http(s) URL", url)
            }
        }
    }
}

impl StdError for Error {}

impl OAuthBearerConfig {
    /// There is nothing to default here, this only exists for symmetry with
    /// the other mechanisms.
    pub fn set_defaults(&mut self) {}

    /// Checks that either a token or a full set of client credentials is
    /// present.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.token_endpoint.is_empty()
            && !self.token_endpoint.starts_with("https://")
            && !self.token_endpoint.starts_with("http://")
        {
            return Err(Error::InvalidTokenEndpoint(self.token_endpoint.clone()));
        }
        if !self.token.is_empty() {
            return Ok(());
        }
        if self.client_id.is_empty()
            || self.client_secret.is_empty()
            || self.token_endpoint.is_empty()
        {
            return Err(Error::MissingCredentials);
        }
        Ok(())
    }
}

impl RegisterFlags for OAuthBearerConfig {
    fn register_flags(&self, command: Command) -> Command {
        command
            .arg(string_flag(FLAG_TOKEN, "OAuth Bearer token"))
            .arg(string_flag(FLAG_CLIENT_SECRET, "OAuth Bearer client secret"))
    }

    fn apply_flags(&mut self, matches: &ArgMatches) {
        apply_string(matches, FLAG_TOKEN, &mut self.token);
        apply_string(matches, FLAG_CLIENT_SECRET, &mut self.client_secret);
    }
}

impl fmt::Debug for OAuthBearerConfig {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("OAuthBearerConfig")
            .field("token", &crate::redacted(&self.token))
            .field("client_id", &self.client_id)
            .field("client_secret", &crate::redacted(&self.client_secret))
            .field("token_endpoint", &self.token_endpoint)
            .field("scope", &self.scope)
            .finish()
    }
}
