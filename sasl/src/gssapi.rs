//! Settings for the `GSSAPI` mechanism, i.e. Kerberos.

use std::error::Error as StdError;
use std::fmt;

use clap::{ArgMatches, Command};
use serde::{Deserialize, Serialize};

use crate::flags::{apply_string, string_flag, RegisterFlags};

/// Authenticate with the username and password of the principal.
pub const AUTH_TYPE_USER: &str = "USER_AUTH";
/// Authenticate with a keytab file.
pub const AUTH_TYPE_KEYTAB: &str = "KEYTAB_AUTH";

const DEFAULT_SERVICE_NAME: &str = "kafka";
const DEFAULT_KERBEROS_CONFIG_PATH: &str = "/etc/krb5.conf";

const FLAG_PASSWORD: &str = "kafka.sasl.gssapi.password";
const FLAG_KEYTAB_PATH: &str = "kafka.sasl.gssapi.keytab-path";

/// Kerberos configuration.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GssapiConfig {
    /// Either [`AUTH_TYPE_USER`] or [`AUTH_TYPE_KEYTAB`].
    #[serde(alias = "authtype")]
    pub auth_type: String,
    /// Path of the keytab, for [`AUTH_TYPE_KEYTAB`].
    #[serde(rename = "keyTabPath", alias = "keytabpath")]
    pub keytab_path: String,
    /// Path of the `krb5.conf` to use.
    #[serde(alias = "kerberosconfigpath")]
    pub kerberos_config_path: String,
    /// Kerberos service name of the brokers.
    #[serde(alias = "servicename")]
    pub service_name: String,
    /// Principal name.
    pub username: String,
    /// Principal password, for [`AUTH_TYPE_USER`].
    pub password: String,
    /// Kerberos realm.
    pub realm: String,
    /// Use Kerberos FAST (RFC 6113).
    #[serde(alias = "enablefast")]
    pub enable_fast: bool,
}

/// Why a [`GssapiConfig`] is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The auth type is neither of the two supported ones.
    InvalidAuthType(String),
    /// No realm was given.
    MissingRealm,
    /// No principal name was given.
    MissingUsername,
    /// No service name was given.
    MissingServiceName,
    /// No `krb5.conf` path was given.
    MissingKerberosConfigPath,
    /// [`AUTH_TYPE_USER`] was selected without a password.
    MissingPassword,
    /// [`AUTH_TYPE_KEYTAB`] was selected without a keytab.
    MissingKeytabPath,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidAuthType(auth_type) => write!(
                fmt,
                "auth type '{}' is invalid, must be {} or {}",
                auth_type, AUTH_TYPE_USER, AUTH_TYPE_KEYTAB
            ),
            Error::MissingRealm => write!(fmt, "realm must be set"),
            Error::MissingUsername => write!(fmt, "username must be set"),
            Error::MissingServiceName => write!(fmt, "service name must be set"),
            Error::MissingKerberosConfigPath => write!(fmt, "kerberos config path must be set"),
            Error::MissingPassword => {
                write!(fmt, "password must be set when using {}", AUTH_TYPE_USER)
            }
            Error::MissingKeytabPath => {
                write!(fmt, "keytab path must be set when using {}", AUTH_TYPE_KEYTAB)
            }
        }
    }
}

impl StdError for Error {}

impl GssapiConfig {
    /// Enables FAST and fills the service name and `krb5.conf` path if they
    /// are unset.
    pub fn set_defaults(&mut self) {
        self.enable_fast = true;
        if self.service_name.is_empty() {
            self.service_name = String::from(DEFAULT_SERVICE_NAME);
        }
        if self.kerberos_config_path.is_empty() {
            self.kerberos_config_path = String::from(DEFAULT_KERBEROS_CONFIG_PATH);
        }
    }

    /// Checks the principal and the secret required by the auth type.
    pub fn validate(&self) -> Result<(), Error> {
        let needs_password = match self.auth_type.as_str() {
            AUTH_TYPE_USER => true,
            AUTH_TYPE_KEYTAB => false,
            other => return Err(Error::InvalidAuthType(other.to_owned())),
        };

        if self.realm.is_empty() {
            return Err(Error::MissingRealm);
        }
        if self.username.is_empty() {
            return Err(Error::MissingUsername);
        }
        if self.service_name.is_empty() {
            return Err(Error::MissingServiceName);
        }
        if self.kerberos_config_path.is_empty() {
            return Err(Error::MissingKerberosConfigPath);
        }

        if needs_password && self.password.is_empty() {
            Err(Error::MissingPassword)
        } else if !needs_password && self.keytab_path.is_empty() {
            Err(Error::MissingKeytabPath)
        } else {
            Ok(())
        }
    }
}

impl RegisterFlags for GssapiConfig {
    fn register_flags(&self, command: Command) -> Command {
        command
            .arg(string_flag(FLAG_PASSWORD, "Kerberos password"))
            .arg(string_flag(FLAG_KEYTAB_PATH, "Kerberos keytab path"))
    }

    fn apply_flags(&mut self, matches: &ArgMatches) {
        apply_string(matches, FLAG_PASSWORD, &mut self.password);
        apply_string(matches, FLAG_KEYTAB_PATH, &mut self.keytab_path);
    }
}

impl fmt::Debug for GssapiConfig {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("GssapiConfig")
            .field("auth_type", &self.auth_type)
            .field("keytab_path", &self.keytab_path)
            .field("kerberos_config_path", &self.kerberos_config_path)
            .field("service_name", &self.service_name)
            .field("username", &self.username)
            .field("password", &crate::redacted(&self.password))
            .field("realm", &self.realm)
            .field("enable_fast", &self.enable_fast)
            .finish()
    }
}
