#![deny(missing_docs)]

//! This crate provides the SASL configuration of a Kafka client: the selected
//! mechanism, the shared credentials and the settings of the mechanisms which
//! need more than a username and a password.
//!
//! It only prepares and checks the configuration, the authentication itself is
//! left to the connection layer.
//!
//! # Examples
//!
//! ```rust
//! use kafka_sasl_config::{Mechanism, MechanismConfig, SaslConfig};
//!
//! let mut config = SaslConfig::from_yaml_str("enabled: true\nusername: user\n").unwrap();
//! config.password = String::from("pencil");
//!
//! assert_eq!(config.mechanism(), Ok(Mechanism::Plain));
//! assert_eq!(config.validate(), Ok(()));
//! assert_eq!(config.mechanism_config(), Ok(Some(MechanismConfig::Plain)));
//! assert_eq!(config.username, "user");
//! ```
//!
//! Sensitive values can be overridden from the command line, see
//! [`RegisterFlags`].

use std::fmt;
use std::str::FromStr;

use clap::{ArgMatches, Command};
use serde::{Deserialize, Serialize};

pub mod aws_msk_iam;
mod error;
mod flags;
pub mod gssapi;
mod mechanism;
pub mod oauth;
mod source;

pub use crate::aws_msk_iam::AwsMskIamConfig;
pub use crate::error::{Error, LoadError, SubConfigError};
pub use crate::flags::RegisterFlags;
pub use crate::gssapi::GssapiConfig;
pub use crate::mechanism::{Mechanism, MechanismConfig};
pub use crate::oauth::OAuthBearerConfig;

const FLAG_PASSWORD: &str = "kafka.sasl.password";

/// SASL configuration of a Kafka client.
///
/// All three sub-configurations are always present, only the one matching
/// `mechanism` is looked at.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaslConfig {
    /// Whether SASL is used at all. Nothing else is interpreted when false.
    pub enabled: bool,
    /// Username for `PLAIN` and `SCRAM-*`.
    pub username: String,
    /// Password for `PLAIN` and `SCRAM-*`.
    pub password: String,
    /// The mechanism tag, see [`Mechanism`].
    pub mechanism: String,
    /// Settings for `OAUTHBEARER`.
    pub oauth: OAuthBearerConfig,
    /// Settings for `GSSAPI`.
    pub gssapi: GssapiConfig,
    /// Settings for `AWS_MSK_IAM`.
    #[serde(alias = "awsmskiam")]
    pub aws_msk_iam: AwsMskIamConfig,
}

impl SaslConfig {
    /// Selects `PLAIN` and applies the GSSAPI defaults.
    ///
    /// The document loaders already start from this state, calling it on a
    /// loaded configuration resets the mechanism.
    pub fn set_defaults(&mut self) {
        self.mechanism = Mechanism::default().as_str().to_owned();
        self.gssapi.set_defaults();
        log::debug!("applied sasl defaults, mechanism is {}", self.mechanism);
    }

    /// Parses the mechanism tag.
    pub fn mechanism(&self) -> Result<Mechanism, Error> {
        Mechanism::from_str(&self.mechanism)
    }

    /// Checks that the selected mechanism is known and that its
    /// sub-configuration, if any, is valid.
    ///
    /// The username and password are not checked.
    pub fn validate(&self) -> Result<(), Error> {
        let mechanism = self.mechanism()?;
        match mechanism {
            Mechanism::Plain | Mechanism::ScramSha256 | Mechanism::ScramSha512 => (),
            Mechanism::Gssapi => self.gssapi.validate()?,
            Mechanism::OAuthBearer => self.oauth.validate()?,
            Mechanism::AwsMskIam => self.aws_msk_iam.validate()?,
        }
        log::debug!("sasl config for {} is valid", mechanism);
        Ok(())
    }

    /// Validates this configuration and clones what the selected mechanism
    /// needs beyond the username and password.
    ///
    /// Returns `None` when SASL is disabled. The credentials stay on `self`.
    pub fn mechanism_config(&self) -> Result<Option<MechanismConfig>, Error> {
        self.validate()?;
        if !self.enabled {
            return Ok(None);
        }
        Ok(Some(match self.mechanism()? {
            Mechanism::Plain => MechanismConfig::Plain,
            Mechanism::ScramSha256 => MechanismConfig::ScramSha256,
            Mechanism::ScramSha512 => MechanismConfig::ScramSha512,
            Mechanism::Gssapi => MechanismConfig::Gssapi(self.gssapi.clone()),
            Mechanism::OAuthBearer => MechanismConfig::OAuthBearer(self.oauth.clone()),
            Mechanism::AwsMskIam => MechanismConfig::AwsMskIam(self.aws_msk_iam.clone()),
        }))
    }
}

impl RegisterFlags for SaslConfig {
    fn register_flags(&self, command: Command) -> Command {
        let command = command.arg(flags::string_flag(FLAG_PASSWORD, "SASL password"));
        let command = self.oauth.register_flags(command);
        let command = self.gssapi.register_flags(command);
        self.aws_msk_iam.register_flags(command)
    }

    fn apply_flags(&mut self, matches: &ArgMatches) {
        flags::apply_string(matches, FLAG_PASSWORD, &mut self.password);
        self.oauth.apply_flags(matches);
        self.gssapi.apply_flags(matches);
        self.aws_msk_iam.apply_flags(matches);
    }
}

impl fmt::Debug for SaslConfig {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("SaslConfig")
            .field("enabled", &self.enabled)
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .field("mechanism", &self.mechanism)
            .field("oauth", &self.oauth)
            .field("gssapi", &self.gssapi)
            .field("aws_msk_iam", &self.aws_msk_iam)
            .finish()
    }
}

/// What `Debug` shows in place of a secret.
pub(crate) fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}
