use std::error::Error as StdError;
use std::fmt;
use std::io;

use crate::{aws_msk_iam, gssapi, oauth};

/// An error that makes a SASL configuration unusable.
///
/// Both variants are static configuration errors: they will not go away
/// without the user changing the configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The mechanism tag is not one of the six recognized ones. Holds the
    /// offending value verbatim, which may be empty.
    UnrecognizedMechanism(String),

    /// The sub-configuration of the selected mechanism rejected its own state.
    SubConfigInvalid(SubConfigError),
}

/// The sub-configuration which failed to validate, with its own error.
#[derive(Debug, PartialEq, Eq)]
pub enum SubConfigError {
    /// The GSSAPI settings are invalid.
    Gssapi(gssapi::Error),
    /// The OAuth bearer settings are invalid.
    OAuthBearer(oauth::Error),
    /// The AWS MSK IAM settings are invalid.
    AwsMskIam(aws_msk_iam::Error),
}

impl SubConfigError {
    /// Human readable name of the failing sub-system.
    pub fn label(&self) -> &'static str {
        match self {
            SubConfigError::Gssapi(_) => "gssapi config",
            SubConfigError::OAuthBearer(_) => "OAuth Bearer config",
            SubConfigError::AwsMskIam(_) => "aws msk iam config",
        }
    }

    fn inner(&self) -> &(dyn StdError + 'static) {
        match self {
            SubConfigError::Gssapi(err) => err,
            SubConfigError::OAuthBearer(err) => err,
            SubConfigError::AwsMskIam(err) => err,
        }
    }
}

impl From<gssapi::Error> for Error {
    fn from(err: gssapi::Error) -> Error {
        Error::SubConfigInvalid(SubConfigError::Gssapi(err))
    }
}

impl From<oauth::Error> for Error {
    fn from(err: oauth::Error) -> Error {
        Error::SubConfigInvalid(SubConfigError::OAuthBearer(err))
    }
}

impl From<aws_msk_iam::Error> for Error {
    fn from(err: aws_msk_iam::Error) -> Error {
        Error::SubConfigInvalid(SubConfigError::AwsMskIam(err))
    }
}

impl fmt::Display for SubConfigError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "failed to validate {}", self.label())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnrecognizedMechanism(mechanism) => {
                write!(fmt, "given sasl mechanism '{}' is invalid", mechanism)
            }
            Error::SubConfigInvalid(err) => write!(fmt, "{}", err),
        }
    }
}

impl StdError for SubConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.inner())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::UnrecognizedMechanism(_) => None,
            Error::SubConfigInvalid(err) => Some(err.inner()),
        }
    }
}

/// An error while reading a SASL configuration document.
#[derive(Debug)]
pub enum LoadError {
    /// The document could not be read.
    Io(io::Error),
    /// The document is not valid YAML.
    Yaml(serde_yaml::Error),
    /// The document is not valid JSON.
    Json(serde_json::Error),
    /// The document doesn’t match the expected keys and types.
    Schema(serde_json::Error),
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> LoadError {
        LoadError::Io(err)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(err: serde_yaml::Error) -> LoadError {
        LoadError::Yaml(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> LoadError {
        LoadError::Json(err)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(fmt, "failed to read sasl config: {}", err),
            LoadError::Yaml(err) => write!(fmt, "failed to parse sasl config as YAML: {}", err),
            LoadError::Json(err) => write!(fmt, "failed to parse sasl config as JSON: {}", err),
            LoadError::Schema(err) => write!(fmt, "invalid sasl config: {}", err),
        }
    }
}

impl StdError for LoadError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Yaml(err) => Some(err),
            LoadError::Json(err) => Some(err),
            LoadError::Schema(err) => Some(err),
        }
    }
}
