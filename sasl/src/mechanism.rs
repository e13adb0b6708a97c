//! The closed set of SASL mechanisms a Kafka client can be configured with.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::aws_msk_iam::AwsMskIamConfig;
use crate::error::Error;
use crate::gssapi::GssapiConfig;
use crate::oauth::OAuthBearerConfig;

/// One of the six SASL mechanisms understood by the client.
///
/// The external representation is the exact, case-sensitive tag used by Kafka,
/// see [`Mechanism::as_str`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mechanism {
    /// `PLAIN`, username and password sent as-is.
    #[default]
    Plain,
    /// `SCRAM-SHA-256`.
    ScramSha256,
    /// `SCRAM-SHA-512`.
    ScramSha512,
    /// `GSSAPI`, usually Kerberos.
    Gssapi,
    /// `OAUTHBEARER`.
    OAuthBearer,
    /// `AWS_MSK_IAM`, request signing with AWS credentials.
    AwsMskIam,
}

impl Mechanism {
    /// Every recognized mechanism, in declaration order.
    pub const ALL: [Mechanism; 6] = [
        Mechanism::Plain,
        Mechanism::ScramSha256,
        Mechanism::ScramSha512,
        Mechanism::Gssapi,
        Mechanism::OAuthBearer,
        Mechanism::AwsMskIam,
    ];

    /// The tag of this mechanism, as found in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mechanism::Plain => "PLAIN",
            Mechanism::ScramSha256 => "SCRAM-SHA-256",
            Mechanism::ScramSha512 => "SCRAM-SHA-512",
            Mechanism::Gssapi => "GSSAPI",
            Mechanism::OAuthBearer => "OAUTHBEARER",
            Mechanism::AwsMskIam => "AWS_MSK_IAM",
        }
    }

    /// Whether this mechanism only needs the shared username and password.
    pub fn uses_credentials(&self) -> bool {
        matches!(
            self,
            Mechanism::Plain | Mechanism::ScramSha256 | Mechanism::ScramSha512
        )
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

impl FromStr for Mechanism {
    type Err = Error;

    fn from_str(s: &str) -> Result<Mechanism, Error> {
        Mechanism::ALL
            .iter()
            .copied()
            .find(|mechanism| mechanism.as_str() == s)
            .ok_or_else(|| Error::UnrecognizedMechanism(s.to_owned()))
    }
}

impl Serialize for Mechanism {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mechanism {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Mechanism::from_str(&s).map_err(de::Error::custom)
    }
}

/// A validated mechanism selection, owning whatever the mechanism needs
/// beyond the shared username and password.
///
/// Obtained from [`SaslConfig::mechanism_config`](crate::SaslConfig::mechanism_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MechanismConfig {
    /// `PLAIN`.
    Plain,
    /// `SCRAM-SHA-256`.
    ScramSha256,
    /// `SCRAM-SHA-512`.
    ScramSha512,
    /// `GSSAPI` and its Kerberos settings.
    Gssapi(GssapiConfig),
    /// `OAUTHBEARER` and its token settings.
    OAuthBearer(OAuthBearerConfig),
    /// `AWS_MSK_IAM` and its AWS credentials.
    AwsMskIam(AwsMskIamConfig),
}

impl MechanismConfig {
    /// The tag this selection was made from.
    pub fn mechanism(&self) -> Mechanism {
        match self {
            MechanismConfig::Plain => Mechanism::Plain,
            MechanismConfig::ScramSha256 => Mechanism::ScramSha256,
            MechanismConfig::ScramSha512 => Mechanism::ScramSha512,
            MechanismConfig::Gssapi(_) => Mechanism::Gssapi,
            MechanismConfig::OAuthBearer(_) => Mechanism::OAuthBearer,
            MechanismConfig::AwsMskIam(_) => Mechanism::AwsMskIam,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn parses_every_tag() {
        for mechanism in Mechanism::ALL {
            assert_eq!(Mechanism::from_str(mechanism.as_str()), Ok(mechanism));
            assert_eq!(mechanism.to_string(), mechanism.as_str());
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(
            Mechanism::from_str("plain"),
            Err(Error::UnrecognizedMechanism(String::from("plain")))
        );
        assert_eq!(
            Mechanism::from_str("Scram-Sha-256"),
            Err(Error::UnrecognizedMechanism(String::from("Scram-Sha-256")))
        );
    }

    #[test]
    fn empty_tag_is_unrecognized() {
        assert_eq!(
            Mechanism::from_str(""),
            Err(Error::UnrecognizedMechanism(String::new()))
        );
    }

    #[test]
    fn credential_only_mechanisms() {
        let credential_only: Vec<_> = Mechanism::ALL
            .into_iter()
            .filter(Mechanism::uses_credentials)
            .collect();
        assert_eq!(
            credential_only,
            [
                Mechanism::Plain,
                Mechanism::ScramSha256,
                Mechanism::ScramSha512
            ]
        );
    }

    #[test]
    fn serde_uses_the_tag() {
        assert_tokens(&Mechanism::AwsMskIam, &[Token::Str("AWS_MSK_IAM")]);
        assert_tokens(&Mechanism::ScramSha512, &[Token::Str("SCRAM-SHA-512")]);
        assert_de_tokens_error::<Mechanism>(
            &[Token::Str("KERBEROS")],
            "given sasl mechanism 'KERBEROS' is invalid",
        );
    }

    #[test]
    fn default_is_plain() {
        assert_eq!(Mechanism::default(), Mechanism::Plain);
    }

    #[test]
    fn mechanism_config_reports_its_tag() {
        assert_eq!(MechanismConfig::Plain.mechanism(), Mechanism::Plain);
        assert_eq!(
            MechanismConfig::AwsMskIam(AwsMskIamConfig::default()).mechanism(),
            Mechanism::AwsMskIam
        );
    }
}
