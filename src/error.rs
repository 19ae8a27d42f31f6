// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! The overlay itself never fails; these errors come from the ambient layers
//! (configuration files and the host transport). Callers log them and carry
//! on with defaults.

/// Errors raised while loading configuration or decoding host messages.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    /// A host line could not be decoded as a JSON envelope.
    #[error("Envelope Error: {0}")]
    Envelope(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Envelope(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let toml_error = toml::from_str::<toml::Table>("= nope").unwrap_err();
        assert!(matches!(Error::from(toml_error), Error::Config(_)));
    }

    #[test]
    fn from_json_error_produces_envelope_variant() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_error);
        assert!(matches!(err, Error::Envelope(_)));
        assert!(err.to_string().starts_with("Envelope Error:"));
    }
}
