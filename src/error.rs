// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only [`Error::Configuration`] is fatal: it is raised when the content
//! collaborator hands over a catalog that can never render. Every other
//! variant describes a recoverable condition that the caller logs and then
//! ignores, leaving the affected state as it was.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Content is unusable (e.g. a menu without any category).
    #[error("Configuration Error: {0}")]
    Configuration(String),

    /// A category id that the catalog does not know was selected.
    #[error("Invalid selection: unknown category `{0}`")]
    InvalidSelection(String),

    /// Anchor navigation targeted a section that is not on the page.
    #[error("Missing scroll target: no section with id `{0}`")]
    MissingScrollTarget(String),

    /// The lightbox was observed open without an image.
    #[error("Inconsistent lightbox state: open without a selected image")]
    InconsistentLightboxState,

    #[error("I/O Error: {0}")]
    Io(String),

    /// Settings file could not be parsed or written.
    #[error("Config Error: {0}")]
    Config(String),

    /// Site content file could not be parsed.
    #[error("Content Error: {0}")]
    Content(String),
}

impl Error {
    /// Whether the application can keep running after this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Configuration(_))
    }
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
    fn invalid_selection_names_the_category() {
        let err = Error::InvalidSelection("drinks".into());
        assert!(err.to_string().contains("drinks"));
    }

    #[test]
    fn only_configuration_errors_are_fatal() {
        assert!(!Error::Configuration("empty".into()).is_recoverable());
        assert!(Error::InvalidSelection("x".into()).is_recoverable());
        assert!(Error::MissingScrollTarget("x".into()).is_recoverable());
        assert!(Error::InconsistentLightboxState.is_recoverable());
    }
}
