//! Error types for Switchboard.
//!
//! - [`SwitchboardError`] - Top-level error type
//! - [`ConfigError`] - Errors loading the handler configuration
//!
//! Only strict configuration loading, and the strict run built on it, report
//! errors. The default path folds every failure into "handler disabled".

use std::path::PathBuf;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Switchboard operations.
#[derive(Error, Debug)]
pub enum SwitchboardError {
    /// The handler configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur while loading the handler configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed.
    #[error("failed to parse {}", origin(.path))]
    Parse {
        /// Path of the document, when it came from a file.
        path: Option<PathBuf>,
        /// Underlying parser error.
        #[source]
        source: BoxError,
    },

    /// The document root is not the expected element.
    #[error("expected root element `Handlers`, found `{found}`")]
    UnexpectedRoot {
        /// Name of the root element that was found.
        found: String,
    },

    /// An `enable` attribute holds something other than a boolean.
    #[error("invalid `enable` value {value:?} on element `{element}`")]
    InvalidFlag {
        /// Element carrying the attribute.
        element: String,
        /// Raw attribute text.
        value: String,
    },
}

fn origin(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "configuration".to_string(),
    }
}

impl ConfigError {
    /// Attaches a file path to a parse error that came from a string.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            ConfigError::Parse { path: None, source } => ConfigError::Parse {
                path: Some(path.into()),
                source,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_mentions_path_once_attached() {
        let err = ConfigError::Parse {
            path: None,
            source: "unexpected end of stream".into(),
        };
        assert_eq!(err.to_string(), "failed to parse configuration");

        let err = err.with_path("handlers.xml");
        assert_eq!(err.to_string(), "failed to parse handlers.xml");
    }

    #[test]
    fn config_errors_convert_to_top_level() {
        let err: SwitchboardError = ConfigError::UnexpectedRoot {
            found: "Listeners".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "configuration error: expected root element `Handlers`, found `Listeners`"
        );
    }
}
