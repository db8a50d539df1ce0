//! All error types for the bundlegen crate.
//!
//! Every stage of the engine returns these; the first one produced aborts the
//! whole run, so no partially validated bundle ever reaches the emitter.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Broad classification of a fatal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FatalErrorKind {
    /// Malformed file content, unreadable directory, bad configuration.
    Structural,
    /// Missing per-language message, missing status/code coverage, orphan
    /// status entries, missing default language.
    Completeness,
    /// Empty identifier, wholly empty message, unpaired singular/plural.
    Shape,
}

impl Display for FatalErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FatalErrorKind::Structural => write!(f, "structural"),
            FatalErrorKind::Completeness => write!(f, "completeness"),
            FatalErrorKind::Shape => write!(f, "shape"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode `{file}`: {message}")]
    Decode { file: String, message: String },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("{kind} error: {message}")]
    Fatal {
        kind: FatalErrorKind,
        message: String,
        identifier: Option<String>,
        language: Option<String>,
        file: Option<String>,
    },
}

impl Error {
    /// Creates a fatal error carrying only a message.
    pub fn fatal(kind: FatalErrorKind, message: impl Into<String>) -> Self {
        Error::Fatal {
            kind,
            message: message.into(),
            identifier: None,
            language: None,
            file: None,
        }
    }

    /// Creates a completeness error.
    pub fn completeness(message: impl Into<String>) -> Self {
        Self::fatal(FatalErrorKind::Completeness, message)
    }

    /// Creates a shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::fatal(FatalErrorKind::Shape, message)
    }

    /// Creates a decode error for `file`.
    pub fn decode(file: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Decode {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Attaches the offending identifier to a fatal error.
    pub fn with_identifier(mut self, id: impl Into<String>) -> Self {
        if let Error::Fatal { identifier, .. } = &mut self {
            *identifier = Some(id.into());
        }
        self
    }

    /// Attaches the offending language to a fatal error.
    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        if let Error::Fatal { language, .. } = &mut self {
            *language = Some(lang.into());
        }
        self
    }

    /// Attaches the offending file to a fatal error.
    pub fn with_file(mut self, name: impl Into<String>) -> Self {
        if let Error::Fatal { file, .. } = &mut self {
            *file = Some(name.into());
        }
        self
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> FatalErrorKind {
        match self {
            Error::Io(_) | Error::Decode { .. } | Error::InvalidOptions(_) => {
                FatalErrorKind::Structural
            }
            Error::Fatal { kind, .. } => *kind,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Error::Fatal { identifier, .. } => identifier.as_deref(),
            _ => None,
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            Error::Fatal { language, .. } => language.as_deref(),
            _ => None,
        }
    }

    pub fn file(&self) -> Option<&str> {
        match self {
            Error::Decode { file, .. } => Some(file),
            Error::Fatal { file, .. } => file.as_deref(),
            _ => None,
        }
    }
}
