use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Maps a failure to open `path` onto the matching error kind.
    pub fn from_open(path: &str, err: &std::io::Error) -> Self {
        let error_impl = if err.kind() == std::io::ErrorKind::NotFound {
            ErrorImpl::FileNotFound {
                path: path.to_string(),
            }
        } else {
            ErrorImpl::OpenFailed {
                path: path.to_string(),
                message: err.to_string(),
            }
        };

        Error::new(error_impl, Position(0, Rc::new(path.to_string())))
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::Io { .. } => "Io",
            ErrorImpl::InvalidUtf8 { .. } => "InvalidUtf8",
            ErrorImpl::FileNotFound { .. } => "FileNotFound",
            ErrorImpl::OpenFailed { .. } => "OpenFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::Io { .. } => ErrorTip::None,
            ErrorImpl::InvalidUtf8 { bytes } => ErrorTip::Suggestion(format!(
                "Invalid UTF-8 sequence {:02x?}, is the file saved as UTF-8?",
                bytes
            )),
            ErrorImpl::FileNotFound { path } => {
                ErrorTip::Suggestion(format!("No file at `{}`", path))
            }
            ErrorImpl::OpenFailed { path, message } => {
                ErrorTip::Suggestion(format!("Could not open `{}`: {}", path, message))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("error reading input: {message}")]
    Io { message: String },
    #[error("invalid utf-8 sequence: {bytes:02x?}")]
    InvalidUtf8 { bytes: Vec<u8> },
    #[error("file {path:?} not found")]
    FileNotFound { path: String },
    #[error("could not open {path:?}: {message}")]
    OpenFailed { path: String, message: String },
}
