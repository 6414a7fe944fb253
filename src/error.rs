use std::error::Error as StdError;
use std::fmt;
use std::io::Error as IoError;
use std::result::Result as StdResult;

use log::{ParseLevelError, SetLoggerError};

pub type Result<T> = StdResult<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// `next()` was called on an iterator with no unread items left
    OutOfRange { position: usize, len: usize },
    IoError(IoError),
    LogLevel(ParseLevelError),
    LoggerError(SetLoggerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfRange { position, len } => write!(
                f,
                "menu iterator exhausted: position {} is out of range for {} items",
                position, len
            ),
            Error::IoError(ref e) => write!(f, "I/O error: {}", e),
            Error::LogLevel(ref e) => write!(f, "invalid log level: {}", e),
            Error::LoggerError(ref e) => write!(f, "could not install logger: {}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::OutOfRange { .. } => None,
            Error::IoError(ref e) => Some(e),
            Error::LogLevel(ref e) => Some(e),
            Error::LoggerError(ref e) => Some(e),
        }
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::IoError(e)
    }
}

impl From<ParseLevelError> for Error {
    fn from(e: ParseLevelError) -> Self {
        Error::LogLevel(e)
    }
}

impl From<SetLoggerError> for Error {
    fn from(e: SetLoggerError) -> Self {
        Error::LoggerError(e)
    }
}
