use std::fmt::{self, Display};
use std::io;
use std::string;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while parsing or stringifying a query string.
#[derive(Debug)]
pub enum Error {
    /// Parsing failed; carries the byte offset of the offending pair within
    /// the query segment.
    Parse(String, usize),
    /// The output buffer did not contain valid UTF-8.
    FromUtf8(string::FromUtf8Error),
    /// The underlying writer failed.
    Io(io::Error),
}

impl Error {
    /// Generate a parsing error message with position.
    pub fn parse_err<T>(msg: T, position: usize) -> Self
    where
        T: Display,
    {
        Error::Parse(msg.to_string(), position)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(msg, position) => {
                write!(f, "parsing failed with error: '{msg}' at position: {position}")
            }
            Error::FromUtf8(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(..) => None,
            Error::FromUtf8(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<string::FromUtf8Error> for Error {
    fn from(err: string::FromUtf8Error) -> Self {
        Error::FromUtf8(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
