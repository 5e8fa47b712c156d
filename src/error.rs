use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io, result,
};

/// Wrapped result type for packet number operations.
pub type Result<T> = result::Result<T, ErrorKind>;

#[derive(Debug)]
/// Enum with all possible errors that could occur when working with packet numbers.
pub enum ErrorKind {
    /// Error in decoding a packet number related field.
    DecodingError(DecodingErrorKind),
    /// Could not read the header field with the given name, there were not enough bytes.
    CouldNotReadHeader(String),
    /// The secure random source could not produce bytes.
    EntropyUnavailable(rand::Error),
    /// Wrapper around a std io::error
    IOError(io::Error),
}

impl Display for ErrorKind {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::DecodingError(e) => write!(
                fmt,
                "Something went wrong with parsing the header. Reason: {:?}.",
                e
            ),
            ErrorKind::CouldNotReadHeader(header) => write!(
                fmt,
                "Expected {} header but could not be read from buffer.",
                header
            ),
            ErrorKind::EntropyUnavailable(e) => write!(
                fmt,
                "Secure randomness is unavailable. Reason: {}.",
                e
            ),
            ErrorKind::IOError(e) => write!(fmt, "An IO Error occurred. Reason: {:?}.", e),
        }
    }
}

impl Error for ErrorKind {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ErrorKind::EntropyUnavailable(e) => Some(e),
            ErrorKind::IOError(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Errors that could occur while decoding a packet number related field.
pub enum DecodingErrorKind {
    /// The packet number length was outside of `1..=4` bytes.
    PacketNumberLen(u8),
}

impl Display for DecodingErrorKind {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            DecodingErrorKind::PacketNumberLen(len) => {
                write!(fmt, "invalid packet number length {}", len)
            }
        }
    }
}

impl From<io::Error> for ErrorKind {
    fn from(inner: io::Error) -> ErrorKind {
        ErrorKind::IOError(inner)
    }
}

impl From<rand::Error> for ErrorKind {
    fn from(inner: rand::Error) -> ErrorKind {
        ErrorKind::EntropyUnavailable(inner)
    }
}

impl From<DecodingErrorKind> for ErrorKind {
    fn from(inner: DecodingErrorKind) -> Self {
        ErrorKind::DecodingError(inner)
    }
}
