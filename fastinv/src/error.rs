//! Contains the Error and Result type used by the converter.
use std::fmt::Display;

/// Various errors that can occur while converting a player's NBT.
#[derive(Debug)]
pub enum Error {
    /// A tag the conversion relies on was absent.
    MissingField(String),
    /// A tag was present but held a different NBT kind.
    WrongType {
        field: String,
        expected: &'static str,
    },
    /// An index fell outside one of the fixed lookup tables.
    OutOfRange { table: &'static str, index: i64 },
    /// A dimension id with no known world suffix.
    UnknownDimension(String),
    Nbt(fastnbt::error::Error),
    Base64(base64::DecodeError),
    IO(std::io::Error),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn missing(field: &str) -> Error {
        Error::MissingField(field.to_owned())
    }

    pub(crate) fn wrong_type(field: &str, expected: &'static str) -> Error {
        Error::WrongType {
            field: field.to_owned(),
            expected,
        }
    }

    pub(crate) fn out_of_range(table: &'static str, index: i64) -> Error {
        Error::OutOfRange { table, index }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IO(err)
    }
}

impl From<fastnbt::error::Error> for Error {
    fn from(err: fastnbt::error::Error) -> Error {
        Error::Nbt(err)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Error {
        Error::Base64(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingField(field) => write!(f, "malformed input: missing tag {}", field),
            Error::WrongType { field, expected } => {
                write!(f, "malformed input: tag {} is not {}", field, expected)
            }
            Error::OutOfRange { table, index } => {
                write!(f, "malformed input: {} index {} out of range", table, index)
            }
            Error::UnknownDimension(dim) => write!(f, "unknown dimension: {}", dim),
            Error::Nbt(e) => write!(f, "nbt error: {}", e),
            Error::Base64(e) => write!(f, "base64 error: {}", e),
            Error::IO(e) => f.write_fmt(format_args!("io error: {:?}", e)),
        }
    }
}

impl std::error::Error for Error {}
