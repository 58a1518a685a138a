use crate::types::{ExchangeCode, FieldName, TickerSymbol};
use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    MissingField(FieldName),
    SchemaMismatch(String),
    UnknownExchangeCode(ExchangeCode),
    MalformedTicker(TickerSymbol),
    IoError(std::io::Error),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::MissingField(field) => write!(f, "Missing Field: \"{}\"", field),
            Error::SchemaMismatch(msg) => write!(f, "Schema Mismatch: {}", msg),
            Error::UnknownExchangeCode(code) => {
                write!(f, "Unknown Exchange Code: \"{}\"", code)
            }
            Error::MalformedTicker(ticker) => write!(f, "Malformed Ticker: \"{}\"", ticker),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io_err) => Error::IoError(io_err),
                other => Error::Other(format!("{:?}", other)),
            }
        } else {
            Error::ParserError(err.to_string())
        }
    }
}
