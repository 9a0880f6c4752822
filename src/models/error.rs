use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    ReferenceListsNotLoaded,
    ReferenceListsUnavailable(String),
    UploadError(String),
    IoError(std::io::Error),
    CsvError(csv::Error),
    JsonError(serde_json::Error),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::ReferenceListsNotLoaded => write!(f, "Reference lists are still loading"),
            Error::ReferenceListsUnavailable(msg) => {
                write!(f, "Reference lists unavailable: {}", msg)
            }
            Error::UploadError(msg) => write!(f, "Upload Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(err) => write!(f, "CSV Error: {}", err),
            Error::JsonError(err) => write!(f, "JSON Error: {}", err),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::CsvError(err) => Some(err),
            Error::JsonError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::ParserError(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::ParserError(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::IoError(err.error)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(err)
    }
}
