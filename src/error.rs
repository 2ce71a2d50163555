//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    /// A required input path does not exist.
    MissingInput(PathBuf),
    /// A split ratio outside of `[0, 1]`.
    InvalidRatio {
        name: &'static str,
        value: f64,
    },
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Csv(e) => write!(f, "tsv error: {e}"),
            Error::Serde(e) => write!(f, "json error: {e}"),
            Error::MissingInput(p) => write!(f, "input {:?} does not exist", p),
            Error::InvalidRatio { name, value } => {
                write!(f, "{name} must be within [0, 1], got {value}")
            }
            Error::Custom(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
