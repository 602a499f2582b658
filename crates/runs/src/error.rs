//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;

use reqwest::StatusCode;

/// The result type that uses [DataLoadError] as the error type.
pub type Result<T> = std::result::Result<T, DataLoadError>;

/// The error type for loading the benchmark history document.
#[derive(Debug)]
pub enum DataLoadError {
    /// A [reqwest::Error] encountered while sending the request or
    /// reading the response body.
    Http(reqwest::Error),

    /// The server answered with a status code outside of the 2xx range.
    Response {
        /// The status code of the response.
        status_code: StatusCode,
        /// The response body.
        message: String,
    },

    /// A [std::io::Error] encountered while reading the document from disk.
    Io(io::Error),

    /// A [serde_json::Error] encountered while parsing the document.
    Json(serde_json::Error),
}

impl Display for DataLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let load_error = "data load error:";

        match self {
            DataLoadError::Http(error) => write!(f, "{load_error} HTTP request error: {error}"),
            DataLoadError::Response {
                status_code,
                message,
            } => write!(
                f,
                "{load_error} HTTP response error: status = {status_code}, message = {message}"
            ),
            DataLoadError::Io(error) => write!(f, "{load_error} I/O error: {error}"),
            DataLoadError::Json(error) => write!(f, "{load_error} invalid JSON document: {error}"),
        }
    }
}

impl Error for DataLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DataLoadError::Http(error) => Some(error),
            DataLoadError::Response { .. } => None,
            DataLoadError::Io(error) => Some(error),
            DataLoadError::Json(error) => Some(error),
        }
    }
}

impl From<reqwest::Error> for DataLoadError {
    fn from(error: reqwest::Error) -> Self {
        DataLoadError::Http(error)
    }
}

impl From<io::Error> for DataLoadError {
    fn from(error: io::Error) -> Self {
        DataLoadError::Io(error)
    }
}

impl From<serde_json::Error> for DataLoadError {
    fn from(error: serde_json::Error) -> Self {
        DataLoadError::Json(error)
    }
}
