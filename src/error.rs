// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure (connection refused, TLS, timeout).
    Http(String),
    /// The API answered with a non-success status code.
    Api(u16),
    /// The response body could not be decoded into the expected schema.
    Parse(String),
    Io(String),
    Config(String),
}

impl Error {
    /// Returns the i18n message key for the toast shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Http(_) => "error-network",
            Error::Api(401 | 403) => "error-unauthorized",
            Error::Api(_) => "error-api",
            Error::Parse(_) => "error-parse",
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Api(status) => write!(f, "API Error: status {}", status),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Parse(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
