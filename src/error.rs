use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Main error type for create-order-patch
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        source: FromUtf8Error,
        path: PathBuf,
    },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("create_order pattern not found in {}", .path.display())]
    NoMatch { path: PathBuf },

    #[error("Invalid config file {}: {message}", .path.display())]
    Config { message: String, path: PathBuf },
}

impl PatchError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new decoding error
    pub fn decode_error(err: FromUtf8Error, path: impl Into<PathBuf>) -> Self {
        Self::Decode {
            source: err,
            path: path.into(),
        }
    }

    pub fn no_match(path: impl Into<PathBuf>) -> Self {
        Self::NoMatch { path: path.into() }
    }

    /// Create a new config error
    pub fn config_error(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Whether the error came from the filesystem
    pub fn is_io(&self) -> bool {
        matches!(self, PatchError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_mentions_path() {
        let err = PatchError::io_error(
            io::Error::new(io::ErrorKind::NotFound, "missing"),
            "services/database_service.py",
        );
        assert!(err.is_io());
        let message = err.to_string();
        assert!(message.contains("services/database_service.py"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_decode_error_is_not_io() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = PatchError::decode_error(utf8_err, "bad.py");
        assert!(!err.is_io());
        assert!(err.to_string().starts_with("bad.py is not valid UTF-8"));
    }
}
