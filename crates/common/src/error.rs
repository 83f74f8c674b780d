//! Error types shared across modshot crates.

use std::path::PathBuf;

/// Top-level error type for modshot operations.
#[derive(Debug, thiserror::Error)]
pub enum ModshotError {
    #[error("Configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Font error: {message}")]
    Font { message: String },

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode image {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Cannot write output {path}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Directory error at {path}: {source}")]
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ModshotError.
pub type ModshotResult<T> = Result<T, ModshotError>;

impl ModshotError {
    pub fn config(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font {
            message: msg.into(),
        }
    }

    /// Whether this error must abort the whole run rather than a single job.
    /// Decode failures stay local to their job; output-side failures do not.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Encode { .. } | Self::Output { .. } | Self::Directory { .. } | Self::Font { .. }
        )
    }

    /// The file this error is about, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Config { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Output { path, .. }
            | Self::Directory { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_errors_are_job_local() {
        let err = ModshotError::Decode {
            path: PathBuf::from("inputs/foo1.png"),
            source: image::ImageError::IoError(std::io::Error::other("truncated")),
        };
        assert!(!err.is_fatal());
        assert_eq!(err.path(), Some(std::path::Path::new("inputs/foo1.png")));
        assert!(err.to_string().contains("inputs/foo1.png"));
    }

    #[test]
    fn test_output_errors_are_fatal() {
        let err = ModshotError::Output {
            path: PathBuf::from("outputs/foo1.png"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.is_fatal());
    }

    #[test]
    fn test_config_error_names_file() {
        let err = ModshotError::config("Screenshots.yaml", "expected a mapping");
        assert_eq!(
            err.to_string(),
            "Configuration error in Screenshots.yaml: expected a mapping"
        );
        assert!(!err.is_fatal());
    }
}
