//! Error types for Publink
//!
//! Uses `thiserror` for library errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Publink operations
pub type PublinkResult<T> = Result<T, PublinkError>;

/// Main error type for Publink operations
#[derive(Error, Debug)]
pub enum PublinkError {
    /// Published file record carries no usable local path
    #[error("could not determine the local path of '{code}'")]
    MissingLocalPath { code: String },

    /// Path does not follow the publish directory layout
    #[error("'{path}' does not match the publish template")]
    TemplateMismatch { path: String },

    /// The `current` symlink resolves somewhere other than the version directory
    #[error(
        "symlink '{}' resolves to '{}', not '{}'",
        link.display(),
        actual.display(),
        expected.display()
    )]
    LinkTargetMismatch {
        link: PathBuf,
        actual: PathBuf,
        expected: PathBuf,
    },

    /// Tracking service returned a record this crate cannot decode
    #[error("malformed {entity} record: {source}")]
    MalformedRecord {
        entity: &'static str,
        source: serde_json::Error,
    },

    /// Tracking service query failed
    #[error("tracking query failed: {message}")]
    Tracking { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_local_path() {
        let err = PublinkError::MissingLocalPath {
            code: "hero_model.fbx".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not determine the local path of 'hero_model.fbx'"
        );
    }

    #[test]
    fn test_error_display_template_mismatch() {
        let err = PublinkError::TemplateMismatch {
            path: "/tmp/stray.fbx".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'/tmp/stray.fbx' does not match the publish template"
        );
    }

    #[test]
    fn test_error_display_link_target_mismatch() {
        let err = PublinkError::LinkTargetMismatch {
            link: PathBuf::from("/proj/show1/publish/current"),
            actual: PathBuf::from("/proj/show1/publish/v002"),
            expected: PathBuf::from("/proj/show1/publish/v003"),
        };
        assert_eq!(
            err.to_string(),
            "symlink '/proj/show1/publish/current' resolves to \
             '/proj/show1/publish/v002', not '/proj/show1/publish/v003'"
        );
    }
}
