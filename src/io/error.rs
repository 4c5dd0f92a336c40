//! Error types and context management for map generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all map generation operations
#[derive(Debug)]
pub enum MapError {
    /// A geometric precondition was violated by the caller
    ///
    /// Raised for boundaries with repeated points passed to segment matching,
    /// merges that do not find exactly one proper common segment, and merges
    /// between boundaries of different orientations. These are programming
    /// errors: the operation is aborted and the boundary is left untouched.
    InvariantViolation {
        /// Operation that detected the violation
        operation: &'static str,
        /// Description of the violated precondition
        reason: String,
    },

    /// Failed to read a tileset description file
    TilesetLoad {
        /// Path to the tileset file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Tileset description is not valid JSON or does not have the expected shape
    TilesetParse {
        /// Path to the tileset file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Tileset description is well-formed but describes unusable tiles
    InvalidTileset {
        /// Path to the tileset file
        path: PathBuf,
        /// Explanation of what is wrong with the tileset
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the rendered map to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Invariant violated in {operation}: {reason}")
            }
            Self::TilesetLoad { path, source } => {
                write!(f, "Failed to load tileset '{}': {source}", path.display())
            }
            Self::TilesetParse { path, source } => {
                write!(f, "Failed to parse tileset '{}': {source}", path.display())
            }
            Self::InvalidTileset { path, reason } => {
                write!(f, "Invalid tileset '{}': {reason}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TilesetLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::TilesetParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::InvariantViolation { .. }
            | Self::InvalidTileset { .. }
            | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for map generation results
pub type Result<T> = std::result::Result<T, MapError>;

/// Tags invariant violations with the higher-level operation that triggered them
pub trait WithOperation<T> {
    /// Record `operation` as the outer operation of an invariant violation
    ///
    /// The inner operation moves to the front of the reason, so the message
    /// reads from the outermost call down to the failing primitive.
    ///
    /// # Errors
    ///
    /// Propagates the original error, wrapped when it is an invariant violation
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T> WithOperation<T> for Result<T> {
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|error| match error {
            MapError::InvariantViolation {
                operation: inner,
                reason,
            } if inner != operation => MapError::InvariantViolation {
                operation,
                reason: format!("{inner}: {reason}"),
            },
            other => other,
        })
    }
}

/// Create an invariant violation error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> MapError {
    MapError::InvariantViolation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapError {
    MapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
