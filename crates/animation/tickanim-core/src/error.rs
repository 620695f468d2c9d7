//! Error types for the animation core

use serde::{Deserialize, Serialize};

/// Every failure the engine can report.
///
/// None of these are fatal: the engine degrades each of them to a no-op and a
/// log line, so a malformed animation never halts the tick loop.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimError {
    /// Descriptor cannot be admitted (e.g. it carries no setter)
    #[error("Invalid animation descriptor: {reason}")]
    InvalidDescriptor { reason: String },

    /// No path is registered under this name
    #[error("Invalid path name: {name}")]
    InvalidPathName { name: String },

    /// The registry already holds `max_records` animations
    #[error("Animation registry full ({capacity} records)")]
    RegistryFull { capacity: usize },

    /// Engine or animation configuration is unusable
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl AnimError {
    /// Build an `InvalidDescriptor` error
    #[inline]
    pub fn invalid_descriptor(reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            reason: reason.into(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidDescriptor { .. } | Self::RegistryFull { .. } => "admission",
            Self::InvalidPathName { .. } => "path",
            Self::InvalidConfig { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for AnimError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            AnimError::invalid_descriptor("no setter").category(),
            "admission"
        );
        assert_eq!(AnimError::RegistryFull { capacity: 4 }.category(), "admission");
        assert_eq!(
            AnimError::InvalidPathName {
                name: "bounce".into()
            }
            .category(),
            "path"
        );
    }

    #[test]
    fn test_display() {
        let err = AnimError::InvalidPathName {
            name: "bounce".into(),
        };
        assert_eq!(err.to_string(), "Invalid path name: bounce");
    }

    #[test]
    fn test_serialization() {
        let error = AnimError::invalid_descriptor("test");
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: AnimError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(AnimError::from(err), AnimError::InvalidConfig { .. }));
    }
}
