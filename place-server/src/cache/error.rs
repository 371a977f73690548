//! Cache error types.

use std::path::PathBuf;

/// Errors from the durable cache layer.
///
/// These never escape the resolution engine; they are logged or reported as
/// warnings.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Reading, writing or deleting a cache file failed
    #[error("cache I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cache entry could not be serialized
    #[error("failed to serialize cache entry: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CacheError::Io {
            path: PathBuf::from("/tmp/cache/abc.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "cache I/O error at /tmp/cache/abc.json: denied");
    }
}
