use std::fmt;

/// Errors from the key-value store or payload encoding.
///
/// None of these are fatal; the session logs them and keeps playing.
#[derive(Debug)]
pub enum PersistError {
    /// No store is reachable (no `localStorage`, unreadable data dir, ...)
    Unavailable(String),
    /// The store refused the write
    QuotaExceeded(String),
    /// File-backed store I/O failure
    Io(std::io::Error),
    /// Payload could not be serialized
    Encode(String),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Unavailable(msg) => write!(f, "Storage unavailable: {msg}"),
            PersistError::QuotaExceeded(msg) => write!(f, "Storage write rejected: {msg}"),
            PersistError::Io(e) => write!(f, "I/O error: {e}"),
            PersistError::Encode(msg) => write!(f, "Encoding error: {msg}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(e: std::io::Error) -> Self {
        PersistError::Io(e)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(e: serde_json::Error) -> Self {
        PersistError::Encode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let err = PersistError::Unavailable("no window".into());
        assert_eq!(err.to_string(), "Storage unavailable: no window");

        let err = PersistError::QuotaExceeded("full".into());
        assert_eq!(err.to_string(), "Storage write rejected: full");
    }

    #[test]
    fn test_io_error_has_source() {
        let err: PersistError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.to_string().contains("denied"));
        assert!(err.source().is_some());
    }
}
