//! Error types shared by the client bootstrap and the preference store.

/// Preference store errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Preference storage is not available")]
    Unavailable,

    #[error("Preference write failed: {0}")]
    Write(String),

    #[error("Preference storage lock poisoned")]
    Poisoned,
}

/// Startup errors while attaching the app to the hosting document.
///
/// All of them are fatal: without a mount target nothing can be shown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("Hosting document is not available")]
    NoDocument,

    #[error("Mount target #{0} not found in the hosting document")]
    MissingTarget(&'static str),

    #[error("Mount target #{0} is not an HTML element")]
    NotAnElement(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_messages() {
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "Preference storage is not available"
        );
        assert_eq!(
            StorageError::Write("QuotaExceededError".to_string()).to_string(),
            "Preference write failed: QuotaExceededError"
        );
    }

    #[test]
    fn test_mount_error_names_target() {
        let err = MountError::MissingTarget("root");
        assert_eq!(
            err.to_string(),
            "Mount target #root not found in the hosting document"
        );
    }
}
