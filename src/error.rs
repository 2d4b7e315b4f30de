use thiserror::Error;

/// Failures of the instrumentation itself.
///
/// Every variant signals that the container surface or the error layout no
/// longer matches what the instrumentation was built against. None of them is
/// recoverable: callers are expected to abort startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KvError {
    #[error("Can't find method {method} to patch.")]
    Installation { method: String },

    #[error("Method {method} is already patched")]
    AlreadyInstalled { method: String },

    #[error("Can't access field '{field}' on {type_name}")]
    Access {
        field: &'static str,
        type_name: &'static str,
    },
}

/// What went wrong inside a [`Dictionary`](crate::Dictionary) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Keyed lookup for a key that isn't present.
    KeyNotFound,
    /// Keyed insertion for a key that is already present.
    DuplicateKey,
    /// Insertion into a dictionary that reached its capacity limit.
    CapacityExceeded,
}

/// Error raised by the dictionary.
///
/// The message has no public setter; only a
/// [`FieldAccessor`](crate::FieldAccessor) can rewrite it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ContainerError {
    kind: ErrorKind,
    pub(crate) message: String,
}

impl ContainerError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn key_not_found<K: std::fmt::Display + ?Sized>(key: &K) -> Self {
        Self::new(
            ErrorKind::KeyNotFound,
            format!("The given key '{}' was not present in the dictionary.", key),
        )
    }

    pub(crate) fn duplicate_key() -> Self {
        Self::new(
            ErrorKind::DuplicateKey,
            "An item with the same key has already been added.",
        )
    }

    pub(crate) fn capacity_exceeded(limit: usize) -> Self {
        Self::new(
            ErrorKind::CapacityExceeded,
            format!("The dictionary has reached its capacity of {} entries.", limit),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = ContainerError::key_not_found(&5);
        assert_eq!(
            err.to_string(),
            "The given key '5' was not present in the dictionary."
        );
        assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    }

    #[test]
    fn test_installation_message() {
        let err = KvError::Installation {
            method: "Dictionary<i32, String>::get".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Can't find method Dictionary<i32, String>::get to patch."
        );
    }
}
