//! Failure classification and key augmentation
//!
//! Runs after a hooked operation returns. Only the failure each operation
//! raises for its own key (see [`OperationKind::keyed_failure`]) is touched:
//! its message gets a `key: '<key>'` line appended, its kind is kept. Success
//! and every other failure pass through as-is.

use crate::accessor::FieldAccessor;
use crate::error::{ContainerError, KvError};
use crate::targets::OperationKind;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Augment,
    PassThrough,
}

pub fn classify(operation: OperationKind, error: &ContainerError) -> Verdict {
    if error.kind() == operation.keyed_failure() {
        Verdict::Augment
    } else {
        Verdict::PassThrough
    }
}

/// `"<message>\nkey: '<key>'"`
pub fn append_key<K: Display + ?Sized>(message: &str, key: &K) -> String {
    format!("{}\nkey: '{}'", message, key)
}

/// Rewrite the message of `error` in place to name `key`.
///
/// # Errors
///
/// [`KvError::Access`] if `accessor` doesn't address a field of `error`.
pub fn augment<K: Display + ?Sized>(
    error: &mut ContainerError,
    key: &K,
    accessor: &FieldAccessor,
) -> Result<(), KvError> {
    let message = append_key(accessor.read(&*error)?, key);
    accessor.write(error, message)
}

/// Post-call hook: classify the outcome of `operation` and augment it if it
/// failed for `key`.
///
/// The outer `Result` is the hook's own failure; the inner one is what the
/// caller of the hooked operation observes.
pub fn finalize<T, K: Display + ?Sized>(
    operation: OperationKind,
    key: &K,
    outcome: Result<T, ContainerError>,
    accessor: &FieldAccessor,
) -> Result<Result<T, ContainerError>, KvError> {
    match outcome {
        Ok(value) => Ok(Ok(value)),
        Err(mut error) => {
            if classify(operation, &error) == Verdict::Augment {
                augment(&mut error, key, accessor)?;
            }
            Ok(Err(error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_classify() {
        let not_found = ContainerError::key_not_found(&1);
        let duplicate = ContainerError::duplicate_key();
        let full = ContainerError::capacity_exceeded(4);

        assert_eq!(classify(OperationKind::Lookup, &not_found), Verdict::Augment);
        assert_eq!(classify(OperationKind::Lookup, &duplicate), Verdict::PassThrough);
        assert_eq!(classify(OperationKind::Insert, &duplicate), Verdict::Augment);
        assert_eq!(classify(OperationKind::Insert, &not_found), Verdict::PassThrough);
        assert_eq!(classify(OperationKind::Insert, &full), Verdict::PassThrough);
    }

    #[test]
    fn test_append_key() {
        assert_eq!(append_key("boom", &5), "boom\nkey: '5'");
        assert_eq!(append_key("boom", "gold"), "boom\nkey: 'gold'");
        assert_eq!(append_key("boom", ""), "boom\nkey: ''");
    }

    #[test]
    fn test_finalize_augments_keyed_failure() {
        let outcome: Result<(), _> = Err(ContainerError::duplicate_key());
        let err = finalize(OperationKind::Insert, "gold", outcome, &FieldAccessor::message())
            .unwrap()
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        assert_eq!(
            err.message(),
            "An item with the same key has already been added.\nkey: 'gold'"
        );
    }

    #[test]
    fn test_finalize_passes_success_through() {
        let outcome: Result<i32, ContainerError> = Ok(42);
        let result = finalize(OperationKind::Lookup, &7, outcome, &FieldAccessor::message());
        assert_eq!(result, Ok(Ok(42)));
    }

    #[test]
    fn test_finalize_passes_other_kinds_through() {
        let original = ContainerError::capacity_exceeded(1);
        let outcome: Result<(), _> = Err(original.clone());
        let err = finalize(OperationKind::Insert, &3, outcome, &FieldAccessor::message())
            .unwrap()
            .unwrap_err();
        assert_eq!(err, original);
    }

    #[test]
    fn test_finalize_success_ignores_broken_accessor() {
        let outcome: Result<i32, ContainerError> = Ok(1);
        let result = finalize(OperationKind::Lookup, &1, outcome, &FieldAccessor::new("_message"));
        assert_eq!(result, Ok(Ok(1)));
    }

    #[test]
    fn test_finalize_reports_missing_field() {
        let outcome: Result<i32, _> = Err(ContainerError::key_not_found(&9));
        let result = finalize(OperationKind::Lookup, &9, outcome, &FieldAccessor::new("_message"));
        assert!(matches!(result, Err(KvError::Access { .. })));
    }
}
