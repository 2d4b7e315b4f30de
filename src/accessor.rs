//! Privileged access to named text fields of already-built values.

use crate::error::{ContainerError, KvError};

/// Name of the field holding a [`ContainerError`]'s message.
pub const MESSAGE_FIELD: &str = "message";

/// A value whose text fields can be reached by name.
pub trait FieldHost {
    /// Type name reported when a field is missing.
    fn type_name(&self) -> &'static str;

    fn text_field(&self, name: &str) -> Option<&str>;

    fn text_field_mut(&mut self, name: &str) -> Option<&mut String>;
}

impl FieldHost for ContainerError {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn text_field(&self, name: &str) -> Option<&str> {
        (name == MESSAGE_FIELD).then_some(self.message.as_str())
    }

    fn text_field_mut(&mut self, name: &str) -> Option<&mut String> {
        (name == MESSAGE_FIELD).then_some(&mut self.message)
    }
}

/// Reads and overwrites one named text field.
///
/// Holds nothing but the field name, so a single accessor can be copied into
/// every hook and shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAccessor {
    field: &'static str,
}

impl FieldAccessor {
    pub const fn new(field: &'static str) -> Self {
        Self { field }
    }

    /// Accessor for [`ContainerError`] messages.
    pub const fn message() -> Self {
        Self::new(MESSAGE_FIELD)
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// # Errors
    ///
    /// [`KvError::Access`] if `target` has no field with this name.
    pub fn read<'a, T: FieldHost + ?Sized>(&self, target: &'a T) -> Result<&'a str, KvError> {
        target.text_field(self.field).ok_or_else(|| self.missing(target))
    }

    /// # Errors
    ///
    /// [`KvError::Access`] if `target` has no field with this name.
    pub fn write<T: FieldHost + ?Sized>(&self, target: &mut T, text: String) -> Result<(), KvError> {
        let type_name = target.type_name();
        match target.text_field_mut(self.field) {
            Some(slot) => {
                *slot = text;
                Ok(())
            }
            None => Err(KvError::Access {
                field: self.field,
                type_name,
            }),
        }
    }

    fn missing<T: FieldHost + ?Sized>(&self, target: &T) -> KvError {
        KvError::Access {
            field: self.field,
            type_name: target.type_name(),
        }
    }
}

impl Default for FieldAccessor {
    fn default() -> Self {
        Self::message()
    }
}
