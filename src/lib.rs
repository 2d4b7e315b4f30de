//! # keyed-kv
//!
//! A generic **key-value dictionary** whose lookup and insert failures name the
//! key that caused them.
//!
//! ## Features
//!
//! - **Key-reporting failures** - `KeyNotFound` and `DuplicateKey` messages gain a
//!   `key: '<key>'` line
//! - **Unchanged errors** - same error value, same kind, only the message grows
//! - **Closed target set** - `i32`/`String` keys over `i32`, `String` and the
//!   content records; every other instantiation is left alone
//! - **All-or-nothing install** - a missing operation fails startup
//! - **Zero-cost success path** - hooks only look at failures
//!
//! ## Quick Start
//!
//! ```rust
//! use keyed_kv::{Dictionary, ErrorKind};
//!
//! let instrumentation = keyed_kv::install().unwrap();
//!
//! let mut names = instrumentation.wrap(Dictionary::<i32, String>::new());
//! names.add(1, "Abigail".to_string()).unwrap();
//!
//! let err = names.get(&5).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::KeyNotFound);
//! assert_eq!(
//!     err.to_string(),
//!     "The given key '5' was not present in the dictionary.\nkey: '5'"
//! );
//!
//! let err = names.add(1, "Alex".to_string()).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "An item with the same key has already been added.\nkey: '1'"
//! );
//! ```

pub mod accessor;
pub mod augment;
pub mod dictionary;
pub mod error;
pub mod install;
pub mod instrumented;
pub mod records;
pub mod targets;

pub use accessor::{FieldAccessor, FieldHost};
pub use dictionary::{Dictionary, DictionaryBuilder};
pub use error::{ContainerError, ErrorKind, KvError};
pub use install::{ContainerSurface, DictionarySurface, Installer, Instrumentation};
pub use instrumented::InstrumentedDictionary;
pub use records::{HomeRenovation, MovieData, SpecialOrderData};
pub use targets::{InterceptionPoint, OperationKind, TargetInstantiation};

/// Install key reporting for every enumerated dictionary instantiation.
///
/// Call once during startup and hand the returned [`Instrumentation`] to
/// whatever builds dictionaries.
///
/// # Errors
///
/// [`KvError::Installation`] if a dictionary operation can't be located.
pub fn install() -> Result<Instrumentation, KvError> {
    Installer::new(FieldAccessor::message()).install(&DictionarySurface::host())
}
