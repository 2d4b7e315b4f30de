//! InstrumentedDictionary: drop-in replacement that names failing keys
//!
//! Each hooked call runs the real [`Dictionary`] operation first, then hands
//! the outcome to [`augment::finalize`]. Instantiations outside the installed
//! table behave exactly like the bare dictionary.

use crate::accessor::FieldAccessor;
use crate::augment;
use crate::dictionary::Dictionary;
use crate::error::{ContainerError, KvError};
use crate::install::Instrumentation;
use crate::targets::OperationKind;
use std::fmt::Display;
use std::hash::Hash;
use tracing::error;

/// A [`Dictionary`] behind installed key-reporting hooks.
///
/// Built with [`Instrumentation::wrap`]. Hook coverage is resolved once, at
/// wrap time, from the immutable hook table.
#[derive(Clone, Debug)]
pub struct InstrumentedDictionary<K, V>
where
    K: Eq + Hash + Display,
{
    inner: Dictionary<K, V>,
    accessor: FieldAccessor,
    lookup_hooked: bool,
    insert_hooked: bool,
}

impl<K, V> InstrumentedDictionary<K, V>
where
    K: Eq + Hash + Display + 'static,
    V: 'static,
{
    pub fn new(inner: Dictionary<K, V>, instrumentation: &Instrumentation) -> Self {
        Self {
            inner,
            accessor: instrumentation.accessor(),
            lookup_hooked: instrumentation.covers_operation::<K, V>(OperationKind::Lookup),
            insert_hooked: instrumentation.covers_operation::<K, V>(OperationKind::Insert),
        }
    }
}

impl<K, V> InstrumentedDictionary<K, V>
where
    K: Eq + Hash + Display,
{
    /// Keyed lookup.
    ///
    /// A `KeyNotFound` failure carries `key: '<key>'` on its last line.
    ///
    /// # Panics
    ///
    /// If the installed accessor can't reach the error's message field.
    #[inline]
    pub fn get(&self, key: &K) -> Result<&V, ContainerError> {
        let outcome = self.inner.get(key);
        if !self.lookup_hooked || outcome.is_ok() {
            return outcome;
        }
        settle(augment::finalize(OperationKind::Lookup, key, outcome, &self.accessor))
    }

    /// Keyed insertion.
    ///
    /// A `DuplicateKey` failure carries `key: '<key>'` on its last line.
    ///
    /// # Panics
    ///
    /// If the installed accessor can't reach the error's message field.
    #[inline]
    pub fn add(&mut self, key: K, value: V) -> Result<(), ContainerError> {
        match self.inner.add_or_reject(key, value) {
            Ok(()) => Ok(()),
            Err((err, _)) if !self.insert_hooked => Err(err),
            Err((err, key)) => settle(augment::finalize(
                OperationKind::Insert,
                &key,
                Err(err),
                &self.accessor,
            )),
        }
    }

    /// Keyed lookup returning a mutable reference, hooked like [`get`](Self::get).
    ///
    /// # Panics
    ///
    /// If the installed accessor can't reach the error's message field.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, ContainerError> {
        let hooked = self.lookup_hooked;
        let accessor = self.accessor;
        let outcome = self.inner.get_mut(key);
        if !hooked || outcome.is_ok() {
            return outcome;
        }
        settle(augment::finalize(OperationKind::Lookup, key, outcome, &accessor))
    }

    /// Whether keyed lookups on this instantiation are hooked.
    pub fn lookup_hooked(&self) -> bool {
        self.lookup_hooked
    }

    /// Whether keyed insertions on this instantiation are hooked.
    pub fn insert_hooked(&self) -> bool {
        self.insert_hooked
    }

    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, ContainerError> {
        self.inner.insert(key, value)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.inner.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.inner.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.inner.iter()
    }

    /// The wrapped dictionary, without hooks.
    pub fn inner(&self) -> &Dictionary<K, V> {
        &self.inner
    }

    pub fn into_inner(self) -> Dictionary<K, V> {
        self.inner
    }
}

// A hook failure means the error's message field is unreachable. Fatal.
fn settle<T>(hooked: Result<Result<T, ContainerError>, KvError>) -> Result<T, ContainerError> {
    hooked.unwrap_or_else(|fatal| {
        error!(error = %fatal, "dictionary key reporting failed");
        panic!("{}", fatal)
    })
}
