//! Dictionary: the generic keyed container
//!
//! Keyed lookups and insertions fail with a [`ContainerError`] whose message is
//! fixed by the container. Wrap a dictionary with
//! [`Instrumentation::wrap`](crate::Instrumentation::wrap) to get the failing
//! key appended to those messages.

use crate::error::ContainerError;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Generic associative container.
///
/// Generic Parameters:
/// - `K`: Key type (hashable, and displayable so failures can name it)
/// - `V`: Value type (unconstrained)
#[derive(Clone, Debug, PartialEq)]
pub struct Dictionary<K, V>
where
    K: Eq + Hash + Display,
{
    entries: HashMap<K, V>,
    capacity_limit: Option<usize>,
}

impl<K, V> Dictionary<K, V>
where
    K: Eq + Hash + Display,
{
    /// Create an empty dictionary with no capacity limit.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            capacity_limit: None,
        }
    }

    /// Create an empty dictionary that refuses new keys once it holds `limit` entries.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity_limit: Some(limit),
        }
    }

    /// Build a dictionary by adding every entry in order.
    ///
    /// Fails with `DuplicateKey` on the first repeated key, the same way
    /// [`add`](Self::add) does.
    pub fn from_entries<I>(iter: I) -> Result<Self, ContainerError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut dictionary = Self::new();
        for (key, value) in iter {
            dictionary.add(key, value)?;
        }
        Ok(dictionary)
    }

    /// Keyed lookup.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` when `key` isn't present.
    #[inline]
    pub fn get(&self, key: &K) -> Result<&V, ContainerError> {
        self.entries
            .get(key)
            .ok_or_else(|| ContainerError::key_not_found(key))
    }

    /// Keyed lookup returning a mutable reference.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, ContainerError> {
        match self.entries.get_mut(key) {
            Some(value) => Ok(value),
            None => Err(ContainerError::key_not_found(key)),
        }
    }

    /// Keyed insertion of a new key.
    ///
    /// # Errors
    ///
    /// - `DuplicateKey` when `key` is already present
    /// - `CapacityExceeded` when the capacity limit has been reached
    #[inline]
    pub fn add(&mut self, key: K, value: V) -> Result<(), ContainerError> {
        self.add_or_reject(key, value).map_err(|(err, _)| err)
    }

    /// Same as [`add`](Self::add), but a rejected key is handed back with the error.
    pub(crate) fn add_or_reject(&mut self, key: K, value: V) -> Result<(), (ContainerError, K)> {
        if self.entries.contains_key(&key) {
            return Err((ContainerError::duplicate_key(), key));
        }
        if self.is_full() {
            let limit = self.capacity_limit.unwrap_or_default();
            return Err((ContainerError::capacity_exceeded(limit), key));
        }

        self.entries.insert(key, value);
        Ok(())
    }

    /// Insert or overwrite, returning the previous value.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` when `key` is new and the capacity limit has been reached.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, ContainerError> {
        if !self.entries.contains_key(&key) && self.is_full() {
            let limit = self.capacity_limit.unwrap_or_default();
            return Err(ContainerError::capacity_exceeded(limit));
        }
        Ok(self.entries.insert(key, value))
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of key-value pairs in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// Returns an iterator over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Returns an iterator over all values.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Returns an iterator over all key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    fn is_full(&self) -> bool {
        self.capacity_limit
            .is_some_and(|limit| self.entries.len() >= limit)
    }
}

impl<K, V> Default for Dictionary<K, V>
where
    K: Eq + Hash + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Dictionary instances.
pub struct DictionaryBuilder<K, V> {
    entries: Vec<(K, V)>,
    capacity_limit: Option<usize>,
}

impl<K, V> DictionaryBuilder<K, V>
where
    K: Eq + Hash + Display,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            capacity_limit: None,
        }
    }

    pub fn insert(mut self, key: K, value: V) -> Self {
        self.entries.push((key, value));
        self
    }

    pub fn extend<I>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.entries.extend(iter);
        self
    }

    pub fn with_entries<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: iter.into_iter().collect(),
            capacity_limit: None,
        }
    }

    pub fn capacity_limit(mut self, limit: usize) -> Self {
        self.capacity_limit = Some(limit);
        self
    }

    /// Add every queued entry in order; a repeated key fails the build.
    pub fn build(self) -> Result<Dictionary<K, V>, ContainerError> {
        let mut dictionary = match self.capacity_limit {
            Some(limit) => Dictionary::with_capacity_limit(limit),
            None => Dictionary::new(),
        };
        for (key, value) in self.entries {
            dictionary.add(key, value)?;
        }
        Ok(dictionary)
    }
}

impl<K, V> Default for DictionaryBuilder<K, V>
where
    K: Eq + Hash + Display,
{
    fn default() -> Self {
        Self::new()
    }
}
