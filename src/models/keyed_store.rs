//! Unhashed keyed storage backed by a growable array of pairs.
//!
//! `KeyedStore` is the container behind every category and behind the board's
//! category table. Lookup is a linear scan over a dense slot array, which keeps
//! iteration order equal to insertion order until the first removal.

use std::borrow::Borrow;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;

/// Number of slots allocated by a fresh store.
pub const DEFAULT_CAPACITY: usize = 16;

/// Errors raised by [`KeyedStore`] lookups and inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The key was the empty/none sentinel, which can never be stored.
    #[error("invalid key: blank keys cannot be stored or looked up")]
    InvalidKey,
    /// The key is not present in the store.
    #[error("key not found")]
    KeyNotFound,
}

/// Keys usable in a [`KeyedStore`].
///
/// A blank key is the sentinel value for the key type (an empty string, an
/// empty path, `None`). Blank keys are rejected by `set`/`get` and never match
/// in `has_key`/`remove`.
pub trait StoreKey {
    /// Returns true if this key is the sentinel value.
    fn is_blank(&self) -> bool {
        false
    }
}

impl StoreKey for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl StoreKey for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl StoreKey for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl StoreKey for Path {
    fn is_blank(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl StoreKey for PathBuf {
    fn is_blank(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl<T: StoreKey> StoreKey for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, StoreKey::is_blank)
    }
}

macro_rules! never_blank {
    ($($ty:ty),*) => {
        $(impl StoreKey for $ty {})*
    };
}

never_blank!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char);

/// A single key/value slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvEntry<K, V> {
    /// The entry key, unique within its store
    pub key: K,
    /// The value stored under `key`
    pub value: V,
}

/// Growable array of unique-key/value pairs with linear-scan lookup.
///
/// # Ordering
///
/// Entries iterate in insertion order until something is removed. `remove`
/// moves the last entry into the vacated slot, so callers must not depend on
/// order once any removal has happened.
///
/// # Capacity
///
/// A fresh store holds [`DEFAULT_CAPACITY`] slots and doubles whenever an
/// insert would overflow them.
#[derive(Debug)]
pub struct KeyedStore<K, V> {
    slots: Vec<KvEntry<K, V>>,
}

impl<K, V> KeyedStore<K, V>
where
    K: StoreKey + PartialEq,
{
    /// Creates an empty store with the default capacity.
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Associates `value` with `key`.
    ///
    /// An existing key is updated in place without moving; a new key is
    /// appended after growing the backing array if it is full.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] for a blank key.
    pub fn set(&mut self, key: K, value: V) -> Result<(), StoreError> {
        if key.is_blank() {
            return Err(StoreError::InvalidKey);
        }

        if let Some(idx) = self.find(&key) {
            self.slots[idx].value = value;
            return Ok(());
        }

        if self.slots.len() == self.slots.capacity() {
            self.grow();
        }
        self.slots.push(KvEntry { key, value });
        Ok(())
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidKey`] for a blank key (checked before searching)
    /// - [`StoreError::KeyNotFound`] if the key is absent
    pub fn get<Q>(&self, key: &Q) -> Result<&V, StoreError>
    where
        K: Borrow<Q>,
        Q: StoreKey + PartialEq + ?Sized,
    {
        if key.is_blank() {
            return Err(StoreError::InvalidKey);
        }
        self.find(key)
            .map(|idx| &self.slots[idx].value)
            .ok_or(StoreError::KeyNotFound)
    }

    /// Mutable counterpart of [`KeyedStore::get`].
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, StoreError>
    where
        K: Borrow<Q>,
        Q: StoreKey + PartialEq + ?Sized,
    {
        if key.is_blank() {
            return Err(StoreError::InvalidKey);
        }
        match self.find(key) {
            Some(idx) => Ok(&mut self.slots[idx].value),
            None => Err(StoreError::KeyNotFound),
        }
    }

    /// Returns true if `key` is stored. Blank keys are never present.
    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: StoreKey + PartialEq + ?Sized,
    {
        !key.is_blank() && self.find(key).is_some()
    }

    /// Removes `key` and returns its value, or `None` if it was absent.
    ///
    /// The last entry takes the removed entry's slot.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: StoreKey + PartialEq + ?Sized,
    {
        if key.is_blank() {
            return None;
        }
        let idx = self.find(key)?;
        Some(self.slots.swap_remove(idx).value)
    }

    /// Index of the slot holding `key`, if any.
    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.slots.iter().position(|slot| slot.key.borrow() == key)
    }

    fn grow(&mut self) {
        let additional = self.slots.capacity().max(1);
        self.slots.reserve_exact(additional);
        trace!(capacity = self.slots.capacity(), "keyed store grew");
    }
}

impl<K, V> KeyedStore<K, V> {
    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Iterates over live entries in storage order.
    ///
    /// Calling this again restarts from the first slot.
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries {
            inner: self.slots.iter(),
        }
    }

    /// Iterates over keys in storage order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.slots.iter().map(|slot| &slot.key)
    }

    /// Iterates over values in storage order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.slots.iter().map(|slot| &slot.value)
    }
}

impl<K, V> Default for KeyedStore<K, V>
where
    K: StoreKey + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for KeyedStore<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        let mut capacity = DEFAULT_CAPACITY;
        while capacity < self.slots.len() {
            capacity *= 2;
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.extend(self.slots.iter().cloned());
        Self { slots }
    }
}

/// Iterator over the `(key, value)` pairs of a [`KeyedStore`].
#[derive(Debug, Clone)]
pub struct Entries<'a, K, V> {
    inner: std::slice::Iter<'a, KvEntry<K, V>>,
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| (&slot.key, &slot.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a KeyedStore<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Entries<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
