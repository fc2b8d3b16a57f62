use crate::error::{Error, Result};
use crate::namespace::Namespace;
use crate::value::DataValue;
use std::fmt;
use std::marker::PhantomData;

/// A namespace-indexed record with one slot per vocabulary member
///
/// Slots are addressed by namespace ordinal and may be empty.
#[derive(Clone, PartialEq)]
pub struct DataRecord<K: Namespace, V> {
    slots: Box<[Option<V>]>,
    _namespace: PhantomData<K>,
}

impl<K: Namespace, V> DataRecord<K, V> {
    /// Create a record with every slot empty
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: K::VOCABULARY.iter().map(|_| None).collect(),
            _namespace: PhantomData,
        }
    }

    #[inline]
    pub fn get(&self, namespace: K) -> Option<&V> {
        self.slots[namespace.ordinal()].as_ref()
    }

    #[inline]
    pub fn contains(&self, namespace: K) -> bool {
        self.slots[namespace.ordinal()].is_some()
    }

    #[inline]
    pub fn remove(&mut self, namespace: K) -> Option<V> {
        self.slots[namespace.ordinal()].take()
    }

    /// Number of filled slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Filled slots in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        K::VOCABULARY
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(ns, slot)| slot.as_ref().map(|value| (*ns, value)))
    }
}

impl<K: Namespace, V: DataValue> DataRecord<K, V> {
    /// Store a value, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if the value's type is not the type `namespace` declares.
    pub fn put(&mut self, namespace: K, value: V) -> Option<V> {
        assert_eq!(
            namespace.value_type(),
            value.value_type(),
            "value stored under namespace '{}' does not have its declared type",
            namespace.name(),
        );
        self.slots[namespace.ordinal()].replace(value)
    }

    /// Like [`put`](Self::put) but reports a type mismatch as an error
    pub fn try_put(&mut self, namespace: K, value: V) -> Result<Option<V>> {
        if namespace.value_type() != value.value_type() {
            return Err(Error::ValueTypeMismatch {
                namespace: namespace.name().to_string(),
                expected: namespace.value_type(),
                actual: value.value_type(),
            });
        }
        Ok(self.slots[namespace.ordinal()].replace(value))
    }

    #[must_use]
    pub fn with(mut self, namespace: K, value: impl Into<V>) -> Self {
        self.put(namespace, value.into());
        self
    }
}

impl<K: Namespace, V> Default for DataRecord<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Namespace, V: fmt::Debug> fmt::Debug for DataRecord<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
