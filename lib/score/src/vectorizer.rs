//! Raw record to sparse vector
//!
//! A [`Vectorizer`] must be total, deterministic and free of side effects:
//! scorers rely on the same record always producing the same vector.

use crate::config::HashingConfig;
use hotvect_core::{DataRecord, Namespace, RawValue, Result, SparseVector};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use tracing::debug;
use xxhash_rust::xxh64::Xxh64;

/// Turns a raw record into a sparse vector
pub trait Vectorizer<N: Namespace>: Send + Sync {
    fn vectorize(&self, record: &DataRecord<N, RawValue>) -> SparseVector;
}

impl<N, F> Vectorizer<N> for F
where
    N: Namespace,
    F: Fn(&DataRecord<N, RawValue>) -> SparseVector + Send + Sync,
{
    fn vectorize(&self, record: &DataRecord<N, RawValue>) -> SparseVector {
        self(record)
    }
}

/// Feature-hashing vectorizer
///
/// Every feature is hashed with xxHash64 over the namespace ordinal
/// (`u32`, little endian) followed by the feature key bytes (UTF-8 for
/// strings, `u32` little endian for category ids), and the low `bits` bits
/// of the hash select the index:
///
/// - strings and category ids become an index with weight `1.0`
/// - keyed numbers become the key's index with the paired number as weight
/// - a single number gets the namespace's own index with the number as weight
///
/// Weights of colliding indices are summed, so the output has unique indices
/// in ascending order. Indices depend only on the key bytes and the seed, so
/// a model trained on one machine scores the same on another.
#[derive(Debug, Clone)]
pub struct HashingVectorizer<N> {
    config: HashingConfig,
    mask: u32,
    _namespace: PhantomData<N>,
}

impl<N: Namespace> HashingVectorizer<N> {
    pub fn new(config: HashingConfig) -> Result<Self> {
        let mask = config.mask()?;
        debug!(bits = config.bits, seed = config.seed, namespaces = N::VOCABULARY.len(), "hashing vectorizer built");
        Ok(Self {
            mask,
            config,
            _namespace: PhantomData,
        })
    }

    pub fn config(&self) -> &HashingConfig {
        &self.config
    }

    #[inline]
    fn index(&self, namespace: N, feature: &[u8]) -> u32 {
        let mut hasher = Xxh64::new(self.config.seed);
        hasher.update(&(namespace.ordinal() as u32).to_le_bytes());
        hasher.update(feature);
        (hasher.digest() as u32) & self.mask
    }
}

impl<N: Namespace> Vectorizer<N> for HashingVectorizer<N> {
    fn vectorize(&self, record: &DataRecord<N, RawValue>) -> SparseVector {
        let mut weights: BTreeMap<u32, f64> = BTreeMap::new();
        let mut add = |index: u32, weight: f64| *weights.entry(index).or_insert(0.0) += weight;

        for (namespace, value) in record.iter() {
            match value {
                RawValue::SingleString(s) => add(self.index(namespace, s.as_bytes()), 1.0),
                RawValue::Strings(values) => {
                    for s in values {
                        add(self.index(namespace, s.as_bytes()), 1.0);
                    }
                }
                RawValue::SingleCategorical(id) => add(self.index(namespace, &id.to_le_bytes()), 1.0),
                RawValue::Categoricals(ids) => {
                    for id in ids {
                        add(self.index(namespace, &id.to_le_bytes()), 1.0);
                    }
                }
                RawValue::SingleNumerical(x) => add(self.index(namespace, &[]), *x),
                RawValue::CategoricalsToNumericals(pairs) => {
                    for (id, x) in pairs.iter() {
                        add(self.index(namespace, &id.to_le_bytes()), x);
                    }
                }
                RawValue::StringsToNumericals(pairs) => {
                    for (name, x) in pairs.iter() {
                        add(self.index(namespace, name.as_bytes()), x);
                    }
                }
            }
        }

        SparseVector::from_pairs(weights)
    }
}
