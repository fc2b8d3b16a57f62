use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A sparse vector of weights
///
/// Parallel arrays of indices and values; every index not listed is zero.
/// Indices need not be sorted. Deserializing goes through [`SparseVector::new`],
/// so arrays of different length are rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(try_from = "SparseVectorParts")]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct SparseVectorParts {
    indices: Vec<u32>,
    values: Vec<f64>,
}

impl TryFrom<SparseVectorParts> for SparseVector {
    type Error = Error;

    fn try_from(parts: SparseVectorParts) -> Result<Self> {
        Self::new(parts.indices, parts.values)
    }
}

impl SparseVector {
    pub fn new(indices: Vec<u32>, values: Vec<f64>) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(Error::LengthMismatch {
                keys: indices.len(),
                values: values.len(),
            });
        }
        Ok(Self { indices, values })
    }

    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, f64)>) -> Self {
        let (indices, values) = pairs.into_iter().unzip();
        Self { indices, values }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// True when no index appears twice
    pub fn has_unique_indices(&self) -> bool {
        let mut sorted = self.indices.clone();
        sorted.sort_unstable();
        sorted.windows(2).all(|w| w[0] != w[1])
    }
}
