use crate::config::{Link, LinearModel};
use ahash::AHashMap;
use hotvect_core::{Result, SparseVector};
use tracing::debug;

/// Turns a sparse vector into a score
///
/// Implementations read model state but never modify it.
pub trait Estimator: Send + Sync {
    fn estimate(&self, vector: &SparseVector) -> f64;
}

impl<F> Estimator for F
where
    F: Fn(&SparseVector) -> f64 + Send + Sync,
{
    fn estimate(&self, vector: &SparseVector) -> f64 {
        self(vector)
    }
}

/// Linear model: `link(bias + Σ weight[i] · x[i])`
///
/// Every entry of the input contributes on its own, so an index listed twice
/// is counted twice.
#[derive(Debug, Clone)]
pub struct LinearEstimator {
    bias: f64,
    weights: AHashMap<u32, f64>,
    link: Link,
}

impl LinearEstimator {
    pub fn new(model: LinearModel) -> Result<Self> {
        model.validate()?;
        debug!(weights = model.weights.len(), link = ?model.link, "linear estimator built");
        Ok(Self {
            bias: model.bias,
            weights: model.weights.into_iter().collect(),
            link: model.link,
        })
    }

    #[inline]
    pub fn weight(&self, index: u32) -> f64 {
        self.weights.get(&index).copied().unwrap_or(0.0)
    }

    /// Score before the link function
    pub fn margin(&self, vector: &SparseVector) -> f64 {
        self.bias + vector.iter().map(|(i, x)| self.weight(i) * x).sum::<f64>()
    }
}

impl Estimator for LinearEstimator {
    fn estimate(&self, vector: &SparseVector) -> f64 {
        self.link.apply(self.margin(vector))
    }
}
