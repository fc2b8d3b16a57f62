//! Raw record to score
//!
//! A [`VectorizingScorer`] is the composition `estimator(vectorizer(record))`.
//! It adds no state and no error handling of its own; a failure in either
//! collaborator surfaces to the caller unchanged.

use crate::estimator::Estimator;
use crate::vectorizer::Vectorizer;
use hotvect_core::{DataRecord, Namespace, RawValue};
use hotvect_transform::Transformer;
use std::marker::PhantomData;

/// Scores a raw record
pub trait Scorer<N: Namespace>: Send + Sync {
    fn score(&self, record: &DataRecord<N, RawValue>) -> f64;
}

/// A [`Scorer`] built from a [`Vectorizer`] and an [`Estimator`]
#[derive(Debug, Clone)]
pub struct VectorizingScorer<Z, E> {
    vectorizer: Z,
    estimator: E,
}

impl<Z, E> VectorizingScorer<Z, E> {
    pub fn new(vectorizer: Z, estimator: E) -> Self {
        Self {
            vectorizer,
            estimator,
        }
    }

    pub fn vectorizer(&self) -> &Z {
        &self.vectorizer
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }
}

impl<N, Z, E> Scorer<N> for VectorizingScorer<Z, E>
where
    N: Namespace,
    Z: Vectorizer<N>,
    E: Estimator,
{
    fn score(&self, record: &DataRecord<N, RawValue>) -> f64 {
        let vector = self.vectorizer.vectorize(record);
        self.estimator.estimate(&vector)
    }
}

/// Transforms an input record into the model's vocabulary, then scores it
pub struct TransformingScorer<O, T, S> {
    transformer: T,
    scorer: S,
    _output: PhantomData<fn() -> O>,
}

impl<O, T, S> TransformingScorer<O, T, S> {
    pub fn new(transformer: T, scorer: S) -> Self {
        Self {
            transformer,
            scorer,
            _output: PhantomData,
        }
    }

    pub fn transformer(&self) -> &T {
        &self.transformer
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}

impl<I, O, T, S> Scorer<I> for TransformingScorer<O, T, S>
where
    I: Namespace,
    O: Namespace,
    T: Transformer<I, O, RawValue>,
    S: Scorer<O>,
{
    fn score(&self, record: &DataRecord<I, RawValue>) -> f64 {
        let transformed = self.transformer.transform(record);
        self.scorer.score(&transformed)
    }
}
