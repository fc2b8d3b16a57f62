//! # hotvect
//!
//! Feature vectorization for ML serving.
//!
//! hotvect turns a record of named raw features (strings, category ids,
//! numbers and keyed numbers) into a sparse vector and scores it with a model.
//! The same pipeline runs whatever the record was decoded from.
//!
//! ## Pipeline
//!
//! ```text
//! raw input ─> DataRecord<Raw> ─> Transformer ─> DataRecord<Features> ─> Vectorizer ─> SparseVector ─> Estimator ─> score
//! ```
//!
//! Every stage is immutable once built, so a pipeline can be shared across
//! threads behind an `Arc` and called concurrently.
//!
//! ## Quick Start
//!
//! ```rust
//! use hotvect::prelude::*;
//!
//! namespaces! {
//!     pub enum Raw {
//!         Query => SingleString,
//!         Price => SingleNumerical,
//!     }
//! }
//!
//! namespaces! {
//!     pub enum Features {
//!         Query => SingleString,
//!         Price => SingleNumerical,
//!         QueryTokens => Strings,
//!     }
//! }
//!
//! // Query and Price are copied; QueryTokens is computed
//! let transformer = PassThroughTransformer::<Raw, Features, RawValue>::builder()
//!     .transform(Features::QueryTokens, |input: &DataRecord<Raw, RawValue>| {
//!         match input.get(Raw::Query)? {
//!             RawValue::SingleString(q) => Some(RawValue::strings(q.split_whitespace())),
//!             _ => None,
//!         }
//!     })
//!     .build()
//!     .unwrap();
//!
//! let vectorizer = HashingVectorizer::<Features>::new(HashingConfig::default()).unwrap();
//! let estimator = LinearEstimator::new(LinearModel::new(-1.0, vec![])).unwrap();
//! let scorer = TransformingScorer::<Features, _, _>::new(
//!     transformer,
//!     VectorizingScorer::new(vectorizer, estimator),
//! );
//!
//! let input = DataRecord::<Raw, RawValue>::new()
//!     .with(Raw::Query, "trail running shoes")
//!     .with(Raw::Price, 89.0);
//! assert_eq!(scorer.score(&input), -1.0);
//! ```
//!
//! ## Crate Structure
//!
//! - [`hotvect-core`](hotvect_core) - namespaces, raw values, records, sparse vectors, JSON codec
//! - [`hotvect-transform`](hotvect_transform) - auto-mapping and per-namespace transformations
//! - [`hotvect-score`](hotvect_score) - vectorizer/estimator contracts and the scorer

// Re-export core types
pub use hotvect_core::{
    namespaces,
    DataRecord, DataValue, Namespace, RawValue, SparseVector, StringsToNumericals, ValueCategory, ValueType,
    JsonRecordDecoder, JsonRecordEncoder, RecordDecoder, RecordEncoder,
    Error, Result,
};

// Re-export transformation
pub use hotvect_transform::{
    AutoMapper, PassThroughTransformer, PassThroughTransformerBuilder, Transformation, Transformer,
};

// Re-export scoring
pub use hotvect_score::{
    Estimator, HashingConfig, HashingVectorizer, LinearEstimator, LinearModel, Link,
    Scorer, TransformingScorer, Vectorizer, VectorizingScorer,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        namespaces,
        DataRecord, DataValue, Namespace, RawValue, SparseVector, ValueType,
        JsonRecordDecoder, JsonRecordEncoder, RecordDecoder, RecordEncoder,
        AutoMapper, PassThroughTransformer, Transformation, Transformer,
        Estimator, HashingConfig, HashingVectorizer, LinearEstimator, LinearModel, Link,
        Scorer, TransformingScorer, Vectorizer, VectorizingScorer,
        Error, Result,
    };
}
