//! # hotvect Score
//!
//! Composes a vectorizer and an estimator into a single scorer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ DataRecord  │────>│ Transformer │────>│ Vectorizer  │────>│  Estimator  │────> score
//! │ (raw input) │     │ (optional)  │     │ (record→v)  │     │  (v→f64)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! [`Vectorizer`] and [`Estimator`] are contracts: total, deterministic and
//! read-only over their model state. Closures of the right shape implement
//! both. [`HashingVectorizer`] and [`LinearEstimator`] are ready-made
//! implementations.
//!
//! ## Example
//!
//! ```rust
//! use hotvect_core::{namespaces, DataRecord, RawValue};
//! use hotvect_score::{
//!     HashingConfig, HashingVectorizer, LinearEstimator, LinearModel, Scorer, VectorizingScorer,
//! };
//!
//! namespaces! {
//!     pub enum Raw {
//!         Query => SingleString,
//!         Price => SingleNumerical,
//!     }
//! }
//!
//! let vectorizer = HashingVectorizer::<Raw>::new(HashingConfig::new(18)).unwrap();
//! let estimator = LinearEstimator::new(LinearModel::new(0.1, vec![])).unwrap();
//! let scorer = VectorizingScorer::new(vectorizer, estimator);
//!
//! let record = DataRecord::<Raw, RawValue>::new()
//!     .with(Raw::Query, "desk lamp")
//!     .with(Raw::Price, 35.0);
//! assert_eq!(scorer.score(&record), 0.1);
//! ```

pub mod config;
pub mod estimator;
pub mod scorer;
pub mod vectorizer;

pub use config::{HashingConfig, LinearModel, Link};
pub use estimator::{Estimator, LinearEstimator};
pub use scorer::{Scorer, TransformingScorer, VectorizingScorer};
pub use vectorizer::{HashingVectorizer, Vectorizer};
