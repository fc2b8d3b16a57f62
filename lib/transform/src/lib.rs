//! # hotvect Transform
//!
//! Turns a record in one namespace vocabulary into a record in another.
//!
//! ## Overview
//!
//! Two vocabularies meet here: the namespaces a record is decoded into, and
//! the namespaces a model is trained on. Output namespaces fall into three
//! groups:
//!
//! 1. **Auto-mapped**: same name in both vocabularies, value copied as is.
//!    The two sides must agree on value type, checked once at construction.
//! 2. **Transformed**: computed from the whole input record by a registered
//!    [`Transformation`].
//! 3. **Unfilled**: neither of the above; always empty.
//!
//! A transformation registered for an auto-mapped namespace is rejected with
//! [`hotvect_core::Error::NamespaceCollision`].
//!
//! ## Example
//!
//! ```rust
//! use hotvect_core::{namespaces, DataRecord, RawValue};
//! use hotvect_transform::PassThroughTransformer;
//!
//! namespaces! {
//!     pub enum Raw {
//!         Query => SingleString,
//!     }
//! }
//!
//! namespaces! {
//!     pub enum Features {
//!         Query => SingleString,
//!         QueryLength => SingleNumerical,
//!     }
//! }
//!
//! let transformer = PassThroughTransformer::<Raw, Features, RawValue>::builder()
//!     .transform(Features::QueryLength, |input: &DataRecord<Raw, RawValue>| {
//!         match input.get(Raw::Query)? {
//!             RawValue::SingleString(q) => Some(RawValue::SingleNumerical(q.len() as f64)),
//!             _ => None,
//!         }
//!     })
//!     .build()
//!     .unwrap();
//!
//! let input = DataRecord::<Raw, RawValue>::new().with(Raw::Query, "boots");
//! let output = transformer.apply(&input);
//! assert_eq!(output.get(Features::Query), Some(&RawValue::from("boots")));
//! assert_eq!(output.get(Features::QueryLength), Some(&RawValue::SingleNumerical(5.0)));
//! ```

pub mod auto_mapper;
pub mod transformer;

pub use auto_mapper::AutoMapper;
pub use transformer::{
    PassThroughTransformer,
    PassThroughTransformerBuilder,
    Transformation,
    Transformer,
};
