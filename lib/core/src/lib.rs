//! # hotvect Core
//!
//! Data model shared by every hotvect pipeline stage.
//!
//! - [`Namespace`] - a member of a closed vocabulary, declared with [`namespaces!`]
//! - [`ValueType`] / [`RawValue`] - the seven value shapes a namespace may hold
//! - [`DataRecord`] - one slot per namespace, addressed by ordinal
//! - [`SparseVector`] - index/value pairs with implicit zeros elsewhere
//! - [`JsonRecordEncoder`] / [`JsonRecordDecoder`] - JSON form of a raw record
//!
//! ## Example
//!
//! ```rust
//! use hotvect_core::{namespaces, DataRecord, JsonRecordEncoder, RawValue, RecordEncoder};
//!
//! namespaces! {
//!     pub enum Raw {
//!         Query => SingleString,
//!         Price => SingleNumerical,
//!     }
//! }
//!
//! let record = DataRecord::<Raw, RawValue>::new()
//!     .with(Raw::Query, "red shoes")
//!     .with(Raw::Price, 59.0);
//!
//! let json = JsonRecordEncoder::new().encode(&record).unwrap();
//! assert_eq!(json, r#"{"Query":"red shoes","Price":59.0}"#);
//! ```

pub mod error;
pub mod json;
pub mod namespace;
pub mod record;
pub mod value;
pub mod vector;

pub use error::{Error, Result};
pub use json::{JsonRecordDecoder, JsonRecordEncoder, RecordDecoder, RecordEncoder};
pub use namespace::Namespace;
pub use record::DataRecord;
pub use value::{DataValue, RawValue, StringsToNumericals, ValueCategory, ValueType};
pub use vector::SparseVector;
