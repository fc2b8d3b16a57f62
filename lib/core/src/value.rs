//! Typed feature values
//!
//! Every namespace declares one [`ValueType`]; the value stored under it is a
//! [`RawValue`] whose variant carries exactly that shape.

use crate::error::{Error, Result};
use crate::vector::SparseVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of the value a namespace holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    /// One string
    SingleString,
    /// Ordered sequence of strings
    Strings,
    /// One category id
    SingleCategorical,
    /// Ordered sequence of category ids
    Categoricals,
    /// One floating-point number
    SingleNumerical,
    /// Category ids paired with numbers
    CategoricalsToNumericals,
    /// Strings paired with numbers
    StringsToNumericals,
}

impl ValueType {
    /// Whether values of this type carry numbers.
    ///
    /// This is the only property compared when values are auto-mapped
    /// between vocabularies.
    #[inline]
    pub const fn has_numeric_values(self) -> bool {
        matches!(
            self,
            ValueType::SingleNumerical
                | ValueType::CategoricalsToNumericals
                | ValueType::StringsToNumericals
        )
    }

    #[inline]
    pub const fn category(self) -> ValueCategory {
        if self.has_numeric_values() {
            ValueCategory::Numeric
        } else {
            ValueCategory::Categorical
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ValueType::SingleString => "SINGLE_STRING",
            ValueType::Strings => "STRINGS",
            ValueType::SingleCategorical => "SINGLE_CATEGORICAL",
            ValueType::Categoricals => "CATEGORICALS",
            ValueType::SingleNumerical => "SINGLE_NUMERICAL",
            ValueType::CategoricalsToNumericals => "CATEGORICALS_TO_NUMERICALS",
            ValueType::StringsToNumericals => "STRINGS_TO_NUMERICALS",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric or categorical, the two sides of the auto-mapping compatibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    Numeric,
    Categorical,
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueCategory::Numeric => f.write_str("numeric"),
            ValueCategory::Categorical => f.write_str("categorical"),
        }
    }
}

/// A value that knows its own [`ValueType`]
pub trait DataValue {
    fn value_type(&self) -> ValueType;
}

/// Strings paired index by index with numbers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringsToNumericals {
    names: Vec<String>,
    values: Vec<f64>,
}

impl StringsToNumericals {
    pub fn new(names: Vec<String>, values: Vec<f64>) -> Result<Self> {
        if names.len() != values.len() {
            return Err(Error::LengthMismatch {
                keys: names.len(),
                values: values.len(),
            });
        }
        Ok(Self { names, values })
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// One feature's content, one variant per [`ValueType`]
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    SingleString(String),
    Strings(Vec<String>),
    SingleCategorical(u32),
    Categoricals(Vec<u32>),
    SingleNumerical(f64),
    /// Category ids as indices, their numbers as values
    CategoricalsToNumericals(SparseVector),
    StringsToNumericals(StringsToNumericals),
}

impl RawValue {
    pub fn single_string(value: impl Into<String>) -> Self {
        RawValue::SingleString(value.into())
    }

    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawValue::Strings(values.into_iter().map(Into::into).collect())
    }

    pub fn categoricals_to_numericals(ids: Vec<u32>, values: Vec<f64>) -> Result<Self> {
        SparseVector::new(ids, values).map(RawValue::CategoricalsToNumericals)
    }

    pub fn strings_to_numericals<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        values: Vec<f64>,
    ) -> Result<Self> {
        let names = names.into_iter().map(Into::into).collect();
        StringsToNumericals::new(names, values).map(RawValue::StringsToNumericals)
    }
}

impl DataValue for RawValue {
    fn value_type(&self) -> ValueType {
        match self {
            RawValue::SingleString(_) => ValueType::SingleString,
            RawValue::Strings(_) => ValueType::Strings,
            RawValue::SingleCategorical(_) => ValueType::SingleCategorical,
            RawValue::Categoricals(_) => ValueType::Categoricals,
            RawValue::SingleNumerical(_) => ValueType::SingleNumerical,
            RawValue::CategoricalsToNumericals(_) => ValueType::CategoricalsToNumericals,
            RawValue::StringsToNumericals(_) => ValueType::StringsToNumericals,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::SingleNumerical(value)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::SingleCategorical(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::SingleString(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::SingleString(value)
    }
}
