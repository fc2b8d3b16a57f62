//! JSON codec for raw data records
//!
//! Encodes a [`DataRecord`] of [`RawValue`]s into one JSON object keyed by
//! namespace name, and decodes such objects back. Mainly used for logging and
//! debugging what actually went into a model.
//!
//! | Value type | JSON shape |
//! |---|---|
//! | `SINGLE_STRING`, `SINGLE_CATEGORICAL`, `SINGLE_NUMERICAL` | scalar |
//! | `STRINGS`, `CATEGORICALS` | array |
//! | `CATEGORICALS_TO_NUMERICALS`, `STRINGS_TO_NUMERICALS` | object of key to number |
//!
//! Empty slots are omitted. Fields follow the vocabulary's declaration order.

use crate::error::{Error, Result};
use crate::namespace::Namespace;
use crate::record::DataRecord;
use crate::value::{DataValue, RawValue, ValueType};
use crate::vector::SparseVector;
use ahash::AHashMap;
use serde_json::{Map, Number, Value};
use std::marker::PhantomData;

/// Serializes a raw record into an external representation
pub trait RecordEncoder<K: Namespace> {
    type Output;

    fn encode(&self, record: &DataRecord<K, RawValue>) -> Result<Self::Output>;
}

/// Parses an external representation into a raw record
pub trait RecordDecoder<K: Namespace> {
    type Input: ?Sized;

    fn decode(&self, input: &Self::Input) -> Result<DataRecord<K, RawValue>>;
}

/// Encodes records as JSON text
#[derive(Debug, Clone, Copy)]
pub struct JsonRecordEncoder<K> {
    _namespace: PhantomData<K>,
}

impl<K: Namespace> JsonRecordEncoder<K> {
    pub fn new() -> Self {
        Self {
            _namespace: PhantomData,
        }
    }

    /// Build the JSON object without rendering it
    pub fn to_value(&self, record: &DataRecord<K, RawValue>) -> Result<Value> {
        let mut object = Map::new();
        for (namespace, value) in record.iter() {
            if namespace.value_type() != value.value_type() {
                return Err(Error::Encoding(format!(
                    "namespace '{}' declares {} but holds {}",
                    namespace.name(),
                    namespace.value_type(),
                    value.value_type()
                )));
            }
            object.insert(namespace.name().to_string(), encode_value(namespace.name(), value)?);
        }
        Ok(Value::Object(object))
    }
}

impl<K: Namespace> Default for JsonRecordEncoder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Namespace> RecordEncoder<K> for JsonRecordEncoder<K> {
    type Output = String;

    fn encode(&self, record: &DataRecord<K, RawValue>) -> Result<String> {
        let value = self.to_value(record)?;
        Ok(serde_json::to_string(&value)?)
    }
}

fn number(namespace: &str, value: f64) -> Result<Value> {
    Number::from_f64(value).map(Value::Number).ok_or_else(|| {
        Error::Encoding(format!(
            "namespace '{}' holds non-finite number {}",
            namespace, value
        ))
    })
}

fn encode_value(namespace: &str, value: &RawValue) -> Result<Value> {
    let encoded = match value {
        RawValue::SingleString(s) => Value::String(s.clone()),
        RawValue::Strings(values) => Value::Array(values.iter().cloned().map(Value::String).collect()),
        RawValue::SingleCategorical(id) => Value::from(*id),
        RawValue::Categoricals(ids) => Value::Array(ids.iter().copied().map(Value::from).collect()),
        RawValue::SingleNumerical(x) => number(namespace, *x)?,
        RawValue::CategoricalsToNumericals(vector) => {
            // Later duplicates overwrite earlier ones
            let mut object = Map::new();
            for (id, x) in vector.iter() {
                object.insert(id.to_string(), number(namespace, x)?);
            }
            Value::Object(object)
        }
        RawValue::StringsToNumericals(pairs) => {
            let mut object = Map::new();
            for (name, x) in pairs.iter() {
                object.insert(name.to_string(), number(namespace, x)?);
            }
            Value::Object(object)
        }
    };
    Ok(encoded)
}

/// Decodes JSON text produced by [`JsonRecordEncoder`]
///
/// Unknown keys are rejected; `null` fields are treated as empty slots.
#[derive(Debug, Clone)]
pub struct JsonRecordDecoder<K: Namespace> {
    by_name: AHashMap<&'static str, K>,
}

impl<K: Namespace> JsonRecordDecoder<K> {
    pub fn new() -> Self {
        Self {
            by_name: K::VOCABULARY.iter().map(|ns| (ns.name(), *ns)).collect(),
        }
    }

    pub fn from_value(&self, value: &Value) -> Result<DataRecord<K, RawValue>> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::Decoding("expected a JSON object".to_string()))?;

        let mut record = DataRecord::new();
        for (key, field) in object {
            let namespace = *self
                .by_name
                .get(key.as_str())
                .ok_or_else(|| Error::Decoding(format!("unknown namespace '{}'", key)))?;
            if field.is_null() {
                continue;
            }
            let decoded = decode_value(namespace.value_type(), field).map_err(|reason| {
                Error::Decoding(format!(
                    "namespace '{}' ({}): {}",
                    key,
                    namespace.value_type(),
                    reason
                ))
            })?;
            record.try_put(namespace, decoded)?;
        }
        Ok(record)
    }
}

impl<K: Namespace> Default for JsonRecordDecoder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Namespace> RecordDecoder<K> for JsonRecordDecoder<K> {
    type Input = str;

    fn decode(&self, input: &str) -> Result<DataRecord<K, RawValue>> {
        let value: Value = serde_json::from_str(input)?;
        self.from_value(&value)
    }
}

fn as_string(value: &Value) -> std::result::Result<String, String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| format!("expected a string, got {}", value))
}

fn as_categorical(value: &Value) -> std::result::Result<u32, String> {
    value
        .as_u64()
        .and_then(|id| u32::try_from(id).ok())
        .ok_or_else(|| format!("expected a category id, got {}", value))
}

fn as_number(value: &Value) -> std::result::Result<f64, String> {
    value
        .as_f64()
        .ok_or_else(|| format!("expected a number, got {}", value))
}

fn as_array(value: &Value) -> std::result::Result<&Vec<Value>, String> {
    value
        .as_array()
        .ok_or_else(|| format!("expected an array, got {}", value))
}

fn as_object(value: &Value) -> std::result::Result<&Map<String, Value>, String> {
    value
        .as_object()
        .ok_or_else(|| format!("expected an object, got {}", value))
}

fn decode_value(value_type: ValueType, value: &Value) -> std::result::Result<RawValue, String> {
    let decoded = match value_type {
        ValueType::SingleString => RawValue::SingleString(as_string(value)?),
        ValueType::Strings => RawValue::Strings(
            as_array(value)?
                .iter()
                .map(as_string)
                .collect::<std::result::Result<_, _>>()?,
        ),
        ValueType::SingleCategorical => RawValue::SingleCategorical(as_categorical(value)?),
        ValueType::Categoricals => RawValue::Categoricals(
            as_array(value)?
                .iter()
                .map(as_categorical)
                .collect::<std::result::Result<_, _>>()?,
        ),
        ValueType::SingleNumerical => RawValue::SingleNumerical(as_number(value)?),
        ValueType::CategoricalsToNumericals => {
            let mut pairs = Vec::new();
            for (key, x) in as_object(value)? {
                let id = key
                    .parse::<u32>()
                    .map_err(|_| format!("key '{}' is not a category id", key))?;
                pairs.push((id, as_number(x)?));
            }
            RawValue::CategoricalsToNumericals(SparseVector::from_pairs(pairs))
        }
        ValueType::StringsToNumericals => {
            let object = as_object(value)?;
            let mut names = Vec::with_capacity(object.len());
            let mut values = Vec::with_capacity(object.len());
            for (key, x) in object {
                names.push(key.clone());
                values.push(as_number(x)?);
            }
            RawValue::strings_to_numericals(names, values).map_err(|e| e.to_string())?
        }
    };
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::namespaces! {
        enum Ad {
            Title => SingleString,
            Keywords => Strings,
            Campaign => SingleCategorical,
            Segments => Categoricals,
            Bid => SingleNumerical,
            SegmentScores => CategoricalsToNumericals,
            TermWeights => StringsToNumericals,
        }
    }

    fn full_record() -> DataRecord<Ad, RawValue> {
        DataRecord::new()
            .with(Ad::Title, "running shoes")
            .with(Ad::Keywords, RawValue::strings(["shoe", "run"]))
            .with(Ad::Campaign, 42u32)
            .with(Ad::Segments, RawValue::Categoricals(vec![3, 1]))
            .with(Ad::Bid, 0.25)
            .with(
                Ad::SegmentScores,
                RawValue::categoricals_to_numericals(vec![7, 2], vec![0.5, 1.5]).unwrap(),
            )
            .with(
                Ad::TermWeights,
                RawValue::strings_to_numericals(["a", "b"], vec![1.0, 2.0]).unwrap(),
            )
    }

    #[test]
    fn test_encode_shapes() {
        let encoder = JsonRecordEncoder::<Ad>::new();
        let value = encoder.to_value(&full_record()).unwrap();

        assert_eq!(
            value,
            json!({
                "Title": "running shoes",
                "Keywords": ["shoe", "run"],
                "Campaign": 42,
                "Segments": [3, 1],
                "Bid": 0.25,
                "SegmentScores": {"7": 0.5, "2": 1.5},
                "TermWeights": {"a": 1.0, "b": 2.0}
            })
        );
    }

    #[test]
    fn test_encode_keyed_numericals() {
        let record = DataRecord::<Ad, RawValue>::new().with(
            Ad::TermWeights,
            RawValue::strings_to_numericals(["a", "b"], vec![1.0, 2.0]).unwrap(),
        );
        let encoded = JsonRecordEncoder::new().encode(&record).unwrap();
        assert_eq!(encoded, r#"{"TermWeights":{"a":1.0,"b":2.0}}"#);
    }

    #[test]
    fn test_empty_slots_are_omitted() {
        let record = DataRecord::<Ad, RawValue>::new().with(Ad::Bid, 1.0);
        let encoded = JsonRecordEncoder::new().encode(&record).unwrap();
        assert_eq!(encoded, r#"{"Bid":1.0}"#);
        assert!(!encoded.contains("null"));

        let empty = DataRecord::<Ad, RawValue>::new();
        assert_eq!(JsonRecordEncoder::new().encode(&empty).unwrap(), "{}");
    }

    #[test]
    fn test_field_order_follows_vocabulary() {
        let record = DataRecord::<Ad, RawValue>::new()
            .with(Ad::Bid, 1.0)
            .with(Ad::Title, "x");
        let encoded = JsonRecordEncoder::new().encode(&record).unwrap();
        assert_eq!(encoded, r#"{"Title":"x","Bid":1.0}"#);
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let record = DataRecord::<Ad, RawValue>::new().with(
            Ad::SegmentScores,
            RawValue::categoricals_to_numericals(vec![4, 4], vec![1.0, 9.0]).unwrap(),
        );
        let value = JsonRecordEncoder::new().to_value(&record).unwrap();
        assert_eq!(value, json!({"SegmentScores": {"4": 9.0}}));
    }

    #[test]
    fn test_non_finite_number_fails() {
        let record = DataRecord::<Ad, RawValue>::new().with(Ad::Bid, f64::NAN);
        let result = JsonRecordEncoder::new().encode(&record);
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let encoder = JsonRecordEncoder::new();
        let record = full_record();
        assert_eq!(encoder.encode(&record).unwrap(), encoder.encode(&record).unwrap());
    }

    #[test]
    fn test_decode_inverts_encode() {
        let record = full_record();
        let encoded = JsonRecordEncoder::new().encode(&record).unwrap();
        let decoded = JsonRecordDecoder::<Ad>::new().decode(&encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_decode_skips_null() {
        let decoded = JsonRecordDecoder::<Ad>::new()
            .decode(r#"{"Title": null, "Bid": 2.0}"#)
            .unwrap();
        assert!(!decoded.contains(Ad::Title));
        assert_eq!(decoded.get(Ad::Bid), Some(&RawValue::SingleNumerical(2.0)));
    }

    #[test]
    fn test_decode_rejects_unknown_namespace() {
        let result = JsonRecordDecoder::<Ad>::new().decode(r#"{"Color": "red"}"#);
        assert!(matches!(result, Err(Error::Decoding(ref msg)) if msg.contains("Color")));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let decoder = JsonRecordDecoder::<Ad>::new();
        assert!(matches!(decoder.decode(r#"{"Keywords": "shoe"}"#), Err(Error::Decoding(_))));
        assert!(matches!(decoder.decode(r#"{"Campaign": -1}"#), Err(Error::Decoding(_))));
        assert!(matches!(
            decoder.decode(r#"{"SegmentScores": {"x": 1.0}}"#),
            Err(Error::Decoding(_))
        ));
        assert!(matches!(decoder.decode("[1, 2]"), Err(Error::Decoding(_))));
        assert!(matches!(decoder.decode("{"), Err(Error::Json(_))));
    }
}
