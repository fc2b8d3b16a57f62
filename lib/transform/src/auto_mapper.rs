//! Name-matched copying between vocabularies
//!
//! An [`AutoMapper`] pairs every output namespace with the input namespace of
//! the same name and copies values across unchanged. Because nothing is
//! converted, the pairing is type-checked once at construction.

use hotvect_core::{DataRecord, DataValue, Error, Namespace, Result};
use tracing::{debug, warn};

/// Copies values from input namespaces to identically named output namespaces
#[derive(Debug, Clone)]
pub struct AutoMapper<I: Namespace, O: Namespace> {
    /// (output, input) pairs in output declaration order
    mapped: Vec<(O, I)>,
}

impl<I: Namespace, O: Namespace> AutoMapper<I, O> {
    /// Pair the two vocabularies by name
    ///
    /// Fails with [`Error::TypeMismatch`] when a pair disagrees on whether it
    /// holds numeric values, and with [`Error::ValueTypeMismatch`] when both
    /// sides agree on that but declare different value types.
    ///
    /// The second check is stricter than matching numeric-ness alone: a
    /// `SingleString` input named like a `Strings` output is rejected, because
    /// the copied value would not have the output namespace's declared type.
    /// Give such namespaces different names and compute the output with a
    /// [`Transformation`](crate::Transformation).
    pub fn new() -> Result<Self> {
        let mut mapped = Vec::new();

        for &output in O::VOCABULARY {
            let Some(input) = I::from_name(output.name()) else {
                continue;
            };

            let (in_type, out_type) = (input.value_type(), output.value_type());
            if in_type.has_numeric_values() != out_type.has_numeric_values() {
                warn!(namespace = output.name(), %in_type, %out_type, "numeric-ness differs across vocabularies");
                return Err(Error::TypeMismatch {
                    namespace: output.name().to_string(),
                    input: in_type,
                    output: out_type,
                });
            }
            if in_type != out_type {
                warn!(namespace = output.name(), %in_type, %out_type, "value type differs across vocabularies");
                return Err(Error::ValueTypeMismatch {
                    namespace: output.name().to_string(),
                    expected: out_type,
                    actual: in_type,
                });
            }

            mapped.push((output, input));
        }

        debug!(
            mapped = mapped.len(),
            inputs = I::VOCABULARY.len(),
            outputs = O::VOCABULARY.len(),
            "auto-mapper built"
        );

        Ok(Self { mapped })
    }

    /// The (output, input) pairs that are copied
    pub fn mapped(&self) -> &[(O, I)] {
        &self.mapped
    }

    /// Whether `output` is filled by copying
    pub fn is_mapped(&self, output: O) -> bool {
        self.mapped.iter().any(|(o, _)| *o == output)
    }

    /// Copy every present input value into its paired output slot
    pub fn apply<V: DataValue + Clone>(&self, input: &DataRecord<I, V>) -> DataRecord<O, V> {
        let mut output = DataRecord::new();
        for &(out_ns, in_ns) in &self.mapped {
            if let Some(value) = input.get(in_ns) {
                output.put(out_ns, value.clone());
            }
        }
        output
    }
}
