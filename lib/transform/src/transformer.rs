//! Record transformers
//!
//! A [`PassThroughTransformer`] fills an output record from an input record in
//! two ways: namespaces present in both vocabularies are copied by an
//! [`AutoMapper`], every other output namespace may be computed by a registered
//! [`Transformation`]. A namespace is never filled both ways.

use crate::auto_mapper::AutoMapper;
use hotvect_core::{DataRecord, DataValue, Error, Namespace, Result};
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Computes one output value from a whole input record
///
/// Returning `None` leaves the output slot empty.
pub trait Transformation<I: Namespace, V>: Send + Sync {
    fn apply(&self, input: &DataRecord<I, V>) -> Option<V>;
}

impl<I, V, F> Transformation<I, V> for F
where
    I: Namespace,
    F: Fn(&DataRecord<I, V>) -> Option<V> + Send + Sync,
{
    fn apply(&self, input: &DataRecord<I, V>) -> Option<V> {
        self(input)
    }
}

/// Turns a record of one vocabulary into a record of another
pub trait Transformer<I: Namespace, O: Namespace, V>: Send + Sync {
    fn transform(&self, input: &DataRecord<I, V>) -> DataRecord<O, V>;
}

type BoxedTransformation<I, V> = Box<dyn Transformation<I, V>>;

/// Auto-mapping plus explicitly registered transformations
pub struct PassThroughTransformer<I: Namespace, O: Namespace, V> {
    auto_mapper: AutoMapper<I, O>,
    transformations: Vec<(O, BoxedTransformation<I, V>)>,
}

impl<I: Namespace, O: Namespace, V: DataValue + Clone> PassThroughTransformer<I, O, V> {
    /// A transformer that only copies identically named namespaces
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> PassThroughTransformerBuilder<I, O, V> {
        PassThroughTransformerBuilder::new()
    }

    pub fn auto_mapper(&self) -> &AutoMapper<I, O> {
        &self.auto_mapper
    }

    /// Output namespaces computed by a registered transformation
    pub fn transformed(&self) -> impl Iterator<Item = O> + '_ {
        self.transformations.iter().map(|(ns, _)| *ns)
    }

    /// Transform the specified record
    ///
    /// Transformations see the original input, not the partially built output.
    pub fn apply(&self, input: &DataRecord<I, V>) -> DataRecord<O, V> {
        let mut output = self.auto_mapper.apply(input);
        for (namespace, transformation) in &self.transformations {
            if let Some(value) = transformation.apply(input) {
                output.put(*namespace, value);
            }
        }
        output
    }
}

impl<I, O, V> Transformer<I, O, V> for PassThroughTransformer<I, O, V>
where
    I: Namespace,
    O: Namespace,
    V: DataValue + Clone,
{
    fn transform(&self, input: &DataRecord<I, V>) -> DataRecord<O, V> {
        self.apply(input)
    }
}

impl<I: Namespace, O: Namespace, V> fmt::Debug for PassThroughTransformer<I, O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassThroughTransformer")
            .field("auto_mapper", &self.auto_mapper)
            .field(
                "transformed",
                &self.transformations.iter().map(|(ns, _)| ns).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Registers transformations for a [`PassThroughTransformer`]
pub struct PassThroughTransformerBuilder<I: Namespace, O: Namespace, V> {
    /// Indexed by output ordinal; registering twice replaces
    slots: Vec<Option<BoxedTransformation<I, V>>>,
    _output: PhantomData<fn() -> O>,
}

impl<I: Namespace, O: Namespace, V: DataValue + Clone> PassThroughTransformerBuilder<I, O, V> {
    pub fn new() -> Self {
        Self {
            slots: O::VOCABULARY.iter().map(|_| None).collect(),
            _output: PhantomData,
        }
    }

    /// Compute `output` with `transformation`
    pub fn transform<T>(mut self, output: O, transformation: T) -> Self
    where
        T: Transformation<I, V> + 'static,
    {
        self.slots[output.ordinal()] = Some(Box::new(transformation));
        self
    }

    /// Validate and build
    ///
    /// Fails with [`Error::NamespaceCollision`] listing every registered
    /// namespace that the auto-mapper already fills, or with the
    /// auto-mapper's own type errors.
    pub fn build(self) -> Result<PassThroughTransformer<I, O, V>> {
        let auto_mapper = AutoMapper::new()?;

        let transformations: Vec<(O, BoxedTransformation<I, V>)> = O::VOCABULARY
            .iter()
            .zip(self.slots)
            .filter_map(|(ns, slot)| slot.map(|t| (*ns, t)))
            .collect();

        let colliding: Vec<String> = transformations
            .iter()
            .filter(|(ns, _)| auto_mapper.is_mapped(*ns))
            .map(|(ns, _)| ns.name().to_string())
            .collect();
        if !colliding.is_empty() {
            warn!(?colliding, "transformations target auto-mapped namespaces");
            return Err(Error::NamespaceCollision(colliding));
        }

        debug!(
            auto_mapped = auto_mapper.mapped().len(),
            transformed = transformations.len(),
            "pass-through transformer built"
        );

        Ok(PassThroughTransformer {
            auto_mapper,
            transformations,
        })
    }
}

impl<I: Namespace, O: Namespace, V: DataValue + Clone> Default for PassThroughTransformerBuilder<I, O, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotvect_core::{namespaces, RawValue};

    namespaces! {
        enum Raw {
            Query => SingleString,
            Price => SingleNumerical,
            Tags => Strings,
        }
    }

    namespaces! {
        enum Features {
            Query => SingleString,
            QueryTokens => Strings,
            LogPrice => SingleNumerical,
            Tags => Strings,
        }
    }

    fn query_tokens(input: &DataRecord<Raw, RawValue>) -> Option<RawValue> {
        match input.get(Raw::Query)? {
            RawValue::SingleString(q) => Some(RawValue::strings(q.split_whitespace())),
            _ => None,
        }
    }

    fn log_price(input: &DataRecord<Raw, RawValue>) -> Option<RawValue> {
        match input.get(Raw::Price)? {
            RawValue::SingleNumerical(p) if *p > 0.0 => Some(RawValue::SingleNumerical(p.ln())),
            _ => None,
        }
    }

    fn transformer() -> PassThroughTransformer<Raw, Features, RawValue> {
        PassThroughTransformer::builder()
            .transform(Features::QueryTokens, query_tokens)
            .transform(Features::LogPrice, log_price)
            .build()
            .unwrap()
    }

    #[test]
    fn test_auto_mapped_and_transformed() {
        let input = DataRecord::<Raw, RawValue>::new()
            .with(Raw::Query, "blue suede shoes")
            .with(Raw::Price, 1.0)
            .with(Raw::Tags, RawValue::strings(["sale"]));

        let output = transformer().apply(&input);
        assert_eq!(output.get(Features::Query), Some(&RawValue::from("blue suede shoes")));
        assert_eq!(output.get(Features::Tags), Some(&RawValue::strings(["sale"])));
        assert_eq!(
            output.get(Features::QueryTokens),
            Some(&RawValue::strings(["blue", "suede", "shoes"]))
        );
        assert_eq!(output.get(Features::LogPrice), Some(&RawValue::SingleNumerical(0.0)));
    }

    #[test]
    fn test_transformation_returning_none_leaves_slot_empty() {
        let input = DataRecord::<Raw, RawValue>::new().with(Raw::Price, -3.0);
        let output = transformer().apply(&input);
        assert!(output.get(Features::LogPrice).is_none());
        assert!(output.get(Features::QueryTokens).is_none());
        assert!(output.is_empty());
    }

    #[test]
    fn test_transformations_see_original_input() {
        let transformer = PassThroughTransformer::<Raw, Features, RawValue>::builder()
            .transform(Features::QueryTokens, |input: &DataRecord<Raw, RawValue>| {
                // Features::Query is auto-mapped, yet only the raw record is visible here
                input.get(Raw::Query).map(|_| RawValue::strings(["seen"]))
            })
            .build()
            .unwrap();

        let input = DataRecord::<Raw, RawValue>::new().with(Raw::Query, "x");
        let output = transformer.apply(&input);
        assert_eq!(output.get(Features::QueryTokens), Some(&RawValue::strings(["seen"])));
    }

    #[test]
    fn test_collision_lists_every_namespace() {
        let result = PassThroughTransformer::<Raw, Features, RawValue>::builder()
            .transform(Features::Tags, |_: &DataRecord<Raw, RawValue>| None)
            .transform(Features::LogPrice, log_price)
            .transform(Features::Query, |_: &DataRecord<Raw, RawValue>| None)
            .build();

        match result {
            Err(Error::NamespaceCollision(names)) => {
                assert_eq!(names, vec!["Query".to_string(), "Tags".to_string()]);
            }
            other => panic!("expected a collision, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_registering_twice_replaces() {
        let transformer = PassThroughTransformer::<Raw, Features, RawValue>::builder()
            .transform(Features::LogPrice, |_: &DataRecord<Raw, RawValue>| {
                Some(RawValue::SingleNumerical(1.0))
            })
            .transform(Features::LogPrice, |_: &DataRecord<Raw, RawValue>| {
                Some(RawValue::SingleNumerical(2.0))
            })
            .build()
            .unwrap();

        assert_eq!(transformer.transformed().count(), 1);
        let output = transformer.apply(&DataRecord::new());
        assert_eq!(output.get(Features::LogPrice), Some(&RawValue::SingleNumerical(2.0)));
    }

    #[test]
    fn test_pass_through_only() {
        let transformer = PassThroughTransformer::<Raw, Features, RawValue>::new().unwrap();
        let input = DataRecord::<Raw, RawValue>::new()
            .with(Raw::Query, "q")
            .with(Raw::Price, 5.0);

        let output = transformer.transform(&input);
        assert_eq!(output.len(), 1);
        assert_eq!(output.get(Features::Query), Some(&RawValue::from("q")));
    }

    #[test]
    fn test_builder_from_default() {
        let transformer = PassThroughTransformerBuilder::<Raw, Features, RawValue>::default()
            .transform(Features::LogPrice, log_price)
            .build()
            .unwrap();
        assert_eq!(transformer.transformed().collect::<Vec<_>>(), vec![Features::LogPrice]);

        let output = transformer.apply(&DataRecord::new().with(Raw::Price, 1.0));
        assert_eq!(output.get(Features::LogPrice), Some(&RawValue::SingleNumerical(0.0)));
    }

    namespaces! {
        enum TokenizedRaw {
            Query => Strings,
        }
    }

    #[test]
    fn test_same_name_with_other_categorical_type_fails_to_build() {
        let result = PassThroughTransformer::<TokenizedRaw, Features, RawValue>::new();
        assert!(matches!(
            result,
            Err(Error::ValueTypeMismatch { ref namespace, .. }) if namespace == "Query"
        ));
    }

    #[test]
    #[should_panic(expected = "does not have its declared type")]
    fn test_transformation_with_wrong_type_panics() {
        let transformer = PassThroughTransformer::<Raw, Features, RawValue>::builder()
            .transform(Features::LogPrice, |_: &DataRecord<Raw, RawValue>| {
                Some(RawValue::from("not a number"))
            })
            .build()
            .unwrap();
        transformer.apply(&DataRecord::new());
    }
}
