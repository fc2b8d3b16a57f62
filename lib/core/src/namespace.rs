//! Closed namespace vocabularies
//!
//! A vocabulary is a fieldless enum whose members are the namespaces valid at
//! one pipeline stage. Each member has a stable ordinal, a name and a declared
//! [`ValueType`]. Use [`namespaces!`](crate::namespaces) to declare one.

use crate::value::ValueType;
use std::fmt::Debug;
use std::hash::Hash;

/// A member of a closed namespace vocabulary
///
/// `VOCABULARY[n.ordinal()] == n` must hold for every member `n`.
pub trait Namespace: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Every member, in declaration order
    const VOCABULARY: &'static [Self];

    fn ordinal(self) -> usize;

    /// Name used to match namespaces across vocabularies
    fn name(self) -> &'static str;

    fn value_type(self) -> ValueType;

    /// Look up a member by name
    fn from_name(name: &str) -> Option<Self> {
        Self::VOCABULARY.iter().copied().find(|ns| ns.name() == name)
    }
}

/// Declare a namespace vocabulary.
///
/// ```rust
/// use hotvect_core::{namespaces, Namespace, ValueType};
///
/// namespaces! {
///     pub enum Raw {
///         UserId => SingleCategorical,
///         Query => SingleString,
///         Price => SingleNumerical,
///     }
/// }
///
/// assert_eq!(Raw::VOCABULARY.len(), 3);
/// assert_eq!(Raw::Query.ordinal(), 1);
/// assert_eq!(Raw::Price.name(), "Price");
/// assert_eq!(Raw::UserId.value_type(), ValueType::SingleCategorical);
/// ```
#[macro_export]
macro_rules! namespaces {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value_type:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $crate::Namespace for $name {
            const VOCABULARY: &'static [Self] = &[$($name::$variant),+];

            #[inline]
            fn ordinal(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            fn value_type(self) -> $crate::ValueType {
                match self {
                    $($name::$variant => $crate::ValueType::$value_type),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Namespace::name(*self))
            }
        }
    };
}
