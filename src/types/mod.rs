mod from;
mod value;

pub use value::Value;

use std::fmt::Display;
use std::hash::Hash;

/// Capability bound for list element types.
///
/// Operations which depend on value equality (`contains`, `index_of`, `count_of`, `distinct`,
/// `remove_first`, `remove_all`) require `Eq + Hash`; `Display` provides the default string form
/// used when rendering a list; the `Value` conversions bridge elements into and out of the
/// type-erased [`Transformation`] used by `List::map` and `List::copy_from`.
///
/// The trait is implemented automatically for every type with these capabilities. The crate ships
/// `Value` conversions for `bool`, `String` and the integer primitives; floats are deliberately
/// not covered since they don't support total equality.
pub trait Element:
    Clone + Eq + Hash + Display + Into<Value> + TryFrom<Value, Error = Value>
{
}

impl<T> Element for T where
    T: Clone + Eq + Hash + Display + Into<Value> + TryFrom<Value, Error = Value>
{
}

/// Temporary value store for the results of `List::map`.
///
/// A `Transformation` only exists to convey the output of one `map` call into one `copy_from`
/// call on a (possibly different-element-type) target list; it has no operations of its own
/// beyond that handoff.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Transformation {
    values: Vec<Value>,
}

impl Transformation {
    /// Returns the number of values held by the transformation.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks whether the transformation holds no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the held values in order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl From<Vec<Value>> for Transformation {
    #[inline]
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl IntoIterator for Transformation {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
