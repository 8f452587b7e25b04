use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Element, Transformation, Value};

/// Errors reported by fallible `List` operations.
///
/// All variants are recoverable and local to the failing call; no operation retries internally or
/// aborts the process.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ListError {
    /// The requested position is outside `[0, len)`.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A removal was requested for a value with zero occurrences.
    #[error("item not found in list")]
    ItemNotFound,
    /// A transformation value could not be stored as the target list's element type.
    ///
    /// Carries the position of the failing value within the transformation and the value itself.
    /// Values before `index` have already been appended to the target when this is returned.
    #[error("transformation value at index {index} cannot be stored in the list: {value}")]
    TypeMismatch { index: usize, value: Value },
}

/// Returns the 0-indexed position of the item in the list, if it's found
fn item_pos<T: Element>(items: &[T], item: &T) -> Option<usize> {
    items.iter().position(|v| v == item)
}

/// Collection that stores homogenous elements in a fixed order.
///
/// Elements keep their insertion order except where an operation explicitly removes or replaces
/// them. The list provides no internal synchronization; sharing one across threads for mutation
/// requires external synchronization by the caller.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct List<T: Element> {
    items: Vec<T>,
}

impl<T: Element> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self { items: vec![] }
    }
}

impl<T: Element> From<Vec<T>> for List<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Element> From<&[T]> for List<T> {
    #[inline]
    fn from(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }
}

impl<T: Element> From<List<T>> for Vec<T> {
    #[inline]
    fn from(l: List<T>) -> Self {
        l.items
    }
}

impl<T: Element> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Element> List<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with the given initial capacity.
    ///
    /// The capacity is a storage hint and has no observable effect on any operation.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the list holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Releases excess capacity.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    /// Appends an element to the end of the list.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Checks whether an element is present in the list.
    #[inline]
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Returns the index of the first occurrence of the element, if it's present.
    #[inline]
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        item_pos(&self.items, item)
    }

    /// Returns the number of occurrences of the given element in the list.
    #[must_use]
    pub fn count_of(&self, item: &T) -> usize {
        self.items.iter().filter(|e| *e == item).count()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Fails with `ListError::IndexOutOfRange` for an invalid index.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.items.get(index).ok_or(ListError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Returns a new list containing the first occurrence of each distinct element, in original
    /// relative order. The receiver is left unmodified.
    #[must_use]
    pub fn distinct(&self) -> Self {
        let mut seen: IndexSet<T> = IndexSet::with_capacity(self.items.len());
        for e in &self.items {
            // the set keeps the first occurrence and ignores later duplicates
            seen.insert(e.clone());
        }
        Self {
            items: seen.into_iter().collect(),
        }
    }

    /// Removes duplicates of elements in the list, keeping first occurrences.
    pub fn remove_duplicates(&mut self) {
        self.items = self.distinct().items;
    }

    /// Appends all elements of `other`, in order, to the end of the list, consuming `other`.
    pub fn extend(&mut self, other: Self) {
        self.items.extend(other.items);
    }

    /// Appends all elements of `other`, in order, to the end of the list. `other` is left
    /// unmodified.
    pub fn extend_from(&mut self, other: &Self) {
        self.items.extend_from_slice(&other.items);
    }

    /// Removes the first occurrence of the given element from the list, shifting subsequent
    /// elements left by one.
    ///
    /// Fails with `ListError::ItemNotFound` if the element is not present in the list.
    pub fn remove_first(&mut self, item: &T) -> Result<(), ListError> {
        let pos = item_pos(&self.items, item).ok_or(ListError::ItemNotFound)?;
        self.items.remove(pos);
        Ok(())
    }

    /// Removes all occurrences of the given element from the list, preserving the relative order
    /// of the surviving elements.
    ///
    /// Fails with `ListError::ItemNotFound` if the element is not present in the list.
    pub fn remove_all(&mut self, item: &T) -> Result<(), ListError> {
        match self.count_of(item) {
            0 => Err(ListError::ItemNotFound),
            1 => self.remove_first(item),
            _ => {
                self.items.retain(|e| e != item);
                Ok(())
            }
        }
    }

    /// Returns a new list holding the elements for which the predicate returns true, in original
    /// order.
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        let mut items = Vec::with_capacity(self.items.len());
        for e in &self.items {
            if predicate(e) {
                items.push(e.clone());
            }
        }
        Self { items }
    }

    /// Applies the callback to each element along with its 0-based position, producing a
    /// type-erased [`Transformation`] of the results. The receiver is left unmodified.
    ///
    /// Pass the returned transformation to [`List::copy_from`] on a target list to recover the
    /// results as concrete elements. When the result type is known at compile time, prefer
    /// [`List::map_into`], which skips the type-erased detour.
    ///
    /// # Example
    ///
    /// ```
    /// use collections_rs::List;
    /// use collections_rs::types::Value;
    ///
    /// let l = List::from(vec![1i64, 2, 3]);
    /// let mut target = List::<i64>::new();
    /// target.copy_from(l.map(|x, _| Value::from(x * 10))).unwrap();
    /// assert_eq!(target.to_vec(), vec![10, 20, 30]);
    /// ```
    #[must_use]
    pub fn map<F>(&self, mut callback: F) -> Transformation
    where
        F: FnMut(&T, usize) -> Value,
    {
        let mut values = Vec::with_capacity(self.items.len());
        for (i, e) in self.items.iter().enumerate() {
            values.push(callback(e, i));
        }
        Transformation::from(values)
    }

    /// Applies the callback to each element along with its 0-based position, producing a new list
    /// of the results. The receiver is left unmodified.
    #[must_use]
    pub fn map_into<U, F>(&self, mut callback: F) -> List<U>
    where
        U: Element,
        F: FnMut(&T, usize) -> U,
    {
        let mut items = Vec::with_capacity(self.items.len());
        for (i, e) in self.items.iter().enumerate() {
            items.push(callback(e, i));
        }
        List { items }
    }

    /// Copies the values of a [`Transformation`] returned by [`List::map`] into the list,
    /// appending each value in order.
    ///
    /// Fails with `ListError::TypeMismatch` on the first value which can't be stored as the
    /// list's element type. The copy is not transactional: values recovered before the mismatch
    /// remain appended, and the error reports the failing position so callers wanting
    /// all-or-nothing semantics can truncate back to the pre-call length.
    pub fn copy_from(&mut self, transformation: Transformation) -> Result<(), ListError> {
        for (index, value) in transformation.into_iter().enumerate() {
            match T::try_from(value) {
                Ok(item) => self.items.push(item),
                Err(value) => return Err(ListError::TypeMismatch { index, value }),
            }
        }
        Ok(())
    }

    /// Reduces the list to a single element of the same type by left-folding the callback over
    /// the elements in order, starting from `initial`.
    #[must_use]
    pub fn reduce<F>(&self, callback: F, initial: T) -> T
    where
        F: FnMut(T, &T) -> T,
    {
        self.items.iter().fold(initial, callback)
    }

    /// Returns an iterator over references to the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the elements in order as a slice.
    ///
    /// The slice borrows the list's storage; use [`List::to_vec`] for an independent copy.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns a copy of the elements in order.
    ///
    /// The returned vector does not alias the list's storage: mutating it never affects the list,
    /// nor the reverse.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<'a, T: Element> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> std::fmt::Display for List<T> {
    /// Renders the list as `[e1,e2,...,en]` using each element's default string form.
    ///
    /// # Example
    ///
    /// ```
    /// use collections_rs::List;
    ///
    /// let l = List::from(vec!["a".to_string(), "b".to_string()]);
    /// assert_eq!(l.to_string(), "[a,b]");
    /// assert_eq!(List::<i64>::new().to_string(), "[]");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")
    }
}
