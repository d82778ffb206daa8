//! Exact-size, heap-backed array with an optional construction-time capacity bound.
//!
//! This module provides [`DynamicArray`], a contiguous list whose storage always
//! matches its length. Every structural mutation rebuilds the buffer at the new
//! exact size, so no spare capacity is ever retained.

use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::error::{DynamicArrayError, Result};

/// A resizable array that owns exactly `size()` elements.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `FIXED_CAPACITY` - Upper bound on the length of an initializer sequence.
///   `0` (the default) means unbounded. The bound is checked when constructing
///   from a sequence only; [`append`](Self::append) can grow past it, while
///   [`try_append`](Self::try_append) refuses to.
///
/// # Examples
///
/// ```rust
/// use saturn_dynamic_array::DynamicArray;
///
/// let mut array: DynamicArray<i32, 3> = DynamicArray::from_slice(&[1, 2, 3]).unwrap();
///
/// array.append(4);
/// array.remove_at(0).unwrap();
/// array.pop_back();
///
/// assert_eq!(array.size(), 2);
/// assert_eq!(array.get(0), Ok(&2));
/// assert_eq!(array.get(1), Ok(&3));
/// ```
///
/// # Memory Layout
///
/// Elements live in a `Box<[T]>`. An empty array holds an empty boxed slice,
/// which does not allocate.
#[derive(Clone, Hash)]
pub struct DynamicArray<T, const FIXED_CAPACITY: usize = 0> {
    buffer: Box<[T]>,
}

impl<T, const FIXED_CAPACITY: usize> Default for DynamicArray<T, FIXED_CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const FIXED_CAPACITY: usize> DynamicArray<T, FIXED_CAPACITY> {
    /// Creates a new, empty `DynamicArray` with no backing storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_dynamic_array::DynamicArray;
    ///
    /// let array: DynamicArray<u32> = DynamicArray::new();
    /// assert!(array.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            buffer: Box::default(),
        }
    }

    /// Creates a `DynamicArray` by taking ownership of `elements`, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::CapacityExceeded`] if `FIXED_CAPACITY` is
    /// nonzero and `elements` is longer than it.
    pub fn from_vec(elements: Vec<T>) -> Result<Self> {
        Self::check_initializer(elements.len())?;

        Ok(Self {
            buffer: elements.into_boxed_slice(),
        })
    }

    /// Creates a `DynamicArray` by cloning every element of `slice`, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::CapacityExceeded`] if `FIXED_CAPACITY` is
    /// nonzero and `slice` is longer than it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_dynamic_array::{DynamicArray, ErrorKind};
    ///
    /// let ok: Result<DynamicArray<i32, 2>, _> = DynamicArray::from_slice(&[1, 2]);
    /// assert_eq!(ok.unwrap().size(), 2);
    ///
    /// let err = DynamicArray::<i32, 2>::from_slice(&[1, 2, 3]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn from_slice(slice: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        Self::check_initializer(slice.len())?;

        Ok(Self {
            buffer: slice.into(),
        })
    }

    /// The declared construction-time bound, or `None` when unbounded.
    pub const fn fixed_capacity() -> Option<usize> {
        if FIXED_CAPACITY == 0 {
            None
        } else {
            Some(FIXED_CAPACITY)
        }
    }

    /// Returns the number of live elements.
    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::OutOfRange`] if `index >= size()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.buffer.len();
        self.buffer
            .get(index)
            .ok_or(DynamicArrayError::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::OutOfRange`] if `index >= size()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.buffer.len();
        self.buffer
            .get_mut(index)
            .ok_or(DynamicArrayError::OutOfRange { index, len })
    }

    /// Overwrites the element at `index` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::OutOfRange`] if `index >= size()`; the
    /// array is left untouched and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_dynamic_array::DynamicArray;
    ///
    /// let mut array: DynamicArray<&str> = DynamicArray::from_slice(&["a", "b"]).unwrap();
    /// array.set(1, "z").unwrap();
    /// assert_eq!(array.get(1), Ok(&"z"));
    /// assert!(array.set(2, "c").is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Removes the element at `index`, shifting every later element one slot left.
    ///
    /// The buffer is rebuilt at the new exact size.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::OutOfRange`] if `index >= size()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_dynamic_array::DynamicArray;
    ///
    /// let mut array: DynamicArray<char> = DynamicArray::from_slice(&['a', 'b', 'c', 'd']).unwrap();
    /// assert_eq!(array.remove_at(1), Ok('b'));
    /// assert_eq!(array.to_vec(), vec!['a', 'c', 'd']);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.buffer.len();
        if index >= len {
            return Err(DynamicArrayError::OutOfRange { index, len });
        }

        Ok(self.rebuild("remove_at", |elements| elements.remove(index)))
    }

    /// Releases the buffer and sets the size to zero.
    pub fn clear(&mut self) {
        let old_len = self.buffer.len();
        self.buffer = Box::default();
        trace!(op = "clear", old_len, new_len = 0usize, "released buffer");
    }

    /// Appends `value` to the back of the array.
    ///
    /// Always succeeds, even when it grows the array beyond `FIXED_CAPACITY`.
    /// Use [`try_append`](Self::try_append) to honour the bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_dynamic_array::DynamicArray;
    ///
    /// let mut array: DynamicArray<u8, 1> = DynamicArray::from_slice(&[1]).unwrap();
    /// array.append(2);
    /// assert_eq!(array.size(), 2);
    /// ```
    pub fn append(&mut self, value: T) {
        let new_len = self.buffer.len() + 1;
        if FIXED_CAPACITY != 0 && new_len > FIXED_CAPACITY {
            // Capacity is only enforced on construction.
            debug!(
                new_len,
                capacity = FIXED_CAPACITY,
                "append grows array past its fixed capacity"
            );
        }

        self.rebuild("append", |elements| {
            elements.reserve_exact(1);
            elements.push(value);
        });
    }

    /// Appends `value` unless that would exceed `FIXED_CAPACITY`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::CapacityExceeded`] if the array is bounded
    /// and already holds `FIXED_CAPACITY` or more elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_dynamic_array::DynamicArray;
    ///
    /// let mut array: DynamicArray<u8, 2> = DynamicArray::new();
    /// assert!(array.try_append(1).is_ok());
    /// assert!(array.try_append(2).is_ok());
    /// assert!(array.try_append(3).is_err());
    /// ```
    pub fn try_append(&mut self, value: T) -> Result<()> {
        let len = self.buffer.len();
        if FIXED_CAPACITY != 0 && len >= FIXED_CAPACITY {
            debug!(len, capacity = FIXED_CAPACITY, "rejected append at capacity");
            return Err(DynamicArrayError::CapacityExceeded {
                len: len + 1,
                capacity: FIXED_CAPACITY,
            });
        }

        self.append(value);
        Ok(())
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_dynamic_array::DynamicArray;
    ///
    /// let mut array: DynamicArray<u32> = DynamicArray::new();
    /// assert_eq!(array.pop_back(), None);
    ///
    /// array.append(42);
    /// assert_eq!(array.pop_back(), Some(42));
    /// assert_eq!(array.size(), 0);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.buffer.is_empty() {
            return None;
        }

        self.rebuild("pop_back", Vec::pop)
    }

    /// Copies the elements out into a `Vec`, preserving order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buffer.to_vec()
    }

    /// Consumes the array and returns its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.buffer.into_vec()
    }

    pub(crate) fn elements(&self) -> &[T] {
        &self.buffer
    }

    /// Moves the elements into a scratch `Vec`, lets `edit` change it, then
    /// stores it back as an exact-size buffer.
    fn rebuild<R>(&mut self, op: &'static str, edit: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let old_len = self.buffer.len();
        let mut elements = mem::take(&mut self.buffer).into_vec();

        let out = edit(&mut elements);

        self.buffer = elements.into_boxed_slice();
        trace!(op, old_len, new_len = self.buffer.len(), "reallocated buffer");

        out
    }

    fn check_initializer(len: usize) -> Result<()> {
        if FIXED_CAPACITY != 0 && len > FIXED_CAPACITY {
            debug!(len, capacity = FIXED_CAPACITY, "initializer exceeds fixed capacity");
            return Err(DynamicArrayError::CapacityExceeded {
                len,
                capacity: FIXED_CAPACITY,
            });
        }

        Ok(())
    }
}

impl<T> DynamicArray<T> {
    /// Wraps already-built elements in an unbounded array. Used for the
    /// results of element-wise arithmetic, which never carry a capacity.
    pub(crate) fn from_elements(elements: Vec<T>) -> Self {
        Self {
            buffer: elements.into_boxed_slice(),
        }
    }
}

impl<T: fmt::Debug, const FIXED_CAPACITY: usize> fmt::Debug for DynamicArray<T, FIXED_CAPACITY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buffer.iter()).finish()
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<DynamicArray<U, M>> for DynamicArray<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U, M>) -> bool {
        self.buffer[..] == other.buffer[..]
    }
}

impl<T: Eq, const FIXED_CAPACITY: usize> Eq for DynamicArray<T, FIXED_CAPACITY> {}

impl<T, const FIXED_CAPACITY: usize, const M: usize> TryFrom<[T; M]>
    for DynamicArray<T, FIXED_CAPACITY>
{
    type Error = DynamicArrayError;

    fn try_from(array: [T; M]) -> Result<Self> {
        Self::from_vec(Vec::from(array))
    }
}

impl<T, const FIXED_CAPACITY: usize> TryFrom<Vec<T>> for DynamicArray<T, FIXED_CAPACITY> {
    type Error = DynamicArrayError;

    fn try_from(elements: Vec<T>) -> Result<Self> {
        Self::from_vec(elements)
    }
}

impl<T: Clone, const FIXED_CAPACITY: usize> TryFrom<&[T]> for DynamicArray<T, FIXED_CAPACITY> {
    type Error = DynamicArrayError;

    fn try_from(slice: &[T]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl<T, const FIXED_CAPACITY: usize> From<DynamicArray<T, FIXED_CAPACITY>> for Vec<T> {
    fn from(array: DynamicArray<T, FIXED_CAPACITY>) -> Self {
        array.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_is_empty() {
        let array = DynamicArray::<u32, 4>::default();
        assert_eq!(array.size(), 0);
        assert!(array.is_empty());
        assert_eq!(DynamicArray::<u32, 4>::fixed_capacity(), Some(4));
        assert_eq!(DynamicArray::<u32>::fixed_capacity(), None);
    }

    #[test]
    fn test_from_slice_preserves_order() {
        let array = DynamicArray::<i32>::from_slice(&[5, 6, 7]).unwrap();
        assert_eq!(array.size(), 3);
        assert_eq!(array.to_vec(), vec![5, 6, 7]);
    }

    #[test]
    fn test_initializer_capacity_bound() {
        assert!(DynamicArray::<i32, 3>::from_slice(&[1, 2, 3]).is_ok());
        assert!(DynamicArray::<i32, 3>::from_slice(&[]).is_ok());
        assert_eq!(
            DynamicArray::<i32, 3>::from_slice(&[1, 2, 3, 4]).unwrap_err(),
            DynamicArrayError::CapacityExceeded { len: 4, capacity: 3 }
        );
        assert_eq!(
            DynamicArray::<i32, 2>::try_from([1, 2, 3]).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        // Unbounded arrays take any initializer.
        assert_eq!(DynamicArray::<i32>::try_from(vec![0; 100]).unwrap().size(), 100);
    }

    #[test]
    fn test_get_and_set() {
        let mut array = DynamicArray::<u32>::from_slice(&[1, 2]).unwrap();
        array.set(0, 10).unwrap();
        assert_eq!(array.get(0), Ok(&10));
        *array.get_mut(1).unwrap() = 20;
        assert_eq!(array.get(1), Ok(&20));
    }

    #[test]
    fn test_out_of_range_on_empty() {
        let mut array = DynamicArray::<u32>::new();
        assert_eq!(
            array.get(0),
            Err(DynamicArrayError::OutOfRange { index: 0, len: 0 })
        );
        assert_eq!(array.set(0, 1).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(array.remove_at(0).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert!(array.is_empty());
    }

    #[test]
    fn test_out_of_range_leaves_state() {
        let mut array = DynamicArray::<u32>::from_slice(&[1, 2, 3]).unwrap();
        assert!(array.set(3, 9).is_err());
        assert!(array.remove_at(7).is_err());
        assert_eq!(array.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_at_keeps_order() {
        let mut array = DynamicArray::<char>::from_slice(&['a', 'b', 'c', 'd']).unwrap();
        assert_eq!(array.remove_at(1), Ok('b'));
        assert_eq!(array.to_vec(), vec!['a', 'c', 'd']);
        assert_eq!(array.remove_at(2), Ok('d'));
        assert_eq!(array.remove_at(0), Ok('a'));
        assert_eq!(array.to_vec(), vec!['c']);
    }

    #[test]
    fn test_append_and_pop_back() {
        let mut array = DynamicArray::<u32>::new();
        array.append(1);
        array.append(2);
        assert_eq!(array.size(), 2);
        assert_eq!(array.get(1), Ok(&2));

        assert_eq!(array.pop_back(), Some(2));
        assert_eq!(array.pop_back(), Some(1));
        assert_eq!(array.pop_back(), None);
        assert_eq!(array.size(), 0);
    }

    #[test]
    fn test_append_past_fixed_capacity() {
        let mut array = DynamicArray::<u32, 2>::from_slice(&[1, 2]).unwrap();
        array.append(3);
        assert_eq!(array.size(), 3);
        assert_eq!(array.get(2), Ok(&3));
    }

    #[test]
    fn test_try_append_respects_capacity() {
        let mut array = DynamicArray::<u32, 2>::new();
        array.try_append(1).unwrap();
        array.try_append(2).unwrap();
        assert_eq!(
            array.try_append(3),
            Err(DynamicArrayError::CapacityExceeded { len: 3, capacity: 2 })
        );
        assert_eq!(array.to_vec(), vec![1, 2]);

        let mut unbounded = DynamicArray::<u32>::new();
        for value in 0..10 {
            unbounded.try_append(value).unwrap();
        }
        assert_eq!(unbounded.size(), 10);
    }

    #[test]
    fn test_clear() {
        let mut array = DynamicArray::<String>::from_vec(vec!["x".into(), "y".into()]).unwrap();
        array.clear();
        assert!(array.is_empty());
        array.clear();
        assert!(array.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = DynamicArray::<i32>::from_slice(&[1, 2]).unwrap();
        let mut copy = original.clone();
        copy.set(0, 100).unwrap();
        assert_eq!(original.get(0), Ok(&1));
        assert_eq!(copy.get(0), Ok(&100));
    }

    #[test]
    fn test_equality_across_capacities() {
        let bounded = DynamicArray::<i32, 3>::from_slice(&[1, 2, 3]).unwrap();
        let unbounded = DynamicArray::<i32>::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(bounded, unbounded);
        assert_ne!(bounded, DynamicArray::<i32>::new());
    }

    #[test]
    fn test_debug_format() {
        let array = DynamicArray::<i32>::from_slice(&[1, 2]).unwrap();
        assert_eq!(format!("{array:?}"), "[1, 2]");
    }

    #[test]
    fn test_non_clone_elements() {
        struct Token(u8);

        let mut array = DynamicArray::<Token>::from_vec(vec![Token(1), Token(2)]).unwrap();
        array.append(Token(3));
        assert_eq!(array.remove_at(0).map(|t| t.0), Ok(1));
        assert_eq!(array.pop_back().map(|t| t.0), Some(3));
        assert_eq!(array.get(0).map(|t| t.0), Ok(2));
    }
}
