/// Builds a [`DynamicArray`](crate::DynamicArray) from a literal list of elements.
///
/// Expands to [`DynamicArray::from_vec`](crate::DynamicArray::from_vec), so the
/// result is a `Result` and the fixed capacity comes from the annotated type.
///
/// # Examples
///
/// ```rust
/// use saturn_dynamic_array::{dynamic_array, Vec2Int, Vec3Int};
///
/// let v: Vec3Int = dynamic_array![1, 2, 3].unwrap();
/// assert_eq!(v.size(), 3);
///
/// let too_long: Result<Vec2Int, _> = dynamic_array![1, 2, 3];
/// assert!(too_long.is_err());
/// ```
#[macro_export]
macro_rules! dynamic_array {
    () => {
        $crate::DynamicArray::from_vec(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::DynamicArray::from_vec(::std::vec![$($element),+])
    };
}
