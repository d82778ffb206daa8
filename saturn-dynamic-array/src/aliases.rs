//! Named instantiations of [`DynamicArray`] for common element types.
//!
//! The `VecN*` aliases only bound the length of an initializer; see
//! [`DynamicArray::try_append`] for growth that respects the same bound.

use crate::array::DynamicArray;

pub type IntArray = DynamicArray<i32>;
pub type Vec2Int = DynamicArray<i32, 2>;
pub type Vec3Int = DynamicArray<i32, 3>;
pub type Vec4Int = DynamicArray<i32, 4>;

pub type FloatArray = DynamicArray<f32>;
pub type Vec2Float = DynamicArray<f32, 2>;
pub type Vec3Float = DynamicArray<f32, 3>;
pub type Vec4Float = DynamicArray<f32, 4>;

pub type BoolArray = DynamicArray<bool>;
pub type Vec2Bool = DynamicArray<bool, 2>;
pub type Vec3Bool = DynamicArray<bool, 3>;
pub type Vec4Bool = DynamicArray<bool, 4>;

pub type StrArray<'a> = DynamicArray<&'a str>;
pub type Vec2Str<'a> = DynamicArray<&'a str, 2>;
pub type Vec3Str<'a> = DynamicArray<&'a str, 3>;
pub type Vec4Str<'a> = DynamicArray<&'a str, 4>;
