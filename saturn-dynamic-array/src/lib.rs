//! # Saturn Dynamic Array
//!
//! A generic, heap-backed resizable array whose storage always matches its length,
//! with an optional compile-time capacity and element-wise arithmetic.
//!
//! ## Features
//!
//! - **[`DynamicArray<T, FIXED_CAPACITY>`]** – exact-size buffer, rebuilt on every structural mutation
//! - **Bounds-checked access** – `get`, `get_mut`, `set` and `remove_at` return [`DynamicArrayError::OutOfRange`]
//! - **Element-wise arithmetic** – `add`, `subtract`, `scale`, `divide`, also available as `&a + &b` etc.
//! - **[`dynamic_array!`]** – literal constructor checked against the declared capacity
//! - **[`aliases`]** – `IntArray`, `Vec3Float`, `Vec2Bool`, `StrArray` and friends
//!
//! ## Capacity
//!
//! A nonzero `FIXED_CAPACITY` bounds the length of an initializer sequence. It does
//! **not** bound [`DynamicArray::append`], which always succeeds; use
//! [`DynamicArray::try_append`] when growth must respect the bound.
//!
//! ## Quick Examples
//!
//! ### Structural mutation
//!
//! ```rust
//! use saturn_dynamic_array::{dynamic_array, IntArray};
//!
//! let mut array: IntArray = dynamic_array![1, 2, 3].unwrap();
//!
//! array.append(4);
//! array.remove_at(0).unwrap();
//! array.pop_back();
//!
//! assert_eq!(array.to_vec(), vec![2, 3]);
//! ```
//!
//! ### Arithmetic
//!
//! ```rust
//! use saturn_dynamic_array::{DynamicArrayError, Vec3Float};
//!
//! let a = Vec3Float::from_slice(&[1.0, 2.0, 3.0]).unwrap();
//! let b = Vec3Float::from_slice(&[0.5, 0.5, 0.5]).unwrap();
//!
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum.to_vec(), vec![1.5, 2.5, 3.5]);
//!
//! let doubled = &a * 2.0;
//! assert_eq!(doubled.get(2), Ok(&6.0));
//!
//! assert_eq!((&a / 0.0).unwrap_err(), DynamicArrayError::DivisionByZero);
//! ```
//!
//! ## Logging
//!
//! Reallocations are reported as `tracing` events at `TRACE` level and rejected
//! arguments at `DEBUG` level. The crate never installs a subscriber.
//!
//! [`DynamicArray<T, FIXED_CAPACITY>`]: DynamicArray
//! [`dynamic_array!`]: macro@dynamic_array

#[macro_use]
mod macros;

pub mod aliases;
mod arithmetic;
mod array;
pub mod error;
pub mod prelude;

pub use aliases::*;
pub use array::DynamicArray;
pub use error::{DynamicArrayError, ErrorKind, Result};
