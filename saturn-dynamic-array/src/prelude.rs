//! Everything needed to build and combine arrays.
//!
//! Import this as `use saturn_dynamic_array::prelude::*` to get the container,
//! its error types, the named aliases and the `dynamic_array!` macro.

pub use crate::aliases::*;
pub use crate::array::DynamicArray;
pub use crate::dynamic_array;
pub use crate::error::{DynamicArrayError, ErrorKind};
