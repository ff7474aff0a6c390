//! Personal finance simulation built on a range-indexed value-distribution
//! algebra.

pub mod algebra;
pub mod money;
pub mod simulate;
pub mod value;

pub use algebra::{Bound, Distribution, Range};
pub use money::Money;
pub use value::Value;
