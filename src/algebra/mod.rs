pub mod distribution;
pub mod error;
pub mod ordered;
pub mod range;

// Flat public surface for the distribution algebra.
pub use distribution::{Defaulting, Distribution, Product, Subset, Sum};
pub use error::{Error, Result};
pub use ordered::{Growable, Ordered, Scalable};
pub use range::{Bound, Range};
