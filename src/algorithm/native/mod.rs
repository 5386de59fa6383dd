//! Algorithms that only depend on the N×2 layout, not on what the columns mean.

mod concatenate;
mod reduce;
mod take;
mod unary;

pub use concatenate::Concatenate;
pub use reduce::{Axis, Reduce, Reduction};
pub use take::Take;
pub use unary::PARALLEL_ROW_THRESHOLD;
pub(crate) use unary::{unary_f64, unary_rows};
