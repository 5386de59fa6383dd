//! Broadcasting of scalar-or-array arguments and of operand row counts.

mod primitive;
mod shape;

pub use primitive::{BroadcastableF64, BroadcastablePrimitive};
pub(crate) use shape::broadcast_index;
pub use shape::{broadcast_len, broadcast_lens};
