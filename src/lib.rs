pub mod error;
pub mod max_heap;

pub use crate::error::{Error, Result};
pub use crate::max_heap::MaxHeap;
