// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Null address for {0}")]
    NullAddress(&'static str),
    #[error("Out of bounds: offset {offset:#x} + {len} exceeds view of {size} bytes")]
    OutOfBounds { offset: usize, len: usize, size: usize },
    #[error("Alignment error: address {0:#x} not aligned to {1}")]
    AlignmentError(usize, usize),
    #[error("Address arithmetic overflow at {0:#x}")]
    Overflow(usize),
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}
