// Tue Jan 13 2026 - Alex

pub mod address;
pub mod error;
pub mod view;

pub use address::Address;
pub use error::MemoryError;
pub use view::MemoryView;
