// Fri Jan 16 2026 - Alex

pub mod slot;
pub mod vtable;
pub mod walker;

pub use slot::VTableSlot;
pub use vtable::{ResolvedMethod, VTable};
pub use walker::{SystemHooker, VTableHooker};
