// Fri Jan 16 2026 - Alex

use crate::memory::{Address, MemoryError};
use crate::metadata::ClassMetadata;

/// One live function-pointer cell inside a class's vtable.
#[derive(Debug)]
pub struct VTableSlot<'a> {
    metadata: &'a ClassMetadata,
    index: usize,
}

impl<'a> VTableSlot<'a> {
    pub(crate) fn new(metadata: &'a ClassMetadata, index: usize) -> Self {
        Self { metadata, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn address(&self) -> Result<Address, MemoryError> {
        self.metadata.slot_address(self.index)
    }

    pub fn current(&self) -> Result<Address, MemoryError> {
        self.metadata.read_slot(self.index)
    }

    /// # Safety
    /// `replacement` must have the calling convention and argument layout of
    /// the method it replaces, and no other thread may call through or patch
    /// this slot concurrently.
    pub unsafe fn replace(&mut self, replacement: Address) -> Result<(), MemoryError> {
        self.metadata.write_slot(self.index, replacement)
    }
}
