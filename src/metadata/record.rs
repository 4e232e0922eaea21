// Wed Jan 14 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryView};
use crate::metadata::flags::ClassFlags;
use crate::metadata::layout::{offsets, HEADER_SIZE, SLOT_SIZE};
use std::fmt;

/// In-place view of one class metadata record.
#[derive(Debug, Clone, Copy)]
pub struct ClassMetadata {
    handle: Address,
    record: MemoryView,
    vtable_offset: usize,
    slot_count: usize,
}

impl ClassMetadata {
    /// # Safety
    /// `handle` must be the address of a live class metadata record with the
    /// layout described in [`crate::metadata::layout`].
    pub unsafe fn from_handle(handle: Address) -> Result<Self, MemoryError> {
        let header = MemoryView::new(handle, HEADER_SIZE)?;
        let class_size = header.read_u32(offsets::CLASS_SIZE)? as usize;
        let address_offset = header.read_u32(offsets::CLASS_ADDRESS_OFFSET)? as usize;

        if address_offset > class_size {
            return Err(MemoryError::InvalidLayout(format!(
                "class address offset {:#x} exceeds class size {:#x}",
                address_offset, class_size
            )));
        }

        let start = handle
            .checked_sub(address_offset)
            .ok_or(MemoryError::Overflow(handle.as_usize()))?;
        let record = MemoryView::new(start, class_size)?;

        let vtable_offset = address_offset + offsets::FIRST_VTABLE_SLOT;
        if vtable_offset > class_size {
            return Err(MemoryError::InvalidLayout(format!(
                "class size {:#x} does not cover the {:#x}-byte header",
                class_size, vtable_offset
            )));
        }

        Ok(Self {
            handle,
            record,
            vtable_offset,
            slot_count: (class_size - vtable_offset) / SLOT_SIZE,
        })
    }

    pub fn handle(&self) -> Address {
        self.handle
    }

    pub fn record_start(&self) -> Address {
        self.record.base()
    }

    fn field_offset(&self, field: usize) -> usize {
        self.vtable_offset - offsets::FIRST_VTABLE_SLOT + field
    }

    pub fn meta_class(&self) -> Result<Address, MemoryError> {
        self.record.read_address(self.field_offset(offsets::META_CLASS))
    }

    pub fn superclass(&self) -> Result<Address, MemoryError> {
        self.record.read_address(self.field_offset(offsets::SUPERCLASS))
    }

    pub fn ro_data(&self) -> Result<Address, MemoryError> {
        self.record.read_address(self.field_offset(offsets::RO_DATA))
    }

    pub fn flags(&self) -> Result<ClassFlags, MemoryError> {
        self.record
            .read_u32(self.field_offset(offsets::FLAGS))
            .map(ClassFlags::from_bits_retain)
    }

    pub fn instance_address_point(&self) -> Result<u32, MemoryError> {
        self.record.read_u32(self.field_offset(offsets::INSTANCE_ADDRESS_POINT))
    }

    pub fn instance_size(&self) -> Result<u32, MemoryError> {
        self.record.read_u32(self.field_offset(offsets::INSTANCE_SIZE))
    }

    pub fn instance_alignment_mask(&self) -> Result<u16, MemoryError> {
        self.record.read_u16(self.field_offset(offsets::INSTANCE_ALIGNMENT_MASK))
    }

    pub fn class_size(&self) -> usize {
        self.record.size()
    }

    pub fn class_address_offset(&self) -> usize {
        self.vtable_offset - offsets::FIRST_VTABLE_SLOT
    }

    pub fn descriptor(&self) -> Result<Address, MemoryError> {
        self.record.read_address(self.field_offset(offsets::DESCRIPTOR))
    }

    pub fn vtable_bounds(&self) -> (Address, Address) {
        (self.record.base() + self.vtable_offset, self.record.end())
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    fn slot_offset(&self, index: usize) -> Result<usize, MemoryError> {
        if index >= self.slot_count {
            return Err(MemoryError::OutOfBounds {
                offset: self.vtable_offset + index.saturating_mul(SLOT_SIZE),
                len: SLOT_SIZE,
                size: self.record.size(),
            });
        }
        Ok(self.vtable_offset + index * SLOT_SIZE)
    }

    pub fn slot_address(&self, index: usize) -> Result<Address, MemoryError> {
        self.slot_offset(index).map(|offset| self.record.base() + offset)
    }

    pub fn read_slot(&self, index: usize) -> Result<Address, MemoryError> {
        let offset = self.slot_offset(index)?;
        self.record.read_address(offset)
    }

    /// # Safety
    /// The record must be writable, no other thread may touch the slot while
    /// this runs, and `value` must be callable with the method's signature.
    pub unsafe fn write_slot(&self, index: usize, value: Address) -> Result<(), MemoryError> {
        let offset = self.slot_offset(index)?;
        self.record.write_word(offset, value.as_usize())
    }
}

impl fmt::Display for ClassMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.vtable_bounds();
        write!(
            f,
            "class @ {} (record {} size {:#x}, vtable {}..{} with {} slots)",
            self.handle,
            self.record_start(),
            self.class_size(),
            start,
            end,
            self.slot_count
        )
    }
}
