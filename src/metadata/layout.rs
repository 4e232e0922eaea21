// Wed Jan 14 2026 - Alex

//! Byte layout of a class metadata record.
//!
//! The record is laid out by the runtime, not by us. The class handle points at
//! `meta_class`; `class_address_offset` bytes of runtime-private header sit in
//! front of it and the vtable runs from `first_vtable_slot` to
//! `handle - class_address_offset + class_size`.
//!
//! | field                     | LP64 offset | ILP32 offset |
//! |---------------------------|-------------|--------------|
//! | `meta_class`              | 0x00        | 0x00         |
//! | `superclass`              | 0x08        | 0x04         |
//! | `reserved1`               | 0x10        | 0x08         |
//! | `reserved2`               | 0x18        | 0x0c         |
//! | `ro_data`                 | 0x20        | 0x10         |
//! | `flags`                   | 0x28        | 0x14         |
//! | `instance_address_point`  | 0x2c        | 0x18         |
//! | `instance_size`           | 0x30        | 0x1c         |
//! | `instance_alignment_mask` | 0x34        | 0x20         |
//! | `reserved_short`          | 0x36        | 0x22         |
//! | `class_size`              | 0x38        | 0x24         |
//! | `class_address_offset`    | 0x3c        | 0x28         |
//! | `descriptor`              | 0x40        | 0x2c         |
//! | `first_vtable_slot`       | 0x48        | 0x30         |

use std::mem;

/// Fixed header of a class metadata record, as seen from the class handle.
///
/// Only used for its layout; records are never constructed or copied through
/// this type outside of tests.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassMetadataLayout {
    pub meta_class: usize,
    pub superclass: usize,
    pub reserved1: usize,
    pub reserved2: usize,
    pub ro_data: usize,
    pub flags: u32,
    pub instance_address_point: u32,
    pub instance_size: u32,
    pub instance_alignment_mask: u16,
    pub reserved_short: u16,
    pub class_size: u32,
    pub class_address_offset: u32,
    pub descriptor: usize,
    pub first_vtable_slot: usize,
}

/// Field offsets relative to the class handle.
pub mod offsets {
    use super::ClassMetadataLayout;
    use std::mem::offset_of;

    pub const META_CLASS: usize = offset_of!(ClassMetadataLayout, meta_class);
    pub const SUPERCLASS: usize = offset_of!(ClassMetadataLayout, superclass);
    pub const RESERVED1: usize = offset_of!(ClassMetadataLayout, reserved1);
    pub const RESERVED2: usize = offset_of!(ClassMetadataLayout, reserved2);
    pub const RO_DATA: usize = offset_of!(ClassMetadataLayout, ro_data);
    pub const FLAGS: usize = offset_of!(ClassMetadataLayout, flags);
    pub const INSTANCE_ADDRESS_POINT: usize = offset_of!(ClassMetadataLayout, instance_address_point);
    pub const INSTANCE_SIZE: usize = offset_of!(ClassMetadataLayout, instance_size);
    pub const INSTANCE_ALIGNMENT_MASK: usize = offset_of!(ClassMetadataLayout, instance_alignment_mask);
    pub const RESERVED_SHORT: usize = offset_of!(ClassMetadataLayout, reserved_short);
    pub const CLASS_SIZE: usize = offset_of!(ClassMetadataLayout, class_size);
    pub const CLASS_ADDRESS_OFFSET: usize = offset_of!(ClassMetadataLayout, class_address_offset);
    pub const DESCRIPTOR: usize = offset_of!(ClassMetadataLayout, descriptor);
    pub const FIRST_VTABLE_SLOT: usize = offset_of!(ClassMetadataLayout, first_vtable_slot);
}

pub const SLOT_SIZE: usize = mem::size_of::<usize>();

/// Bytes of header that must be readable at the class handle before the
/// vtable starts.
pub const HEADER_SIZE: usize = offsets::FIRST_VTABLE_SLOT;
