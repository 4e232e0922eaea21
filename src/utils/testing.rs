// Tue Jan 13 2026 - Alex

//! Synthetic metadata records and a fake class registry for unit tests.

use crate::memory::Address;
use crate::metadata::layout::{offsets, ClassMetadataLayout, SLOT_SIZE};
use crate::metadata::ClassFlags;
use crate::runtime::{ClassHandle, ClassRegistry};
use std::ptr;

/// A heap-allocated class metadata record with a caller-chosen vtable.
///
/// The record is laid out like a runtime record: two words of private header,
/// then the fixed fields at the handle, then the vtable.
pub struct SyntheticClass {
    words: *mut usize,
    len: usize,
}

impl SyntheticClass {
    pub const ADDRESS_OFFSET: usize = 2 * SLOT_SIZE;
    pub const INSTANCE_SIZE: u32 = 32;

    pub fn new(slots: &[usize]) -> Self {
        let prefix = Self::ADDRESS_OFFSET / SLOT_SIZE;
        let header = offsets::FIRST_VTABLE_SLOT / SLOT_SIZE;
        let len = prefix + header + slots.len().max(1);
        let words = Box::into_raw(vec![0usize; len].into_boxed_slice()) as *mut usize;
        let class = Self { words, len };

        let class_size = Self::ADDRESS_OFFSET + offsets::FIRST_VTABLE_SLOT + slots.len() * SLOT_SIZE;
        let layout = ClassMetadataLayout {
            ro_data: 0x1,
            flags: ClassFlags::USES_SWIFT_REFCOUNTING.bits(),
            instance_address_point: 0,
            instance_size: Self::INSTANCE_SIZE,
            instance_alignment_mask: 7,
            class_size: class_size as u32,
            class_address_offset: Self::ADDRESS_OFFSET as u32,
            descriptor: 0xd0,
            first_vtable_slot: slots.first().copied().unwrap_or(0),
            ..ClassMetadataLayout::default()
        };
        unsafe { ptr::write(class.handle().as_mut_ptr::<ClassMetadataLayout>(), layout) };

        for (i, &slot) in slots.iter().enumerate() {
            class.set_slot(i, slot);
        }
        class
    }

    pub fn handle(&self) -> Address {
        Address::from_ptr(self.words) + Self::ADDRESS_OFFSET
    }

    pub fn class_handle(&self) -> ClassHandle {
        unsafe { ClassHandle::from_raw(self.handle().as_ptr()) }.expect("synthetic class is never null")
    }

    fn slot_ptr(&self, index: usize) -> *mut usize {
        (self.handle() + offsets::FIRST_VTABLE_SLOT + index * SLOT_SIZE).as_mut_ptr()
    }

    pub fn slot(&self, index: usize) -> usize {
        unsafe { ptr::read(self.slot_ptr(index)) }
    }

    pub fn set_slot(&self, index: usize, value: usize) {
        unsafe { ptr::write(self.slot_ptr(index), value) }
    }

    pub fn set_class_size(&self, size: u32) {
        unsafe { ptr::write((self.handle() + offsets::CLASS_SIZE).as_mut_ptr::<u32>(), size) }
    }

    pub fn snapshot(&self) -> Vec<usize> {
        unsafe { std::slice::from_raw_parts(self.words, self.len) }.to_vec()
    }
}

impl Drop for SyntheticClass {
    fn drop(&mut self) {
        unsafe { drop(Box::from_raw(ptr::slice_from_raw_parts_mut(self.words, self.len))) };
    }
}

/// Registry over a fixed list of named classes, listed in insertion order.
#[derive(Debug, Default, Clone)]
pub struct FakeRegistry {
    classes: Vec<(ClassHandle, String)>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: &SyntheticClass, name: &str) -> Self {
        self.classes.push((class.class_handle(), name.to_string()));
        self
    }
}

impl ClassRegistry for FakeRegistry {
    fn list_classes(&self) -> Vec<ClassHandle> {
        self.classes.iter().map(|(handle, _)| *handle).collect()
    }

    fn class_name(&self, class: ClassHandle) -> Option<String> {
        self.classes
            .iter()
            .find(|(handle, _)| *handle == class)
            .map(|(_, name)| name.clone())
    }
}
