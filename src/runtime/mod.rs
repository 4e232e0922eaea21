// Thu Jan 15 2026 - Alex

pub(crate) mod ffi;
pub mod objc;

pub use objc::ObjcClassRegistry;

use crate::memory::Address;
use libc::c_void;
use std::fmt;

/// Opaque identifier of a runtime class: the address its metadata record is
/// referenced by. The runtime owns the class and keeps it alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassHandle(Address);

impl ClassHandle {
    /// # Safety
    /// `class` must point at a class metadata record that stays alive for as
    /// long as the handle is used.
    pub unsafe fn from_raw(class: *const c_void) -> Option<Self> {
        if class.is_null() {
            None
        } else {
            Some(Self(Address::from_ptr(class)))
        }
    }

    pub fn address(&self) -> Address {
        self.0
    }

    pub fn as_ptr(&self) -> *const c_void {
        self.0.as_ptr()
    }
}

impl fmt::Display for ClassHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of the classes currently registered with the runtime.
pub trait ClassRegistry {
    /// Snapshot of every registered class at call time. An empty result is a
    /// valid answer, not a failure.
    fn list_classes(&self) -> Vec<ClassHandle>;

    fn class_name(&self, class: ClassHandle) -> Option<String>;
}
