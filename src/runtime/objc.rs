// Thu Jan 15 2026 - Alex

use crate::runtime::ffi::lookup_symbol;
use crate::runtime::{ClassHandle, ClassRegistry};
use libc::{c_char, c_uint, c_void};
use log::{debug, trace};
use once_cell::sync::Lazy;
use std::ffi::CStr;
use std::mem;
use std::slice;

type CopyClassListFn = unsafe extern "C" fn(out_count: *mut c_uint) -> *mut *const c_void;
type ClassGetNameFn = unsafe extern "C" fn(class: *const c_void) -> *const c_char;

struct ObjcRuntime {
    copy_class_list: CopyClassListFn,
    class_get_name: ClassGetNameFn,
}

static OBJC_RUNTIME: Lazy<Option<ObjcRuntime>> = Lazy::new(|| {
    let copy_class_list = lookup_symbol(c"objc_copyClassList")?;
    let class_get_name = lookup_symbol(c"class_getName")?;
    // SAFETY: both symbols are the documented runtime entry points with these signatures.
    unsafe {
        Some(ObjcRuntime {
            copy_class_list: mem::transmute::<*mut c_void, CopyClassListFn>(copy_class_list),
            class_get_name: mem::transmute::<*mut c_void, ClassGetNameFn>(class_get_name),
        })
    }
});

/// Class registry backed by the process's Objective-C runtime.
///
/// Every class the runtime knows about is listed, including ones that will
/// later be rejected by the eligibility policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjcClassRegistry;

impl ObjcClassRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn is_available() -> bool {
        OBJC_RUNTIME.is_some()
    }
}

impl ClassRegistry for ObjcClassRegistry {
    fn list_classes(&self) -> Vec<ClassHandle> {
        let Some(runtime) = OBJC_RUNTIME.as_ref() else {
            debug!("Objective-C runtime not loaded, no classes to list");
            return Vec::new();
        };

        let mut count: c_uint = 0;
        let list = unsafe { (runtime.copy_class_list)(&mut count) };
        if list.is_null() {
            return Vec::new();
        }

        let classes: Vec<ClassHandle> = unsafe { slice::from_raw_parts(list, count as usize) }
            .iter()
            .filter_map(|&class| unsafe { ClassHandle::from_raw(class) })
            .collect();

        unsafe { libc::free(list as *mut c_void) };

        trace!("runtime reported {} classes", classes.len());
        classes
    }

    fn class_name(&self, class: ClassHandle) -> Option<String> {
        let runtime = OBJC_RUNTIME.as_ref()?;
        let name = unsafe { (runtime.class_get_name)(class.as_ptr()) };
        if name.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_matches_availability() {
        let registry = ObjcClassRegistry::new();
        let classes = registry.list_classes();
        if !ObjcClassRegistry::is_available() {
            assert!(classes.is_empty());
        }
    }
}
