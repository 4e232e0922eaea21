// Tue Jan 13 2026 - Alex

use crate::runtime::ffi::lookup_symbol;
use libc::{c_char, c_void};
use once_cell::sync::Lazy;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

/// Mangling prefixes used by the runtime across its ABI generations, with and
/// without the platform's leading underscore.
const SWIFT_PREFIXES: &[&str] = &["$s", "_$s", "$S", "_$S", "$e", "_$e", "_T0", "_T"];

/// Turns a raw mangled symbol into a readable signature.
pub trait Demangler {
    fn demangle(&self, symbol: &str) -> Option<String>;
}

impl<F> Demangler for F
where
    F: Fn(&str) -> Option<String>,
{
    fn demangle(&self, symbol: &str) -> Option<String> {
        self(symbol)
    }
}

pub fn is_swift_mangled(name: &str) -> bool {
    SWIFT_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

type SwiftDemangleFn = unsafe extern "C" fn(
    mangled_name: *const c_char,
    mangled_name_length: usize,
    output_buffer: *mut c_char,
    output_buffer_size: *mut usize,
    flags: u32,
) -> *mut c_char;

static SWIFT_DEMANGLE: Lazy<Option<SwiftDemangleFn>> = Lazy::new(|| {
    let sym = lookup_symbol(c"swift_demangle")?;
    // SAFETY: swift_demangle is exported by the runtime with this signature.
    Some(unsafe { mem::transmute::<*mut c_void, SwiftDemangleFn>(sym) })
});

/// Demangles through the runtime's own `swift_demangle` entry point.
///
/// Returns `None` for names outside the runtime's mangling scheme and when the
/// runtime is not loaded into this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftRuntimeDemangler;

impl SwiftRuntimeDemangler {
    pub fn new() -> Self {
        Self
    }

    pub fn is_available() -> bool {
        SWIFT_DEMANGLE.is_some()
    }
}

impl Demangler for SwiftRuntimeDemangler {
    fn demangle(&self, symbol: &str) -> Option<String> {
        if !is_swift_mangled(symbol) {
            return None;
        }
        let demangle = (*SWIFT_DEMANGLE)?;
        let mangled = CString::new(symbol).ok()?;

        let out = unsafe {
            demangle(mangled.as_ptr(), symbol.len(), ptr::null_mut(), ptr::null_mut(), 0)
        };
        if out.is_null() {
            return None;
        }

        let readable = unsafe { CStr::from_ptr(out) }.to_string_lossy().into_owned();
        unsafe { libc::free(out as *mut c_void) };
        Some(readable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mangling_prefixes() {
        assert!(is_swift_mangled("$s14SwiftHookTests9TestClassC5print3strySS_tF"));
        assert!(is_swift_mangled("_$s14SwiftHookTests9TestClassC5print3strySS_tF"));
        assert!(is_swift_mangled("_T014SwiftHookTests9TestClassC5printySS3str_tF"));
        assert!(!is_swift_mangled("_ZN3foo3barEv"));
        assert!(!is_swift_mangled("malloc"));
    }

    #[test]
    fn test_foreign_names_are_refused() {
        assert_eq!(SwiftRuntimeDemangler::new().demangle("_ZN3foo3barEv"), None);
        assert_eq!(SwiftRuntimeDemangler::new().demangle(""), None);
    }

    #[test]
    fn test_unavailable_runtime_demangles_nothing() {
        if !SwiftRuntimeDemangler::is_available() {
            let name = "$s14SwiftHookTests9TestClassC5print3strySS_tF";
            assert_eq!(SwiftRuntimeDemangler::new().demangle(name), None);
        }
    }
}
