// Thu Jan 15 2026 - Alex

use libc::c_void;
use std::ffi::CStr;

/// Looks up `name` among the symbols already loaded into the process.
///
/// The runtime entry points are resolved this way instead of being linked, so
/// the crate still loads on hosts where the runtime is absent.
#[cfg(unix)]
pub(crate) fn lookup_symbol(name: &CStr) -> Option<*mut c_void> {
    let ptr = unsafe { libc::dlsym(libc::RTLD_DEFAULT, name.as_ptr()) };
    if ptr.is_null() {
        log::debug!("{} is not loaded in this process", name.to_string_lossy());
        None
    } else {
        Some(ptr)
    }
}

#[cfg(not(unix))]
pub(crate) fn lookup_symbol(name: &CStr) -> Option<*mut c_void> {
    log::debug!("symbol lookup unsupported on this platform: {}", name.to_string_lossy());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_libc_symbol_is_found() {
        assert!(lookup_symbol(c"malloc").is_some());
    }

    #[test]
    fn test_missing_symbol() {
        assert!(lookup_symbol(c"swift_vtable_hook_no_such_symbol").is_none());
    }
}
