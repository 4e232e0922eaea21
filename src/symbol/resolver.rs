// Tue Jan 13 2026 - Alex

use crate::memory::Address;
use std::ffi::CStr;

/// Maps a code address to the raw name of the symbol that owns it.
///
/// Implementations must not mutate process state; the walker calls this once
/// per vtable slot of every class it visits.
pub trait SymbolResolver {
    fn resolve(&self, address: Address) -> Option<String>;
}

impl<F> SymbolResolver for F
where
    F: Fn(Address) -> Option<String>,
{
    fn resolve(&self, address: Address) -> Option<String> {
        self(address)
    }
}

/// Resolves against the dynamic loader's view of the process with `dladdr`.
///
/// Only symbols visible to the loader are found; private symbols of a stripped
/// image resolve to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DlAddrResolver;

impl DlAddrResolver {
    pub fn new() -> Self {
        Self
    }
}

impl SymbolResolver for DlAddrResolver {
    #[cfg(unix)]
    fn resolve(&self, address: Address) -> Option<String> {
        if address.is_null() {
            return None;
        }

        let mut info: libc::Dl_info = unsafe { std::mem::zeroed() };
        let found = unsafe { libc::dladdr(address.as_ptr::<libc::c_void>(), &mut info) };
        if found == 0 || info.dli_sname.is_null() {
            return None;
        }

        Some(unsafe { CStr::from_ptr(info.dli_sname) }.to_string_lossy().into_owned())
    }

    #[cfg(not(unix))]
    fn resolve(&self, _address: Address) -> Option<String> {
        None
    }
}
