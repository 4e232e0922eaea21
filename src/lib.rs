// Tue Jan 15 2026 - Alex

//! Live interception of virtual methods of runtime classes by patching their
//! vtables in place.
//!
//! Classes come from the runtime's registry, slot function pointers are named
//! through the loader and the runtime demangler, and a hook is a single
//! pointer-sized store into the class's metadata record. Nothing is
//! synchronized: install hooks from one thread, ideally before instances of
//! the class are shared.

pub mod config;
pub mod hook;
pub mod memory;
pub mod metadata;
pub mod runtime;
pub mod symbol;
pub mod utils;

pub use config::HookConfig;
pub use hook::{ResolvedMethod, SystemHooker, VTable, VTableHooker, VTableSlot};
pub use memory::Address;
pub use runtime::{ClassHandle, ClassRegistry};
pub use symbol::{Demangler, SymbolResolver};

use libc::c_void;

/// Readable names of the virtual methods of `class`, in vtable order.
pub fn list_method_names(class: ClassHandle) -> Vec<String> {
    SystemHooker::system().list_method_names(class)
}

/// Replaces the method of `class` whose readable signature is exactly
/// `method_name` with `replacement`.
///
/// # Safety
/// `replacement` must have the calling convention and argument layout of the
/// replaced method, and hook installation must not race with other threads
/// using the class.
pub unsafe fn hook_method(class: ClassHandle, method_name: &str, replacement: *const c_void) -> bool {
    SystemHooker::system().hook_method(class, method_name, Address::from_ptr(replacement))
}

/// Replaces `method_name` in the first eligible registered class that has it.
///
/// # Safety
/// Same contract as [`hook_method`].
pub unsafe fn hook_method_in_all_classes(method_name: &str, replacement: *const c_void) -> bool {
    SystemHooker::system().hook_method_in_all_classes(method_name, Address::from_ptr(replacement))
}
