// Tue Jan 13 2026 - Alex

pub mod demangle;
pub mod error;
pub mod resolver;
pub mod signature;
pub mod table;

pub use demangle::{is_swift_mangled, Demangler, SwiftRuntimeDemangler};
pub use error::SymbolError;
pub use resolver::{DlAddrResolver, SymbolResolver};
pub use signature::MethodSignature;
pub use table::{Symbol, SymbolTable};
