// Wed Jan 14 2026 - Alex

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Bits of the `flags` word in a class metadata record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClassFlags: u32 {
        const IS_SWIFT_PRE_STABLE_ABI = 0x1;
        const USES_SWIFT_REFCOUNTING = 0x2;
        const HAS_CUSTOM_OBJC_NAME = 0x4;
        const IS_STATIC_SPECIALIZATION = 0x8;
        const IS_CANONICAL_STATIC_SPECIALIZATION = 0x10;
    }
}

impl fmt::Display for ClassFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(none)");
        }
        bitflags::parser::to_writer(self, f)
    }
}
