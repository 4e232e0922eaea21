// Fri Jan 16 2026 - Alex

use crate::memory::Address;
use crate::runtime::ClassHandle;
use crate::symbol::MethodSignature;
use std::fmt;

/// A vtable slot whose function pointer resolved to a readable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMethod {
    pub name: String,
    pub slot_index: usize,
    pub function: Address,
}

impl ResolvedMethod {
    pub fn new(name: &str, slot_index: usize, function: Address) -> Self {
        Self {
            name: name.to_string(),
            slot_index,
            function,
        }
    }

    pub fn signature(&self) -> Option<MethodSignature> {
        MethodSignature::parse(&self.name)
    }
}

impl fmt::Display for ResolvedMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", self.slot_index, self.function, self.name)
    }
}

/// Snapshot of the resolvable part of one class's vtable, in slot order.
#[derive(Debug, Clone)]
pub struct VTable {
    pub class: ClassHandle,
    pub class_name: String,
    pub slot_count: usize,
    pub entries: Vec<ResolvedMethod>,
}

impl VTable {
    pub fn new(class: ClassHandle, class_name: &str) -> Self {
        Self {
            class,
            class_name: class_name.to_string(),
            slot_count: 0,
            entries: Vec::new(),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn get_entry(&self, slot_index: usize) -> Option<&ResolvedMethod> {
        self.entries.iter().find(|e| e.slot_index == slot_index)
    }

    /// Exact-name lookup; the first slot in vtable order wins.
    pub fn find_by_name(&self, name: &str) -> Option<&ResolvedMethod> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

impl fmt::Display for VTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VTable for {} @ {}", self.class_name, self.class)?;
        writeln!(f, "  Slots: {} ({} resolved)", self.slot_count, self.entries.len())?;
        for entry in &self.entries {
            writeln!(f, "  {}", entry)?;
        }
        Ok(())
    }
}
