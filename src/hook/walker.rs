// Fri Jan 16 2026 - Alex

use crate::config::{ConfigError, HookConfig};
use crate::hook::slot::VTableSlot;
use crate::hook::vtable::{ResolvedMethod, VTable};
use crate::memory::Address;
use crate::metadata::{ClassMetadata, EligibilityPolicy};
use crate::runtime::{ClassHandle, ClassRegistry, ObjcClassRegistry};
use crate::symbol::{Demangler, DlAddrResolver, SwiftRuntimeDemangler, SymbolResolver};
use log::{debug, info, trace, warn};
use std::ops::ControlFlow;

/// Walks class vtables, names their slots and patches them.
///
/// Holds no state between calls beyond its collaborators: names are resolved
/// afresh on every traversal. There is no internal synchronization; callers
/// must serialize hook installation themselves.
pub struct VTableHooker<R, S, D> {
    registry: R,
    resolver: S,
    demangler: D,
    policy: EligibilityPolicy,
}

pub type SystemHooker = VTableHooker<ObjcClassRegistry, DlAddrResolver, SwiftRuntimeDemangler>;

impl SystemHooker {
    pub fn system() -> Self {
        VTableHooker::new(ObjcClassRegistry::new(), DlAddrResolver::new(), SwiftRuntimeDemangler::new())
    }

    pub fn from_config(config: &HookConfig) -> Result<Self, ConfigError> {
        Ok(Self::system().with_policy(EligibilityPolicy::from_config(config)?))
    }
}

impl<R, S, D> VTableHooker<R, S, D>
where
    R: ClassRegistry,
    S: SymbolResolver,
    D: Demangler,
{
    pub fn new(registry: R, resolver: S, demangler: D) -> Self {
        Self {
            registry,
            resolver,
            demangler,
            policy: EligibilityPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: EligibilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    fn metadata_for(&self, class: ClassHandle) -> Option<(String, ClassMetadata)> {
        let Some(name) = self.registry.class_name(class) else {
            trace!("class {} has no name, skipping", class);
            return None;
        };
        if !self.policy.is_eligible(&name) {
            trace!("class {} is not eligible", name);
            return None;
        }

        // SAFETY: handles only come from the runtime (or `ClassHandle::from_raw`,
        // whose contract requires a live record), and eligible names imply the
        // record has this layout.
        match unsafe { ClassMetadata::from_handle(class.address()) } {
            Ok(metadata) => Some((name, metadata)),
            Err(e) => {
                warn!("skipping class {}: {}", name, e);
                None
            }
        }
    }

    fn resolve_slot(&self, metadata: &ClassMetadata, index: usize) -> Option<(String, Address)> {
        let function = metadata.read_slot(index).ok()?;
        if function.is_null() {
            return None;
        }
        let symbol = self.resolver.resolve(function)?;
        let name = self.demangler.demangle(&symbol)?;
        Some((name, function))
    }

    /// Visits every slot of `class` whose function pointer resolves to a
    /// readable name, in ascending slot order.
    ///
    /// Null, unresolvable and undemanglable slots are skipped. Ineligible or
    /// malformed classes visit nothing. Returns `true` if `visit` broke out of
    /// the traversal.
    pub fn for_each_method_slot<F>(&self, class: ClassHandle, mut visit: F) -> bool
    where
        F: FnMut(&str, &mut VTableSlot<'_>) -> ControlFlow<()>,
    {
        let Some((class_name, metadata)) = self.metadata_for(class) else {
            return false;
        };
        trace!("walking {}: {}", class_name, metadata);

        for index in 0..metadata.slot_count() {
            let Some((name, _)) = self.resolve_slot(&metadata, index) else {
                continue;
            };
            let mut slot = VTableSlot::new(&metadata, index);
            if visit(&name, &mut slot).is_break() {
                return true;
            }
        }
        false
    }

    pub fn list_method_names(&self, class: ClassHandle) -> Vec<String> {
        let mut names = Vec::new();
        self.for_each_method_slot(class, |name, _| {
            names.push(name.to_string());
            ControlFlow::Continue(())
        });
        names
    }

    pub fn method_table(&self, class: ClassHandle) -> VTable {
        let Some((class_name, metadata)) = self.metadata_for(class) else {
            return VTable::new(class, "");
        };

        let mut vtable = VTable::new(class, &class_name);
        vtable.slot_count = metadata.slot_count();
        vtable.entries = (0..metadata.slot_count())
            .filter_map(|index| {
                self.resolve_slot(&metadata, index)
                    .map(|(name, function)| ResolvedMethod::new(&name, index, function))
            })
            .collect();
        vtable
    }

    pub fn find_method(&self, class: ClassHandle, name: &str) -> Option<ResolvedMethod> {
        let mut found = None;
        self.for_each_method_slot(class, |resolved, slot| {
            if resolved != name {
                return ControlFlow::Continue(());
            }
            if let Ok(function) = slot.current() {
                found = Some(ResolvedMethod::new(resolved, slot.index(), function));
            }
            ControlFlow::Break(())
        });
        found
    }

    pub fn slot_values(&self, class: ClassHandle) -> Vec<Address> {
        let Some((_, metadata)) = self.metadata_for(class) else {
            return Vec::new();
        };
        (0..metadata.slot_count())
            .filter_map(|index| metadata.read_slot(index).ok())
            .collect()
    }

    /// Points the first slot of `class` named exactly `name` at `replacement`.
    ///
    /// Returns `false`, leaving the vtable untouched, when no slot matches or
    /// the class is not eligible.
    ///
    /// # Safety
    /// `replacement` must be callable with the calling convention and argument
    /// layout of the method it replaces. No other thread may use or patch the
    /// class's vtable while this runs.
    pub unsafe fn hook_method(&self, class: ClassHandle, name: &str, replacement: Address) -> bool {
        let mut patched = false;
        self.for_each_method_slot(class, |resolved, slot| {
            if resolved != name {
                return ControlFlow::Continue(());
            }

            let previous = slot.current().unwrap_or_default();
            match slot.replace(replacement) {
                Ok(()) => {
                    info!(
                        "hooked {} in class {} slot {}: {} -> {}",
                        name,
                        class,
                        slot.index(),
                        previous,
                        replacement
                    );
                    patched = true;
                }
                Err(e) => warn!("failed to patch slot {} of class {}: {}", slot.index(), class, e),
            }
            ControlFlow::Break(())
        });

        if !patched {
            debug!("no slot named {} in class {}", name, class);
        }
        patched
    }

    /// Hooks `name` in the first class, in registry order, that has it.
    ///
    /// # Safety
    /// Same contract as [`VTableHooker::hook_method`], for every listed class.
    pub unsafe fn hook_method_in_all_classes(&self, name: &str, replacement: Address) -> bool {
        let classes = self.registry.list_classes();
        debug!("searching {} classes for {}", classes.len(), name);

        classes
            .into_iter()
            .any(|class| self.hook_method(class, name, replacement))
    }
}
