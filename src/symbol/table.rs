// Tue Jan 13 2026 - Alex

use crate::memory::Address;
use crate::symbol::{SymbolError, SymbolResolver};
use goblin::mach::Mach;
use goblin::Object;
use log::{debug, info};
use memmap2::Mmap;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub address: Address,
    pub size: Option<usize>,
}

impl Symbol {
    pub fn new(name: String, address: Address) -> Self {
        Self { name, address, size: None }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Symbols without a known size only own their start address.
    pub fn contains(&self, addr: Address) -> bool {
        match self.size {
            Some(size) => self
                .address
                .checked_add(size)
                .map_or(false, |end| addr.is_within_range(self.address, end)),
            None => self.address == addr,
        }
    }
}

/// Address-ordered symbol table usable as a [`SymbolResolver`].
///
/// Can be filled by hand or from an ELF or Mach-O image on disk. Unlike the
/// loader it also sees local symbols, as long as the image is not stripped.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: BTreeMap<Address, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the function symbols of the image at `path`.
    ///
    /// `load_bias` is added to every symbol value: the load base for
    /// position-independent ELF images, the slide for Mach-O images.
    pub fn from_object<P: AsRef<Path>>(path: P, load_bias: Address) -> Result<Self, SymbolError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file) }?;
        let table = Self::parse_object(&mmap, load_bias)?;
        info!("loaded {} symbols from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn parse_object(bytes: &[u8], load_bias: Address) -> Result<Self, SymbolError> {
        let mut table = Self::new();

        match Object::parse(bytes)? {
            Object::Elf(elf) => {
                let tables = [(&elf.syms, &elf.strtab), (&elf.dynsyms, &elf.dynstrtab)];
                for (syms, strtab) in tables {
                    for sym in syms.iter() {
                        if !sym.is_function() || sym.st_value == 0 {
                            continue;
                        }
                        let Some(name) = strtab.get_at(sym.st_name).filter(|n| !n.is_empty()) else {
                            continue;
                        };
                        let Some(address) = biased(load_bias, sym.st_value) else {
                            debug!("skipping {}: {:#x} overflows with bias {}", name, sym.st_value, load_bias);
                            continue;
                        };
                        let size = (sym.st_size > 0).then_some(sym.st_size as usize);
                        table.add_symbol(name, address, size);
                    }
                }
            }
            Object::Mach(Mach::Binary(macho)) => {
                for entry in macho.symbols() {
                    let (name, nlist) = entry?;
                    if nlist.is_undefined() || nlist.is_stab() || nlist.n_value == 0 {
                        continue;
                    }
                    // The loader reports names without the leading underscore.
                    let name = name.strip_prefix('_').unwrap_or(name);
                    let Some(address) = biased(load_bias, nlist.n_value) else {
                        debug!("skipping {}: {:#x} overflows with bias {}", name, nlist.n_value, load_bias);
                        continue;
                    };
                    table.add_symbol(name, address, None);
                }
            }
            Object::Mach(Mach::Fat(_)) => {
                return Err(SymbolError::Unsupported("fat Mach-O archive".to_string()));
            }
            _ => return Err(SymbolError::Unsupported("not an ELF or Mach-O image".to_string())),
        }

        debug!("parsed {} function symbols", table.len());
        Ok(table)
    }

    /// Adds a symbol. The first name registered at an address wins.
    pub fn add_symbol(&mut self, name: &str, address: Address, size: Option<usize>) {
        let mut symbol = Symbol::new(name.to_string(), address);
        symbol.size = size;
        self.symbols.entry(address).or_insert(symbol);
    }

    pub fn resolve_address(&self, addr: Address) -> Option<&Symbol> {
        self.symbols
            .range(..=addr)
            .next_back()
            .map(|(_, symbol)| symbol)
            .filter(|symbol| symbol.contains(addr))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }
}

fn biased(load_bias: Address, value: u64) -> Option<Address> {
    usize::try_from(value).ok().and_then(|value| load_bias.checked_add(value))
}

impl SymbolResolver for SymbolTable {
    fn resolve(&self, address: Address) -> Option<String> {
        if address.is_null() {
            return None;
        }
        self.resolve_address(address).map(|symbol| symbol.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> SymbolTable {
        let mut table = SymbolTable::new();
        table.add_symbol("sized", Address::new(0x1000), Some(0x20));
        table.add_symbol("unsized", Address::new(0x2000), None);
        table
    }

    #[test]
    fn test_exact_and_interior_lookup() {
        let table = sample_table();
        assert_eq!(table.resolve(Address::new(0x1000)).as_deref(), Some("sized"));
        assert_eq!(table.resolve(Address::new(0x101f)).as_deref(), Some("sized"));
        assert_eq!(table.resolve(Address::new(0x1020)), None);
        assert_eq!(table.resolve(Address::new(0x2000)).as_deref(), Some("unsized"));
        assert_eq!(table.resolve(Address::new(0x2004)), None);
        assert_eq!(table.resolve(Address::new(0x0fff)), None);
        assert_eq!(table.resolve(Address::zero()), None);
    }

    #[test]
    fn test_first_alias_wins() {
        let mut table = sample_table();
        table.add_symbol("alias", Address::new(0x1000), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve(Address::new(0x1000)).as_deref(), Some("sized"));
    }

    #[test]
    fn test_symbol_at_top_of_address_space() {
        let mut table = SymbolTable::new();
        table.add_symbol("high", Address::new(usize::MAX - 0x10), Some(0x100));
        assert_eq!(table.resolve(Address::new(usize::MAX - 0x8)), None);
        assert_eq!(table.resolve(Address::new(usize::MAX)), None);
        assert!(!Symbol::new("edge".to_string(), Address::new(usize::MAX)).with_size(1).contains(Address::new(usize::MAX)));
    }

    #[test]
    fn test_bias_overflow_is_skipped() {
        assert_eq!(biased(Address::new(usize::MAX), 1), None);
        assert_eq!(biased(Address::new(0x1000), 0x20), Some(Address::new(0x1020)));
    }

    #[test]
    fn test_garbage_is_not_an_object() {
        let result = SymbolTable::parse_object(&[0u8; 64], Address::zero());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = SymbolTable::from_object("/nonexistent/image", Address::zero());
        assert!(matches!(result, Err(SymbolError::Io(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_loads_own_executable() {
        let exe = std::env::current_exe().unwrap();
        let table = SymbolTable::from_object(exe, Address::zero()).unwrap();
        assert!(!table.is_empty());
        assert!(table.iter().all(|s| !s.name.is_empty()));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_overflowing_bias_loads_nothing() {
        let exe = std::env::current_exe().unwrap();
        let table = SymbolTable::from_object(exe, Address::new(usize::MAX)).unwrap();
        assert!(table.is_empty());
    }
}
