// Wed Jan 14 2026 - Alex

use crate::memory::{Address, MemoryError};
use std::mem;
use std::ptr;

/// A bounds-checked window over bytes that live somewhere else in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryView {
    base: Address,
    size: usize,
}

impl MemoryView {
    /// # Safety
    /// `[base, base + size)` must stay mapped and readable for as long as the
    /// view (or anything derived from it) is used.
    pub unsafe fn new(base: Address, size: usize) -> Result<Self, MemoryError> {
        if base.is_null() {
            return Err(MemoryError::NullAddress("view base"));
        }
        if base.checked_add(size).is_none() {
            return Err(MemoryError::Overflow(base.as_usize()));
        }
        Ok(Self { base, size })
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn end(&self) -> Address {
        self.base + self.size
    }

    pub fn contains(&self, addr: Address) -> bool {
        addr.is_within_range(self.base, self.end())
    }

    pub fn subview(&self, offset: usize, len: usize) -> Result<Self, MemoryError> {
        self.check(offset, len)?;
        Ok(Self {
            base: self.base + offset,
            size: len,
        })
    }

    fn check(&self, offset: usize, len: usize) -> Result<*mut u8, MemoryError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.size => Ok((self.base + offset).as_mut_ptr::<u8>()),
            _ => Err(MemoryError::OutOfBounds {
                offset,
                len,
                size: self.size,
            }),
        }
    }

    pub fn read_u16(&self, offset: usize) -> Result<u16, MemoryError> {
        let p = self.check(offset, mem::size_of::<u16>())?;
        Ok(unsafe { ptr::read_unaligned(p as *const u16) })
    }

    pub fn read_u32(&self, offset: usize) -> Result<u32, MemoryError> {
        let p = self.check(offset, mem::size_of::<u32>())?;
        Ok(unsafe { ptr::read_unaligned(p as *const u32) })
    }

    pub fn read_word(&self, offset: usize) -> Result<usize, MemoryError> {
        let p = self.check(offset, mem::size_of::<usize>())?;
        Ok(unsafe { ptr::read_unaligned(p as *const usize) })
    }

    pub fn read_address(&self, offset: usize) -> Result<Address, MemoryError> {
        self.read_word(offset).map(Address::new)
    }

    /// # Safety
    /// The bytes must be writable, and no other thread may access them
    /// concurrently.
    pub unsafe fn write_word(&self, offset: usize, value: usize) -> Result<(), MemoryError> {
        let p = self.check(offset, mem::size_of::<usize>())?;
        let word_align = mem::align_of::<usize>();
        if !Address::from_ptr(p).is_aligned(word_align) {
            return Err(MemoryError::AlignmentError(p as usize, word_align));
        }
        ptr::write(p as *mut usize, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_of(words: &mut [usize]) -> MemoryView {
        let size = words.len() * mem::size_of::<usize>();
        unsafe { MemoryView::new(Address::from_ptr(words.as_mut_ptr()), size).unwrap() }
    }

    #[test]
    fn test_reads_follow_live_memory() {
        let mut words = vec![0usize; 4];
        let view = view_of(&mut words);
        assert_eq!(view.read_word(8).unwrap(), 0);

        unsafe { view.write_word(8, 0xdead).unwrap() };
        assert_eq!(words[1], 0xdead);
        assert_eq!(view.read_address(8).unwrap(), Address::new(0xdead));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut words = vec![0usize; 2];
        let view = view_of(&mut words);
        let size = view.size();

        assert!(view.read_u32(size - 4).is_ok());
        assert_eq!(
            view.read_u32(size - 2),
            Err(MemoryError::OutOfBounds { offset: size - 2, len: 4, size })
        );
        assert!(view.read_word(usize::MAX).is_err());
        assert!(view.subview(4, size).is_err());
    }

    #[test]
    fn test_misaligned_write_is_rejected() {
        let mut words = vec![0usize; 3];
        let view = view_of(&mut words);
        let result = unsafe { view.write_word(1, 7) };
        assert!(matches!(result, Err(MemoryError::AlignmentError(_, _))));
        assert_eq!(words, vec![0, 0, 0]);
    }

    #[test]
    fn test_null_base_is_rejected() {
        let result = unsafe { MemoryView::new(Address::zero(), 16) };
        assert_eq!(result, Err(MemoryError::NullAddress("view base")));
    }

    #[test]
    fn test_subview_narrows_window() {
        let mut words = vec![1usize, 2, 3, 4];
        let view = view_of(&mut words);
        let tail = view.subview(16, 16).unwrap();
        assert_eq!(tail.base(), view.base() + 16);
        assert_eq!(tail.read_word(0).unwrap(), 3);
        assert!(view.contains(tail.base()));
        assert!(!view.contains(view.end()));
    }
}
