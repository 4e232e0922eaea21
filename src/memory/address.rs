// Tue Jan 13 2026 - Alex

use std::fmt;
use std::ops::{Add, Sub};

/// A raw address inside the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address {
    value: usize,
}

impl Address {
    pub const fn new(value: usize) -> Self {
        Self { value }
    }

    pub const fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self { value: ptr as usize }
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }

    pub fn as_ptr<T>(&self) -> *const T {
        self.value as *const T
    }

    pub fn as_mut_ptr<T>(&self) -> *mut T {
        self.value as *mut T
    }

    pub fn is_null(&self) -> bool {
        self.value == 0
    }

    pub fn is_aligned(&self, alignment: usize) -> bool {
        self.value % alignment == 0
    }

    pub fn checked_add(&self, rhs: usize) -> Option<Self> {
        self.value.checked_add(rhs).map(Self::new)
    }

    pub fn checked_sub(&self, rhs: usize) -> Option<Self> {
        self.value.checked_sub(rhs).map(Self::new)
    }

    pub fn distance_from(&self, other: Self) -> Option<usize> {
        self.value.checked_sub(other.value)
    }

    pub fn is_within_range(&self, start: Self, end: Self) -> bool {
        self.value >= start.value && self.value < end.value
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.value)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl Add<usize> for Address {
    type Output = Self;
    fn add(self, rhs: usize) -> Self::Output {
        Self { value: self.value + rhs }
    }
}

impl Sub<usize> for Address {
    type Output = Self;
    fn sub(self, rhs: usize) -> Self::Output {
        Self { value: self.value - rhs }
    }
}

impl From<usize> for Address {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Address> for usize {
    fn from(addr: Address) -> Self {
        addr.value
    }
}

impl<T> From<*const T> for Address {
    fn from(ptr: *const T) -> Self {
        Self::from_ptr(ptr)
    }
}

impl<T> From<*mut T> for Address {
    fn from(ptr: *mut T) -> Self {
        Self::from_ptr(ptr as *const T)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_arithmetic() {
        let addr = Address::new(0x1000);
        assert_eq!(addr.checked_add(0x10), Some(Address::new(0x1010)));
        assert_eq!(addr.checked_sub(0x2000), None);
        assert_eq!(Address::new(0x1010).distance_from(addr), Some(0x10));
        assert_eq!(addr.distance_from(Address::new(0x1010)), None);
    }

    #[test]
    fn test_display_and_alignment() {
        let addr = Address::new(0x48);
        assert_eq!(addr.to_string(), "0x0000000000000048");
        assert!(addr.is_aligned(8));
        assert!(!addr.is_aligned(16));
        assert!(Address::zero().is_null());
    }
}
