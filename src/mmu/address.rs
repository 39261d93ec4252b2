use std::fmt;

use crate::{
    mmu::PageId,
    storage::page_constants::{ADDRESS_MASK, OFFSET_BITS, OFFSET_MASK},
};

/// A raw address from the reference trace. Only the low 16 bits are
/// translated: the high byte selects the page, the low byte the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalAddress(u32);

impl LogicalAddress {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn from_parts(page: PageId, offset: usize) -> Self {
        Self(((page as u32) << OFFSET_BITS) | (offset as u32 & OFFSET_MASK))
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    pub fn page(&self) -> PageId {
        ((self.0 & ADDRESS_MASK) >> OFFSET_BITS) as PageId
    }

    pub fn offset(&self) -> usize {
        (self.0 & OFFSET_MASK) as usize
    }
}

impl fmt::Display for LogicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
