pub mod backing_store;
pub mod physical_memory;

pub mod page_constants {
    // Size of a page and of a physical frame, in bytes
    pub const PAGE_SIZE: usize = 256;
    // Number of pages in the logical address space
    pub const PAGE_COUNT: usize = 256;

    // Bits of an address that select the byte within a page
    pub const OFFSET_BITS: u32 = 8;
    pub const OFFSET_MASK: u32 = (PAGE_SIZE as u32) - 1;
    // Only the low 16 bits of a raw address take part in translation
    pub const ADDRESS_MASK: u32 = 0xFFFF;

    pub const TLB_ENTRIES: usize = 16;

    // Physical memory holds between 1 and MAX_FRAMES frames
    pub const MAX_FRAMES: usize = 256;
}
