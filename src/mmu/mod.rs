pub mod address;
pub mod page_table;
pub mod tlb;
pub mod translator;

pub type FrameId = usize;
pub type PageId = usize;
