use crate::{mmu::FrameId, storage::page_constants::PAGE_SIZE};

// Frames are indexed by ids already validated by the page table or the replacer.
// An out of range id is a caller bug and panics.
pub struct PhysicalMemory {
    frames: Vec<[u8; PAGE_SIZE]>,
}

impl PhysicalMemory {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frames: vec![[0; PAGE_SIZE]; frame_count],
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The byte at `offset` reinterpreted as a signed value.
    pub fn read_byte(&self, frame_id: FrameId, offset: usize) -> i8 {
        self.frames[frame_id][offset] as i8
    }

    pub fn read_frame(&self, frame_id: FrameId) -> &[u8; PAGE_SIZE] {
        &self.frames[frame_id]
    }

    pub fn write_frame(&mut self, frame_id: FrameId, data: &[u8]) {
        self.frames[frame_id].copy_from_slice(data);
    }
}
