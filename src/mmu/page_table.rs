use crate::{
    mmu::{FrameId, PageId},
    storage::page_constants::PAGE_COUNT,
};

// An unloaded entry keeps its last frame number, only the flag is cleared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    pub frame_id: Option<FrameId>,
    pub loaded: bool,
}

/// Maps every page of the logical address space to a frame. Each slot is an
/// independent value, so updating one page never touches another.
pub struct PageTable {
    entries: [PageTableEntry; PAGE_COUNT],
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTable {
    pub fn new() -> Self {
        Self {
            entries: [PageTableEntry::default(); PAGE_COUNT],
        }
    }

    pub fn load_frame(&mut self, frame_id: FrameId, page_id: PageId) {
        self.entries[page_id] = PageTableEntry {
            frame_id: Some(frame_id),
            loaded: true,
        };
    }

    // Sweeps the whole table so no entry can keep pointing at a reused frame
    pub fn unload_frame(&mut self, frame_id: FrameId) {
        for entry in self
            .entries
            .iter_mut()
            .filter(|entry| entry.frame_id == Some(frame_id))
        {
            entry.loaded = false;
        }
    }

    pub fn is_loaded(&self, page_id: PageId) -> bool {
        self.entries[page_id].loaded
    }

    pub fn get_frame(&self, page_id: PageId) -> Option<FrameId> {
        let entry = &self.entries[page_id];
        if entry.loaded {
            return entry.frame_id;
        }
        None
    }

    /// The page resident in each of the first `frame_count` frames, `None` for a free frame.
    pub fn frame_occupants(&self, frame_count: usize) -> Vec<Option<PageId>> {
        let mut occupants = vec![None; frame_count];

        for (page_id, entry) in self.entries.iter().enumerate() {
            if let (true, Some(frame_id)) = (entry.loaded, entry.frame_id) {
                occupants[frame_id] = Some(page_id);
            }
        }

        occupants
    }

    pub fn occupant(&self, frame_id: FrameId) -> Option<PageId> {
        self.entries
            .iter()
            .position(|entry| entry.loaded && entry.frame_id == Some(frame_id))
    }
}
