use crate::{
    mmu::{FrameId, PageId},
    storage::page_constants::TLB_ENTRIES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlbEntry {
    pub page_id: PageId,
    pub frame_id: FrameId,
}

/// Fixed size page -> frame cache in front of the page table.
///
/// Insertion overwrites the slot under a rotating cursor, so the oldest
/// insertion is always the one replaced. Inserting a page that is already
/// cached adds a second slot; lookups return the first match in slot order.
pub struct TranslationBuffer {
    entries: [Option<TlbEntry>; TLB_ENTRIES],
    cursor: usize,
}

impl Default for TranslationBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationBuffer {
    pub fn new() -> Self {
        Self {
            entries: [None; TLB_ENTRIES],
            cursor: 0,
        }
    }

    pub fn get_frame(&self, page_id: PageId) -> Option<FrameId> {
        self.entries
            .iter()
            .flatten()
            .find(|entry| entry.page_id == page_id)
            .map(|entry| entry.frame_id)
    }

    pub fn add_page(&mut self, page_id: PageId, frame_id: FrameId) {
        self.entries[self.cursor] = Some(TlbEntry { page_id, frame_id });
        self.cursor = (self.cursor + 1) % TLB_ENTRIES;
    }

    pub fn remove_page(&mut self, page_id: PageId) {
        self.invalidate(|entry| entry.page_id == page_id);
    }

    pub fn remove_frame(&mut self, frame_id: FrameId) {
        self.invalidate(|entry| entry.frame_id == frame_id);
    }

    pub fn entries(&self) -> impl Iterator<Item = &TlbEntry> {
        self.entries.iter().flatten()
    }

    fn invalidate(&mut self, matches: impl Fn(&TlbEntry) -> bool) {
        for slot in self.entries.iter_mut() {
            if slot.as_ref().is_some_and(&matches) {
                *slot = None;
            }
        }
    }
}
