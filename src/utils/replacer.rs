use crate::{
    config::PolicyKind,
    mmu::{page_table::PageTable, FrameId, PageId},
    storage::page_constants::PAGE_COUNT,
};

pub trait Replacer {
    // Called once per translated address, before any lookup
    fn access(&mut self, page_id: PageId);
    // Called only on a page fault. Returns the frame to (re)fill.
    fn next(&mut self, page_table: &PageTable) -> FrameId;
}

/// Hands out frames in index order, wrapping around. Ignores residency and history.
#[derive(Debug)]
pub struct FifoReplacer {
    frame_count: usize,
    oldest: FrameId,
}

impl FifoReplacer {
    pub fn new(frame_count: usize) -> Self {
        FifoReplacer {
            frame_count,
            oldest: 0,
        }
    }
}

impl Replacer for FifoReplacer {
    fn access(&mut self, _page_id: PageId) {}

    fn next(&mut self, _page_table: &PageTable) -> FrameId {
        let frame_id = self.oldest;
        self.oldest = (self.oldest + 1) % self.frame_count;
        frame_id
    }
}

#[derive(Debug)]
pub struct LruReplacer {
    frame_count: usize,
    history: Vec<PageId>,
}

impl LruReplacer {
    pub fn new(frame_count: usize) -> Self {
        LruReplacer {
            frame_count,
            history: Vec::new(),
        }
    }
}

impl Replacer for LruReplacer {
    fn access(&mut self, page_id: PageId) {
        self.history.push(page_id);
    }

    fn next(&mut self, page_table: &PageTable) -> FrameId {
        let occupants = page_table.frame_occupants(self.frame_count);
        if let Some(frame_id) = free_frame(&occupants) {
            return frame_id;
        }

        // Most recent first: the last resident page to show up is the least recently used
        last_to_surface(&occupants, self.history.iter().rev().copied())
    }
}

/// Belady's policy over a trace known in advance.
#[derive(Debug)]
pub struct OptReplacer {
    frame_count: usize,
    future: Vec<PageId>,
    // Index of the reference being translated, None before the first access
    current: Option<usize>,
}

impl OptReplacer {
    pub fn new(frame_count: usize, future: Vec<PageId>) -> Self {
        OptReplacer {
            frame_count,
            future,
            current: None,
        }
    }
}

impl Replacer for OptReplacer {
    fn access(&mut self, _page_id: PageId) {
        self.current = Some(self.current.map_or(0, |current| current + 1));
    }

    fn next(&mut self, page_table: &PageTable) -> FrameId {
        let occupants = page_table.frame_occupants(self.frame_count);
        if let Some(frame_id) = free_frame(&occupants) {
            return frame_id;
        }

        let upcoming = self
            .future
            .get(self.current.unwrap_or(0)..)
            .unwrap_or_default();

        // The last resident page to show up is the one needed furthest away
        last_to_surface(&occupants, upcoming.iter().copied())
    }
}

fn free_frame(occupants: &[Option<PageId>]) -> Option<FrameId> {
    occupants.iter().position(Option::is_none)
}

// Walks `references` marking the frame of every resident page the first time it
// appears. The frame marked last is the victim. If the walk ends with frames still
// unmarked, the lowest unmarked frame is returned: its page never shows up.
fn last_to_surface(
    occupants: &[Option<PageId>],
    references: impl Iterator<Item = PageId>,
) -> FrameId {
    let mut frame_of = [None; PAGE_COUNT];
    for (frame_id, page_id) in occupants.iter().enumerate() {
        if let Some(page_id) = page_id {
            frame_of[*page_id] = Some(frame_id);
        }
    }

    let mut unseen = occupants.len();
    for page_id in references {
        if let Some(frame_id) = frame_of.get_mut(page_id).and_then(Option::take) {
            unseen -= 1;
            if unseen == 0 {
                return frame_id;
            }
        }
    }

    frame_of
        .iter()
        .flatten()
        .copied()
        .min()
        .unwrap_or_default()
}

/// The closed set of replacement policies a run can be configured with.
#[derive(Debug)]
pub enum ReplacementPolicy {
    Fifo(FifoReplacer),
    Lru(LruReplacer),
    Opt(OptReplacer),
}

impl ReplacementPolicy {
    /// `future` is the whole reference trace as page numbers; only OPT keeps it.
    pub fn new(kind: PolicyKind, frame_count: usize, future: Vec<PageId>) -> Self {
        match kind {
            PolicyKind::Fifo => ReplacementPolicy::Fifo(FifoReplacer::new(frame_count)),
            PolicyKind::Lru => ReplacementPolicy::Lru(LruReplacer::new(frame_count)),
            PolicyKind::Opt => ReplacementPolicy::Opt(OptReplacer::new(frame_count, future)),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            ReplacementPolicy::Fifo(_) => PolicyKind::Fifo,
            ReplacementPolicy::Lru(_) => PolicyKind::Lru,
            ReplacementPolicy::Opt(_) => PolicyKind::Opt,
        }
    }
}

impl Replacer for ReplacementPolicy {
    fn access(&mut self, page_id: PageId) {
        match self {
            ReplacementPolicy::Fifo(replacer) => replacer.access(page_id),
            ReplacementPolicy::Lru(replacer) => replacer.access(page_id),
            ReplacementPolicy::Opt(replacer) => replacer.access(page_id),
        }
    }

    fn next(&mut self, page_table: &PageTable) -> FrameId {
        match self {
            ReplacementPolicy::Fifo(replacer) => replacer.next(page_table),
            ReplacementPolicy::Lru(replacer) => replacer.next(page_table),
            ReplacementPolicy::Opt(replacer) => replacer.next(page_table),
        }
    }
}
