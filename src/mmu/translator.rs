use std::fmt;

use tracing::{debug, trace};

use crate::{
    error::Result,
    mmu::{
        address::LogicalAddress, page_table::PageTable, tlb::TranslationBuffer, FrameId, PageId,
    },
    storage::{
        backing_store::BackingStore, page_constants::PAGE_SIZE, physical_memory::PhysicalMemory,
    },
    utils::replacer::{ReplacementPolicy, Replacer},
};

/// Outcome of translating one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub address: LogicalAddress,
    pub value: i8,
    pub frame_id: FrameId,
    pub tlb_hit: bool,
    pub page_fault: bool,
    // Page that lost its frame to this fault, if the frame was occupied
    pub evicted: Option<PageId>,
}

/// Per-address report line. Borrows the frame instead of copying it.
pub struct ReportLine<'a> {
    translation: &'a Translation,
    frame_data: &'a [u8; PAGE_SIZE],
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.translation.address,
            self.translation.value,
            self.translation.frame_id,
            hex::encode_upper(self.frame_data)
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub translated: usize,
    pub page_faults: usize,
    pub tlb_misses: usize,
}

impl Statistics {
    pub fn tlb_hits(&self) -> usize {
        self.translated - self.tlb_misses
    }

    pub fn page_fault_rate(&self) -> f64 {
        rate(self.page_faults, self.translated)
    }

    pub fn tlb_hit_rate(&self) -> f64 {
        rate(self.tlb_hits(), self.translated)
    }
}

// An empty run has nothing to divide by and reports 0
fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of Translated Addresses = {}", self.translated)?;
        writeln!(f, "Page Faults = {}", self.page_faults)?;
        writeln!(f, "Page Fault Rate = {:.3}", self.page_fault_rate())?;
        writeln!(f, "TLB Hits = {}", self.tlb_hits())?;
        writeln!(f, "TLB Misses = {}", self.tlb_misses)?;
        write!(f, "TLB Hit Rate = {:.3}", self.tlb_hit_rate())
    }
}

/// Owns the whole memory hierarchy of a run and translates one address at a time.
pub struct Translator {
    backing_store: BackingStore,
    memory: PhysicalMemory,
    page_table: PageTable,
    tlb: TranslationBuffer,
    policy: ReplacementPolicy,
    stats: Statistics,
}

impl Translator {
    pub fn new(backing_store: BackingStore, frame_count: usize, policy: ReplacementPolicy) -> Self {
        Translator {
            backing_store,
            memory: PhysicalMemory::new(frame_count),
            page_table: PageTable::new(),
            tlb: TranslationBuffer::new(),
            policy,
            stats: Statistics::default(),
        }
    }

    pub fn translate(&mut self, address: LogicalAddress) -> Result<Translation> {
        let page_id = address.page();
        let offset = address.offset();

        self.stats.translated += 1;
        self.policy.access(page_id);

        let mut page_fault = false;
        let mut evicted = None;

        // Fast path
        let tlb_frame = self.tlb.get_frame(page_id);
        let tlb_hit = tlb_frame.is_some();

        let frame_id = match tlb_frame {
            Some(frame_id) => frame_id,
            None => {
                self.stats.tlb_misses += 1;

                let frame_id = match self.page_table.get_frame(page_id) {
                    // Page in memory
                    Some(frame_id) => frame_id,
                    // Page not in memory, bring it in from the backing store
                    None => {
                        self.stats.page_faults += 1;
                        page_fault = true;

                        let (frame_id, old_page) = self.service_fault(page_id)?;
                        evicted = old_page;
                        frame_id
                    }
                };

                self.tlb.add_page(page_id, frame_id);
                frame_id
            }
        };

        let value = self.memory.read_byte(frame_id, offset);
        trace!(%address, page_id, offset, frame_id, tlb_hit, page_fault, "translated");

        Ok(Translation {
            address,
            value,
            frame_id,
            tlb_hit,
            page_fault,
            evicted,
        })
    }

    // Picks a victim, drops every mapping that points at it, then loads the page
    fn service_fault(&mut self, page_id: PageId) -> Result<(FrameId, Option<PageId>)> {
        let frame_id = self.policy.next(&self.page_table);
        let old_page = self.page_table.occupant(frame_id);

        // Mappings go first so nothing can reach the frame while it is refilled
        self.tlb.remove_frame(frame_id);
        self.page_table.unload_frame(frame_id);

        let page_data = self.backing_store.read_page(page_id)?;
        self.memory.write_frame(frame_id, &page_data);
        self.page_table.load_frame(frame_id, page_id);

        debug!(
            page_id,
            frame_id,
            evicted = ?old_page,
            policy = %self.policy.kind(),
            "page fault"
        );

        Ok((frame_id, old_page))
    }

    // Only valid until the next translation refills the frame
    pub fn report_line<'a>(&'a self, translation: &'a Translation) -> ReportLine<'a> {
        ReportLine {
            translation,
            frame_data: self.memory.read_frame(translation.frame_id),
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn tlb(&self) -> &TranslationBuffer {
        &self.tlb
    }

    pub fn memory(&self) -> &PhysicalMemory {
        &self.memory
    }
}
