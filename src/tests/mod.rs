
use std::{io::Write, path::Path, sync::OnceLock};

use tempfile::NamedTempFile;

use crate::{
    config::PolicyKind,
    mmu::translator::Translator,
    storage::{
        backing_store::BackingStore,
        page_constants::{PAGE_COUNT, PAGE_SIZE},
    },
    trace::ReferenceTrace,
    utils::replacer::ReplacementPolicy,
};

// The reference trace from the classic textbook exercise, one reference per page
pub const TEXTBOOK_PAGES: [usize; 20] = [1, 2, 3, 4, 2, 1, 5, 6, 2, 1, 2, 3, 7, 6, 3, 2, 1, 2, 3, 6];

// Byte `offset` of page `page` in every fixture store
pub fn fixture_byte(page: usize, offset: usize) -> u8 {
    ((page * 7 + offset) & 0xFF) as u8
}

pub fn fixture_page(page: usize) -> Vec<u8> {
    (0..PAGE_SIZE).map(|offset| fixture_byte(page, offset)).collect()
}

pub fn write_store(pages: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp backing store");
    for page in 0..pages {
        file.write_all(&fixture_page(page)).unwrap();
    }
    file.flush().unwrap();
    file
}

// Full size store shared by every test that only reads it
pub fn shared_store() -> &'static Path {
    static STORE: OnceLock<NamedTempFile> = OnceLock::new();
    STORE.get_or_init(|| write_store(PAGE_COUNT)).path()
}

pub fn translator_for(trace: &ReferenceTrace, frame_count: usize, kind: PolicyKind) -> Translator {
    let backing_store = BackingStore::open(shared_store()).expect("fixture store");
    let policy = ReplacementPolicy::new(kind, frame_count, trace.pages());
    Translator::new(backing_store, frame_count, policy)
}
