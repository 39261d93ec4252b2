use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};

use bytes::{Bytes, BytesMut};

use crate::{
    error::{Result, SimError},
    mmu::PageId,
    storage::page_constants::PAGE_SIZE,
};

pub const DEFAULT_BACKING_STORE: &str = "BACKING_STORE.bin";

// Read-only view of secondary storage. Page `n` lives at byte offset `n * PAGE_SIZE`.
pub struct BackingStore {
    path: PathBuf,
    file: File,
}

impl BackingStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| SimError::OpenBackingStore {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads exactly one page. A file too short to hold the page is an error,
    /// never a partially filled page.
    pub fn read_page(&mut self, page_id: PageId) -> Result<Bytes> {
        let offset = (page_id * PAGE_SIZE) as u64;
        let mut page_buffer = BytesMut::zeroed(PAGE_SIZE);

        self.file
            .seek(SeekFrom::Start(offset))
            .and_then(|_| self.file.read_exact(&mut page_buffer))
            .map_err(|source| SimError::ReadPage {
                page: page_id,
                source,
            })?;

        Ok(page_buffer.freeze())
    }
}
