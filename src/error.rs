use std::{io, path::PathBuf};

use thiserror::Error;

use crate::mmu::PageId;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to open backing store {}", path.display())]
    OpenBackingStore {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read page {page} from the backing store")]
    ReadPage {
        page: PageId,
        #[source]
        source: io::Error,
    },

    #[error("failed to open reference file {}", path.display())]
    OpenTrace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read reference file {}", path.display())]
    ReadTrace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {text:?} is not a valid address")]
    MalformedAddress { line: usize, text: String },
}

pub type Result<T> = std::result::Result<T, SimError>;
