use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::{
    error::{Result, SimError},
    mmu::{address::LogicalAddress, PageId},
    storage::page_constants::PAGE_SIZE,
};

/// The reference sequence of a run: one decimal address per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTrace {
    addresses: Vec<LogicalAddress>,
}

impl ReferenceTrace {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SimError::OpenTrace {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(file, path)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::parse(reader, Path::new("<reader>"))
    }

    // Any line that is not an unsigned decimal integer rejects the whole trace
    fn parse(reader: impl Read, origin: &Path) -> Result<Self> {
        let mut addresses = Vec::new();

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line.map_err(|source| SimError::ReadTrace {
                path: origin.to_path_buf(),
                source,
            })?;
            let text = line.trim();

            let raw = text
                .parse::<u32>()
                .map_err(|_| SimError::MalformedAddress {
                    line: index + 1,
                    text: text.to_string(),
                })?;
            addresses.push(LogicalAddress::new(raw));
        }

        Ok(Self { addresses })
    }

    /// Builds a trace touching `pages` in order. The i-th reference uses offset `i mod PAGE_SIZE`.
    pub fn from_pages(pages: &[PageId]) -> Self {
        let addresses = pages
            .iter()
            .enumerate()
            .map(|(i, &page)| LogicalAddress::from_parts(page, i % PAGE_SIZE))
            .collect();

        Self { addresses }
    }

    pub fn addresses(&self) -> &[LogicalAddress] {
        &self.addresses
    }

    pub fn pages(&self) -> Vec<PageId> {
        self.addresses.iter().map(LogicalAddress::page).collect()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// One address per line, in the format `from_reader` accepts.
    pub fn to_text(&self) -> String {
        self.addresses
            .iter()
            .map(|address| format!("{}\n", address))
            .collect()
    }
}
