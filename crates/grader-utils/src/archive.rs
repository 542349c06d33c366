//! In-memory ZIP archive access for DOCX uploads.

use std::io::{self, Cursor, Read};

use zip::read::ZipArchive;

/// An uploaded ZIP container held entirely in memory.
pub struct MemoryArchive<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> MemoryArchive<'a> {
    /// Open a ZIP archive over the given bytes.
    pub fn open(bytes: &'a [u8]) -> io::Result<Self> {
        let archive = ZipArchive::new(Cursor::new(bytes))?;
        log::debug!("Opened ZIP archive with {} entries", archive.len());
        Ok(Self { archive })
    }

    /// Read a single entry as UTF-8 text.
    pub fn read_entry_string(&mut self, name: &str) -> io::Result<String> {
        let mut entry = self.archive.by_name(name)?;
        let mut s = String::new();
        entry.read_to_string(&mut s)?;
        Ok(s)
    }
}
