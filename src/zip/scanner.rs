//! Sequential search for the first Local File Header in a buffer.
//!
//! The scanner walks byte offsets from the start of the archive and stops at
//! the first position whose four bytes decode to the local header magic.
//! Neither the Central Directory nor the CRC is consulted, so only the first
//! entry of an archive is ever visible.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};

use super::structures::{CompressionMethod, LFH_MAGIC, LFH_SIZE, LocalFileHeader};

/// The first entry of an archive, borrowing its payload from the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntry<'a> {
    /// Offset of the Local File Header inside the archive
    pub offset: usize,
    pub header: LocalFileHeader,
    /// Exactly `header.compressed_size` bytes following the header
    pub payload: &'a [u8],
}

impl ZipEntry<'_> {
    pub fn compression_method(&self) -> CompressionMethod {
        self.header.compression_method
    }
}

/// Locate the first Local File Header and slice out its payload.
///
/// Offsets are tried from 0 up to (excluding) `archive.len() - 30`, so a
/// header has to start more than 30 bytes before the end of the buffer.
///
/// # Errors
///
/// - [`Error::ArchiveFormat`] when no signature is found in that range
/// - [`Error::PayloadOutOfBounds`] when the declared payload runs past the
///   end of the buffer
pub fn locate_entry(archive: &[u8]) -> Result<ZipEntry<'_>> {
    let end = archive.len().saturating_sub(LFH_SIZE);

    for offset in 0..end {
        let Some(candidate) = archive.get(offset..offset + 4) else {
            break;
        };
        if LittleEndian::read_u32(candidate) != LFH_MAGIC {
            continue;
        }

        let Some(header) = archive.get(offset..).and_then(LocalFileHeader::from_bytes) else {
            continue;
        };

        let start = offset + header.data_offset();
        let size = header.compressed_size as usize;
        let payload = start
            .checked_add(size)
            .and_then(|stop| archive.get(start..stop))
            .ok_or(Error::PayloadOutOfBounds {
                offset: start,
                size,
                len: archive.len(),
            })?;

        tracing::debug!(
            offset,
            file_name = %header.file_name,
            method = header.compression_method.as_u16(),
            compressed_size = header.compressed_size,
            uncompressed_size = header.uncompressed_size,
            "found local file header"
        );

        return Ok(ZipEntry {
            offset,
            header,
            payload,
        });
    }

    Err(Error::ArchiveFormat)
}
