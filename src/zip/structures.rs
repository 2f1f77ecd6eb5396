use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// ZIP compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Stored,
    Deflate,
    Unknown(u16),
}

impl CompressionMethod {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0 => CompressionMethod::Stored,
            8 => CompressionMethod::Deflate,
            _ => CompressionMethod::Unknown(value),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            CompressionMethod::Stored => 0,
            CompressionMethod::Deflate => 8,
            CompressionMethod::Unknown(v) => *v,
        }
    }
}

/// Local File Header (LFH) signature, `PK\x03\x04` read little-endian
pub const LFH_MAGIC: u32 = 0x0403_4b50;
pub const LFH_SIGNATURE: &[u8] = b"PK\x03\x04";
/// Fixed part of the Local File Header - 30 bytes
pub const LFH_SIZE: usize = 30;

/// Parsed Local File Header
///
/// Only the fields needed to find and decode the entry payload are kept.
/// `uncompressed_size` is informational; the decompressor never checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFileHeader {
    pub compression_method: CompressionMethod,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
    pub file_name: String,
}

impl LocalFileHeader {
    /// Parse a header from `data`, which must start at the signature.
    ///
    /// Returns `None` when the signature does not match or `data` is too
    /// short for the fixed 30-byte layout. The file name is read when it
    /// fits in `data` and left empty otherwise.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        let mut cursor = Cursor::new(data);

        if cursor.read_u32::<LittleEndian>().ok()? != LFH_MAGIC {
            return None;
        }

        let _version_needed = cursor.read_u16::<LittleEndian>().ok()?;
        let _flags = cursor.read_u16::<LittleEndian>().ok()?;
        let compression_method = cursor.read_u16::<LittleEndian>().ok()?;
        let _last_mod_time = cursor.read_u16::<LittleEndian>().ok()?;
        let _last_mod_date = cursor.read_u16::<LittleEndian>().ok()?;
        let _crc32 = cursor.read_u32::<LittleEndian>().ok()?;
        let compressed_size = cursor.read_u32::<LittleEndian>().ok()?;
        let uncompressed_size = cursor.read_u32::<LittleEndian>().ok()?;
        let file_name_length = cursor.read_u16::<LittleEndian>().ok()?;
        let extra_field_length = cursor.read_u16::<LittleEndian>().ok()?;

        // Use lossy conversion to handle non-UTF8 filenames gracefully
        let mut file_name_bytes = vec![0u8; file_name_length as usize];
        let file_name = match cursor.read_exact(&mut file_name_bytes) {
            Ok(()) => String::from_utf8_lossy(&file_name_bytes).into_owned(),
            Err(_) => String::new(),
        };

        Some(Self {
            compression_method: CompressionMethod::from_u16(compression_method),
            compressed_size,
            uncompressed_size,
            file_name_length,
            extra_field_length,
            file_name,
        })
    }

    /// Bytes between the header start and the first payload byte
    pub fn data_offset(&self) -> usize {
        LFH_SIZE + self.file_name_length as usize + self.extra_field_length as usize
    }
}
