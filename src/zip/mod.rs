//! Minimal ZIP reading: the first entry of an archive, stored or deflated.
//!
//! ## Architecture
//!
//! - [`structures`]: the Local File Header layout and compression methods
//! - [`scanner`]: finds the first Local File Header and its payload slice
//! - [`inflate`]: turns a payload back into the original bytes
//! - [`extractor`]: chains the above and decodes the result as UTF-8
//!
//! ## Limitations
//!
//! Only the first Local File Header is read. There is no Central Directory
//! lookup, ZIP64, encryption or CRC verification, and only the STORED and
//! DEFLATE methods are understood.

pub mod extractor;
pub mod inflate;
pub mod scanner;
pub mod structures;

pub use extractor::{decode_text, extract_bytes, extract_text};
pub use inflate::{InflateChunks, decompress};
pub use scanner::{ZipEntry, locate_entry};
pub use structures::*;
