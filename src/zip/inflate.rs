//! Payload decompression for the two supported ZIP methods.

use flate2::read::DeflateDecoder;
use std::io::{self, Read};
use std::iter::FusedIterator;

use crate::error::{Error, Result};

use super::structures::CompressionMethod;

/// Upper bound for a single chunk pulled from the inflater
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Lazy sequence of decompressed chunks from a raw deflate stream.
///
/// The whole compressed payload is handed over up front and output is read
/// back in chunks of at most [`CHUNK_SIZE`] bytes. The iterator is finite:
/// it ends at the end of the deflate stream or right after yielding the
/// first error. It cannot be restarted.
pub struct InflateChunks<'a> {
    decoder: DeflateDecoder<&'a [u8]>,
    done: bool,
}

impl<'a> InflateChunks<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self {
            decoder: DeflateDecoder::new(payload),
            done: false,
        }
    }
}

impl Iterator for InflateChunks<'_> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut chunk = vec![0u8; CHUNK_SIZE];
        loop {
            match self.decoder.read(&mut chunk) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(n) => {
                    chunk.truncate(n);
                    return Some(Ok(chunk));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(Error::Decompression(e)));
                }
            }
        }
    }
}

impl FusedIterator for InflateChunks<'_> {}

/// Decompress an entry payload into an owned buffer.
///
/// Stored payloads are returned unchanged. Deflate payloads are inflated
/// chunk by chunk into a buffer that grows as output arrives, since the
/// final size is not trusted from the header.
///
/// # Errors
///
/// - [`Error::UnsupportedCompression`] for any method other than stored or deflate
/// - [`Error::Decompression`] when the deflate stream is malformed
pub fn decompress(payload: &[u8], method: CompressionMethod) -> Result<Vec<u8>> {
    match method {
        CompressionMethod::Stored => Ok(payload.to_vec()),
        CompressionMethod::Deflate => {
            let mut output = Vec::with_capacity(payload.len());
            for chunk in InflateChunks::new(payload) {
                output.extend_from_slice(&chunk?);
            }
            Ok(output)
        }
        CompressionMethod::Unknown(code) => Err(Error::UnsupportedCompression(code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::DeflateEncoder;
    use proptest::prelude::*;
    use std::io::Write;

    fn deflate(data: &[u8]) -> Vec<u8> {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).expect("in-memory write cannot fail");
        encoder.finish().expect("in-memory finish cannot fail")
    }

    #[test]
    fn stored_is_identity() {
        let payload = b"name,score\nalice,10\n";
        let out = decompress(payload, CompressionMethod::Stored).expect("stored never fails");
        assert_eq!(out, payload);
    }

    #[test]
    fn inflates_raw_deflate() {
        let text = b"name,score\nalice,10\nbob,-\n";
        let out = decompress(&deflate(text), CompressionMethod::Deflate).expect("valid stream");
        assert_eq!(out, text);
    }

    #[test]
    fn output_larger_than_one_chunk_is_reassembled() {
        let text: Vec<u8> = (0..5 * CHUNK_SIZE).map(|i| (i % 251) as u8).collect();
        let compressed = deflate(&text);

        let chunks: Vec<Vec<u8>> = InflateChunks::new(&compressed)
            .collect::<Result<_>>()
            .expect("valid stream");
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= CHUNK_SIZE));
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn malformed_stream_fails_once_then_ends() {
        // BFINAL=1 with the reserved block type 11
        let garbage = [0xffu8; 16];
        let mut chunks = InflateChunks::new(&garbage);

        assert!(matches!(chunks.next(), Some(Err(Error::Decompression(_)))));
        assert!(chunks.next().is_none());
        assert!(chunks.next().is_none());

        let err = decompress(&garbage, CompressionMethod::Deflate).expect_err("must fail");
        assert!(matches!(err, Error::Decompression(_)));
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = decompress(b"BZh9", CompressionMethod::Unknown(12)).expect_err("must fail");
        assert!(matches!(err, Error::UnsupportedCompression(12)));
    }

    proptest! {
        #[test]
        fn stored_returns_payload(payload in proptest::collection::vec(any::<u8>(), 0..512)) {
            let out = decompress(&payload, CompressionMethod::Stored).unwrap();
            prop_assert_eq!(out, payload);
        }

        #[test]
        fn deflate_round_trips(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
            let out = decompress(&deflate(&data), CompressionMethod::Deflate).unwrap();
            prop_assert_eq!(out, data);
        }
    }
}
