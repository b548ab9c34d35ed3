//! Byte-for-byte file comparison.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const CHUNK_SIZE: usize = 1000;

/// True when both files exist and hold identical bytes.
///
/// Any I/O failure counts as "different", which makes the caller copy the
/// image afresh instead of reusing something it could not verify.
pub(crate) fn files_equal(a: &Path, b: &Path) -> bool {
    compare(a, b).unwrap_or(false)
}

fn compare(a: &Path, b: &Path) -> io::Result<bool> {
    if std::fs::metadata(a)?.len() != std::fs::metadata(b)?.len() {
        return Ok(false);
    }

    let mut file_a = File::open(a)?;
    let mut file_b = File::open(b)?;
    let mut buf_a = [0u8; CHUNK_SIZE];
    let mut buf_b = [0u8; CHUNK_SIZE];
    loop {
        let read_a = read_chunk(&mut file_a, &mut buf_a)?;
        let read_b = read_chunk(&mut file_b, &mut buf_b)?;
        if buf_a[..read_a] != buf_b[..read_b] {
            return Ok(false);
        }
        if read_a < CHUNK_SIZE {
            return Ok(true);
        }
    }
}

/// Fill `buf` unless the reader runs out first.
fn read_chunk(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn identical_files_are_equal() {
        let dir = TempDir::new().unwrap();
        let data: Vec<u8> = (0..4321u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(dir.path().join("a"), &data).unwrap();
        std::fs::write(dir.path().join("b"), &data).unwrap();
        assert!(files_equal(&dir.path().join("a"), &dir.path().join("b")));
    }

    #[test]
    fn different_sizes_are_not_equal() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a"), b"abc").unwrap();
        std::fs::write(dir.path().join("b"), b"abcd").unwrap();
        assert!(!files_equal(&dir.path().join("a"), &dir.path().join("b")));
    }

    #[test]
    fn difference_in_a_later_chunk_is_found() {
        let dir = TempDir::new().unwrap();
        let mut data = vec![7u8; 3 * CHUNK_SIZE + 10];
        std::fs::write(dir.path().join("a"), &data).unwrap();
        data[2 * CHUNK_SIZE + 5] = 8;
        std::fs::write(dir.path().join("b"), &data).unwrap();
        assert!(!files_equal(&dir.path().join("a"), &dir.path().join("b")));
    }

    #[test]
    fn exact_multiple_of_chunk_size() {
        let dir = TempDir::new().unwrap();
        let data = vec![1u8; 2 * CHUNK_SIZE];
        std::fs::write(dir.path().join("a"), &data).unwrap();
        std::fs::write(dir.path().join("b"), &data).unwrap();
        assert!(files_equal(&dir.path().join("a"), &dir.path().join("b")));
    }

    #[test]
    fn missing_file_is_not_equal() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a"), b"abc").unwrap();
        assert!(!files_equal(&dir.path().join("a"), &dir.path().join("missing")));
        assert!(!files_equal(
            &dir.path().join("missing"),
            &dir.path().join("missing")
        ));
    }
}
