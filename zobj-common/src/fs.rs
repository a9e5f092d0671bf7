//! Filesystem helpers shared across zobj tools.

use std::io;
use std::path::Path;

/// Maximum allowed zobj size for reading into memory.
pub const MAX_ZOBJ_BYTES: u64 = 64 * 1024 * 1024; // 64 MiB

/// Read a file into memory with a size cap.
pub fn read_file_with_limit(path: &Path, max_bytes: u64) -> io::Result<Vec<u8>> {
    let len = std::fs::metadata(path)?.len();
    if len > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "File too large: {} ({} bytes, max {} bytes)",
                path.display(),
                len,
                max_bytes
            ),
        ));
    }
    std::fs::read(path)
}
