//! Common utilities

use std::path::Path;
use std::time::SystemTime;
use xxhash_rust::xxh3::xxh3_64;

/// Compute the xxh3 hash of bytes as 16 hex digits
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Get file modification time in milliseconds since epoch
pub fn get_mtime_ms(path: &Path) -> std::io::Result<i64> {
    let metadata = std::fs::metadata(path)?;
    let mtime = metadata.modified()?;
    let duration = mtime
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    Ok(duration.as_millis() as i64)
}

/// Split raw query input into query tokens on whitespace
pub fn split_queries<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    inputs
        .iter()
        .flat_map(|s| s.as_ref().split_whitespace())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_bytes() {
        let hash = hash_bytes(b"hello world");
        assert_eq!(hash.len(), 16); // 64-bit hex
        assert_eq!(hash, hash_bytes(b"hello world"));
        assert_ne!(hash, hash_bytes(b"hello world!"));
    }

    #[test]
    fn test_split_queries() {
        let inputs = ["قال  كتاب", "\tالله\n", ""];
        assert_eq!(split_queries(&inputs), vec!["قال", "كتاب", "الله"]);
    }

    #[test]
    fn test_split_queries_keeps_order_and_duplicates() {
        assert_eq!(split_queries(&["b a b"]), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_get_mtime_ms() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("doc.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(get_mtime_ms(&file).unwrap() > 0);
        assert!(get_mtime_ms(&temp.path().join("missing")).is_err());
    }
}
