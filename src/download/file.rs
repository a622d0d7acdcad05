use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Create or truncate `output_path` and write `body` in full.
///
/// The file is truncated before writing, so a failed write leaves a partial file
/// in place of any previous one.
pub fn write_body_to_file(body: &[u8], output_path: &Path) -> io::Result<u64> {
    let mut file = File::create(output_path)?;
    file.write_all(body)?;
    file.flush()?;
    Ok(body.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.jpg");
        fs::write(&path, b"a much longer previous body").unwrap();

        assert_eq!(write_body_to_file(b"AAAA", &path).unwrap(), 4);
        assert_eq!(fs::read(&path).unwrap(), b"AAAA");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("a.jpg");
        assert!(write_body_to_file(b"AAAA", &path).is_err());
    }
}
