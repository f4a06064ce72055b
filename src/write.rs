use std::fs;
use std::path::Path;

use crate::encoding::Encoding;
use crate::errors::{require, Result};

/// Encode `content` and write it to `file`, replacing what was there.
///
/// Missing parent directories are created first. If that fails, the
/// error is returned and the file is not touched.
pub fn write(
    file: Option<&Path>,
    content: Option<&str>,
    encoding: Option<Encoding>,
) -> Result<()> {
    let file = require(file, "file")?;
    let content = require(content, "content")?;
    let encoding = require(encoding, "encoding")?;

    write_bytes(Some(file), Some(encoding.encode(content).as_slice()))
}

/// Write already encoded `bytes` to `file`, creating parent directories
pub fn write_bytes(file: Option<&Path>, bytes: Option<&[u8]>) -> Result<()> {
    let file = require(file, "file")?;
    let bytes = require(bytes, "bytes")?;

    if let Some(parent) = file.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            fs::create_dir_all(parent)?;
            log::debug!("created directory {}", parent.display());
        }
    }

    fs::write(file, bytes)?;
    log::debug!("{} bytes written to {}", bytes.len(), file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LessIoError;
    use tempdir::TempDir;

    #[test]
    fn creates_missing_directories() {
        let dir = TempDir::new("write_test").unwrap();
        let target = dir.path().join("css").join("nested").join("main.css");

        write(
            Some(target.as_path()),
            Some("a { b: c; }"),
            Some(Encoding::Utf8),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "a { b: c; }");
    }

    #[test]
    fn replaces_existing_content() {
        let dir = TempDir::new("overwrite_test").unwrap();
        let target = dir.path().join("main.css");
        fs::write(&target, "a much longer previous body").unwrap();

        write(Some(target.as_path()), Some("short"), Some(Encoding::Utf8))
            .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "short");
    }

    #[test]
    fn encodes_content() {
        let dir = TempDir::new("encoding_test").unwrap();
        let target = dir.path().join("latin.css");

        write(
            Some(target.as_path()),
            Some("é€"),
            Some(Encoding::Iso8859_1),
        )
        .unwrap();

        assert_eq!(fs::read(&target).unwrap(), vec![0xE9, b'?']);
    }

    #[test]
    fn uncreatable_parent_fails_without_writing() {
        let dir = TempDir::new("blocked_test").unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let target = blocker.join("css").join("main.css");

        let result =
            write(Some(target.as_path()), Some("a {}"), Some(Encoding::Utf8));

        assert!(matches!(result, Err(LessIoError::Io(_))));
        assert!(!target.exists());
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
    }

    #[test]
    fn missing_arguments_are_rejected_before_io() {
        let dir = TempDir::new("arguments_test").unwrap();
        let target = dir.path().join("out").join("main.css");

        let target = Some(target.as_path());
        let cases = [
            (write(None, Some("a"), Some(Encoding::Utf8)), "file"),
            (write(target, None, Some(Encoding::Utf8)), "content"),
            (write(target, Some("a"), None), "encoding"),
            (write_bytes(target, None), "bytes"),
        ];
        for (result, argument) in cases {
            match result {
                Err(LessIoError::InvalidArgument(name)) => {
                    assert_eq!(name, argument)
                }
                other => panic!("unexpected result {:?}", other),
            }
        }
        assert!(!dir.path().join("out").exists());
    }
}
