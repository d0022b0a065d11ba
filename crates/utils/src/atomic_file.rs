//! Atomic file writes so readers never observe a half-written metadata blob

use phonemeta_core::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

/// Write bytes to `path` by writing a sibling temporary file and renaming it
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::configuration(format!("no parent directory for {path:?}")))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::configuration(format!("no file name in {path:?}")))?;

    fs::create_dir_all(parent)
        .map_err(|e| Error::file_system(parent, "create parent directory", e))?;

    // Same directory so the rename stays on one filesystem
    let temp_path = parent.join(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        Uuid::new_v4().simple()
    ));

    let written = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&temp_path)
        .map_err(|e| Error::file_system(&temp_path, "create temporary file", e))
        .and_then(|mut file| {
            file.write_all(content)
                .map_err(|e| Error::file_system(&temp_path, "write temporary file", e))?;
            file.sync_all()
                .map_err(|e| Error::file_system(&temp_path, "sync temporary file", e))
        });

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::file_system(path, "atomic rename", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("data").join("PhoneNumberMetadataProto_CH");

        write_atomic(&file_path, &[0x50, 0x4e, 0x4d, 0x44]).unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), vec![0x50, 0x4e, 0x4d, 0x44]);
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("blob");
        fs::write(&file_path, b"old").unwrap();

        write_atomic(&file_path, b"new contents").unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), b"new contents");
    }

    #[test]
    fn test_no_temporary_files_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        write_atomic(&temp_dir.path().join("a"), b"1").unwrap();
        write_atomic(&temp_dir.path().join("b"), b"2").unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|name| !name.ends_with(".tmp")));
    }
}
