use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::config::CatalogueConfig;
use crate::error::{CatalogueError, Problem, Result};
use crate::models::{Field, FileRef};

impl FileRef {
    /// Describe a file on disk. Only metadata is read.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<FileRef> {
        let path = path.as_ref();
        let meta = fs::metadata(path)?;
        if !meta.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a regular file: {}", path.display()),
            ));
        }
        let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        Ok(FileRef {
            path: path.to_string_lossy().to_string(),
            size_bytes: meta.len(),
            extension,
        })
    }
}

/// Last path component, or the whole path when there is none.
pub fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

/// Size is checked before type, so an oversize file is rejected whatever it is.
pub fn check_file(file: &FileRef, config: &CatalogueConfig) -> Result<()> {
    if file.size_bytes > config.max_file_bytes {
        return Err(CatalogueError::validation(
            Field::BookFile,
            Problem::FileTooLarge {
                size_bytes: file.size_bytes,
                max_bytes: config.max_file_bytes,
            },
        ));
    }
    if !config.allows_extension(&file.extension) {
        return Err(CatalogueError::validation(
            Field::BookFile,
            Problem::UnsupportedFileType(file.extension.to_lowercase()),
        ));
    }
    Ok(())
}

/// Hand a stored path to the desktop's default application.
pub fn open_file(path: &str) -> std::result::Result<(), String> {
    let target = Path::new(path);
    if !target.is_file() {
        return Err("The file does not exist at the saved path.".to_string());
    }

    let mut command = opener_command(target)
        .ok_or_else(|| "Cannot open file: unsupported platform".to_string())?;
    command
        .spawn()
        .map_err(|err| format!("Cannot open file: {}", err))?;

    log::info!("opened book file {}", path);
    Ok(())
}

fn opener_command(target: &Path) -> Option<Command> {
    #[cfg(target_os = "macos")]
    {
        let mut command = Command::new("open");
        command.arg(target);
        return Some(command);
    }
    #[cfg(target_os = "windows")]
    {
        let mut command = Command::new("explorer");
        command.arg(target);
        return Some(command);
    }
    #[cfg(target_os = "linux")]
    {
        let mut command = Command::new("xdg-open");
        command.arg(target);
        return Some(command);
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        let _ = target;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn file_ref(size_bytes: u64, extension: &str) -> FileRef {
        FileRef {
            path: format!("/books/sample.{}", extension),
            size_bytes,
            extension: extension.to_string(),
        }
    }

    #[test]
    fn reads_size_and_lowercased_extension_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Republic.PDF");
        let mut file = fs::File::create(&path).expect("create");
        file.write_all(&[0u8; 2048]).expect("write");
        drop(file);

        let file_ref = FileRef::from_path(&path).expect("file ref");
        assert_eq!(file_ref.size_bytes, 2048);
        assert_eq!(file_ref.extension, "pdf");
        assert_eq!(file_name(&file_ref.path), "Republic.PDF");
        assert!(Path::new(&file_ref.path).is_absolute());
    }

    #[test]
    fn file_name_falls_back_to_the_whole_path() {
        assert_eq!(file_name("/books/plato.pdf"), "plato.pdf");
        assert_eq!(file_name("/"), "/");
    }

    #[test]
    fn directories_and_missing_paths_are_not_file_refs() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(FileRef::from_path(dir.path()).is_err());
        assert!(FileRef::from_path(dir.path().join("gone.epub")).is_err());
    }

    #[test]
    fn accepts_allowed_types_case_insensitively() {
        let config = CatalogueConfig::default();
        assert!(check_file(&file_ref(2 * 1024 * 1024, "pdf"), &config).is_ok());
        assert!(check_file(&file_ref(10, "EPUB"), &config).is_ok());
        assert!(check_file(&file_ref(10, "Mobi"), &config).is_ok());
    }

    #[test]
    fn rejects_other_types() {
        let config = CatalogueConfig::default();
        let err = check_file(&file_ref(10, "docx"), &config).unwrap_err();
        assert_eq!(
            err,
            CatalogueError::validation(
                Field::BookFile,
                Problem::UnsupportedFileType("docx".to_string())
            )
        );
        assert!(check_file(&file_ref(10, ""), &config).is_err());
    }

    #[test]
    fn size_limit_is_inclusive_and_checked_first() {
        let config = CatalogueConfig::default();
        assert!(check_file(&file_ref(config.max_file_bytes, "pdf"), &config).is_ok());

        let err = check_file(&file_ref(60 * 1024 * 1024, "txt"), &config).unwrap_err();
        assert!(matches!(
            err,
            CatalogueError::Validation {
                field: Field::BookFile,
                problem: Problem::FileTooLarge { .. }
            }
        ));
    }

    #[test]
    fn opening_a_missing_file_reports_it() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("plato.pdf");
        let err = open_file(&missing.to_string_lossy()).unwrap_err();
        assert_eq!(err, "The file does not exist at the saved path.");
    }
}
