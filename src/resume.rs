//! Resume download.
//!
//! Writes the packaged resume, or a configured replacement, into the user's
//! download directory. Nothing is tracked afterwards; the caller only reports
//! where the file went.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("resume not found at {0}")]
    Missing(PathBuf),
    #[error("could not save resume: {0}")]
    Io(#[from] io::Error),
}

/// File name the packaged resume is saved under.
pub const BUNDLED_NAME: &str = "Vallari_Ashar_Resume.pdf";

/// The resume shipped inside the binary.
pub static BUNDLED: &[u8] = include_bytes!("../assets/Vallari_Ashar_Resume.pdf");

/// Where downloads go: the platform download folder, else home, else `.`.
pub fn download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn download(source: Option<&Path>) -> Result<PathBuf, ResumeError> {
    download_to(source, &download_dir())
}

/// Saves the resume into `dir`.
///
/// `None` writes the packaged document. A `source` file replaces it and keeps
/// its own file name.
pub fn download_to(source: Option<&Path>, dir: &Path) -> Result<PathBuf, ResumeError> {
    let target = match source {
        None => {
            fs::create_dir_all(dir)?;
            let target = dir.join(BUNDLED_NAME);
            fs::write(&target, BUNDLED)?;
            target
        }
        Some(source) => {
            let name = match source.file_name() {
                Some(name) if source.is_file() => name,
                _ => return Err(ResumeError::Missing(source.to_path_buf())),
            };
            fs::create_dir_all(dir)?;
            let target = dir.join(name);
            fs::copy(source, &target)?;
            target
        }
    };
    info!(target = %target.display(), "resume saved");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_download_copies_file() {
        let src_dir = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("Resume.pdf");
        fs::write(&source, b"%PDF-1.4 resume").unwrap();

        let out_dir = tempfile::tempdir().unwrap();
        let target = download_to(Some(&source), &out_dir.path().join("Downloads")).unwrap();

        assert_eq!(target.file_name().unwrap(), "Resume.pdf");
        assert_eq!(fs::read(&target).unwrap(), b"%PDF-1.4 resume");
    }

    #[test]
    fn test_default_download_writes_packaged_resume() {
        let dir = tempfile::tempdir().unwrap();
        let source = Settings::default().resume_path;

        let target = download_to(source.as_deref(), dir.path()).unwrap();

        assert_eq!(target, dir.path().join(BUNDLED_NAME));
        let saved = fs::read(&target).unwrap();
        assert!(saved.starts_with(b"%PDF-"));
        assert_eq!(saved, BUNDLED);
    }

    #[test]
    fn test_download_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = download_to(Some(&dir.path().join("absent.pdf")), dir.path()).unwrap_err();
        assert!(matches!(err, ResumeError::Missing(_)));
    }

    #[test]
    fn test_download_directory_as_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = download_to(Some(dir.path()), dir.path()).unwrap_err();
        assert!(matches!(err, ResumeError::Missing(_)));
    }
}
