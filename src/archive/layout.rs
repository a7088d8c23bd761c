//! On-disk archive layout.
//!
//! Centralizes directory naming under the archive root so the planner and
//! its callers agree on one convention:
//! `<root>/<site>/<YYYY>/<MM>/<DD>/<kind>` for dated artifacts and
//! `<root>/<site>/live` for rolling summary plots.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::station::Site;

/// Directory name for archived spectrogram images.
pub const IMAGE_DIR_NAME: &str = "png";

/// Directory name for archived measurement data.
pub const DATA_DIR_NAME: &str = "csv";

/// Directory name for rolling summary plots, per site.
pub const SUMMARY_DIR_NAME: &str = "live";

/// Category of archived artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Rendered spectrogram plot.
    Image,
    /// Raw measurement series.
    Data,
}

impl ArtifactKind {
    /// Get the folder name for this artifact kind.
    pub fn folder_name(&self) -> &'static str {
        match self {
            ArtifactKind::Image => IMAGE_DIR_NAME,
            ArtifactKind::Data => DATA_DIR_NAME,
        }
    }
}

/// Dated directory for a site: `<root>/<site>/<YYYY>/<MM>/<DD>`.
pub fn day_dir(root: &Path, site: Site, year: &str, month: &str, day: &str) -> PathBuf {
    root.join(site.slug()).join(year).join(month).join(day)
}

/// Artifact directory under a dated directory: `<day_dir>/<kind>`.
pub fn kind_dir(day_dir: &Path, kind: ArtifactKind) -> PathBuf {
    day_dir.join(kind.folder_name())
}

/// Summary directory for a site: `<root>/<site>/live`.
pub fn summary_dir(root: &Path, site: Site) -> PathBuf {
    root.join(site.slug()).join(SUMMARY_DIR_NAME)
}

/// Ensure a directory exists, creating it and any missing parents.
///
/// A directory that already exists counts as success, including when another
/// process creates it between the existence check and the create call.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    match fs::create_dir_all(path) {
        Ok(()) => {
            tracing::debug!("created archive directory {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(Error::CreateDir {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_folder_names() {
        assert_eq!(ArtifactKind::Image.folder_name(), "png");
        assert_eq!(ArtifactKind::Data.folder_name(), "csv");
    }

    #[test]
    fn test_day_dir_shape() {
        let day = day_dir(Path::new("/data/archive"), Site::Dunsink, "2023", "03", "07");
        assert_eq!(day, PathBuf::from("/data/archive/dunsink/2023/03/07"));
    }

    #[test]
    fn test_kind_dir_shape() {
        let day = PathBuf::from("/data/archive/dunsink/2023/03/07");
        assert_eq!(
            kind_dir(&day, ArtifactKind::Image),
            PathBuf::from("/data/archive/dunsink/2023/03/07/png")
        );
        assert_eq!(
            kind_dir(&day, ArtifactKind::Data),
            PathBuf::from("/data/archive/dunsink/2023/03/07/csv")
        );
    }

    #[test]
    fn test_summary_dir_shape() {
        assert_eq!(
            summary_dir(Path::new("/data/archive"), Site::Birr),
            PathBuf::from("/data/archive/birr/live")
        );
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("birr").join("2023").join("03").join("07");

        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_dir_existing_is_ok() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("dunsink").join("live");

        ensure_dir(&target).unwrap();
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_dir_file_collision_fails() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("live");
        fs::write(&target, b"not a directory").unwrap();

        let err = ensure_dir(&target).unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
        // The offending file is left untouched
        assert!(target.is_file());
    }

    #[test]
    fn test_ensure_dir_concurrent() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("birr").join("2023").join("03").join("07");

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let target = target.clone();
                thread::spawn(move || ensure_dir(&target))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }
        assert!(target.is_dir());
    }
}
