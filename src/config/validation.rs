//! Configuration validation logic.

use std::path::Path;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_archive_root(&config.archive.root)?;
    validate_temp_dir(&config.archive.temp_dir)?;

    Ok(())
}

/// Validate the archive root path.
pub fn validate_archive_root(root: &Path) -> Result<()> {
    if root.as_os_str().is_empty() {
        return Err(Error::MissingConfig("archive.root".to_string()));
    }

    if root.to_string_lossy().trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "archive.root".to_string(),
            message: "Archive root cannot be whitespace-only".to_string(),
        });
    }

    Ok(())
}

/// Validate the staging directory path.
pub fn validate_temp_dir(temp_dir: &Path) -> Result<()> {
    if temp_dir.as_os_str().is_empty() {
        return Err(Error::MissingConfig("archive.temp_dir".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::ArchiveSection;
    use std::path::PathBuf;

    fn make_config(root: &str, temp_dir: &str) -> Config {
        Config {
            archive: ArchiveSection {
                root: PathBuf::from(root),
                temp_dir: PathBuf::from(temp_dir),
            },
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&make_config("/data/archive", "temp_data")).is_ok());
    }

    #[test]
    fn test_empty_root() {
        let err = validate_config(&make_config("", "temp_data")).unwrap_err();
        assert!(matches!(err, Error::MissingConfig(field) if field == "archive.root"));
    }

    #[test]
    fn test_whitespace_root() {
        let err = validate_config(&make_config("   ", "temp_data")).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_empty_temp_dir() {
        let err = validate_config(&make_config("/data/archive", "")).unwrap_err();
        assert!(matches!(err, Error::MissingConfig(field) if field == "archive.temp_dir"));
    }
}
