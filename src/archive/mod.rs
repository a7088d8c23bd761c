//! Archive module.
//!
//! Provides:
//! - On-disk layout constants and path builders
//! - The planner that derives and materializes archive locations

pub mod layout;
pub mod planner;

pub use layout::{ensure_dir, ArtifactKind, DATA_DIR_NAME, IMAGE_DIR_NAME, SUMMARY_DIR_NAME};
pub use planner::{ArchivePaths, Archiver, PathInfo, UTC_START_TIME_FORMAT};
