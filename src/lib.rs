//! VLF Archiver - date-partitioned archive layout for monitoring stations
//!
//! This library computes where processed VLF measurement files belong inside a
//! site/date-partitioned archive and materializes the directories before the
//! pipeline moves files into them.
//!
//! # Features
//!
//! - Strict `UTC_StartTime` header parsing (`YYYY-MM-DDHH:MM:SS`)
//! - Canonical `<root>/<site>/<YYYY>/<MM>/<DD>/{png,csv}` layout
//! - Idempotent, race-tolerant directory creation
//! - Per-site `live` directories for rolling summary plots
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashMap;
//! use vlf_archiver::{Archiver, Result};
//!
//! fn main() -> Result<()> {
//!     let archiver = Archiver::new("/data/archive", "/data/temp");
//!
//!     let mut header = HashMap::new();
//!     header.insert("StationID".to_string(), "NAA".to_string());
//!     header.insert("Site".to_string(), "Dunsink".to_string());
//!     header.insert("UTC_StartTime".to_string(), "2023-03-0700:05:30".to_string());
//!
//!     let paths = archiver.archive(&header)?;
//!     println!("plot dir: {}", paths.image_path.display());
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod config;
pub mod error;
pub mod station;

// Re-exports for convenience
pub use archive::{ArchivePaths, Archiver, ArtifactKind, PathInfo};
pub use config::{validate_config, Config};
pub use error::{Error, Result};
pub use station::{MeasurementHeader, Site};
