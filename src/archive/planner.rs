//! Archive planning for processed measurement files.
//!
//! Derives the canonical `<root>/<site>/<YYYY>/<MM>/<DD>/<kind>` location for
//! each processed file from its header fields and makes sure the directories
//! exist before the pipeline moves files into them.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::archive::layout::{self, ArtifactKind};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::station::{
    header_field, MeasurementHeader, Site, SITE_FIELD, STATION_ID_FIELD, UTC_START_TIME_FIELD,
};

/// Timestamp format of the `UTC_StartTime` header: date and clock time
/// concatenated without a separator.
pub const UTC_START_TIME_FORMAT: &str = "%Y-%m-%d%H:%M:%S";

/// Site and date identifiers extracted from a measurement header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo {
    /// Transmitter identifier (`StationID` header).
    pub transmitter: String,

    /// Site name exactly as supplied in the header.
    pub site: String,

    /// Four-digit year.
    pub year: String,

    /// Two-digit month.
    pub month: String,

    /// Two-digit day.
    pub day: String,
}

/// Resolved archive locations for one processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePaths {
    /// Identifiers the paths were derived from.
    pub path_info: PathInfo,

    /// Directory for the rendered plot (`png`).
    pub image_path: PathBuf,

    /// Directory for the measurement data (`csv`).
    pub data_path: PathBuf,

    /// Staging directory the file currently resides in, passed through
    /// unchanged.
    pub temp_path: PathBuf,
}

/// Plans archive locations under one root and materializes them on demand.
#[derive(Debug, Clone)]
pub struct Archiver {
    archive_root: PathBuf,
    temp_data_path: PathBuf,
}

impl Archiver {
    /// Create an archiver for the given archive root and staging directory.
    pub fn new(archive_root: impl Into<PathBuf>, temp_data_path: impl Into<PathBuf>) -> Self {
        Self {
            archive_root: archive_root.into(),
            temp_data_path: temp_data_path.into(),
        }
    }

    /// Create an archiver from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.archive.root, &config.archive.temp_dir)
    }

    /// The archive root this planner builds paths under.
    pub fn archive_root(&self) -> &Path {
        &self.archive_root
    }

    /// The staging directory passed through to archive results.
    pub fn temp_data_path(&self) -> &Path {
        &self.temp_data_path
    }

    /// Extract site and date identifiers from a measurement header.
    ///
    /// `UTC_StartTime` is parsed strictly against [`UTC_START_TIME_FORMAT`];
    /// the year/month/day components come out zero-padded, with no timezone
    /// conversion. Fails if a required field is missing or the timestamp does
    /// not match the format. No side effects.
    pub fn path_info(&self, header: &MeasurementHeader) -> Result<PathInfo> {
        let transmitter = header_field(header, STATION_ID_FIELD)?;
        let site = header_field(header, SITE_FIELD)?;
        let start_time = header_field(header, UTC_START_TIME_FIELD)?;

        let start = NaiveDateTime::parse_from_str(start_time, UTC_START_TIME_FORMAT)
            .map_err(|e| Error::Timestamp {
                value: start_time.to_string(),
                message: e.to_string(),
            })?;

        // chrono numeric fields tolerate leading whitespace and unpadded
        // digits; require the exact concatenated form
        if start.format(UTC_START_TIME_FORMAT).to_string() != start_time {
            return Err(Error::Timestamp {
                value: start_time.to_string(),
                message: "not in YYYY-MM-DDHH:MM:SS form".to_string(),
            });
        }

        Ok(PathInfo {
            transmitter: transmitter.to_string(),
            site: site.to_string(),
            year: start.format("%Y").to_string(),
            month: start.format("%m").to_string(),
            day: start.format("%d").to_string(),
        })
    }

    /// Resolve and materialize the image and data directories for one day.
    ///
    /// Safe to call repeatedly and concurrently for the same date; a
    /// directory that already exists counts as success.
    pub fn create_dirs(&self, info: &PathInfo) -> Result<(PathBuf, PathBuf)> {
        let site = Site::from_name(&info.site);
        if site == Site::Birr && info.site != "Birr" {
            tracing::debug!("site '{}' not recognized, archiving under {}", info.site, site);
        }

        let day = layout::day_dir(&self.archive_root, site, &info.year, &info.month, &info.day);
        let image_path = layout::kind_dir(&day, ArtifactKind::Image);
        let data_path = layout::kind_dir(&day, ArtifactKind::Data);

        layout::ensure_dir(&image_path)?;
        layout::ensure_dir(&data_path)?;

        Ok((image_path, data_path))
    }

    /// Derive and materialize all archive locations for one processed file.
    ///
    /// Failures from either step propagate unchanged; when the header is
    /// rejected no directory is created.
    pub fn archive(&self, header: &MeasurementHeader) -> Result<ArchivePaths> {
        let path_info = self.path_info(header)?;
        let (image_path, data_path) = self.create_dirs(&path_info)?;

        tracing::debug!(
            "archive target for {} on {}-{}-{}: {}",
            path_info.transmitter,
            path_info.year,
            path_info.month,
            path_info.day,
            data_path.display()
        );

        Ok(ArchivePaths {
            path_info,
            image_path,
            data_path,
            temp_path: self.temp_data_path.clone(),
        })
    }

    /// Ensure the per-site `live` summary directories exist.
    ///
    /// Independent of any record; the rolling summary plots for both sites
    /// are staged here. Same idempotent creation policy as [`create_dirs`].
    ///
    /// [`create_dirs`]: Archiver::create_dirs
    pub fn create_summary_dirs(&self) -> Result<()> {
        for site in [Site::Birr, Site::Dunsink] {
            layout::ensure_dir(&layout::summary_dir(&self.archive_root, site))?;
        }

        Ok(())
    }
}
