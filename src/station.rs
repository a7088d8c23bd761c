//! Measurement header fields and site classification.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// Header key carrying the transmitter identifier.
pub const STATION_ID_FIELD: &str = "StationID";

/// Header key carrying the recording site name.
pub const SITE_FIELD: &str = "Site";

/// Header key carrying the measurement start timestamp.
pub const UTC_START_TIME_FIELD: &str = "UTC_StartTime";

/// Header fields accompanying one processed measurement file.
///
/// The processing pipeline hands the VLF header over as a plain string
/// mapping; keys beyond the required three are ignored.
pub type MeasurementHeader = HashMap<String, String>;

/// Look up a required header field.
pub(crate) fn header_field<'a>(header: &'a MeasurementHeader, field: &str) -> Result<&'a str> {
    header
        .get(field)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingField(field.to_string()))
}

/// The physical station that recorded a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Dunsink,
    Birr,
}

impl Site {
    /// Classify a site name from a measurement header.
    ///
    /// `"Dunsink"` is matched exactly; every other name, including
    /// unrecognized stations, falls into the Birr bucket.
    pub fn from_name(name: &str) -> Self {
        if name == "Dunsink" {
            Site::Dunsink
        } else {
            Site::Birr
        }
    }

    /// Directory name for this site under the archive root.
    pub fn slug(&self) -> &'static str {
        match self {
            Site::Dunsink => "dunsink",
            Site::Birr => "birr",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
