//! File timestamps and date formatting.

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::config::TimestampSource;
use crate::error::{Error, Result};

/// Date format used in renamed files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read the selected timestamp of a file.
///
/// `Created` fails with `CreationTimeUnavailable` where the platform or the
/// filesystem does not record a birth time.
pub fn read_timestamp(path: &Path, source: TimestampSource) -> Result<SystemTime> {
    let metadata =
        std::fs::metadata(path).map_err(|e| Error::file_io("Failed to read metadata of", path, e))?;

    match source {
        TimestampSource::Created => {
            metadata
                .created()
                .map_err(|e| Error::CreationTimeUnavailable {
                    path: path.to_path_buf(),
                    source: e,
                })
        }
        TimestampSource::Modified => metadata
            .modified()
            .map_err(|e| Error::file_io("Failed to read modification time of", path, e)),
    }
}

/// Format a timestamp as a local calendar date, `YYYY-MM-DD`.
pub fn format_date(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_format_date_uses_local_calendar_day() {
        let local = Local
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2023, 7, 4)
                    .unwrap()
                    .and_hms_opt(12, 30, 0)
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(format_date(SystemTime::from(local)), "2023-07-04");
    }

    #[test]
    fn test_format_date_zero_pads() {
        let local = Local
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2009, 1, 2)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(format_date(SystemTime::from(local)), "2009-01-02");
    }

    #[test]
    fn test_read_modified_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.jpeg");
        std::fs::write(&path, b"x").unwrap();

        let expected = std::fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(
            read_timestamp(&path, TimestampSource::Modified).unwrap(),
            expected
        );
    }

    #[test]
    fn test_read_created_timestamp_matches_platform() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.jpeg");
        std::fs::write(&path, b"x").unwrap();

        match std::fs::metadata(&path).unwrap().created() {
            Ok(created) => assert_eq!(
                read_timestamp(&path, TimestampSource::Created).unwrap(),
                created
            ),
            Err(_) => assert!(matches!(
                read_timestamp(&path, TimestampSource::Created),
                Err(Error::CreationTimeUnavailable { .. })
            )),
        }
    }

    #[test]
    fn test_read_timestamp_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_timestamp(&dir.path().join("gone.jpeg"), TimestampSource::Modified)
            .unwrap_err();
        assert!(matches!(err, Error::FileIo { .. }));
    }
}
