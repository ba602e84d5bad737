//! Reading the DS1620 sysfs attribute.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Failure to obtain a temperature from the sysfs attribute.
#[derive(Debug, Error)]
pub enum SensorError {
    #[error("failed to read sensor attribute")]
    Read(#[from] std::io::Error),

    #[error("non-numeric sensor value {value:?}")]
    Parse {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Read the attribute and parse its contents as degrees Celsius.
///
/// The kernel module writes the value with a trailing newline, so
/// surrounding whitespace is trimmed before parsing. The attribute is
/// opened read-only and closed before this returns.
pub fn read_temperature(path: impl AsRef<Path>) -> Result<f64, SensorError> {
    let contents = fs::read_to_string(path)?;
    let trimmed = contents.trim();
    trimmed.parse().map_err(|source| SensorError::Parse {
        value: trimmed.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sensor_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parses_plain_value() {
        let file = sensor_file("36.6");
        assert_eq!(read_temperature(file.path()).unwrap(), 36.6);
    }

    #[test]
    fn test_ignores_trailing_newline() {
        let file = sensor_file("21.5\n");
        assert_eq!(read_temperature(file.path()).unwrap(), 21.5);
    }

    #[test]
    fn test_parses_negative_reading() {
        let file = sensor_file("-10.5\n");
        assert_eq!(read_temperature(file.path()).unwrap(), -10.5);
    }

    #[test]
    fn test_rejects_garbage() {
        let file = sensor_file("abc");
        assert!(matches!(
            read_temperature(file.path()),
            Err(SensorError::Parse { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_file() {
        let file = sensor_file("");
        assert!(matches!(
            read_temperature(file.path()),
            Err(SensorError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_path_is_a_read_error() {
        assert!(matches!(
            read_temperature("/nonexistent/ds1620/temperature"),
            Err(SensorError::Read(_))
        ));
    }
}
