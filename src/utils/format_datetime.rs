use chrono::NaiveDateTime;

/// Timestamp layout used by the Wiki.js API, e.g. `2024-03-01T09:15:00.123Z`.
pub const WIRE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
pub const DISPLAY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render an API timestamp as `YYYY-MM-DD HH:MM:SS`.
/// Input in any other layout is returned unchanged.
pub fn format_datetime(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, WIRE_DATETIME_FORMAT) {
        Ok(dt) => dt.format(DISPLAY_DATETIME_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_datetime;

    #[test]
    fn test_formats_wire_timestamp() {
        assert_eq!(format_datetime("2024-03-01T09:15:42.123Z"), "2024-03-01 09:15:42");
        assert_eq!(format_datetime("2023-12-31T23:59:59.000000Z"), "2023-12-31 23:59:59");
    }

    #[test]
    fn test_passes_through_unknown_layouts() {
        for raw in ["", "yesterday", "2024-03-01", "2024-03-01 09:15:42", "2024-03-01T09:15:42.123+02:00"] {
            assert_eq!(format_datetime(raw), raw);
        }
    }
}
