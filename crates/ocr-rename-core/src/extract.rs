use regex::bytes::Regex;

lazy_static::lazy_static! {
    // ASCII word boundaries: an accented letter touching the time still counts
    // as a boundary.
    static ref TIME_PATTERN: Regex =
        Regex::new(r"(?-u:\b)[0-9]{2}:[0-9]{2}:[0-9]{2}(?-u:\b)").expect("time pattern must compile");
}

/// Find the leftmost `HH:MM:SS` token in OCR text and return it with the
/// colons replaced by periods (`14:23:05` -> `14.23.05`), so it can be used
/// as a file stem. Returns an empty string when nothing matches.
pub fn extract_time_token(text: &str) -> String {
    TIME_PATTERN
        .find(text.as_bytes())
        .map(|m| String::from_utf8_lossy(m.as_bytes()).replace(':', "."))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_time_from_sentence() {
        assert_eq!(extract_time_token("Photo taken at 14:23:05 on site"), "14.23.05");
    }

    #[test]
    fn test_leftmost_match_wins() {
        assert_eq!(extract_time_token("09:00:00 ... 23:59:59"), "09.00.00");
    }

    #[test]
    fn test_no_match_is_empty() {
        assert_eq!(extract_time_token(""), "");
        assert_eq!(extract_time_token("no timestamp here"), "");
        assert_eq!(extract_time_token("14:23 and 2024-05-01"), "");
    }

    #[test]
    fn test_requires_word_boundaries() {
        assert_eq!(extract_time_token("114:23:05"), "");
        assert_eq!(extract_time_token("14:23:055"), "");
        assert_eq!(extract_time_token("x14:23:05"), "");
    }

    #[test]
    fn test_non_ascii_neighbours_are_boundaries() {
        assert_eq!(extract_time_token("à14:23:05"), "14.23.05");
        assert_eq!(extract_time_token("godz.14:23:05ś"), "14.23.05");
        assert_eq!(extract_time_token("Hora:07:30:00é"), "07.30.00");
        assert_eq!(extract_time_token("às14:23:05"), "");
    }

    #[test]
    fn test_multiline_ocr_text() {
        let text = "CAM 03\r\n2023-07-14\r\n08:15:42\r\n";
        assert_eq!(extract_time_token(text), "08.15.42");
    }

    #[test]
    fn test_digits_are_not_range_checked() {
        assert_eq!(extract_time_token("99:99:99"), "99.99.99");
    }
}
