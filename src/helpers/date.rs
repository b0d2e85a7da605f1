//! Date display helpers

use chrono::NaiveDateTime;
use std::fmt::Write;

/// Format a date using a Moment.js-style format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> Ok("2024-01-15")
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> Result<String, std::fmt::Error> {
    let chrono_format = moment_to_chrono_format(format);
    let mut out = String::new();
    write!(out, "{}", date.format(&chrono_format))?;
    Ok(out)
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each family
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    // Literal percent signs must not reach chrono as specifiers
    let mut result = format.replace('%', "%%");

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&date(), "YYYY-MM-DD").unwrap(), "2024-01-15");
        assert_eq!(
            format_date(&date(), "YYYY/MM/DD HH:mm").unwrap(),
            "2024/01/15 10:30"
        );
        assert_eq!(
            format_date(&date(), "MMMM DD, YYYY").unwrap(),
            "January 15, 2024"
        );
    }

    #[test]
    fn test_format_date_keeps_literal_percent() {
        assert_eq!(
            format_date(&date(), "YYYY-MM-DD (100%)").unwrap(),
            "2024-01-15 (100%)"
        );
        assert_eq!(format_date(&date(), "%Q %").unwrap(), "%Q %");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
        assert_eq!(moment_to_chrono_format("DD%"), "%d%%");
    }
}
