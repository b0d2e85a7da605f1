//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::ContentError;

lazy_static! {
    /// A `key:` line as it appears in a YAML header. URL schemes are not keys.
    static ref YAML_KEY_LINE: Regex = Regex::new(r"^([A-Za-z0-9_-]+):(\s|$)").unwrap();
}

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Metadata header of a post record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    #[serde(rename = "publishedAt", alias = "published_at", alias = "date")]
    pub published_at: Option<String>,
    #[serde(alias = "summary", alias = "custom_excerpt")]
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    pub draft: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let content = content.trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str), ContentError> {
        let rest = &content[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing ---, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        // A leading `---` is also a markdown rule; only treat the block as a
        // header when some line looks like `key: value`.
        let has_yaml_structure = yaml_content.lines().any(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                return false;
            }
            match YAML_KEY_LINE.captures(trimmed) {
                Some(caps) => !matches!(&caps[1], "http" | "https" | "ftp"),
                None => false,
            }
        });

        if !has_yaml_structure {
            return Ok((FrontMatter::default(), content));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)
            .map_err(|e| ContentError::FrontMatter(format!("invalid YAML header: {}", e)))?;
        Ok((fm, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str), ContentError> {
        // JSON front-matter ends with ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            if let Some(end_pos) = rest.find(";;;") {
                let json_content = &rest[..end_pos];
                let remaining = &rest[end_pos + 3..];
                let remaining = remaining.trim_start_matches(['\n', '\r']);

                let fm: FrontMatter = serde_json::from_str(json_content).map_err(|e| {
                    ContentError::FrontMatter(format!("invalid JSON header: {}", e))
                })?;

                return Ok((fm, remaining));
            }
        }

        if content.starts_with('{') {
            // The stream deserializer stops right after the header object
            let mut stream =
                serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();
            let fm = match stream.next() {
                Some(Ok(fm)) => fm,
                Some(Err(e)) => {
                    return Err(ContentError::FrontMatter(format!(
                        "invalid JSON header: {}",
                        e
                    )))
                }
                None => return Err(ContentError::FrontMatter("empty JSON header".to_string())),
            };
            let remaining = &content[stream.byte_offset()..];
            let remaining = remaining.trim_start_matches(['\n', '\r']);

            return Ok((fm, remaining));
        }

        Err(ContentError::FrontMatter(
            "unterminated JSON header".to_string(),
        ))
    }

    /// Parse the publish date; `None` if absent or not a recognised format
    pub fn parse_published_at(&self) -> Option<NaiveDateTime> {
        self.published_at.as_deref().and_then(parse_date_string)
    }
}

/// Parse a date string in various formats. Offsets are normalized to UTC.
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    let offset_formats = ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z"];
    for fmt in offset_formats {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_utc());
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
publishedAt: '2024-01-15'
summary: A first post
tags:
  - rust
  - nextjs
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.published_at, Some("2024-01-15".to_string()));
        assert_eq!(fm.excerpt, Some("A first post".to_string()));
        assert_eq!(fm.tags, vec!["rust", "nextjs"]);
        assert!(!fm.draft);
        assert!(remaining.contains("This is the content."));
    }

    #[test]
    fn test_date_key_aliases() {
        let content = "---\ntitle: Old Style\ndate: 2022-03-04 08:00:00\nexcerpt: hi\n---\nbody";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.published_at, Some("2022-03-04 08:00:00".to_string()));
        assert_eq!(fm.excerpt, Some("hi".to_string()));

        let content = "---\ntitle: Snake\npublished_at: 2022-03-04\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(
            fm.parse_published_at().unwrap().format("%Y-%m-%d").to_string(),
            "2022-03-04"
        );
    }

    #[test]
    fn test_parse_json_frontmatter() {
        let content = r#"{"title": "Test Post", "publishedAt": "2023-06-01", "tags": ["a", "b"]}

This is content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Test Post".to_string()));
        assert_eq!(fm.tags, vec!["a", "b"]);
        assert!(remaining.contains("This is content."));
    }

    #[test]
    fn test_json_frontmatter_with_braces_in_strings() {
        let content = "{\"title\": \"a } b\", \"excerpt\": \"{x}\"}\nBody {here}";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("a } b".to_string()));
        assert_eq!(fm.excerpt, Some("{x}".to_string()));
        assert_eq!(remaining, "Body {here}");
    }

    #[test]
    fn test_unterminated_json_frontmatter_is_error() {
        let err = FrontMatter::parse("{\"title\": \"open").unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter(_)));
    }

    #[test]
    fn test_byte_order_mark_before_header() {
        let content = "\u{feff}---\ntitle: With BOM\npublishedAt: 2023-01-01\n---\nBody";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("With BOM".to_string()));
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_parse_semicolon_json_frontmatter() {
        let content = ";;;\n{\"title\": \"Fenced\", \"draft\": true}\n;;;\nBody";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Fenced".to_string()));
        assert!(fm.draft);
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let content = "---\ntitle: [unclosed\npublishedAt: 2023-01-01\n---\nbody";
        let err = FrontMatter::parse(content).unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter(_)));
    }

    #[test]
    fn test_single_string_tags() {
        let content = "---\ntitle: One Tag\ntags: Notes\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["Notes"]);
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("Just a body.").unwrap();
        assert!(fm.title.is_none());
        assert_eq!(remaining, "Just a body.");
    }

    #[test]
    fn test_markdown_separator_not_yaml() {
        let content = r#"
---

Check out https://example.com/path and http://test.com

- Item 1
- Item 2

---
More content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(remaining.contains("https://example.com"));
    }

    #[test]
    fn test_parse_date_formats() {
        let expect = |s: &str, want: &str| {
            let dt = parse_date_string(s).unwrap_or_else(|| panic!("failed to parse {s}"));
            assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), want);
        };
        expect("2023-01-01", "2023-01-01 00:00:00");
        expect("2023/06/01", "2023-06-01 00:00:00");
        expect("2024-01-15 10:30:00", "2024-01-15 10:30:00");
        expect("2024-01-15T10:30", "2024-01-15 10:30:00");
        expect("2024-01-15T10:30:00.250", "2024-01-15 10:30:00");
        expect("2024-01-15T10:30:00+02:00", "2024-01-15 08:30:00");
        expect("2024-01-15T10:30:00Z", "2024-01-15 10:30:00");
        assert!(parse_date_string("next tuesday").is_none());
        assert!(parse_date_string("2023-13-01").is_none());
    }
}
