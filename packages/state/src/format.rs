//! Display helpers shared by the list and detail views.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Characters of content shown on a list card.
pub const PREVIEW_CHARS: usize = 150;

/// Card preview: the first [`PREVIEW_CHARS`] characters plus `...` when longer.
pub fn preview(content: &str) -> String {
    if content.chars().count() > PREVIEW_CHARS {
        let head: String = content.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        content.to_string()
    }
}

/// Content lines, one paragraph each. Blank lines are kept.
pub fn paragraphs(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Card date in local time, e.g. `Mar 5, 2024, 02:30 PM`.
pub fn short_date(at: &DateTime<Utc>) -> String {
    format_short(&at.with_timezone(&Local))
}

/// Detail page date in local time, e.g. `March 5, 2024 at 02:30 PM`.
pub fn long_date(at: &DateTime<Utc>) -> String {
    format_long(&at.with_timezone(&Local))
}

fn format_short<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

fn format_long<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%B %-d, %Y at %I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_unchanged() {
        assert_eq!(preview("Body"), "Body");
        assert_eq!(preview(""), "");
        let exact = "x".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&exact), exact);
    }

    #[test]
    fn test_long_content_truncated() {
        let content = format!("{}{}", "a".repeat(PREVIEW_CHARS), "tail");
        let shown = preview(&content);
        assert_eq!(shown, format!("{}...", "a".repeat(PREVIEW_CHARS)));
    }

    #[test]
    fn test_truncation_on_char_boundary() {
        let content = "ü".repeat(PREVIEW_CHARS + 1);
        let shown = preview(&content);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 3);
        assert!(shown.ends_with("ü..."));
    }

    #[test]
    fn test_paragraphs_split_on_newlines() {
        assert_eq!(paragraphs("one\ntwo\n\nfour"), vec!["one", "two", "", "four"]);
        assert_eq!(paragraphs("single"), vec!["single"]);
    }

    #[test]
    fn test_date_formats() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(format_short(&at), "Mar 5, 2024, 02:30 PM");
        assert_eq!(format_long(&at), "March 5, 2024 at 02:30 PM");

        let morning = Utc.with_ymd_and_hms(2023, 12, 25, 9, 5, 0).unwrap();
        assert_eq!(format_short(&morning), "Dec 25, 2023, 09:05 AM");
    }
}
