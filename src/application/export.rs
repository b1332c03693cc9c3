//! CSV export of post records.
//!
//! The first line holds the field names in record order and every following
//! line holds one record's values. Lines are joined with `\n` and the output
//! carries no trailing newline.
//!
//! In [`CsvQuoting::Verbatim`] mode values are written as-is: a comma, quote or
//! newline inside a title or body shifts or splits the columns.
//! [`CsvQuoting::Quoted`] opts into RFC 4180 quoting for fields that need it.

use std::{borrow::Cow, fmt, str::FromStr};

use crate::domain::entities::PostRecord;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

const SEPARATOR: &str = ",";
const LINE_BREAK: &str = "\n";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CsvQuoting {
    #[default]
    Verbatim,
    Quoted,
}

impl CsvQuoting {
    pub fn as_str(self) -> &'static str {
        match self {
            CsvQuoting::Verbatim => "verbatim",
            CsvQuoting::Quoted => "quoted",
        }
    }

    fn apply(self, field: &str) -> Cow<'_, str> {
        match self {
            CsvQuoting::Verbatim => Cow::Borrowed(field),
            CsvQuoting::Quoted if needs_quotes(field) => {
                Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
            }
            CsvQuoting::Quoted => Cow::Borrowed(field),
        }
    }
}

impl fmt::Display for CsvQuoting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown csv quoting `{0}` (expected `verbatim` or `quoted`)")]
pub struct ParseCsvQuotingError(String);

impl FromStr for CsvQuoting {
    type Err = ParseCsvQuotingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "verbatim" => Ok(Self::Verbatim),
            "quoted" => Ok(Self::Quoted),
            other => Err(ParseCsvQuotingError(other.to_string())),
        }
    }
}

fn needs_quotes(field: &str) -> bool {
    field.contains([',', '"', '\r', '\n'])
}

fn join_fields<'a>(fields: impl IntoIterator<Item = &'a str>, quoting: CsvQuoting) -> String {
    fields
        .into_iter()
        .map(|field| quoting.apply(field))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Render a header line followed by one line per post.
pub fn posts_to_csv(posts: &[PostRecord], quoting: CsvQuoting) -> String {
    let header = join_fields(PostRecord::FIELD_NAMES, quoting);
    let rows = posts
        .iter()
        .map(|post| join_fields(post.field_values(), quoting));

    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

pub fn post_to_csv(post: &PostRecord, quoting: CsvQuoting) -> String {
    posts_to_csv(std::slice::from_ref(post), quoting)
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn post(slug: &str, title: &str, markdown: &str) -> PostRecord {
        PostRecord {
            slug: slug.to_string(),
            title: title.to_string(),
            markdown: markdown.to_string(),
        }
    }

    #[test]
    fn exports_header_and_values_in_record_order() {
        let csv = post_to_csv(&post("hello", "Hello", "# Hi"), CsvQuoting::Verbatim);
        assert_eq!(csv, "slug,title,markdown\nhello,Hello,# Hi");
    }

    #[test]
    fn verbatim_mode_writes_separators_unescaped() {
        let csv = post_to_csv(
            &post("odd", "One, two", "say \"hi\"\nbye"),
            CsvQuoting::Verbatim,
        );
        assert_snapshot!(csv, @r#"
        slug,title,markdown
        odd,One, two,say "hi"
        bye
        "#);
    }

    #[test]
    fn quoted_mode_escapes_only_fields_that_need_it() {
        let csv = post_to_csv(
            &post("odd", "One, two", "say \"hi\"\nbye"),
            CsvQuoting::Quoted,
        );
        assert_eq!(
            csv,
            "slug,title,markdown\nodd,\"One, two\",\"say \"\"hi\"\"\nbye\""
        );
    }

    #[test]
    fn empty_export_is_header_only() {
        assert_eq!(
            posts_to_csv(&[], CsvQuoting::Verbatim),
            "slug,title,markdown"
        );
    }

    #[test]
    fn quoting_parses_case_insensitively() {
        assert_eq!("Quoted".parse::<CsvQuoting>().ok(), Some(CsvQuoting::Quoted));
        assert_eq!(
            " verbatim ".parse::<CsvQuoting>().ok(),
            Some(CsvQuoting::Verbatim)
        );
        assert!("excel".parse::<CsvQuoting>().is_err());
    }
}
