//! URL and save-as templates such as `{date:%Y}/{date:%m}/{slug}/`.
//!
//! Placeholders are written `{name}` or `{name:format}`; `{{` and `}}` are literal braces.

use std::fmt;
use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};

/// Format used for a bare `{date}`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A placeholder the external generator knows how to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Date,
    Slug,
    Lang,
    Category,
    Author,
}

impl Placeholder {
    pub const ALL: [Placeholder; 5] = [
        Placeholder::Date,
        Placeholder::Slug,
        Placeholder::Lang,
        Placeholder::Category,
        Placeholder::Author,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Placeholder::Date => "date",
            Placeholder::Slug => "slug",
            Placeholder::Lang => "lang",
            Placeholder::Category => "category",
            Placeholder::Author => "author",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("unrecognized placeholder `{0}`")]
    UnknownToken(String),
    #[error("placeholder opened at byte {0} is never closed")]
    Unclosed(usize),
    #[error("unmatched `}}` at byte {0}")]
    UnmatchedClose(usize),
    #[error("empty placeholder at byte {0}")]
    EmptyToken(usize),
    #[error("placeholder `{0}` does not take a format")]
    UnexpectedFormat(String),
    #[error("invalid date format `{0}`")]
    InvalidDateFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field {
        placeholder: Placeholder,
        format: Option<String>,
    },
}

/// A parsed template.  Every placeholder in it is recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.char_indices().peekable();
        while let Some((idx, c)) = chars.next() {
            match c {
                '{' if chars.peek().map(|(_, c)| *c) == Some('{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek().map(|(_, c)| *c) == Some('}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(PatternError::UnmatchedClose(idx)),
                '{' => {
                    let mut token = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        token.push(c);
                    }
                    if !closed {
                        return Err(PatternError::Unclosed(idx));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(parse_field(&token, idx)?);
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: pattern.to_owned(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Field { placeholder, .. } => Some(*placeholder),
            Segment::Literal(_) => None,
        })
    }

    /// Expand the template for `sample`.
    pub fn render(&self, sample: &ArticleSample) -> Result<String, PatternError> {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Field {
                    placeholder,
                    format,
                } => match placeholder {
                    Placeholder::Date => {
                        let format = format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT);
                        write!(rendered, "{}", sample.date.format(format))
                            .map_err(|_| PatternError::InvalidDateFormat(format.to_owned()))?;
                    }
                    Placeholder::Slug => rendered.push_str(&sample.slug),
                    Placeholder::Lang => rendered.push_str(&sample.lang),
                    Placeholder::Category => rendered.push_str(&sample.category),
                    Placeholder::Author => rendered.push_str(&sample.author),
                },
            }
        }
        Ok(rendered)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_field(token: &str, idx: usize) -> Result<Segment, PatternError> {
    let (name, format) = match token.split_once(':') {
        Some((name, format)) => (name, Some(format)),
        None => (token, None),
    };
    if name.is_empty() {
        return Err(PatternError::EmptyToken(idx));
    }
    let placeholder =
        Placeholder::from_name(name).ok_or_else(|| PatternError::UnknownToken(name.to_owned()))?;

    // `{date:}` is the same as `{date}`
    let format = format.filter(|f| !f.is_empty());
    if let Some(format) = format {
        if placeholder != Placeholder::Date {
            return Err(PatternError::UnexpectedFormat(name.to_owned()));
        }
        check_date_format(format)?;
    }

    Ok(Segment::Field {
        placeholder,
        format: format.map(str::to_owned),
    })
}

fn check_date_format(format: &str) -> Result<(), PatternError> {
    let invalid = || PatternError::InvalidDateFormat(format.to_owned());
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }
    // Offsets and zone names (`%z`, `%Z`, `%+`) are well-formed but article dates carry no
    // timezone to fill them in.
    let mut rendered = String::new();
    write!(rendered, "{}", chrono::NaiveDateTime::default().format(format)).map_err(|_| invalid())
}

/// Stand-in article used to expand templates when no real content is at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSample {
    pub date: chrono::NaiveDateTime,
    pub slug: String,
    pub lang: String,
    pub category: String,
    pub author: String,
}

impl ArticleSample {
    pub fn with_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Default::default()
        }
    }
}

impl Default for ArticleSample {
    fn default() -> Self {
        // Month and day differ so swapped `%m`/`%d` show up in rendered output.
        let date = chrono::NaiveDate::from_ymd_opt(2016, 12, 25)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("fixed date is valid");
        Self {
            date,
            slug: "sample-article".to_owned(),
            lang: "en".to_owned(),
            category: "misc".to_owned(),
            author: "author".to_owned(),
        }
    }
}

/// Map a rendered URL onto the file that serves it.
///
/// URLs without an extension are exploded into `<url>/index.html`.
pub fn format_url_as_file<S: AsRef<str>>(url: S) -> relative_path::RelativePathBuf {
    format_url_as_file_str(url.as_ref())
}

fn format_url_as_file_str(url: &str) -> relative_path::RelativePathBuf {
    // remove the root prefix
    let url = url.trim_start_matches('/');

    let mut path_buf = relative_path::RelativePathBuf::from(url.to_owned());

    if path_buf.extension().is_none() {
        path_buf.push("index.html");
    }

    path_buf.normalize()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_dated_slug() {
        let pattern = Pattern::parse("{date:%Y}/{date:%m}/{date:%d}/{slug}/").unwrap();
        let placeholders: Vec<_> = pattern.placeholders().collect();
        assert_eq!(
            placeholders,
            [
                Placeholder::Date,
                Placeholder::Date,
                Placeholder::Date,
                Placeholder::Slug
            ]
        );
    }

    #[test]
    fn parse_unknown_token() {
        let actual = Pattern::parse("{date:%Y}/{bogus}/").unwrap_err();
        assert_eq!(actual, PatternError::UnknownToken("bogus".to_owned()));
        assert!(actual.to_string().contains("bogus"));
    }

    #[test]
    fn parse_unclosed() {
        let actual = Pattern::parse("{date:%Y}/{slug").unwrap_err();
        assert_eq!(actual, PatternError::Unclosed(10));
    }

    #[test]
    fn parse_unmatched_close() {
        let actual = Pattern::parse("slug}/").unwrap_err();
        assert_eq!(actual, PatternError::UnmatchedClose(4));
    }

    #[test]
    fn parse_empty_token() {
        let actual = Pattern::parse("{}/index.html").unwrap_err();
        assert_eq!(actual, PatternError::EmptyToken(0));
    }

    #[test]
    fn parse_format_on_slug() {
        let actual = Pattern::parse("{slug:%Y}").unwrap_err();
        assert_eq!(actual, PatternError::UnexpectedFormat("slug".to_owned()));
    }

    #[test]
    fn parse_invalid_date_format() {
        let actual = Pattern::parse("{date:%Q}/{slug}").unwrap_err();
        assert_eq!(actual, PatternError::InvalidDateFormat("%Q".to_owned()));
    }

    #[test]
    fn parse_date_format_needing_timezone() {
        for format in ["%z", "%:z", "%Z", "%+"] {
            let actual = Pattern::parse(&format!("{{date:{format}}}/{{slug}}/")).unwrap_err();
            assert_eq!(actual, PatternError::InvalidDateFormat(format.to_owned()));
        }
    }

    #[test]
    fn parse_date_format_without_timezone_renders() {
        let pattern = Pattern::parse("{date:%Y-%m-%dT%H:%M:%S%.3f}/{slug}").unwrap();
        let actual = pattern.render(&ArticleSample::with_slug("hello")).unwrap();
        assert_eq!(actual, "2016-12-25T00:00:00.000/hello");
    }

    #[test]
    fn parse_escaped_braces() {
        let pattern = Pattern::parse("{{raw}}/{slug}").unwrap();
        let actual = pattern.render(&ArticleSample::with_slug("hello")).unwrap();
        assert_eq!(actual, "{raw}/hello");
    }

    #[test]
    fn render_dated_slug() {
        let pattern = Pattern::parse("{date:%Y}/{date:%m}/{date:%d}/{slug}/").unwrap();
        let actual = pattern.render(&ArticleSample::with_slug("hello")).unwrap();
        assert_eq!(actual, "2016/12/25/hello/");
    }

    #[test]
    fn render_bare_date() {
        let pattern = Pattern::parse("{date}-{lang}.html").unwrap();
        let actual = pattern.render(&ArticleSample::default()).unwrap();
        assert_eq!(actual, "2016-12-25-en.html");
    }

    #[test]
    fn format_url_as_file_explode() {
        let actual = format_url_as_file("2016/12/25/hello/");
        assert_eq!(actual.as_str(), "2016/12/25/hello/index.html");
    }

    #[test]
    fn format_url_as_file_no_explode() {
        let actual = format_url_as_file("/hello/world.html");
        assert_eq!(actual.as_str(), "hello/world.html");
    }
}
