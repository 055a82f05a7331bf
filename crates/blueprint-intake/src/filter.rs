//! Advisory file-type filter.
//!
//! An [`AcceptFilter`] mirrors the HTML `accept` attribute of a file
//! input: a comma-separated list of `.ext` extensions, `type/*` MIME
//! wildcards and exact `type/subtype` MIME types. The platform's file
//! picker uses it to narrow what the user can select.
//!
//! The filter is a hint only. Dropped files are never rejected for
//! failing it; [`AcceptFilter::permits`] exists so callers can log such
//! files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors from parsing an `accept` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Two commas in a row, or a leading/trailing comma.
    #[error("empty entry at position {position} in accept filter")]
    EmptyToken {
        /// Zero-based index of the entry.
        position: usize,
    },
    /// An entry that is neither `.ext` nor a MIME type.
    #[error("unrecognized accept filter entry: {0:?}")]
    Unrecognized(String),
}

/// One entry of an accept filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AcceptToken {
    /// File extension without the leading dot, lowercased.
    Extension(String),
    /// Top-level MIME type matched with any subtype (`image/*`).
    /// `"*"` matches every type.
    MimeWildcard(String),
    /// Exact MIME type, lowercased.
    Mime(String),
}

impl AcceptToken {
    fn matches(&self, name: &str, mime: Option<&str>) -> bool {
        match self {
            Self::Extension(ext) => name
                .rsplit_once('.')
                .is_some_and(|(_, actual)| actual.eq_ignore_ascii_case(ext)),
            Self::MimeWildcard(top) => mime.is_some_and(|m| {
                top == "*"
                    || m.split_once('/')
                        .is_some_and(|(actual, _)| actual.eq_ignore_ascii_case(top))
            }),
            Self::Mime(exact) => mime.is_some_and(|m| m.eq_ignore_ascii_case(exact)),
        }
    }
}

impl FromStr for AcceptToken {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(ext) = s.strip_prefix('.') {
            if ext.is_empty() || ext.contains(['/', '.']) {
                return Err(FilterError::Unrecognized(s.to_owned()));
            }
            return Ok(Self::Extension(ext.to_ascii_lowercase()));
        }

        let Some((top, sub)) = s.split_once('/') else {
            return Err(FilterError::Unrecognized(s.to_owned()));
        };
        if top.is_empty() || sub.is_empty() || sub.contains('/') {
            return Err(FilterError::Unrecognized(s.to_owned()));
        }
        if sub == "*" {
            Ok(Self::MimeWildcard(top.to_ascii_lowercase()))
        } else if top == "*" {
            Err(FilterError::Unrecognized(s.to_owned()))
        } else {
            Ok(Self::Mime(s.to_ascii_lowercase()))
        }
    }
}

impl fmt::Display for AcceptToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extension(ext) => write!(f, ".{ext}"),
            Self::MimeWildcard(top) => write!(f, "{top}/*"),
            Self::Mime(exact) => f.write_str(exact),
        }
    }
}

/// Ordered list of accepted file kinds, rendered as an `accept` attribute.
///
/// An empty filter permits everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AcceptFilter(Vec<AcceptToken>);

impl AcceptFilter {
    /// Images plus the drawing formats the page advertises:
    /// `image/*,.pdf,.dwg,.dxf`.
    #[must_use]
    pub fn drawings() -> Self {
        Self(vec![
            AcceptToken::MimeWildcard("image".into()),
            AcceptToken::Extension("pdf".into()),
            AcceptToken::Extension("dwg".into()),
            AcceptToken::Extension("dxf".into()),
        ])
    }

    /// The filter's entries in order.
    #[must_use]
    pub fn tokens(&self) -> &[AcceptToken] {
        &self.0
    }

    /// Returns `true` if a file with this name and MIME type would pass
    /// the picker's filter.
    #[must_use]
    pub fn permits(&self, name: &str, mime: Option<&str>) -> bool {
        self.0.is_empty() || self.0.iter().any(|t| t.matches(name, mime))
    }
}

impl FromStr for AcceptFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        s.split(',')
            .enumerate()
            .map(|(position, raw)| {
                let token = raw.trim();
                if token.is_empty() {
                    Err(FilterError::EmptyToken { position })
                } else {
                    token.parse()
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for AcceptFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for AcceptFilter {
    type Error = FilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AcceptFilter> for String {
    fn from(filter: AcceptFilter) -> Self {
        filter.to_string()
    }
}
