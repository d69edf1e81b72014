//! Path patterns with `:name` dynamic segments.
//!
//! Matching follows the usual history-router defaults: static segments
//! compare ASCII case-insensitively, a single trailing slash is tolerated,
//! and a dynamic segment captures exactly one non-empty path segment.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::params::Params;

/// Characters escaped when a param value is written into a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Error returned by [`PathPattern::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern must start with '/': {0:?}")]
    MissingLeadingSlash(String),
    #[error("pattern has an empty segment: {0:?}")]
    EmptySegment(String),
    #[error("invalid parameter name {name:?} in {pattern:?}")]
    InvalidParamName { pattern: String, name: String },
    #[error("parameter {name:?} appears more than once in {pattern:?}")]
    DuplicateParam { pattern: String, name: String },
}

/// Error returned by [`PathPattern::build`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("missing value for parameter {0:?}")]
    MissingParam(String),
    /// `.` and `..` are removed by URL path normalization, so an href
    /// carrying one would no longer reach the route it was built for.
    #[error("parameter {name:?} cannot be the dot segment {value:?}")]
    DotSegment { name: String, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route pattern such as `/reviewer/application/:id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern does not start with `/`,
    /// contains an empty interior segment, or declares an invalid or
    /// repeated parameter name.
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let Some(rest) = source.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(source.to_owned()));
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for raw in rest.split('/') {
                if raw.is_empty() {
                    return Err(PatternError::EmptySegment(source.to_owned()));
                }
                let Some(name) = raw.strip_prefix(':') else {
                    segments.push(Segment::Static(raw.to_owned()));
                    continue;
                };
                if !is_valid_param_name(name) {
                    return Err(PatternError::InvalidParamName { pattern: source.to_owned(), name: name.to_owned() });
                }
                if segments.iter().any(|s| matches!(s, Segment::Param(existing) if existing == name)) {
                    return Err(PatternError::DuplicateParam { pattern: source.to_owned(), name: name.to_owned() });
                }
                segments.push(Segment::Param(name.to_owned()));
            }
        }

        Ok(Self { source: source.to_owned(), segments })
    }

    /// The pattern as originally written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    #[must_use]
    pub fn has_params(&self) -> bool {
        self.param_names().next().is_some()
    }

    /// Canonical form used to detect ambiguous patterns: static segments
    /// lowercased, param names erased.
    #[must_use]
    pub fn shape(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_owned();
        }
        self.segments.iter().fold(String::new(), |mut out, s| {
            out.push('/');
            match s {
                Segment::Static(text) => out.push_str(&text.to_ascii_lowercase()),
                Segment::Param(_) => out.push(':'),
            }
            out
        })
    }

    /// Match raw (still percent-encoded) path segments.
    ///
    /// Returns the captured params on success.
    #[must_use]
    pub fn matches(&self, segments: &[&str]) -> Option<Params> {
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (pattern, raw) in self.segments.iter().zip(segments) {
            if raw.is_empty() {
                return None;
            }
            let decoded = percent_decode_str(raw).decode_utf8_lossy();
            match pattern {
                Segment::Static(text) => {
                    if !text.eq_ignore_ascii_case(&decoded) {
                        return None;
                    }
                }
                Segment::Param(name) => params.insert(name.as_str(), decoded.into_owned()),
            }
        }
        Some(params)
    }

    /// Substitute params into the pattern, encoding each value as a segment.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingParam`] for the first parameter missing
    /// from `params` and [`BuildError::DotSegment`] for a value of `.` or `..`.
    pub fn build(&self, params: &Params) -> Result<String, BuildError> {
        if self.segments.is_empty() {
            return Ok("/".to_owned());
        }
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Static(text) => out.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| BuildError::MissingParam(name.clone()))?;
                    if value == "." || value == ".." {
                        return Err(BuildError::DotSegment { name: name.clone(), value: value.to_owned() });
                    }
                    out.extend(utf8_percent_encode(value, SEGMENT));
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_valid_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
