//! Path templates and exact matching.
//!
//! A template such as `/t/:slug/:id/` is split into literal segments and
//! named parameters. Matching is exact and non-strict: the path must have
//! the same number of segments as the template, but a single trailing
//! slash is optional on either side. Literal segments compare ASCII
//! case-insensitively; bound parameters keep the case they were sent in.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::RoutingError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    template: String,
    segments: Vec<Segment>,
    trailing_slash: bool,
}

/// Parameters bound by a successful match against the current location.
///
/// Created per navigation and discarded on the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// The template that matched.
    pub pattern: String,
    /// The path that was matched (without query or fragment).
    pub path: String,
    /// Parameter name to bound value.
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    /// Look up a bound parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Strip the query string and fragment, then split into segments.
///
/// The root path `/` has no segments. One trailing slash is ignored.
fn segments_of(path: &str) -> (&str, Vec<&str>) {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        (path, Vec::new())
    } else {
        (path, trimmed.split('/').collect())
    }
}

impl PathPattern {
    /// Parse a template. Parameters are segments starting with `:`.
    pub fn parse(template: &str) -> Result<Self, RoutingError> {
        if !template.starts_with('/') {
            return Err(RoutingError::MissingLeadingSlash {
                template: template.to_owned(),
            });
        }

        let (_, raw) = segments_of(template);
        let mut segments = Vec::with_capacity(raw.len());
        for part in raw {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RoutingError::EmptyParam {
                        template: template.to_owned(),
                    });
                }
                let duplicate = segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                if duplicate {
                    return Err(RoutingError::DuplicateParam {
                        template: template.to_owned(),
                        name: name.to_owned(),
                    });
                }
                segments.push(Segment::Param(name.to_owned()));
            } else {
                segments.push(Segment::Literal(part.to_owned()));
            }
        }

        Ok(Self {
            template: template.to_owned(),
            segments,
            trailing_slash: template.len() > 1 && template.ends_with('/'),
        })
    }

    /// The template text this pattern was parsed from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Names of the parameters, in template order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match `path` exactly, binding parameters on success.
    pub fn matches(&self, path: &str) -> Option<RouteMatch> {
        let (path, parts) = segments_of(path);
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal.eq_ignore_ascii_case(part) => {}
                Segment::Param(name) if !part.is_empty() => {
                    params.insert(name.clone(), part.to_owned());
                }
                _ => return None,
            }
        }

        Some(RouteMatch {
            pattern: self.template.clone(),
            path: path.to_owned(),
            params,
        })
    }

    /// Substitute `params` into the template.
    pub fn fill(&self, params: &BTreeMap<String, String>) -> Result<String, RoutingError> {
        let mut url = String::from("/");
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                url.push('/');
            }
            match segment {
                Segment::Literal(literal) => url.push_str(literal),
                Segment::Param(name) => {
                    let value = params.get(name).ok_or_else(|| RoutingError::MissingParam {
                        template: self.template.clone(),
                        name: name.clone(),
                    })?;
                    url.push_str(value);
                }
            }
        }
        if self.trailing_slash && !self.segments.is_empty() {
            url.push('/');
        }
        Ok(url)
    }

    /// Whether every path matched by `other` is also matched by `self`.
    pub fn shadows(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Param(_), _) => true,
                    (Segment::Literal(a), Segment::Literal(b)) => a.eq_ignore_ascii_case(b),
                    (Segment::Literal(_), Segment::Param(_)) => false,
                })
    }
}
