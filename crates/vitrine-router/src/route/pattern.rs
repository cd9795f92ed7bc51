//! URL pattern parsing and matching.
//!
//! Patterns are static except for named segments: `/product-update/:pk`
//! matches `/product-update/42` and binds `pk = "42"`. All functions here are
//! pure: same input, same output, no side effects.

use std::collections::HashMap;

use crate::error::PatternError;
use crate::path::normalize;

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, matched exactly.
    Literal(String),
    /// Named parameter (`:pk`), matches any single non-empty path segment.
    Param(String),
}

/// A parsed URL pattern.
///
/// # Examples
///
/// ```
/// use vitrine_router::{Pattern, Segment};
///
/// let pattern = Pattern::parse("/product-update/:pk").unwrap();
/// assert_eq!(pattern.raw(), "/product-update/:pk");
/// assert_eq!(
///     pattern.segments(),
///     &[
///         Segment::Literal("product-update".to_string()),
///         Segment::Param("pk".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern string into typed segments.
    ///
    /// # Rules
    ///
    /// - Must be non-empty and start with `/`
    /// - A segment starting with `:` is a named parameter; the name must be
    ///   non-empty
    /// - Every other segment is literal text
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine_router::{Pattern, PatternError};
    ///
    /// assert!(Pattern::parse("/").is_ok());
    /// assert!(Pattern::parse("/product-update/:pk").is_ok());
    ///
    /// assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
    /// assert_eq!(
    ///     Pattern::parse("product-list"),
    ///     Err(PatternError::Relative("product-list".to_string()))
    /// );
    /// assert_eq!(
    ///     Pattern::parse("/product/:"),
    ///     Err(PatternError::EmptyParamName("/product/:".to_string()))
    /// );
    /// ```
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }

        if !raw.starts_with('/') {
            return Err(PatternError::Relative(raw.to_string()));
        }

        let segments = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|segment| match segment.strip_prefix(':') {
                Some("") => Err(PatternError::EmptyParamName(raw.to_string())),
                Some(name) => Ok(Segment::Param(name.to_string())),
                None => Ok(Segment::Literal(segment.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern string as declared.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the pattern's parameters, in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Matches a path against this pattern, binding named segments.
    ///
    /// The input is normalized first. Literal segments match exactly, named
    /// segments match any single non-empty path segment, and segment counts
    /// must agree, so `/product-update/:pk` does not match `/product-update`
    /// or `/product-update/42/extra`.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let path = normalize(path);
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(text) => {
                    if text != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }

        Some(params)
    }

    /// Substitutes parameter values into the pattern, producing a concrete
    /// path. Returns `None` when a required parameter is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use vitrine_router::Pattern;
    ///
    /// let pattern = Pattern::parse("/product-update/:pk").unwrap();
    ///
    /// let mut params = HashMap::new();
    /// params.insert("pk".to_string(), "42".to_string());
    /// assert_eq!(pattern.fill(&params), Some("/product-update/42".to_string()));
    ///
    /// assert_eq!(pattern.fill(&HashMap::new()), None);
    /// ```
    pub fn fill(&self, params: &HashMap<String, String>) -> Option<String> {
        let parts = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => Some(text.as_str()),
                Segment::Param(name) => params.get(name).map(String::as_str),
            })
            .collect::<Option<Vec<_>>>()?;

        if parts.is_empty() {
            Some("/".to_string())
        } else {
            Some(format!("/{}", parts.join("/")))
        }
    }
}
