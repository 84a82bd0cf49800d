//! Builder for request URLs with optional query parameters.
//!
//! Parameters are rendered in the order their names were first added. Setting
//! a name again replaces its value but keeps its original position.
//!
//! Values are written as-is: no percent-encoding is applied. Callers must only
//! pass URL-safe tokens (ids, enum wire names, numbers, label selectors made of
//! safe characters). This builder is not a sanitizer.

use std::fmt::Display;

use crate::error::{Error, Result};

/// Parameters that render themselves into a URL's query string.
///
/// Implemented by every list and metrics parameter type, so endpoint code can
/// build any parameterised URL the same way.
pub trait QueryParams {
    /// Append these parameters to `builder`.
    #[must_use]
    fn apply(&self, builder: UrlBuilder) -> UrlBuilder;
}

/// Builder for a URL with an ordered set of query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: String,
    pairs: Vec<(String, String)>,
}

impl UrlBuilder {
    /// Create a builder bound to `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if `base` is empty or only whitespace.
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        if base.trim().is_empty() {
            return Err(Error::ConfigError(
                "URL base must not be blank".to_string(),
            ));
        }

        Ok(Self {
            base,
            pairs: Vec::new(),
        })
    }

    /// Create a builder from a base that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if `base` is `None` or blank.
    pub fn from_optional(base: Option<&str>) -> Result<Self> {
        match base {
            Some(base) => Self::new(base),
            None => Err(Error::ConfigError("URL base is missing".to_string())),
        }
    }

    /// Set a query parameter, replacing any previous value for `name`.
    #[must_use]
    pub fn query_param<T>(mut self, name: &str, value: T) -> Self
    where
        T: Display,
    {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(key, _)| key == name) {
            Some(existing) => existing.1 = value,
            None => self.pairs.push((name.to_string(), value)),
        }
        self
    }

    /// Set a query parameter only when a value is present.
    #[must_use]
    pub fn query_param_if_present<T>(self, name: &str, value: Option<T>) -> Self
    where
        T: Display,
    {
        match value {
            Some(value) => self.query_param(name, value),
            None => self,
        }
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Return the collected key/value pairs in rendering order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Render the URL.
    #[must_use]
    pub fn to_uri(&self) -> String {
        if self.pairs.is_empty() {
            return self.base.clone();
        }

        let query = self
            .pairs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{query}", self.base)
    }
}
