//! The residual attribute bag.
//!
//! Components accept any property they don't recognize and forward it,
//! verbatim, as an attribute on their outermost element.
use std::collections::BTreeMap;

use silkenweb::prelude::Element;

use crate::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every property in `props` whose key isn't `recognized`.
    pub fn residual<K, V>(props: impl IntoIterator<Item = (K, V)>, recognized: &[&str]) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            props
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .filter(|(key, _)| !recognized.contains(&key.as_str()))
                .collect(),
        )
    }

    /// Add an attribute, replacing any existing value for `name`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Set every attribute on `elem`.
    pub fn apply<E: Element>(self, elem: E) -> E {
        self.0
            .into_iter()
            .fold(elem, |elem, (name, value)| elem.attribute(&name, value))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::residual(iter, &[])
    }
}

/// Parse a boolean property.
///
/// An empty value means `true`, as it does for an HTML boolean attribute.
pub(crate) fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "" | "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::InvalidBool {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_bool, Attributes};
    use crate::Error;

    #[test]
    fn residual_is_map_difference() {
        let attributes = Attributes::residual(
            [("id", "menu"), ("flat", "true"), ("data-test", "x")],
            &["flat", "split"],
        );

        assert_eq!(
            attributes.iter().collect::<Vec<_>>(),
            [("data-test", "x"), ("id", "menu")]
        );
    }

    #[test]
    fn residual_keeps_values_verbatim() {
        let attributes = Attributes::residual([("title", "  Spaced  ")], &[]);

        assert_eq!(
            attributes.iter().collect::<Vec<_>>(),
            [("title", "  Spaced  ")]
        );
    }

    #[test]
    fn nothing_recognized() {
        let attributes: Attributes = [("a", "1"), ("b", "2")].into_iter().collect();

        assert_eq!(
            attributes.iter().collect::<Vec<_>>(),
            [("a", "1"), ("b", "2")]
        );
    }

    #[test]
    fn with_replaces() {
        let attributes = Attributes::new()
            .with("id", "first")
            .with("title", "Menu")
            .with("id", "second");

        assert_eq!(
            attributes.iter().collect::<Vec<_>>(),
            [("id", "second"), ("title", "Menu")]
        );
    }

    #[test]
    fn everything_recognized() {
        assert!(Attributes::residual([("flat", "")], &["flat"]).is_empty());
    }

    #[test]
    fn booleans() {
        assert_eq!(parse_bool("flat", ""), Ok(true));
        assert_eq!(parse_bool("flat", "true"), Ok(true));
        assert_eq!(parse_bool("flat", "false"), Ok(false));
        assert_eq!(
            parse_bool("flat", "yes"),
            Err(Error::InvalidBool {
                key: "flat".to_owned(),
                value: "yes".to_owned()
            })
        );
    }
}
