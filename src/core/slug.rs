use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::slugify::{is_valid_slug, slugify};
use crate::Result;

/// A string known to match the slug grammar.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slug(String);

impl Slug {
    /// Accept `value` only if it already is a slug.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if is_valid_slug(&value) {
            return Ok(Self(value));
        }

        let suggestion = slugify(&value);
        let suggestion = (!suggestion.is_empty()).then_some(suggestion);
        Err(Error::slug_invalid("slug", value, suggestion))
    }

    /// Normalize arbitrary text. Fails only when nothing usable remains.
    pub fn from_text(value: &str) -> Result<Self> {
        let slug = slugify(value);
        if slug.is_empty() {
            return Err(Error::slug_empty("slug", value));
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for Slug {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Slug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Slug {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Slug {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl Serialize for Slug {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Slug::parse(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn parse_accepts_valid_slug() {
        let slug = Slug::parse("abc-123").unwrap();
        assert_eq!(slug.as_str(), "abc-123");
        assert_eq!(slug.to_string(), "abc-123");
    }

    #[test]
    fn parse_rejects_uppercase_with_suggestion() {
        let err = "Abc-123".parse::<Slug>().unwrap_err();
        assert_eq!(err.code, ErrorCode::SlugInvalid);
        assert_eq!(err.details["slug"], "abc-123");
    }

    #[test]
    fn from_text_normalizes() {
        let slug = Slug::from_text("Hello World").unwrap();
        assert_eq!(&*slug, "hello-world");
        assert_eq!(Slug::from_text("!!!").unwrap_err().code, ErrorCode::SlugEmpty);
    }

    #[test]
    fn deserialize_validates() {
        let ok: Slug = serde_json::from_str("\"team-page\"").unwrap();
        assert_eq!(ok.as_str(), "team-page");

        let bad = serde_json::from_str::<Slug>("\"Team Page\"");
        assert!(bad.is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let slug = Slug::try_from("a-b").unwrap();
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"a-b\"");
    }
}
