// src/domain/tag.rs
use std::collections::HashSet;
use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// Represents a single tag as a value object.
///
/// Tags are free text by convention: trimmed and lowercased, with the
/// comma reserved as the list delimiter. Spaces are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    value: String,
}

impl Tag {
    /// Creates a new Tag with validation
    pub fn new<S: AsRef<str>>(value: S) -> DomainResult<Self> {
        let value = value.as_ref().trim().to_lowercase();

        if value.is_empty() {
            return Err(DomainError::InvalidTag("Tag cannot be empty".to_string()));
        }

        if value.contains(',') {
            return Err(DomainError::InvalidTag(
                "Tag cannot contain commas".to_string(),
            ));
        }

        Ok(Self { value })
    }

    /// Get the tag value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parse a comma-separated tag string into a set of valid Tags
    pub fn parse_tags<S: AsRef<str>>(tag_str: S) -> DomainResult<HashSet<Tag>> {
        let mut result = HashSet::new();

        for tag_value in tag_str
            .as_ref()
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
        {
            result.insert(Tag::new(tag_value)?);
        }

        Ok(result)
    }

    /// Parse an optional string into an `Option<HashSet<Tag>>`.
    ///
    /// Returns `None` if the input is `None` or an empty string.
    pub fn parse_tag_option(
        tag_str: Option<impl AsRef<str>>,
    ) -> DomainResult<Option<HashSet<Tag>>> {
        match tag_str {
            None => Ok(None),
            Some(s) => {
                let s = s.as_ref();
                if s.is_empty() {
                    Ok(None)
                } else {
                    Tag::parse_tags(s).map(Some)
                }
            }
        }
    }

    /// Format a set of tags into a sorted comma-separated string
    pub fn format_tags(tags: &HashSet<Tag>) -> String {
        let mut tag_values: Vec<_> = tags.iter().map(|tag| tag.value.clone()).collect();
        tag_values.sort();
        tag_values.join(",")
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn given_valid_tag_value_when_create_tag_then_returns_tag() {
        let tag = Tag::new("test").unwrap();
        assert_eq!(tag.value(), "test");

        // Should normalize case
        let tag = Tag::new("TEST").unwrap();
        assert_eq!(tag.value(), "test");

        // Should trim whitespace
        let tag = Tag::new(" test ").unwrap();
        assert_eq!(tag.value(), "test");

        // Tags are free text: embedded spaces are fine
        let tag = Tag::new("machine learning").unwrap();
        assert_eq!(tag.value(), "machine learning");
    }

    #[test]
    fn given_invalid_tag_value_when_create_tag_then_returns_error() {
        assert!(Tag::new("").is_err());
        assert!(Tag::new("   ").is_err());
        assert!(Tag::new("test,tag").is_err());
    }

    #[test]
    fn given_tag_string_when_parse_tags_then_returns_tag_set() {
        let tags = Tag::parse_tags("tag1,tag2,tag3").unwrap();
        assert_eq!(tags.len(), 3);
        assert!(tags.contains(&Tag::new("tag1").unwrap()));
        assert!(tags.contains(&Tag::new("tag2").unwrap()));
        assert!(tags.contains(&Tag::new("tag3").unwrap()));

        // Should handle extra commas and whitespace
        let tags = Tag::parse_tags(",tag1,,tag2, tag3,").unwrap();
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn given_tag_set_when_format_then_returns_sorted_string() {
        let mut tags = HashSet::new();
        tags.insert(Tag::new("beta").unwrap());
        tags.insert(Tag::new("alpha").unwrap());

        assert_eq!(Tag::format_tags(&tags), "alpha,beta");

        // Empty set
        assert_eq!(Tag::format_tags(&HashSet::new()), "");
    }

    #[test]
    fn given_none_or_empty_when_parse_tag_option_then_returns_none() {
        assert!(Tag::parse_tag_option(None::<&str>).unwrap().is_none());
        assert!(Tag::parse_tag_option(Some("")).unwrap().is_none());
    }

    #[test]
    fn given_valid_string_when_parse_tag_option_then_returns_tag_set() {
        let tags = Tag::parse_tag_option(Some("rust,cli")).unwrap().unwrap();
        assert_eq!(tags.len(), 2);
    }
}
