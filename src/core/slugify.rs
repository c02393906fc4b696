//! Slug normalization and validation.
//!
//! A slug is one or more lowercase ASCII alphanumeric segments joined by
//! single hyphens (`^[a-z0-9]+(-[a-z0-9]+)*$`). [`slugify`] and
//! [`is_valid_slug`] are total and never fail; the `require_*`,
//! `validate_*` and `unique_*` helpers layer a [`SlugPolicy`] on top for
//! callers that need to reject unusable identifiers.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::Result;

/// Number of candidates `unique_slug` tries before reporting a collision.
pub const MAX_UNIQUE_ATTEMPTS: usize = 1000;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug grammar compiles"));

/// Limits applied by the strict slug helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugPolicy {
    /// Maximum slug length in bytes. `None` means unbounded.
    #[serde(default)]
    pub max_length: Option<usize>,

    /// Words that may not be used as a slug. Entries are compared in
    /// slugified form, so `"New Post"` reserves `new-post`.
    #[serde(default)]
    pub reserved: Vec<String>,
}

impl SlugPolicy {
    pub fn is_reserved(&self, slug: &str) -> bool {
        !slug.is_empty() && self.reserved.iter().any(|word| slugify(word) == slug)
    }

    /// Reject policies that can never produce a slug.
    pub fn validate(&self) -> Result<()> {
        if self.max_length == Some(0) {
            return Err(Error::config_invalid_value(
                "defaults.slug.max_length",
                Some("0".to_string()),
                "Maximum slug length must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Whether `input` already is a slug. The empty string is not.
pub fn is_valid_slug(input: &str) -> bool {
    SLUG_PATTERN.is_match(input)
}

/// Normalize arbitrary text into a slug.
///
/// ASCII letters are lowercased, every run of other characters (hyphens
/// included) becomes one `-`, and the edges are trimmed. Returns an empty
/// string when the input has no ASCII letters or digits.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    // Starts true so a leading separator is never emitted.
    let mut prev_was_dash = true;

    for ch in input.chars() {
        let lowered = ch.to_ascii_lowercase();
        if lowered.is_ascii_lowercase() || lowered.is_ascii_digit() {
            out.push(lowered);
            prev_was_dash = false;
        } else if !prev_was_dash {
            out.push('-');
            prev_was_dash = true;
        }
    }

    if out.ends_with('-') {
        out.pop();
    }

    out
}

/// [`slugify`], then cut to the policy's maximum length.
pub fn slugify_with(input: &str, policy: &SlugPolicy) -> String {
    let slug = slugify(input);
    match policy.max_length {
        Some(max) => truncate_slug(&slug, max),
        None => slug,
    }
}

// Slugs are ASCII, so byte offsets are char boundaries.
fn truncate_slug(slug: &str, max: usize) -> String {
    if slug.len() <= max {
        return slug.to_string();
    }
    slug[..max].trim_end_matches('-').to_string()
}

/// Normalize `value` and fail if the result cannot be used as an identifier.
pub fn require_slug(value: &str, field_name: &str, policy: &SlugPolicy) -> Result<String> {
    let slug = slugify_with(value, policy);

    if slug.is_empty() {
        return Err(Error::slug_empty(field_name, value));
    }

    if policy.is_reserved(&slug) {
        return Err(Error::slug_reserved(field_name, value, slug));
    }

    Ok(slug)
}

/// Check `value` as-is, without normalizing it.
pub fn validate_slug(value: &str, field_name: &str, policy: &SlugPolicy) -> Result<()> {
    if !is_valid_slug(value) {
        let suggestion = slugify_with(value, policy);
        let suggestion = (!suggestion.is_empty()).then_some(suggestion);
        return Err(Error::slug_invalid(field_name, value, suggestion));
    }

    if let Some(max) = policy.max_length {
        if value.len() > max {
            return Err(Error::slug_too_long(field_name, value, max));
        }
    }

    if policy.is_reserved(value) {
        return Err(Error::slug_reserved(field_name, value, value));
    }

    Ok(())
}

/// Derive a slug from `value` that `is_taken` does not claim.
///
/// Tries the plain slug first, then `-2`, `-3`, ... suffixes. With a
/// `max_length`, the base is shortened so the suffixed form still fits.
pub fn unique_slug<F>(
    value: &str,
    field_name: &str,
    policy: &SlugPolicy,
    is_taken: F,
) -> Result<String>
where
    F: Fn(&str) -> bool,
{
    let base = require_slug(value, field_name, policy)?;
    if !is_taken(&base) {
        return Ok(base);
    }

    let mut attempts = 1;
    for n in 2..=MAX_UNIQUE_ATTEMPTS {
        let suffix = format!("-{}", n);
        let stem = match policy.max_length {
            Some(max) => truncate_slug(&base, max.saturating_sub(suffix.len())),
            None => base.clone(),
        };
        if stem.is_empty() {
            break;
        }

        attempts += 1;
        let candidate = format!("{}{}", stem, suffix);
        if policy.is_reserved(&candidate) || is_taken(&candidate) {
            continue;
        }
        return Ok(candidate);
    }

    Err(Error::slug_collision(field_name, value, base, attempts))
}
